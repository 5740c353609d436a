// Pokedex Query - Core Library
// Pure queries over in-memory Pokemon rosters

pub mod error;
pub mod record;
pub mod collation;
pub mod config;     // Tie policy for strongest selection
pub mod query;
pub mod validation; // Typed parsing + roster quality checks

// Re-export commonly used types
pub use error::{QueryError, Result};
pub use record::Pokemon;
pub use collation::compare_names;
pub use config::{QueryConfig, TiePolicy};
pub use query::{
    filter_by_type, project_names, select_strongest, select_strongest_with,
    sort_by_name, average_hp,
};
pub use validation::{
    parse_record, parse_roster,
    RecordValidator, QualityReport, ValidationResult, Severity, BatchSummary,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
