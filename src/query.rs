// 🔎 Roster Queries - filter, project, strongest, sort, average
//
// Every query borrows the roster and returns fresh values. Input slices and
// their records are never modified.

use tracing::{debug, trace};

use crate::collation::compare_names;
use crate::config::TiePolicy;
use crate::error::{QueryError, Result};
use crate::record::Pokemon;

// ============================================================================
// FILTER / PROJECT
// ============================================================================

/// Records whose type equals `pokemon_type` exactly, in input order
pub fn filter_by_type(records: &[Pokemon], pokemon_type: &str) -> Vec<Pokemon> {
    let matched: Vec<Pokemon> = records
        .iter()
        .filter(|p| p.is_type(pokemon_type))
        .cloned()
        .collect();

    debug!(
        records = records.len(),
        matched = matched.len(),
        pokemon_type,
        "filter_by_type"
    );
    matched
}

/// Names in input order
pub fn project_names(records: &[Pokemon]) -> Vec<String> {
    records.iter().map(|p| p.name.clone()).collect()
}

// ============================================================================
// STRONGEST
// ============================================================================

/// All records sharing the highest attack, in input order
///
/// Fails with `QueryError::EmptyInput` on an empty roster.
pub fn select_strongest(records: &[Pokemon]) -> Result<Vec<Pokemon>> {
    select_strongest_with(records, TiePolicy::AllTies)
}

/// Strongest selection with an explicit tie policy
pub fn select_strongest_with(records: &[Pokemon], policy: TiePolicy) -> Result<Vec<Pokemon>> {
    let first = records.first().ok_or(QueryError::EmptyInput {
        operation: "select_strongest",
    })?;

    let strongest = match policy {
        TiePolicy::AllTies => {
            let highest = records.iter().map(|p| p.attack).max().unwrap_or(first.attack);
            records
                .iter()
                .filter(|p| p.attack == highest)
                .cloned()
                .collect()
        }
        TiePolicy::FirstOccurrence => {
            // Replace only on strictly greater attack
            let mut best = first;
            for candidate in &records[1..] {
                if candidate.attack > best.attack {
                    best = candidate;
                }
            }
            vec![best.clone()]
        }
    };

    debug!(
        records = records.len(),
        selected = strongest.len(),
        policy = policy.as_str(),
        "select_strongest"
    );
    Ok(strongest)
}

// ============================================================================
// SORT / AVERAGE
// ============================================================================

/// New roster ordered by name (A→Z), stable for equal names
pub fn sort_by_name(records: &[Pokemon]) -> Vec<Pokemon> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_names(&a.name, &b.name));

    trace!(records = sorted.len(), "sort_by_name");
    sorted
}

/// Mean hp, or 0.0 for an empty roster
pub fn average_hp(records: &[Pokemon]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }

    let total: u64 = records.iter().map(|p| u64::from(p.hp)).sum();
    total as f64 / records.len() as f64
}

// ============================================================================
// TESTS
// ============================================================================
