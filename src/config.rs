// ⚙️ Query Configuration - tie policy for strongest selection

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};

use crate::query::select_strongest_with;
use crate::record::Pokemon;

// ============================================================================
// TIE POLICY
// ============================================================================

/// How `select_strongest` treats several records sharing the top attack
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// Every record with the maximum attack, in input order
    #[default]
    AllTies,

    /// Only the first record reaching the maximum (single scan)
    FirstOccurrence,
}

impl TiePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TiePolicy::AllTies => "all_ties",
            TiePolicy::FirstOccurrence => "first_occurrence",
        }
    }
}

// ============================================================================
// QUERY CONFIG
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub tie_policy: TiePolicy,
}

impl QueryConfig {
    pub fn new(tie_policy: TiePolicy) -> Self {
        QueryConfig { tie_policy }
    }

    /// Build config from a JSON document held in memory
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse query config JSON")
    }

    /// Strongest selection under the configured tie policy
    pub fn select_strongest(&self, records: &[Pokemon]) -> crate::error::Result<Vec<Pokemon>> {
        select_strongest_with(records, self.tie_policy)
    }
}

// ============================================================================
// TESTS
// ============================================================================
