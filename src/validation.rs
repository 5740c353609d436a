// ✅ Record Validation - typed parsing + roster quality checks
//
// Dynamic (JSON-shaped) records become `Pokemon` only through `parse_record`.
// `RecordValidator` then scores already-typed records, flagging entries that
// parse fine but would make queries misleading (blank names, unknown types).

use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::QueryError;
use crate::record::Pokemon;

// ============================================================================
// TYPED PARSING
// ============================================================================

/// Build a `Pokemon` from a dynamic value
///
/// Required: `name`, `type` (strings), `hp`, `attack` (non-negative integers).
/// Optional: `id`, `defense` (default 0).
pub fn parse_record(value: &Value) -> crate::error::Result<Pokemon> {
    let object = value
        .as_object()
        .ok_or_else(|| QueryError::malformed("record", "expected a JSON object"))?;

    let name = required_str(object, "name")?;
    let pokemon_type = required_str(object, "type")?;
    let hp = required_u32(object, "hp")?;
    let attack = required_u32(object, "attack")?;
    let id = optional_u32(object, "id")?;
    let defense = optional_u32(object, "defense")?;

    Ok(Pokemon {
        id,
        name,
        pokemon_type,
        hp,
        attack,
        defense,
    })
}

/// Parse a JSON array of records held in memory
pub fn parse_roster(json: &str) -> Result<Vec<Pokemon>> {
    let value: Value = serde_json::from_str(json).context("Failed to parse roster JSON")?;

    let entries = value
        .as_array()
        .ok_or_else(|| QueryError::malformed("roster", "expected a JSON array"))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            parse_record(entry).with_context(|| format!("Invalid record at index {}", index))
        })
        .collect()
}

fn required_str(object: &serde_json::Map<String, Value>, field: &str) -> crate::error::Result<String> {
    match object.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(QueryError::malformed(field, "expected a string")),
        None => Err(QueryError::malformed(field, "missing")),
    }
}

fn required_u32(object: &serde_json::Map<String, Value>, field: &str) -> crate::error::Result<u32> {
    let value = object
        .get(field)
        .ok_or_else(|| QueryError::malformed(field, "missing"))?;
    to_u32(field, value)
}

fn optional_u32(object: &serde_json::Map<String, Value>, field: &str) -> crate::error::Result<u32> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(0),
        Some(value) => to_u32(field, value),
    }
}

fn to_u32(field: &str, value: &Value) -> crate::error::Result<u32> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| QueryError::malformed(field, "expected a non-negative integer"))
}

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Severity {
    Critical, // Record breaks a query (blank filter or sort key)
    Warning,  // Record is usable but suspicious
    Info,     // Record is valid but nonstandard
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub passed: bool,
    pub rule_name: String,
    pub field: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationResult {
    pub fn pass(rule_name: &str, field: &str, message: &str) -> Self {
        ValidationResult {
            passed: true,
            rule_name: rule_name.to_string(),
            field: field.to_string(),
            message: message.to_string(),
            severity: Severity::Info,
        }
    }

    pub fn fail(rule_name: &str, field: &str, message: &str, severity: Severity) -> Self {
        ValidationResult {
            passed: false,
            rule_name: rule_name.to_string(),
            field: field.to_string(),
            message: message.to_string(),
            severity,
        }
    }
}

// ============================================================================
// QUALITY REPORT
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    pub record_id: u32,
    pub record_name: String,
    pub validations: Vec<ValidationResult>,
    pub passed_count: usize,
    pub failed_count: usize,
}

impl QualityReport {
    pub fn issues(&self) -> impl Iterator<Item = &ValidationResult> {
        self.validations.iter().filter(|v| !v.passed)
    }

    pub fn has_critical_issues(&self) -> bool {
        self.issues().any(|v| v.severity == Severity::Critical)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} (#{}): {}/{} checks passed, {} critical",
            self.record_name,
            self.record_id,
            self.passed_count,
            self.validations.len(),
            self.issues()
                .filter(|v| v.severity == Severity::Critical)
                .count()
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_records: usize,
    pub clean_count: usize,
    pub critical_count: usize,
}

impl BatchSummary {
    pub fn summary(&self) -> String {
        format!(
            "Records: {}, clean: {}, with critical issues: {}",
            self.total_records, self.clean_count, self.critical_count
        )
    }
}

// ============================================================================
// RECORD VALIDATOR
// ============================================================================

pub struct RecordValidator {
    /// Canonical lowercase type tags
    known_types: Vec<String>,
}

impl RecordValidator {
    pub fn new() -> Self {
        RecordValidator {
            known_types: [
                "normal", "fire", "water", "grass", "electric", "ice", "fighting", "poison",
                "ground", "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark",
                "steel", "fairy",
            ]
            .iter()
            .map(|t| t.to_string())
            .collect(),
        }
    }

    pub fn validate(&self, record: &Pokemon) -> QualityReport {
        let validations = vec![
            self.validate_name(&record.name),
            self.validate_type(&record.pokemon_type),
            self.validate_hp(record.hp),
        ];

        let passed_count = validations.iter().filter(|v| v.passed).count();
        let failed_count = validations.len() - passed_count;

        QualityReport {
            record_id: record.id,
            record_name: record.name.clone(),
            validations,
            passed_count,
            failed_count,
        }
    }

    pub fn validate_batch(&self, records: &[Pokemon]) -> Vec<QualityReport> {
        records.iter().map(|r| self.validate(r)).collect()
    }

    pub fn batch_summary(&self, reports: &[QualityReport]) -> BatchSummary {
        BatchSummary {
            total_records: reports.len(),
            clean_count: reports.iter().filter(|r| r.failed_count == 0).count(),
            critical_count: reports.iter().filter(|r| r.has_critical_issues()).count(),
        }
    }

    // ========================================================================
    // VALIDATION RULES
    // ========================================================================

    fn validate_name(&self, name: &str) -> ValidationResult {
        if name.trim().is_empty() {
            return ValidationResult::fail("name_empty", "name", "Name is empty", Severity::Critical);
        }

        ValidationResult::pass("name_present", "name", &format!("Name present: {}", name))
    }

    fn validate_type(&self, pokemon_type: &str) -> ValidationResult {
        if pokemon_type.is_empty() {
            return ValidationResult::fail("type_empty", "type", "Type is empty", Severity::Critical);
        }

        if !self.known_types.iter().any(|t| t == pokemon_type) {
            return ValidationResult::fail(
                "type_unknown",
                "type",
                &format!("Unknown type: {}", pokemon_type),
                Severity::Info,
            );
        }

        ValidationResult::pass("type_known", "type", &format!("Type is known: {}", pokemon_type))
    }

    fn validate_hp(&self, hp: u32) -> ValidationResult {
        if hp == 0 {
            return ValidationResult::fail("hp_zero", "hp", "HP is zero", Severity::Warning);
        }

        ValidationResult::pass("hp_positive", "hp", &format!("HP is {}", hp))
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
