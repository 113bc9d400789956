//! Derived columns.
//!
//! The only business rule: when a sheet has an `Age` column, every record
//! gains an `AgeGroup` column bucketing the age against a threshold.

use crate::model::{Record, RecordSet, Value};
use tracing::debug;

/// Rule computing a label column from a numeric source column.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeGroupRule {
    /// Column to read (`Age`).
    pub source: String,
    /// Column to add (`AgeGroup`).
    pub target: String,
    /// Values at or above this get `at_or_above`.
    pub threshold: f64,
    pub at_or_above: String,
    pub below: String,
}

impl Default for AgeGroupRule {
    fn default() -> Self {
        Self {
            source: "Age".to_string(),
            target: "AgeGroup".to_string(),
            threshold: 30.0,
            at_or_above: "30+".to_string(),
            below: "Under 30".to_string(),
        }
    }
}

impl AgeGroupRule {
    /// Create the default `Age` → `AgeGroup` rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from a different source column.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Write to a different target column.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Set the threshold and both labels.
    pub fn with_threshold(
        mut self,
        threshold: f64,
        at_or_above: impl Into<String>,
        below: impl Into<String>,
    ) -> Self {
        self.threshold = threshold;
        self.at_or_above = at_or_above.into();
        self.below = below.into();
        self
    }

    /// Label for one record.
    ///
    /// Absent, boolean and non-numeric values never reach the threshold.
    pub fn classify(&self, record: &Record) -> &str {
        match record.get(&self.source).and_then(Value::as_number) {
            Some(n) if n >= self.threshold => self.at_or_above.as_str(),
            _ => self.below.as_str(),
        }
    }

    /// Apply the rule. Sets without the source column pass through unchanged.
    pub fn apply(&self, records: RecordSet) -> RecordSet {
        if !records.has_column(&self.source) {
            return records;
        }

        debug!(
            source = %self.source,
            target = %self.target,
            rows = records.len(),
            "deriving column"
        );
        records.generate_column(&self.target, |record| {
            Value::Text(self.classify(record).to_string())
        })
    }
}

/// Apply the default `Age` → `AgeGroup` rule.
pub fn derive_age_group(records: RecordSet) -> RecordSet {
    AgeGroupRule::default().apply(records)
}
