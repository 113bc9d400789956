//! Pipeline options.

use crate::derive::AgeGroupRule;

/// Options for turning a workbook buffer into records.
#[derive(Debug, Clone)]
pub struct ViewerOptions {
    /// Apply the derived column rule
    pub derive: bool,

    /// Rule used when `derive` is set
    pub rule: AgeGroupRule,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            derive: true,
            rule: AgeGroupRule::default(),
        }
    }
}

impl ViewerOptions {
    /// Create new viewer options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the derived column.
    pub fn with_derive(mut self, derive: bool) -> Self {
        self.derive = derive;
        self
    }

    /// Replace the derived column rule.
    pub fn with_rule(mut self, rule: AgeGroupRule) -> Self {
        self.rule = rule;
        self
    }
}
