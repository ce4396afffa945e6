use serde::{Deserialize, Serialize};
use std::fmt;

/// Classified result of validating one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationOutcome {
    /// Every check passed.
    Valid,
    /// The payload is absent, empty, not an object, or has a malformed `OrderId`.
    InvalidFormat,
    /// A mandatory top-level field is absent, null or blank.
    MissingRequired,
    /// The order was already processed.
    Duplicate,
    /// Reserved for an external authorization check; never produced by the engine.
    Unauthorized,
    /// One or more business rules were violated.
    BusinessRuleError,
}

impl ValidationOutcome {
    /// Stable upper-case name of the outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationOutcome::Valid => "VALID",
            ValidationOutcome::InvalidFormat => "INVALID_FORMAT",
            ValidationOutcome::MissingRequired => "MISSING_REQUIRED",
            ValidationOutcome::Duplicate => "DUPLICATE",
            ValidationOutcome::Unauthorized => "UNAUTHORIZED",
            ValidationOutcome::BusinessRuleError => "BUSINESS_RULE_ERROR",
        }
    }

    /// True for `Valid`.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// True for the fail-fast outcomes that mean the input cannot be reasoned about.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ValidationOutcome::InvalidFormat
                | ValidationOutcome::MissingRequired
                | ValidationOutcome::Duplicate
        )
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
