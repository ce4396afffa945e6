use orderguard_model::{ValidationOutcome, Violation};
use serde::Serialize;

/// Outcome of one validation call together with the violations behind it.
///
/// `violations` is empty unless the outcome is `BusinessRuleError`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    outcome: ValidationOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    order_id: Option<String>,
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Report for a structural rejection or a clean pass.
    pub fn without_violations(outcome: ValidationOutcome) -> Self {
        Self {
            outcome,
            order_id: None,
            violations: Vec::new(),
        }
    }

    pub(crate) fn new(
        outcome: ValidationOutcome,
        order_id: Option<String>,
        violations: Vec<Violation>,
    ) -> Self {
        Self {
            outcome,
            order_id,
            violations,
        }
    }

    /// Classified outcome.
    pub fn outcome(&self) -> ValidationOutcome {
        self.outcome
    }

    /// Text of the payload's `OrderId` member, whether or not it is well formed.
    pub fn order_id(&self) -> Option<&str> {
        self.order_id.as_deref()
    }

    /// Violations in rule execution order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// True when the order passed every check.
    pub fn is_valid(&self) -> bool {
        self.outcome.is_valid()
    }

    /// Splits the report into its parts.
    pub fn into_parts(self) -> (ValidationOutcome, Option<String>, Vec<Violation>) {
        (self.outcome, self.order_id, self.violations)
    }
}
