use crate::collector::ViolationCollector;
use crate::rules::{BusinessRule, BATTERY};
use orderguard_model::{OrderRecord, ValidationOutcome};
use tracing::debug;

/// Runs the full rule battery against a structurally valid order.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleExecutor;

impl RuleExecutor {
    /// Creates an executor over the fixed battery.
    pub fn new() -> Self {
        Self
    }

    /// Rules in execution order.
    pub fn rules(&self) -> &'static [&'static dyn BusinessRule] {
        &BATTERY
    }

    /// Evaluates every rule into `violations` and classifies the result.
    ///
    /// Rules never short-circuit each other: each one runs exactly once,
    /// sequentially, regardless of what earlier rules recorded.
    pub fn execute(
        &self,
        order: &OrderRecord<'_>,
        violations: &mut ViolationCollector,
    ) -> ValidationOutcome {
        for rule in self.rules() {
            let before = violations.len();
            rule.evaluate(order, violations);
            debug!(
                rule = rule.name(),
                raised = violations.len() - before,
                "rule evaluated"
            );
        }

        if violations.has_violations() {
            ValidationOutcome::BusinessRuleError
        } else {
            ValidationOutcome::Valid
        }
    }
}
