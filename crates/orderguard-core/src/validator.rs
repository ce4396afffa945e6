use crate::collector::ViolationCollector;
use crate::duplicate::{DuplicateCheck, KnownDuplicates};
use crate::errors::CoreError;
use crate::executor::RuleExecutor;
use crate::gate::StructuralGate;
use crate::report::ValidationReport;
use orderguard_model::{OrderJson, OrderRecord, ValidationOutcome};
use serde_json::Value;
use std::borrow::Cow;
use tracing::{debug, info, warn};

/// Validates subscription orders.
///
/// Holds no per-call state; one validator can serve any number of calls,
/// including from several threads at once.
pub struct OrderValidator {
    duplicates: Box<dyn DuplicateCheck>,
    executor: RuleExecutor,
}

impl OrderValidator {
    /// Creates a validator that treats only the sentinel order id as a duplicate.
    pub fn new() -> Self {
        Self::with_duplicate_check(KnownDuplicates::default())
    }

    /// Creates a validator with a caller-supplied duplicate check.
    pub fn with_duplicate_check(duplicates: impl DuplicateCheck + 'static) -> Self {
        Self {
            duplicates: Box::new(duplicates),
            executor: RuleExecutor::new(),
        }
    }

    /// Validates one order payload.
    pub fn validate_order(&self, order: &Value) -> ValidationReport {
        debug!("order validation started");

        let record = OrderRecord::new(order);
        let order_id = record.order_id_text().map(Cow::into_owned);

        let gate = StructuralGate::new(self.duplicates.as_ref());
        let outcome = gate.check(order);
        if !outcome.is_valid() {
            debug_assert!(outcome.is_structural(), "gate produced {outcome}");
            info!(outcome = %outcome, "order rejected by structural gate");
            return ValidationReport::new(outcome, order_id, Vec::new());
        }

        let mut violations = ViolationCollector::new();
        debug!(rules = self.executor.rules().len(), "running business rules");
        let outcome = self.executor.execute(&record, &mut violations);

        if outcome == ValidationOutcome::BusinessRuleError {
            warn!(
                count = violations.len(),
                "business rule violations detected"
            );
            for violation in violations.iter() {
                warn!(%violation, "violation");
            }
        } else {
            info!("order validation passed");
        }

        ValidationReport::new(outcome, order_id, violations.into_violations())
    }

    /// Parses `payload` as JSON and validates it.
    pub fn validate_str(&self, payload: &str) -> Result<ValidationReport, CoreError> {
        let order: OrderJson = serde_json::from_str(payload)?;
        Ok(self.validate_order(&order))
    }
}

impl Default for OrderValidator {
    fn default() -> Self {
        Self::new()
    }
}
