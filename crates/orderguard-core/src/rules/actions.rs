use super::BusinessRule;
use crate::collector::ViolationCollector;
use orderguard_model::{fields, ActionType, OrderAction, OrderRecord, ViolationCode};

const SPECIFIC_DATE_POLICY: &str = "SpecificDate";

fn count_of(actions: &[OrderAction<'_>], kind: ActionType) -> usize {
    actions.iter().filter(|a| a.is(kind)).count()
}

/// At most one `CreateSubscription` action.
pub struct SingleCreateSubscription;

impl BusinessRule for SingleCreateSubscription {
    fn name(&self) -> &'static str {
        "SingleCreateSubscription"
    }

    fn description(&self) -> &'static str {
        "at most one CreateSubscription action per order"
    }

    fn codes(&self) -> &'static [ViolationCode] {
        &[ViolationCode::MultipleCreateSubscription]
    }

    fn evaluate(&self, order: &OrderRecord<'_>, violations: &mut ViolationCollector) {
        let count = count_of(&order.actions(), ActionType::CreateSubscription);
        if count > 1 {
            violations.record(
                self.name(),
                ViolationCode::MultipleCreateSubscription,
                format!("only one CreateSubscription action is allowed, found {count}"),
            );
        }
    }
}

/// At most one `CancelSubscription` action.
pub struct SingleCancelSubscription;

impl BusinessRule for SingleCancelSubscription {
    fn name(&self) -> &'static str {
        "SingleCancelSubscription"
    }

    fn description(&self) -> &'static str {
        "at most one CancelSubscription action per order"
    }

    fn codes(&self) -> &'static [ViolationCode] {
        &[ViolationCode::MultipleCancelSubscription]
    }

    fn evaluate(&self, order: &OrderRecord<'_>, violations: &mut ViolationCollector) {
        let count = count_of(&order.actions(), ActionType::CancelSubscription);
        if count > 1 {
            violations.record(
                self.name(),
                ViolationCode::MultipleCancelSubscription,
                format!("only one CancelSubscription action is allowed, found {count}"),
            );
        }
    }
}

/// Cancellations must use the `SpecificDate` policy and carry an effective date.
pub struct CancellationPolicy;

impl BusinessRule for CancellationPolicy {
    fn name(&self) -> &'static str {
        "CancellationPolicy"
    }

    fn description(&self) -> &'static str {
        "CancelSubscription requires cancellationPolicy SpecificDate and a cancellationEffectiveDate"
    }

    fn codes(&self) -> &'static [ViolationCode] {
        &[
            ViolationCode::InvalidCancellationPolicy,
            ViolationCode::MissingCancellationEffectiveDate,
        ]
    }

    fn evaluate(&self, order: &OrderRecord<'_>, violations: &mut ViolationCollector) {
        for action in order.actions() {
            if !action.is(ActionType::CancelSubscription) {
                continue;
            }

            let policy_ok = action
                .field(fields::CANCELLATION_POLICY)
                .filter(|v| !v.is_null())
                .and_then(|v| v.as_str())
                .is_some_and(|p| p.eq_ignore_ascii_case(SPECIFIC_DATE_POLICY));
            if !policy_ok {
                violations.record(
                    self.name(),
                    ViolationCode::InvalidCancellationPolicy,
                    "CancelSubscription requires cancellationPolicy 'SpecificDate'",
                );
            }

            if action.is_blank_text(fields::CANCELLATION_EFFECTIVE_DATE) {
                violations.record(
                    self.name(),
                    ViolationCode::MissingCancellationEffectiveDate,
                    "CancelSubscription requires a cancellationEffectiveDate",
                );
            }
        }
    }
}

/// Without a renewal, every non-blank `triggerDate` must be the same.
pub struct TriggerDateConsistency;

impl BusinessRule for TriggerDateConsistency {
    fn name(&self) -> &'static str {
        "TriggerDateConsistency"
    }

    fn description(&self) -> &'static str {
        "all triggerDate values must match unless a RenewSubscription is present"
    }

    fn codes(&self) -> &'static [ViolationCode] {
        &[ViolationCode::TriggerDateInconsistency]
    }

    fn evaluate(&self, order: &OrderRecord<'_>, violations: &mut ViolationCollector) {
        let actions = order.actions();
        if actions.iter().any(|a| a.is(ActionType::RenewSubscription)) {
            return;
        }

        let mut dates = actions.iter().filter_map(OrderAction::trigger_date);
        let Some(first) = dates.next() else {
            return;
        };
        if let Some(other) = dates.find(|d| *d != first) {
            violations.record(
                self.name(),
                ViolationCode::TriggerDateInconsistency,
                format!(
                    "triggerDate must be identical across actions without RenewSubscription ({first} vs {other})"
                ),
            );
        }
    }
}
