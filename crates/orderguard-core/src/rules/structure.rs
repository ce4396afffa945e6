use super::BusinessRule;
use crate::collector::ViolationCollector;
use orderguard_model::{fields, OrderRecord, ViolationCode};
use serde_json::Value;

/// `subscriptions` must be an array holding exactly one subscription.
pub struct SingleSubscription;

impl BusinessRule for SingleSubscription {
    fn name(&self) -> &'static str {
        "SingleSubscription"
    }

    fn description(&self) -> &'static str {
        "subscriptions must be an array with exactly one element"
    }

    fn codes(&self) -> &'static [ViolationCode] {
        &[
            ViolationCode::MissingSubscriptions,
            ViolationCode::InvalidSubscriptionCount,
        ]
    }

    fn evaluate(&self, order: &OrderRecord<'_>, violations: &mut ViolationCollector) {
        let Some(subscriptions) = order.subscriptions().and_then(Value::as_array) else {
            violations.record(
                self.name(),
                ViolationCode::MissingSubscriptions,
                "subscriptions array not found",
            );
            return;
        };
        if subscriptions.len() != 1 {
            violations.record(
                self.name(),
                ViolationCode::InvalidSubscriptionCount,
                format!(
                    "subscriptions must contain exactly one element, found {}",
                    subscriptions.len()
                ),
            );
        }
    }
}

/// `schedulingOptions` must not be set.
pub struct SchedulingOptions;

impl BusinessRule for SchedulingOptions {
    fn name(&self) -> &'static str {
        "SchedulingOptions"
    }

    fn description(&self) -> &'static str {
        "schedulingOptions must not be set"
    }

    fn codes(&self) -> &'static [ViolationCode] {
        &[ViolationCode::SchedulingOptionsForbidden]
    }

    fn evaluate(&self, order: &OrderRecord<'_>, violations: &mut ViolationCollector) {
        if order.has_value(fields::SCHEDULING_OPTIONS) {
            violations.record(
                self.name(),
                ViolationCode::SchedulingOptionsForbidden,
                "schedulingOptions must not be set",
            );
        }
    }
}

/// `orderLineItems` must not be set.
pub struct OrderLineItems;

impl BusinessRule for OrderLineItems {
    fn name(&self) -> &'static str {
        "OrderLineItems"
    }

    fn description(&self) -> &'static str {
        "orderLineItems must not be set"
    }

    fn codes(&self) -> &'static [ViolationCode] {
        &[ViolationCode::OrderLineItemsForbidden]
    }

    fn evaluate(&self, order: &OrderRecord<'_>, violations: &mut ViolationCollector) {
        if order.has_value(fields::ORDER_LINE_ITEMS) {
            violations.record(
                self.name(),
                ViolationCode::OrderLineItemsForbidden,
                "orderLineItems must not be set",
            );
        }
    }
}
