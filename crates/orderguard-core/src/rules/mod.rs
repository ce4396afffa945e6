//! Business rules evaluated after the structural gate passes.
//!
//! Rules are grouped by concern only for readability. Execution order is the
//! order of [`BATTERY`], and every rule runs exactly once per validation call.

use crate::collector::ViolationCollector;
use orderguard_model::{OrderRecord, ViolationCode};

/// Rules over the order actions of the first subscription.
pub mod actions;
/// Rules over products touched by the order.
pub mod products;
/// Rules over the top-level order structure.
pub mod structure;

pub use actions::{
    CancellationPolicy, SingleCancelSubscription, SingleCreateSubscription,
    TriggerDateConsistency,
};
pub use products::{UtilityQuantityDecrease, UtilityRemoveProduct};
pub use structure::{OrderLineItems, SchedulingOptions, SingleSubscription};

/// One independent business rule.
///
/// Implementations read the order and record violations; they never stop the
/// battery and never modify the order.
pub trait BusinessRule: Send + Sync {
    /// Stable rule name recorded on every violation it raises.
    fn name(&self) -> &'static str;

    /// One-line description of what the rule enforces.
    fn description(&self) -> &'static str;

    /// Codes this rule can raise.
    fn codes(&self) -> &'static [ViolationCode];

    /// Evaluates the rule, appending zero or more violations.
    fn evaluate(&self, order: &OrderRecord<'_>, violations: &mut ViolationCollector);
}

/// The fixed rule battery in execution order.
pub static BATTERY: [&dyn BusinessRule; 9] = [
    &SingleSubscription,
    &SingleCreateSubscription,
    &SingleCancelSubscription,
    &CancellationPolicy,
    &TriggerDateConsistency,
    &UtilityRemoveProduct,
    &UtilityQuantityDecrease,
    &SchedulingOptions,
    &OrderLineItems,
];
