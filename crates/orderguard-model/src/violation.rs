use serde::{Deserialize, Serialize};
use std::fmt;

/// Machine-readable business-rule violation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationCode {
    /// `subscriptions` is missing or not an array.
    MissingSubscriptions,
    /// `subscriptions` does not hold exactly one element.
    InvalidSubscriptionCount,
    /// More than one `CreateSubscription` action.
    MultipleCreateSubscription,
    /// More than one `CancelSubscription` action.
    MultipleCancelSubscription,
    /// A cancel action does not use the `SpecificDate` policy.
    InvalidCancellationPolicy,
    /// A cancel action has no effective date.
    MissingCancellationEffectiveDate,
    /// Trigger dates differ while no renewal is present.
    TriggerDateInconsistency,
    /// A utility product is being removed.
    UtilityRemoveProductForbidden,
    /// A utility product quantity is being decreased.
    UtilityQuantityDecreaseForbidden,
    /// `schedulingOptions` is set.
    SchedulingOptionsForbidden,
    /// `orderLineItems` is set.
    OrderLineItemsForbidden,
}

impl ViolationCode {
    /// Stable upper-case code string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationCode::MissingSubscriptions => "MISSING_SUBSCRIPTIONS",
            ViolationCode::InvalidSubscriptionCount => "INVALID_SUBSCRIPTION_COUNT",
            ViolationCode::MultipleCreateSubscription => "MULTIPLE_CREATE_SUBSCRIPTION",
            ViolationCode::MultipleCancelSubscription => "MULTIPLE_CANCEL_SUBSCRIPTION",
            ViolationCode::InvalidCancellationPolicy => "INVALID_CANCELLATION_POLICY",
            ViolationCode::MissingCancellationEffectiveDate => {
                "MISSING_CANCELLATION_EFFECTIVE_DATE"
            }
            ViolationCode::TriggerDateInconsistency => "TRIGGER_DATE_INCONSISTENCY",
            ViolationCode::UtilityRemoveProductForbidden => "UTILITY_REMOVE_PRODUCT_FORBIDDEN",
            ViolationCode::UtilityQuantityDecreaseForbidden => {
                "UTILITY_QUANTITY_DECREASE_FORBIDDEN"
            }
            ViolationCode::SchedulingOptionsForbidden => "SCHEDULING_OPTIONS_FORBIDDEN",
            ViolationCode::OrderLineItemsForbidden => "ORDER_LINE_ITEMS_FORBIDDEN",
        }
    }
}

impl fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded business-rule failure.
///
/// Fields are private so a violation cannot change after it is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    rule_name: String,
    code: ViolationCode,
    message: String,
}

impl Violation {
    /// Creates a violation.
    pub fn new(
        rule_name: impl Into<String>,
        code: ViolationCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_name: rule_name.into(),
            code,
            message: message.into(),
        }
    }

    /// Name of the rule that raised this violation.
    pub fn rule_name(&self) -> &str {
        &self.rule_name
    }

    /// Machine-readable code.
    pub fn code(&self) -> ViolationCode {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.rule_name, self.code, self.message)
    }
}
