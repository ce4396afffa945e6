use serde_json::Value;
use std::borrow::Cow;

/// Order JSON payload type.
///
/// Orders are kept as the tree the caller parsed; validation only ever borrows
/// from it through [`OrderRecord`] and [`OrderAction`].
pub type OrderJson = Value;

/// Field names read from the order tree.
pub mod fields {
    /// Top-level order identifier.
    pub const ORDER_ID: &str = "OrderId";
    /// Top-level account identifier.
    pub const ACCOUNT_ID: &str = "AccountId";
    /// Top-level subscription array.
    pub const SUBSCRIPTIONS: &str = "subscriptions";
    /// Per-subscription action array.
    pub const ORDER_ACTIONS: &str = "OrderActions";
    /// Top-level scheduling options (must not be set).
    pub const SCHEDULING_OPTIONS: &str = "schedulingOptions";
    /// Top-level order line items (must not be set).
    pub const ORDER_LINE_ITEMS: &str = "orderLineItems";
    /// Action discriminator.
    pub const TYPE: &str = "type";
    /// Cancellation policy of a cancel action.
    pub const CANCELLATION_POLICY: &str = "cancellationPolicy";
    /// Effective date of a cancel action.
    pub const CANCELLATION_EFFECTIVE_DATE: &str = "cancellationEffectiveDate";
    /// Trigger date of any action.
    pub const TRIGGER_DATE: &str = "triggerDate";
    /// Product code of a product action.
    pub const PRODUCT_CODE: &str = "productCode";
    /// Product name of a product action.
    pub const PRODUCT_NAME: &str = "productName";
    /// Requested quantity of an update action.
    pub const QUANTITY: &str = "quantity";
    /// Quantity before an update action.
    pub const ORIGINAL_QUANTITY: &str = "originalQuantity";
}

/// Text rendering of a JSON scalar.
///
/// Strings are returned as-is, numbers and booleans in their JSON form;
/// `null`, arrays and objects render as empty text.
pub fn text_of(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Bool(b) => Cow::Owned(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Cow::Borrowed(""),
    }
}

/// Strips leading and trailing ASCII control characters and spaces.
///
/// Only code points up to U+0020 are removed; other Unicode whitespace such
/// as U+3000 is kept as content.
pub fn trim_text(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// Returns true for `null` and for strings that are empty after [`trim_text`].
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => trim_text(s).is_empty(),
        _ => false,
    }
}

/// Reads a finite decimal number from a JSON number or a numeric string.
pub fn numeric_of(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => trim_text(s).parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Order action discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    /// `CreateSubscription`
    CreateSubscription,
    /// `CancelSubscription`
    CancelSubscription,
    /// `RenewSubscription`
    RenewSubscription,
    /// `RemoveProduct`
    RemoveProduct,
    /// `UpdateProduct`
    UpdateProduct,
    /// `AddProduct`
    AddProduct,
    /// Any other or missing discriminator.
    Other,
}

impl ActionType {
    /// Maps a `type` value to its discriminator; matching is case-sensitive.
    pub fn from_type(value: &str) -> Self {
        match value {
            "CreateSubscription" => ActionType::CreateSubscription,
            "CancelSubscription" => ActionType::CancelSubscription,
            "RenewSubscription" => ActionType::RenewSubscription,
            "RemoveProduct" => ActionType::RemoveProduct,
            "UpdateProduct" => ActionType::UpdateProduct,
            "AddProduct" => ActionType::AddProduct,
            _ => ActionType::Other,
        }
    }
}

/// Borrowed view over one order payload.
#[derive(Debug, Clone, Copy)]
pub struct OrderRecord<'a> {
    value: &'a Value,
}

impl<'a> OrderRecord<'a> {
    /// Wraps a parsed payload; any JSON value is accepted.
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Top-level member, if the payload is an object and has it.
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        self.value.get(name)
    }

    /// True when the member exists and is not `null`.
    pub fn has_value(&self, name: &str) -> bool {
        self.field(name).is_some_and(|v| !v.is_null())
    }

    /// Text of the `OrderId` member, if present.
    pub fn order_id_text(&self) -> Option<Cow<'a, str>> {
        self.field(fields::ORDER_ID).map(text_of)
    }

    /// The `subscriptions` member.
    pub fn subscriptions(&self) -> Option<&'a Value> {
        self.field(fields::SUBSCRIPTIONS)
    }

    /// First element of `subscriptions` when it is a non-empty array.
    pub fn first_subscription(&self) -> Option<&'a Value> {
        self.subscriptions()?.as_array()?.first()
    }

    /// Actions of the first subscription.
    ///
    /// Empty when there is no first subscription or its `OrderActions` member
    /// is missing or not an array.
    pub fn actions(&self) -> Vec<OrderAction<'a>> {
        self.first_subscription()
            .and_then(|sub| sub.get(fields::ORDER_ACTIONS))
            .and_then(Value::as_array)
            .map(|items| items.iter().map(OrderAction::new).collect())
            .unwrap_or_default()
    }
}

/// Borrowed view over one `OrderActions` entry.
#[derive(Debug, Clone, Copy)]
pub struct OrderAction<'a> {
    value: &'a Value,
}

impl<'a> OrderAction<'a> {
    /// Wraps one action entry.
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Member of the action, if it is an object and has it.
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        self.value.get(name)
    }

    /// Text of a member, if present.
    pub fn text(&self, name: &str) -> Option<Cow<'a, str>> {
        self.field(name).map(text_of)
    }

    /// Discriminator from the `type` member.
    pub fn action_type(&self) -> ActionType {
        self.text(fields::TYPE)
            .map(|t| ActionType::from_type(&t))
            .unwrap_or(ActionType::Other)
    }

    /// Returns true when the action has the given discriminator.
    pub fn is(&self, kind: ActionType) -> bool {
        self.action_type() == kind
    }

    /// Trimmed, non-blank `triggerDate`.
    pub fn trigger_date(&self) -> Option<String> {
        let value = self.field(fields::TRIGGER_DATE)?;
        if value.is_null() {
            return None;
        }
        let text = text_of(value);
        let trimmed = trim_text(&text);
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// True when the member is absent or its text is empty after [`trim_text`].
    ///
    /// Objects and arrays have empty text, so they count as blank.
    pub fn is_blank_text(&self, name: &str) -> bool {
        self.text(name).map_or(true, |t| trim_text(&t).is_empty())
    }

    /// Numeric member, when present and parseable as a finite decimal.
    pub fn numeric(&self, name: &str) -> Option<f64> {
        self.field(name).and_then(numeric_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_of_renders_scalars_and_blanks_containers() {
        assert_eq!(text_of(&json!("abc")), "abc");
        assert_eq!(text_of(&json!(42)), "42");
        assert_eq!(text_of(&json!(true)), "true");
        assert_eq!(text_of(&json!(null)), "");
        assert_eq!(text_of(&json!({"a": 1})), "");
    }

    #[test]
    fn numeric_of_accepts_numbers_and_numeric_strings() {
        assert_eq!(numeric_of(&json!(3)), Some(3.0));
        assert_eq!(numeric_of(&json!(" 2.5 ")), Some(2.5));
        assert_eq!(numeric_of(&json!("ten")), None);
        assert_eq!(numeric_of(&json!("NaN")), None);
        assert_eq!(numeric_of(&json!(null)), None);
    }

    #[test]
    fn first_subscription_requires_non_empty_array() {
        let order = json!({"subscriptions": []});
        assert!(OrderRecord::new(&order).first_subscription().is_none());

        let order = json!({"subscriptions": "sub"});
        assert!(OrderRecord::new(&order).first_subscription().is_none());

        let order = json!({"subscriptions": [{"OrderActions": [{"type": "AddProduct"}]}]});
        let record = OrderRecord::new(&order);
        let actions = record.actions();
        assert_eq!(actions.len(), 1);
        assert!(actions[0].is(ActionType::AddProduct));
    }

    #[test]
    fn action_type_is_case_sensitive() {
        let action = json!({"type": "cancelsubscription"});
        assert_eq!(OrderAction::new(&action).action_type(), ActionType::Other);
        let action = json!({});
        assert_eq!(OrderAction::new(&action).action_type(), ActionType::Other);
    }

    #[test]
    fn trim_text_keeps_non_ascii_whitespace() {
        assert_eq!(trim_text(" \t\n abc \r"), "abc");
        assert_eq!(trim_text("\u{3000}"), "\u{3000}");
        assert!(!is_blank(&json!("\u{3000}")));
        assert!(is_blank(&json!(" \t ")));
    }

    #[test]
    fn blank_text_covers_missing_null_and_containers() {
        let action = json!({"a": null, "b": {}, "c": [], "d": " ", "e": "2025-01-01", "f": 0});
        let action = OrderAction::new(&action);
        for name in ["a", "b", "c", "d", "missing"] {
            assert!(action.is_blank_text(name), "{name}");
        }
        assert!(!action.is_blank_text("e"));
        assert!(!action.is_blank_text("f"));
    }

    #[test]
    fn trigger_date_is_trimmed_and_blank_is_absent() {
        let action = json!({"triggerDate": " 2025-01-01 "});
        assert_eq!(
            OrderAction::new(&action).trigger_date().as_deref(),
            Some("2025-01-01")
        );
        let action = json!({"triggerDate": "   "});
        assert_eq!(OrderAction::new(&action).trigger_date(), None);
        let action = json!({"triggerDate": null});
        assert_eq!(OrderAction::new(&action).trigger_date(), None);
    }
}
