use crate::duplicate::DuplicateCheck;
use orderguard_model::order::is_blank;
use orderguard_model::{fields, OrderId, OrderRecord, ValidationOutcome};
use serde_json::Value;
use tracing::{debug, warn};

/// Fields that must be present, non-null and non-blank.
pub const REQUIRED_FIELDS: [&str; 3] = [fields::ORDER_ID, fields::ACCOUNT_ID, fields::SUBSCRIPTIONS];

/// Fail-fast structural checks run before any business rule.
pub struct StructuralGate<'a> {
    duplicates: &'a dyn DuplicateCheck,
}

impl<'a> StructuralGate<'a> {
    /// Creates a gate that consults `duplicates` in its last step.
    pub fn new(duplicates: &'a dyn DuplicateCheck) -> Self {
        Self { duplicates }
    }

    /// Runs format, required-field and duplicate checks in order.
    ///
    /// Returns the first non-`Valid` outcome, or `Valid` when all pass.
    pub fn check(&self, order: &Value) -> ValidationOutcome {
        let steps: [fn(&Self, &Value) -> ValidationOutcome; 3] = [
            Self::check_format,
            Self::check_required_fields,
            Self::check_duplicate,
        ];
        for step in steps {
            let outcome = step(self, order);
            if !outcome.is_valid() {
                return outcome;
            }
        }
        ValidationOutcome::Valid
    }

    /// Rejects absent, empty and non-object payloads.
    pub fn check_format(&self, order: &Value) -> ValidationOutcome {
        let Some(map) = order.as_object() else {
            warn!(kind = json_kind(order), "order payload is not a JSON object");
            return ValidationOutcome::InvalidFormat;
        };
        if map.is_empty() {
            warn!("order payload is empty");
            return ValidationOutcome::InvalidFormat;
        }
        debug!("format check passed");
        ValidationOutcome::Valid
    }

    /// Rejects payloads missing a required field; also enforces the `OrderId` pattern.
    pub fn check_required_fields(&self, order: &Value) -> ValidationOutcome {
        let record = OrderRecord::new(order);
        for field in REQUIRED_FIELDS {
            if record.field(field).map_or(true, is_blank) {
                warn!(field, "required field is missing");
                return ValidationOutcome::MissingRequired;
            }
        }

        match OrderId::parse(record.order_id_text().unwrap_or_default()) {
            Ok(order_id) => debug!(%order_id, "required field check passed"),
            Err(err) => {
                warn!(error = %err, "OrderId has an invalid format");
                return ValidationOutcome::InvalidFormat;
            }
        }
        ValidationOutcome::Valid
    }

    /// Rejects orders the duplicate check has already seen.
    pub fn check_duplicate(&self, order: &Value) -> ValidationOutcome {
        let order_id = OrderRecord::new(order).order_id_text().unwrap_or_default();
        if self.duplicates.is_duplicate(&order_id) {
            warn!(order_id = %order_id, "duplicate order detected");
            return ValidationOutcome::Duplicate;
        }
        debug!("duplicate check passed");
        ValidationOutcome::Valid
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duplicate::{KnownDuplicates, NeverDuplicate};
    use serde_json::json;

    fn base_order() -> Value {
        json!({
            "OrderId": "ORDER-1",
            "AccountId": "ACC-1",
            "subscriptions": []
        })
    }

    #[test]
    fn format_rejects_non_objects_and_empty_objects() {
        let gate = StructuralGate::new(&NeverDuplicate);
        for payload in [json!(null), json!({}), json!([]), json!([1]), json!("x"), json!(7)] {
            assert_eq!(gate.check(&payload), ValidationOutcome::InvalidFormat);
        }
    }

    #[test]
    fn required_fields_reject_absent_null_and_blank() {
        let gate = StructuralGate::new(&NeverDuplicate);
        for field in REQUIRED_FIELDS {
            let mut order = base_order();
            order.as_object_mut().unwrap().remove(field);
            assert_eq!(gate.check(&order), ValidationOutcome::MissingRequired);

            let mut order = base_order();
            order[field] = Value::Null;
            assert_eq!(gate.check(&order), ValidationOutcome::MissingRequired);

            let mut order = base_order();
            order[field] = json!("   ");
            assert_eq!(gate.check(&order), ValidationOutcome::MissingRequired);
        }
    }

    #[test]
    fn ideographic_space_is_not_blank() {
        let gate = StructuralGate::new(&NeverDuplicate);
        let mut order = base_order();
        order["AccountId"] = json!("\u{3000}");
        assert_eq!(gate.check(&order), ValidationOutcome::Valid);
    }

    #[test]
    fn malformed_order_id_is_a_format_error() {
        let gate = StructuralGate::new(&NeverDuplicate);
        let mut order = base_order();
        order["OrderId"] = json!("ORDER 1");
        assert_eq!(gate.check(&order), ValidationOutcome::InvalidFormat);

        order["OrderId"] = json!("x".repeat(51));
        assert_eq!(gate.check(&order), ValidationOutcome::InvalidFormat);

        order["OrderId"] = json!({"nested": true});
        assert_eq!(gate.check(&order), ValidationOutcome::InvalidFormat);
    }

    #[test]
    fn numeric_order_id_uses_its_text() {
        let gate = StructuralGate::new(&NeverDuplicate);
        let mut order = base_order();
        order["OrderId"] = json!(12345);
        assert_eq!(gate.check(&order), ValidationOutcome::Valid);
    }

    #[test]
    fn missing_field_wins_over_malformed_order_id() {
        let gate = StructuralGate::new(&NeverDuplicate);
        let order = json!({"OrderId": "bad id", "subscriptions": []});
        assert_eq!(gate.check(&order), ValidationOutcome::MissingRequired);
    }

    #[test]
    fn duplicate_check_runs_last() {
        let known = KnownDuplicates::new(["ORDER-1"]);
        let gate = StructuralGate::new(&known);
        assert_eq!(gate.check(&base_order()), ValidationOutcome::Duplicate);

        let mut order = base_order();
        order.as_object_mut().unwrap().remove("AccountId");
        assert_eq!(gate.check(&order), ValidationOutcome::MissingRequired);
    }
}
