use super::BusinessRule;
use crate::collector::ViolationCollector;
use crate::product::is_utility_product;
use orderguard_model::{fields, ActionType, OrderRecord, ViolationCode};

/// Utility products cannot be removed.
pub struct UtilityRemoveProduct;

impl BusinessRule for UtilityRemoveProduct {
    fn name(&self) -> &'static str {
        "UtilityRemoveProduct"
    }

    fn description(&self) -> &'static str {
        "RemoveProduct is not allowed for utility products"
    }

    fn codes(&self) -> &'static [ViolationCode] {
        &[ViolationCode::UtilityRemoveProductForbidden]
    }

    fn evaluate(&self, order: &OrderRecord<'_>, violations: &mut ViolationCollector) {
        for action in order.actions() {
            if action.is(ActionType::RemoveProduct) && is_utility_product(&action) {
                let product = action
                    .text(fields::PRODUCT_CODE)
                    .or_else(|| action.text(fields::PRODUCT_NAME))
                    .unwrap_or_default();
                violations.record(
                    self.name(),
                    ViolationCode::UtilityRemoveProductForbidden,
                    format!("RemoveProduct is not allowed for utility product '{product}'"),
                );
            }
        }
    }
}

/// Utility product quantities cannot go down.
pub struct UtilityQuantityDecrease;

impl BusinessRule for UtilityQuantityDecrease {
    fn name(&self) -> &'static str {
        "UtilityQuantityDecrease"
    }

    fn description(&self) -> &'static str {
        "UpdateProduct must not decrease the quantity of a utility product"
    }

    fn codes(&self) -> &'static [ViolationCode] {
        &[ViolationCode::UtilityQuantityDecreaseForbidden]
    }

    fn evaluate(&self, order: &OrderRecord<'_>, violations: &mut ViolationCollector) {
        for action in order.actions() {
            if !action.is(ActionType::UpdateProduct) || !is_utility_product(&action) {
                continue;
            }
            let (Some(quantity), Some(original)) = (
                action.numeric(fields::QUANTITY),
                action.numeric(fields::ORIGINAL_QUANTITY),
            ) else {
                continue;
            };
            if quantity < original {
                violations.record(
                    self.name(),
                    ViolationCode::UtilityQuantityDecreaseForbidden,
                    format!(
                        "utility product quantity must not decrease ({original} -> {quantity})"
                    ),
                );
            }
        }
    }
}
