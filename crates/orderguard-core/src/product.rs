use orderguard_model::{fields, OrderAction};

/// Product-code fragments that mark a utility (usage-right) product.
const UTILITY_CODE_TERMS: [&str; 3] = ["utility", "usage", "right"];

/// Product-name fragments that mark a utility product; the first is "right of use".
const UTILITY_NAME_TERMS: [&str; 3] = ["利用権", "usage", "utility"];

/// Returns true when the action's product is a utility product.
///
/// Matching is case-insensitive on `productCode` and `productName`; absent
/// fields simply do not match.
pub fn is_utility_product(action: &OrderAction<'_>) -> bool {
    let matches = |field: &str, terms: &[&str]| {
        action.text(field).is_some_and(|text| {
            let lower = text.to_lowercase();
            terms.iter().any(|term| lower.contains(*term))
        })
    };
    matches(fields::PRODUCT_CODE, &UTILITY_CODE_TERMS)
        || matches(fields::PRODUCT_NAME, &UTILITY_NAME_TERMS)
}
