//! Data model for subscription order validation.
//!
//! Orders arrive as semi-structured JSON; this crate provides borrowed views
//! over that tree plus the value types a validation run produces. Nothing here
//! decides whether an order is acceptable; that lives in `orderguard-core`.
//!
#![deny(missing_docs)]

/// Validated order identifiers.
pub mod identifiers;
/// Borrowed views over the order JSON tree.
pub mod order;
/// Validation outcome classification.
pub mod outcome;
/// Validation errors for model primitives.
pub mod validation;
/// Business-rule violations and their codes.
pub mod violation;

pub use identifiers::OrderId;
pub use order::{fields, ActionType, OrderAction, OrderJson, OrderRecord};
pub use outcome::ValidationOutcome;
pub use validation::ValidationError;
pub use violation::{Violation, ViolationCode};
