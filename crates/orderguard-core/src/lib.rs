//! Validation engine for subscription change orders.
//!
//! This crate provides:
//! - A structural gate (format, required fields, duplicate) that stops at the first failure
//! - A fixed battery of business rules that always runs to completion
//! - A per-call violation collector and a bundled [`ValidationReport`]
//!
//! Core invariants:
//! - Validation is a pure function of the order and the injected duplicate check
//! - A structural rejection never carries business-rule violations
//! - Violations appear in rule execution order; the order is part of the contract
//!
//! ## Quick Start
//!
//! ```rust
//! use orderguard_core::OrderValidator;
//! use orderguard_model::ValidationOutcome;
//! use serde_json::json;
//!
//! let order = json!({
//!     "OrderId": "ORDER-12345",
//!     "AccountId": "ACC-1",
//!     "subscriptions": [{ "OrderActions": [{ "type": "CreateSubscription" }] }]
//! });
//!
//! let report = OrderValidator::new().validate_order(&order);
//! assert_eq!(report.outcome(), ValidationOutcome::Valid);
//! ```
//!
#![deny(missing_docs)]

/// Per-call violation accumulation.
pub mod collector;
/// Duplicate-order detection seam.
pub mod duplicate;
/// Error types for engine entry points.
pub mod errors;
/// Business-rule battery runner.
pub mod executor;
/// Fail-fast structural checks.
pub mod gate;
/// Utility-product classification.
pub mod product;
/// Bundled validation result.
pub mod report;
/// Individual business rules.
pub mod rules;
/// Top-level validation entry point.
pub mod validator;

pub use collector::ViolationCollector;
pub use duplicate::{DuplicateCheck, KnownDuplicates, NeverDuplicate};
pub use errors::CoreError;
pub use executor::RuleExecutor;
pub use gate::StructuralGate;
pub use product::is_utility_product;
pub use report::ValidationReport;
pub use rules::BusinessRule;
pub use validator::OrderValidator;
