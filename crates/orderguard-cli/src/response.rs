//! Caller-facing response for a validation run.

use orderguard_core::ValidationReport;
use orderguard_model::{ValidationOutcome, Violation};
use serde::Serialize;

/// Top-level response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Response body as returned to the order submitter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

/// Status code plus body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<ValidationOutcome>,
    pub body: ResponseBody,
}

impl OrderResponse {
    /// Maps a validation report onto the response the submitter receives.
    pub fn from_report(report: ValidationReport) -> Self {
        let (outcome, order_id, violations) = report.into_parts();
        let (status_code, error_code, message) = match outcome {
            ValidationOutcome::Valid => {
                return Self {
                    status_code: 200,
                    outcome: Some(outcome),
                    body: ResponseBody {
                        status: ResponseStatus::Success,
                        order_id,
                        error_code: None,
                        message: None,
                        violations: Vec::new(),
                    },
                };
            }
            ValidationOutcome::InvalidFormat => {
                (400, "INVALID_FORMAT", "order payload format is invalid")
            }
            ValidationOutcome::MissingRequired => {
                (400, "MISSING_REQUIRED", "required fields are missing")
            }
            ValidationOutcome::Duplicate => {
                (409, "DUPLICATE_ORDER", "the same order has already been processed")
            }
            ValidationOutcome::Unauthorized => (403, "UNAUTHORIZED", "authentication failed"),
            ValidationOutcome::BusinessRuleError => {
                (422, "BUSINESS_RULE_ERROR", "the order violates business rules")
            }
        };

        Self {
            status_code,
            outcome: Some(outcome),
            body: ResponseBody {
                status: ResponseStatus::Error,
                order_id,
                error_code: Some(error_code),
                message: Some(message.to_string()),
                violations,
            },
        }
    }

    /// Response for a payload that could not be evaluated at all.
    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self {
            status_code: 500,
            outcome: None,
            body: ResponseBody {
                status: ResponseStatus::Error,
                order_id: None,
                error_code: Some("INTERNAL_ERROR"),
                message: Some(detail.into()),
                violations: Vec::new(),
            },
        }
    }

    /// True for a 2xx response.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
