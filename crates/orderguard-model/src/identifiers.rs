use crate::validation::ValidationError;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

const ORDER_ID_PATTERN: &str = r"^[A-Za-z0-9_-]{1,50}$";

fn order_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ORDER_ID_PATTERN).expect("invalid regex"))
}

/// Order identifier (pattern: `[A-Za-z0-9_-]{1,50}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    /// Parses a validated identifier from a string.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !order_id_regex().is_match(&s) {
            return Err(ValidationError::PatternMismatch {
                field: "OrderId",
                value: s,
            });
        }
        Ok(Self(s))
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_digits_dash_and_underscore() {
        assert_eq!(OrderId::parse("ORDER-12345").unwrap().to_string(), "ORDER-12345");
        assert!(OrderId::parse("a_b-C_9").is_ok());
        assert!(OrderId::parse("x".repeat(50)).is_ok());
    }

    #[test]
    fn rejects_out_of_pattern_values() {
        assert!(OrderId::parse("").is_err());
        assert!(OrderId::parse("x".repeat(51)).is_err());
        assert!(OrderId::parse("ORDER 1").is_err());
        assert!(OrderId::parse("ORDER#1").is_err());
        assert!(OrderId::parse("注文-1").is_err());
    }

    #[test]
    fn mismatch_reports_field_and_value() {
        let err = OrderId::parse("bad id").unwrap_err();
        assert_eq!(
            err,
            ValidationError::PatternMismatch {
                field: "OrderId",
                value: "bad id".into()
            }
        );
        assert_eq!(err.to_string(), "OrderId ('bad id') is not allowed");
    }
}
