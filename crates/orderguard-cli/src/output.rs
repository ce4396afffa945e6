//! Output formatting utilities.

use crate::response::OrderResponse;
use orderguard_core::BusinessRule;
use serde::Serialize;

/// Formats any serializable value as pretty JSON.
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Prints a validation response as a short report.
pub fn print_response(response: &OrderResponse) {
    let outcome = response
        .outcome
        .map(|o| o.as_str())
        .or(response.body.error_code)
        .unwrap_or("?");
    let order_id = response.body.order_id.as_deref().unwrap_or("?");

    println!("{:<22} {:<7} {}", "OUTCOME", "STATUS", "ORDER_ID");
    println!("{:<22} {:<7} {}", outcome, response.status_code, order_id);

    if let Some(message) = &response.body.message {
        println!();
        println!("{}", message);
    }

    if !response.body.violations.is_empty() {
        println!();
        println!("{:<26} {:<38} {}", "RULE", "CODE", "MESSAGE");
        println!("{}", "-".repeat(100));
        for violation in &response.body.violations {
            println!(
                "{:<26} {:<38} {}",
                truncate(violation.rule_name(), 26),
                violation.code(),
                violation.message()
            );
        }
    }
}

/// Formats one rule as a table row.
pub fn format_rule_row(position: usize, rule: &dyn BusinessRule) -> String {
    let codes: Vec<&str> = rule.codes().iter().map(|c| c.as_str()).collect();
    format!(
        "{:<3} {:<26} {:<60} {}",
        position,
        rule.name(),
        codes.join(","),
        rule.description()
    )
}

/// Prints the rule table header.
#[allow(clippy::print_literal)]
pub fn print_rule_header() {
    println!(
        "{:<3} {:<26} {:<60} {}",
        "#", "RULE", "CODES", "DESCRIPTION"
    );
    println!("{}", "-".repeat(120));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
