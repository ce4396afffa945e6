//! Rules command implementation.

use crate::output::{format_json, format_rule_row, print_rule_header};
use orderguard_core::RuleExecutor;
use serde_json::json;

pub fn run(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let rules = RuleExecutor::new().rules();

    if json_output {
        let listing: Vec<_> = rules
            .iter()
            .enumerate()
            .map(|(i, rule)| {
                json!({
                    "position": i + 1,
                    "name": rule.name(),
                    "codes": rule.codes(),
                    "description": rule.description(),
                })
            })
            .collect();
        println!("{}", format_json(&listing));
    } else {
        print_rule_header();
        for (i, rule) in rules.iter().enumerate() {
            println!("{}", format_rule_row(i + 1, *rule));
        }
    }

    Ok(())
}
