//! Validate command implementation.

use crate::output::{format_json, print_response};
use crate::response::OrderResponse;
use orderguard_core::{KnownDuplicates, OrderValidator};
use std::io::{self, Read};
use tracing::{error, info};

pub fn run(
    input: Option<String>,
    json_output: bool,
    strict: bool,
    known_duplicates: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Read JSON from file or stdin
    let payload = if let Some(path) = input {
        std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let validator = if known_duplicates.is_empty() {
        OrderValidator::new()
    } else {
        info!(count = known_duplicates.len(), "using configured duplicate order ids");
        OrderValidator::with_duplicate_check(KnownDuplicates::new(known_duplicates))
    };

    let response = match validator.validate_str(&payload) {
        Ok(report) => OrderResponse::from_report(report),
        Err(e) => {
            error!(error = %e, "order payload could not be validated");
            OrderResponse::internal_error(e.to_string())
        }
    };

    if json_output {
        println!("{}", format_json(&response));
    } else {
        print_response(&response);
    }

    if strict && !response.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
