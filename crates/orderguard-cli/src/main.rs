//! Orderguard CLI - validate subscription change orders from files or stdin.

use clap::{Parser, Subcommand};

mod commands;
mod logging;
mod output;
mod response;

use commands::{rules, validate};

#[derive(Parser)]
#[command(name = "orderguard")]
#[command(about = "Subscription order validation CLI")]
struct Cli {
    /// Log filter (overrides RUST_LOG), e.g. `debug` or `orderguard_core=trace`
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one order payload
    Validate {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output the response as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code unless the order is valid
        #[arg(long)]
        strict: bool,
        /// Order ids to treat as already processed (replaces the built-in sentinel)
        #[arg(
            long = "known-duplicate",
            env = "ORDERGUARD_KNOWN_DUPLICATES",
            value_delimiter = ','
        )]
        known_duplicates: Vec<String>,
    },
    /// List the business rules in execution order
    Rules {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.log_level.as_deref()) {
        eprintln!("Error: invalid --log-level: {}", e);
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Validate {
            input,
            json,
            strict,
            known_duplicates,
        } => validate::run(input, json, strict, known_duplicates),
        Commands::Rules { json } => rules::run(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
