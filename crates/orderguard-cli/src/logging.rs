//! Tracing subscriber setup.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Initializes logging to stderr.
///
/// Filter precedence: `--log-level`, then `RUST_LOG`, then `info`. An explicit
/// `--log-level` that does not parse is an error; a bad `RUST_LOG` falls back
/// to the default. Stdout is left untouched so JSON output stays
/// machine-readable.
pub fn init(level: Option<&str>) -> Result<(), ParseError> {
    let filter = match level {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
    Ok(())
}
