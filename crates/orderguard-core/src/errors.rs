use thiserror::Error;

/// Core error types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The order payload is not parseable JSON.
    #[error("order payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
