//! Error types for dataset decoding

use thiserror::Error;

/// Failure to turn raw dataset bytes into card records
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Input is not valid JSON at all
    #[error("invalid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// Root value is valid JSON but not an array
    #[error("expected a JSON array of cards, found {found}")]
    NotAnArray { found: &'static str },

    /// Array element is not a JSON object
    #[error("card #{index}: expected an object, found {found}")]
    NotAnObject { index: usize, found: &'static str },

    /// Array element is an object but lacks required fields or has the wrong shape
    #[error("card #{index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
