use thiserror::Error;

/// Reasons a payload yields nothing to report. Callers stop the run cleanly
/// on either.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// An expected key is absent or empty.
    #[error("{0}")]
    NoData(String),

    /// Records were present but none had occurrences.
    #[error("No rules with occurrences found.")]
    NoRows,
}

impl ExtractError {
    pub fn no_data(message: &str) -> Self {
        ExtractError::NoData(message.to_string())
    }
}
