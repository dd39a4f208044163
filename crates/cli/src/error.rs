use connectors::{ConfigError, FetchError};
use processing::ExtractError;
use report::ReportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Error loading configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("API request failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("{0}")]
    Extract(#[from] ExtractError),

    #[error("Failed to save report: {0}")]
    Report(#[from] ReportError),
}

impl CliError {
    /// One-line hint shown to the user after the error itself.
    pub fn hint(&self) -> &'static str {
        match self {
            CliError::Config(_) => "Failed to load configuration",
            CliError::Fetch(_) | CliError::Extract(_) => {
                "No data was extracted. Check the input parameters and API access."
            }
            CliError::Report(_) => "The report could not be written.",
        }
    }
}
