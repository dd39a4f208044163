use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating `config.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A key the selected report needs is absent or empty.
    #[error("Missing required config key: {0}")]
    MissingKey(&'static str),
}

/// Errors raised by the remote data fetch. None of them are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("API request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("API response from {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
