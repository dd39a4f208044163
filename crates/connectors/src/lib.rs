pub mod client;
pub mod config;
pub mod env;
pub mod error;

pub use client::{DataFetcher, Endpoint, HighlightClient};
pub use config::{Credentials, HighlightConfig, ReportScope};
pub use env::EnvManager;
pub use error::{ConfigError, FetchError};
