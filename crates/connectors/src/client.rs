use crate::{config::Credentials, error::FetchError};
use reqwest::{blocking::Client, header::ACCEPT};
use serde_json::Value as Json;
use std::time::Duration;
use tracing::{info, warn};

/// Upper bound for the single API call of a run.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The two Highlight WS2 resources reports are built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Application metrics, including green findings.
    Application {
        domain_id: String,
        application_id: String,
    },
    /// Cloud-readiness requirements of every application in a domain.
    CloudRequirements { domain_id: String },
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Application {
                domain_id,
                application_id,
            } => format!("/WS2/domains/{domain_id}/applications/{application_id}"),
            Endpoint::CloudRequirements { domain_id } => {
                format!("/WS2/cloud/requirements/{domain_id}")
            }
        }
    }
}

/// Source of the raw JSON document a report is built from.
pub trait DataFetcher {
    fn fetch(&self, endpoint: &Endpoint) -> Result<Json, FetchError>;
}

/// Blocking client for the Highlight REST API.
pub struct HighlightClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl HighlightClient {
    pub fn new(credentials: &Credentials) -> Result<Self, FetchError> {
        Self::with_timeout(credentials, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(credentials: &Credentials, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(HighlightClient {
            http,
            base_url: credentials.base_url.clone(),
            api_key: credentials.api_key.clone(),
        })
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

impl DataFetcher for HighlightClient {
    fn fetch(&self, endpoint: &Endpoint) -> Result<Json, FetchError> {
        let url = self.url(endpoint);
        info!("Requesting {url}");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Request to {url} failed with status: {status}");
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<Json>()
            .map_err(|source| FetchError::Decode { url, source })
    }
}
