use crate::{
    client::Endpoint,
    env::{
        ENV_API_KEY, ENV_APPLICATION_ID, ENV_BASE_URL, ENV_DOMAIN_ID, ENV_INSTANCE, EnvManager,
    },
    error::ConfigError,
};
use model::records::lenient;
use serde::Deserialize;
use std::{fmt, fs, path::Path};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

const KEY_INSTANCE: &str = "HLInstance";
const KEY_DOMAIN_ID: &str = "domain_id";
const KEY_APPLICATION_ID: &str = "application_id";
const KEY_API_KEY: &str = "api_key";

/// Whether a report reads one application or a whole domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportScope {
    Application,
    Domain,
}

/// Raw contents of `config.json`. Ids may be written as strings or numbers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    #[serde(rename = "HLInstance", deserialize_with = "lenient::text")]
    pub instance: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub domain_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub application_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub api_key: Option<String>,
    /// Replaces `https://{HLInstance}.casthighlight.com` when set.
    #[serde(deserialize_with = "lenient::text")]
    pub base_url: Option<String>,
}

impl HighlightConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replaces individual keys with `HL_*` environment variables when set.
    pub fn with_env_overrides(mut self, env: &EnvManager) -> Self {
        let slots = [
            (ENV_INSTANCE, &mut self.instance),
            (ENV_DOMAIN_ID, &mut self.domain_id),
            (ENV_APPLICATION_ID, &mut self.application_id),
            (ENV_API_KEY, &mut self.api_key),
            (ENV_BASE_URL, &mut self.base_url),
        ];

        for (var, slot) in slots {
            if let Some(value) = env.get(var) {
                if EnvManager::is_sensitive(var) {
                    debug!("Overriding config from {var} (redacted)");
                } else {
                    debug!("Overriding config from {var}: {value}");
                }
                *slot = Some(value.to_string());
            }
        }

        self
    }

    /// Checks the keys `scope` needs and builds the request credentials.
    pub fn resolve(&self, scope: ReportScope) -> Result<Credentials, ConfigError> {
        let base_url = match non_empty(&self.base_url) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => {
                let instance = required(&self.instance, KEY_INSTANCE)?;
                format!("https://{instance}.casthighlight.com")
            }
        };
        let domain_id = required(&self.domain_id, KEY_DOMAIN_ID)?.to_string();

        let endpoint = match scope {
            ReportScope::Application => Endpoint::Application {
                domain_id,
                application_id: required(&self.application_id, KEY_APPLICATION_ID)?
                    .to_string(),
            },
            ReportScope::Domain => Endpoint::CloudRequirements { domain_id },
        };

        Ok(Credentials {
            base_url,
            api_key: required(&self.api_key, KEY_API_KEY)?.to_string(),
            endpoint,
        })
    }
}

/// Everything needed to issue the request for one report.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub base_url: String,
    pub api_key: String,
    pub endpoint: Endpoint,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn required<'a>(value: &'a Option<String>, key: &'static str) -> Result<&'a str, ConfigError> {
    non_empty(value).ok_or(ConfigError::MissingKey(key))
}
