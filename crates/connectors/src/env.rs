use std::collections::HashMap;

pub const ENV_INSTANCE: &str = "HL_INSTANCE";
pub const ENV_DOMAIN_ID: &str = "HL_DOMAIN_ID";
pub const ENV_APPLICATION_ID: &str = "HL_APPLICATION_ID";
pub const ENV_API_KEY: &str = "HL_API_KEY";
pub const ENV_BASE_URL: &str = "HL_BASE_URL";

/// Snapshot of environment variables used to override config keys.
#[derive(Debug, Clone, Default)]
pub struct EnvManager {
    vars: HashMap<String, String>,
}

impl EnvManager {
    /// Captures the process environment.
    pub fn new() -> Self {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of `key`, trimmed. Unset and blank variables are both `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Whether a variable name looks like it holds a credential.
    pub fn is_sensitive(key: &str) -> bool {
        let key = key.to_ascii_lowercase();
        ["key", "token", "secret", "password", "auth"]
            .iter()
            .any(|pattern| key.contains(pattern))
    }
}
