//! Credential resolution for the lookup API.
//!
//! The API key is injected at startup from the command line, the
//! environment or the config file, in that order of precedence.

use super::types::ApiConfig;

/// Environment variable consulted for the API key.
pub const API_KEY_ENV: &str = "OMDB_API_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty everywhere.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl ApiConfig {
    /// Resolve the API key.
    ///
    /// `cli_key` wins over `env_key`, which wins over `api.api_key`.
    /// Empty values are skipped.
    pub fn resolve_credential(
        &self,
        cli_key: Option<&str>,
        env_key: Option<&str>,
    ) -> CredentialStatus {
        let key = [cli_key, env_key, self.api_key.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|key| !key.is_empty());

        match key {
            Some(key) => CredentialStatus::Configured(SecureString::new(key.to_string())),
            None => CredentialStatus::Unconfigured {
                reason: format!(
                    "no API key: pass --api-key, set {} or api.api_key in the config file",
                    API_KEY_ENV
                ),
            },
        }
    }
}
