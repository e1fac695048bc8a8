//! Bridge configuration.

use std::env;
use std::time::Duration;

use inventory_core::ClientConfig;

/// STAR API service root.
pub const STAR_API_BASE_URL: &str = "https://star-api.oasisplatform.world/api";

/// Timeout handed to the inventory client for every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_API_KEY: &str = "STAR_API_KEY";
pub const ENV_AVATAR_ID: &str = "STAR_AVATAR_ID";
pub const ENV_USERNAME: &str = "STAR_USERNAME";
pub const ENV_PASSWORD: &str = "STAR_PASSWORD";

/// Connection and credential settings for a [`KeycardBridge`](crate::KeycardBridge).
///
/// Which credentials are present decides the authentication path:
/// username + password selects SSO, API key + avatar id is the fallback.
#[derive(Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub avatar_id: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout: Duration,
}

impl BridgeConfig {
    /// Configuration with no credentials.
    pub fn new() -> Self {
        Self {
            base_url: STAR_API_BASE_URL.to_string(),
            api_key: None,
            avatar_id: None,
            username: None,
            password: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load credentials from environment variables.
    ///
    /// Environment variables (all optional):
    /// - `STAR_API_KEY` - API key for key-based access
    /// - `STAR_AVATAR_ID` - Avatar owning the inventory
    /// - `STAR_USERNAME` - SSO username
    /// - `STAR_PASSWORD` - SSO password
    ///
    /// Base URL and timeout are fixed.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load credentials through `lookup` instead of the process environment.
    ///
    /// Empty values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            api_key: read(ENV_API_KEY),
            avatar_id: read(ENV_AVATAR_ID),
            username: read(ENV_USERNAME),
            password: read(ENV_PASSWORD),
            ..Self::new()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_avatar_id(mut self, avatar_id: impl Into<String>) -> Self {
        self.avatar_id = Some(avatar_id.into());
        self
    }

    /// Set SSO username and password.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// SSO credentials, when both halves are present.
    pub fn sso_credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username.as_str(), password.as_str())),
            _ => None,
        }
    }

    /// Whether the API-key fallback can be used.
    pub fn has_api_key_access(&self) -> bool {
        self.api_key.is_some() && self.avatar_id.is_some()
    }

    /// Settings passed to the inventory client's `init`.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            avatar_id: self.avatar_id.clone(),
            timeout: self.timeout,
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |secret: &Option<String>| secret.as_ref().map(|_| "<redacted>");

        f.debug_struct("BridgeConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &redact(&self.api_key))
            .field("avatar_id", &self.avatar_id)
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_are_fixed() {
        let config = BridgeConfig::from_lookup(|_| None);
        assert_eq!(config.base_url, STAR_API_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert!(config.sso_credentials().is_none());
        assert!(!config.has_api_key_access());
    }

    #[test]
    fn reads_all_credentials() {
        let config = BridgeConfig::from_lookup(lookup_from(&[
            (ENV_API_KEY, "key-123"),
            (ENV_AVATAR_ID, "avatar-9"),
            (ENV_USERNAME, "doomguy"),
            (ENV_PASSWORD, "rip-and-tear"),
        ]));

        assert_eq!(config.api_key.as_deref(), Some("key-123"));
        assert_eq!(config.avatar_id.as_deref(), Some("avatar-9"));
        assert_eq!(config.sso_credentials(), Some(("doomguy", "rip-and-tear")));
        assert!(config.has_api_key_access());
    }

    #[test]
    fn empty_values_count_as_absent() {
        let config = BridgeConfig::from_lookup(lookup_from(&[
            (ENV_USERNAME, "doomguy"),
            (ENV_PASSWORD, ""),
            (ENV_API_KEY, ""),
        ]));

        assert!(config.sso_credentials().is_none());
        assert!(config.api_key.is_none());
    }

    #[test]
    fn api_key_access_needs_both_halves() {
        let config = BridgeConfig::new().with_api_key("key-123");
        assert!(!config.has_api_key_access());

        let config = config.with_avatar_id("avatar-9");
        assert!(config.has_api_key_access());
    }

    #[test]
    fn client_config_carries_key_and_timeout() {
        let config = BridgeConfig::new()
            .with_api_key("key-123")
            .with_avatar_id("avatar-9");
        let client = config.client_config();

        assert_eq!(client.base_url, STAR_API_BASE_URL);
        assert_eq!(client.api_key.as_deref(), Some("key-123"));
        assert_eq!(client.avatar_id.as_deref(), Some("avatar-9"));
        assert_eq!(client.timeout, DEFAULT_TIMEOUT);
        assert!(client.validate().is_ok());
    }

    #[test]
    fn debug_redacts_secrets() {
        let config = BridgeConfig::new()
            .with_api_key("key-123")
            .with_credentials("doomguy", "rip-and-tear");
        let rendered = format!("{config:?}");

        assert!(rendered.contains("doomguy"));
        assert!(!rendered.contains("key-123"));
        assert!(!rendered.contains("rip-and-tear"));
    }
}
