//! Inventory client types.

use std::time::Duration;

/// Connection settings handed to [`InventoryClient::init`](crate::InventoryClient::init).
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service root, e.g. `https://star-api.oasisplatform.world/api`
    pub base_url: String,

    /// API key for key-based access (optional when using SSO)
    pub api_key: Option<String>,

    /// Avatar the inventory belongs to (optional when using SSO)
    pub avatar_id: Option<String>,

    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            avatar_id: None,
            timeout,
        }
    }

    /// Check the settings a client cannot work without.
    pub fn validate(&self) -> Result<(), String> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!("Invalid base URL format: {}", self.base_url));
        }

        if self.timeout.is_zero() {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("avatar_id", &self.avatar_id)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Inventory category an item is filed under.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemCategory {
    /// Access items such as keycards
    KeyItem,
    /// Anything else picked up in-game
    Miscellaneous,
}

/// An item to be added to the cross-game inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewItem {
    pub name: String,
    pub description: String,
    /// Game the item was obtained in
    pub source: String,
    pub category: ItemCategory,
}

impl NewItem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
        category: ItemCategory,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            source: source.into(),
            category,
        }
    }
}
