//! Inventory client trait and error type.

use crate::types::{ClientConfig, NewItem};

// ============================================================================
// Error Types
// ============================================================================

/// Errors reported by an inventory client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("Client is not initialized")]
    NotInitialized,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// ============================================================================
// Client Capability Set
// ============================================================================

/// Remote cross-game inventory operations.
///
/// Every call is synchronous and single-attempt. Retries, timeouts and the
/// wire protocol belong to the implementation; callers only see the outcome.
pub trait InventoryClient: Send {
    /// Open a session against the service described by `config`.
    fn init(&mut self, config: &ClientConfig) -> Result<(), InventoryError>;

    /// Authenticate the session with username/password (SSO).
    fn authenticate(&mut self, username: &str, password: &str) -> Result<(), InventoryError>;

    /// Add an item to the player's cross-game inventory.
    fn add_item(&mut self, item: &NewItem) -> Result<(), InventoryError>;

    /// Check whether the player currently holds an item with this name.
    fn has_item(&self, name: &str) -> Result<bool, InventoryError>;

    /// Consume one unit of an item, tagging the use with `context`.
    fn use_item(&mut self, name: &str, context: &str) -> Result<(), InventoryError>;

    /// Close the session. Safe to call on an uninitialized client.
    fn cleanup(&mut self);

    /// Human-readable description of the most recent failure, if any.
    fn last_error(&self) -> Option<String>;
}

impl<C: InventoryClient + ?Sized> InventoryClient for Box<C> {
    fn init(&mut self, config: &ClientConfig) -> Result<(), InventoryError> {
        (**self).init(config)
    }

    fn authenticate(&mut self, username: &str, password: &str) -> Result<(), InventoryError> {
        (**self).authenticate(username, password)
    }

    fn add_item(&mut self, item: &NewItem) -> Result<(), InventoryError> {
        (**self).add_item(item)
    }

    fn has_item(&self, name: &str) -> Result<bool, InventoryError> {
        (**self).has_item(name)
    }

    fn use_item(&mut self, name: &str, context: &str) -> Result<(), InventoryError> {
        (**self).use_item(name, context)
    }

    fn cleanup(&mut self) {
        (**self).cleanup()
    }

    fn last_error(&self) -> Option<String> {
        (**self).last_error()
    }
}
