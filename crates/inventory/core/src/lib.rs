//! Cross-game inventory client abstraction.
//!
//! This crate defines the capability set a game needs from the remote STAR
//! inventory service, without committing to any transport.
//!
//! # Architecture
//!
//! ```text
//! Game integration (keycard-bridge)
//!          │
//!          ▼
//! InventoryClient (trait)
//!          ├── init / authenticate / cleanup   (session lifecycle)
//!          ├── add_item / has_item / use_item  (inventory operations)
//!          └── last_error                      (diagnostics)
//!          │
//!          ▼
//! Concrete client (remote service binding, or MockInventoryClient)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use inventory_core::{InventoryClient, InventoryError, ItemCategory, NewItem};
//!
//! fn record_pickup(client: &mut dyn InventoryClient) -> Result<(), InventoryError> {
//!     let item = NewItem::new("red_keycard", "Opens red doors", "Doom", ItemCategory::KeyItem);
//!     client.add_item(&item)
//! }
//! ```

pub mod traits;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use traits::{InventoryClient, InventoryError};
pub use types::{ClientConfig, ItemCategory, NewItem};

#[cfg(any(test, feature = "mock"))]
pub use mock::{ClientCall, MockInventoryClient};
