//! Cross-game keycard bridge.
//!
//! Connects the engine's key pickups and locked doors to the STAR
//! cross-game inventory:
//!
//! - **Pickups** - keycards and other items the player collects are recorded
//!   remotely.
//! - **Doors** - when the player lacks a local key, a keycard held in the
//!   cross-game inventory can open the door (and is consumed doing so).
//!
//! The bridge degrades silently: if the service is unreachable or no
//! credentials are configured, every call is a no-op and the game plays on.
//!
//! # Usage
//!
//! ```ignore
//! use keycard_bridge::{KeycardBridge, KeycardType};
//!
//! let mut bridge = KeycardBridge::from_env(client);
//! bridge.init();
//!
//! // Item pickup hook
//! bridge.on_keycard_pickup(KeycardType::from_sprite(sprite));
//!
//! // Locked door hook, after the local key check failed
//! if bridge.check_door_access(line, KeycardType::Red) {
//!     open_door(line);
//! }
//!
//! bridge.cleanup();
//! ```

pub mod bridge;
pub mod config;
pub mod keycard;
pub mod shared;

pub use bridge::{
    AuthMode, BridgeState, DEFAULT_ITEM_DESCRIPTION, DOOR_USAGE_CONTEXT, KeycardBridge,
    SOURCE_GAME,
};
pub use config::{BridgeConfig, DEFAULT_TIMEOUT, STAR_API_BASE_URL};
pub use keycard::{KeycardInfo, KeycardType};
pub use shared::SharedBridge;
