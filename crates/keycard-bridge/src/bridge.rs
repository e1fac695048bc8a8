//! Bridge lifecycle and event forwarding.
//!
//! # State
//!
//! ```text
//! ┌───────────────┐  init ok + (SSO ok | key + avatar)  ┌────────────────┐
//! │ Uninitialized │────────────────────────────────────▶│ Ready(AuthMode)│
//! └───────────────┘◀────────────────────────────────────└────────────────┘
//!                               cleanup
//! ```
//!
//! Every forwarding call is a no-op while uninitialized. Remote failures are
//! logged and swallowed; the host game keeps running.

use inventory_core::{InventoryClient, ItemCategory, NewItem};

use crate::config::BridgeConfig;
use crate::keycard::KeycardType;

/// Source tag attached to every item this bridge records.
pub const SOURCE_GAME: &str = "Doom";

/// Usage context sent when a door consumes a keycard.
pub const DOOR_USAGE_CONTEXT: &str = "doom_door";

/// Description used when a generic pickup has none.
pub const DEFAULT_ITEM_DESCRIPTION: &str = "Item from Doom";

/// How the bridge authenticated against the inventory service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AuthMode {
    /// Username/password single sign-on
    Sso,
    /// API key + avatar id
    ApiKey,
}

/// Whether cross-game features are active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BridgeState {
    #[default]
    Uninitialized,
    Ready(AuthMode),
}

impl BridgeState {
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn auth_mode(self) -> Option<AuthMode> {
        match self {
            Self::Ready(mode) => Some(mode),
            Self::Uninitialized => None,
        }
    }
}

/// Forwards engine item events to a cross-game inventory.
///
/// Owned by the host; create one per game session. Multi-threaded hosts
/// wrap it in a [`SharedBridge`](crate::SharedBridge).
pub struct KeycardBridge<C> {
    client: C,
    config: BridgeConfig,
    state: BridgeState,
}

impl<C: InventoryClient> KeycardBridge<C> {
    pub fn new(client: C, config: BridgeConfig) -> Self {
        Self {
            client,
            config,
            state: BridgeState::Uninitialized,
        }
    }

    /// Create a bridge configured from the process environment.
    pub fn from_env(client: C) -> Self {
        Self::new(client, BridgeConfig::from_env())
    }

    /// Connect and authenticate. Returns the resulting state.
    ///
    /// SSO is tried first when username and password are configured; the
    /// API key + avatar id pair is the fallback. Failures leave the bridge
    /// uninitialized.
    pub fn init(&mut self) -> BridgeState {
        if self.state.is_ready() {
            tracing::debug!(state = ?self.state, "STAR bridge already initialized");
            return self.state;
        }

        if let Err(err) = self.client.init(&self.config.client_config()) {
            tracing::warn!(error = %err, "STAR API: failed to initialize");
            return self.state;
        }

        if let Some((username, password)) = self.config.sso_credentials() {
            match self.client.authenticate(username, password) {
                Ok(()) => {
                    self.state = BridgeState::Ready(AuthMode::Sso);
                    tracing::info!(
                        username,
                        "STAR API: authenticated via SSO, cross-game features enabled"
                    );
                    return self.state;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "STAR API: SSO authentication failed");
                }
            }
        }

        if self.config.has_api_key_access() {
            self.state = BridgeState::Ready(AuthMode::ApiKey);
            tracing::info!(
                avatar_id = self.config.avatar_id.as_deref(),
                "STAR API: initialized with API key, cross-game features enabled"
            );
        } else {
            tracing::warn!("STAR API: no authentication configured");
        }

        self.state
    }

    /// Release the client session. Does nothing when uninitialized.
    pub fn cleanup(&mut self) {
        if !self.state.is_ready() {
            return;
        }

        self.client.cleanup();
        self.state = BridgeState::Uninitialized;
        tracing::info!("STAR API: cleaned up");
    }

    /// Record a keycard pickup. Returns whether the item was recorded.
    pub fn on_keycard_pickup(&mut self, keycard: KeycardType) -> bool {
        if !self.state.is_ready() {
            return false;
        }
        let Some(info) = keycard.info() else {
            tracing::debug!(%keycard, "ignoring pickup of unnamed keycard");
            return false;
        };

        self.add_item(NewItem::new(
            info.name,
            info.description,
            SOURCE_GAME,
            ItemCategory::KeyItem,
        ))
    }

    /// Record the pickup of whatever key a sprite represents.
    pub fn on_sprite_pickup(&mut self, sprite_id: i32) -> bool {
        self.on_keycard_pickup(KeycardType::from_sprite(sprite_id))
    }

    /// Record a non-keycard pickup. An empty `name` is ignored.
    pub fn on_item_pickup(&mut self, name: &str, description: Option<&str>) -> bool {
        if !self.state.is_ready() || name.is_empty() {
            return false;
        }

        self.add_item(NewItem::new(
            name,
            description.unwrap_or(DEFAULT_ITEM_DESCRIPTION),
            SOURCE_GAME,
            ItemCategory::Miscellaneous,
        ))
    }

    /// Decide whether a cross-game keycard opens the door on `line`.
    ///
    /// When the remote inventory holds the keycard, one unit is consumed and
    /// access is granted. Call once per access decision: a `true` result has
    /// already spent the item. The player's local keys are the caller's
    /// concern.
    pub fn check_door_access(&mut self, line: i32, required: KeycardType) -> bool {
        if !self.state.is_ready() {
            return false;
        }
        let Some(name) = required.name() else {
            return false;
        };

        let held = match self.client.has_item(name) {
            Ok(held) => held,
            Err(err) => {
                tracing::warn!(line, keycard = name, error = %err, "STAR API: possession query failed");
                false
            }
        };
        if !held {
            tracing::debug!(line, keycard = name, "no cross-game keycard for door");
            return false;
        }

        tracing::info!(line, keycard = name, "STAR API: door opened using cross-game keycard");
        if let Err(err) = self.client.use_item(name, DOOR_USAGE_CONTEXT) {
            tracing::warn!(line, keycard = name, error = %err, "STAR API: failed to consume keycard");
        }
        true
    }

    /// Whether the cross-game inventory holds `name`. No side effects.
    pub fn has_cross_game_keycard(&self, name: &str) -> bool {
        if !self.state.is_ready() || name.is_empty() {
            return false;
        }

        self.client.has_item(name).unwrap_or_else(|err| {
            tracing::warn!(keycard = name, error = %err, "STAR API: possession query failed");
            false
        })
    }

    pub fn state(&self) -> BridgeState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_ready()
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// The client's description of its most recent failure.
    pub fn last_error(&self) -> Option<String> {
        self.client.last_error()
    }

    fn add_item(&mut self, item: NewItem) -> bool {
        match self.client.add_item(&item) {
            Ok(()) => {
                tracing::info!(item = %item.name, category = %item.category, "STAR API: added to cross-game inventory");
                true
            }
            Err(err) => {
                tracing::warn!(item = %item.name, error = %err, "STAR API: failed to add item");
                false
            }
        }
    }
}
