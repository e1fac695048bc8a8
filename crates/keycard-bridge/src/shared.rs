//! Lock-guarded bridge handle for multi-threaded hosts.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use inventory_core::InventoryClient;

use crate::bridge::{BridgeState, KeycardBridge};
use crate::keycard::KeycardType;

/// Cloneable handle to one [`KeycardBridge`].
///
/// The lock is held for the whole operation, remote call included, so the
/// query-then-consume in [`check_door_access`](Self::check_door_access)
/// cannot interleave with another caller's.
pub struct SharedBridge<C> {
    inner: Arc<Mutex<KeycardBridge<C>>>,
}

impl<C> Clone for SharedBridge<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: InventoryClient> SharedBridge<C> {
    pub fn new(bridge: KeycardBridge<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(bridge)),
        }
    }

    // The guarded state is a plain flag plus the client; a panic mid-call
    // cannot leave it half-written, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, KeycardBridge<C>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn init(&self) -> BridgeState {
        self.lock().init()
    }

    pub fn cleanup(&self) {
        self.lock().cleanup()
    }

    pub fn on_keycard_pickup(&self, keycard: KeycardType) -> bool {
        self.lock().on_keycard_pickup(keycard)
    }

    pub fn on_sprite_pickup(&self, sprite_id: i32) -> bool {
        self.lock().on_sprite_pickup(sprite_id)
    }

    pub fn on_item_pickup(&self, name: &str, description: Option<&str>) -> bool {
        self.lock().on_item_pickup(name, description)
    }

    pub fn check_door_access(&self, line: i32, required: KeycardType) -> bool {
        self.lock().check_door_access(line, required)
    }

    pub fn has_cross_game_keycard(&self, name: &str) -> bool {
        self.lock().has_cross_game_keycard(name)
    }

    pub fn state(&self) -> BridgeState {
        self.lock().state()
    }

    /// Run `f` with exclusive access to the bridge.
    pub fn with<R>(&self, f: impl FnOnce(&mut KeycardBridge<C>) -> R) -> R {
        f(&mut *self.lock())
    }
}
