//! Mock inventory client for testing.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::traits::{InventoryClient, InventoryError};
use crate::types::{ClientConfig, NewItem};

/// A call observed by [`MockInventoryClient`], in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClientCall {
    Init { base_url: String },
    Authenticate { username: String },
    AddItem(NewItem),
    HasItem { name: String },
    UseItem { name: String, context: String },
    Cleanup,
}

#[derive(Default)]
struct MockState {
    /// Item name → units held
    items: HashMap<String, u32>,
    calls: Vec<ClientCall>,
    initialized: bool,
    last_error: Option<String>,
    init_failure: Option<String>,
    auth_failure: Option<String>,
    add_failure: Option<String>,
    use_failure: Option<String>,
}

impl MockState {
    fn fail(&mut self, err: InventoryError) -> InventoryError {
        self.last_error = Some(err.to_string());
        err
    }
}

/// Mock inventory client for testing without network.
///
/// Simulates the remote inventory in-memory. Clones share state, so a test
/// can keep one handle for inspection while the bridge owns another.
#[derive(Clone, Default)]
pub struct MockInventoryClient {
    state: Arc<Mutex<MockState>>,
}

impl MockInventoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed one unit of `name` into the remote inventory.
    pub fn with_item(self, name: impl Into<String>) -> Self {
        self.grant(name);
        self
    }

    /// Make `init` fail with `message`.
    pub fn failing_init(self, message: impl Into<String>) -> Self {
        self.state().init_failure = Some(message.into());
        self
    }

    /// Make `authenticate` reject every credential with `message`.
    pub fn rejecting_auth(self, message: impl Into<String>) -> Self {
        self.state().auth_failure = Some(message.into());
        self
    }

    /// Make `add_item` fail with `message`.
    pub fn failing_add(self, message: impl Into<String>) -> Self {
        self.state().add_failure = Some(message.into());
        self
    }

    /// Make `use_item` fail with `message` even when the item is held.
    pub fn failing_use(self, message: impl Into<String>) -> Self {
        self.state().use_failure = Some(message.into());
        self
    }

    /// Add one unit of `name` outside of any recorded call.
    pub fn grant(&self, name: impl Into<String>) {
        *self.state().items.entry(name.into()).or_default() += 1;
    }

    /// Drop every unit of `name` outside of any recorded call.
    pub fn revoke(&self, name: &str) {
        self.state().items.remove(name);
    }

    /// Units of `name` currently held.
    pub fn quantity(&self, name: &str) -> u32 {
        self.state().items.get(name).copied().unwrap_or(0)
    }

    pub fn is_initialized(&self) -> bool {
        self.state().initialized
    }

    /// Every call received so far.
    pub fn calls(&self) -> Vec<ClientCall> {
        self.state().calls.clone()
    }

    /// Number of calls matching `predicate`.
    pub fn count_calls(&self, predicate: impl Fn(&ClientCall) -> bool) -> usize {
        self.state().calls.iter().filter(|call| predicate(call)).count()
    }
}

impl InventoryClient for MockInventoryClient {
    fn init(&mut self, config: &ClientConfig) -> Result<(), InventoryError> {
        let mut state = self.state();
        state.calls.push(ClientCall::Init {
            base_url: config.base_url.clone(),
        });

        if let Err(reason) = config.validate() {
            return Err(state.fail(InventoryError::InvalidConfig(reason)));
        }
        if let Some(message) = state.init_failure.clone() {
            return Err(state.fail(InventoryError::Network(message)));
        }

        state.initialized = true;
        state.last_error = None;
        tracing::debug!(base_url = %config.base_url, "mock inventory initialized");
        Ok(())
    }

    fn authenticate(&mut self, username: &str, _password: &str) -> Result<(), InventoryError> {
        let mut state = self.state();
        state.calls.push(ClientCall::Authenticate {
            username: username.to_string(),
        });

        if !state.initialized {
            return Err(state.fail(InventoryError::NotInitialized));
        }
        if let Some(message) = state.auth_failure.clone() {
            return Err(state.fail(InventoryError::AuthenticationFailed(message)));
        }

        Ok(())
    }

    fn add_item(&mut self, item: &NewItem) -> Result<(), InventoryError> {
        let mut state = self.state();
        state.calls.push(ClientCall::AddItem(item.clone()));

        if !state.initialized {
            return Err(state.fail(InventoryError::NotInitialized));
        }
        if let Some(message) = state.add_failure.clone() {
            return Err(state.fail(InventoryError::Rejected(message)));
        }

        *state.items.entry(item.name.clone()).or_default() += 1;
        Ok(())
    }

    fn has_item(&self, name: &str) -> Result<bool, InventoryError> {
        let mut state = self.state();
        state.calls.push(ClientCall::HasItem {
            name: name.to_string(),
        });

        if !state.initialized {
            return Err(state.fail(InventoryError::NotInitialized));
        }

        Ok(state.items.get(name).is_some_and(|units| *units > 0))
    }

    fn use_item(&mut self, name: &str, context: &str) -> Result<(), InventoryError> {
        let mut state = self.state();
        state.calls.push(ClientCall::UseItem {
            name: name.to_string(),
            context: context.to_string(),
        });

        if !state.initialized {
            return Err(state.fail(InventoryError::NotInitialized));
        }
        if let Some(message) = state.use_failure.clone() {
            return Err(state.fail(InventoryError::Rejected(message)));
        }

        match state.items.get_mut(name) {
            Some(units) if *units > 0 => {
                *units -= 1;
                Ok(())
            }
            _ => Err(state.fail(InventoryError::ItemNotFound(name.to_string()))),
        }
    }

    fn cleanup(&mut self) {
        let mut state = self.state();
        state.calls.push(ClientCall::Cleanup);
        state.initialized = false;
    }

    fn last_error(&self) -> Option<String> {
        self.state().last_error.clone()
    }
}
