use inventory_core::{ClientCall, ItemCategory, MockInventoryClient, NewItem};
use keycard_bridge::{
    AuthMode, BridgeConfig, BridgeState, DEFAULT_ITEM_DESCRIPTION, KeycardBridge, KeycardType,
    STAR_API_BASE_URL,
};

fn api_key_config() -> BridgeConfig {
    BridgeConfig::new()
        .with_api_key("key-123")
        .with_avatar_id("avatar-9")
}

fn sso_config() -> BridgeConfig {
    BridgeConfig::new().with_credentials("doomguy", "rip-and-tear")
}

fn is_cleanup(call: &ClientCall) -> bool {
    matches!(call, ClientCall::Cleanup)
}

#[test]
fn sso_success_skips_fallback() {
    let mock = MockInventoryClient::new();
    let mut bridge = KeycardBridge::new(mock.clone(), sso_config().with_api_key("key-123"));

    assert_eq!(bridge.init(), BridgeState::Ready(AuthMode::Sso));
    assert!(bridge.is_initialized());
    assert_eq!(
        mock.calls(),
        vec![
            ClientCall::Init {
                base_url: STAR_API_BASE_URL.to_string()
            },
            ClientCall::Authenticate {
                username: "doomguy".to_string()
            },
        ]
    );
}

#[test]
fn api_key_fallback_without_credentials() {
    let mock = MockInventoryClient::new();
    let mut bridge = KeycardBridge::new(mock.clone(), api_key_config());

    assert_eq!(bridge.init(), BridgeState::Ready(AuthMode::ApiKey));
    assert_eq!(
        mock.count_calls(|call| matches!(call, ClientCall::Authenticate { .. })),
        0
    );
}

#[test]
fn api_key_fallback_after_sso_rejection() {
    let mock = MockInventoryClient::new().rejecting_auth("bad password");
    let config = sso_config()
        .with_api_key("key-123")
        .with_avatar_id("avatar-9");
    let mut bridge = KeycardBridge::new(mock.clone(), config);

    assert_eq!(bridge.init(), BridgeState::Ready(AuthMode::ApiKey));
    assert_eq!(
        bridge.last_error().as_deref(),
        Some("Authentication failed: bad password")
    );
}

#[test]
fn sso_rejection_without_api_key_stays_uninitialized() {
    let mock = MockInventoryClient::new().rejecting_auth("bad password");
    let mut bridge = KeycardBridge::new(mock, sso_config().with_api_key("key-123"));

    assert_eq!(bridge.init(), BridgeState::Uninitialized);
    assert!(!bridge.is_initialized());
}

#[test]
fn no_credentials_stays_uninitialized() {
    let mut bridge = KeycardBridge::new(MockInventoryClient::new(), BridgeConfig::new());
    assert_eq!(bridge.init(), BridgeState::Uninitialized);
}

#[test]
fn init_failure_ignores_credentials() {
    let mock = MockInventoryClient::new().failing_init("service unavailable");
    let config = sso_config()
        .with_api_key("key-123")
        .with_avatar_id("avatar-9");
    let mut bridge = KeycardBridge::new(mock.clone(), config);

    assert_eq!(bridge.init(), BridgeState::Uninitialized);
    assert_eq!(mock.calls().len(), 1);
    assert_eq!(
        bridge.last_error().as_deref(),
        Some("Network error: service unavailable")
    );
}

#[test]
fn init_can_be_retried_after_failure() {
    let failing = MockInventoryClient::new().failing_init("offline");
    let mut bridge = KeycardBridge::new(failing, api_key_config());
    assert!(!bridge.init().is_ready());

    // A fresh client for the retry, as a host would reconnect
    let mut bridge = KeycardBridge::new(MockInventoryClient::new(), bridge.config().clone());
    assert!(bridge.init().is_ready());
}

#[test]
fn forwarding_is_noop_before_init() {
    let mock = MockInventoryClient::new().with_item("red_keycard");
    let mut bridge = KeycardBridge::new(mock.clone(), api_key_config());

    assert!(!bridge.on_keycard_pickup(KeycardType::Red));
    assert!(!bridge.on_item_pickup("shotgun", None));
    assert!(!bridge.check_door_access(12, KeycardType::Red));
    assert!(!bridge.has_cross_game_keycard("red_keycard"));
    assert!(mock.calls().is_empty());
}

#[test]
fn forwarding_is_noop_after_cleanup() {
    let mock = MockInventoryClient::new().with_item("red_keycard");
    let mut bridge = KeycardBridge::new(mock.clone(), api_key_config());
    bridge.init();
    bridge.cleanup();
    let calls_before = mock.calls().len();

    assert!(!bridge.on_keycard_pickup(KeycardType::Red));
    assert!(!bridge.on_item_pickup("shotgun", Some("Pump action")));
    assert!(!bridge.check_door_access(12, KeycardType::Red));
    assert!(!bridge.has_cross_game_keycard("red_keycard"));
    assert_eq!(mock.calls().len(), calls_before);
}

#[test]
fn cleanup_twice_calls_client_once() {
    let mock = MockInventoryClient::new();
    let mut bridge = KeycardBridge::new(mock.clone(), api_key_config());
    bridge.init();

    bridge.cleanup();
    bridge.cleanup();

    assert_eq!(mock.count_calls(is_cleanup), 1);
    assert_eq!(bridge.state(), BridgeState::Uninitialized);
}

#[test]
fn cleanup_before_init_is_noop() {
    let mock = MockInventoryClient::new();
    let mut bridge = KeycardBridge::new(mock.clone(), api_key_config());

    bridge.cleanup();
    assert_eq!(mock.count_calls(is_cleanup), 0);
}

#[test]
fn keycard_pickup_adds_key_item() {
    let mock = MockInventoryClient::new();
    let mut bridge = KeycardBridge::new(mock.clone(), api_key_config());
    bridge.init();

    assert!(bridge.on_keycard_pickup(KeycardType::Yellow));
    assert!(!bridge.on_keycard_pickup(KeycardType::None));

    let added: Vec<NewItem> = mock
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            ClientCall::AddItem(item) => Some(item),
            _ => None,
        })
        .collect();
    assert_eq!(
        added,
        vec![NewItem::new(
            "yellow_keycard",
            "Yellow Keycard - Opens yellow doors",
            "Doom",
            ItemCategory::KeyItem,
        )]
    );
}

#[test]
fn item_pickup_uses_default_description() {
    let mock = MockInventoryClient::new();
    let mut bridge = KeycardBridge::new(mock.clone(), api_key_config());
    bridge.init();

    assert!(bridge.on_item_pickup("berserk_pack", None));
    assert!(bridge.on_item_pickup("soulsphere", Some("Supercharge")));
    assert!(!bridge.on_item_pickup("", Some("nameless")));

    let added: Vec<NewItem> = mock
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            ClientCall::AddItem(item) => Some(item),
            _ => None,
        })
        .collect();
    assert_eq!(added.len(), 2);
    assert_eq!(added[0].description, DEFAULT_ITEM_DESCRIPTION);
    assert_eq!(added[0].category, ItemCategory::Miscellaneous);
    assert_eq!(added[1].description, "Supercharge");
    assert_eq!(added[1].source, "Doom");
}

#[test]
fn config_from_lookup_drives_auth_path() {
    let config = BridgeConfig::from_lookup(|key| match key {
        "STAR_API_KEY" => Some("key-123".to_string()),
        "STAR_AVATAR_ID" => Some("avatar-9".to_string()),
        _ => None,
    });
    let mut bridge = KeycardBridge::new(MockInventoryClient::new(), config);

    assert_eq!(bridge.init().auth_mode(), Some(AuthMode::ApiKey));
}
