//! Scripted bridge session.

use clap::ValueEnum;
use inventory_core::{ClientCall, MockInventoryClient};
use keycard_bridge::{BridgeConfig, BridgeState, KeycardBridge, KeycardType};
use serde::Serialize;

/// Key color a locked door asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DoorColor {
    Red,
    Blue,
    Yellow,
    Skull,
}

impl DoorColor {
    pub fn keycard(self) -> KeycardType {
        match self {
            Self::Red => KeycardType::Red,
            Self::Blue => KeycardType::Blue,
            Self::Yellow => KeycardType::Yellow,
            Self::Skull => KeycardType::Skull,
        }
    }
}

/// Events to replay, in order: pickups first, then doors.
#[derive(Debug, Default)]
pub struct Scenario {
    pub grants: Vec<String>,
    pub fail_init: bool,
    pub reject_auth: bool,
    pub pickup_sprites: Vec<i32>,
    pub doors: Vec<DoorColor>,
}

#[derive(Debug, Serialize)]
pub struct PickupOutcome {
    pub sprite: i32,
    pub keycard: KeycardType,
    pub recorded: bool,
}

#[derive(Debug, Serialize)]
pub struct DoorOutcome {
    pub line: i32,
    pub color: DoorColor,
    pub granted: bool,
}

/// What happened during a [`Scenario`] run.
#[derive(Debug, Serialize)]
pub struct Summary {
    /// State right after `init`
    pub state: BridgeState,
    pub pickups: Vec<PickupOutcome>,
    pub doors: Vec<DoorOutcome>,
    pub calls: Vec<ClientCall>,
    pub last_error: Option<String>,
}

impl Scenario {
    pub fn run(self, config: BridgeConfig) -> Summary {
        let mut mock = MockInventoryClient::new();
        for name in &self.grants {
            mock.grant(name.as_str());
        }
        if self.fail_init {
            mock = mock.failing_init("simulated outage");
        }
        if self.reject_auth {
            mock = mock.rejecting_auth("simulated credential rejection");
        }

        let mut bridge = KeycardBridge::new(mock.clone(), config);
        let state = bridge.init();

        let pickups = self
            .pickup_sprites
            .iter()
            .map(|&sprite| PickupOutcome {
                sprite,
                keycard: KeycardType::from_sprite(sprite),
                recorded: bridge.on_sprite_pickup(sprite),
            })
            .collect();

        // Line numbers stand in for the engine's linedef indices
        let doors = self
            .doors
            .iter()
            .zip(1..)
            .map(|(&color, line)| DoorOutcome {
                line,
                color,
                granted: bridge.check_door_access(line, color.keycard()),
            })
            .collect();

        let last_error = bridge.last_error();
        bridge.cleanup();

        Summary {
            state,
            pickups,
            doors,
            calls: mock.calls(),
            last_error,
        }
    }
}

impl Summary {
    pub fn print(&self) {
        match self.state.auth_mode() {
            Some(mode) => println!("Bridge ready ({mode})"),
            None => println!("Bridge not initialized"),
        }

        for pickup in &self.pickups {
            println!(
                "  pickup sprite {:>3} -> {:<6} recorded={}",
                pickup.sprite, pickup.keycard, pickup.recorded
            );
        }
        for door in &self.doors {
            println!(
                "  door line {:>3} ({:?}) granted={}",
                door.line, door.color, door.granted
            );
        }

        println!("Remote calls: {}", self.calls.len());
        if let Some(err) = &self.last_error {
            println!("Last error: {err}");
        }
    }
}
