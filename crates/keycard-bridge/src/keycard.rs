//! Keycard identities and their inventory names.
//!
//! The engine identifies keys by sprite (for pickups) and by card slot (for
//! door locks). Both collapse onto [`KeycardType`], which in turn names the
//! item stored in the cross-game inventory.

/// Engine sprite ordinals for key pickups.
pub mod sprite {
    pub const BLUE_KEYCARD: i32 = 62;
    pub const RED_KEYCARD: i32 = 63;
    pub const YELLOW_KEYCARD: i32 = 64;
    pub const BLUE_SKULL: i32 = 65;
    pub const RED_SKULL: i32 = 66;
    pub const YELLOW_SKULL: i32 = 67;
}

/// Engine card-slot ordinals used by locked lines.
pub mod card {
    pub const BLUE_CARD: i32 = 0;
    pub const YELLOW_CARD: i32 = 1;
    pub const RED_CARD: i32 = 2;
    pub const BLUE_SKULL: i32 = 3;
    pub const YELLOW_SKULL: i32 = 4;
    pub const RED_SKULL: i32 = 5;
}

/// Keycard kinds tracked in the cross-game inventory.
///
/// The three skull keys share a single inventory item.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum KeycardType {
    /// Not a keycard
    #[default]
    None,
    Red,
    Blue,
    Yellow,
    Skull,
}

/// Inventory name and description for a keycard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KeycardInfo {
    pub name: &'static str,
    pub description: &'static str,
}

const KEYCARD_COUNT: usize = 4;

/// One entry per keycard type other than [`KeycardType::None`].
static KEYCARD_TABLE: [(KeycardType, KeycardInfo); KEYCARD_COUNT] = [
    (
        KeycardType::Red,
        KeycardInfo {
            name: "red_keycard",
            description: "Red Keycard - Opens red doors",
        },
    ),
    (
        KeycardType::Blue,
        KeycardInfo {
            name: "blue_keycard",
            description: "Blue Keycard - Opens blue doors",
        },
    ),
    (
        KeycardType::Yellow,
        KeycardInfo {
            name: "yellow_keycard",
            description: "Yellow Keycard - Opens yellow doors",
        },
    ),
    (
        KeycardType::Skull,
        KeycardInfo {
            name: "skull_key",
            description: "Skull Key - Opens skull-marked doors",
        },
    ),
];

const _: () = assert!(
    KEYCARD_COUNT == <KeycardType as strum::EnumCount>::COUNT - 1,
    "every keycard type except None needs a table entry"
);

impl KeycardType {
    /// Resolve a pickup sprite. Unknown sprites yield [`KeycardType::None`].
    pub fn from_sprite(sprite_id: i32) -> Self {
        match sprite_id {
            sprite::RED_KEYCARD => Self::Red,
            sprite::BLUE_KEYCARD => Self::Blue,
            sprite::YELLOW_KEYCARD => Self::Yellow,
            sprite::BLUE_SKULL | sprite::YELLOW_SKULL | sprite::RED_SKULL => Self::Skull,
            _ => Self::None,
        }
    }

    /// Resolve the card slot a locked line requires.
    pub fn from_card(slot: i32) -> Self {
        match slot {
            card::RED_CARD => Self::Red,
            card::BLUE_CARD => Self::Blue,
            card::YELLOW_CARD => Self::Yellow,
            card::BLUE_SKULL | card::YELLOW_SKULL | card::RED_SKULL => Self::Skull,
            _ => Self::None,
        }
    }

    /// Reverse lookup from an inventory item name.
    pub fn from_item_name(name: &str) -> Self {
        KEYCARD_TABLE
            .iter()
            .find(|(_, info)| info.name == name)
            .map(|(kind, _)| *kind)
            .unwrap_or_default()
    }

    pub fn info(self) -> Option<&'static KeycardInfo> {
        KEYCARD_TABLE
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, info)| info)
    }

    /// Inventory item name, or `None` for [`KeycardType::None`].
    pub fn name(self) -> Option<&'static str> {
        self.info().map(|info| info.name)
    }

    pub fn description(self) -> Option<&'static str> {
        self.info().map(|info| info.description)
    }

    pub fn is_none(self) -> bool {
        self == Self::None
    }
}
