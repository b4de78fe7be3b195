use {
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// The world-state variant of the seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldState {
    Standard,
    #[default]
    Open,
    Inverted,
    /// Pooled-keys variant: generic small keys open any dungeon door.
    Retro,
}

/// Which dungeon items are shuffled outside their own dungeon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DungeonItemShuffle {
    #[default]
    Standard,
    MapsCompasses,
    MapsCompassesSmallKeys,
    Keysanity,
}

/// How demanding the item placement logic is allowed to be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemPlacement {
    Basic,
    #[default]
    Advanced,
}

/// Names one field of the mode configuration.
///
/// Used as the key for change notifications and for dependency edges in the
/// requirement registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModeField {
    WorldState,
    DungeonItemShuffle,
    ItemPlacement,
    EntranceShuffle,
    BossShuffle,
    EnemyShuffle,
    GuaranteedBossItems,
}

impl ModeField {
    pub const ALL: [ModeField; 7] = [
        ModeField::WorldState,
        ModeField::DungeonItemShuffle,
        ModeField::ItemPlacement,
        ModeField::EntranceShuffle,
        ModeField::BossShuffle,
        ModeField::EnemyShuffle,
        ModeField::GuaranteedBossItems,
    ];
}

impl fmt::Display for ModeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A mode field paired with one of its values.
///
/// Setting the mode configuration and checking a mode flag both go through this
/// type, so a value can never be assigned to the wrong field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeSetting {
    WorldState(WorldState),
    DungeonItemShuffle(DungeonItemShuffle),
    ItemPlacement(ItemPlacement),
    EntranceShuffle(bool),
    BossShuffle(bool),
    EnemyShuffle(bool),
    GuaranteedBossItems(bool),
}

impl ModeSetting {
    pub fn field(self) -> ModeField {
        match self {
            ModeSetting::WorldState(_) => ModeField::WorldState,
            ModeSetting::DungeonItemShuffle(_) => ModeField::DungeonItemShuffle,
            ModeSetting::ItemPlacement(_) => ModeField::ItemPlacement,
            ModeSetting::EntranceShuffle(_) => ModeField::EntranceShuffle,
            ModeSetting::BossShuffle(_) => ModeField::BossShuffle,
            ModeSetting::EnemyShuffle(_) => ModeField::EnemyShuffle,
            ModeSetting::GuaranteedBossItems(_) => ModeField::GuaranteedBossItems,
        }
    }
}
