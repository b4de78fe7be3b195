use {
    crate::TrackerError,
    bevy::log::trace,
    serde::{Deserialize, Serialize},
    tracker_components::{
        DungeonItemShuffle, ItemPlacement, ModeField, ModeSetting, WorldState,
    },
};

/// A mode field that actually changed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChange {
    pub previous: ModeSetting,
    pub current: ModeSetting,
}

impl ModeChange {
    pub fn field(&self) -> ModeField {
        self.current.field()
    }
}

/// The selected game-mode options.
///
/// Fields are orthogonal: no combination is rejected here. Presets are stored as
/// RON (`*.mode.ron`); fields missing from a preset keep their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeConfiguration {
    world_state: WorldState,
    dungeon_item_shuffle: DungeonItemShuffle,
    item_placement: ItemPlacement,
    entrance_shuffle: bool,
    boss_shuffle: bool,
    enemy_shuffle: bool,
    guaranteed_boss_items: bool,
}

impl ModeConfiguration {
    /// Parses a RON preset.
    pub fn from_ron(source: &str) -> Result<Self, TrackerError> {
        ron::from_str(source).map_err(|e| TrackerError::InvalidPreset(e.to_string()))
    }

    pub fn world_state(&self) -> WorldState {
        self.world_state
    }

    pub fn dungeon_item_shuffle(&self) -> DungeonItemShuffle {
        self.dungeon_item_shuffle
    }

    pub fn item_placement(&self) -> ItemPlacement {
        self.item_placement
    }

    pub fn entrance_shuffle(&self) -> bool {
        self.entrance_shuffle
    }

    pub fn boss_shuffle(&self) -> bool {
        self.boss_shuffle
    }

    pub fn enemy_shuffle(&self) -> bool {
        self.enemy_shuffle
    }

    pub fn guaranteed_boss_items(&self) -> bool {
        self.guaranteed_boss_items
    }

    /// Current value of `field`.
    pub fn get(&self, field: ModeField) -> ModeSetting {
        match field {
            ModeField::WorldState => ModeSetting::WorldState(self.world_state),
            ModeField::DungeonItemShuffle => {
                ModeSetting::DungeonItemShuffle(self.dungeon_item_shuffle)
            }
            ModeField::ItemPlacement => ModeSetting::ItemPlacement(self.item_placement),
            ModeField::EntranceShuffle => ModeSetting::EntranceShuffle(self.entrance_shuffle),
            ModeField::BossShuffle => ModeSetting::BossShuffle(self.boss_shuffle),
            ModeField::EnemyShuffle => ModeSetting::EnemyShuffle(self.enemy_shuffle),
            ModeField::GuaranteedBossItems => {
                ModeSetting::GuaranteedBossItems(self.guaranteed_boss_items)
            }
        }
    }

    /// True when the setting's field currently holds the setting's value.
    pub fn is(&self, setting: ModeSetting) -> bool {
        self.get(setting.field()) == setting
    }

    /// Stores a field value. Returns `None` when the field already held it.
    pub fn set(&mut self, setting: ModeSetting) -> Option<ModeChange> {
        let previous = self.get(setting.field());
        if previous == setting {
            return None;
        }

        match setting {
            ModeSetting::WorldState(v) => self.world_state = v,
            ModeSetting::DungeonItemShuffle(v) => self.dungeon_item_shuffle = v,
            ModeSetting::ItemPlacement(v) => self.item_placement = v,
            ModeSetting::EntranceShuffle(v) => self.entrance_shuffle = v,
            ModeSetting::BossShuffle(v) => self.boss_shuffle = v,
            ModeSetting::EnemyShuffle(v) => self.enemy_shuffle = v,
            ModeSetting::GuaranteedBossItems(v) => self.guaranteed_boss_items = v,
        }
        trace!(?previous, current = ?setting, "mode changed");

        Some(ModeChange {
            previous,
            current: setting,
        })
    }

    /// Copies every field of `other`, returning the fields that changed.
    pub fn apply(&mut self, other: &ModeConfiguration) -> Vec<ModeChange> {
        ModeField::ALL
            .iter()
            .filter_map(|&field| self.set(other.get(field)))
            .collect()
    }

    /// Restores the defaults, returning the fields that changed.
    pub fn reset(&mut self) -> Vec<ModeChange> {
        self.apply(&ModeConfiguration::default())
    }
}
