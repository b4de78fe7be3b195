use {
    super::{Definition, requirement},
    crate::requirement::{any, flag, gated, not, req},
    tracker_components::{DungeonItemShuffle, ItemPlacement, ItemType, ModeSetting, WorldState},
};

pub(super) fn definitions() -> Vec<Definition> {
    vec![
        // World state
        requirement(
            "world_state_standard",
            flag(ModeSetting::WorldState(WorldState::Standard)),
        ),
        requirement(
            "world_state_open",
            flag(ModeSetting::WorldState(WorldState::Open)),
        ),
        requirement(
            "world_state_inverted",
            flag(ModeSetting::WorldState(WorldState::Inverted)),
        ),
        requirement(
            "world_state_retro",
            flag(ModeSetting::WorldState(WorldState::Retro)),
        ),
        requirement(
            "world_state_not_standard",
            not(req("world_state_standard")),
        ),
        requirement(
            "world_state_not_inverted",
            not(req("world_state_inverted")),
        ),
        // Dungeon item shuffle
        requirement(
            "dungeon_item_shuffle_standard",
            flag(ModeSetting::DungeonItemShuffle(DungeonItemShuffle::Standard)),
        ),
        requirement(
            "dungeon_item_shuffle_maps_compasses",
            flag(ModeSetting::DungeonItemShuffle(
                DungeonItemShuffle::MapsCompasses,
            )),
        ),
        requirement(
            "dungeon_item_shuffle_maps_compasses_small_keys",
            flag(ModeSetting::DungeonItemShuffle(
                DungeonItemShuffle::MapsCompassesSmallKeys,
            )),
        ),
        requirement(
            "dungeon_item_shuffle_keysanity",
            flag(ModeSetting::DungeonItemShuffle(DungeonItemShuffle::Keysanity)),
        ),
        requirement(
            "small_key_shuffle",
            any([
                req("dungeon_item_shuffle_maps_compasses_small_keys"),
                req("dungeon_item_shuffle_keysanity"),
            ]),
        ),
        requirement("no_small_key_shuffle", not(req("small_key_shuffle"))),
        requirement("big_key_shuffle", req("dungeon_item_shuffle_keysanity")),
        requirement("no_big_key_shuffle", not(req("big_key_shuffle"))),
        // Item placement
        requirement(
            "item_placement_basic",
            flag(ModeSetting::ItemPlacement(ItemPlacement::Basic)),
        ),
        requirement(
            "item_placement_advanced",
            flag(ModeSetting::ItemPlacement(ItemPlacement::Advanced)),
        ),
        // Toggles
        requirement("entrance_shuffle", flag(ModeSetting::EntranceShuffle(true))),
        requirement(
            "no_entrance_shuffle",
            flag(ModeSetting::EntranceShuffle(false)),
        ),
        requirement("boss_shuffle", flag(ModeSetting::BossShuffle(true))),
        requirement("no_boss_shuffle", flag(ModeSetting::BossShuffle(false))),
        requirement("enemy_shuffle", flag(ModeSetting::EnemyShuffle(true))),
        requirement("no_enemy_shuffle", flag(ModeSetting::EnemyShuffle(false))),
        requirement(
            "guaranteed_boss_items",
            flag(ModeSetting::GuaranteedBossItems(true)),
        ),
        requirement(
            "no_guaranteed_boss_items",
            flag(ModeSetting::GuaranteedBossItems(false)),
        ),
        // Entrance shuffle access markers are inert outside entrance shuffle
        requirement(
            "entrance_death_mountain_access",
            gated(
                ModeSetting::EntranceShuffle(true),
                ItemType::DeathMountainAccess,
                1,
            ),
        ),
        requirement(
            "entrance_dark_world_access",
            gated(
                ModeSetting::EntranceShuffle(true),
                ItemType::DarkWorldAccess,
                1,
            ),
        ),
        requirement(
            "entrance_ganons_tower_access",
            gated(
                ModeSetting::EntranceShuffle(true),
                ItemType::GanonsTowerAccess,
                1,
            ),
        ),
    ]
}
