use {
    rand::{Rng, SeedableRng, rngs::StdRng},
    requirements::*,
    tracker_components::{
        Accessibility, DungeonItemShuffle, ItemPlacement, ItemType, ModeField, ModeSetting,
        WorldState,
    },
    tracker_resources::{ItemLedger, ModeConfiguration},
};

const NODES: [&str; 25] = [
    "light_world",
    "dark_world_north_east",
    "dark_world_west",
    "dark_world_south",
    "dark_world_mire",
    "pyramid",
    "death_mountain_west_bottom",
    "death_mountain_west_top",
    "death_mountain_east_bottom",
    "death_mountain_east_top",
    "dark_death_mountain_west",
    "dark_death_mountain_east",
    "hyrule_castle",
    "agahnims_tower",
    "eastern_palace",
    "desert_palace",
    "tower_of_hera",
    "palace_of_darkness",
    "swamp_palace",
    "skull_woods",
    "thieves_town",
    "ice_palace",
    "misery_mire",
    "turtle_rock",
    "ganons_tower",
];

/// Flattened requirements and the node they restate.
const EQUIVALENT: [(&str, &str); 3] = [
    ("tower_of_hera_access", "tower_of_hera"),
    ("ganons_tower_access", "ganons_tower"),
    ("misery_mire_access", "misery_mire"),
];

fn catalog_tracker() -> Tracker {
    let mut tracker = Tracker::default();
    tracker.initialize().unwrap();
    tracker
}

/// A tracker evaluating `items` and `mode` with an empty cache.
fn fresh_tracker(items: &ItemLedger, mode: &ModeConfiguration) -> Tracker {
    let mut tracker = catalog_tracker().with_ledger(items.clone());
    tracker.apply_mode(mode);
    tracker
}

fn random_setting(rng: &mut StdRng) -> ModeSetting {
    let field = ModeField::ALL[rng.random_range(0..ModeField::ALL.len())];
    let flip = rng.random_bool(0.5);
    match field {
        ModeField::WorldState => ModeSetting::WorldState(
            [
                WorldState::Standard,
                WorldState::Open,
                WorldState::Inverted,
                WorldState::Retro,
            ][rng.random_range(0..4)],
        ),
        ModeField::EntranceShuffle => ModeSetting::EntranceShuffle(flip),
        ModeField::BossShuffle => ModeSetting::BossShuffle(flip),
        ModeField::EnemyShuffle => ModeSetting::EnemyShuffle(flip),
        ModeField::GuaranteedBossItems => ModeSetting::GuaranteedBossItems(flip),
        ModeField::DungeonItemShuffle => ModeSetting::DungeonItemShuffle(
            [
                DungeonItemShuffle::Standard,
                DungeonItemShuffle::MapsCompasses,
                DungeonItemShuffle::MapsCompassesSmallKeys,
                DungeonItemShuffle::Keysanity,
            ][rng.random_range(0..4)],
        ),
        ModeField::ItemPlacement => ModeSetting::ItemPlacement(if flip {
            ItemPlacement::Basic
        } else {
            ItemPlacement::Advanced
        }),
    }
}

/// Applies one random mutation through the public API. Items lean towards
/// being owned so deep regions get reached.
fn mutate(tracker: &mut Tracker, rng: &mut StdRng) {
    if rng.random_bool(0.1) {
        tracker.set_mode(random_setting(rng));
        return;
    }

    let item = ItemType::ALL[rng.random_range(0..ItemType::ALL.len())];
    let maximum = tracker.items().maximum(item);
    let count = if rng.random_bool(0.7) {
        maximum
    } else {
        rng.random_range(0..=maximum)
    };
    tracker.set_item_count(item, count).unwrap();
}

#[test]
fn catalog_is_valid() {
    let tracker = catalog_tracker();
    let ids: Vec<_> = tracker.identifiers().collect();

    assert!(ids.len() >= 150, "catalog has {} entries", ids.len());
    for node in NODES {
        assert_eq!(tracker.kind(node), Ok(DefinitionKind::Node), "{node}");
    }
    for (requirement, _) in EQUIVALENT {
        assert_eq!(
            tracker.kind(requirement),
            Ok(DefinitionKind::Requirement),
            "{requirement}"
        );
    }
}

#[test]
fn every_identifier_resolves_in_every_world_state() {
    let mut tracker = catalog_tracker();
    let ids: Vec<_> = tracker.identifiers().collect();

    for world_state in [
        WorldState::Standard,
        WorldState::Open,
        WorldState::Inverted,
        WorldState::Retro,
    ] {
        tracker.set_mode(ModeSetting::WorldState(world_state));
        for id in &ids {
            assert!(tracker.accessibility(id).is_ok(), "{id} in {world_state:?}");
        }
    }
}

#[test]
fn flattened_requirements_agree_with_nodes() {
    let mut rng = StdRng::seed_from_u64(0x1d_2024);

    for round in 0..40 {
        let mut tracker = catalog_tracker();
        for step in 0..60 {
            mutate(&mut tracker, &mut rng);
            for (requirement, node) in EQUIVALENT {
                let flattened = tracker.accessibility(requirement).unwrap();
                let region = tracker.accessibility(node).unwrap();
                assert_eq!(
                    flattened, region,
                    "{requirement} vs {node} diverged in round {round} step {step}: {:?}",
                    tracker.mode()
                );
            }
        }
    }
}

#[test]
fn cached_tiers_match_fresh_evaluation() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut tracker = catalog_tracker();
    let ids: Vec<_> = tracker.identifiers().collect();

    for step in 0..30 {
        // Warm part of the cache, then mutate
        for id in ids.iter().filter(|_| rng.random_bool(0.5)) {
            tracker.accessibility(id).unwrap();
        }
        mutate(&mut tracker, &mut rng);

        let mut fresh = fresh_tracker(tracker.items(), tracker.mode());
        for id in &ids {
            assert_eq!(
                tracker.accessibility(id),
                fresh.accessibility(id),
                "{id} is stale after step {step}"
            );
        }
    }
}

#[test]
fn overworld_cycle_converges_in_inverted() {
    let mut tracker = catalog_tracker();
    tracker.set_mode(ModeSetting::WorldState(WorldState::Inverted));

    // Dark world start, light world sealed without the moon pearl
    assert_eq!(tracker.accessibility("dark_world_south"), Ok(Accessibility::Normal));
    assert_eq!(tracker.accessibility("light_world"), Ok(Accessibility::None));

    // Pearl alone is not enough, a route back is needed
    tracker.set_item_count(ItemType::MoonPearl, 1).unwrap();
    assert_eq!(tracker.accessibility("light_world"), Ok(Accessibility::None));

    // Hammer and gloves cross from the south through the cycle
    tracker.set_item_count(ItemType::Hammer, 1).unwrap();
    tracker.set_item_count(ItemType::Gloves, 1).unwrap();
    assert_eq!(tracker.accessibility("light_world"), Ok(Accessibility::Normal));
    assert_eq!(tracker.accessibility("hyrule_castle"), Ok(Accessibility::Normal));

    tracker.set_item_count(ItemType::MoonPearl, 0).unwrap();
    assert_eq!(tracker.accessibility("light_world"), Ok(Accessibility::None));
}

#[test]
fn open_world_dark_world_needs_pearl() {
    let mut tracker = catalog_tracker();
    tracker.set_item_count(ItemType::Gloves, 2).unwrap();

    assert_eq!(tracker.accessibility("light_world"), Ok(Accessibility::Normal));
    assert_eq!(tracker.accessibility("dark_world_west"), Ok(Accessibility::None));

    let update = tracker.set_item_count(ItemType::MoonPearl, 1).unwrap();
    assert!(update.invalidated.contains(&"dark_world_west"));
    assert!(update.invalidated.contains(&"skull_woods"));
    assert_eq!(tracker.accessibility("dark_world_west"), Ok(Accessibility::Normal));
    assert_eq!(tracker.accessibility("dark_world_south"), Ok(Accessibility::Normal));
}
