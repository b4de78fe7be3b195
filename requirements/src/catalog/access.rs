//! Dungeon completion and landmark requirements.
//!
//! `tower_of_hera_access`, `ganons_tower_access` and `misery_mire_access`
//! restate the node graph's routes in flattened form; they must agree with the
//! `tower_of_hera`, `ganons_tower` and `misery_mire` nodes in every state.

use {
    super::{Definition, requirement},
    crate::requirement::{Requirement, all, any, req},
};

/// Climb from the lower to the upper western Death Mountain.
fn west_top_climb() -> Requirement {
    any([req("mirror"), all([req("hookshot"), req("hammer")])])
}

/// Small key doors only gate progress when small keys leave their dungeon.
fn small_keys(id: &'static str) -> Requirement {
    any([req("no_small_key_shuffle"), req(id)])
}

fn big_key(id: &'static str) -> Requirement {
    any([req("no_big_key_shuffle"), req(id)])
}

pub(super) fn definitions() -> Vec<Definition> {
    vec![
        // --- Flattened routes ---
        requirement(
            "tower_of_hera_access",
            any([
                all([req("light_world"), req("flute_usable"), west_top_climb()]),
                all([
                    req("light_world"),
                    req("gloves_1"),
                    req("can_cross_dark_rooms"),
                    west_top_climb(),
                ]),
                all([req("entrance_death_mountain_access"), west_top_climb()]),
            ]),
        ),
        requirement(
            "ganons_tower_access",
            any([
                req("entrance_ganons_tower_access"),
                all([
                    req("all_crystals"),
                    any([
                        all([
                            req("world_state_not_inverted"),
                            req("moon_pearl"),
                            req("hammer"),
                            req("gloves_2"),
                            req("tower_of_hera_access"),
                        ]),
                        all([req("world_state_inverted"), req("light_world")]),
                    ]),
                ]),
            ]),
        ),
        requirement(
            "misery_mire_access",
            all([
                any([
                    all([req("flute_usable"), req("gloves_2"), req("light_world")]),
                    all([
                        req("world_state_inverted"),
                        req("dark_world_south"),
                        req("gloves_2"),
                    ]),
                ]),
                req("can_open_misery_mire"),
                any([req("boots"), req("hookshot")]),
                any([req("moon_pearl"), req("world_state_inverted")]),
            ]),
        ),
        // --- Landmarks ---
        requirement(
            "master_sword_pedestal",
            all([req("light_world"), req("all_pendants")]),
        ),
        requirement(
            "ether_tablet",
            all([req("death_mountain_west_top"), req("can_activate_tablets")]),
        ),
        requirement(
            "bombos_tablet",
            all([
                req("world_state_not_inverted"),
                req("dark_world_south"),
                req("mirror"),
                req("can_activate_tablets"),
            ]),
        ),
        // --- Dungeons ---
        requirement(
            "hyrule_castle_escape",
            all([
                req("hyrule_castle"),
                any([req("world_state_not_standard"), req("can_cross_dark_rooms")]),
                small_keys("hc_small_key_1"),
            ]),
        ),
        requirement(
            "agahnim_defeatable",
            all([
                req("agahnims_tower"),
                req("can_cross_dark_rooms"),
                req("can_kill_shuffled_enemies"),
                small_keys("at_small_key_2"),
                req("can_defeat_agahnim"),
            ]),
        ),
        requirement(
            "eastern_palace_complete",
            all([
                req("eastern_palace"),
                req("can_light_torches"),
                big_key("ep_big_key"),
                req("ep_boss"),
            ]),
        ),
        requirement(
            "desert_palace_complete",
            all([
                req("desert_palace"),
                req("gloves_1"),
                req("can_light_torches"),
                small_keys("dp_small_key_1"),
                big_key("dp_big_key"),
                req("dp_boss"),
            ]),
        ),
        requirement(
            "tower_of_hera_complete",
            all([
                req("tower_of_hera"),
                small_keys("toh_small_key_1"),
                big_key("toh_big_key"),
                req("toh_boss"),
            ]),
        ),
        requirement(
            "palace_of_darkness_complete",
            all([
                req("palace_of_darkness"),
                req("can_cross_dark_rooms"),
                req("hammer"),
                req("can_shoot_arrows"),
                small_keys("pod_small_key_6"),
                big_key("pod_big_key"),
                req("pod_boss"),
            ]),
        ),
        requirement(
            "swamp_palace_complete",
            all([
                req("swamp_palace"),
                req("hookshot"),
                req("hammer"),
                small_keys("sp_small_key_1"),
                req("sp_boss"),
            ]),
        ),
        requirement(
            "skull_woods_complete",
            all([
                req("skull_woods"),
                req("fire_rod"),
                req("moon_pearl_or_inverted"),
                any([req("sword_1"), req("swordless")]),
                small_keys("sw_small_key_3"),
                big_key("sw_big_key"),
                req("sw_boss"),
            ]),
        ),
        requirement(
            "thieves_town_complete",
            all([
                req("thieves_town"),
                small_keys("tt_small_key_1"),
                big_key("tt_big_key"),
                req("tt_boss"),
            ]),
        ),
        requirement(
            "ice_palace_complete",
            all([
                req("ice_palace"),
                req("hammer"),
                req("gloves_1"),
                small_keys("ip_small_key_2"),
                big_key("ip_big_key"),
                req("ip_boss"),
            ]),
        ),
        requirement(
            "misery_mire_complete",
            all([
                req("misery_mire"),
                req("can_light_torches"),
                req("somaria"),
                small_keys("mm_small_key_3"),
                big_key("mm_big_key"),
                req("mm_boss"),
            ]),
        ),
        requirement(
            "turtle_rock_complete",
            all([
                req("turtle_rock"),
                req("can_light_torches"),
                req("can_cross_dark_rooms"),
                small_keys("tr_small_key_4"),
                big_key("tr_big_key"),
                req("tr_boss"),
            ]),
        ),
        requirement(
            "ganons_tower_complete",
            all([
                req("ganons_tower"),
                req("hookshot"),
                req("hammer"),
                req("can_light_torches"),
                req("can_shoot_arrows"),
                small_keys("gt_small_key_4"),
                big_key("gt_big_key"),
                req("boss_agahnim2"),
            ]),
        ),
        requirement(
            "ganon_defeatable",
            all([
                req("pyramid"),
                req("ganons_tower_complete"),
                req("boss_ganon"),
            ]),
        ),
    ]
}
