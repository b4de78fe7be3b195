//! Overworld regions and dungeon entrances.
//!
//! The light world and the dark world overworld nodes reference each other, so
//! the registry resolves them as one strongly connected component.

use {
    super::{Definition, node},
    crate::requirement::{all, any, req},
};

pub(super) fn definitions() -> Vec<Definition> {
    vec![
        // --- Overworld ---
        node(
            "light_world",
            any([
                req("world_state_not_inverted"),
                all([
                    req("world_state_inverted"),
                    req("moon_pearl"),
                    any([
                        req("aga1"),
                        all([req("dark_world_west"), req("gloves_2")]),
                        all([req("dark_world_south"), req("hammer"), req("gloves_1")]),
                    ]),
                ]),
            ]),
        ),
        node(
            "dark_world_north_east",
            any([
                req("world_state_inverted"),
                req("aga1"),
                req("entrance_dark_world_access"),
                all([
                    req("light_world"),
                    req("moon_pearl"),
                    any([
                        all([req("hammer"), req("gloves_1")]),
                        all([req("gloves_2"), req("flippers")]),
                    ]),
                ]),
            ]),
        ),
        node(
            "dark_world_west",
            any([
                req("world_state_inverted"),
                req("entrance_dark_world_access"),
                all([
                    req("moon_pearl"),
                    any([
                        all([req("light_world"), req("gloves_2")]),
                        all([
                            req("dark_world_north_east"),
                            req("hookshot"),
                            any([req("flippers"), req("gloves_1"), req("hammer")]),
                        ]),
                    ]),
                ]),
            ]),
        ),
        node(
            "dark_world_south",
            any([
                req("world_state_inverted"),
                req("entrance_dark_world_access"),
                all([
                    req("moon_pearl"),
                    any([
                        req("dark_world_west"),
                        all([req("light_world"), req("hammer"), req("gloves_1")]),
                        all([req("dark_world_north_east"), req("hammer")]),
                    ]),
                ]),
            ]),
        ),
        node(
            "dark_world_mire",
            any([
                all([req("flute_usable"), req("gloves_2"), req("light_world")]),
                all([
                    req("world_state_inverted"),
                    req("dark_world_south"),
                    req("gloves_2"),
                ]),
            ]),
        ),
        node("pyramid", req("dark_world_north_east")),
        // --- Death Mountain ---
        node(
            "death_mountain_west_bottom",
            any([
                all([req("light_world"), req("flute_usable")]),
                all([
                    req("light_world"),
                    req("gloves_1"),
                    req("can_cross_dark_rooms"),
                ]),
                req("entrance_death_mountain_access"),
            ]),
        ),
        node(
            "death_mountain_west_top",
            all([
                req("death_mountain_west_bottom"),
                any([req("mirror"), all([req("hookshot"), req("hammer")])]),
            ]),
        ),
        node(
            "death_mountain_east_bottom",
            all([
                req("death_mountain_west_bottom"),
                any([req("hookshot"), all([req("mirror"), req("hammer")])]),
            ]),
        ),
        node(
            "death_mountain_east_top",
            all([req("death_mountain_west_top"), req("hammer")]),
        ),
        node("dark_death_mountain_west", req("death_mountain_west_bottom")),
        node(
            "dark_death_mountain_east",
            all([req("death_mountain_east_top"), req("gloves_2")]),
        ),
        // --- Castle ---
        node("hyrule_castle", req("light_world")),
        node(
            "agahnims_tower",
            any([
                all([
                    req("world_state_not_inverted"),
                    req("light_world"),
                    req("can_pass_castle_barrier"),
                ]),
                all([
                    req("world_state_inverted"),
                    req("dark_death_mountain_west"),
                ]),
            ]),
        ),
        // --- Dungeon entrances ---
        node("eastern_palace", req("light_world")),
        node(
            "desert_palace",
            any([
                all([req("light_world"), req("book")]),
                all([
                    req("world_state_not_inverted"),
                    req("dark_world_mire"),
                    req("mirror"),
                ]),
            ]),
        ),
        node("tower_of_hera", req("death_mountain_west_top")),
        node(
            "palace_of_darkness",
            all([req("dark_world_north_east"), req("moon_pearl_or_inverted")]),
        ),
        node(
            "swamp_palace",
            all([
                req("dark_world_south"),
                req("mirror"),
                req("flippers"),
                req("moon_pearl_or_inverted"),
            ]),
        ),
        node("skull_woods", req("dark_world_west")),
        node(
            "thieves_town",
            all([req("dark_world_west"), req("moon_pearl_or_inverted")]),
        ),
        node(
            "ice_palace",
            all([
                req("light_world"),
                req("flippers"),
                req("gloves_2"),
                req("can_melt_things"),
                req("moon_pearl_or_inverted"),
            ]),
        ),
        node(
            "misery_mire",
            all([
                req("dark_world_mire"),
                req("can_open_misery_mire"),
                any([req("boots"), req("hookshot")]),
                req("moon_pearl_or_inverted"),
            ]),
        ),
        node(
            "turtle_rock",
            all([
                req("dark_death_mountain_east"),
                req("somaria"),
                req("hammer"),
                req("can_open_turtle_rock"),
                req("moon_pearl_or_inverted"),
            ]),
        ),
        node(
            "ganons_tower",
            any([
                req("entrance_ganons_tower_access"),
                all([
                    req("all_crystals"),
                    any([
                        all([
                            req("world_state_not_inverted"),
                            req("moon_pearl"),
                            req("dark_death_mountain_east"),
                        ]),
                        all([req("world_state_inverted"), req("light_world")]),
                    ]),
                ]),
            ]),
        ),
    ]
}
