use {
    super::{Definition, requirement},
    crate::requirement::{Requirement, all, any, fixed, req},
    tracker_components::Accessibility,
};

/// A medallion entrance whose required medallion is unknown: all three open it
/// for sure, a single one only might.
fn medallion_gate() -> Requirement {
    all([
        req("can_use_medallions"),
        any([
            all([req("bombos"), req("ether"), req("quake")]),
            all([
                fixed(Accessibility::Partial),
                any([req("bombos"), req("ether"), req("quake")]),
            ]),
        ]),
    ])
}

pub(super) fn definitions() -> Vec<Definition> {
    vec![
        requirement("can_lift_rocks", req("gloves_1")),
        requirement("can_lift_dark_rocks", req("gloves_2")),
        requirement("can_light_torches", any([req("lamp"), req("fire_rod")])),
        requirement(
            "can_use_medallions",
            any([req("sword_1"), req("swordless")]),
        ),
        requirement(
            "can_melt_things",
            any([
                req("fire_rod"),
                all([req("bombos"), req("can_use_medallions")]),
            ]),
        ),
        requirement(
            "can_activate_tablets",
            all([
                req("book"),
                any([req("sword_2"), all([req("swordless"), req("hammer")])]),
            ]),
        ),
        requirement(
            "can_extend_magic",
            any([req("half_magic"), req("bottle")]),
        ),
        requirement("can_shoot_arrows", req("bow")),
        requirement(
            "can_shoot_silver_arrows",
            all([req("bow"), req("silver_arrows")]),
        ),
        requirement(
            "can_kill_most_things",
            any([
                req("sword_1"),
                req("hammer"),
                req("bow"),
                req("fire_rod"),
                req("somaria"),
                req("byrna"),
            ]),
        ),
        requirement(
            "can_kill_shuffled_enemies",
            any([
                all([req("no_enemy_shuffle"), req("can_kill_most_things")]),
                all([
                    req("enemy_shuffle"),
                    req("sword_1"),
                    any([req("bow"), req("fire_rod"), req("hammer")]),
                ]),
            ]),
        ),
        requirement(
            "can_hit_switches_at_range",
            any([
                req("boomerang"),
                req("red_boomerang"),
                req("bow"),
                req("hookshot"),
                req("somaria"),
            ]),
        ),
        // Dark rooms without a light source are a sequence break, and basic
        // placement never expects one
        requirement(
            "can_cross_dark_rooms",
            any([
                req("lamp"),
                all([
                    req("item_placement_advanced"),
                    fixed(Accessibility::SequenceBreak),
                ]),
            ]),
        ),
        requirement("can_open_misery_mire", medallion_gate()),
        requirement("can_open_turtle_rock", medallion_gate()),
        requirement(
            "can_defeat_agahnim",
            any([
                req("sword_1"),
                req("net"),
                all([req("swordless"), req("hammer")]),
            ]),
        ),
        requirement(
            "flute_usable",
            all([req("flute"), req("world_state_not_inverted")]),
        ),
        requirement(
            "can_pass_castle_barrier",
            any([
                req("cape"),
                req("sword_2"),
                all([req("swordless"), req("hammer")]),
            ]),
        ),
        requirement(
            "moon_pearl_or_inverted",
            any([req("moon_pearl"), req("world_state_inverted")]),
        ),
    ]
}
