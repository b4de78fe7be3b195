use {
    super::{Definition, requirement},
    crate::requirement::{Requirement, all, any, req},
};

/// Boss slot of each dungeon and the boss that sits there without boss shuffle.
const BOSS_SLOTS: [(&str, &str); 10] = [
    ("ep_boss", "boss_armos"),
    ("dp_boss", "boss_lanmolas"),
    ("toh_boss", "boss_moldorm"),
    ("pod_boss", "boss_helmasaur"),
    ("sp_boss", "boss_arrghus"),
    ("sw_boss", "boss_mothula"),
    ("tt_boss", "boss_blind"),
    ("ip_boss", "boss_kholdstare"),
    ("mm_boss", "boss_vitreous"),
    ("tr_boss", "boss_trinexx"),
];

/// With boss shuffle any boss can sit in a slot, so the slot needs all of them.
fn boss_slot(vanilla: &'static str) -> Requirement {
    any([
        all([req("no_boss_shuffle"), req(vanilla)]),
        all([req("boss_shuffle"), req("can_defeat_any_boss")]),
    ])
}

pub(super) fn definitions() -> Vec<Definition> {
    let mut definitions = vec![
        requirement(
            "boss_armos",
            any([
                req("sword_1"),
                req("hammer"),
                req("can_shoot_arrows"),
                req("boomerang"),
                req("red_boomerang"),
                req("somaria"),
                req("byrna"),
                all([
                    req("can_extend_magic"),
                    any([req("fire_rod"), req("ice_rod")]),
                ]),
            ]),
        ),
        requirement(
            "boss_lanmolas",
            any([
                req("sword_1"),
                req("hammer"),
                req("can_shoot_arrows"),
                req("fire_rod"),
                req("ice_rod"),
                req("somaria"),
                req("byrna"),
            ]),
        ),
        requirement("boss_moldorm", any([req("sword_1"), req("hammer")])),
        requirement(
            "boss_helmasaur",
            all([
                any([req("bomb"), req("hammer")]),
                any([req("sword_2"), req("can_shoot_arrows")]),
            ]),
        ),
        requirement(
            "boss_arrghus",
            all([req("hookshot"), any([req("sword_1"), req("hammer")])]),
        ),
        requirement(
            "boss_mothula",
            any([
                req("sword_1"),
                req("hammer"),
                all([
                    req("can_extend_magic"),
                    any([req("fire_rod"), req("somaria"), req("byrna")]),
                ]),
            ]),
        ),
        requirement(
            "boss_blind",
            any([
                req("sword_1"),
                req("hammer"),
                req("somaria"),
                req("byrna"),
            ]),
        ),
        requirement(
            "boss_kholdstare",
            all([
                req("can_melt_things"),
                any([req("hammer"), req("sword_1"), req("fire_rod")]),
            ]),
        ),
        requirement(
            "boss_vitreous",
            any([req("hammer"), req("sword_1"), req("can_shoot_arrows")]),
        ),
        requirement(
            "boss_trinexx",
            all([
                req("fire_rod"),
                req("ice_rod"),
                any([
                    req("sword_3"),
                    req("hammer"),
                    all([req("sword_2"), req("can_extend_magic")]),
                ]),
            ]),
        ),
        requirement("boss_agahnim2", req("can_defeat_agahnim")),
        requirement(
            "boss_ganon",
            all([
                req("can_shoot_silver_arrows"),
                req("can_light_torches"),
                any([req("sword_2"), all([req("swordless"), req("hammer")])]),
            ]),
        ),
        requirement(
            "can_defeat_any_boss",
            Requirement::And(
                BOSS_SLOTS
                    .iter()
                    .map(|&(_, boss)| req(boss))
                    .collect(),
            ),
        ),
    ];

    definitions.extend(
        BOSS_SLOTS
            .iter()
            .map(|&(slot, boss)| requirement(slot, boss_slot(boss))),
    );

    definitions
}
