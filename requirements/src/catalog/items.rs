use {
    super::{Definition, requirement},
    crate::requirement::{at_least, exactly, has, sum_at_least},
    tracker_components::ItemType,
};

/// Single-item possession checks, one per simple inventory slot.
const POSSESSIONS: [(&str, ItemType); 30] = [
    ("bow", ItemType::Bow),
    ("silver_arrows", ItemType::SilverArrows),
    ("boomerang", ItemType::Boomerang),
    ("red_boomerang", ItemType::RedBoomerang),
    ("hookshot", ItemType::Hookshot),
    ("bomb", ItemType::Bomb),
    ("mushroom", ItemType::Mushroom),
    ("powder", ItemType::Powder),
    ("fire_rod", ItemType::FireRod),
    ("ice_rod", ItemType::IceRod),
    ("bombos", ItemType::Bombos),
    ("ether", ItemType::Ether),
    ("quake", ItemType::Quake),
    ("lamp", ItemType::Lamp),
    ("hammer", ItemType::Hammer),
    ("shovel", ItemType::Shovel),
    ("flute", ItemType::Flute),
    ("net", ItemType::Net),
    ("book", ItemType::Book),
    ("bottle", ItemType::Bottle),
    ("somaria", ItemType::Somaria),
    ("byrna", ItemType::Byrna),
    ("cape", ItemType::Cape),
    ("mirror", ItemType::Mirror),
    ("boots", ItemType::Boots),
    ("flippers", ItemType::Flippers),
    ("moon_pearl", ItemType::MoonPearl),
    ("half_magic", ItemType::HalfMagic),
    ("aga1", ItemType::Aga1),
    ("green_pendant", ItemType::GreenPendant),
];

pub(super) fn definitions() -> Vec<Definition> {
    let mut definitions: Vec<_> = POSSESSIONS
        .iter()
        .map(|&(id, item)| requirement(id, has(item)))
        .collect();

    definitions.extend([
        // Progressive slots
        requirement("gloves_1", at_least(ItemType::Gloves, 1)),
        requirement("gloves_2", at_least(ItemType::Gloves, 2)),
        requirement("swordless", exactly(ItemType::Sword, 0)),
        requirement("sword_1", at_least(ItemType::Sword, 2)),
        requirement("sword_2", at_least(ItemType::Sword, 3)),
        requirement("sword_3", at_least(ItemType::Sword, 4)),
        requirement("sword_4", at_least(ItemType::Sword, 5)),
        requirement("shield_1", at_least(ItemType::Shield, 1)),
        requirement("shield_2", at_least(ItemType::Shield, 2)),
        requirement("shield_3", at_least(ItemType::Shield, 3)),
        requirement("mail_1", at_least(ItemType::Mail, 1)),
        requirement("mail_2", at_least(ItemType::Mail, 2)),
        // Prizes
        requirement(
            "all_pendants",
            sum_at_least(&[ItemType::Pendant, ItemType::GreenPendant], 3),
        ),
        requirement(
            "all_crystals",
            sum_at_least(&[ItemType::Crystal, ItemType::RedCrystal], 7),
        ),
        requirement("red_crystals", at_least(ItemType::RedCrystal, 2)),
    ]);

    definitions
}
