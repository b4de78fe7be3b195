use {
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// An inventory category tracked by the item ledger.
///
/// Most categories are a simple possession flag with a maximum of 1. The
/// progressive ones (swords, gloves, shields, mail, bottles) and the key and
/// prize pools carry higher maxima.
///
/// The sword slot uses the tracker convention where `0` marks a swordless seed,
/// `1` means no sword has been found yet and `2..=5` are the fighter, master,
/// tempered and golden swords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemType {
    // --- Equipment ---
    Sword,
    Shield,
    Mail,
    Gloves,
    Boots,
    Flippers,
    MoonPearl,
    HalfMagic,

    // --- Y items ---
    Bow,
    SilverArrows,
    Boomerang,
    RedBoomerang,
    Hookshot,
    Bomb,
    Mushroom,
    Powder,
    FireRod,
    IceRod,
    Bombos,
    Ether,
    Quake,
    Lamp,
    Hammer,
    Shovel,
    Flute,
    Net,
    Book,
    Bottle,
    Somaria,
    Byrna,
    Cape,
    Mirror,

    // --- Progress ---
    Aga1,
    Pendant,
    GreenPendant,
    Crystal,
    RedCrystal,

    // --- Keys ---
    /// Generic small keys, only usable in the pooled-keys world state.
    SmallKey,
    HCSmallKey,
    ATSmallKey,
    DPSmallKey,
    ToHSmallKey,
    PoDSmallKey,
    SPSmallKey,
    SWSmallKey,
    TTSmallKey,
    IPSmallKey,
    MMSmallKey,
    TRSmallKey,
    GTSmallKey,
    EPBigKey,
    DPBigKey,
    ToHBigKey,
    PoDBigKey,
    SPBigKey,
    SWBigKey,
    TTBigKey,
    IPBigKey,
    MMBigKey,
    TRBigKey,
    GTBigKey,

    // --- Entrance shuffle access markers ---
    /// Marks a found entrance leading onto Death Mountain.
    DeathMountainAccess,
    /// Marks a found entrance leading into the dark world.
    DarkWorldAccess,
    /// Marks a found entrance leading into Ganon's Tower.
    GanonsTowerAccess,
}

impl ItemType {
    pub const ALL: [ItemType; 64] = [
        ItemType::Sword,
        ItemType::Shield,
        ItemType::Mail,
        ItemType::Gloves,
        ItemType::Boots,
        ItemType::Flippers,
        ItemType::MoonPearl,
        ItemType::HalfMagic,
        ItemType::Bow,
        ItemType::SilverArrows,
        ItemType::Boomerang,
        ItemType::RedBoomerang,
        ItemType::Hookshot,
        ItemType::Bomb,
        ItemType::Mushroom,
        ItemType::Powder,
        ItemType::FireRod,
        ItemType::IceRod,
        ItemType::Bombos,
        ItemType::Ether,
        ItemType::Quake,
        ItemType::Lamp,
        ItemType::Hammer,
        ItemType::Shovel,
        ItemType::Flute,
        ItemType::Net,
        ItemType::Book,
        ItemType::Bottle,
        ItemType::Somaria,
        ItemType::Byrna,
        ItemType::Cape,
        ItemType::Mirror,
        ItemType::Aga1,
        ItemType::Pendant,
        ItemType::GreenPendant,
        ItemType::Crystal,
        ItemType::RedCrystal,
        ItemType::SmallKey,
        ItemType::HCSmallKey,
        ItemType::ATSmallKey,
        ItemType::DPSmallKey,
        ItemType::ToHSmallKey,
        ItemType::PoDSmallKey,
        ItemType::SPSmallKey,
        ItemType::SWSmallKey,
        ItemType::TTSmallKey,
        ItemType::IPSmallKey,
        ItemType::MMSmallKey,
        ItemType::TRSmallKey,
        ItemType::GTSmallKey,
        ItemType::EPBigKey,
        ItemType::DPBigKey,
        ItemType::ToHBigKey,
        ItemType::PoDBigKey,
        ItemType::SPBigKey,
        ItemType::SWBigKey,
        ItemType::TTBigKey,
        ItemType::IPBigKey,
        ItemType::MMBigKey,
        ItemType::TRBigKey,
        ItemType::GTBigKey,
        ItemType::DeathMountainAccess,
        ItemType::DarkWorldAccess,
        ItemType::GanonsTowerAccess,
    ];

    /// Default upper bound of the category's count.
    pub fn maximum(self) -> u32 {
        match self {
            ItemType::Sword => 5,
            ItemType::Shield => 3,
            ItemType::Mail => 2,
            ItemType::Gloves => 2,
            ItemType::Bottle => 4,
            ItemType::Pendant => 2,
            ItemType::Crystal => 5,
            ItemType::RedCrystal => 2,
            ItemType::SmallKey => 29,
            ItemType::ATSmallKey => 2,
            ItemType::PoDSmallKey => 6,
            ItemType::SWSmallKey => 3,
            ItemType::IPSmallKey => 2,
            ItemType::MMSmallKey => 3,
            ItemType::TRSmallKey => 4,
            ItemType::GTSmallKey => 4,
            _ => 1,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
