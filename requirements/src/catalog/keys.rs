use {
    super::{Definition, requirement},
    crate::requirement::{has, keys},
    tracker_components::ItemType,
};

/// Small key counts per dungeon. The generic key pool counts towards each of
/// them in the pooled-keys world state.
const SMALL_KEYS: [(&str, ItemType, u32); 29] = [
    ("hc_small_key_1", ItemType::HCSmallKey, 1),
    ("at_small_key_1", ItemType::ATSmallKey, 1),
    ("at_small_key_2", ItemType::ATSmallKey, 2),
    ("dp_small_key_1", ItemType::DPSmallKey, 1),
    ("toh_small_key_1", ItemType::ToHSmallKey, 1),
    ("pod_small_key_1", ItemType::PoDSmallKey, 1),
    ("pod_small_key_2", ItemType::PoDSmallKey, 2),
    ("pod_small_key_3", ItemType::PoDSmallKey, 3),
    ("pod_small_key_4", ItemType::PoDSmallKey, 4),
    ("pod_small_key_5", ItemType::PoDSmallKey, 5),
    ("pod_small_key_6", ItemType::PoDSmallKey, 6),
    ("sp_small_key_1", ItemType::SPSmallKey, 1),
    ("sw_small_key_1", ItemType::SWSmallKey, 1),
    ("sw_small_key_2", ItemType::SWSmallKey, 2),
    ("sw_small_key_3", ItemType::SWSmallKey, 3),
    ("tt_small_key_1", ItemType::TTSmallKey, 1),
    ("ip_small_key_1", ItemType::IPSmallKey, 1),
    ("ip_small_key_2", ItemType::IPSmallKey, 2),
    ("mm_small_key_1", ItemType::MMSmallKey, 1),
    ("mm_small_key_2", ItemType::MMSmallKey, 2),
    ("mm_small_key_3", ItemType::MMSmallKey, 3),
    ("tr_small_key_1", ItemType::TRSmallKey, 1),
    ("tr_small_key_2", ItemType::TRSmallKey, 2),
    ("tr_small_key_3", ItemType::TRSmallKey, 3),
    ("tr_small_key_4", ItemType::TRSmallKey, 4),
    ("gt_small_key_1", ItemType::GTSmallKey, 1),
    ("gt_small_key_2", ItemType::GTSmallKey, 2),
    ("gt_small_key_3", ItemType::GTSmallKey, 3),
    ("gt_small_key_4", ItemType::GTSmallKey, 4),
];

const BIG_KEYS: [(&str, ItemType); 11] = [
    ("ep_big_key", ItemType::EPBigKey),
    ("dp_big_key", ItemType::DPBigKey),
    ("toh_big_key", ItemType::ToHBigKey),
    ("pod_big_key", ItemType::PoDBigKey),
    ("sp_big_key", ItemType::SPBigKey),
    ("sw_big_key", ItemType::SWBigKey),
    ("tt_big_key", ItemType::TTBigKey),
    ("ip_big_key", ItemType::IPBigKey),
    ("mm_big_key", ItemType::MMBigKey),
    ("tr_big_key", ItemType::TRBigKey),
    ("gt_big_key", ItemType::GTBigKey),
];

pub(super) fn definitions() -> Vec<Definition> {
    let small_keys = SMALL_KEYS
        .iter()
        .map(|&(id, item, count)| requirement(id, keys(item, count)));
    let big_keys = BIG_KEYS
        .iter()
        .map(|&(id, item)| requirement(id, has(item)));

    small_keys.chain(big_keys).collect()
}
