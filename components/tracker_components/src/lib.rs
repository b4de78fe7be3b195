//! Value types shared by every tracker crate: accessibility tiers, item
//! categories and the game-mode options.

mod accessibility;
mod items;
mod mode;

pub use {accessibility::*, items::*, mode::*};
