//! Mutable tracker state: the item ledger and the mode configuration, plus the
//! error type every tracker operation reports through.

mod error;
mod ledger;
mod mode;

pub use {error::*, ledger::*, mode::*};
