use {
    crate::TrackerError,
    bevy::{log::trace, platform::collections::HashMap},
    tracker_components::ItemType,
};

/// Current and maximum quantity of one inventory category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCount {
    pub current: u32,
    pub maximum: u32,
}

/// A count that actually changed. Returned by every ledger mutation and used as
/// the change notification for that category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemChange {
    pub item: ItemType,
    pub previous: u32,
    pub current: u32,
}

/// Per-category item counts, each bounded to `0..=maximum`.
///
/// The ledger is the only source of "what the player has". Mutations that would
/// leave the bounds are rejected and keep the prior value; mutations that store
/// the same value report no change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLedger {
    counts: HashMap<ItemType, ItemCount>,
}

impl Default for ItemLedger {
    fn default() -> Self {
        let counts = ItemType::ALL
            .iter()
            .map(|&item| {
                (
                    item,
                    ItemCount {
                        current: 0,
                        maximum: item.maximum(),
                    },
                )
            })
            .collect();
        Self { counts }
    }
}

impl ItemLedger {
    /// Overrides the bound of one category, clamping its current count.
    pub fn with_maximum(mut self, item: ItemType, maximum: u32) -> Self {
        let entry = self.entry_mut(item);
        entry.maximum = maximum;
        entry.current = entry.current.min(maximum);
        self
    }

    pub fn get(&self, item: ItemType) -> u32 {
        self.counts.get(&item).map(|c| c.current).unwrap_or(0)
    }

    pub fn maximum(&self, item: ItemType) -> u32 {
        self.counts
            .get(&item)
            .map(|c| c.maximum)
            .unwrap_or_else(|| item.maximum())
    }

    /// Sum of the current counts of several categories. Widened so that
    /// custom maximums near `u32::MAX` cannot overflow.
    pub fn sum(&self, items: &[ItemType]) -> u64 {
        items.iter().map(|&item| u64::from(self.get(item))).sum()
    }

    /// Stores a new count for `item`.
    ///
    /// Returns the change, or `None` when the value was already stored.
    pub fn set(&mut self, item: ItemType, value: u32) -> Result<Option<ItemChange>, TrackerError> {
        let entry = self.entry_mut(item);
        if value > entry.maximum {
            return Err(TrackerError::OutOfRange {
                item,
                value: i64::from(value),
                maximum: entry.maximum,
            });
        }

        if entry.current == value {
            return Ok(None);
        }

        let previous = entry.current;
        entry.current = value;
        trace!(%item, previous, current = value, "item count changed");

        Ok(Some(ItemChange {
            item,
            previous,
            current: value,
        }))
    }

    /// Moves the count of `item` by `delta`. Used by click-to-cycle widgets.
    pub fn adjust(
        &mut self,
        item: ItemType,
        delta: i32,
    ) -> Result<Option<ItemChange>, TrackerError> {
        let value = i64::from(self.get(item)) + i64::from(delta);
        let maximum = self.maximum(item);

        match u32::try_from(value) {
            Ok(value) => self.set(item, value),
            Err(_) => Err(TrackerError::OutOfRange {
                item,
                value,
                maximum,
            }),
        }
    }

    /// Sets every count back to zero and returns the categories that changed.
    pub fn reset(&mut self) -> Vec<ItemChange> {
        let mut changes: Vec<_> = self
            .counts
            .iter_mut()
            .filter(|(_, count)| count.current != 0)
            .map(|(&item, count)| {
                let previous = count.current;
                count.current = 0;
                ItemChange {
                    item,
                    previous,
                    current: 0,
                }
            })
            .collect();

        changes.sort_by_key(|change| change.item);
        changes
    }

    fn entry_mut(&mut self, item: ItemType) -> &mut ItemCount {
        self.counts.entry(item).or_insert(ItemCount {
            current: 0,
            maximum: item.maximum(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_start_empty() {
        let ledger = ItemLedger::default();
        for item in ItemType::ALL {
            assert_eq!(ledger.get(item), 0);
            assert_eq!(ledger.maximum(item), item.maximum());
        }
    }

    #[test]
    fn test_set_within_bounds() {
        let mut ledger = ItemLedger::default();

        let change = ledger.set(ItemType::Sword, 3).unwrap();
        assert_eq!(
            change,
            Some(ItemChange {
                item: ItemType::Sword,
                previous: 0,
                current: 3
            })
        );
        assert_eq!(ledger.get(ItemType::Sword), 3);

        // Same value, no notification
        assert_eq!(ledger.set(ItemType::Sword, 3).unwrap(), None);
    }

    #[test]
    fn test_set_out_of_range_keeps_prior_value() {
        let mut ledger = ItemLedger::default();
        ledger.set(ItemType::Gloves, 1).unwrap();

        let err = ledger.set(ItemType::Gloves, 3).unwrap_err();
        assert_eq!(
            err,
            TrackerError::OutOfRange {
                item: ItemType::Gloves,
                value: 3,
                maximum: 2
            }
        );
        assert_eq!(ledger.get(ItemType::Gloves), 1);
    }

    #[test]
    fn test_adjust() {
        let mut ledger = ItemLedger::default();

        ledger.adjust(ItemType::Bottle, 2).unwrap();
        ledger.adjust(ItemType::Bottle, -1).unwrap();
        assert_eq!(ledger.get(ItemType::Bottle), 1);

        assert!(matches!(
            ledger.adjust(ItemType::Bottle, -2),
            Err(TrackerError::OutOfRange { value: -1, .. })
        ));
        assert!(ledger.adjust(ItemType::Bottle, 4).is_err());
        assert_eq!(ledger.get(ItemType::Bottle), 1);
    }

    #[test]
    fn test_reset_reports_changed_categories() {
        let mut ledger = ItemLedger::default();
        ledger.set(ItemType::Bow, 1).unwrap();
        ledger.set(ItemType::Crystal, 4).unwrap();

        let changes = ledger.reset();
        assert_eq!(changes.len(), 2);
        assert!(changes.iter().all(|c| c.current == 0));
        assert_eq!(ledger.get(ItemType::Crystal), 0);

        // Nothing left to change
        assert!(ledger.reset().is_empty());
    }

    #[test]
    fn test_with_maximum() {
        let mut ledger = ItemLedger::default().with_maximum(ItemType::Crystal, 7);
        ledger.set(ItemType::Crystal, 7).unwrap();
        assert_eq!(ledger.sum(&[ItemType::Crystal, ItemType::RedCrystal]), 7);

        let ledger = ledger.with_maximum(ItemType::Crystal, 2);
        assert_eq!(ledger.get(ItemType::Crystal), 2);
    }
}
