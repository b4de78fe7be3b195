//! The requirement algebra: primitives over the item ledger and the mode
//! configuration, combined with AND/OR/NOT.

use {
    tracker_components::{Accessibility, ItemType, ModeField, ModeSetting, WorldState},
    tracker_resources::{ItemLedger, ModeConfiguration},
};

/// A leaf input a requirement can read. Keys of the registry's dependency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    Item(ItemType),
    Mode(ModeField),
}

/// A node in a requirement expression.
///
/// `R` is the reference type: catalog definitions refer to other entries by
/// identifier (`&'static str`), the registry compiles those into indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement<R = &'static str> {
    // --- Logic Gates ---
    /// Minimum tier among the operands. Empty is `Normal`.
    And(Vec<Requirement<R>>),
    /// Maximum tier among the operands. Empty is `None`.
    Or(Vec<Requirement<R>>),
    /// Mirrors the operand's tier across the ordering.
    Not(Box<Requirement<R>>),
    /// Always yields the given tier. Caps degraded routes when ANDed in.
    Fixed(Accessibility),
    /// Another named requirement or node.
    Ref(R),

    // --- Leaf Sensors ---
    /// `count(item) >= count`.
    Threshold { item: ItemType, count: u32 },
    /// `count(item) == count`.
    Exact { item: ItemType, count: u32 },
    /// Sum of the counts of `items` is at least `count`.
    SumThreshold { items: Vec<ItemType>, count: u32 },
    /// The mode field holds the given value.
    Flag(ModeSetting),
    /// `Flag(gate)` and `Threshold { item, count }` both hold. The item is inert
    /// while the gate is off.
    Gated {
        gate: ModeSetting,
        item: ItemType,
        count: u32,
    },
    /// Dungeon keys, topped up by the generic pool in the pooled-keys world state.
    Keys {
        dungeon_key: ItemType,
        count: u32,
        pooled_key: ItemType,
    },
}

impl<R> Requirement<R> {
    /// Evaluates the expression against the current state.
    ///
    /// `resolve` supplies the tier of referenced entries; the registry hands in
    /// its cache-backed lookup here.
    pub fn evaluate(
        &self,
        items: &ItemLedger,
        mode: &ModeConfiguration,
        resolve: &mut dyn FnMut(&R) -> Accessibility,
    ) -> Accessibility {
        match self {
            Requirement::And(operands) => {
                let mut tier = Accessibility::Normal;
                for operand in operands {
                    tier = tier.min(operand.evaluate(items, mode, resolve));
                    if tier == Accessibility::None {
                        break;
                    }
                }
                tier
            }
            Requirement::Or(operands) => {
                let mut tier = Accessibility::None;
                for operand in operands {
                    tier = tier.max(operand.evaluate(items, mode, resolve));
                    if tier == Accessibility::Normal {
                        break;
                    }
                }
                tier
            }
            Requirement::Not(operand) => operand.evaluate(items, mode, resolve).invert(),
            Requirement::Fixed(tier) => *tier,
            Requirement::Ref(reference) => resolve(reference),
            Requirement::Threshold { item, count } => {
                Accessibility::from_bool(items.get(*item) >= *count)
            }
            Requirement::Exact { item, count } => {
                Accessibility::from_bool(items.get(*item) == *count)
            }
            Requirement::SumThreshold {
                items: sources,
                count,
            } => Accessibility::from_bool(items.sum(sources) >= u64::from(*count)),
            Requirement::Flag(setting) => Accessibility::from_bool(mode.is(*setting)),
            Requirement::Gated { gate, item, count } => {
                Accessibility::from_bool(mode.is(*gate) && items.get(*item) >= *count)
            }
            Requirement::Keys {
                dungeon_key,
                count,
                pooled_key,
            } => {
                let keys = [*dungeon_key, *pooled_key];
                let keys = if mode.world_state() == WorldState::Retro {
                    &keys[..]
                } else {
                    &keys[..1]
                };
                Accessibility::from_bool(items.sum(keys) >= u64::from(*count))
            }
        }
    }

    /// Records every leaf input and every reference the expression reads.
    pub fn collect_dependencies<'a>(&'a self, inputs: &mut Vec<Input>, refs: &mut Vec<&'a R>) {
        match self {
            Requirement::And(operands) | Requirement::Or(operands) => {
                for operand in operands {
                    operand.collect_dependencies(inputs, refs);
                }
            }
            Requirement::Not(operand) => operand.collect_dependencies(inputs, refs),
            Requirement::Fixed(_) => {}
            Requirement::Ref(reference) => refs.push(reference),
            Requirement::Threshold { item, .. } | Requirement::Exact { item, .. } => {
                inputs.push(Input::Item(*item));
            }
            Requirement::SumThreshold { items, .. } => {
                inputs.extend(items.iter().map(|&item| Input::Item(item)));
            }
            Requirement::Flag(setting) => inputs.push(Input::Mode(setting.field())),
            Requirement::Gated { gate, item, .. } => {
                inputs.push(Input::Mode(gate.field()));
                inputs.push(Input::Item(*item));
            }
            Requirement::Keys {
                dungeon_key,
                pooled_key,
                ..
            } => {
                inputs.push(Input::Item(*dungeon_key));
                inputs.push(Input::Item(*pooled_key));
                inputs.push(Input::Mode(ModeField::WorldState));
            }
        }
    }

    /// Rebuilds the expression with every reference translated by `f`.
    pub fn try_map_refs<S, E>(
        &self,
        f: &mut impl FnMut(&R) -> Result<S, E>,
    ) -> Result<Requirement<S>, E> {
        Ok(match self {
            Requirement::And(operands) => Requirement::And(
                operands
                    .iter()
                    .map(|operand| operand.try_map_refs(f))
                    .collect::<Result<_, _>>()?,
            ),
            Requirement::Or(operands) => Requirement::Or(
                operands
                    .iter()
                    .map(|operand| operand.try_map_refs(f))
                    .collect::<Result<_, _>>()?,
            ),
            Requirement::Not(operand) => Requirement::Not(Box::new(operand.try_map_refs(f)?)),
            Requirement::Fixed(tier) => Requirement::Fixed(*tier),
            Requirement::Ref(reference) => Requirement::Ref(f(reference)?),
            Requirement::Threshold { item, count } => Requirement::Threshold {
                item: *item,
                count: *count,
            },
            Requirement::Exact { item, count } => Requirement::Exact {
                item: *item,
                count: *count,
            },
            Requirement::SumThreshold { items, count } => Requirement::SumThreshold {
                items: items.clone(),
                count: *count,
            },
            Requirement::Flag(setting) => Requirement::Flag(*setting),
            Requirement::Gated { gate, item, count } => Requirement::Gated {
                gate: *gate,
                item: *item,
                count: *count,
            },
            Requirement::Keys {
                dungeon_key,
                count,
                pooled_key,
            } => Requirement::Keys {
                dungeon_key: *dungeon_key,
                count: *count,
                pooled_key: *pooled_key,
            },
        })
    }
}

// ============================================================================
// Constructors
// ============================================================================

/// `Threshold(item, 1)`: the player holds at least one.
pub fn has<R>(item: ItemType) -> Requirement<R> {
    Requirement::Threshold { item, count: 1 }
}

pub fn at_least<R>(item: ItemType, count: u32) -> Requirement<R> {
    Requirement::Threshold { item, count }
}

pub fn exactly<R>(item: ItemType, count: u32) -> Requirement<R> {
    Requirement::Exact { item, count }
}

pub fn sum_at_least<R>(items: &[ItemType], count: u32) -> Requirement<R> {
    Requirement::SumThreshold {
        items: items.to_vec(),
        count,
    }
}

pub fn flag<R>(setting: ModeSetting) -> Requirement<R> {
    Requirement::Flag(setting)
}

pub fn gated<R>(gate: ModeSetting, item: ItemType, count: u32) -> Requirement<R> {
    Requirement::Gated { gate, item, count }
}

/// Dungeon keys supplemented by the generic `SmallKey` pool.
pub fn keys<R>(dungeon_key: ItemType, count: u32) -> Requirement<R> {
    Requirement::Keys {
        dungeon_key,
        count,
        pooled_key: ItemType::SmallKey,
    }
}

pub fn fixed<R>(tier: Accessibility) -> Requirement<R> {
    Requirement::Fixed(tier)
}

pub fn req(id: &'static str) -> Requirement {
    Requirement::Ref(id)
}

pub fn all<R, const N: usize>(operands: [Requirement<R>; N]) -> Requirement<R> {
    Requirement::And(operands.into())
}

pub fn any<R, const N: usize>(operands: [Requirement<R>; N]) -> Requirement<R> {
    Requirement::Or(operands.into())
}

pub fn not<R>(operand: Requirement<R>) -> Requirement<R> {
    Requirement::Not(Box::new(operand))
}
