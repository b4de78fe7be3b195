use {
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// How reachable a requirement or region currently is.
///
/// The ordering is total and runs from `None` (unreachable) to `Normal`
/// (reachable with intended logic). Combinators rely on it: AND takes the
/// minimum of its operands, OR the maximum.
///
/// # Usage
/// - **Requirements**: every evaluated rule yields one of these.
/// - **Degraded routes**: `SequenceBreak` marks checks that are reachable only by
///   skipping an intended prerequisite (e.g. crossing a dark room without a lamp).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Accessibility {
    /// Cannot be reached.
    #[default]
    None,
    /// Visible from afar but not obtainable.
    Inspect,
    /// Only part of the location can be obtained.
    Partial,
    /// Obtainable by breaking the intended sequence.
    SequenceBreak,
    /// Obtainable within logic.
    Normal,
}

impl Accessibility {
    /// Every tier from lowest to highest.
    pub const ALL: [Accessibility; 5] = [
        Accessibility::None,
        Accessibility::Inspect,
        Accessibility::Partial,
        Accessibility::SequenceBreak,
        Accessibility::Normal,
    ];

    /// Mirrors the tier across the ordering: `None` and `Normal` swap, and the
    /// degraded tiers map onto their counterpart on the other side.
    pub fn invert(self) -> Self {
        match self {
            Accessibility::None => Accessibility::Normal,
            Accessibility::Inspect => Accessibility::SequenceBreak,
            Accessibility::Partial => Accessibility::Partial,
            Accessibility::SequenceBreak => Accessibility::Inspect,
            Accessibility::Normal => Accessibility::None,
        }
    }

    /// `Normal` when the predicate holds, `None` otherwise.
    pub fn from_bool(met: bool) -> Self {
        if met {
            Accessibility::Normal
        } else {
            Accessibility::None
        }
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Accessibility::None => "none",
            Accessibility::Inspect => "inspect",
            Accessibility::Partial => "partial",
            Accessibility::SequenceBreak => "sequence break",
            Accessibility::Normal => "normal",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(Accessibility::None < Accessibility::Inspect);
        assert!(Accessibility::Inspect < Accessibility::Partial);
        assert!(Accessibility::Partial < Accessibility::SequenceBreak);
        assert!(Accessibility::SequenceBreak < Accessibility::Normal);
        assert_eq!(Accessibility::default(), Accessibility::None);
    }

    #[test]
    fn test_invert_reverses_ordering() {
        for a in Accessibility::ALL {
            assert_eq!(a.invert().invert(), a);
            for b in Accessibility::ALL {
                // Inversion is order-reversing.
                assert_eq!(a < b, b.invert() < a.invert());
            }
        }
        assert_eq!(Accessibility::Normal.invert(), Accessibility::None);
        assert_eq!(Accessibility::None.invert(), Accessibility::Normal);
    }

    #[test]
    fn test_serialization() {
        let serialized = ron::to_string(&Accessibility::SequenceBreak).unwrap();
        assert_eq!(serialized, "SequenceBreak");

        let deserialized: Accessibility = ron::from_str("Partial").unwrap();
        assert_eq!(deserialized, Accessibility::Partial);
    }
}
