use {thiserror::Error, tracker_components::ItemType};

/// Failures reported by the tracker core.
///
/// All of them are local and synchronous: the operation that produced one is
/// rejected and no state is changed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// A mutation tried to move an item count outside `0..=maximum`.
    #[error("count {value} for {item} is outside 0..={maximum}")]
    OutOfRange {
        item: ItemType,
        value: i64,
        maximum: u32,
    },

    /// A query named an identifier that is not in the catalog.
    #[error("no requirement or node named '{0}'")]
    NotFound(String),

    /// A query arrived before the registry was built.
    #[error("requirement registry queried before initialization")]
    UninitializedRegistry,

    /// Two catalog entries share an identifier.
    #[error("identifier '{0}' is defined more than once")]
    DuplicateIdentifier(String),

    /// A catalog entry refers to an identifier that does not exist.
    #[error("'{id}' references unknown identifier '{reference}'")]
    UnknownReference { id: String, reference: String },

    /// A mode preset could not be parsed.
    #[error("invalid mode preset: {0}")]
    InvalidPreset(String),
}
