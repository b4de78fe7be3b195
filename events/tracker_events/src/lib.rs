use {
    bevy::prelude::*,
    tracker_components::{Accessibility, ItemType, ModeSetting},
    tracker_resources::{ModeConfiguration, TrackerError},
};

// ============================================================================
// Mutation requests
// ============================================================================

/// Request to store a new count for an item category.
///
/// This **Observer** event is the bridge between the tracker UI and the item
/// ledger. Out-of-range counts are rejected with `MutationRejected`.
#[derive(Event, Debug, Clone)]
pub struct SetItemCount {
    pub item: ItemType,
    pub count: u32,
}

/// Request to move an item count up or down (click-to-cycle widgets).
#[derive(Event, Debug, Clone)]
pub struct AdjustItemCount {
    pub item: ItemType,
    pub delta: i32,
}

/// Request to change one mode field.
#[derive(Event, Debug, Clone)]
pub struct SetMode(pub ModeSetting);

/// Request to replace the whole mode configuration, e.g. from a preset file.
#[derive(Event, Debug, Clone)]
pub struct ApplyModePreset(pub ModeConfiguration);

/// Request to clear the item ledger and every cached tier.
#[derive(Event, Debug, Clone, Default)]
pub struct ResetTracker;

// ============================================================================
// Notifications
// ============================================================================

/// Fired globally after an item count changed.
#[derive(Event, Debug, Clone)]
pub struct ItemCountChanged {
    pub item: ItemType,
    pub previous: u32,
    pub current: u32,
}

/// Fired globally after a mode field changed.
#[derive(Event, Debug, Clone)]
pub struct ModeChanged {
    pub previous: ModeSetting,
    pub current: ModeSetting,
}

/// Fired globally when a mutation request was rejected. The tracker state is
/// unchanged.
#[derive(Event, Debug, Clone)]
pub struct MutationRejected {
    pub error: TrackerError,
}

/// Triggered on an accessibility topic entity when the tier of its identifier
/// changed.
///
/// Consumers subscribe by observing the topic entity returned from
/// `requirements::subscribe`; a global observer sees the changes of every
/// subscribed identifier.
#[derive(EntityEvent, Debug, Clone)]
pub struct AccessibilityChanged {
    /// The topic entity this event targets.
    #[event_target]
    pub entity: Entity,
    pub id: String,
    pub previous: Accessibility,
    pub current: Accessibility,
}
