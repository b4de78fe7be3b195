//! Requirement evaluation for the tracker: the requirement algebra, the fixed
//! catalog of named requirements and region nodes, and the registry that caches
//! their tiers and invalidates them when items or modes change.

pub mod catalog;
mod registry;
mod requirement;
mod systems;
mod topics;
mod tracker;

#[cfg(test)]
mod tests;

pub use {
    catalog::{Definition, DefinitionKind},
    registry::RequirementRegistry,
    requirement::*,
    systems::*,
    topics::{AccessibilityTopic, AccessibilityTopics, subscribe},
    tracker::{Tracker, TrackerUpdate},
};

use bevy::prelude::*;

pub struct RequirementsPlugin;

impl Plugin for RequirementsPlugin {
    fn build(&self, app: &mut App) {
        app
            // Resources
            .init_resource::<Tracker>()
            .init_resource::<AccessibilityTopics>()
            // Registry is built before the first frame
            .add_systems(Startup, initialize_tracker)
            // Mutation requests
            .add_observer(on_set_item_count)
            .add_observer(on_adjust_item_count)
            .add_observer(on_set_mode)
            .add_observer(on_apply_mode_preset)
            .add_observer(on_reset_tracker);
    }
}
