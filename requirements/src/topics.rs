//! Per-identifier change subscriptions.
//!
//! Each subscribed identifier gets a topic entity. After a mutation, topics of
//! invalidated identifiers are re-queried and `AccessibilityChanged` is
//! triggered on those whose tier moved.

use {
    crate::tracker::{Tracker, TrackerUpdate},
    bevy::{platform::collections::HashMap, prelude::*},
    tracker_components::Accessibility,
    tracker_events::AccessibilityChanged,
    tracker_resources::TrackerError,
};

/// Marks the topic entity of one requirement or node identifier.
#[derive(Component, Debug, Clone)]
pub struct AccessibilityTopic {
    pub id: &'static str,
}

#[derive(Debug, Clone, Copy)]
struct TopicState {
    entity: Entity,
    /// Tier last reported to subscribers.
    last: Accessibility,
}

/// Maps identifiers to their topic entities.
#[derive(Resource, Default)]
pub struct AccessibilityTopics {
    topics: HashMap<&'static str, TopicState>,
}

impl AccessibilityTopics {
    pub fn get(&self, id: &str) -> Option<Entity> {
        self.topics.get(id).map(|topic| topic.entity)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

/// Returns the topic entity for `id`, spawning it on first use.
///
/// Observe `AccessibilityChanged` on the returned entity to follow the tier of
/// `id`. Fails when the registry is not built yet or `id` is unknown.
pub fn subscribe(world: &mut World, id: &str) -> Result<Entity, TrackerError> {
    if let Some(entity) = world.resource::<AccessibilityTopics>().get(id) {
        return Ok(entity);
    }

    let (id, last) = {
        let mut tracker = world.resource_mut::<Tracker>();
        let last = tracker.accessibility(id)?;
        // Resolve to the catalog's own `&'static str`
        let id = tracker
            .identifiers()
            .find(|known| *known == id)
            .ok_or_else(|| TrackerError::NotFound(id.to_string()))?;
        (id, last)
    };

    let entity = world.spawn(AccessibilityTopic { id }).id();
    world
        .resource_mut::<AccessibilityTopics>()
        .topics
        .insert(id, TopicState { entity, last });
    debug!(id, ?entity, %last, "accessibility topic created");

    Ok(entity)
}

/// Triggers `AccessibilityChanged` for every subscribed identifier in
/// `update.invalidated` whose tier differs from the last one reported.
pub(crate) fn publish_changes(
    update: &TrackerUpdate,
    tracker: &mut Tracker,
    topics: &mut AccessibilityTopics,
    commands: &mut Commands,
) {
    if topics.is_empty() {
        return;
    }

    for &id in &update.invalidated {
        let Some(topic) = topics.topics.get_mut(id) else {
            continue;
        };

        let current = match tracker.accessibility(id) {
            Ok(tier) => tier,
            Err(e) => {
                error!(id, error = %e, "failed to re-query subscribed identifier");
                continue;
            }
        };
        if current == topic.last {
            continue;
        }

        trace!(id, previous = %topic.last, %current, "accessibility changed");
        commands.trigger(AccessibilityChanged {
            entity: topic.entity,
            id: id.to_string(),
            previous: topic.last,
            current,
        });
        topic.last = current;
    }
}
