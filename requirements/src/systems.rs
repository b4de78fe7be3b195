use {
    crate::{
        topics::{AccessibilityTopics, publish_changes},
        tracker::{Tracker, TrackerUpdate},
    },
    bevy::prelude::*,
    tracker_events::*,
    tracker_resources::TrackerError,
};

/// Startup system building the requirement registry from the catalog.
pub fn initialize_tracker(mut tracker: ResMut<Tracker>) {
    if let Err(e) = tracker.initialize() {
        error!(error = %e, "failed to build requirement catalog");
    }
}

/// Observer applying `SetItemCount` requests.
pub fn on_set_item_count(
    trigger: On<SetItemCount>,
    mut tracker: ResMut<Tracker>,
    mut topics: ResMut<AccessibilityTopics>,
    mut commands: Commands,
) {
    let event = trigger.event();
    debug!(item = ?event.item, count = %event.count, "set item count requested");

    let result = tracker.set_item_count(event.item, event.count);
    finish(result, &mut tracker, &mut topics, &mut commands);
}

/// Observer applying `AdjustItemCount` requests.
pub fn on_adjust_item_count(
    trigger: On<AdjustItemCount>,
    mut tracker: ResMut<Tracker>,
    mut topics: ResMut<AccessibilityTopics>,
    mut commands: Commands,
) {
    let event = trigger.event();
    debug!(item = ?event.item, delta = %event.delta, "adjust item count requested");

    let result = tracker.adjust_item_count(event.item, event.delta);
    finish(result, &mut tracker, &mut topics, &mut commands);
}

pub fn on_set_mode(
    trigger: On<SetMode>,
    mut tracker: ResMut<Tracker>,
    mut topics: ResMut<AccessibilityTopics>,
    mut commands: Commands,
) {
    let setting = trigger.event().0;
    debug!(?setting, "set mode requested");

    let update = tracker.set_mode(setting);
    finish(Ok(update), &mut tracker, &mut topics, &mut commands);
}

pub fn on_apply_mode_preset(
    trigger: On<ApplyModePreset>,
    mut tracker: ResMut<Tracker>,
    mut topics: ResMut<AccessibilityTopics>,
    mut commands: Commands,
) {
    let ApplyModePreset(preset) = trigger.event();
    info!(?preset, "applying mode preset");

    let update = tracker.apply_mode(preset);
    finish(Ok(update), &mut tracker, &mut topics, &mut commands);
}

/// Observer for `ResetTracker`: clears items, restores the default mode and
/// drops every cached tier.
pub fn on_reset_tracker(
    _trigger: On<ResetTracker>,
    mut tracker: ResMut<Tracker>,
    mut topics: ResMut<AccessibilityTopics>,
    mut commands: Commands,
) {
    info!("resetting tracker");

    let update = tracker.reset_all();
    finish(Ok(update), &mut tracker, &mut topics, &mut commands);
}

/// Emits input notifications and tier changes, or reports the rejection.
fn finish(
    result: Result<TrackerUpdate, TrackerError>,
    tracker: &mut Tracker,
    topics: &mut AccessibilityTopics,
    commands: &mut Commands,
) {
    let update = match result {
        Ok(update) => update,
        Err(error) => {
            warn!(%error, "tracker mutation rejected");
            commands.trigger(MutationRejected { error });
            return;
        }
    };

    for change in &update.items {
        commands.trigger(ItemCountChanged {
            item: change.item,
            previous: change.previous,
            current: change.current,
        });
    }
    for change in &update.modes {
        commands.trigger(ModeChanged {
            previous: change.previous,
            current: change.current,
        });
    }

    publish_changes(&update, tracker, topics, commands);
}
