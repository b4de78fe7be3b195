#[cfg(test)]
mod tests {
    use {
        crate::{AccessibilityTopics, RequirementsPlugin, Tracker, subscribe},
        bevy::prelude::*,
        tracker_components::{Accessibility, ItemType, ModeSetting, WorldState},
        tracker_events::*,
        tracker_resources::{ModeConfiguration, TrackerError},
    };

    /// Records every notification the plugin emits.
    #[derive(Resource, Default)]
    struct Notifications {
        items: Vec<(ItemType, u32, u32)>,
        modes: Vec<ModeSetting>,
        tiers: Vec<(String, Accessibility, Accessibility)>,
        rejected: Vec<TrackerError>,
    }

    fn app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, RequirementsPlugin));
        app.init_resource::<Notifications>();
        app.add_observer(
            |trigger: On<ItemCountChanged>, mut notes: ResMut<Notifications>| {
                let event = trigger.event();
                notes.items.push((event.item, event.previous, event.current));
            },
        );
        app.add_observer(|trigger: On<ModeChanged>, mut notes: ResMut<Notifications>| {
            notes.modes.push(trigger.event().current);
        });
        app.add_observer(
            |trigger: On<AccessibilityChanged>, mut notes: ResMut<Notifications>| {
                let event = trigger.event();
                notes
                    .tiers
                    .push((event.id.clone(), event.previous, event.current));
            },
        );
        app.add_observer(
            |trigger: On<MutationRejected>, mut notes: ResMut<Notifications>| {
                notes.rejected.push(trigger.event().error.clone());
            },
        );
        app.update(); // Run startup
        app
    }

    fn tier(app: &mut App, id: &str) -> Accessibility {
        app.world_mut()
            .resource_mut::<Tracker>()
            .accessibility(id)
            .unwrap()
    }

    #[test]
    fn test_registry_built_on_startup() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, RequirementsPlugin));

        assert_eq!(
            app.world_mut().resource_mut::<Tracker>().accessibility("bow"),
            Err(TrackerError::UninitializedRegistry)
        );

        app.update();
        assert_eq!(
            app.world_mut().resource_mut::<Tracker>().accessibility("bow"),
            Ok(Accessibility::None)
        );
    }

    #[test]
    fn test_set_item_count_notifies_item_and_tier() {
        let mut app = app();
        subscribe(app.world_mut(), "can_shoot_silver_arrows").unwrap();

        app.world_mut().trigger(SetItemCount {
            item: ItemType::Bow,
            count: 1,
        });
        app.update();

        {
            let notes = app.world().resource::<Notifications>();
            assert_eq!(notes.items, vec![(ItemType::Bow, 0, 1)]);
            assert!(notes.tiers.is_empty(), "Still missing silver arrows");
        }

        app.world_mut().trigger(SetItemCount {
            item: ItemType::SilverArrows,
            count: 1,
        });
        app.update();

        {
            let notes = app.world().resource::<Notifications>();
            assert_eq!(notes.items.len(), 2);
            assert_eq!(
                notes.tiers,
                vec![(
                    "can_shoot_silver_arrows".to_string(),
                    Accessibility::None,
                    Accessibility::Normal
                )]
            );
        }
    }

    #[test]
    fn test_topic_entity_receives_targeted_event() {
        #[derive(Resource, Default)]
        struct LampTopicHits(Vec<Accessibility>);

        let mut app = app();
        app.init_resource::<LampTopicHits>();

        let topic = subscribe(app.world_mut(), "can_cross_dark_rooms").unwrap();
        // Subscribing twice hands out the same topic
        assert_eq!(subscribe(app.world_mut(), "can_cross_dark_rooms"), Ok(topic));
        assert_eq!(app.world().resource::<AccessibilityTopics>().len(), 1);

        app.world_mut().entity_mut(topic).observe(
            |trigger: On<AccessibilityChanged>, mut hits: ResMut<LampTopicHits>| {
                hits.0.push(trigger.event().current);
            },
        );

        app.world_mut().trigger(SetItemCount {
            item: ItemType::Lamp,
            count: 1,
        });
        app.update();
        app.world_mut().trigger(SetItemCount {
            item: ItemType::Lamp,
            count: 0,
        });
        app.update();

        assert_eq!(
            app.world().resource::<LampTopicHits>().0,
            vec![Accessibility::Normal, Accessibility::SequenceBreak]
        );
    }

    #[test]
    fn test_subscribe_unknown_identifier() {
        let mut app = app();
        assert_eq!(
            subscribe(app.world_mut(), "lost_woods_secret"),
            Err(TrackerError::NotFound("lost_woods_secret".into()))
        );
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut app = app();

        app.world_mut().trigger(SetItemCount {
            item: ItemType::Gloves,
            count: 3,
        });
        app.world_mut().trigger(AdjustItemCount {
            item: ItemType::Gloves,
            delta: -1,
        });
        app.update();

        let notes = app.world().resource::<Notifications>();
        assert!(notes.items.is_empty());
        assert_eq!(notes.rejected.len(), 2);
        assert!(matches!(
            notes.rejected[0],
            TrackerError::OutOfRange {
                item: ItemType::Gloves,
                value: 3,
                maximum: 2
            }
        ));
        assert!(matches!(
            notes.rejected[1],
            TrackerError::OutOfRange { value: -1, .. }
        ));
    }

    #[test]
    fn test_adjust_item_count_cycles_sword() {
        let mut app = app();

        for _ in 0..3 {
            app.world_mut().trigger(AdjustItemCount {
                item: ItemType::Sword,
                delta: 1,
            });
        }
        app.update();

        assert_eq!(app.world().resource::<Tracker>().items().get(ItemType::Sword), 3);
        assert_eq!(tier(&mut app, "sword_2"), Accessibility::Normal);
        assert_eq!(tier(&mut app, "sword_3"), Accessibility::None);
    }

    #[test]
    fn test_set_mode_notifies_once() {
        let mut app = app();
        subscribe(app.world_mut(), "world_state_inverted").unwrap();

        let inverted = ModeSetting::WorldState(WorldState::Inverted);
        app.world_mut().trigger(SetMode(inverted));
        app.world_mut().trigger(SetMode(inverted));
        app.update();

        let notes = app.world().resource::<Notifications>();
        assert_eq!(notes.modes, vec![inverted]);
        assert_eq!(notes.tiers.len(), 1);
    }

    #[test]
    fn test_apply_mode_preset() {
        let mut app = app();
        let preset = ModeConfiguration::from_ron(
            "(world_state: Retro, dungeon_item_shuffle: Keysanity, boss_shuffle: true)",
        )
        .unwrap();

        app.world_mut().trigger(ApplyModePreset(preset));
        app.update();

        assert_eq!(app.world().resource::<Notifications>().modes.len(), 3);
        assert_eq!(tier(&mut app, "world_state_retro"), Accessibility::Normal);
        assert_eq!(tier(&mut app, "small_key_shuffle"), Accessibility::Normal);
        assert_eq!(tier(&mut app, "boss_shuffle"), Accessibility::Normal);
    }

    #[test]
    fn test_reset_tracker_restores_defaults() {
        let mut app = app();
        subscribe(app.world_mut(), "moon_pearl").unwrap();

        app.world_mut().trigger(SetItemCount {
            item: ItemType::MoonPearl,
            count: 1,
        });
        app.world_mut()
            .trigger(SetMode(ModeSetting::EntranceShuffle(true)));
        app.update();
        assert_eq!(tier(&mut app, "moon_pearl"), Accessibility::Normal);

        app.world_mut().trigger(ResetTracker);
        app.update();

        assert_eq!(tier(&mut app, "moon_pearl"), Accessibility::None);
        assert_eq!(tier(&mut app, "entrance_shuffle"), Accessibility::None);

        let notes = app.world().resource::<Notifications>();
        assert_eq!(
            notes.tiers.last(),
            Some(&(
                "moon_pearl".to_string(),
                Accessibility::Normal,
                Accessibility::None
            ))
        );
        assert_eq!(notes.items.last(), Some(&(ItemType::MoonPearl, 1, 0)));
    }
}
