use {
    crate::{
        catalog::{self, Definition, DefinitionKind},
        registry::RequirementRegistry,
        requirement::Input,
    },
    bevy::prelude::*,
    tracker_components::{Accessibility, ItemType, ModeSetting},
    tracker_resources::{ItemChange, ItemLedger, ModeChange, ModeConfiguration, TrackerError},
};

/// What a mutation changed: the inputs that moved and the identifiers whose
/// cached tiers were dropped as a result.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrackerUpdate {
    pub items: Vec<ItemChange>,
    pub modes: Vec<ModeChange>,
    pub invalidated: Vec<&'static str>,
}

impl TrackerUpdate {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.modes.is_empty()
    }

    fn extend_invalidated(&mut self, ids: Vec<&'static str>) {
        for id in ids {
            if !self.invalidated.contains(&id) {
                self.invalidated.push(id);
            }
        }
    }
}

/// The engine state: item ledger, mode configuration and the registry caching
/// tiers derived from them.
///
/// Every mutation goes through this resource so cache invalidation cannot be
/// skipped.
#[derive(Resource, Default)]
pub struct Tracker {
    items: ItemLedger,
    mode: ModeConfiguration,
    registry: RequirementRegistry,
}

impl Tracker {
    /// A tracker built from custom definitions instead of the tracker catalog.
    pub fn with_definitions(definitions: Vec<Definition>) -> Result<Self, TrackerError> {
        let mut tracker = Self::default();
        tracker.registry.initialize(definitions)?;
        Ok(tracker)
    }

    /// Replaces the ledger, e.g. one with custom maximums. Drops cached tiers.
    pub fn with_ledger(mut self, items: ItemLedger) -> Self {
        self.items = items;
        self.registry.clear_cache();
        self
    }

    /// Builds the registry from the tracker catalog. Idempotent.
    pub fn initialize(&mut self) -> Result<(), TrackerError> {
        self.registry.initialize(catalog::definitions())?;
        info!(definitions = self.registry.len(), "tracker initialized");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.registry.is_initialized()
    }

    pub fn items(&self) -> &ItemLedger {
        &self.items
    }

    pub fn mode(&self) -> &ModeConfiguration {
        &self.mode
    }

    /// Current tier of a requirement or node.
    pub fn accessibility(&mut self, id: &str) -> Result<Accessibility, TrackerError> {
        self.registry.accessibility(id, &self.items, &self.mode)
    }

    pub fn kind(&self, id: &str) -> Result<DefinitionKind, TrackerError> {
        self.registry.kind(id)
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.registry.identifiers()
    }

    pub fn set_item_count(
        &mut self,
        item: ItemType,
        count: u32,
    ) -> Result<TrackerUpdate, TrackerError> {
        let change = self.items.set(item, count)?;
        Ok(self.item_changes(change.into_iter().collect()))
    }

    pub fn adjust_item_count(
        &mut self,
        item: ItemType,
        delta: i32,
    ) -> Result<TrackerUpdate, TrackerError> {
        let change = self.items.adjust(item, delta)?;
        Ok(self.item_changes(change.into_iter().collect()))
    }

    pub fn set_mode(&mut self, setting: ModeSetting) -> TrackerUpdate {
        let change = self.mode.set(setting);
        self.mode_changes(change.into_iter().collect())
    }

    /// Replaces the whole mode configuration.
    pub fn apply_mode(&mut self, mode: &ModeConfiguration) -> TrackerUpdate {
        let changes = self.mode.apply(mode);
        self.mode_changes(changes)
    }

    /// Clears every item count and drops all cached tiers. Keeps the mode.
    pub fn reset(&mut self) -> TrackerUpdate {
        let changes = self.items.reset();
        let mut update = self.item_changes(changes);
        self.registry.clear_cache();
        debug!(items = update.items.len(), "tracker reset");
        update
    }

    /// Clears every item count, restores the default mode and drops all
    /// cached tiers.
    pub fn reset_all(&mut self) -> TrackerUpdate {
        let mut update = self.reset();
        let modes = self.mode.reset();
        for change in &modes {
            let ids = self.registry.invalidate(Input::Mode(change.field()));
            update.extend_invalidated(ids);
        }
        update.modes = modes;
        update
    }

    fn item_changes(&mut self, items: Vec<ItemChange>) -> TrackerUpdate {
        let mut update = TrackerUpdate::default();
        for change in &items {
            let ids = self.registry.invalidate(Input::Item(change.item));
            update.extend_invalidated(ids);
        }
        update.items = items;
        update
    }

    fn mode_changes(&mut self, modes: Vec<ModeChange>) -> TrackerUpdate {
        let mut update = TrackerUpdate::default();
        for change in &modes {
            let ids = self.registry.invalidate(Input::Mode(change.field()));
            update.extend_invalidated(ids);
        }
        update.modes = modes;
        update
    }
}
