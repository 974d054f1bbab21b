//! Slot-indexed collection of [`Modifier`]s.
//!
//! [`ModifierList`] owns boxed modifiers, drives their lifecycle and hands
//! out stable slot indices for them. Storage is a [`SlotArray`], so
//! detaching a modifier leaves the indices of the others untouched.

use indexmap::IndexMap;
use slotkit_array::{SlotArray, SlotArrayConfig};
use slotkit_core::{Full, Modifier};

/// A stored modifier plus its active flag.
struct Entry {
    modifier: Box<dyn Modifier>,
    active: bool,
}

/// Owner-side container for modifiers.
///
/// Modifiers are initialised when added and released when removed. Only
/// active modifiers are updated by [`update_all`](Self::update_all).
pub struct ModifierList {
    entries: SlotArray<Entry>,
    /// Name hash → slot index of the most recently added modifier with
    /// that hash.
    by_name: IndexMap<u32, usize>,
}

impl ModifierList {
    /// An empty list with default slot sizing.
    pub fn new() -> Self {
        Self::with_config(SlotArrayConfig::default())
    }

    /// An empty list with explicit slot sizing.
    pub fn with_config(config: SlotArrayConfig) -> Self {
        Self {
            entries: SlotArray::with_config(config),
            by_name: IndexMap::new(),
        }
    }

    /// Number of attached modifiers.
    pub fn len(&self) -> usize {
        self.entries.count()
    }

    /// Whether no modifier is attached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attach `modifier`, initialise it and return its slot index.
    ///
    /// A rejected modifier is handed back inside [`Full`] without having
    /// been initialised.
    pub fn add(
        &mut self,
        modifier: Box<dyn Modifier>,
    ) -> Result<usize, Full<Box<dyn Modifier>>> {
        let name_hash = modifier.name_hash();
        let entry = Entry {
            modifier,
            active: true,
        };
        let index = self.entries.add(entry).map_err(|full| {
            let capacity = full.capacity();
            Full::new(full.into_element().modifier, capacity)
        })?;
        if let Some(entry) = self.entries.get_mut(index) {
            entry.modifier.init();
        }
        self.by_name.insert(name_hash, index);
        tracing::debug!(name_hash, index, "modifier attached");
        Ok(index)
    }

    /// Detach the modifier at `index`, releasing it first.
    ///
    /// Returns the released modifier, or `None` if the slot was empty.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Modifier>> {
        let mut entry = self.entries.remove_at(index)?;
        entry.modifier.release();

        let name_hash = entry.modifier.name_hash();
        if self.by_name.get(&name_hash) == Some(&index) {
            // Fall back to another live modifier sharing the hash, if any.
            let replacement = self
                .entries
                .iter()
                .filter(|(_, e)| e.modifier.name_hash() == name_hash)
                .map(|(i, _)| i)
                .last();
            match replacement {
                Some(other) => {
                    self.by_name.insert(name_hash, other);
                }
                None => {
                    self.by_name.shift_remove(&name_hash);
                }
            }
        }
        tracing::debug!(name_hash, index, "modifier detached");
        Some(entry.modifier)
    }

    /// Slot index of the modifier registered under `name_hash`.
    pub fn find(&self, name_hash: u32) -> Option<usize> {
        self.by_name.get(&name_hash).copied()
    }

    /// Borrow the modifier at `index`.
    pub fn get(&self, index: usize) -> Option<&dyn Modifier> {
        self.entries.get(index).map(|entry| entry.modifier.as_ref())
    }

    /// Mutably borrow the modifier at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Modifier + 'static)> {
        self.entries.get_mut(index).map(|entry| entry.modifier.as_mut())
    }

    /// Enable or disable updates for the modifier at `index`.
    ///
    /// Returns `false` if the slot is empty.
    pub fn set_active(&mut self, index: usize, active: bool) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.active = active;
                true
            }
            None => false,
        }
    }

    /// Whether the modifier at `index` exists and is active.
    pub fn is_active(&self, index: usize) -> bool {
        self.entries.get(index).is_some_and(|entry| entry.active)
    }

    /// Update every active modifier in slot order.
    ///
    /// Returns `(index, status)` for each modifier that was updated.
    pub fn update_all(&mut self) -> Vec<(usize, i32)> {
        self.entries
            .iter_mut()
            .filter(|(_, entry)| entry.active)
            .map(|(index, entry)| (index, entry.modifier.update()))
            .collect()
    }

    /// Release every modifier and empty the list. Slot capacity is kept.
    pub fn release_all(&mut self) {
        for (_, entry) in self.entries.iter_mut() {
            entry.modifier.release();
        }
        self.entries.clear();
        self.by_name.clear();
    }
}

impl Default for ModifierList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotkit_test_utils::{LifecycleEvent, LifecycleLog, RecordingModifier};

    fn recording(name_hash: u32, log: &LifecycleLog) -> Box<dyn Modifier> {
        Box::new(RecordingModifier::new(name_hash, log.clone()))
    }

    fn reporting(name_hash: u32, status: i32, log: &LifecycleLog) -> Box<dyn Modifier> {
        Box::new(RecordingModifier::new(name_hash, log.clone()).with_status(status))
    }

    #[test]
    fn add_initialises_and_indexes() {
        let log = LifecycleLog::default();
        let mut list = ModifierList::new();
        let a = list.add(recording(0xA, &log)).unwrap();
        let b = list.add(recording(0xB, &log)).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.find(0xA), Some(a));
        assert_eq!(list.find(0xB), Some(b));
        assert_eq!(
            log.events(),
            vec![LifecycleEvent::Init(0xA), LifecycleEvent::Init(0xB)]
        );
    }

    #[test]
    fn update_skips_inactive() {
        let log = LifecycleLog::default();
        let mut list = ModifierList::new();
        let a = list.add(reporting(1, 10, &log)).unwrap();
        let b = list.add(reporting(2, 20, &log)).unwrap();

        assert!(list.set_active(a, false));
        assert!(!list.is_active(a));
        assert!(list.is_active(b));

        assert_eq!(list.update_all(), vec![(b, 20)]);
        assert!(!log.events().contains(&LifecycleEvent::Update(1)));
    }

    #[test]
    fn remove_releases_and_keeps_other_indices() {
        let log = LifecycleLog::default();
        let mut list = ModifierList::new();
        let a = list.add(recording(1, &log)).unwrap();
        let b = list.add(recording(2, &log)).unwrap();

        let removed = list.remove(a).unwrap();
        assert_eq!(removed.name_hash(), 1);
        assert_eq!(log.events().last(), Some(&LifecycleEvent::Release(1)));
        assert_eq!(list.find(1), None);
        assert_eq!(list.find(2), Some(b));
        assert_eq!(list.get(b).map(|m| m.name_hash()), Some(2));
        assert!(list.get(a).is_none());
    }

    #[test]
    fn removed_slot_is_reused() {
        let log = LifecycleLog::default();
        let mut list = ModifierList::new();
        let a = list.add(recording(1, &log)).unwrap();
        list.add(recording(2, &log)).unwrap();
        list.remove(a);
        assert_eq!(list.add(recording(3, &log)).unwrap(), a);
    }

    #[test]
    fn remove_empty_slot_is_noop() {
        let mut list = ModifierList::new();
        assert!(list.remove(0).is_none());
        assert!(list.remove(99).is_none());
        assert!(!list.set_active(99, true));
    }

    #[test]
    fn duplicate_hash_falls_back_after_remove() {
        let log = LifecycleLog::default();
        let mut list = ModifierList::new();
        let first = list.add(recording(5, &log)).unwrap();
        let second = list.add(recording(5, &log)).unwrap();
        assert_eq!(list.find(5), Some(second));

        list.remove(second);
        assert_eq!(list.find(5), Some(first));
        list.remove(first);
        assert_eq!(list.find(5), None);
    }

    #[test]
    fn full_list_rejects_without_init() {
        let log = LifecycleLog::default();
        let mut list = ModifierList::with_config(SlotArrayConfig::fixed(1));
        list.add(recording(1, &log)).unwrap();

        let err = list.add(recording(2, &log)).unwrap_err();
        assert_eq!(err.capacity(), 1);
        assert_eq!(err.into_element().name_hash(), 2);
        assert!(!log.events().contains(&LifecycleEvent::Init(2)));
        assert_eq!(list.find(2), None);
    }

    #[test]
    fn release_all_releases_everything() {
        let log = LifecycleLog::default();
        let mut list = ModifierList::new();
        list.add(recording(1, &log)).unwrap();
        list.add(recording(2, &log)).unwrap();

        list.release_all();
        assert!(list.is_empty());
        assert_eq!(list.find(1), None);
        let events = log.events();
        assert!(events.contains(&LifecycleEvent::Release(1)));
        assert!(events.contains(&LifecycleEvent::Release(2)));
    }

    #[test]
    fn get_mut_reaches_modifier() {
        let log = LifecycleLog::default();
        let mut list = ModifierList::new();
        let a = list.add(reporting(9, 3, &log)).unwrap();
        let status = list.get_mut(a).map(|m| m.update());
        assert_eq!(status, Some(3));
    }
}
