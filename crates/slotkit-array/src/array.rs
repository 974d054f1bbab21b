//! Growable slot array with stable indices.
//!
//! [`SlotArray`] stores elements in a flat `Vec` of [`Slot`]s. Removing an
//! element frees its slot in place: nothing is shifted, so the index handed
//! out by [`add`](SlotArray::add) stays valid until that element is removed.
//! The array never shrinks and never compacts.
//!
//! Insertion prefers, in order:
//! 1. the slot named by the reuse hint (most recently freed or grown slot),
//! 2. the lowest-indexed free slot,
//! 3. the first slot of a freshly grown tail.
//!
//! The hint is a single-slot cache, not a free list. A second removal
//! overwrites a pending hint, and the next `add` after that falls back to
//! the linear scan for anything older.

use slotkit_core::Full;

use crate::config::SlotArrayConfig;
use crate::slot::{Slot, SlotState};

/// Indexed storage that reuses freed positions and grows in fixed steps.
///
/// Out-of-range indices and removal of absent values are silent no-ops.
/// The only failure is [`Full`], returned by [`add`](Self::add) when every
/// slot is occupied and the growth step is zero.
///
/// Not synchronised. Callers sharing an array across threads must wrap it
/// in their own lock.
#[derive(Clone, Debug)]
pub struct SlotArray<T> {
    /// Backing storage. Its length is the array's capacity.
    slots: Vec<Slot<T>>,
    /// Slots appended per growth; zero disables growth.
    growth_step: usize,
    /// Slot to try first on the next `add`.
    hint: Option<usize>,
}

impl<T> SlotArray<T> {
    /// Create an array with `initial_capacity` free slots.
    pub fn new(initial_capacity: usize, growth_step: usize) -> Self {
        let mut slots = Vec::with_capacity(initial_capacity);
        slots.resize_with(initial_capacity, Slot::default);
        Self {
            slots,
            growth_step,
            hint: None,
        }
    }

    /// Create an array sized by `config`.
    pub fn with_config(config: SlotArrayConfig) -> Self {
        Self::new(config.initial_capacity, config.growth_step)
    }

    /// Total number of slots, occupied or free.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots appended when the array runs out of room.
    pub fn growth_step(&self) -> usize {
        self.growth_step
    }

    /// Change the growth step. Zero disables growth from now on.
    pub fn set_growth_step(&mut self, growth_step: usize) {
        self.growth_step = growth_step;
    }

    /// The slot the next [`add`](Self::add) will try first, if any.
    pub fn last_freed_hint(&self) -> Option<usize> {
        self.hint
    }

    /// Number of occupied slots.
    ///
    /// Scans every slot; the count is not cached.
    pub fn count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    /// Whether no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Slot::is_free)
    }

    /// Store `element` and return the index it was placed at.
    ///
    /// Grows the array by the growth step when no slot is free. With growth
    /// disabled, a full array hands the element back inside [`Full`] and is
    /// left untouched.
    pub fn add(&mut self, element: T) -> Result<usize, Full<T>> {
        if let Some(index) = self.hint.take() {
            if self.slots.get(index).is_some_and(Slot::is_free) {
                self.slots[index] = Slot::Occupied(element);
                return Ok(index);
            }
        }

        if let Some(index) = self.slots.iter().position(Slot::is_free) {
            self.slots[index] = Slot::Occupied(element);
            return Ok(index);
        }

        if self.growth_step == 0 {
            tracing::trace!(
                capacity = self.capacity(),
                "slot array full and growth disabled, rejecting add"
            );
            return Err(Full::new(element, self.capacity()));
        }

        let index = self.capacity();
        self.grow(self.growth_step);
        self.slots[index] = Slot::Occupied(element);
        // The rest of the new tail is free; point the next add at it.
        if index + 1 < self.capacity() {
            self.hint = Some(index + 1);
        }
        Ok(index)
    }

    /// Free the first slot (in index order) holding a value equal to
    /// `element` and return the stored value.
    ///
    /// Only the first match is removed. Returns `None` if nothing matched.
    pub fn remove_by_value(&mut self, element: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self
            .slots
            .iter()
            .position(|slot| slot.value() == Some(element))?;
        self.hint = Some(index);
        self.slots[index].take()
    }

    /// Free the slot at `index` and return what it held.
    ///
    /// Out-of-range indices are ignored. An in-range index becomes the reuse
    /// hint even if its slot was already free.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let slot = self.slots.get_mut(index)?;
        self.hint = Some(index);
        slot.take()
    }

    /// Borrow the element at `index`.
    ///
    /// `None` both for free slots and for indices past the capacity; use
    /// [`state`](Self::state) to tell them apart.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Slot::value)
    }

    /// Mutably borrow the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Slot::value_mut)
    }

    /// Classify `index` as occupied, free or out of range.
    pub fn state(&self, index: usize) -> SlotState {
        match self.slots.get(index) {
            Some(Slot::Occupied(_)) => SlotState::Occupied,
            Some(Slot::Free) => SlotState::Free,
            None => SlotState::OutOfRange,
        }
    }

    /// Drop every element and forget the reuse hint. Capacity is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Free;
        }
        self.hint = None;
    }

    /// Append `additional` free slots.
    ///
    /// Existing slots keep their index and contents.
    pub fn grow(&mut self, additional: usize) {
        if additional == 0 {
            return;
        }
        let from = self.capacity();
        self.slots.reserve_exact(additional);
        self.slots.resize_with(from + additional, Slot::default);
        tracing::debug!(from, to = self.capacity(), "slot array grown");
    }

    /// Iterate over occupied slots as `(index, &element)` in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.value().map(|value| (index, value)))
    }

    /// Iterate mutably over occupied slots in index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| slot.value_mut().map(|value| (index, value)))
    }
}

impl<T> Default for SlotArray<T> {
    fn default() -> Self {
        Self::with_config(SlotArrayConfig::default())
    }
}
