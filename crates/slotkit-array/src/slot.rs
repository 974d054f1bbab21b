//! Per-slot storage and lookup outcomes.

/// A single storage position: either holding one element or free.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot<T> {
    /// No element stored.
    Free,
    /// Holds an element.
    Occupied(T),
}

// Manual impl: the derive would demand `T: Default`.
impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::Free
    }
}

impl<T> Slot<T> {
    /// Whether the slot holds no element.
    pub fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }

    /// Whether the slot holds an element.
    pub fn is_occupied(&self) -> bool {
        !self.is_free()
    }

    /// Borrow the stored element, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Occupied(value) => Some(value),
            Self::Free => None,
        }
    }

    /// Mutably borrow the stored element, if any.
    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Occupied(value) => Some(value),
            Self::Free => None,
        }
    }

    /// Store `value`, returning whatever was there before.
    pub fn fill(&mut self, value: T) -> Option<T> {
        std::mem::replace(self, Self::Occupied(value)).into_option()
    }

    /// Free the slot, returning the element it held.
    pub fn take(&mut self) -> Option<T> {
        std::mem::take(self).into_option()
    }

    fn into_option(self) -> Option<T> {
        match self {
            Self::Occupied(value) => Some(value),
            Self::Free => None,
        }
    }
}

/// Outcome of probing an index, distinguishing the cases that
/// [`SlotArray::get`](crate::SlotArray::get) folds into `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotState {
    /// In range and holding an element.
    Occupied,
    /// In range but free.
    Free,
    /// At or past the current capacity.
    OutOfRange,
}
