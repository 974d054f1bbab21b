//! Error types for the Slotkit containers.
//!
//! Slot containers follow a tolerant boundary policy: bad indices, missing
//! values and clearing an empty container are silent no-ops. The only
//! reportable failure is running out of slots with growth disabled.

use std::error::Error;
use std::fmt;

/// Insertion rejected: no free slot and growth is disabled.
///
/// The rejected element is carried back so the caller keeps ownership of
/// it. Recover it with [`Full::into_element`].
#[derive(Clone, PartialEq, Eq)]
pub struct Full<T> {
    element: T,
    capacity: usize,
}

impl<T> Full<T> {
    /// Wrap a rejected element together with the capacity that was exhausted.
    pub fn new(element: T, capacity: usize) -> Self {
        Self { element, capacity }
    }

    /// Capacity of the container at the moment of rejection.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Borrow the rejected element.
    pub fn element(&self) -> &T {
        &self.element
    }

    /// Take back ownership of the rejected element.
    pub fn into_element(self) -> T {
        self.element
    }
}

// Manual impl so `Full<Box<dyn Trait>>` is still debuggable.
impl<T> fmt::Debug for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Full")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slot container full: all {} slots occupied and growth is disabled",
            self.capacity
        )
    }
}

impl<T> Error for Full<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_is_returned_to_caller() {
        let err = Full::new(String::from("payload"), 8);
        assert_eq!(err.capacity(), 8);
        assert_eq!(err.element(), "payload");
        assert_eq!(err.into_element(), "payload");
    }

    #[test]
    fn display_names_capacity() {
        let err = Full::new(7u32, 3);
        assert_eq!(
            err.to_string(),
            "slot container full: all 3 slots occupied and growth is disabled"
        );
    }

    #[test]
    fn debug_does_not_require_debug_element() {
        struct Opaque;
        let err = Full::new(Opaque, 2);
        assert_eq!(format!("{err:?}"), "Full { capacity: 2, .. }");
    }

    #[test]
    fn usable_as_boxed_error() {
        let boxed: Box<dyn Error> = Box::new(Full::new(1u8, 0));
        assert!(boxed.to_string().contains("growth is disabled"));
    }
}
