//! Growable slot array with stable indices for Slotkit.
//!
//! A slot array hands out positional handles (plain `usize` indices) to the
//! elements it stores. Removal frees a slot in place without compaction,
//! and freed slots are reused before the array grows.
//!
//! # Architecture
//!
//! ```text
//! SlotArray<T>
//! ├── Vec<Slot<T>>        (length == capacity; Occupied(T) | Free)
//! ├── growth_step         (slots appended when full; 0 = fixed size)
//! └── hint: Option<usize> (single-slot reuse cache)
//! ```
//!
//! # Example
//!
//! ```rust
//! use slotkit_array::SlotArray;
//!
//! let mut array = SlotArray::new(2, 2);
//! let a = array.add("a").unwrap();
//! let b = array.add("b").unwrap();
//! array.remove_at(a);
//! assert_eq!(array.add("c").unwrap(), a);
//! assert_eq!(array.get(b), Some(&"b"));
//! assert_eq!(array.count(), 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod slot;

// Public re-exports for the primary API surface.
pub use array::SlotArray;
pub use config::SlotArrayConfig;
pub use slot::{Slot, SlotState};
pub use slotkit_core::Full;
