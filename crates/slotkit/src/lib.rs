//! Slotkit: slot arrays with stable indices, plus the engine utilities
//! built around them.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Slotkit sub-crates. For most users, adding `slotkit` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use slotkit::prelude::*;
//!
//! let mut enemies = SlotArray::new(2, 2);
//! let grunt = enemies.add("grunt").unwrap();
//! let boss = enemies.add("boss").unwrap();
//!
//! // Removing one enemy leaves the other's index intact.
//! enemies.remove_at(grunt);
//! assert_eq!(enemies.get(boss), Some(&"boss"));
//!
//! // The freed slot is handed out again first.
//! assert_eq!(enemies.add("scout").unwrap(), grunt);
//!
//! // A fixed-size array refuses instead of growing.
//! let mut fixed = SlotArray::new(1, 0);
//! fixed.add(1).unwrap();
//! let err: Full<i32> = fixed.add(2).unwrap_err();
//! assert_eq!(err.into_element(), 2);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `slotkit-core` | `Full` error, `Clock` and `Modifier` traits |
//! | [`array`] | `slotkit-array` | `SlotArray`, `Slot`, `SlotState`, `SlotArrayConfig` |
//! | [`util`] | `slotkit-util` | Timers, clocks, singletons, modifier lists, logging |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core error type and traits (`slotkit-core`).
pub use slotkit_core as types;

/// Slot array storage (`slotkit-array`).
///
/// Most users only need [`array::SlotArray`], which is also in the
/// [`prelude`].
pub use slotkit_array as array;

/// Timers, clocks, singletons, modifier lists and logging (`slotkit-util`).
pub use slotkit_util as util;

/// Common imports for typical Slotkit usage.
///
/// ```rust
/// use slotkit::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use slotkit_core::{Clock, Full, Modifier};

    // Storage
    pub use slotkit_array::{SlotArray, SlotArrayConfig, SlotState};

    // Utilities
    pub use slotkit_util::{log_error, ModifierList, PassiveTimer, Singleton, SystemClock};
}
