//! Engine utilities built around the Slotkit containers.
//!
//! - [`PassiveTimer`]: polled timer with one-shot or auto-reset behaviour.
//! - [`SystemClock`]: monotonic millisecond [`Clock`](slotkit_core::Clock).
//! - [`Singleton`]: explicitly created and destroyed global instance.
//! - [`ModifierList`]: lifecycle-driven collection of
//!   [`Modifier`](slotkit_core::Modifier)s stored in a `SlotArray`.
//! - [`log_error`]: error logging sink over `tracing`.
//! - [`count_digits`]: decimal digit count.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod digits;
pub mod log;
pub mod modifier;
pub mod singleton;
pub mod timer;

pub use clock::{monotonic_millis, SystemClock};
pub use digits::count_digits;
pub use log::log_error;
pub use modifier::ModifierList;
pub use singleton::Singleton;
pub use timer::{PassiveTimer, FRAME_SPEED_LOCK_MS};
