//! Core error types and traits for Slotkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! abstractions shared across the workspace: the [`Full`] insertion error
//! and the [`Clock`] and [`Modifier`] traits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

pub use error::Full;
pub use traits::{Clock, Modifier};
