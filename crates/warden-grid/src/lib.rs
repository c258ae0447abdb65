//! Immutable rectangular patrol-map grid for the Warden patrol simulator.
//!
//! A [`PatrolMap`] is parsed once from text lines and never mutated. The
//! engine crate overlays injected obstacles on top of it per run; the map
//! itself only answers bounds and cell queries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod map;

pub use cell::Cell;
pub use error::GridError;
pub use map::PatrolMap;
