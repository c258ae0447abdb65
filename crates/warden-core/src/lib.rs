//! Core types for the Warden patrol simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! integer vector arithmetic, the four legal guard headings, and the
//! per-step outcome shared by the grid and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod heading;
pub mod outcome;
pub mod vec2;

pub use heading::Heading;
pub use outcome::StepOutcome;
pub use vec2::Vec2;
