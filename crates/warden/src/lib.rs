//! Warden: a deterministic guard-patrol simulator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Warden sub-crates. For most users, adding `warden` as a single
//! dependency is sufficient.
//!
//! The simulator answers two questions about a guard patrolling a
//! rectangular map under a fixed rule (blocked ahead ⇒ turn 90°
//! clockwise, otherwise step forward):
//!
//! 1. How many distinct cells does the guard visit before walking off
//!    the map?
//! 2. How many single-cell obstacle placements would trap the guard in a
//!    permanent cycle instead?
//!
//! # Quick start
//!
//! ```rust
//! use warden::prelude::*;
//!
//! let map = PatrolMap::parse([
//!     "....#.....",
//!     ".........#",
//!     "..........",
//!     "..#.......",
//!     ".......#..",
//!     "..........",
//!     ".#..^.....",
//!     "........#.",
//!     "#.........",
//!     "......#...",
//! ])
//! .unwrap();
//!
//! let report = ObstacleSearch::new(&map).run();
//! assert_eq!(report.visited_cells, 41);
//! assert_eq!(report.loop_obstacles, 6);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `warden-core` | `Vec2`, `Heading`, `StepOutcome` |
//! | [`grid`] | `warden-grid` | `PatrolMap`, `Cell`, `GridError` |
//! | [`engine`] | `warden-engine` | `GuardSimulator`, `ObstacleSearch`, config and metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use warden_core as types;
pub use warden_engine as engine;
pub use warden_grid as grid;

/// Commonly used items, re-exported flat.
pub mod prelude {
    pub use warden_core::{Heading, StepOutcome, Vec2};
    pub use warden_engine::{
        GuardSimulator, ObstacleSearch, SearchConfig, SearchMetrics, SearchReport,
    };
    pub use warden_grid::{Cell, GridError, PatrolMap};
}
