//! Guard simulator and loop-obstacle search for the Warden patrol simulator.
//!
//! [`GuardSimulator`] owns the mutable per-run state (position, heading,
//! visited-heading history, injected obstacle overlay) and implements the
//! deterministic step rule. [`ObstacleSearch`] orchestrates the baseline
//! run and the pruned brute-force search over single-obstacle placements,
//! sequentially or across worker threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod search;
pub mod simulator;
mod visited;

pub use config::SearchConfig;
pub use metrics::SearchMetrics;
pub use search::{ObstacleSearch, SearchReport};
pub use simulator::GuardSimulator;
