//! Search configuration.

/// Configuration for [`ObstacleSearch`](crate::ObstacleSearch).
///
/// Controls how many worker threads test candidate obstacle placements.
/// Candidates are independent (each worker owns its own simulator), so
/// the worker count only affects throughput, never the result.
#[derive(Clone, Debug, Default)]
pub struct SearchConfig {
    /// Number of worker threads. `None` = auto-detect from
    /// `available_parallelism`, clamped to `[1, 16]`.
    pub workers: Option<usize>,
}

impl SearchConfig {
    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`; zero would leave no one
    /// to test candidates.
    pub fn resolved_worker_count(&self) -> usize {
        match self.workers {
            Some(n) => n.clamp(1, 64),
            None => {
                let cpus = std::thread::available_parallelism()
                    .map(|n| n.get())
                    .unwrap_or(1);
                cpus.clamp(1, 16)
            }
        }
    }
}
