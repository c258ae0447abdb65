//! Timing metrics for the obstacle search.

/// Timing and workload metrics collected during one
/// [`ObstacleSearch::run()`](crate::ObstacleSearch::run).
///
/// All durations are in microseconds. The metrics are informational;
/// they carry no semantic weight for the two counts.
#[derive(Clone, Debug, Default)]
pub struct SearchMetrics {
    /// Wall-clock time for the whole search, in microseconds.
    pub total_us: u64,
    /// Time spent on the baseline (no injected obstacle) run.
    pub baseline_us: u64,
    /// Time spent testing candidate placements.
    pub candidates_us: u64,
    /// Number of candidate placements tested (baseline-visited cells
    /// minus the start cell).
    pub candidates_tested: usize,
    /// Worker threads used for the candidate phase.
    pub workers: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = SearchMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.baseline_us, 0);
        assert_eq!(m.candidates_us, 0);
        assert_eq!(m.candidates_tested, 0);
        assert_eq!(m.workers, 0);
    }
}
