//! Brute-force search for loop-causing obstacle placements.
//!
//! The search runs the guard once with no injected obstacle (the baseline
//! run), then tests one candidate placement per baseline-visited cell.
//! Restricting candidates to baseline-visited cells is sound and complete:
//! an obstacle on a cell the guard never reaches cannot change its path,
//! so the pruning shrinks the search space without changing the count.
//!
//! Candidates are independent, so the candidate phase fans out across
//! worker threads when configured to. Each worker owns a private
//! [`GuardSimulator`] over the shared immutable map and reports a partial
//! count over a channel; the reduction is a plain sum.

use std::time::Instant;

use indexmap::IndexSet;

use warden_core::{StepOutcome, Vec2};
use warden_grid::PatrolMap;

use crate::config::SearchConfig;
use crate::metrics::SearchMetrics;
use crate::simulator::GuardSimulator;

/// Below this many candidates the fan-out overhead dominates; run the
/// candidate phase on the calling thread instead.
const MIN_PARALLEL_CANDIDATES: usize = 64;

// ── SearchReport ────────────────────────────────────────────────

/// Result of a completed [`ObstacleSearch::run()`].
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// Distinct cells the guard visits before leaving the unmodified map
    /// ("part 1").
    pub visited_cells: usize,
    /// Single-cell obstacle placements that trap the guard in a cycle
    /// ("part 2").
    pub loop_obstacles: usize,
    /// Timing and workload metrics for this search.
    pub metrics: SearchMetrics,
}

// ── ObstacleSearch ──────────────────────────────────────────────

/// Orchestrates the baseline run and the candidate-obstacle sweep over a
/// borrowed [`PatrolMap`].
///
/// # Examples
///
/// ```
/// use warden_engine::ObstacleSearch;
/// use warden_grid::PatrolMap;
///
/// let map = PatrolMap::parse([
///     "....#.....",
///     ".........#",
///     "..........",
///     "..#.......",
///     ".......#..",
///     "..........",
///     ".#..^.....",
///     "........#.",
///     "#.........",
///     "......#...",
/// ])
/// .unwrap();
/// let report = ObstacleSearch::new(&map).run();
/// assert_eq!(report.visited_cells, 41);
/// assert_eq!(report.loop_obstacles, 6);
/// ```
#[derive(Clone, Debug)]
pub struct ObstacleSearch<'m> {
    map: &'m PatrolMap,
    config: SearchConfig,
}

impl<'m> ObstacleSearch<'m> {
    /// Create a search with the default configuration.
    pub fn new(map: &'m PatrolMap) -> Self {
        Self::with_config(map, SearchConfig::default())
    }

    /// Create a search with an explicit configuration.
    pub fn with_config(map: &'m PatrolMap, config: SearchConfig) -> Self {
        Self { map, config }
    }

    /// Run the baseline simulation and the candidate sweep; returns both
    /// counts plus metrics.
    pub fn run(&self) -> SearchReport {
        let total_start = Instant::now();

        let baseline_start = Instant::now();
        let mut sim = GuardSimulator::new(self.map);
        sim.run();
        let visited_cells = sim.count_visited_cells();
        let baseline_us = elapsed_us(baseline_start);

        // The start cell is excluded: the guard stands there, so no
        // obstacle can be placed on it.
        let start = self.map.start();
        let candidates: IndexSet<Vec2> = sim
            .visited_cells()
            .into_iter()
            .filter(|&pos| pos != start)
            .collect();
        let candidate_list: Vec<Vec2> = candidates.into_iter().collect();

        let mut workers = self.config.resolved_worker_count();
        if candidate_list.len() < MIN_PARALLEL_CANDIDATES {
            workers = 1;
        }

        let candidates_start = Instant::now();
        let loop_obstacles = if workers <= 1 {
            count_loops(self.map, &candidate_list)
        } else {
            count_loops_parallel(self.map, &candidate_list, workers)
        };
        let candidates_us = elapsed_us(candidates_start);

        SearchReport {
            visited_cells,
            loop_obstacles,
            metrics: SearchMetrics {
                total_us: elapsed_us(total_start),
                baseline_us,
                candidates_us,
                candidates_tested: candidate_list.len(),
                workers,
            },
        }
    }
}

/// Test `candidates` on the calling thread, reusing one simulator.
fn count_loops(map: &PatrolMap, candidates: &[Vec2]) -> usize {
    let mut sim = GuardSimulator::new(map);
    candidates
        .iter()
        .filter(|&&obstacle| {
            sim.reset();
            sim.add_obstacle(obstacle);
            sim.run() == StepOutcome::Looping
        })
        .count()
}

/// Partition `candidates` across `workers` scoped threads, each with a
/// private simulator, and sum the partial counts.
fn count_loops_parallel(map: &PatrolMap, candidates: &[Vec2], workers: usize) -> usize {
    let chunk = candidates.len().div_ceil(workers);
    let (tx, rx) = crossbeam_channel::bounded(workers);
    std::thread::scope(|scope| {
        for part in candidates.chunks(chunk) {
            let tx = tx.clone();
            scope.spawn(move || {
                // Sends only fail if the receiver is gone, which cannot
                // happen inside this scope.
                let _ = tx.send(count_loops(map, part));
            });
        }
        drop(tx);
        rx.iter().sum()
    })
}

fn elapsed_us(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_micros()).unwrap_or(u64::MAX)
}
