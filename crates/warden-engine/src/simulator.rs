//! The guard state machine.
//!
//! [`GuardSimulator`] owns all mutable per-run state and is reused across
//! many runs via [`reset()`](GuardSimulator::reset), which touches every
//! mutable field. Nothing carries over between runs implicitly: the
//! obstacle-search driver relies on that to test thousands of candidate
//! placements on one allocation.
//!
//! # Ownership model
//!
//! The simulator borrows its [`PatrolMap`] immutably and is `Send`, so
//! search workers can each construct a private simulator over the same
//! shared map. All mutating methods take `&mut self`; there is no interior
//! mutability.

use smallvec::SmallVec;

use warden_core::{Heading, StepOutcome, Vec2};
use warden_grid::PatrolMap;

use crate::visited::VisitedMask;

/// Deterministic guard simulator over an immutable patrol map.
///
/// The movement rule per step: look at the cell directly ahead. If it is
/// outside the grid, the guard exits. If it is blocked (static `#` or an
/// injected obstacle), turn 90° clockwise in place — turning consumes the
/// whole step. Otherwise move forward one cell. A run ends when the guard
/// exits or re-enters a (cell, heading) pair already seen this run.
///
/// # Examples
///
/// ```
/// use warden_engine::GuardSimulator;
/// use warden_core::StepOutcome;
/// use warden_grid::PatrolMap;
///
/// let map = PatrolMap::parse(["..", ".^"]).unwrap();
/// let mut sim = GuardSimulator::new(&map);
/// assert_eq!(sim.run(), StepOutcome::Exited);
/// assert_eq!(sim.count_visited_cells(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GuardSimulator<'m> {
    map: &'m PatrolMap,
    position: Vec2,
    heading: Heading,
    visited: VisitedMask,
    obstacles: SmallVec<[Vec2; 1]>,
}

impl<'m> GuardSimulator<'m> {
    /// Create a simulator over `map`, ready to run: position at the map's
    /// start marker, heading up, `(start, Up)` recorded as visited.
    pub fn new(map: &'m PatrolMap) -> Self {
        let mut sim = Self {
            map,
            position: map.start(),
            heading: Heading::Up,
            visited: VisitedMask::new(map.rows(), map.cols()),
            obstacles: SmallVec::new(),
        };
        sim.reset();
        sim
    }

    /// Restore the simulator to its initial state: position back at the
    /// map's start marker, heading up, visited history cleared (with the
    /// initial `(start, Up)` pair re-recorded), injected obstacles
    /// cleared.
    ///
    /// Total by construction — every mutable field is reassigned. Callers
    /// reusing a simulator must call this before each fresh run.
    pub fn reset(&mut self) {
        self.position = self.map.start();
        self.heading = Heading::Up;
        self.visited.clear();
        self.visited.insert(self.position, self.heading);
        self.obstacles.clear();
    }

    /// Overlay an extra obstacle for the current run only.
    ///
    /// The overlay is cleared by [`reset()`](GuardSimulator::reset). No
    /// validation against the start cell is done here; the search driver
    /// filters candidates instead.
    pub fn add_obstacle(&mut self, pos: Vec2) {
        self.obstacles.push(pos);
    }

    /// Current position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Execute one step of the movement rule.
    ///
    /// On [`StepOutcome::Exited`] the simulator state is unchanged; the
    /// guard is considered to have left from its current cell. A blocked
    /// candidate rotates the heading without moving — the next call
    /// attempts to move along the new heading (and may rotate again if
    /// that is also blocked).
    pub fn step(&mut self) -> StepOutcome {
        let candidate = self.position + self.heading.vector();
        if !self.map.in_bounds(candidate) {
            return StepOutcome::Exited;
        }
        if self.is_blocked(candidate) {
            self.heading = self.heading.rotate_clockwise();
        } else {
            self.position = candidate;
        }
        if self.visited.insert(self.position, self.heading) {
            StepOutcome::Continue
        } else {
            StepOutcome::Looping
        }
    }

    /// Step until the run ends; returns the terminal outcome.
    ///
    /// Terminates within `4 × rows × cols + 1` calls to
    /// [`step()`](GuardSimulator::step): each `Continue` inserts a fresh
    /// (cell, heading) pair and there are only `4 × rows × cols` of them.
    pub fn run(&mut self) -> StepOutcome {
        loop {
            let outcome = self.step();
            if outcome.is_terminal() {
                return outcome;
            }
        }
    }

    /// Number of distinct cells the guard occupied this run. Always at
    /// least 1: the starting cell is recorded at reset.
    pub fn count_visited_cells(&self) -> usize {
        self.visited.count_visited_cells()
    }

    /// Distinct cells occupied this run, in row-major order.
    pub fn visited_cells(&self) -> Vec<Vec2> {
        self.visited.visited_cells()
    }

    fn is_blocked(&self, pos: Vec2) -> bool {
        self.map.is_obstacle(pos) || self.obstacles.contains(&pos)
    }
}
