//! Per-step outcome of the guard state machine.

/// Result of a single simulation step.
///
/// A run is a sequence of [`Continue`](StepOutcome::Continue) outcomes
/// ending in exactly one terminal outcome: either the guard walked off
/// the grid or it re-entered a (cell, heading) pair it had already
/// occupied, which implies a deterministic infinite loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step resolved to a fresh (cell, heading) pair; keep stepping.
    Continue,
    /// The candidate cell was outside the grid; the guard has left.
    Exited,
    /// The resulting (cell, heading) pair was already visited this run.
    Looping,
}

impl StepOutcome {
    /// Whether this outcome ends the run.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, StepOutcome::Continue)
    }
}
