//! The narrow interface a search engine implements.
//!
//! The model core has no compile-time coupling to any particular solver: it
//! declares variables, constraints, and branch groups, and consumes whatever
//! implements [`Search`]. Engines yield at most one assignment per
//! [`advance`](Search::advance) call; calls are strictly sequential and the
//! order of assignments is engine-defined beyond what the branching strategy
//! implies.

use std::time::Duration;

/// Why a search stopped producing assignments.
///
/// A deadline- or limit-triggered stop is distinguishable from true
/// exhaustion of the search space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every branch was explored; no further assignments exist.
    Exhausted,
    /// The configured solution bound was reached.
    SolutionLimit,
    /// The configured step bound was reached.
    StepLimit,
    /// The wall-clock deadline expired before exhaustion.
    DeadlineExpired,
}

/// Result of one [`Search::advance`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// A complete assignment: the resolved value of every model variable,
    /// indexed by [`VarId::index`](crate::model::VarId::index). Boolean
    /// variables resolve to 0 or 1. The snapshot is read-only; the engine
    /// retains no reference to it.
    Solution(Vec<i32>),
    /// No further assignments will be produced, for the given reason.
    Done(SearchOutcome),
}

/// Cooperative bounds on a search. `Default` imposes none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Stop after this many assignments.
    pub max_solutions: Option<usize>,
    /// Stop after this many search steps (node expansions).
    pub max_steps: Option<u64>,
    /// Stop once this much wall-clock time has elapsed.
    pub deadline: Option<Duration>,
}

impl Limits {
    /// No bounds; the search runs to exhaustion.
    pub fn none() -> Self {
        Self::default()
    }
}

/// A pull-based search over a built model.
pub trait Search {
    /// Resumes the search and produces the next assignment, or reports why
    /// none will follow. After a [`Step::Done`], further calls return the
    /// same outcome.
    fn advance(&mut self) -> Step;

    /// The final outcome, or `None` while assignments may still follow.
    fn outcome(&self) -> Option<SearchOutcome>;
}
