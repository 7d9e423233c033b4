//! Depth-first search with propagation over a declared model.

#[cfg(test)]
mod tests;

use std::time::Instant;

use chorale_model::{Constraint, Limits, Model, Search, SearchOutcome, Step, VarId};

use crate::domain::BitDomain;
use crate::propagate::propagate;

/// Search progress counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Nodes expanded.
    pub nodes: u64,
    /// Branches discarded on contradiction.
    pub failures: u64,
    /// Assignments produced.
    pub solutions: u64,
}

/// A pull-based depth-first engine over one model.
///
/// Each stack node owns a full clone of the domain arena, so live branches
/// never share mutable state. Variable selection follows the model's branch
/// groups in order, picking the smallest remaining domain within the active
/// group; values are tried minimum-first. Given fixed inputs the produced
/// assignment sequence is deterministic.
#[derive(Debug)]
pub struct Engine {
    constraints: Vec<Constraint>,
    branch_groups: Vec<Vec<VarId>>,
    limits: Limits,
    stack: Vec<Vec<BitDomain>>,
    started: Option<Instant>,
    steps: u64,
    yielded: usize,
    outcome: Option<SearchOutcome>,
    stats: Statistics,
}

impl Engine {
    /// Captures the model's variables, constraints, and branching strategy.
    /// The model itself is not retained.
    pub fn new(model: &Model, limits: Limits) -> Self {
        let root: Vec<BitDomain> = (0..model.var_count())
            .map(|index| {
                let bounds = model.bounds(VarId::new(index));
                BitDomain::new(bounds.low, bounds.high)
            })
            .collect();
        Self {
            constraints: model.constraints().to_vec(),
            branch_groups: model.branch_groups().to_vec(),
            limits,
            stack: vec![root],
            started: None,
            steps: 0,
            yielded: 0,
            outcome: None,
            stats: Statistics::default(),
        }
    }

    /// Counters accumulated so far.
    pub fn statistics(&self) -> Statistics {
        self.stats
    }

    fn finish(&mut self, outcome: SearchOutcome) -> Step {
        self.outcome = Some(outcome);
        Step::Done(outcome)
    }

    /// Smallest remaining domain within the first branch group that still
    /// has an unfixed variable; ties resolve to the earliest variable. Falls
    /// back to any unfixed variable, though auxiliaries normally collapse by
    /// propagation once the group variables are fixed.
    fn select(&self, domains: &[BitDomain]) -> Option<VarId> {
        for group in &self.branch_groups {
            let mut best: Option<(u32, VarId)> = None;
            for &var in group {
                let size = domains[var.index()].size();
                if size > 1 && best.is_none_or(|(smallest, _)| size < smallest) {
                    best = Some((size, var));
                }
            }
            if let Some((_, var)) = best {
                return Some(var);
            }
        }
        domains.iter().position(|d| d.size() > 1).map(VarId::new)
    }
}

impl Search for Engine {
    fn advance(&mut self) -> Step {
        if let Some(outcome) = self.outcome {
            return Step::Done(outcome);
        }
        if let Some(max) = self.limits.max_solutions {
            if self.yielded >= max {
                return self.finish(SearchOutcome::SolutionLimit);
            }
        }
        let started = *self.started.get_or_insert_with(Instant::now);

        loop {
            if let Some(deadline) = self.limits.deadline {
                if started.elapsed() >= deadline {
                    return self.finish(SearchOutcome::DeadlineExpired);
                }
            }
            if let Some(max) = self.limits.max_steps {
                if self.steps >= max {
                    return self.finish(SearchOutcome::StepLimit);
                }
            }
            let Some(mut domains) = self.stack.pop() else {
                return self.finish(SearchOutcome::Exhausted);
            };
            self.steps += 1;
            self.stats.nodes += 1;

            if propagate(&self.constraints, &mut domains).is_err() {
                self.stats.failures += 1;
                continue;
            }

            match self.select(&domains) {
                None => {
                    let Some(values) = snapshot(&domains) else {
                        self.stats.failures += 1;
                        continue;
                    };
                    self.stats.solutions += 1;
                    self.yielded += 1;
                    return Step::Solution(values);
                }
                Some(var) => {
                    let Some(min) = domains[var.index()].min() else {
                        self.stats.failures += 1;
                        continue;
                    };
                    // The stack is LIFO: push the remainder branch first so
                    // the minimum-value branch is explored next.
                    let mut rest = domains.clone();
                    rest[var.index()].remove(min);
                    if !rest[var.index()].is_empty() {
                        self.stack.push(rest);
                    }
                    domains[var.index()].fix(min);
                    self.stack.push(domains);
                }
            }
        }
    }

    fn outcome(&self) -> Option<SearchOutcome> {
        self.outcome
    }
}

fn snapshot(domains: &[BitDomain]) -> Option<Vec<i32>> {
    domains.iter().map(BitDomain::value).collect()
}
