//! Pruning rules and the fixpoint loop.
//!
//! Each posted constraint contributes a pruning rule over the domain arena.
//! Rules run in posting order until a full pass changes nothing. A wiped-out
//! domain is a branch-local contradiction: the engine discards the branch
//! and backtracks, and nothing is ever surfaced to the model layer.

use chorale_model::{Constraint, VarId};

use crate::domain::BitDomain;

/// Marker for a branch-local contradiction (some domain became empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Wipeout;

/// Runs every rule to fixpoint over the arena.
pub(crate) fn propagate(
    constraints: &[Constraint],
    domains: &mut [BitDomain],
) -> Result<(), Wipeout> {
    loop {
        let mut changed = false;
        for constraint in constraints {
            changed |= prune(constraint, domains)?;
        }
        if !changed {
            return Ok(());
        }
    }
}

fn span(domains: &[BitDomain], var: VarId) -> Result<(i32, i32), Wipeout> {
    match (domains[var.index()].min(), domains[var.index()].max()) {
        (Some(min), Some(max)) => Ok((min, max)),
        _ => Err(Wipeout),
    }
}

fn check(domains: &[BitDomain], var: VarId) -> Result<(), Wipeout> {
    if domains[var.index()].is_empty() {
        Err(Wipeout)
    } else {
        Ok(())
    }
}

fn prune(constraint: &Constraint, domains: &mut [BitDomain]) -> Result<bool, Wipeout> {
    let mut changed = false;
    match constraint {
        Constraint::Ge(x, y) => {
            let (y_min, _) = span(domains, *y)?;
            let (_, x_max) = span(domains, *x)?;
            changed |= domains[x.index()].remove_below(y_min);
            check(domains, *x)?;
            changed |= domains[y.index()].remove_above(x_max);
            check(domains, *y)?;
        }
        Constraint::Diff { x, y, z } => {
            let (x_min, x_max) = span(domains, *x)?;
            let (y_min, y_max) = span(domains, *y)?;
            let (z_min, z_max) = span(domains, *z)?;
            changed |= domains[z.index()].remove_below(x_min - y_max);
            changed |= domains[z.index()].remove_above(x_max - y_min);
            check(domains, *z)?;
            changed |= domains[x.index()].remove_below(y_min + z_min);
            changed |= domains[x.index()].remove_above(y_max + z_max);
            check(domains, *x)?;
            changed |= domains[y.index()].remove_below(x_min - z_max);
            changed |= domains[y.index()].remove_above(x_max - z_min);
            check(domains, *y)?;
        }
        Constraint::LtReif { x, c, b } => {
            let (x_min, x_max) = span(domains, *x)?;
            if x_max < *c {
                changed |= domains[b.index()].fix(1);
            } else if x_min >= *c {
                changed |= domains[b.index()].fix(0);
            }
            check(domains, *b)?;
            match domains[b.index()].value() {
                Some(1) => changed |= domains[x.index()].remove_above(*c - 1),
                Some(0) => changed |= domains[x.index()].remove_below(*c),
                _ => {}
            }
            check(domains, *x)?;
        }
        Constraint::GtReif { x, c, b } => {
            let (x_min, x_max) = span(domains, *x)?;
            if x_min > *c {
                changed |= domains[b.index()].fix(1);
            } else if x_max <= *c {
                changed |= domains[b.index()].fix(0);
            }
            check(domains, *b)?;
            match domains[b.index()].value() {
                Some(1) => changed |= domains[x.index()].remove_below(*c + 1),
                Some(0) => changed |= domains[x.index()].remove_above(*c),
                _ => {}
            }
            check(domains, *x)?;
        }
        Constraint::EqReif { x, c, b } => {
            let holds_c = domains[x.index()].contains(*c);
            let fixed_at = domains[x.index()].value();
            if !holds_c {
                changed |= domains[b.index()].fix(0);
            } else if fixed_at == Some(*c) {
                changed |= domains[b.index()].fix(1);
            }
            check(domains, *b)?;
            match domains[b.index()].value() {
                Some(1) => changed |= domains[x.index()].fix(*c),
                Some(0) => changed |= domains[x.index()].remove(*c),
                _ => {}
            }
            check(domains, *x)?;
        }
        Constraint::Member { x, values } => {
            changed |= domains[x.index()].restrict_to(values);
            check(domains, *x)?;
        }
        Constraint::Fix(x, c) => {
            changed |= domains[x.index()].fix(*c);
            check(domains, *x)?;
        }
    }
    Ok(changed)
}
