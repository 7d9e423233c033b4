//! The declarative substrate: variables, constraints, and branch groups.
//!
//! A [`Model`] is an arena of finite-domain variable bounds plus the list of
//! relations posted over them. It holds no propagation or search logic; a
//! search engine consumes it through [`bounds`](Model::bounds),
//! [`constraints`](Model::constraints), and
//! [`branch_groups`](Model::branch_groups).

use std::fmt;

/// Index of a finite-domain variable in a [`Model`]'s arena.
///
/// Engine snapshots are plain `Vec<i32>` indexed by [`VarId::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarId(usize);

impl VarId {
    /// Creates a variable id from a raw arena index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw arena index of this variable.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Initial bounds of a variable's domain, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub low: i32,
    pub high: i32,
}

/// A relation posted over model variables.
///
/// The vocabulary is deliberately small: orderings, one shared subtraction,
/// reified comparisons against a constant, set membership, and pinning.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// x >= y.
    Ge(VarId, VarId),
    /// z = x - y.
    Diff { x: VarId, y: VarId, z: VarId },
    /// b <=> (x < c).
    LtReif { x: VarId, c: i32, b: VarId },
    /// b <=> (x > c).
    GtReif { x: VarId, c: i32, b: VarId },
    /// b <=> (x == c).
    EqReif { x: VarId, c: i32, b: VarId },
    /// x takes a value from the given set.
    Member { x: VarId, values: Vec<i32> },
    /// x == c.
    Fix(VarId, i32),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Ge(x, y) => write!(f, "ge({}, {})", x, y),
            Constraint::Diff { x, y, z } => write!(f, "diff({}, {}, {})", x, y, z),
            Constraint::LtReif { x, c, b } => write!(f, "lt_reif({}, {}, {})", x, c, b),
            Constraint::GtReif { x, c, b } => write!(f, "gt_reif({}, {}, {})", x, c, b),
            Constraint::EqReif { x, c, b } => write!(f, "eq_reif({}, {}, {})", x, c, b),
            Constraint::Member { x, values } => {
                write!(f, "member({}, {} values)", x, values.len())
            }
            Constraint::Fix(x, c) => write!(f, "fix({}, {})", x, c),
        }
    }
}

/// The declared model: variable bounds, posted constraints, branch groups.
#[derive(Debug, Default)]
pub struct Model {
    bounds: Vec<Bounds>,
    constraints: Vec<Constraint>,
    branch_groups: Vec<Vec<VarId>>,
}

impl Model {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a new variable with the inclusive domain [low, high].
    ///
    /// Range validity is checked by the callers that own user input
    /// ([`Voicing::build`](crate::voicing::Voicing::build) and
    /// [`HarmonyProblem::new`](crate::problem::HarmonyProblem::new)).
    pub fn new_var(&mut self, low: i32, high: i32) -> VarId {
        debug_assert!(low <= high);
        let id = VarId(self.bounds.len());
        self.bounds.push(Bounds { low, high });
        id
    }

    /// Declares a new 0/1 boolean variable.
    pub fn new_bool(&mut self) -> VarId {
        self.new_var(0, 1)
    }

    /// Posts a constraint.
    pub fn post(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Appends a branch group. Groups are visited in insertion order; within
    /// the active group an engine picks the smallest remaining domain first
    /// and assigns minimum values first.
    pub fn add_branch_group(&mut self, vars: Vec<VarId>) {
        self.branch_groups.push(vars);
    }

    /// Number of declared variables.
    pub fn var_count(&self) -> usize {
        self.bounds.len()
    }

    /// Initial bounds of a variable.
    pub fn bounds(&self, var: VarId) -> Bounds {
        self.bounds[var.index()]
    }

    /// All posted constraints, in posting order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// The declared branch groups, in order.
    pub fn branch_groups(&self) -> &[Vec<VarId>] {
        &self.branch_groups
    }
}
