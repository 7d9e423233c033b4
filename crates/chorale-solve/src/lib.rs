//! chorale-solve - Reference Finite-Domain Engine
//!
//! A compact backtracking engine for the constraint models declared by
//! `chorale-model`. It implements the model crate's `Search` trait: pull one
//! assignment at a time, bound the search by solution count, step count, or
//! wall-clock deadline, and report a distinguishable outcome when a bound
//! stops the search before exhaustion.
//!
//! The engine propagates every posted relation to fixpoint, branches on the
//! model's per-voice groups (smallest remaining domain first, minimum value
//! first), and isolates branches by cloning the whole domain arena per
//! search node. Given fixed inputs the enumeration is fully deterministic.
//!
//! # Example
//!
//! ```
//! use chorale_model::{HarmonyConfig, HarmonyProblem, Limits, Mode};
//! use chorale_solve::Engine;
//!
//! let problem = HarmonyProblem::new(HarmonyConfig {
//!     events: 1,
//!     low: 60,
//!     high: 62,
//!     tonic: 0,
//!     mode: Mode::Major,
//!     scale_only: false,
//! })?;
//!
//! let engine = Engine::new(
//!     problem.model(),
//!     Limits {
//!         max_solutions: Some(5),
//!         ..Limits::none()
//!     },
//! );
//! let solutions: Vec<_> = problem.solutions(engine).collect();
//! assert_eq!(solutions.len(), 5);
//! for assignment in &solutions {
//!     assert!(assignment.soprano[0] >= assignment.bass[0]);
//! }
//! # Ok::<(), chorale_model::ModelError>(())
//! ```
//!
//! # Modules
//!
//! - [`domain`]: bitset finite domains with value-copy cloning
//! - [`engine`]: the depth-first search engine and its statistics

pub mod domain;
pub mod engine;

mod propagate;

pub use domain::BitDomain;
pub use engine::{Engine, Statistics};

/// Crate version for downstream identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
