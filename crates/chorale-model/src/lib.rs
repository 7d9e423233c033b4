//! chorale-model - Four-Voice Tonal Harmony as a Constraint Model
//!
//! This crate encodes rules of four-voice tonal harmony (soprano, alto,
//! tenor, bass) as a finite-domain constraint model that a generic search
//! engine enumerates. The crate is purely declarative: it derives tonality
//! tables, declares variables and constraints, and maps engine snapshots
//! back into voice form. It contains no search and couples to engines only
//! through the [`search::Search`] trait.
//!
//! # Overview
//!
//! - A [`Tonality`] turns a tonic pitch class and a 7-step mode pattern into
//!   absolute pitch classes for the scale degrees and auxiliary roles, and
//!   partitions the chromatic set into tonal and modal notes.
//! - A [`Voicing`] declares four equal-length pitch variable arrays over a
//!   shared range, posts the voice-ordering invariant
//!   soprano >= alto >= tenor >= bass for every event, and derives one
//!   soprano-tenor interval variable per event.
//! - A [`Structure`] binds three mutually-exclusive boolean signals per
//!   event to that interval by reified comparison against one octave:
//!   close (< 12), open (> 12), neutral (= 12).
//! - A [`HarmonyProblem`] validates a [`HarmonyConfig`], assembles the
//!   above, and adapts engine output into [`Assignment`] values.
//!
//! # Example
//!
//! ```
//! use chorale_model::{HarmonyConfig, HarmonyProblem, Mode};
//!
//! let problem = HarmonyProblem::new(HarmonyConfig {
//!     events: 4,
//!     low: 48,
//!     high: 84,
//!     tonic: 0,
//!     mode: Mode::Major,
//!     scale_only: true,
//! })?;
//!
//! assert_eq!(problem.tonality().name(), "C major");
//! assert_eq!(problem.tonality().tonal_pitch_classes(), [0, 5, 7]);
//! # Ok::<(), chorale_model::ModelError>(())
//! ```
//!
//! # Modules
//!
//! - [`tonality`]: scale-degree derivation and the tonal/modal partition
//! - [`model`]: variables, constraints, and branch groups
//! - [`voicing`]: the four voice arrays and the ordering invariant
//! - [`structure`]: reified close/open/neutral classification
//! - [`problem`]: configuration, assembly, and solution extraction
//! - [`search`]: the narrow engine interface
//! - [`solution`]: accepted assignments and their JSON form
//! - [`error`]: construction-time configuration errors

pub mod error;
pub mod model;
pub mod problem;
pub mod search;
pub mod solution;
pub mod structure;
pub mod tonality;
pub mod voicing;

pub use error::ModelError;
pub use model::{Bounds, Constraint, Model, VarId};
pub use problem::{HarmonyConfig, HarmonyProblem, Solutions};
pub use search::{Limits, Search, SearchOutcome, Step};
pub use solution::Assignment;
pub use structure::{Structure, OCTAVE};
pub use tonality::{pitch_class_name, Degree, Mode, Role, Tonality, PITCH_CLASSES};
pub use voicing::{Voice, Voicing};

/// Crate version for downstream identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
