//! Error types for model construction.

use thiserror::Error;

/// Configuration errors raised while building a harmony model.
///
/// All of these are construction-time contract violations and fail fast,
/// before any search begins. An unsatisfiable but well-formed model is not
/// an error; it simply enumerates zero assignments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// The problem must cover at least one chord event.
    #[error("chord event count must be at least 1")]
    EventCountZero,

    /// The shared pitch range is empty.
    #[error("empty pitch range: low {low} exceeds high {high}")]
    EmptyPitchRange { low: i32, high: i32 },

    /// Tonic pitch classes live in 0..=11.
    #[error("tonic pitch class {tonic} out of range 0..=11")]
    TonicOutOfRange { tonic: u8 },

    /// A scale step pattern must have exactly 7 entries summing to 12.
    #[error("step pattern must have 7 entries summing to 12 (got {len} entries summing to {sum})")]
    BadStepPattern { len: usize, sum: u32 },

    /// Scale steps are strictly positive semitone counts.
    #[error("step pattern entry {index} is zero; steps must be positive")]
    ZeroStep { index: usize },
}
