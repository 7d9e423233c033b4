//! Reified chord-structure classification: close, open, or neutral.

use crate::model::{Constraint, Model, VarId};
use crate::voicing::Voicing;

/// One full octave in semitones; the classification pivot.
pub const OCTAVE: i32 = 12;

/// Three boolean signal arrays classifying each chord event by its
/// soprano-tenor interval: below an octave (close), above (open), or exactly
/// one octave (neutral).
///
/// The three relations partition every possible interval value, so exactly
/// one signal is true per event for any instantiation that satisfies the
/// voice ordering; the ordering also guarantees the interval is
/// non-negative, so no negative case exists. Building a `Structure` posts
/// the reified constraints but never mutates the voice variables.
#[derive(Debug)]
pub struct Structure {
    close: Vec<VarId>,
    open: Vec<VarId>,
    neutral: Vec<VarId>,
}

impl Structure {
    /// Declares the three flag arrays and wires each to the shared interval
    /// variable of its event.
    pub fn build(model: &mut Model, voicing: &Voicing) -> Self {
        let events = voicing.len();
        let mut close = Vec::with_capacity(events);
        let mut open = Vec::with_capacity(events);
        let mut neutral = Vec::with_capacity(events);

        for &interval in voicing.intervals() {
            let is_close = model.new_bool();
            let is_open = model.new_bool();
            let is_neutral = model.new_bool();
            model.post(Constraint::LtReif {
                x: interval,
                c: OCTAVE,
                b: is_close,
            });
            model.post(Constraint::GtReif {
                x: interval,
                c: OCTAVE,
                b: is_open,
            });
            model.post(Constraint::EqReif {
                x: interval,
                c: OCTAVE,
                b: is_neutral,
            });
            close.push(is_close);
            open.push(is_open);
            neutral.push(is_neutral);
        }

        Self {
            close,
            open,
            neutral,
        }
    }

    /// Flags for intervals below one octave.
    pub fn close(&self) -> &[VarId] {
        &self.close
    }

    /// Flags for intervals above one octave.
    pub fn open(&self) -> &[VarId] {
        &self.open
    }

    /// Flags for intervals of exactly one octave.
    pub fn neutral(&self) -> &[VarId] {
        &self.neutral
    }

    /// Pins one flag array to a constant across all events.
    ///
    /// Diagnostic wiring check only: it validates that the reified relations
    /// prune the intervals as expected. Not part of the supported interface.
    #[doc(hidden)]
    pub fn force_all(model: &mut Model, flags: &[VarId], value: bool) {
        for &flag in flags {
            model.post(Constraint::Fix(flag, i32::from(value)));
        }
    }
}
