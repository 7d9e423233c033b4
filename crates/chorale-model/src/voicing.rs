//! Four-voice pitch variables, the voice-ordering invariant, and the shared
//! soprano-tenor interval.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::model::{Constraint, Model, VarId};

/// One of the four melodic lines, highest register first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Voice {
    Soprano,
    Alto,
    Tenor,
    Bass,
}

impl Voice {
    pub const ALL: [Voice; 4] = [Voice::Soprano, Voice::Alto, Voice::Tenor, Voice::Bass];

    /// Lowercase voice name.
    pub fn name(self) -> &'static str {
        match self {
            Voice::Soprano => "soprano",
            Voice::Alto => "alto",
            Voice::Tenor => "tenor",
            Voice::Bass => "bass",
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The per-voice variable arrays of a problem instance, plus one derived
/// interval variable per chord event.
///
/// Building a `Voicing` declares 4·n pitch variables over [low, high],
/// posts the voice-ordering relations soprano >= alto >= tenor >= bass for
/// every event, and declares the n soprano-tenor interval variables. The
/// ordering is posted here, once, because this is the only constructor;
/// every interval is computed by a single subtraction relation shared by
/// all downstream structure constraints.
#[derive(Debug)]
pub struct Voicing {
    len: usize,
    soprano: Vec<VarId>,
    alto: Vec<VarId>,
    tenor: Vec<VarId>,
    bass: Vec<VarId>,
    interval: Vec<VarId>,
}

impl Voicing {
    /// Declares the voice and interval variables for `events` chord events
    /// over the shared pitch range [low, high].
    ///
    /// Fails fast on an empty range or a zero event count; an unsatisfiable
    /// combination of otherwise valid domains is not an error and surfaces
    /// only as zero enumerated solutions.
    pub fn build(
        model: &mut Model,
        events: usize,
        low: i32,
        high: i32,
    ) -> Result<Self, ModelError> {
        if events == 0 {
            return Err(ModelError::EventCountZero);
        }
        if low > high {
            return Err(ModelError::EmptyPitchRange { low, high });
        }

        let mut declare = |model: &mut Model| -> Vec<VarId> {
            (0..events).map(|_| model.new_var(low, high)).collect()
        };
        let soprano = declare(model);
        let alto = declare(model);
        let tenor = declare(model);
        let bass = declare(model);

        for i in 0..events {
            model.post(Constraint::Ge(soprano[i], alto[i]));
            model.post(Constraint::Ge(alto[i], tenor[i]));
            model.post(Constraint::Ge(tenor[i], bass[i]));
        }

        // The ordering bounds every interval to [0, high - low].
        let interval: Vec<VarId> = (0..events)
            .map(|i| {
                let z = model.new_var(0, high - low);
                model.post(Constraint::Diff {
                    x: soprano[i],
                    y: tenor[i],
                    z,
                });
                z
            })
            .collect();

        Ok(Self {
            len: events,
            soprano,
            alto,
            tenor,
            bass,
            interval,
        })
    }

    /// Number of chord events.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the voicing covers zero events (never true for a built one).
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The variable array of one voice.
    pub fn voice(&self, voice: Voice) -> &[VarId] {
        match voice {
            Voice::Soprano => &self.soprano,
            Voice::Alto => &self.alto,
            Voice::Tenor => &self.tenor,
            Voice::Bass => &self.bass,
        }
    }

    /// The soprano-tenor interval variables, one per event.
    pub fn intervals(&self) -> &[VarId] {
        &self.interval
    }
}
