//! Problem assembly: configuration, model construction, and solution
//! extraction.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::model::{Constraint, Model, VarId};
use crate::search::{Search, SearchOutcome, Step};
use crate::solution::Assignment;
use crate::structure::Structure;
use crate::tonality::{Mode, Tonality};
use crate::voicing::{Voice, Voicing};

/// Construction-time configuration of a harmony problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarmonyConfig {
    /// Number of chord events.
    pub events: usize,
    /// Lowest pitch available to every voice.
    pub low: i32,
    /// Highest pitch available to every voice.
    pub high: i32,
    /// Tonic pitch class, 0..=11.
    pub tonic: u8,
    /// Mode supplying the scale step pattern.
    pub mode: Mode,
    /// Restrict every voice to pitches whose class is a scale degree.
    pub scale_only: bool,
}

impl Default for HarmonyConfig {
    fn default() -> Self {
        // E2..C6 covers the combined SATB range.
        Self {
            events: 8,
            low: 40,
            high: 84,
            tonic: 0,
            mode: Mode::Major,
            scale_only: false,
        }
    }
}

/// A fully assembled problem instance: tonality table, declared model,
/// voicing, structure flags, and per-voice branch groups.
///
/// Construction is single-threaded and synchronous; the instance is
/// immutable afterwards and is handed to a [`Search`] engine by value of
/// its model view.
#[derive(Debug)]
pub struct HarmonyProblem {
    config: HarmonyConfig,
    tonality: Tonality,
    model: Model,
    voicing: Voicing,
    structure: Structure,
}

impl HarmonyProblem {
    /// Validates the configuration and builds the constraint model.
    pub fn new(config: HarmonyConfig) -> Result<Self, ModelError> {
        let tonality = Tonality::new(config.tonic, config.mode)?;

        let mut model = Model::new();
        let voicing = Voicing::build(&mut model, config.events, config.low, config.high)?;
        let structure = Structure::build(&mut model, &voicing);

        if config.scale_only {
            let members = tonality.member_pitches(config.low, config.high);
            for voice in Voice::ALL {
                for &var in voicing.voice(voice) {
                    model.post(Constraint::Member {
                        x: var,
                        values: members.clone(),
                    });
                }
            }
        }

        for voice in Voice::ALL {
            model.add_branch_group(voicing.voice(voice).to_vec());
        }

        Ok(Self {
            config,
            tonality,
            model,
            voicing,
            structure,
        })
    }

    pub fn config(&self) -> &HarmonyConfig {
        &self.config
    }

    pub fn tonality(&self) -> &Tonality {
        &self.tonality
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn voicing(&self) -> &Voicing {
        &self.voicing
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Maps a raw engine snapshot into voice-and-flag form.
    pub fn assignment(&self, values: &[i32]) -> Assignment {
        debug_assert_eq!(values.len(), self.model.var_count());
        let pitches = |vars: &[VarId]| -> Vec<i32> {
            vars.iter().map(|v| values[v.index()]).collect()
        };
        let flags = |vars: &[VarId]| -> Vec<bool> {
            vars.iter().map(|v| values[v.index()] != 0).collect()
        };
        Assignment {
            soprano: pitches(self.voicing.voice(Voice::Soprano)),
            alto: pitches(self.voicing.voice(Voice::Alto)),
            tenor: pitches(self.voicing.voice(Voice::Tenor)),
            bass: pitches(self.voicing.voice(Voice::Bass)),
            close: flags(self.structure.close()),
            open: flags(self.structure.open()),
            neutral: flags(self.structure.neutral()),
        }
    }

    /// Adapts a search engine into an iterator of assignments. An
    /// unsatisfiable instance yields an empty iteration, never an error.
    pub fn solutions<E: Search>(&self, engine: E) -> Solutions<'_, E> {
        Solutions {
            problem: self,
            engine,
        }
    }
}

/// Pull-based iterator over a problem's accepted assignments.
#[derive(Debug)]
pub struct Solutions<'p, E> {
    problem: &'p HarmonyProblem,
    engine: E,
}

impl<E: Search> Solutions<'_, E> {
    /// The engine's final outcome, or `None` while assignments may follow.
    pub fn outcome(&self) -> Option<SearchOutcome> {
        self.engine.outcome()
    }
}

impl<E: Search> Iterator for Solutions<'_, E> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Assignment> {
        match self.engine.advance() {
            Step::Solution(values) => Some(self.problem.assignment(&values)),
            Step::Done(_) => None,
        }
    }
}
