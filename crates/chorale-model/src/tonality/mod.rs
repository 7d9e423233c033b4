//! Tonality derivation: scale degrees, harmonic roles, tonal/modal partition.
//!
//! A [`Tonality`] is an immutable table built once from a tonic pitch class
//! and a 7-step interval pattern. It answers pure queries and has no
//! dependency on the constraint model or any solver.

mod names;


pub use names::pitch_class_name;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Number of pitch classes in the chromatic set.
pub const PITCH_CLASSES: u8 = 12;

/// A named mode with a canonical step pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Major,
    NaturalMinor,
    HarmonicMinor,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Major, Mode::NaturalMinor, Mode::HarmonicMinor];

    /// The mode's step pattern in semitones; always sums to 12.
    pub fn steps(self) -> [u8; 7] {
        match self {
            Mode::Major => [2, 2, 1, 2, 2, 2, 1],
            Mode::NaturalMinor => [2, 1, 2, 2, 1, 2, 2],
            Mode::HarmonicMinor => [2, 1, 2, 2, 1, 3, 1],
        }
    }

    /// Human-readable mode name.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::NaturalMinor => "natural minor",
            Mode::HarmonicMinor => "harmonic minor",
        }
    }

    /// Recognizes a step pattern as one of the named modes.
    pub fn from_steps(steps: [u8; 7]) -> Option<Mode> {
        Mode::ALL.into_iter().find(|mode| mode.steps() == steps)
    }
}

/// One of the seven primary scale degrees, numbered from the tonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Degree {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
}

impl Degree {
    pub const ALL: [Degree; 7] = [
        Degree::I,
        Degree::II,
        Degree::III,
        Degree::IV,
        Degree::V,
        Degree::VI,
        Degree::VII,
    ];

    /// Zero-based position of the degree (I -> 0 .. VII -> 6).
    pub fn index(self) -> usize {
        match self {
            Degree::I => 0,
            Degree::II => 1,
            Degree::III => 2,
            Degree::IV => 3,
            Degree::V => 4,
            Degree::VI => 5,
            Degree::VII => 6,
        }
    }
}

/// Auxiliary harmonic roles derived alongside the primary degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Dominant-preparation root recorded while stepping toward a degree.
    AppliedDominant(Degree),
    /// The lowered second, one semitone above the tonic.
    Neapolitan,
    /// Diminished-seventh role on the leading tone.
    DiminishedSeventh,
}

/// An immutable tonality table: tonic, degree pitch classes, auxiliary
/// roles, and the tonal/modal partition of the chromatic set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tonality {
    tonic: u8,
    steps: [u8; 7],
    degrees: [u8; 7],
    dominant_roots: [Option<u8>; 7],
    neapolitan: u8,
    diminished_seventh: u8,
    tonal: [bool; 12],
}

impl Tonality {
    /// Builds a tonality from a tonic pitch class and a named mode.
    pub fn new(tonic: u8, mode: Mode) -> Result<Self, ModelError> {
        Self::from_steps(tonic, mode.steps())
    }

    /// Builds a tonality from a tonic pitch class and a 7-step pattern.
    ///
    /// Fails if the tonic is outside 0..=11, any step is zero, or the steps
    /// do not sum to 12.
    pub fn from_steps(tonic: u8, steps: [u8; 7]) -> Result<Self, ModelError> {
        if tonic >= PITCH_CLASSES {
            return Err(ModelError::TonicOutOfRange { tonic });
        }
        let sum: u32 = steps.iter().map(|&s| u32::from(s)).sum();
        if sum != 12 {
            return Err(ModelError::BadStepPattern { len: steps.len(), sum });
        }
        if let Some(index) = steps.iter().position(|&s| s == 0) {
            return Err(ModelError::ZeroStep { index });
        }

        // Walk the pattern. Before each step the accumulator holds the pitch
        // of the degree just derived; that value is recorded as the
        // applied-dominant root of the upcoming degree. After the step the
        // accumulator (mod 12) is the upcoming degree's pitch class. The
        // seventh step closes the octave back onto the tonic.
        //
        // TODO: confirm with a theory reference which degrees should carry an
        // applied-dominant root; II..VI matches the observed table but the
        // exclusion of VII has no written justification yet.
        let mut degrees = [0u8; 7];
        let mut dominant_roots: [Option<u8>; 7] = [None; 7];
        degrees[0] = tonic;
        let mut acc = tonic;
        for (k, &step) in steps.iter().enumerate() {
            let upcoming = (k + 1) % 7;
            if (1..=5).contains(&upcoming) {
                dominant_roots[upcoming] = Some(acc);
            }
            acc = (acc + step) % PITCH_CLASSES;
            if upcoming != 0 {
                degrees[upcoming] = acc;
            }
        }
        debug_assert_eq!(acc, tonic);

        let mut tonal = [false; 12];
        for degree in [Degree::I, Degree::IV, Degree::V] {
            tonal[degrees[degree.index()] as usize] = true;
        }

        Ok(Self {
            tonic,
            steps,
            degrees,
            dominant_roots,
            neapolitan: (tonic + 1) % PITCH_CLASSES,
            diminished_seventh: (tonic + 11) % PITCH_CLASSES,
            tonal,
        })
    }

    /// Builds a tonality from a step slice, rejecting patterns that do not
    /// have exactly 7 entries.
    pub fn from_step_slice(tonic: u8, steps: &[u8]) -> Result<Self, ModelError> {
        let fixed: [u8; 7] = steps.try_into().map_err(|_| ModelError::BadStepPattern {
            len: steps.len(),
            sum: steps.iter().map(|&s| u32::from(s)).sum(),
        })?;
        Self::from_steps(tonic, fixed)
    }

    /// The tonic pitch class.
    pub fn tonic(&self) -> u8 {
        self.tonic
    }

    /// The step pattern this tonality was built from.
    pub fn steps(&self) -> [u8; 7] {
        self.steps
    }

    /// Absolute pitch class of a primary scale degree.
    pub fn degree_pitch(&self, degree: Degree) -> u8 {
        self.degrees[degree.index()]
    }

    /// Pitch classes of all seven degrees, I..VII.
    pub fn scale_pitch_classes(&self) -> [u8; 7] {
        self.degrees
    }

    /// Pitch class of an auxiliary role. Returns `None` for degrees that
    /// carry no applied-dominant root (the tonic and degree VII).
    pub fn role_pitch(&self, role: Role) -> Option<u8> {
        match role {
            Role::AppliedDominant(degree) => self.dominant_roots[degree.index()],
            Role::Neapolitan => Some(self.neapolitan),
            Role::DiminishedSeventh => Some(self.diminished_seventh),
        }
    }

    /// Whether a pitch class belongs to the tonal set {I, IV, V}.
    /// The input is reduced mod 12 first.
    pub fn is_tonal(&self, pitch_class: u8) -> bool {
        self.tonal[(pitch_class % PITCH_CLASSES) as usize]
    }

    /// Whether a pitch class belongs to the modal set. Modal notes are the
    /// full chromatic complement of the tonal set, not only the diatonic
    /// modal degrees.
    pub fn is_modal(&self, pitch_class: u8) -> bool {
        !self.is_tonal(pitch_class)
    }

    /// Pitch classes of degrees I, IV, and V, in that order.
    pub fn tonal_pitch_classes(&self) -> [u8; 3] {
        [
            self.degrees[Degree::I.index()],
            self.degrees[Degree::IV.index()],
            self.degrees[Degree::V.index()],
        ]
    }

    /// The modal pitch classes in ascending order.
    pub fn modal_pitch_classes(&self) -> Vec<u8> {
        (0..PITCH_CLASSES).filter(|&pc| self.is_modal(pc)).collect()
    }

    /// Every absolute pitch in [low, high] whose pitch class is one of the
    /// seven scale degrees. Used to seed voice domains.
    pub fn member_pitches(&self, low: i32, high: i32) -> Vec<i32> {
        (low..=high)
            .filter(|&pitch| {
                let pc = pitch.rem_euclid(i32::from(PITCH_CLASSES)) as u8;
                self.degrees.contains(&pc)
            })
            .collect()
    }

    /// Human-readable label, e.g. "C major" or "A natural minor".
    pub fn name(&self) -> String {
        let mode = Mode::from_steps(self.steps)
            .map(Mode::name)
            .unwrap_or("custom");
        format!("{} {}", pitch_class_name(self.tonic), mode)
    }
}
