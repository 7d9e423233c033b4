//! Pitch-class naming.

const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Name of a pitch class using sharps, e.g. 0 -> "C", 10 -> "A#".
/// The input is reduced mod 12 first.
pub fn pitch_class_name(pitch_class: u8) -> &'static str {
    PITCH_CLASS_NAMES[(pitch_class % 12) as usize]
}
