//! Note name tables.

use crate::pitch_class::PitchClass;

/// Semitone offsets for natural note letters (C=0, D=2, E=4, F=5, G=7, A=9, B=11).
pub(crate) const SEMITONE_MAP: [(char, PitchClass); 7] = [
    ('C', 0),
    ('D', 2),
    ('E', 4),
    ('F', 5),
    ('G', 7),
    ('A', 9),
    ('B', 11),
];

/// Pitch-class names using sharps for the black keys.
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Pitch-class names using flats for the black keys.
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];
