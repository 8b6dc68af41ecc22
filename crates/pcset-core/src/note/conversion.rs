//! Note name parsing.

use super::constants::SEMITONE_MAP;
use super::error::NoteFormatError;
use crate::pitch_class::{PitchClass, PitchClassSet, OCTAVE};

/// Convert a single note name to its pitch class.
///
/// A note name is a letter A-G (either case) followed by any number of
/// accidentals: `#` or `♯` raises by a semitone, `b` or `♭` lowers by one.
/// The result wraps around the octave, so `Cb` is 11 and `B#` is 0.
///
/// # Examples
/// ```
/// use pcset_core::note::note_to_pitch_class;
///
/// assert_eq!(note_to_pitch_class("C#").unwrap(), 1);
/// assert_eq!(note_to_pitch_class("Eb").unwrap(), 3);
/// assert_eq!(note_to_pitch_class("Cb").unwrap(), 11);
/// assert!(note_to_pitch_class("H").is_err());
/// ```
pub fn note_to_pitch_class(name: &str) -> Result<PitchClass, NoteFormatError> {
    let unrecognized = || NoteFormatError::Unrecognized {
        token: name.to_string(),
    };

    let mut chars = name.trim().chars();
    let letter = chars.next().ok_or_else(unrecognized)?.to_ascii_uppercase();
    let natural = SEMITONE_MAP
        .iter()
        .find(|(c, _)| *c == letter)
        .map(|&(_, s)| i32::from(s))
        .ok_or_else(unrecognized)?;

    let mut semitone = natural;
    for accidental in chars {
        semitone += match accidental {
            '#' | '♯' => 1,
            'b' | '♭' => -1,
            _ => return Err(unrecognized()),
        };
    }

    Ok(semitone.rem_euclid(OCTAVE) as PitchClass)
}

/// Parse whitespace-separated note names into a pitch-class set.
///
/// Repeated pitch classes (including enharmonic spellings such as `C#` and
/// `Db`) collapse into one. Input with no names yields an empty set.
///
/// # Examples
/// ```
/// use pcset_core::note::parse_notes;
///
/// let set = parse_notes("G  E C Fb").unwrap();
/// assert_eq!(set.as_slice(), &[0, 4, 7]);
/// ```
pub fn parse_notes(input: &str) -> Result<PitchClassSet, NoteFormatError> {
    let pcs = input
        .split_whitespace()
        .map(|token| note_to_pitch_class(token).map(i32::from))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PitchClassSet::new(pcs))
}
