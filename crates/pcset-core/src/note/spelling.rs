//! Rendering pitch classes as note names.

use serde::{Deserialize, Serialize};

use super::constants::{FLAT_NAMES, SHARP_NAMES};
use crate::pitch_class::{PitchClass, OCTAVE};

/// Something that can name a pitch class.
///
/// Implemented by [`Spelling`] and by any `Fn(PitchClass) -> String`.
pub trait NoteNamer {
    /// Name of pitch class `pc` (0..=11).
    fn name(&self, pc: PitchClass) -> String;

    /// Names for each pitch of an ordering, in order. Pitches outside
    /// 0..=11 are reduced modulo 12 first.
    fn name_all(&self, pitches: &[i32]) -> Vec<String> {
        pitches
            .iter()
            .map(|&p| self.name(p.rem_euclid(OCTAVE) as PitchClass))
            .collect()
    }
}

/// Enharmonic spelling used for black-key pitch classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    /// C# D# F# G# A#
    #[default]
    Sharps,
    /// Db Eb Gb Ab Bb
    Flats,
}

impl NoteNamer for Spelling {
    fn name(&self, pc: PitchClass) -> String {
        let names = match self {
            Spelling::Sharps => &SHARP_NAMES,
            Spelling::Flats => &FLAT_NAMES,
        };
        names[usize::from(pc) % names.len()].to_string()
    }
}

impl<F> NoteNamer for F
where
    F: Fn(PitchClass) -> String,
{
    fn name(&self, pc: PitchClass) -> String {
        self(pc)
    }
}

/// Format an ordering as note names followed by its numbers, e.g.
/// `C, E, G ([0, 4, 7])`.
pub fn format_pcs<N: NoteNamer + ?Sized>(namer: &N, pitches: &[i32]) -> String {
    format!("{} ({:?})", namer.name_all(pitches).join(", "), pitches)
}
