//! Note name conversion for pitch-class sets.
//!
//! This module translates between note names ("C#", "Eb") and pitch-class
//! integers in both directions. It sits outside the analysis pipeline: the
//! pipeline only ever sees [`PitchClassSet`](crate::PitchClassSet)s, and only
//! calls back into [`NoteNamer`] to label subsets.

mod constants;
mod conversion;
mod error;
mod spelling;

#[cfg(test)]
mod tests;

pub use constants::{FLAT_NAMES, SHARP_NAMES};
pub use conversion::{note_to_pitch_class, parse_notes};
pub use error::NoteFormatError;
pub use spelling::{format_pcs, NoteNamer, Spelling};
