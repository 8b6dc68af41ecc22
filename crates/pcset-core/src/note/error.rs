//! Error types for note name parsing.

use thiserror::Error;

use crate::error::ErrorCode;

/// A token could not be read as a note name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteFormatError {
    #[error("unrecognized note name '{token}'")]
    Unrecognized { token: String },
}

impl ErrorCode for NoteFormatError {
    fn code(&self) -> &'static str {
        match self {
            NoteFormatError::Unrecognized { .. } => "NOTE_001",
        }
    }

    fn category(&self) -> &'static str {
        "note"
    }
}
