//! Error types for pitch-class set analysis.
//!
//! The core never recovers from an invalid precondition: every operation
//! returns on the first violation and leaves no state behind.

use thiserror::Error;

/// Trait implemented by every error type in this crate.
///
/// Gives front ends a stable code and a category to report alongside the
/// human-readable message, without matching on each concrete error type.
///
/// # Example
///
/// ```
/// use pcset_core::{ErrorCode, SetError};
///
/// let err = SetError::EmptySet;
/// assert_eq!(err.code(), "SET_001");
/// assert_eq!(err.category(), "set");
/// ```
pub trait ErrorCode: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "SET_001" or "NOTE_001". Codes are stable
    /// and can be used for programmatic error handling.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

/// Errors raised by the analytical pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    /// An analysis operation received an empty pitch-class set.
    #[error("pitch-class set is empty")]
    EmptySet,

    /// The pick size for a combination scan is zero or larger than the set.
    #[error("invalid pick size {pick} for a set of {size} pitch class(es)")]
    InvalidPick { pick: usize, size: usize },

    /// The compactness comparator was given no candidates.
    #[error("no candidate orderings to compare")]
    NoCandidates,

    /// The compactness comparator was given orderings of different lengths.
    #[error("candidate ordering has {found} element(s), expected {expected}")]
    LengthMismatch { expected: usize, found: usize },
}

impl ErrorCode for SetError {
    fn code(&self) -> &'static str {
        match self {
            SetError::EmptySet => "SET_001",
            SetError::InvalidPick { .. } => "SET_002",
            SetError::NoCandidates => "SET_003",
            SetError::LengthMismatch { .. } => "SET_004",
        }
    }

    fn category(&self) -> &'static str {
        "set"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_error_codes_are_distinct() {
        let errors = [
            SetError::EmptySet,
            SetError::InvalidPick { pick: 0, size: 3 },
            SetError::NoCandidates,
            SetError::LengthMismatch {
                expected: 3,
                found: 2,
            },
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_invalid_pick_message() {
        let err = SetError::InvalidPick { pick: 5, size: 4 };
        assert_eq!(
            err.message(),
            "invalid pick size 5 for a set of 4 pitch class(es)"
        );
    }
}
