//! Cyclic interval computation.

use crate::error::SetError;
use crate::pitch_class::OCTAVE;

/// Calculate the intervals between consecutive pitches of an ordering,
/// including the wraparound from the last pitch back to the first.
///
/// The first pitch is appended an octave higher, so a set of `n` pitches
/// always yields `n` intervals.
///
/// # Examples
/// ```
/// use pcset_core::compute_intervals;
///
/// assert_eq!(compute_intervals(&[0, 4, 7]).unwrap(), vec![4, 3, 5]);
/// ```
pub fn compute_intervals(set: &[i32]) -> Result<Vec<i32>, SetError> {
    let (Some(&first), Some(&last)) = (set.first(), set.last()) else {
        return Err(SetError::EmptySet);
    };

    let mut intervals: Vec<i32> = set.windows(2).map(|pair| pair[1] - pair[0]).collect();
    intervals.push(first + OCTAVE - last);
    Ok(intervals)
}
