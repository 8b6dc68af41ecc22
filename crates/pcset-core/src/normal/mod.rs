//! Normal form resolution.
//!
//! The normal form of a set is its most compact ascending rotation. Rotation
//! candidates start right after the largest cyclic interval; ties between
//! candidates are settled by [`most_compact`], which is also used to pick the
//! best of the normal form and the inversion forms during analysis.

mod comparator;


pub use comparator::most_compact;

use crate::error::SetError;
use crate::interval::compute_intervals;
use crate::pitch_class::OCTAVE;

/// Calculate the normal form of an ascending ordering.
///
/// # Arguments
/// * `set` - Ascending pitches (values above 11 are allowed, e.g. an
///   inversion built from a raised ordering)
///
/// # Returns
/// The most compact rotation, with pitches that wrapped past the octave
/// carried 12 higher so the ordering stays ascending.
///
/// # Examples
/// ```
/// use pcset_core::resolve_normal;
///
/// // D G B: the largest gap is D -> G, so the rotation starts on G.
/// assert_eq!(resolve_normal(&[2, 7, 11]).unwrap(), vec![7, 11, 14]);
/// ```
pub fn resolve_normal(set: &[i32]) -> Result<Vec<i32>, SetError> {
    let intervals = compute_intervals(set)?;
    log::debug!("intervals of {:?}: {:?}", set, intervals);

    let starts = candidate_starts(&intervals);
    let mut candidates: Vec<Vec<i32>> = starts
        .iter()
        .map(|&start| rotate_from(set, start))
        .collect();
    log::debug!("normal form candidates: {:?}", candidates);

    let normal = if candidates.len() == 1 {
        candidates.swap_remove(0)
    } else {
        most_compact(&candidates)?.clone()
    };
    log::debug!("normal form: {:?}", normal);
    Ok(normal)
}

/// Indices that follow each occurrence of the largest interval, wrapping the
/// last position back to 0.
fn candidate_starts(intervals: &[i32]) -> Vec<usize> {
    let Some(&max) = intervals.iter().max() else {
        return Vec::new();
    };
    log::trace!("largest interval: {}", max);

    intervals
        .iter()
        .enumerate()
        .filter(|&(_, &interval)| interval == max)
        .map(|(i, _)| (i + 1) % intervals.len())
        .collect()
}

/// Rotate `set` to begin at `start`, raising the pitches before `start` by an
/// octave.
fn rotate_from(set: &[i32], start: usize) -> Vec<i32> {
    set[start..]
        .iter()
        .copied()
        .chain(set[..start].iter().map(|&pc| pc + OCTAVE))
        .collect()
}
