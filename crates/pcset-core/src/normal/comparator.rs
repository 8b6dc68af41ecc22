//! Compactness comparison between candidate orderings.

use crate::error::SetError;

/// Pick the most compact of several equal-length orderings.
///
/// Candidates are compared by the distance from their first pitch to the
/// pitch at index `n - 2`, then `n - 3`, and so on down to index 1. At each
/// step only the candidates with the smallest distance survive, and the
/// search stops as soon as one is left. If the candidates tie all the way
/// down, the one starting on the lowest pitch wins (the earliest one in
/// `candidates` if that ties too).
///
/// # Errors
/// * [`SetError::NoCandidates`] if `candidates` is empty
/// * [`SetError::EmptySet`] if the orderings are empty
/// * [`SetError::LengthMismatch`] if the orderings differ in length
///
/// # Examples
/// ```
/// use pcset_core::most_compact;
///
/// let candidates = [vec![0, 4, 7], vec![0, 3, 7]];
/// assert_eq!(most_compact(&candidates).unwrap(), &vec![0, 3, 7]);
/// ```
pub fn most_compact<S: AsRef<[i32]>>(candidates: &[S]) -> Result<&S, SetError> {
    let first = candidates.first().ok_or(SetError::NoCandidates)?;
    let len = first.as_ref().len();
    if len == 0 {
        return Err(SetError::EmptySet);
    }
    if let Some(other) = candidates.iter().find(|c| c.as_ref().len() != len) {
        return Err(SetError::LengthMismatch {
            expected: len,
            found: other.as_ref().len(),
        });
    }

    let mut survivors: Vec<&S> = candidates.iter().collect();

    for target in (1..len - 1).rev() {
        let distances: Vec<i32> = survivors
            .iter()
            .map(|c| {
                let c = c.as_ref();
                c[target] - c[0]
            })
            .collect();
        let Some(&min) = distances.iter().min() else {
            break;
        };

        survivors = survivors
            .into_iter()
            .zip(distances)
            .filter(|&(_, distance)| distance == min)
            .map(|(c, _)| c)
            .collect();
        log::trace!(
            "index {}: minimum distance {}, {} candidate(s) left",
            target,
            min,
            survivors.len()
        );

        if let [winner] = survivors[..] {
            return Ok(winner);
        }
    }

    log::trace!("all comparisons tied, selecting the lowest starting pitch");
    survivors
        .into_iter()
        .min_by_key(|c| c.as_ref()[0])
        .ok_or(SetError::NoCandidates)
}
