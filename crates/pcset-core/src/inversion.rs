//! Inversion of a normal-form ordering.

use crate::error::SetError;
use crate::interval::compute_intervals;

/// Build the inversion of a normal-form ordering.
///
/// The intervals between consecutive pitches are replayed in reverse order
/// starting from the same first pitch, which mirrors the set around it. The
/// wraparound interval is not used.
///
/// # Examples
/// ```
/// use pcset_core::invert;
///
/// // 4 + 3 becomes 3 + 4
/// assert_eq!(invert(&[0, 4, 7]).unwrap(), vec![0, 3, 7]);
/// ```
pub fn invert(normal: &[i32]) -> Result<Vec<i32>, SetError> {
    let mut intervals = compute_intervals(normal)?;
    intervals.pop();
    log::trace!("inverted intervals: {:?}", intervals.iter().rev().collect::<Vec<_>>());

    let mut pitch = normal[0];
    let mut inversion = Vec::with_capacity(normal.len());
    inversion.push(pitch);
    for interval in intervals.into_iter().rev() {
        pitch += interval;
        inversion.push(pitch);
    }
    log::debug!("inversion of {:?}: {:?}", normal, inversion);
    Ok(inversion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_keeps_first_pitch() {
        assert_eq!(invert(&[7, 11, 14]).unwrap(), vec![7, 10, 14]);
    }

    #[test]
    fn test_invert_reverses_intervals() {
        assert_eq!(invert(&[0, 1, 2, 6]).unwrap(), vec![0, 4, 5, 6]);
        assert_eq!(invert(&[4, 5, 8, 12]).unwrap(), vec![4, 8, 11, 12]);
    }

    #[test]
    fn test_invert_is_an_involution_on_orderings() {
        let normal = [1, 2, 5, 7];
        let twice = invert(&invert(&normal).unwrap()).unwrap();
        assert_eq!(twice, normal);
    }

    #[test]
    fn test_invert_single_pitch() {
        assert_eq!(invert(&[5]).unwrap(), vec![5]);
    }

    #[test]
    fn test_invert_rejects_empty() {
        assert_eq!(invert(&[]), Err(SetError::EmptySet));
    }
}
