//! Full analysis of a single pitch-class set.

use serde::{Deserialize, Serialize};

use crate::error::SetError;
use crate::icv::{build_icv, IntervalClassVector};
use crate::inversion::invert;
use crate::normal::{most_compact, resolve_normal};
use crate::pitch_class::{PitchClass, PitchClassSet};
use crate::prime::reduce_to_prime;

/// Every artifact derived from one pitch-class set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetAnalysis {
    /// The analyzed pitch classes, ascending.
    pub pitch_classes: Vec<PitchClass>,
    /// Normal form of the set.
    pub normal: Vec<i32>,
    /// Inversion of the normal form.
    pub inversion: Vec<i32>,
    /// Normal form of the inversion.
    pub inversion_normal: Vec<i32>,
    /// Most compact of `normal`, `inversion` and `inversion_normal`.
    pub best: Vec<i32>,
    /// `best` transposed to start at 0.
    pub prime: Vec<i32>,
    /// Interval-class vector of the prime form.
    pub icv: IntervalClassVector,
}

/// Analyze a pitch-class set.
///
/// Computes the normal form, its inversion and the inversion's normal form,
/// keeps the most compact of the three, and reduces it to the prime form and
/// its interval-class vector. The function is pure; nothing is retained
/// between calls.
///
/// # Errors
/// [`SetError::EmptySet`] if `set` is empty.
///
/// # Examples
/// ```
/// use pcset_core::{analyze, PitchClassSet};
///
/// let analysis = analyze(&PitchClassSet::new([0, 4, 7])).unwrap();
/// assert_eq!(analysis.prime, vec![0, 3, 7]);
/// assert_eq!(analysis.icv.to_string(), "<001110>");
/// ```
pub fn analyze(set: &PitchClassSet) -> Result<SetAnalysis, SetError> {
    if set.is_empty() {
        return Err(SetError::EmptySet);
    }
    log::debug!("analyzing {}", set);

    let normal = resolve_normal(&set.to_sequence())?;
    let inversion = invert(&normal)?;
    let inversion_normal = resolve_normal(&inversion)?;

    let best = most_compact(&[&normal, &inversion, &inversion_normal])?.to_vec();
    log::debug!("best normal order: {:?}", best);

    let prime = reduce_to_prime(&best)?;
    let icv = build_icv(&prime);

    Ok(SetAnalysis {
        pitch_classes: set.as_slice().to_vec(),
        normal,
        inversion,
        inversion_normal,
        best,
        prime,
        icv,
    })
}
