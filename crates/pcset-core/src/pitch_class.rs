//! Pitch classes and pitch-class sets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A note identity modulo one octave, 0 (C) through 11 (B).
pub type PitchClass = u8;

/// Number of pitch classes in an octave.
pub const OCTAVE: i32 = 12;

/// An ascending, duplicate-free set of pitch classes.
///
/// Every constructor reduces its input modulo 12, sorts it and removes
/// duplicates, so the contents are always strictly increasing values in
/// `0..=11`. The set is never mutated after construction; each stage of the
/// analysis produces a fresh sequence instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<PitchClass>", from = "Vec<i32>")]
pub struct PitchClassSet {
    pcs: Vec<PitchClass>,
}

impl PitchClassSet {
    /// Build a set from arbitrary integers, reducing each modulo 12.
    ///
    /// # Examples
    /// ```
    /// use pcset_core::PitchClassSet;
    ///
    /// let set = PitchClassSet::new([7, 4, 0, 12, 16]);
    /// assert_eq!(set.as_slice(), &[0, 4, 7]);
    /// ```
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        let mut pcs: Vec<PitchClass> = values
            .into_iter()
            .map(|v| v.rem_euclid(OCTAVE) as PitchClass)
            .collect();
        pcs.sort_unstable();
        pcs.dedup();
        Self { pcs }
    }

    /// The pitch classes in ascending order.
    pub fn as_slice(&self) -> &[PitchClass] {
        &self.pcs
    }

    /// Number of distinct pitch classes.
    pub fn len(&self) -> usize {
        self.pcs.len()
    }

    /// Whether the set has no pitch classes.
    pub fn is_empty(&self) -> bool {
        self.pcs.is_empty()
    }

    /// Iterate over the pitch classes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        self.pcs.iter().copied()
    }

    /// The set as the signed sequence the analysis stages operate on.
    pub fn to_sequence(&self) -> Vec<i32> {
        self.pcs.iter().map(|&pc| i32::from(pc)).collect()
    }

    /// The set with every pitch class shifted by `semitones`, modulo 12.
    pub fn transpose(&self, semitones: i32) -> Self {
        Self::new(self.pcs.iter().map(|&pc| i32::from(pc) + semitones))
    }
}

impl From<Vec<i32>> for PitchClassSet {
    fn from(values: Vec<i32>) -> Self {
        Self::new(values)
    }
}

impl From<PitchClassSet> for Vec<PitchClass> {
    fn from(set: PitchClassSet) -> Self {
        set.pcs
    }
}

impl FromIterator<i32> for PitchClassSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for PitchClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.pcs)
    }
}
