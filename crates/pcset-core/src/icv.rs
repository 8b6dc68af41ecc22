//! Interval-class vectors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pitch_class::OCTAVE;

/// Number of interval classes (1 through 6).
pub const INTERVAL_CLASSES: usize = 6;

/// Count of each interval class across all unordered pairs of a set.
///
/// Index `i` holds the count for interval class `i + 1`. Displays in the
/// usual angle-bracket notation, e.g. `<001110>` for a major triad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntervalClassVector([u32; INTERVAL_CLASSES]);

impl IntervalClassVector {
    /// Wrap raw counts.
    pub fn new(counts: [u32; INTERVAL_CLASSES]) -> Self {
        Self(counts)
    }

    /// Count for interval class `class` (1..=6), or `None` out of range.
    pub fn count(&self, class: usize) -> Option<u32> {
        class
            .checked_sub(1)
            .and_then(|index| self.0.get(index))
            .copied()
    }

    /// Raw counts, interval class 1 first.
    pub fn counts(&self) -> &[u32; INTERVAL_CLASSES] {
        &self.0
    }

    /// Total number of pairs counted.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl fmt::Display for IntervalClassVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for count in &self.0 {
            write!(f, "{}", count)?;
        }
        write!(f, ">")
    }
}

/// Map a distance in semitones to its interval class.
///
/// Returns `None` for unisons and octaves, which have no interval class.
pub fn interval_class(distance: i32) -> Option<usize> {
    let reduced = distance.rem_euclid(OCTAVE);
    let class = reduced.min(OCTAVE - reduced);
    (class > 0).then_some(class as usize)
}

/// Tabulate the interval classes of every unordered pair in a prime form.
///
/// The input is sorted before counting, so any ordering of the same pitches
/// gives the same vector.
///
/// # Examples
/// ```
/// use pcset_core::build_icv;
///
/// assert_eq!(build_icv(&[0, 3, 7]).to_string(), "<001110>");
/// ```
pub fn build_icv(prime: &[i32]) -> IntervalClassVector {
    let mut sorted = prime.to_vec();
    sorted.sort_unstable();

    let mut counts = [0u32; INTERVAL_CLASSES];
    for (i, &low) in sorted.iter().enumerate() {
        for &high in &sorted[i + 1..] {
            if let Some(class) = interval_class(high - low) {
                counts[class - 1] += 1;
            }
        }
    }

    let icv = IntervalClassVector(counts);
    log::debug!("interval-class vector of {:?}: {}", sorted, icv);
    icv
}
