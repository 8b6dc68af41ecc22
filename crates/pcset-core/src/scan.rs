//! Prime forms of every fixed-size subset of a pitch-class set.

use serde::{Deserialize, Serialize};

use crate::analyze::analyze;
use crate::error::SetError;
use crate::note::NoteNamer;
use crate::pitch_class::{PitchClass, PitchClassSet};
use crate::prime::prime_digits;

/// Iterator over the `k`-element index combinations of `0..n`, in
/// lexicographic order.
///
/// Yields a single empty combination for `k == 0` and nothing when `k > n`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

/// Enumerate the `k`-element index combinations of `0..n`.
///
/// # Examples
/// ```
/// use pcset_core::combinations;
///
/// let all: Vec<Vec<usize>> = combinations(4, 3).collect();
/// assert_eq!(all, vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]]);
/// ```
pub fn combinations(n: usize, k: usize) -> Combinations {
    Combinations {
        n,
        k,
        indices: (0..k).collect(),
        started: false,
        done: k > n,
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        // rightmost index that has not reached its final position
        let offset = self.n - self.k;
        let Some(i) = (0..self.k).rev().find(|&i| self.indices[i] != i + offset) else {
            self.done = true;
            return None;
        };

        self.indices[i] += 1;
        for j in i + 1..self.k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// Number of `k`-element subsets of an `n`-element set, or `None` if it
/// does not fit in a `usize`.
///
/// # Examples
/// ```
/// use pcset_core::binomial;
///
/// assert_eq!(binomial(12, 6), Some(924));
/// assert_eq!(binomial(3, 4), Some(0));
/// assert_eq!(binomial(200, 100), None);
/// ```
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);

    // every partial product is C(n, i + 1) <= C(n, k)
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * (n - i) as u128 / (i + 1) as u128;
        if acc > usize::MAX as u128 {
            return None;
        }
    }
    usize::try_from(acc).ok()
}

/// One subset's entry in a [`CombinationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationEntry {
    /// Note names of the subset joined with ", ".
    pub label: String,
    /// The subset's pitch classes, ascending.
    pub pitch_classes: Vec<PitchClass>,
    /// Prime form as concatenated digits, e.g. "037".
    pub prime: String,
}

/// Prime forms keyed by subset label, in first-insertion order.
///
/// Labels are expected to be unique per subset. If the note namer renders two
/// different subsets to the same label, the later subset's values replace the
/// earlier one's in place; [`CombinationResult::collisions`] reports how many
/// subsets were lost this way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCombinationResult")]
pub struct CombinationResult {
    entries: Vec<CombinationEntry>,
    analyzed: usize,
}

/// Unchecked wire form of a [`CombinationResult`].
#[derive(Deserialize)]
struct RawCombinationResult {
    entries: Vec<CombinationEntry>,
    analyzed: usize,
}

impl TryFrom<RawCombinationResult> for CombinationResult {
    type Error = String;

    fn try_from(raw: RawCombinationResult) -> Result<Self, Self::Error> {
        if raw.analyzed < raw.entries.len() {
            return Err(format!(
                "analyzed count {} is less than the {} stored entries",
                raw.analyzed,
                raw.entries.len()
            ));
        }
        for (i, entry) in raw.entries.iter().enumerate() {
            if raw.entries[..i].iter().any(|e| e.label == entry.label) {
                return Err(format!("duplicate label '{}'", entry.label));
            }
        }
        Ok(Self {
            entries: raw.entries,
            analyzed: raw.analyzed,
        })
    }
}

impl CombinationResult {
    /// Record one analyzed subset, returning the prime form it replaced if
    /// the label was already present.
    pub fn insert(
        &mut self,
        label: String,
        pitch_classes: Vec<PitchClass>,
        prime: String,
    ) -> Option<String> {
        self.analyzed += 1;
        match self.entries.iter_mut().find(|e| e.label == label) {
            Some(existing) => {
                existing.pitch_classes = pitch_classes;
                Some(std::mem::replace(&mut existing.prime, prime))
            }
            None => {
                self.entries.push(CombinationEntry {
                    label,
                    pitch_classes,
                    prime,
                });
                None
            }
        }
    }

    /// Prime form digits stored under `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.prime.as_str())
    }

    /// Entries in first-insertion order.
    pub fn entries(&self) -> &[CombinationEntry] {
        &self.entries
    }

    /// Iterate over `(label, prime)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.label.as_str(), e.prime.as_str()))
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no subsets were recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of subsets analyzed, including any whose label collided.
    pub fn analyzed(&self) -> usize {
        self.analyzed
    }

    /// Number of subsets whose entry was overwritten by a later subset.
    pub fn collisions(&self) -> usize {
        self.analyzed - self.entries.len()
    }
}

/// Analyze every `pick_size`-element subset of `set`.
///
/// Subsets are visited in lexicographic order over the ascending set. Each
/// one is analyzed independently and its prime form is stored under the
/// label `namer` renders for it.
///
/// # Errors
/// * [`SetError::EmptySet`] if `set` is empty
/// * [`SetError::InvalidPick`] if `pick_size` is 0 or larger than the set
///
/// # Examples
/// ```
/// use pcset_core::{scan, PitchClassSet, Spelling};
///
/// let result = scan(&PitchClassSet::new([0, 4, 7, 11]), 3, &Spelling::Sharps).unwrap();
/// assert_eq!(result.len(), 4);
/// assert_eq!(result.get("C, E, G"), Some("037"));
/// assert_eq!(result.get("C, E, B"), Some("015"));
/// ```
pub fn scan<N: NoteNamer + ?Sized>(
    set: &PitchClassSet,
    pick_size: usize,
    namer: &N,
) -> Result<CombinationResult, SetError> {
    if set.is_empty() {
        return Err(SetError::EmptySet);
    }
    if pick_size == 0 || pick_size > set.len() {
        return Err(SetError::InvalidPick {
            pick: pick_size,
            size: set.len(),
        });
    }

    let pcs = set.as_slice();
    if let Some(count) = binomial(pcs.len(), pick_size) {
        log::debug!(
            "scanning {} subset(s) of size {} from {}",
            count,
            pick_size,
            set
        );
    }

    let mut result = CombinationResult::default();
    for indices in combinations(pcs.len(), pick_size) {
        let subset: Vec<PitchClass> = indices.iter().map(|&i| pcs[i]).collect();
        let sequence: Vec<i32> = subset.iter().map(|&pc| i32::from(pc)).collect();
        let label = namer.name_all(&sequence).join(", ");

        let analysis = analyze(&PitchClassSet::new(sequence))?;
        let prime = prime_digits(&analysis.prime);
        log::debug!("{}: [{}]", label, prime);

        if let Some(previous) = result.insert(label.clone(), subset, prime) {
            log::warn!("label '{}' already held prime [{}], overwritten", label, previous);
        }
    }
    Ok(result)
}
