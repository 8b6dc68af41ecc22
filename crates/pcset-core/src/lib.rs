//! pcset core - Pitch-Class Set Analysis
//!
//! This crate computes the standard set-theory descriptors of a pitch-class
//! set: its normal form, inversion, prime form and interval-class vector. It
//! also scans every fixed-size subset of a larger collection and reports the
//! prime form of each.
//!
//! All operations are pure functions over small integer sequences. Nothing is
//! cached or shared between calls, so analyses of different sets can run on
//! different threads without coordination.
//!
//! # Example
//!
//! ```
//! use pcset_core::{analyze, note::parse_notes, scan, Spelling};
//!
//! let set = parse_notes("C E G").unwrap();
//! let analysis = analyze(&set).unwrap();
//! assert_eq!(analysis.normal, vec![0, 4, 7]);
//! assert_eq!(analysis.prime, vec![0, 3, 7]);
//! assert_eq!(analysis.icv.to_string(), "<001110>");
//!
//! let pairs = scan(&set, 2, &Spelling::Sharps).unwrap();
//! assert_eq!(pairs.get("E, G"), Some("03"));
//! ```
//!
//! # Module Structure
//!
//! - [`interval`]: cyclic intervals of an ordering
//! - [`normal`]: normal form and the compactness comparator
//! - [`inversion`]: inversion of a normal form
//! - [`prime`]: prime form reduction
//! - [`icv`]: interval-class vectors
//! - [`analyze`]: the full single-set pipeline
//! - [`scan`]: prime forms of every subset of a given size
//! - [`note`]: note name parsing and spelling

pub mod analyze;
pub mod error;
pub mod icv;
pub mod interval;
pub mod inversion;
pub mod normal;
pub mod note;
pub mod pitch_class;
pub mod prime;
pub mod scan;

// Re-export main types
pub use analyze::{analyze, SetAnalysis};
pub use error::{ErrorCode, SetError};
pub use icv::{build_icv, IntervalClassVector};
pub use interval::compute_intervals;
pub use inversion::invert;
pub use normal::{most_compact, resolve_normal};
pub use note::{NoteFormatError, NoteNamer, Spelling};
pub use pitch_class::{PitchClass, PitchClassSet};
pub use prime::{prime_digits, reduce_to_prime};
pub use scan::{binomial, combinations, scan, CombinationEntry, CombinationResult};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
