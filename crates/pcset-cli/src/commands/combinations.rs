//! Combinations command implementation
//!
//! Reports the prime form of every subset of a fixed size drawn from the
//! given notes.

use anyhow::Result;
use pcset_core::note::parse_notes;
use pcset_core::{scan, Spelling};
use std::io::{self, Write};
use std::process::ExitCode;

use super::json_output::{CombinationsResult, CommandOutput, JsonError};
use super::reporting::{write_combinations, write_subsets};

/// Run the combinations command
///
/// # Arguments
/// * `notes` - Space-separated note names
/// * `pick` - Number of notes in each subset
/// * `spelling` - How black keys are named in subset labels
/// * `show_subsets` - Whether to list every subset before the results
/// * `json` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 invalid input
pub fn run(
    notes: &str,
    pick: usize,
    spelling: Spelling,
    show_subsets: bool,
    json: bool,
) -> Result<ExitCode> {
    if json {
        return run_json(notes, pick, spelling);
    }

    let set = parse_notes(notes)?;
    let result = scan(&set, pick, &spelling)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if show_subsets {
        write_subsets(&mut out, &set, pick)?;
    }
    write_combinations(&mut out, &result, pick, notes)?;
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn run_json(notes: &str, pick: usize, spelling: Spelling) -> Result<ExitCode> {
    let (output, code) = match build_result(notes, pick, spelling) {
        Ok(result) => (CommandOutput::success(result), ExitCode::SUCCESS),
        Err(err) => (CommandOutput::failure(vec![err]), ExitCode::from(1)),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

/// Build the JSON result for the scan, or the error to report.
pub(crate) fn build_result(
    notes: &str,
    pick: usize,
    spelling: Spelling,
) -> Result<CombinationsResult, JsonError> {
    let set = parse_notes(notes).map_err(|e| JsonError::from_error(&e))?;
    let result = scan(&set, pick, &spelling).map_err(|e| JsonError::from_error(&e))?;

    Ok(CombinationsResult {
        input: notes.to_string(),
        pick,
        analyzed: result.analyzed(),
        collisions: result.collisions(),
        entries: result.entries().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_result_triads_of_four() {
        let result = build_result("C C# D F#", 3, Spelling::Sharps).unwrap();
        assert_eq!(result.analyzed, 4);
        assert_eq!(result.collisions, 0);

        let pairs: Vec<(&str, &str)> = result
            .entries
            .iter()
            .map(|e| (e.label.as_str(), e.prime.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("C, C#, D", "012"),
                ("C, C#, F#", "016"),
                ("C, D, F#", "026"),
                ("C#, D, F#", "015"),
            ]
        );
    }

    #[test]
    fn test_build_result_pick_too_large() {
        let err = build_result("C E G", 4, Spelling::Sharps).unwrap_err();
        assert_eq!(err.code, "SET_002");
    }

    #[test]
    fn test_build_result_pick_zero() {
        let err = build_result("C E G", 0, Spelling::Sharps).unwrap_err();
        assert_eq!(err.code, "SET_002");
    }

    #[test]
    fn test_build_result_invalid_note() {
        let err = build_result("C E X", 2, Spelling::Sharps).unwrap_err();
        assert_eq!(err.code, "NOTE_001");
    }
}
