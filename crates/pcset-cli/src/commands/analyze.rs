//! Analyze command implementation
//!
//! Parses note names and prints the normal form, inversion, prime form and
//! interval-class vector of the resulting set.

use anyhow::Result;
use pcset_core::note::parse_notes;
use pcset_core::{analyze, Spelling};
use std::io::{self, Write};
use std::process::ExitCode;

use super::json_output::{AnalyzeResult, CommandOutput, JsonError};
use super::reporting::{named, write_analysis};

/// Run the analyze command
///
/// # Arguments
/// * `notes` - Note names; each argument may hold several space-separated names
/// * `spelling` - How black keys are named in the output
/// * `json` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 invalid input
pub fn run(notes: &[String], spelling: Spelling, json: bool) -> Result<ExitCode> {
    let input = notes.join(" ");
    if json {
        return run_json(&input, spelling);
    }

    let set = parse_notes(&input)?;
    let analysis = analyze(&set)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_analysis(&mut out, &analysis, &spelling)?;
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn run_json(input: &str, spelling: Spelling) -> Result<ExitCode> {
    let (output, code) = match build_result(input, spelling) {
        Ok(result) => (CommandOutput::success(result), ExitCode::SUCCESS),
        Err(err) => (CommandOutput::failure(vec![err]), ExitCode::from(1)),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

/// Build the JSON result for `input`, or the error to report.
pub(crate) fn build_result(input: &str, spelling: Spelling) -> Result<AnalyzeResult, JsonError> {
    let set = parse_notes(input).map_err(|e| JsonError::from_error(&e))?;
    let analysis = analyze(&set).map_err(|e| JsonError::from_error(&e))?;

    Ok(AnalyzeResult {
        input: input.to_string(),
        normal: named(&spelling, &analysis.normal),
        inversion: named(&spelling, &analysis.inversion),
        inversion_normal: named(&spelling, &analysis.inversion_normal),
        best: named(&spelling, &analysis.best),
        icv: analysis.icv.to_string(),
        analysis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_result_major_triad() {
        let result = build_result("C E G", Spelling::Sharps).unwrap();
        assert_eq!(result.input, "C E G");
        assert_eq!(result.normal.names, vec!["C", "E", "G"]);
        assert_eq!(result.inversion.pitches, vec![0, 3, 7]);
        assert_eq!(result.best.names, vec!["C", "D#", "G"]);
        assert_eq!(result.analysis.prime, vec![0, 3, 7]);
        assert_eq!(result.icv, "<001110>");
    }

    #[test]
    fn test_build_result_flats() {
        let result = build_result("C E G", Spelling::Flats).unwrap();
        assert_eq!(result.best.names, vec!["C", "Eb", "G"]);
    }

    #[test]
    fn test_build_result_invalid_note() {
        let err = build_result("C H G", Spelling::Sharps).unwrap_err();
        assert_eq!(err.code, "NOTE_001");
        assert!(err.message.contains("H"));
    }

    #[test]
    fn test_build_result_empty_input() {
        let err = build_result("   ", Spelling::Sharps).unwrap_err();
        assert_eq!(err.code, "SET_001");
    }
}
