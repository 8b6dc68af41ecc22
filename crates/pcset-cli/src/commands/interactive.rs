//! Interactive command implementation
//!
//! Repeatedly prompts for notes and a pick size and prints the combination
//! report. Bad input prints an error line and starts the next round; end of
//! input ends the session.

use anyhow::Result;
use colored::Colorize;
use pcset_core::note::parse_notes;
use pcset_core::{scan, PitchClassSet, SetError};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use super::reporting::{write_combinations, write_subsets};
use crate::config::PcsetConfig;

const NOTES_PROMPT: &str = "Notes (leave empty to use previous): ";
const PICK_PROMPT: &str = "Pick: ";

/// Run the interactive session on stdin and stdout.
pub fn run(config: &PcsetConfig) -> Result<ExitCode> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), &mut stdout.lock(), config)?;
    Ok(ExitCode::SUCCESS)
}

/// Drive the prompt loop over any reader and writer until the reader is
/// exhausted.
///
/// Only I/O failures end the session early.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    config: &PcsetConfig,
) -> Result<()> {
    let mut previous: Option<String> = None;

    loop {
        let Some(line) = prompt(&mut input, out, NOTES_PROMPT)? else {
            break;
        };
        let notes = match (line.trim(), &previous) {
            ("", Some(prev)) => {
                writeln!(out, "Using previous: {}", prev)?;
                prev.clone()
            }
            ("", None) => {
                report(out, "no previous notes to reuse")?;
                continue;
            }
            (given, _) => given.to_string(),
        };

        let set = match read_set(&notes) {
            Ok(set) => set,
            Err(message) => {
                report(out, message)?;
                continue;
            }
        };
        previous = Some(notes.clone());

        let Some(line) = prompt(&mut input, out, PICK_PROMPT)? else {
            break;
        };
        let pick = match line.trim().parse::<usize>() {
            Ok(pick) if pick > 0 => pick,
            _ => {
                report(
                    out,
                    format!(
                        "invalid pick '{}': expected a positive whole number",
                        line.trim()
                    ),
                )?;
                continue;
            }
        };

        match scan(&set, pick, &config.spelling) {
            Ok(result) => {
                if config.show_subsets {
                    write_subsets(out, &set, pick)?;
                }
                write_combinations(out, &result, pick, &notes)?;
            }
            Err(err) => report(out, err)?,
        }
    }

    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Parse a non-empty set of note names.
fn read_set(notes: &str) -> Result<PitchClassSet, String> {
    let set = parse_notes(notes).map_err(|e| e.to_string())?;
    if set.is_empty() {
        return Err(SetError::EmptySet.to_string());
    }
    log::debug!("read {} from '{}'", set, notes);
    Ok(set)
}

/// Print `text` and read one line. Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn report<W: Write>(out: &mut W, message: impl Display) -> io::Result<()> {
    writeln!(out, "{}: {}", "error".red(), message)
}
