//! Human-readable report formatting shared by the commands.

use std::io::{self, Write};

use colored::Colorize;
use pcset_core::note::format_pcs;
use pcset_core::{combinations, CombinationResult, NoteNamer, PitchClassSet, SetAnalysis};

use super::json_output::NamedOrdering;

/// Pair an ordering with its note names.
pub(crate) fn named<N: NoteNamer + ?Sized>(namer: &N, pitches: &[i32]) -> NamedOrdering {
    NamedOrdering {
        pitches: pitches.to_vec(),
        names: namer.name_all(pitches),
    }
}

/// Write the single-set analysis report.
pub(crate) fn write_analysis<W: Write, N: NoteNamer + ?Sized>(
    out: &mut W,
    analysis: &SetAnalysis,
    namer: &N,
) -> io::Result<()> {
    writeln!(out, "\n{}", "========= RESULTS =========".green().bold())?;
    writeln!(
        out,
        "{} {:?}",
        "Pitch class (PC) list:".dimmed(),
        analysis.pitch_classes
    )?;
    writeln!(out, "Normal: {}", format_pcs(namer, &analysis.normal))?;
    writeln!(out, "Inversion: {}", format_pcs(namer, &analysis.inversion))?;
    writeln!(
        out,
        "Inversion normal: {}",
        format_pcs(namer, &analysis.inversion_normal)
    )?;
    writeln!(out, "Best normal order: {}", format_pcs(namer, &analysis.best))?;
    writeln!(out, "{} {:?}", "Prime:".cyan().bold(), analysis.prime)?;
    writeln!(
        out,
        "{} {}",
        "Interval class vector:".cyan().bold(),
        analysis.icv
    )
}

/// Write every `pick`-element subset of `set`, one per line.
pub(crate) fn write_subsets<W: Write>(
    out: &mut W,
    set: &PitchClassSet,
    pick: usize,
) -> io::Result<()> {
    let pcs = set.as_slice();
    writeln!(out, "{}", "Subsets:".dimmed())?;
    for indices in combinations(pcs.len(), pick) {
        let subset: Vec<_> = indices.iter().map(|&i| pcs[i]).collect();
        writeln!(out, "  {:?}", subset)?;
    }
    Ok(())
}

/// Write the combination report: one `label: [prime]` line per entry.
pub(crate) fn write_combinations<W: Write>(
    out: &mut W,
    result: &CombinationResult,
    pick: usize,
    input: &str,
) -> io::Result<()> {
    writeln!(out, "\n{}", "======================".green())?;
    writeln!(out, "{}", "RESULTS".green().bold())?;
    writeln!(out, "{}", "======================".green())?;
    writeln!(out, "Pick {} from {}:", pick, input)?;
    for (label, prime) in result.iter() {
        writeln!(out, "{}: [{}]", label, prime)?;
    }
    writeln!(
        out,
        "{}",
        format!("{} subset(s) analyzed", result.analyzed()).dimmed()
    )?;
    if result.collisions() > 0 {
        writeln!(
            out,
            "{} {} subset(s) shared a label with a later subset and were overwritten",
            "!".yellow(),
            result.collisions()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcset_core::{analyze, scan, Spelling};

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        write(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_analysis() {
        let analysis = analyze(&PitchClassSet::new([0, 4, 7])).unwrap();
        let text = render(|out| write_analysis(out, &analysis, &Spelling::Sharps));
        assert!(text.contains("Pitch class (PC) list: [0, 4, 7]"));
        assert!(text.contains("Normal: C, E, G ([0, 4, 7])"));
        assert!(text.contains("Inversion: C, D#, G ([0, 3, 7])"));
        assert!(text.contains("Best normal order: C, D#, G ([0, 3, 7])"));
        assert!(text.contains("Prime: [0, 3, 7]"));
        assert!(text.contains("Interval class vector: <001110>"));
    }

    #[test]
    fn test_write_subsets() {
        let set = PitchClassSet::new([0, 1, 2, 6]);
        let text = render(|out| write_subsets(out, &set, 3));
        let lines: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(
            lines,
            vec!["  [0, 1, 2]", "  [0, 1, 6]", "  [0, 2, 6]", "  [1, 2, 6]"]
        );
    }

    #[test]
    fn test_write_combinations() {
        let set = PitchClassSet::new([0, 4, 7]);
        let result = scan(&set, 2, &Spelling::Sharps).unwrap();
        let text = render(|out| write_combinations(out, &result, 2, "C E G"));
        assert!(text.contains("Pick 2 from C E G:"));
        assert!(text.contains("C, E: [04]"));
        assert!(text.contains("C, G: [05]"));
        assert!(text.contains("E, G: [03]"));
        assert!(text.contains("3 subset(s) analyzed"));
        assert!(!text.contains("overwritten"));
    }

    #[test]
    fn test_write_combinations_reports_collisions() {
        let set = PitchClassSet::new([0, 1, 4, 7]);
        let collapse = |_: pcset_core::PitchClass| "N".to_string();
        let result = scan(&set, 2, &collapse).unwrap();
        let text = render(|out| write_combinations(out, &result, 2, "C C# E G"));
        assert!(text.contains("N, N: [03]"));
        assert!(text.contains("6 subset(s) analyzed"));
        assert!(text.contains(
            "! 5 subset(s) shared a label with a later subset and were overwritten"
        ));
    }
}
