//! Tests for note name parsing and spelling.

use super::*;
use crate::error::ErrorCode;

#[test]
fn test_note_to_pitch_class_naturals() {
    assert_eq!(note_to_pitch_class("C").unwrap(), 0);
    assert_eq!(note_to_pitch_class("D").unwrap(), 2);
    assert_eq!(note_to_pitch_class("E").unwrap(), 4);
    assert_eq!(note_to_pitch_class("F").unwrap(), 5);
    assert_eq!(note_to_pitch_class("G").unwrap(), 7);
    assert_eq!(note_to_pitch_class("A").unwrap(), 9);
    assert_eq!(note_to_pitch_class("B").unwrap(), 11);
}

#[test]
fn test_note_to_pitch_class_accidentals() {
    assert_eq!(note_to_pitch_class("C#").unwrap(), 1);
    assert_eq!(note_to_pitch_class("Db").unwrap(), 1);
    assert_eq!(note_to_pitch_class("Bb").unwrap(), 10);
    assert_eq!(note_to_pitch_class("F♯").unwrap(), 6);
    assert_eq!(note_to_pitch_class("A♭").unwrap(), 8);
    assert_eq!(note_to_pitch_class("E##").unwrap(), 6);
    assert_eq!(note_to_pitch_class("Dbb").unwrap(), 0);
    assert_eq!(note_to_pitch_class("Cb").unwrap(), 11);
    assert_eq!(note_to_pitch_class("B#").unwrap(), 0);
    assert_eq!(note_to_pitch_class("C#b").unwrap(), 0);
}

#[test]
fn test_note_to_pitch_class_lowercase_letter() {
    assert_eq!(note_to_pitch_class("g").unwrap(), 7);
    assert_eq!(note_to_pitch_class("eb").unwrap(), 3);
    // a second letter is not an accidental
    assert!(note_to_pitch_class("bB").is_err());
}

#[test]
fn test_note_to_pitch_class_rejects_garbage() {
    for token in ["", "H", "C4", "X#", "#C", "Cx", "C-"] {
        let err = note_to_pitch_class(token).unwrap_err();
        assert_eq!(
            err,
            NoteFormatError::Unrecognized {
                token: token.to_string()
            }
        );
        assert_eq!(err.code(), "NOTE_001");
    }
}

#[test]
fn test_parse_notes_sorts_and_dedups() {
    let set = parse_notes("G E C E Db C#").unwrap();
    assert_eq!(set.as_slice(), &[0, 1, 4, 7]);
}

#[test]
fn test_parse_notes_ignores_extra_whitespace() {
    let set = parse_notes("  F   A\tC \n").unwrap();
    assert_eq!(set.as_slice(), &[0, 5, 9]);
}

#[test]
fn test_parse_notes_empty_input() {
    assert!(parse_notes("").unwrap().is_empty());
    assert!(parse_notes("   ").unwrap().is_empty());
}

#[test]
fn test_parse_notes_reports_first_bad_token() {
    let err = parse_notes("C E Q G Z").unwrap_err();
    assert_eq!(err.to_string(), "unrecognized note name 'Q'");
}

#[test]
fn test_spelling_names() {
    assert_eq!(Spelling::Sharps.name(1), "C#");
    assert_eq!(Spelling::Flats.name(1), "Db");
    assert_eq!(Spelling::Sharps.name(11), "B");
    assert_eq!(Spelling::default(), Spelling::Sharps);
}

#[test]
fn test_name_all_reduces_raised_pitches() {
    assert_eq!(
        Spelling::Sharps.name_all(&[7, 11, 14]),
        vec!["G", "B", "D"]
    );
}

#[test]
fn test_parse_then_name_roundtrip() {
    for spelling in [Spelling::Sharps, Spelling::Flats] {
        for pc in 0..12u8 {
            let name = spelling.name(pc);
            assert_eq!(
                note_to_pitch_class(&name).unwrap(),
                pc,
                "Roundtrip failed for {} ({:?})",
                name,
                spelling
            );
        }
    }
}

#[test]
fn test_closure_namer() {
    let numbers = |pc: u8| format!("pc{}", pc);
    assert_eq!(numbers.name_all(&[0, 13]), vec!["pc0", "pc1"]);
}

#[test]
fn test_format_pcs() {
    assert_eq!(
        format_pcs(&Spelling::Sharps, &[0, 4, 7]),
        "C, E, G ([0, 4, 7])"
    );
    assert_eq!(
        format_pcs(&Spelling::Flats, &[10, 13, 17]),
        "Bb, Db, F ([10, 13, 17])"
    );
}

#[test]
fn test_spelling_serde() {
    assert_eq!(serde_json::to_string(&Spelling::Flats).unwrap(), "\"flats\"");
    let parsed: Spelling = serde_json::from_str("\"sharps\"").unwrap();
    assert_eq!(parsed, Spelling::Sharps);
}
