//! Note model tests — parsing, enharmonic spelling, MIDI, frequencies.

use lessonlib::note::{black_key_label, Accidental, Letter, Pitch};
use pretty_assertions::assert_eq;

const SHARP_TOKENS: [&str; 5] = ["C#4", "D#4", "F#4", "G#4", "A#4"];
const FLAT_TOKENS: [&str; 5] = ["Db4", "Eb4", "Gb4", "Ab4", "Bb4"];

#[test]
fn parse_accepts_the_full_grammar() {
    let p = Pitch::parse("C#4").unwrap();
    assert_eq!(p.letter, Letter::C);
    assert_eq!(p.accidental, Accidental::Sharp);
    assert_eq!(p.octave, 4);

    let p = Pitch::parse("Bb3").unwrap();
    assert_eq!(p.letter, Letter::B);
    assert_eq!(p.accidental, Accidental::Flat);
    assert_eq!(p.octave, 3);

    let p = Pitch::parse("A0").unwrap();
    assert_eq!(p.accidental, Accidental::Natural);
    assert_eq!(p.octave, 0);
}

#[test]
fn parse_rejects_malformed_tokens() {
    for bad in ["", "C", "C#", "H4", "c4", "C44", "C#b4", "4C", "C-1"] {
        assert!(Pitch::parse(bad).is_err(), "'{bad}' should not parse");
    }
}

#[test]
fn enharmonic_conversion_is_exactly_invertible() {
    for (sharp_tok, flat_tok) in SHARP_TOKENS.iter().zip(FLAT_TOKENS.iter()) {
        let sharp = Pitch::parse(sharp_tok).unwrap();
        let flat = Pitch::parse(flat_tok).unwrap();

        assert_eq!(sharp.preferred_spelling(true), flat, "{sharp_tok} as flat");
        assert_eq!(flat.preferred_spelling(false), sharp, "{flat_tok} as sharp");

        // Round trip: sharp -> flat -> sharp is the identity.
        assert_eq!(
            sharp.preferred_spelling(true).preferred_spelling(false),
            sharp
        );
        // Same semitone on both sides of the table.
        assert_eq!(sharp.to_midi(), flat.to_midi(), "{sharp_tok}/{flat_tok}");
    }
}

#[test]
fn enharmonic_conversion_is_idempotent() {
    for tok in SHARP_TOKENS.iter().chain(FLAT_TOKENS.iter()) {
        let p = Pitch::parse(tok).unwrap();
        for prefer_flats in [false, true] {
            let once = p.preferred_spelling(prefer_flats);
            assert_eq!(once.preferred_spelling(prefer_flats), once, "{tok}");
        }
    }
}

#[test]
fn naturals_pass_through_spelling_conversion() {
    for tok in ["C4", "D4", "E4", "F4", "G4", "A4", "B4"] {
        let p = Pitch::parse(tok).unwrap();
        assert_eq!(p.preferred_spelling(true), p);
        assert_eq!(p.preferred_spelling(false), p);
    }
}

#[test]
fn midi_numbers_follow_scientific_pitch_notation() {
    assert_eq!(Pitch::parse("C4").unwrap().to_midi(), 60); // middle C
    assert_eq!(Pitch::parse("A4").unwrap().to_midi(), 69);
    assert_eq!(Pitch::parse("A0").unwrap().to_midi(), 21); // lowest piano key
    assert_eq!(Pitch::parse("C8").unwrap().to_midi(), 108); // highest
    assert_eq!(Pitch::parse("C#4").unwrap().to_midi(), 61);
    assert_eq!(Pitch::parse("Db4").unwrap().to_midi(), 61);
}

#[test]
fn frequencies_match_equal_temperament() {
    let close = |tok: &str, hz: f64| {
        let f = Pitch::parse(tok).unwrap().frequency();
        assert!((f - hz).abs() < 0.01, "{tok}: {f} != {hz}");
    };
    close("A4", 440.0);
    close("C4", 261.63);
    close("C#4", 277.18);
    close("A2", 110.0);
    close("C2", 65.41);
    close("C7", 2093.00);
}

#[test]
fn piano_range_check() {
    assert!(Pitch::parse("A0").unwrap().in_piano_range());
    assert!(Pitch::parse("C8").unwrap().in_piano_range());
    assert!(Pitch::parse("C4").unwrap().in_piano_range());
    assert!(!Pitch::parse("G0").unwrap().in_piano_range()); // below A0
    assert!(!Pitch::parse("D8").unwrap().in_piano_range()); // above C8
}

#[test]
fn labels_for_display() {
    assert_eq!(Pitch::parse("C#4").unwrap().display_label(), "C\u{266f}4");
    assert_eq!(Pitch::parse("Bb3").unwrap().display_label(), "B\u{266d}3");
    assert_eq!(Pitch::parse("G4").unwrap().display_label(), "G4");
    assert_eq!(Pitch::parse("C#4").unwrap().token(), "C#4");

    assert_eq!(black_key_label(Pitch::parse("C#4").unwrap()), "C#/Db");
    assert_eq!(black_key_label(Pitch::parse("Eb5").unwrap()), "D#/Eb");
    assert_eq!(black_key_label(Pitch::parse("G4").unwrap()), "G");
}
