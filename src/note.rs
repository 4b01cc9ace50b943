//! Pitch model: note-token parsing, enharmonic spelling, MIDI numbers,
//! and equal-tempered frequencies.
//!
//! A pitch is parsed fresh from each input token (e.g. `"C#4"`), is
//! immutable, and is never persisted. Spelling preference (sharps vs.
//! flats) is applied on demand via [`Pitch::preferred_spelling`].

use serde::{Deserialize, Serialize};

use crate::error::LessonError;

/// The seven natural note letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Diatonic index within an octave (C = 0 .. B = 6).
    pub fn diatonic_index(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Semitone offset from C within an octave.
    pub fn semitone(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    fn from_char(c: char) -> Option<Letter> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

/// Per-note accidental. Key signatures are out of scope; every altered
/// note carries its own accidental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// Chromatic alteration in semitones.
    pub fn alter(self) -> i32 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }
}

/// One note in scientific pitch notation (middle C = C4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pitch {
    pub letter: Letter,
    pub accidental: Accidental,
    /// Octave register; 0–8 covers the 88-key piano (A0–C8).
    pub octave: i8,
}

/// The five enharmonic pairs, sharp spelling first.
/// Natural notes have no alternate spelling.
const ENHARMONIC_PAIRS: [((Letter, Accidental), (Letter, Accidental)); 5] = [
    ((Letter::C, Accidental::Sharp), (Letter::D, Accidental::Flat)),
    ((Letter::D, Accidental::Sharp), (Letter::E, Accidental::Flat)),
    ((Letter::F, Accidental::Sharp), (Letter::G, Accidental::Flat)),
    ((Letter::G, Accidental::Sharp), (Letter::A, Accidental::Flat)),
    ((Letter::A, Accidental::Sharp), (Letter::B, Accidental::Flat)),
];

impl Pitch {
    /// Parse a note token like `"C4"`, `"C#4"`, or `"Db5"`.
    ///
    /// The grammar is `<A-G>[#|b]<digit>`; anything else is an
    /// [`LessonError::InvalidNoteToken`]. Callers recover by skipping the
    /// operation — a malformed token must never crash the widget.
    pub fn parse(token: &str) -> Result<Pitch, LessonError> {
        let invalid = || LessonError::InvalidNoteToken {
            token: token.to_string(),
        };

        let mut chars = token.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(invalid)?;

        let rest: Vec<char> = chars.collect();
        let (accidental, digits) = match rest.split_first() {
            Some(('#', tail)) => (Accidental::Sharp, tail),
            Some(('b', tail)) => (Accidental::Flat, tail),
            _ => (Accidental::Natural, &rest[..]),
        };

        // Exactly one octave digit; "C44" or "C" are rejected.
        match digits {
            [d] if d.is_ascii_digit() => {
                let octave = d.to_digit(10).unwrap() as i8;
                Ok(Pitch {
                    letter,
                    accidental,
                    octave,
                })
            }
            _ => Err(invalid()),
        }
    }

    /// Respell this pitch according to the display preference.
    ///
    /// With `prefer_flats` a sharp becomes its flat equivalent and vice
    /// versa; natural notes pass through. Idempotent: applying twice with
    /// the same preference equals applying once.
    pub fn preferred_spelling(self, prefer_flats: bool) -> Pitch {
        for (sharp, flat) in ENHARMONIC_PAIRS {
            if prefer_flats && (self.letter, self.accidental) == sharp {
                // B#-style octave wrap cannot occur: all five pairs stay
                // within one octave (C#→Db .. A#→Bb).
                return Pitch {
                    letter: flat.0,
                    accidental: flat.1,
                    octave: self.octave,
                };
            }
            if !prefer_flats && (self.letter, self.accidental) == flat {
                return Pitch {
                    letter: sharp.0,
                    accidental: sharp.1,
                    octave: self.octave,
                };
            }
        }
        self
    }

    /// MIDI note number, middle C (C4) = 60.
    pub fn to_midi(self) -> i32 {
        (self.octave as i32 + 1) * 12 + self.letter.semitone() + self.accidental.alter()
    }

    /// Equal-tempered frequency in Hz, A4 = 440.
    pub fn frequency(self) -> f64 {
        440.0 * 2f64.powf((self.to_midi() - 69) as f64 / 12.0)
    }

    /// Enharmonic equality: C#4 sounds like Db4. This is the comparison
    /// the exercise machine uses, never string equality.
    pub fn sounds_like(self, other: Pitch) -> bool {
        self.to_midi() == other.to_midi()
    }

    /// Whether the pitch lies on an 88-key piano (A0..=C8). Positions
    /// outside this range are a caller precondition for clean rendering.
    pub fn in_piano_range(self) -> bool {
        (21..=108).contains(&self.to_midi())
    }

    /// Plain ASCII token form, e.g. `"C#4"`.
    pub fn token(self) -> String {
        let acc = match self.accidental {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        };
        format!("{}{}{}", self.letter.as_char(), acc, self.octave)
    }

    /// User-facing label with music glyphs, e.g. `"C♯4"`.
    pub fn display_label(self) -> String {
        let acc = match self.accidental {
            Accidental::Natural => "",
            Accidental::Sharp => "\u{266f}",
            Accidental::Flat => "\u{266d}",
        };
        format!("{}{}{}", self.letter.as_char(), acc, self.octave)
    }
}

/// Dual sharp/flat label for a black key, e.g. `"C#/Db"`.
/// Natural notes return their plain letter name.
pub fn black_key_label(pitch: Pitch) -> String {
    match pitch.accidental {
        Accidental::Natural => pitch.letter.as_char().to_string(),
        _ => {
            let sharp = pitch.preferred_spelling(false);
            let flat = pitch.preferred_spelling(true);
            format!(
                "{}#/{}b",
                sharp.letter.as_char(),
                flat.letter.as_char()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_garbage() {
        assert!(Pitch::parse("H4").is_err());
        assert!(Pitch::parse("C").is_err());
        assert!(Pitch::parse("C#").is_err());
        assert!(Pitch::parse("C44").is_err());
        assert!(Pitch::parse("").is_err());
        assert!(Pitch::parse("c4").is_err());
    }

    #[test]
    fn midi_of_middle_c() {
        assert_eq!(Pitch::parse("C4").unwrap().to_midi(), 60);
        assert_eq!(Pitch::parse("A4").unwrap().to_midi(), 69);
        assert_eq!(Pitch::parse("Bb3").unwrap().to_midi(), 58);
    }
}
