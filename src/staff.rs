//! Staff position resolver — maps a pitch to a clef, a vertical staff
//! coordinate, and an octave-transposition decision (8va/8vb).
//!
//! Coordinates are relative to the staff's **top line**: the five lines
//! sit at 0, 10, 20, 30, 40 ([`STAFF_LINE_SPACING`] apart) and one
//! diatonic step moves the note half a spacing. An accidental never moves
//! the note — a sharp or flat sits at the height of its natural neighbor,
//! which is standard notation behavior.
//!
//! Clef boundary: octave 4 and up is treble, octave 3 and down is bass.
//! There is deliberately no shared zone around middle C; the boundary is
//! pinned by tests rather than silently "fixed".

use serde::{Deserialize, Serialize};

use crate::note::Pitch;

/// Distance between adjacent staff lines, in SVG user units.
pub const STAFF_LINE_SPACING: f64 = 10.0;
/// Height of the five-line staff band (top line to bottom line).
pub const STAFF_HEIGHT: f64 = 4.0 * STAFF_LINE_SPACING;
/// Half a line spacing: one diatonic step.
pub const HALF_SPACE: f64 = STAFF_LINE_SPACING / 2.0;
/// Ledger lines are capped at this many per side; the resolver's octave
/// shift keeps in-range pitches within the cap and the renderer clamps
/// the rest.
pub const MAX_LEDGER_LINES: usize = 2;

/// The two clefs the widget renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Clef {
    Treble,
    Bass,
}

/// Resolved vertical placement of one note.
///
/// Derived deterministically from (pitch, prefer_flats); never mutated,
/// recomputed on every render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffPosition {
    pub clef: Clef,
    /// Vertical coordinate relative to the staff top line (larger = lower).
    pub y: f64,
    /// Octave transposition applied for display: -1 = written an octave
    /// lower than sounding ("8va"), +1 = written an octave higher ("8vb").
    pub octave_shift: i8,
}

impl StaffPosition {
    /// The octave-transposition annotation, if any.
    pub fn annotation(&self) -> Option<&'static str> {
        match self.octave_shift {
            -1 => Some("8va"),
            1 => Some("8vb"),
            _ => None,
        }
    }

    /// Ledger lines required above and below the staff band for this
    /// position, before the renderer's clamp.
    pub fn ledger_lines(&self) -> (usize, usize) {
        let above = if self.y < 0.0 {
            (-self.y / STAFF_LINE_SPACING).floor() as usize
        } else {
            0
        };
        let below = if self.y > STAFF_HEIGHT {
            ((self.y - STAFF_HEIGHT) / STAFF_LINE_SPACING).floor() as usize
        } else {
            0
        };
        (above, below)
    }
}

/// Diatonic position of a letter+octave on the continuous note ladder
/// (C0 = 0, one unit per natural letter).
fn diatonic_position(pitch: Pitch, octave: i32) -> i32 {
    octave * 7 + pitch.letter.diatonic_index()
}

/// Resolve a pitch to its staff position.
///
/// Pure function of (pitch, prefer_flats):
/// 1. normalize spelling,
/// 2. base clef from the octave (≥4 treble, ≤3 bass),
/// 3. overflow-to-transposition to avoid deep ledger-line stacks,
/// 4. vertical coordinate from the clef's diatonic reference line.
pub fn resolve(pitch: Pitch, prefer_flats: bool) -> StaffPosition {
    let spelled = pitch.preferred_spelling(prefer_flats);
    let octave = spelled.octave as i32;

    let mut clef = if octave >= 4 { Clef::Treble } else { Clef::Bass };
    let mut octave_shift: i8 = 0;

    match clef {
        Clef::Treble => {
            if octave >= 6 {
                // Too high for two ledger lines: write an octave lower, mark 8va.
                octave_shift = -1;
            } else if octave <= 3 {
                // Reached only when a caller forced treble context.
                clef = Clef::Bass;
            }
        }
        Clef::Bass => {
            if octave <= 1 {
                octave_shift = 1;
            } else if octave >= 4 {
                clef = Clef::Treble;
            }
        }
    }

    let display_octave = octave + octave_shift as i32;
    let position = diatonic_position(spelled, display_octave);

    // Reference: the clef's bottom staff line (y = STAFF_HEIGHT).
    // Treble bottom line is E4, bass bottom line is G2.
    let ref_position = match clef {
        Clef::Treble => 4 * 7 + 2, // E4
        Clef::Bass => 2 * 7 + 4,   // G2
    };

    let y = STAFF_HEIGHT - (position - ref_position) as f64 * HALF_SPACE;

    StaffPosition {
        clef,
        y,
        octave_shift,
    }
}
