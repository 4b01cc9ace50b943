//! Single-note "flash" staff: clears and redraws on every new note.
//!
//! Used for call-and-response exercises and for echoing whatever key the
//! user presses. The view keeps only the last note shown; `to_svg()`
//! regenerates the whole surface from that state.

use crate::note::Pitch;
use crate::staff::{self, Clef, StaffPosition};

use super::constants::*;
use super::notes::{render_note, render_staff_lines};
use super::svg_builder::SvgBuilder;

#[derive(Debug, Clone)]
struct FlashNote {
    pitch: Pitch,
    position: StaffPosition,
    color: String,
}

/// Compact one-note staff view.
#[derive(Debug, Clone, Default)]
pub struct FlashStaff {
    note: Option<FlashNote>,
}

impl FlashStaff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed note. The clef follows the note; spelling
    /// follows the display preference.
    pub fn show(&mut self, pitch: Pitch, prefer_flats: bool, color: &str) {
        let spelled = pitch.preferred_spelling(prefer_flats);
        let position = staff::resolve(spelled, prefer_flats);
        if !pitch.in_piano_range() {
            // Best-effort: the ledger clamp in the note renderer keeps
            // the drawing inside the view.
            log::debug!("flash note {} outside piano range", pitch.token());
        }
        self.note = Some(FlashNote {
            pitch: spelled,
            position,
            color: color.to_string(),
        });
    }

    /// Recolor the currently displayed note without re-resolving it.
    pub fn recolor(&mut self, color: &str) {
        if let Some(note) = &mut self.note {
            note.color = color.to_string();
        }
    }

    pub fn clear(&mut self) {
        self.note = None;
    }

    /// Clef currently shown (treble when empty, matching the default
    /// C4–C6 keyboard range).
    pub fn clef(&self) -> Clef {
        self.note
            .as_ref()
            .map_or(Clef::Treble, |n| n.position.clef)
    }

    /// The displayed note's resolved position, if any.
    pub fn position(&self) -> Option<StaffPosition> {
        self.note.as_ref().map(|n| n.position)
    }

    /// Render the view as a self-contained SVG string.
    pub fn to_svg(&self) -> String {
        let mut svg = SvgBuilder::new(FLASH_WIDTH, FLASH_HEIGHT);

        render_staff_lines(&mut svg, CLEF_X - 6.0, FLASH_WIDTH - 10.0, STAFF_TOP);
        svg.clef_glyph(CLEF_X, STAFF_TOP, self.clef() == Clef::Treble);

        if let Some(note) = &self.note {
            render_note(
                &mut svg,
                FLASH_NOTE_X,
                STAFF_TOP,
                note.pitch,
                &note.position,
                &note.color,
            );
        }

        svg.build()
    }
}
