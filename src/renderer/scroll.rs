//! Scrolling multi-note staff: appends notes left-to-right at fixed
//! spacing and supports recoloring any previously drawn note without
//! touching its neighbors.
//!
//! Used for melody sight-reading: the whole melody is loaded up front in
//! neutral ink, then notes are marked green/red as the user plays. The
//! view retains per-note state and regenerates its SVG on demand, so a
//! recolor rewrites exactly one note group.

use crate::note::Pitch;
use crate::staff::{self, Clef, StaffPosition};

use super::constants::*;
use super::notes::{render_note, render_staff_lines};
use super::svg_builder::SvgBuilder;

#[derive(Debug, Clone)]
struct ScrollNote {
    pitch: Pitch,
    position: StaffPosition,
    color: String,
}

/// Growing left-to-right staff view.
#[derive(Debug, Clone, Default)]
pub struct ScrollingStaff {
    notes: Vec<ScrollNote>,
}

impl ScrollingStaff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one note in neutral ink.
    pub fn push(&mut self, pitch: Pitch, prefer_flats: bool) {
        let spelled = pitch.preferred_spelling(prefer_flats);
        let position = staff::resolve(spelled, prefer_flats);
        self.notes.push(ScrollNote {
            pitch: spelled,
            position,
            color: NOTE_COLOR.to_string(),
        });
    }

    /// Clear and load a whole melody for sight-reading.
    pub fn load_melody(&mut self, melody: &[Pitch], prefer_flats: bool) {
        self.clear();
        for &pitch in melody {
            self.push(pitch, prefer_flats);
        }
    }

    /// Recolor every visual part of the note at `index`. Out-of-bounds
    /// indices are logged and ignored; a stale recolor must never panic.
    pub fn set_note_color(&mut self, index: usize, color: &str) {
        match self.notes.get_mut(index) {
            Some(note) => note.color = color.to_string(),
            None => log::warn!(
                "recolor index {index} out of bounds ({} notes)",
                self.notes.len()
            ),
        }
    }

    /// Revert the note at `index` to neutral ink.
    pub fn reset_note_color(&mut self, index: usize) {
        self.set_note_color(index, NOTE_COLOR);
    }

    /// Current color of the note at `index`.
    pub fn note_color(&self, index: usize) -> Option<&str> {
        self.notes.get(index).map(|n| n.color.as_str())
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// The view's clef: that of the first note, treble when empty.
    pub fn clef(&self) -> Clef {
        self.notes
            .first()
            .map_or(Clef::Treble, |n| n.position.clef)
    }

    /// Resolved position of the note at `index`.
    pub fn position(&self, index: usize) -> Option<StaffPosition> {
        self.notes.get(index).map(|n| n.position)
    }

    /// Visible width: grows with the note count at fixed spacing.
    pub fn width(&self) -> f64 {
        let needed = SCROLL_FIRST_NOTE_X
            + self.notes.len() as f64 * SCROLL_NOTE_SPACING
            + SCROLL_RIGHT_MARGIN;
        needed.max(SCROLL_MIN_WIDTH)
    }

    /// Render the view as a self-contained SVG string.
    pub fn to_svg(&self) -> String {
        let width = self.width();
        let mut svg = SvgBuilder::new(width, SCROLL_HEIGHT);

        render_staff_lines(&mut svg, CLEF_X - 6.0, width - 10.0, STAFF_TOP);
        svg.clef_glyph(CLEF_X, STAFF_TOP, self.clef() == Clef::Treble);

        for (i, note) in self.notes.iter().enumerate() {
            let x = SCROLL_FIRST_NOTE_X + i as f64 * SCROLL_NOTE_SPACING;
            render_note(&mut svg, x, STAFF_TOP, note.pitch, &note.position, &note.color);
        }

        svg.build()
    }
}
