//! Note drawing shared by both staff views: head, stem, accidental,
//! ledger lines, and octave-transposition marks.

use crate::note::{Accidental, Pitch};
use crate::staff::{StaffPosition, MAX_LEDGER_LINES, STAFF_HEIGHT, STAFF_LINE_SPACING};

use super::constants::*;
use super::svg_builder::SvgBuilder;

/// Draw one note at horizontal position `x` on a staff whose top line is
/// at `staff_top`. All parts use `color` so post-hoc recoloring stays
/// consistent.
pub(super) fn render_note(
    svg: &mut SvgBuilder,
    x: f64,
    staff_top: f64,
    pitch: Pitch,
    position: &StaffPosition,
    color: &str,
) {
    let note_y = staff_top + position.y;

    render_ledger_lines(svg, x, staff_top, position, color);

    svg.notehead(x, note_y, color);

    // Stem points up only when the head is strictly below the middle
    // line; on the middle line the stem goes down.
    let stem_up = position.y > STAFF_HEIGHT / 2.0;
    let (sx, sy2) = if stem_up {
        (x + NOTEHEAD_RX - 1.0, note_y - STEM_LENGTH)
    } else {
        (x - NOTEHEAD_RX + 1.0, note_y + STEM_LENGTH)
    };
    svg.line(sx, note_y, sx, sy2, color, STEM_WIDTH);

    match pitch.accidental {
        Accidental::Sharp => {
            svg.sharp_glyph(x - NOTEHEAD_RX - ACCIDENTAL_GAP - 2.0, note_y, color)
        }
        Accidental::Flat => {
            svg.flat_glyph(x - NOTEHEAD_RX - ACCIDENTAL_GAP - 1.0, note_y, color)
        }
        Accidental::Natural => {}
    }

    render_octave_mark(svg, x, staff_top, position);
}

/// Ledger lines outside the five-line band, clamped at
/// [`MAX_LEDGER_LINES`] per side. The resolver's octave shift keeps
/// in-range pitches within the cap; anything deeper renders best-effort.
fn render_ledger_lines(
    svg: &mut SvgBuilder,
    x: f64,
    staff_top: f64,
    position: &StaffPosition,
    color: &str,
) {
    let x1 = x - NOTEHEAD_RX - LEDGER_LINE_EXTEND;
    let x2 = x + NOTEHEAD_RX + LEDGER_LINE_EXTEND;

    let (above, below) = position.ledger_lines();

    for i in 0..above.min(MAX_LEDGER_LINES) {
        let y = staff_top - (i + 1) as f64 * STAFF_LINE_SPACING;
        svg.line(x1, y, x2, y, color, LEDGER_LINE_WIDTH);
    }
    for i in 0..below.min(MAX_LEDGER_LINES) {
        let y = staff_top + STAFF_HEIGHT + (i + 1) as f64 * STAFF_LINE_SPACING;
        svg.line(x1, y, x2, y, color, LEDGER_LINE_WIDTH);
    }
}

/// "8va"/"8vb" label with a short dashed guide. 8va sits above the
/// staff, 8vb below; octave marks always use the neutral ink.
fn render_octave_mark(svg: &mut SvgBuilder, x: f64, staff_top: f64, position: &StaffPosition) {
    let Some(label) = position.annotation() else {
        return;
    };

    let y = if position.octave_shift < 0 {
        staff_top - OCTAVE_MARK_OFFSET
    } else {
        staff_top + STAFF_HEIGHT + OCTAVE_MARK_OFFSET
    };

    svg.text(x - OCTAVE_GUIDE_HALF - 4.0, y + 4.0, label, OCTAVE_LABEL_SIZE, "bold", NOTE_COLOR, "end");
    svg.dashed_line(x - OCTAVE_GUIDE_HALF, y, x + OCTAVE_GUIDE_HALF, y, NOTE_COLOR, 1.0);
}

/// The five staff lines from `staff_top` down.
pub(super) fn render_staff_lines(svg: &mut SvgBuilder, x1: f64, x2: f64, staff_top: f64) {
    for i in 0..5 {
        let y = staff_top + i as f64 * STAFF_LINE_SPACING;
        svg.line(x1, y, x2, y, STAFF_COLOR, STAFF_LINE_WIDTH);
    }
}
