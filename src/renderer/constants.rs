//! Shared constants for the staff renderers (all in SVG user units).

// ── View dimensions ─────────────────────────────────────────────────
pub(super) const FLASH_WIDTH: f64 = 220.0;
pub(super) const FLASH_HEIGHT: f64 = 160.0;
pub(super) const FLASH_NOTE_X: f64 = 120.0;

pub(super) const SCROLL_MIN_WIDTH: f64 = 400.0;
pub(super) const SCROLL_HEIGHT: f64 = 160.0;
pub(super) const SCROLL_FIRST_NOTE_X: f64 = 100.0;
pub(super) const SCROLL_NOTE_SPACING: f64 = 40.0;
pub(super) const SCROLL_RIGHT_MARGIN: f64 = 40.0;

/// Y of the staff's top line inside both views; leaves headroom for
/// ledger lines and the 8va label above.
pub(super) const STAFF_TOP: f64 = 60.0;
pub(super) const CLEF_X: f64 = 14.0;

// ── Note dimensions ─────────────────────────────────────────────────
pub(super) const NOTEHEAD_RX: f64 = 5.5; // notehead ellipse x-radius
pub(super) const NOTEHEAD_RY: f64 = 4.0; // notehead ellipse y-radius
pub(super) const STEM_LENGTH: f64 = 30.0;
pub(super) const STEM_WIDTH: f64 = 1.2;
pub(super) const STAFF_LINE_WIDTH: f64 = 0.8;
pub(super) const LEDGER_LINE_WIDTH: f64 = 1.2;
pub(super) const LEDGER_LINE_EXTEND: f64 = 5.0;
pub(super) const ACCIDENTAL_GAP: f64 = 4.0; // between glyph and note head

// ── Octave-transposition marks ──────────────────────────────────────
pub(super) const OCTAVE_LABEL_SIZE: f64 = 11.0;
pub(super) const OCTAVE_MARK_OFFSET: f64 = 22.0; // distance from staff band
pub(super) const OCTAVE_GUIDE_HALF: f64 = 24.0; // dashed guide half-length

// ── Colors ──────────────────────────────────────────────────────────
/// Neutral ink for notes awaiting feedback.
pub const NOTE_COLOR: &str = "#1a1a1a";
/// Correct-note feedback.
pub const CORRECT_COLOR: &str = "#10b981";
/// Wrong-note feedback.
pub const WRONG_COLOR: &str = "#ef4444";
pub(super) const STAFF_COLOR: &str = "#555555";
