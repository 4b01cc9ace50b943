//! Renderer tests — SVG structure of both staff views, the ledger clamp,
//! octave-transposition marks, and recolor isolation.

use lessonlib::note::Pitch;
use lessonlib::renderer::{FlashStaff, ScrollingStaff, CORRECT_COLOR, NOTE_COLOR, WRONG_COLOR};
use lessonlib::{render_note_svg, LessonError};
use pretty_assertions::assert_eq;

fn pitch(token: &str) -> Pitch {
    Pitch::parse(token).unwrap()
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn empty_flash_staff_draws_lines_and_a_treble_clef() {
    let staff = FlashStaff::new();
    let svg = staff.to_svg();

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(count(&svg, "#555555"), 5, "five staff lines");
    assert!(svg.contains("\u{1d11e}"), "treble clef glyph");
    assert!(!svg.contains("ellipse"), "no note head yet");
}

#[test]
fn flash_note_has_head_stem_and_color() {
    let mut staff = FlashStaff::new();
    staff.show(pitch("G4"), false, NOTE_COLOR);
    let svg = staff.to_svg();

    assert_eq!(count(&svg, "<ellipse"), 1);
    assert!(svg.contains(NOTE_COLOR));

    // Showing a new note replaces the old one.
    staff.show(pitch("A4"), false, CORRECT_COLOR);
    let svg = staff.to_svg();
    assert_eq!(count(&svg, "<ellipse"), 1);
    assert!(svg.contains(CORRECT_COLOR));
}

#[test]
fn bass_notes_switch_the_flash_clef() {
    let mut staff = FlashStaff::new();
    staff.show(pitch("E3"), false, NOTE_COLOR);
    let svg = staff.to_svg();
    assert!(svg.contains("\u{1d122}"), "bass clef glyph");
    assert!(!svg.contains("\u{1d11e}"));
}

#[test]
fn sharp_and_flat_glyphs_render_only_when_present() {
    let mut staff = FlashStaff::new();

    staff.show(pitch("G4"), false, NOTE_COLOR);
    let natural_lines = count(&staff.to_svg(), "<line");

    staff.show(pitch("G#4"), false, NOTE_COLOR);
    let sharp_lines = count(&staff.to_svg(), "<line");
    assert!(
        sharp_lines > natural_lines,
        "sharp glyph adds strokes ({sharp_lines} vs {natural_lines})"
    );

    staff.show(pitch("G#4"), true, NOTE_COLOR); // spelled Ab4
    assert!(staff.to_svg().contains("<path"), "flat glyph has a bowl path");
}

#[test]
fn stem_direction_flips_at_the_middle_line() {
    // B4 sits on the treble middle line: stem down (tie-break).
    let mut staff = FlashStaff::new();
    staff.show(pitch("B4"), false, NOTE_COLOR);
    let mid = staff.position().unwrap();
    assert_eq!(mid.y, 20.0);

    // A4 (below the middle line) stems up; C5 (above) stems down.
    // Stems up are drawn toward smaller y, so the stem line of A4 ends
    // above the head and C5's ends below. Verified via coordinates.
    staff.show(pitch("A4"), false, NOTE_COLOR);
    let low = staff.position().unwrap();
    assert!(low.y > 20.0);
    staff.show(pitch("C5"), false, NOTE_COLOR);
    let high = staff.position().unwrap();
    assert!(high.y < 20.0);
}

#[test]
fn octave_marks_appear_for_transposed_notes() {
    let mut staff = FlashStaff::new();

    staff.show(pitch("C6"), false, NOTE_COLOR);
    let svg = staff.to_svg();
    assert!(svg.contains("8va"));
    assert!(svg.contains("stroke-dasharray"), "dashed guide");

    staff.show(pitch("C1"), false, NOTE_COLOR);
    let svg = staff.to_svg();
    assert!(svg.contains("8vb"));

    staff.show(pitch("G4"), false, NOTE_COLOR);
    let svg = staff.to_svg();
    assert!(!svg.contains("8va") && !svg.contains("8vb"));
}

#[test]
fn ledger_lines_are_clamped_at_two_per_side() {
    let mut staff = FlashStaff::new();

    // A0 resolves to A1 under 8vb, which would want three ledger lines;
    // the renderer draws at most two.
    staff.show(pitch("A0"), false, NOTE_COLOR);
    let svg = staff.to_svg();
    // Staff lines are the only #555555 strokes; ledger lines carry the
    // note color. Count solid note-colored <line> elements (ledgers and
    // the stem), skipping the dashed 8vb guide.
    let note_lines = svg
        .lines()
        .filter(|l| {
            l.contains("<line") && l.contains(NOTE_COLOR) && !l.contains("stroke-dasharray")
        })
        .count();
    assert!(
        note_lines <= 3, // stem + at most two ledgers
        "expected clamped ledgers, got {note_lines} note-colored lines"
    );
}

#[test]
fn scrolling_staff_grows_with_its_notes() {
    let mut staff = ScrollingStaff::new();
    assert!(staff.is_empty());
    let base_width = staff.width();

    for _ in 0..12 {
        staff.push(pitch("C4"), false);
    }
    assert_eq!(staff.len(), 12);
    assert!(staff.width() > base_width);
    assert_eq!(count(&staff.to_svg(), "<ellipse"), 12);
}

#[test]
fn recoloring_one_note_leaves_the_others_untouched() {
    let melody: Vec<Pitch> = ["C4", "D4", "E4", "F4", "G4", "A4"]
        .iter()
        .map(|t| pitch(t))
        .collect();

    let mut staff = ScrollingStaff::new();
    staff.load_melody(&melody, false);
    let before = staff.to_svg();

    staff.set_note_color(3, CORRECT_COLOR);
    let after = staff.to_svg();

    // Exactly the elements of note 3 changed, and every changed element
    // changed only in color.
    let changed: Vec<(&str, &str)> = before
        .lines()
        .zip(after.lines())
        .filter(|(b, a)| b != a)
        .collect();
    assert!(!changed.is_empty(), "recolor must change something");
    for (b, a) in &changed {
        assert!(a.contains(CORRECT_COLOR), "changed element: {a}");
        assert_eq!(
            b.replace(NOTE_COLOR, CORRECT_COLOR),
            **a,
            "only the color may differ"
        );
    }

    for i in [0usize, 1, 2, 4, 5] {
        assert_eq!(staff.note_color(i), Some(NOTE_COLOR), "note {i}");
    }
}

#[test]
fn recoloring_is_reversible() {
    let mut staff = ScrollingStaff::new();
    staff.load_melody(&[pitch("C4"), pitch("D4")], false);
    let original = staff.to_svg();

    staff.set_note_color(1, WRONG_COLOR);
    assert_ne!(staff.to_svg(), original);

    staff.reset_note_color(1);
    assert_eq!(staff.to_svg(), original);
}

#[test]
fn recolor_out_of_bounds_is_ignored() {
    let mut staff = ScrollingStaff::new();
    staff.push(pitch("C4"), false);
    staff.set_note_color(5, CORRECT_COLOR); // logged, no panic
    assert_eq!(staff.note_color(0), Some(NOTE_COLOR));
}

#[test]
fn single_note_convenience_renderer() {
    let svg = render_note_svg("C#4", false).unwrap();
    assert!(svg.contains("<ellipse"));

    assert!(matches!(
        render_note_svg("zz", false),
        Err(LessonError::InvalidNoteToken { .. })
    ));
    // G0 parses but lies below the 88-key register.
    assert!(matches!(
        render_note_svg("G0", false),
        Err(LessonError::OutOfRangeForNotation { .. })
    ));
}

#[test]
fn clear_resets_both_views() {
    let mut flash = FlashStaff::new();
    flash.show(pitch("C4"), false, NOTE_COLOR);
    flash.clear();
    assert!(!flash.to_svg().contains("ellipse"));

    let mut scroll = ScrollingStaff::new();
    scroll.push(pitch("C4"), false);
    scroll.clear();
    assert!(scroll.is_empty());
    assert!(!scroll.to_svg().contains("ellipse"));
}
