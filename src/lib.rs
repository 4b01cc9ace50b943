//! lessonlib — piano lesson engine and staff notation renderer for Mulingo.
//!
//! Parses note tokens (`"C#4"`), resolves them to staff positions
//! (clef, vertical coordinate, 8va/8vb), renders them as SVG on a
//! single-note flash staff or a scrolling sight-reading staff, and
//! validates them against sequence/chord exercises in a lesson
//! curriculum.
//!
//! # Example
//! ```
//! use lessonlib::{builtin_curriculum, LessonController};
//!
//! let mut controller = LessonController::new(builtin_curriculum());
//! controller.load_lesson(1); // "Learning C, D, E"
//! let outcome = controller.submit_note("C4");
//! assert!(outcome.accepted);
//! let svg = controller.prompt_staff().to_svg();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod deferred;
pub mod error;
pub mod exercise;
pub mod lesson;
pub mod note;
pub mod renderer;
pub mod session;
pub mod staff;

pub use deferred::{Deferred, DeferredAction};
pub use error::LessonError;
pub use exercise::{Exercise, ExerciseKind, ExerciseProgress, ExerciseState, Submission};
pub use lesson::{builtin_curriculum, curriculum_from_json, Lesson, LessonKind};
pub use note::{Accidental, Letter, Pitch};
pub use renderer::{FlashStaff, ScrollingStaff, CORRECT_COLOR, NOTE_COLOR, WRONG_COLOR};
pub use session::{FeedbackKind, LessonController, SubmitOutcome};
pub use staff::{resolve, Clef, StaffPosition};

/// Render a single note token straight to flash-staff SVG.
/// Convenience for hosts that only want the notation display.
///
/// Unlike the staff views (which clamp and draw best-effort), this
/// rejects pitches outside the 88-key register.
pub fn render_note_svg(token: &str, prefer_flats: bool) -> Result<String, LessonError> {
    let pitch = Pitch::parse(token)?;
    if !pitch.in_piano_range() {
        return Err(LessonError::OutOfRangeForNotation {
            pitch: pitch.token(),
        });
    }
    let mut staff = FlashStaff::new();
    staff.show(pitch, prefer_flats, NOTE_COLOR);
    Ok(staff.to_svg())
}
