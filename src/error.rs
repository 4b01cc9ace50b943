//! Error types for the lesson engine.
//!
//! Every error here is recovered locally — a malformed token is skipped
//! and logged, an out-of-range pitch is rendered best-effort, a submission
//! with no loaded exercise is a no-op. Nothing is fatal; the only
//! user-visible "failure" is the normal wrong-note feedback message.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LessonError {
    /// Input token did not match `<A-G>[#|b]<digit>`.
    #[error("invalid note token '{token}'")]
    InvalidNoteToken { token: String },

    /// Pitch lies outside the register the staves render cleanly
    /// (the 88-key A0–C8 band). The staff views clamp instead of
    /// failing; the single-note convenience renderer rejects.
    #[error("pitch '{pitch}' is outside the renderable register")]
    OutOfRangeForNotation { pitch: String },

    /// A note was submitted while no exercise was loaded.
    #[error("no active exercise")]
    NoActiveExercise,

    /// Curriculum JSON could not be deserialized.
    #[error("invalid curriculum data: {reason}")]
    InvalidCurriculum { reason: String },
}
