//! Lesson and curriculum data.
//!
//! A curriculum is an ordered list of static [`Lesson`] records, supplied
//! fully formed — either the built-in course below or JSON the host loads
//! at startup. The engine treats it as read-only.

use serde::{Deserialize, Serialize};

use crate::error::LessonError;
use crate::exercise::{Exercise, ExerciseKind};

/// What kind of interaction a lesson drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    /// Free play, no exercises to validate.
    Exploration,
    /// Call-and-response on the flash staff.
    Sequence,
    /// Sight-reading on the scrolling staff.
    Melody,
    /// All chord members, any order.
    Chord,
}

/// One lesson in the curriculum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub instruction: String,
    #[serde(rename = "type")]
    pub kind: LessonKind,
    pub exercises: Vec<Exercise>,
}

/// Deserialize a curriculum from JSON (an array of lessons).
pub fn curriculum_from_json(json: &str) -> Result<Vec<Lesson>, LessonError> {
    serde_json::from_str(json).map_err(|e| LessonError::InvalidCurriculum {
        reason: e.to_string(),
    })
}

fn sequence_exercise(notes: &[&str], instruction: &str) -> Exercise {
    Exercise {
        kind: ExerciseKind::Sequence,
        notes: notes.iter().map(|s| s.to_string()).collect(),
        instruction: instruction.to_string(),
    }
}

fn chord_exercise(notes: &[&str], instruction: &str) -> Exercise {
    Exercise {
        kind: ExerciseKind::Chord,
        notes: notes.iter().map(|s| s.to_string()).collect(),
        instruction: instruction.to_string(),
    }
}

fn lesson(
    id: u32,
    title: &str,
    description: &str,
    instruction: &str,
    kind: LessonKind,
    exercises: Vec<Exercise>,
) -> Lesson {
    Lesson {
        id,
        title: title.to_string(),
        description: description.to_string(),
        instruction: instruction.to_string(),
        kind,
        exercises,
    }
}

/// The built-in eight-lesson beginner course.
pub fn builtin_curriculum() -> Vec<Lesson> {
    vec![
        lesson(
            1,
            "Introduction to Piano Keys",
            "Learn the basic layout of piano keys",
            "Click on any white key to hear its sound. Notice how the keys are arranged!",
            LessonKind::Exploration,
            vec![],
        ),
        lesson(
            2,
            "Learning C, D, E",
            "Master the first three white keys",
            "Let's learn the notes C, D, and E. Click on each key as it's highlighted!",
            LessonKind::Sequence,
            vec![sequence_exercise(
                &["C4", "D4", "E4"],
                "Play C, then D, then E",
            )],
        ),
        lesson(
            3,
            "Learning F, G, A, B",
            "Complete the white keys",
            "Now let's learn F, G, A, and B. These complete the musical alphabet!",
            LessonKind::Sequence,
            vec![sequence_exercise(
                &["F4", "G4", "A4", "B4"],
                "Play F, then G, then A, then B",
            )],
        ),
        lesson(
            4,
            "C Major Scale",
            "Play your first scale",
            "A scale is a series of notes. Let's play the C Major scale: C-D-E-F-G-A-B-C",
            LessonKind::Sequence,
            vec![sequence_exercise(
                &["C4", "D4", "E4", "F4", "G4", "A4", "B4", "C5"],
                "Play the C Major scale from C4 to C5",
            )],
        ),
        lesson(
            5,
            "Simple Melody: Twinkle Twinkle",
            "Play your first song!",
            "Let's play 'Twinkle Twinkle Little Star'. Follow the notes!",
            LessonKind::Melody,
            vec![sequence_exercise(
                &[
                    "C4", "C4", "G4", "G4", "A4", "A4", "G4", "F4", "F4", "E4", "E4", "D4",
                    "D4", "C4",
                ],
                "Play: C-C-G-G-A-A-G-F-F-E-E-D-D-C",
            )],
        ),
        lesson(
            6,
            "Black Keys Introduction",
            "Learn about sharps and flats",
            "Black keys are sharps (#) or flats (\u{266d}). They're between certain white keys!",
            LessonKind::Exploration,
            vec![],
        ),
        lesson(
            7,
            "Chords: C Major",
            "Play your first chord",
            "A chord is multiple notes played together. C Major is C-E-G",
            LessonKind::Chord,
            vec![chord_exercise(
                &["C4", "E4", "G4"],
                "Play C, E, and G together (or one after another)",
            )],
        ),
        lesson(
            8,
            "Simple Melody: Happy Birthday",
            "Play a familiar tune",
            "Let's play 'Happy Birthday'!",
            LessonKind::Melody,
            vec![sequence_exercise(
                &[
                    "C4", "C4", "D4", "C4", "F4", "E4", "C4", "C4", "D4", "C4", "G4", "F4",
                ],
                "Play the first part of Happy Birthday",
            )],
        ),
    ]
}
