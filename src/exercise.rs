//! Exercise state machine: validates submitted notes against an expected
//! sequence or chord and tracks progress.
//!
//! States run `Idle → Loaded → InProgress → Complete`. Submitting while
//! `Idle` or `Complete` is a rejected no-op — never an error. Matching
//! uses enharmonic equivalence (C#4 satisfies an expected Db4), not
//! string equality.

use serde::{Deserialize, Serialize};

use crate::note::Pitch;

/// How an exercise validates input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseKind {
    /// Notes must arrive in order.
    #[serde(rename = "play_sequence")]
    Sequence,
    /// Notes may arrive in any order; each counts once.
    #[serde(rename = "play_chord")]
    Chord,
}

/// One immutable exercise from the curriculum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(rename = "type")]
    pub kind: ExerciseKind,
    /// Expected note tokens, e.g. `["C4", "E4", "G4"]`.
    pub notes: Vec<String>,
    pub instruction: String,
}

/// Machine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseState {
    Idle,
    Loaded,
    InProgress,
    Complete,
}

/// Result of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The note matched; `completed` is set when this acceptance
    /// satisfied the final expected note.
    Accepted { completed: bool },
    Rejected,
}

impl Submission {
    pub fn is_accepted(self) -> bool {
        matches!(self, Submission::Accepted { .. })
    }

    pub fn is_completed(self) -> bool {
        matches!(self, Submission::Accepted { completed: true })
    }
}

/// Mutable progress through one exercise. Created when an exercise loads,
/// discarded when the exercise changes or resets.
#[derive(Debug, Clone)]
pub struct ExerciseProgress {
    kind: ExerciseKind,
    expected: Vec<Pitch>,
    satisfied: Vec<Pitch>,
    cursor: usize,
    state: ExerciseState,
}

impl Default for ExerciseProgress {
    fn default() -> Self {
        Self::idle()
    }
}

impl ExerciseProgress {
    /// No exercise loaded; every submission is rejected.
    pub fn idle() -> Self {
        Self {
            kind: ExerciseKind::Sequence,
            expected: Vec::new(),
            satisfied: Vec::new(),
            cursor: 0,
            state: ExerciseState::Idle,
        }
    }

    /// Load an exercise. Malformed expected tokens are logged and
    /// skipped rather than failing the whole exercise.
    pub fn load(exercise: &Exercise) -> Self {
        let expected: Vec<Pitch> = exercise
            .notes
            .iter()
            .filter_map(|token| match Pitch::parse(token) {
                Ok(pitch) => Some(pitch),
                Err(e) => {
                    log::warn!("skipping expected note: {e}");
                    None
                }
            })
            .collect();

        let state = if expected.is_empty() {
            ExerciseState::Idle
        } else {
            ExerciseState::Loaded
        };

        Self {
            kind: exercise.kind,
            expected,
            satisfied: Vec::new(),
            cursor: 0,
            state,
        }
    }

    pub fn state(&self) -> ExerciseState {
        self.state
    }

    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    pub fn is_complete(&self) -> bool {
        self.state == ExerciseState::Complete
    }

    /// Next expected note for a sequence exercise (the note the flash
    /// staff should be prompting).
    pub fn expected_at_cursor(&self) -> Option<Pitch> {
        self.expected.get(self.cursor).copied()
    }

    /// The expected note at an arbitrary index (manual prev/next
    /// navigation over the exercise display).
    pub fn expected_at(&self, index: usize) -> Option<Pitch> {
        self.expected.get(index).copied()
    }

    /// Index of the next expected note in a sequence.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All expected notes, parsed.
    pub fn expected_notes(&self) -> &[Pitch] {
        &self.expected
    }

    pub fn expected_len(&self) -> usize {
        self.expected.len()
    }

    pub fn satisfied_len(&self) -> usize {
        self.satisfied.len()
    }

    /// Submit one note.
    ///
    /// Sequence: accepted iff it sounds like the note at the cursor; the
    /// cursor only moves on acceptance. Chord: accepted iff it is a chord
    /// member not yet satisfied. `Idle` and `Complete` reject without
    /// side effects.
    pub fn submit(&mut self, pitch: Pitch) -> Submission {
        match self.state {
            ExerciseState::Idle | ExerciseState::Complete => return Submission::Rejected,
            ExerciseState::Loaded | ExerciseState::InProgress => {}
        }

        let accepted = match self.kind {
            ExerciseKind::Sequence => self
                .expected
                .get(self.cursor)
                .is_some_and(|&expected| pitch.sounds_like(expected)),
            ExerciseKind::Chord => {
                let in_chord = self.expected.iter().any(|&e| pitch.sounds_like(e));
                let already = self.satisfied.iter().any(|&s| pitch.sounds_like(s));
                in_chord && !already
            }
        };

        if !accepted {
            return Submission::Rejected;
        }

        self.satisfied.push(pitch);
        if self.kind == ExerciseKind::Sequence {
            self.cursor += 1;
        }

        if self.satisfied.len() == self.expected.len() {
            self.state = ExerciseState::Complete;
            Submission::Accepted { completed: true }
        } else {
            self.state = ExerciseState::InProgress;
            Submission::Accepted { completed: false }
        }
    }
}
