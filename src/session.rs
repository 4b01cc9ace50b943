//! Lesson progression controller.
//!
//! Owns the lesson session, both staff renderers (injected state, no
//! globals), the exercise state machine, and the deferred-action queue.
//! The host feeds it note tokens and timer callbacks; it hands back
//! feedback, progress, and fresh SVG to display.
//!
//! Timing model: the controller never sleeps. Anything that should
//! happen later (advance to the next note, revert a wrong-note
//! highlight, auto-advance after completion) is pushed as a [`Deferred`]
//! record; the host drains those with [`LessonController::drain_timers`],
//! schedules them, and calls [`LessonController::fire`] when they elapse.
//! `fire` discards records whose generation stamp no longer matches the
//! session, so a timer from a superseded exercise can never touch the
//! current one.

use serde::{Deserialize, Serialize};

use crate::deferred::{Deferred, DeferredAction};
use crate::error::LessonError;
use crate::exercise::{ExerciseKind, ExerciseProgress, ExerciseState, Submission};
use crate::lesson::{Lesson, LessonKind};
use crate::note::Pitch;
use crate::renderer::{FlashStaff, ScrollingStaff, CORRECT_COLOR, NOTE_COLOR, WRONG_COLOR};

// ── User-facing delays (milliseconds) ───────────────────────────────
const ADVANCE_NOTE_DELAY_MS: u32 = 800; // show green, then next note
const RESTORE_EXPECTED_DELAY_MS: u32 = 1000; // show red, then re-prompt
const COMPLETE_DELAY_MS: u32 = 800; // last green before completion
const MELODY_COMPLETE_DELAY_MS: u32 = 500;
const EXERCISE_ADVANCE_DELAY_MS: u32 = 2000; // between exercises
const REVERT_HIGHLIGHT_DELAY_MS: u32 = 1000; // melody wrong-note red

/// Category of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Success,
    Error,
    Neutral,
}

/// What one note submission produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitOutcome {
    /// The note matched the expected one.
    pub accepted: bool,
    /// This submission satisfied the exercise's final note.
    pub exercise_completed: bool,
    /// Feedback text for the user, if any.
    pub feedback: Option<(String, FeedbackKind)>,
}

/// Drives a curriculum: lessons, exercises, rendering, and timers.
#[derive(Debug)]
pub struct LessonController {
    curriculum: Vec<Lesson>,
    lesson_index: usize,
    exercise_index: usize,
    progress: ExerciseProgress,
    /// Index of the expected note currently shown on the prompt staff
    /// (moved by validation and by manual prev/next navigation).
    display_index: usize,
    prefer_flats: bool,
    lesson_finished: bool,
    /// Bumped on every lesson/exercise (re)load; stale timers carry an
    /// older stamp and are discarded.
    generation: u64,
    pending: Vec<Deferred>,
    /// Echoes every key the user presses, in neutral ink.
    echo: FlashStaff,
    /// Shows the expected note and green/red feedback.
    prompt: FlashStaff,
    /// Sight-reading view for melody lessons.
    melody: ScrollingStaff,
}

impl LessonController {
    /// Build a controller over a curriculum and load its first lesson.
    pub fn new(curriculum: Vec<Lesson>) -> Self {
        let mut controller = Self {
            curriculum,
            lesson_index: 0,
            exercise_index: 0,
            progress: ExerciseProgress::idle(),
            display_index: 0,
            prefer_flats: false,
            lesson_finished: false,
            generation: 0,
            pending: Vec::new(),
            echo: FlashStaff::new(),
            prompt: FlashStaff::new(),
            melody: ScrollingStaff::new(),
        };
        controller.load_lesson(0);
        controller
    }

    // ── Lesson navigation ───────────────────────────────────────────

    /// Load the lesson at `index`, resetting all exercise progress and
    /// clearing both staves. Out-of-range indices are ignored.
    pub fn load_lesson(&mut self, index: usize) {
        if index >= self.curriculum.len() {
            log::warn!("lesson index {index} out of range");
            return;
        }
        self.generation += 1;
        self.lesson_index = index;
        self.exercise_index = 0;
        self.lesson_finished = false;
        self.echo.clear();
        self.prompt.clear();
        self.melody.clear();

        if self.curriculum[index].exercises.is_empty() {
            self.progress = ExerciseProgress::idle();
            self.display_index = 0;
        } else {
            self.load_exercise(0);
        }
    }

    /// Load the exercise at `index` within the current lesson.
    pub fn load_exercise(&mut self, index: usize) {
        let Some(lesson) = self.curriculum.get(self.lesson_index) else {
            return;
        };
        let Some(exercise) = lesson.exercises.get(index) else {
            log::warn!("exercise index {index} out of range for lesson {}", lesson.id);
            return;
        };

        self.generation += 1;
        self.exercise_index = index;
        self.progress = ExerciseProgress::load(exercise);
        self.display_index = 0;

        if lesson.kind == LessonKind::Melody {
            let notes = self.progress.expected_notes().to_vec();
            self.melody.load_melody(&notes, self.prefer_flats);
            self.prompt.clear();
        } else {
            self.melody.clear();
            self.show_expected(0);
        }
    }

    /// Advance to the next lesson, if any. Never auto-invoked: the
    /// lesson-finished signal only enables the host's control.
    pub fn next_lesson(&mut self) {
        if self.lesson_index + 1 < self.curriculum.len() {
            self.load_lesson(self.lesson_index + 1);
        }
    }

    /// Restart the current lesson from its first exercise.
    pub fn reset_lesson(&mut self) {
        self.load_lesson(self.lesson_index);
    }

    // ── Note submission ─────────────────────────────────────────────

    /// Handle one key press. Parses the token, echoes it on the main
    /// staff, and validates it against the loaded exercise.
    ///
    /// Malformed tokens and submissions with no active exercise are
    /// recovered locally (logged, no user-visible failure).
    pub fn submit_note(&mut self, token: &str) -> SubmitOutcome {
        let pitch = match Pitch::parse(token) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("ignoring key press: {e}");
                return SubmitOutcome::default();
            }
        };

        self.echo.show(pitch, self.prefer_flats, NOTE_COLOR);

        if self.progress.state() == ExerciseState::Idle {
            log::debug!("{}; {} echoed only", LessonError::NoActiveExercise, pitch.token());
            return SubmitOutcome::default();
        }
        if self.progress.is_complete() {
            return SubmitOutcome::default();
        }

        let is_melody = self.current_lesson().map(|l| l.kind) == Some(LessonKind::Melody);
        let is_chord = self.progress.kind() == ExerciseKind::Chord;

        match self.progress.submit(pitch) {
            Submission::Accepted { completed } => {
                if is_melody {
                    // The note just satisfied is the one before the cursor.
                    let idx = self.progress.satisfied_len() - 1;
                    self.melody.set_note_color(idx, CORRECT_COLOR);
                } else {
                    self.prompt.show(pitch, self.prefer_flats, CORRECT_COLOR);
                }

                if completed {
                    let delay = if is_melody {
                        MELODY_COMPLETE_DELAY_MS
                    } else {
                        COMPLETE_DELAY_MS
                    };
                    self.schedule(delay, DeferredAction::CompleteExercise);
                    SubmitOutcome {
                        accepted: true,
                        exercise_completed: true,
                        feedback: Some((
                            "Excellent! You completed the exercise!".to_string(),
                            FeedbackKind::Success,
                        )),
                    }
                } else {
                    if !is_melody {
                        self.schedule(ADVANCE_NOTE_DELAY_MS, DeferredAction::AdvanceNote);
                    }
                    SubmitOutcome {
                        accepted: true,
                        ..SubmitOutcome::default()
                    }
                }
            }
            Submission::Rejected => {
                if is_melody {
                    // Mark the note that should have been played.
                    let idx = self.progress.cursor();
                    self.melody.set_note_color(idx, WRONG_COLOR);
                    self.schedule(
                        REVERT_HIGHLIGHT_DELAY_MS,
                        DeferredAction::RevertScrollHighlight { index: idx },
                    );
                    SubmitOutcome::default()
                } else {
                    self.prompt.show(pitch, self.prefer_flats, WRONG_COLOR);
                    self.schedule(
                        RESTORE_EXPECTED_DELAY_MS,
                        DeferredAction::RestoreExpectedNote,
                    );
                    let message = if is_chord {
                        "Try again! Play one of the chord notes."
                    } else {
                        "Try again! Play the correct note."
                    };
                    SubmitOutcome {
                        feedback: Some((message.to_string(), FeedbackKind::Error)),
                        ..SubmitOutcome::default()
                    }
                }
            }
        }
    }

    // ── Deferred actions ────────────────────────────────────────────

    fn schedule(&mut self, delay_ms: u32, action: DeferredAction) {
        self.pending.push(Deferred {
            generation: self.generation,
            delay_ms,
            action,
        });
    }

    /// Take everything scheduled since the last drain. The host owns
    /// the actual timers.
    pub fn drain_timers(&mut self) -> Vec<Deferred> {
        std::mem::take(&mut self.pending)
    }

    /// Fire an elapsed timer. Returns `false` (and does nothing) when
    /// the record's generation no longer matches the session — the
    /// originating exercise was superseded.
    pub fn fire(&mut self, deferred: Deferred) -> bool {
        if deferred.generation != self.generation {
            log::debug!("discarding stale timer {:?}", deferred.action);
            return false;
        }

        match deferred.action {
            DeferredAction::AdvanceNote => {
                self.display_index = self.progress.cursor();
                self.show_expected(self.display_index);
            }
            DeferredAction::RestoreExpectedNote => {
                // Chord prompts restart from the first member; sequences
                // re-prompt the note at the cursor.
                self.display_index = if self.progress.kind() == ExerciseKind::Chord {
                    0
                } else {
                    self.progress.cursor()
                };
                self.show_expected(self.display_index);
            }
            DeferredAction::CompleteExercise => {
                let more = self
                    .current_lesson()
                    .is_some_and(|l| self.exercise_index + 1 < l.exercises.len());
                if more {
                    self.schedule(EXERCISE_ADVANCE_DELAY_MS, DeferredAction::AdvanceExercise);
                } else {
                    self.lesson_finished = true;
                }
            }
            DeferredAction::AdvanceExercise => {
                self.load_exercise(self.exercise_index + 1);
            }
            DeferredAction::RevertScrollHighlight { index } => {
                // Only revert if it is still showing the wrong-note red;
                // the user may have satisfied it (green) in the meantime.
                if self.melody.note_color(index) == Some(WRONG_COLOR) {
                    self.melody.reset_note_color(index);
                }
            }
        }
        true
    }

    // ── Exercise display navigation ─────────────────────────────────

    /// Move the prompt display backward/forward over the expected notes.
    pub fn navigate_note(&mut self, direction: i32) {
        let len = self.progress.expected_len();
        if len == 0 {
            return;
        }
        let target = self.display_index as i64 + direction as i64;
        if target >= 0 && (target as usize) < len {
            self.display_index = target as usize;
            self.show_expected(self.display_index);
        }
    }

    /// "n / total" counter for the prompt display.
    pub fn note_counter(&self) -> String {
        format!(
            "{} / {}",
            self.display_index + 1,
            self.progress.expected_len()
        )
    }

    /// Enable states for (previous, next) navigation controls.
    pub fn nav_enabled(&self) -> (bool, bool) {
        let len = self.progress.expected_len();
        if len == 0 {
            return (false, false);
        }
        (self.display_index > 0, self.display_index + 1 < len)
    }

    fn show_expected(&mut self, index: usize) {
        if let Some(pitch) = self.progress.expected_at(index) {
            self.prompt.show(pitch, self.prefer_flats, NOTE_COLOR);
        }
    }

    // ── Configuration & state queries ───────────────────────────────

    /// Toggle flat spellings. Affects every subsequent render; the
    /// prompt re-renders immediately.
    pub fn set_prefer_flats(&mut self, prefer_flats: bool) {
        self.prefer_flats = prefer_flats;
        if self.progress.state() != ExerciseState::Idle {
            self.show_expected(self.display_index);
        }
    }

    pub fn prefer_flats(&self) -> bool {
        self.prefer_flats
    }

    pub fn current_lesson(&self) -> Option<&Lesson> {
        self.curriculum.get(self.lesson_index)
    }

    pub fn lesson_index(&self) -> usize {
        self.lesson_index
    }

    pub fn exercise_index(&self) -> usize {
        self.exercise_index
    }

    /// Whether the current lesson's last exercise has completed (the
    /// host should enable its next-lesson control).
    pub fn lesson_finished(&self) -> bool {
        self.lesson_finished
    }

    /// Displayed progress through the curriculum, 0–100.
    pub fn progress_percent(&self) -> f64 {
        if self.lesson_finished {
            return 100.0;
        }
        if self.curriculum.is_empty() {
            return 0.0;
        }
        (self.lesson_index + 1) as f64 / self.curriculum.len() as f64 * 100.0
    }

    /// Current session generation (stamped onto scheduled timers).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // ── Render surfaces ─────────────────────────────────────────────

    /// The staff echoing every key press.
    pub fn echo_staff(&self) -> &FlashStaff {
        &self.echo
    }

    /// The exercise prompt/feedback staff.
    pub fn prompt_staff(&self) -> &FlashStaff {
        &self.prompt
    }

    /// The scrolling sight-reading staff.
    pub fn melody_staff(&self) -> &ScrollingStaff {
        &self.melody
    }
}
