//! Cancelable deferred actions.
//!
//! The engine never sleeps: everything it wants to happen later is pushed
//! into a queue as a [`Deferred`] record the host drains and schedules
//! (with `setTimeout`, a tokio timer, whatever it has). Each record
//! carries the generation stamp of the session state it was scheduled
//! against; [`crate::session::LessonController::fire`] compares stamps and
//! silently discards callbacks whose state was superseded. That check is
//! what keeps a stale timer from a previous exercise from corrupting a
//! freshly loaded one.

use serde::{Deserialize, Serialize};

/// What a timer should do when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeferredAction {
    /// Show the next expected note on the flash staff (after the green
    /// correct-note flash).
    AdvanceNote,
    /// Re-show the current expected note in neutral ink (after the red
    /// wrong-note flash).
    RestoreExpectedNote,
    /// Acknowledge exercise completion: either queue the auto-advance to
    /// the next exercise or surface the lesson-finished signal.
    CompleteExercise,
    /// Load the next exercise in the lesson (second stage of the
    /// completion flow, after the user-facing delay).
    AdvanceExercise,
    /// Revert a wrong-note highlight on the scrolling staff to neutral.
    RevertScrollHighlight { index: usize },
}

/// A scheduled action plus the state generation it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deferred {
    /// Session generation at scheduling time.
    pub generation: u64,
    /// Requested delay before firing, in milliseconds.
    pub delay_ms: u32,
    pub action: DeferredAction,
}
