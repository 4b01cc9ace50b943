//! Staff renderers — convert resolved note positions into self-contained
//! SVG strings that any SVG-capable view can display.
//!
//! Two independent surfaces with distinct state: [`FlashStaff`] (one note
//! at a time, cleared on each new note) and [`ScrollingStaff`] (append-only
//! with per-note recoloring).

mod constants;
mod svg_builder;
mod notes;
mod flash;
mod scroll;

pub use constants::{CORRECT_COLOR, NOTE_COLOR, WRONG_COLOR};
pub use flash::FlashStaff;
pub use scroll::ScrollingStaff;
