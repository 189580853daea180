//! Terminal frontend (crossterm + ratatui).
//!
//! Kept apart from `ui` so sessions can run headless without the terminal crates.

pub mod crossterm;
pub mod run;
pub mod terminal_guard;

pub use run::{dispatch, run, Exit, RunOptions};
