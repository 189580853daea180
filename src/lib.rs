//! tuitree: a retained widget tree for terminal UIs.
//!
//! Modules:
//! - core: keys, input events and binding commands
//! - ui: widgets, layout, focus, modals and the session that drives an engine
//! - settings: JSON key bindings and colors
//! - logging: tracing subscriber setup
//! - tui: the crossterm/ratatui frontend (feature `tui`)

pub mod core;
pub mod logging;
pub mod settings;
pub mod ui;

#[cfg(feature = "tui")]
pub mod tui;
