//! The rendering engine seam.
//!
//! The widget tree never paints cells itself. It asks an [`Engine`] for named rectangular
//! regions and fills them with text, decoration and cursor state; the engine owns presentation
//! and key binding dispatch. [`Screen`] is the in-crate implementation used by both the terminal
//! loop and the headless tests.

use crate::core::{Command, Key};
use crate::ui::core::geom::Bounds;
use std::fmt;

mod screen;

pub use screen::{Region, Screen};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The region did not exist before this call. `set_region` reports this when it allocates a
    /// new region; callers treat it as "first time seen", not as a failure.
    UnknownRegion(String),
    /// Any other engine failure.
    Backend(String),
}

impl EngineError {
    pub fn is_unknown_region(&self) -> bool {
        matches!(self, EngineError::UnknownRegion(_))
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownRegion(name) => write!(f, "unknown region {name:?}"),
            EngineError::Backend(msg) => write!(f, "engine error: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}

/// Treats "unknown region" as success.
pub fn allow_unknown(result: Result<(), EngineError>) -> Result<(), EngineError> {
    match result {
        Err(err) if err.is_unknown_region() => Ok(()),
        other => other,
    }
}

pub trait Engine {
    /// Terminal size in cells.
    fn size(&self) -> (i32, i32);

    /// Allocates or resizes a region. Returns `UnknownRegion` when the region was newly created.
    fn set_region(&mut self, name: &str, bounds: Bounds) -> Result<(), EngineError>;

    fn delete_region(&mut self, name: &str) -> Result<(), EngineError>;

    fn has_region(&self, name: &str) -> bool;

    /// Moves a region to the top of the stacking order.
    fn set_on_top(&mut self, name: &str) -> Result<(), EngineError>;

    /// Region names in stacking order (first is bottom-most).
    fn region_names(&self) -> Vec<String>;

    fn clear(&mut self, name: &str) -> Result<(), EngineError>;

    fn write(&mut self, name: &str, text: &str) -> Result<(), EngineError>;

    fn set_cursor(&mut self, name: &str, x: usize, y: usize) -> Result<(), EngineError>;

    /// Border and optional title.
    fn set_frame(&mut self, name: &str, frame: bool, title: Option<&str>)
        -> Result<(), EngineError>;

    /// Whether the cursor row is painted with the selection color.
    fn set_highlight(&mut self, name: &str, highlight: bool) -> Result<(), EngineError>;

    fn set_autoscroll(&mut self, name: &str, autoscroll: bool) -> Result<(), EngineError>;

    /// Marks the region receiving key input. `None` clears it.
    fn set_current(&mut self, name: Option<&str>) -> Result<(), EngineError>;

    fn current(&self) -> Option<&str>;

    /// Binds `key` to `command`, either globally (`scope == None`) or for one region. Binding the
    /// same key in the same scope again replaces the previous command.
    fn bind(&mut self, scope: Option<&str>, key: Key, command: Command)
        -> Result<(), EngineError>;

    fn unbind(&mut self, scope: Option<&str>, key: Key);

    /// Drops every binding scoped to `name`.
    fn unbind_region(&mut self, name: &str);

    /// Region-scoped bindings of the current region win over global ones.
    fn resolve(&self, key: Key) -> Option<Command>;
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/engine/mod.rs"]
mod tests;
