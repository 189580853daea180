//! Presentation backends.
//!
//! A backend turns the screen's paint commands into cells. The headless one is always built;
//! the terminal one needs the `tui` feature.

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);

    fn set_cursor(&mut self, pos: Option<Pos>);
}

// Keep the module name generic so the rest of the crate does not need to mention ratatui.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
