//! Semantic commands a key binding resolves to.
//!
//! Bindings are plain data: the session interprets a command against its own state instead of
//! the engine calling back into widgets.

use crate::ui::widgets::WidgetId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,
    FocusNext,
    FocusPrev,
    CursorUp(WidgetId),
    CursorDown(WidgetId),
    Toggle(WidgetId),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Quit => "quit",
            Command::FocusNext => "focusNext",
            Command::FocusPrev => "focusPrev",
            Command::CursorUp(_) => "cursorUp",
            Command::CursorDown(_) => "cursorDown",
            Command::Toggle(_) => "toggle",
        }
    }

    /// Parses the names usable from settings. Widget-scoped commands are installed by the widgets
    /// themselves and cannot be bound globally.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "quit" => Some(Command::Quit),
            "focusNext" => Some(Command::FocusNext),
            "focusPrev" => Some(Command::FocusPrev),
            _ => None,
        }
    }

    pub fn target(&self) -> Option<WidgetId> {
        match self {
            Command::CursorUp(id) | Command::CursorDown(id) | Command::Toggle(id) => Some(*id),
            Command::Quit | Command::FocusNext | Command::FocusPrev => None,
        }
    }
}
