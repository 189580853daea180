//! Widget tree nodes.
//!
//! Widgets live in an arena owned by the session and are addressed by [`WidgetId`]. Ownership
//! flows from containers to their children through id lists; the `parent` link in
//! [`ViewState`] is a plain back-reference used for session discovery and nothing else.
//!
//! Every node pairs the shared identity/geometry record with one [`Widget`] variant. Containers
//! are laid out by the session because their draw step recurses through the arena; leaves draw
//! themselves into a named engine region.

use crate::ui::engine::{Engine, EngineError};
use slotmap::new_key_type;
use uuid::Uuid;

mod container;
mod list;
mod paragraph;

pub use container::Container;
pub use list::{CheckList, RadioList};
pub use paragraph::Paragraph;

new_key_type! {
    pub struct WidgetId;
}

/// Identity and last-assigned geometry of a node.
///
/// Geometry is only meaningful after the most recent layout pass; it is rewritten on every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    name: String,
    parent: Option<WidgetId>,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    focused: bool,
    attached: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            name: Uuid::new_v4().to_string(),
            parent: None,
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            focused: false,
            attached: false,
        }
    }

    /// Opaque unique name; engine regions of this widget are derived from it.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    pub fn pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether this node itself carries the session reference (root or drawn modal child).
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Assigns parent link and geometry for the current frame.
    pub fn context(&mut self, parent: Option<WidgetId>, x: i32, y: i32, width: i32, height: i32) {
        self.parent = parent;
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
    }

    pub(crate) fn set_parent(&mut self, parent: Option<WidgetId>) {
        self.parent = parent;
    }

    pub(crate) fn attach(&mut self) {
        self.attached = true;
    }

    pub fn on_focus(&mut self) {
        self.focused = true;
    }

    pub fn on_focus_lost(&mut self) {
        self.focused = false;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub enum Widget {
    Container(Container),
    Paragraph(Paragraph),
    CheckList(CheckList),
    RadioList(RadioList),
}

impl Widget {
    pub fn kind(&self) -> &'static str {
        match self {
            Widget::Container(_) => "container",
            Widget::Paragraph(_) => "paragraph",
            Widget::CheckList(_) => "check_list",
            Widget::RadioList(_) => "radio_list",
        }
    }

    /// Interactive widgets join the focus chain when drawn.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Widget::CheckList(_) | Widget::RadioList(_))
    }

    /// Draws a leaf into `region`. Containers are laid out by the session and draw nothing here.
    pub fn draw(
        &self,
        id: WidgetId,
        view: &ViewState,
        region: &str,
        engine: &mut dyn Engine,
    ) -> Result<(), EngineError> {
        match self {
            Widget::Container(_) => Ok(()),
            Widget::Paragraph(p) => p.draw(view, region, engine),
            Widget::CheckList(cl) => cl.draw(id, view, region, engine),
            Widget::RadioList(rl) => rl.draw(id, view, region, engine),
        }
    }

    /// Moves the list cursor. Returns `false` for widgets without one.
    pub fn move_cursor(&mut self, up: bool) -> bool {
        match self {
            Widget::CheckList(cl) => {
                if up {
                    cl.cursor_up()
                } else {
                    cl.cursor_down()
                }
                true
            }
            Widget::RadioList(rl) => {
                if up {
                    rl.cursor_up()
                } else {
                    rl.cursor_down()
                }
                true
            }
            Widget::Container(_) | Widget::Paragraph(_) => false,
        }
    }

    /// Label of item `index` for list widgets.
    pub fn item(&self, index: usize) -> Option<&str> {
        match self {
            Widget::CheckList(cl) => cl.items().get(index).map(String::as_str),
            Widget::RadioList(rl) => rl.items().get(index).map(String::as_str),
            Widget::Container(_) | Widget::Paragraph(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Widget::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Widget::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Widget::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_paragraph_mut(&mut self) -> Option<&mut Paragraph> {
        match self {
            Widget::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_check_list(&self) -> Option<&CheckList> {
        match self {
            Widget::CheckList(cl) => Some(cl),
            _ => None,
        }
    }

    pub fn as_check_list_mut(&mut self) -> Option<&mut CheckList> {
        match self {
            Widget::CheckList(cl) => Some(cl),
            _ => None,
        }
    }

    pub fn as_radio_list(&self) -> Option<&RadioList> {
        match self {
            Widget::RadioList(rl) => Some(rl),
            _ => None,
        }
    }

    pub fn as_radio_list_mut(&mut self) -> Option<&mut RadioList> {
        match self {
            Widget::RadioList(rl) => Some(rl),
            _ => None,
        }
    }
}

impl From<Container> for Widget {
    fn from(c: Container) -> Self {
        Widget::Container(c)
    }
}

impl From<Paragraph> for Widget {
    fn from(p: Paragraph) -> Self {
        Widget::Paragraph(p)
    }
}

impl From<CheckList> for Widget {
    fn from(cl: CheckList) -> Self {
        Widget::CheckList(cl)
    }
}

impl From<RadioList> for Widget {
    fn from(rl: RadioList) -> Self {
        Widget::RadioList(rl)
    }
}

/// Arena slot: identity record plus content.
#[derive(Debug, Clone)]
pub struct Node {
    pub view: ViewState,
    pub widget: Widget,
}

impl Node {
    pub fn new(widget: impl Into<Widget>) -> Self {
        Self {
            view: ViewState::new(),
            widget: widget.into(),
        }
    }
}

/// A selection or check state change reported to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceEvent {
    pub widget: WidgetId,
    pub item: String,
    pub index: usize,
    pub checked: bool,
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/mod.rs"]
mod tests;
