use super::{ViewState, WidgetId};
use crate::core::{Command, Key, KeyCode};
use crate::ui::engine::{Engine, EngineError};
use rustc_hash::FxHashMap;

/// Cursor shared by both list kinds.
///
/// The cursor starts at 0 and is only brought back into range by navigation; replacing the
/// items does not move it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Rows {
    items: Vec<String>,
    cursor: usize,
}

impl Rows {
    fn new(items: Vec<String>) -> Self {
        Self { items, cursor: 0 }
    }

    fn up(&mut self) {
        let last = self.items.len().saturating_sub(1);
        self.cursor = self.cursor.min(last).saturating_sub(1);
    }

    fn down(&mut self) {
        let last = self.items.len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(last);
    }

    fn cursor_item(&self) -> Option<usize> {
        (self.cursor < self.items.len()).then_some(self.cursor)
    }

    /// Rebinds navigation and toggle keys for `region`, sets cursor and highlight, then writes
    /// one line per item.
    fn draw(
        &self,
        id: WidgetId,
        view: &ViewState,
        region: &str,
        engine: &mut dyn Engine,
        mark: impl Fn(usize) -> &'static str,
    ) -> Result<(), EngineError> {
        engine.unbind_region(region);
        engine.bind(Some(region), Key::simple(KeyCode::Down), Command::CursorDown(id))?;
        engine.bind(Some(region), Key::simple(KeyCode::Up), Command::CursorUp(id))?;
        engine.bind(Some(region), Key::simple(KeyCode::Char(' ')), Command::Toggle(id))?;

        engine.set_cursor(region, 0, self.cursor)?;
        engine.set_highlight(region, view.is_focused())?;

        let mut out = String::new();
        for (i, item) in self.items.iter().enumerate() {
            out.push_str(mark(i));
            out.push(' ');
            out.push_str(item);
            out.push('\n');
        }
        engine.write(region, &out)
    }
}

fn to_items<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

/// Multi-choice list: every item carries its own checked flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckList {
    rows: Rows,
    checked: FxHashMap<usize, bool>,
}

impl CheckList {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: Rows::new(to_items(items)),
            checked: FxHashMap::default(),
        }
    }

    pub fn items(&self) -> &[String] {
        &self.rows.items
    }

    pub fn cursor(&self) -> usize {
        self.rows.cursor
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(&index).copied().unwrap_or(false)
    }

    /// Checked indices in ascending order.
    pub fn checked(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .checked
            .iter()
            .filter(|(_, on)| **on)
            .map(|(i, _)| *i)
            .collect();
        out.sort_unstable();
        out
    }

    /// Replaces the labels and forgets every checked flag.
    pub fn set_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.items = to_items(items);
        self.checked.clear();
    }

    pub fn cursor_up(&mut self) {
        self.rows.up();
    }

    pub fn cursor_down(&mut self) {
        self.rows.down();
    }

    /// Flips item `index`. Returns the new state, or `None` when `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        if index >= self.rows.items.len() {
            return None;
        }
        let entry = self.checked.entry(index).or_insert(false);
        *entry = !*entry;
        Some(*entry)
    }

    pub fn toggle_cursor(&mut self) -> Option<(usize, bool)> {
        let index = self.rows.cursor_item()?;
        self.toggle(index).map(|checked| (index, checked))
    }

    /// Sets item `index`. Returns `true` only when the state actually changed.
    pub fn set_checked(&mut self, index: usize, checked: bool) -> bool {
        if index >= self.rows.items.len() || self.is_checked(index) == checked {
            return false;
        }
        self.checked.insert(index, checked);
        true
    }

    pub(super) fn draw(
        &self,
        id: WidgetId,
        view: &ViewState,
        region: &str,
        engine: &mut dyn Engine,
    ) -> Result<(), EngineError> {
        self.rows.draw(id, view, region, engine, |i| {
            if self.is_checked(i) {
                "[x]"
            } else {
                "[ ]"
            }
        })
    }
}

/// Single-choice list: at most one item is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioList {
    rows: Rows,
    selected: Option<usize>,
}

impl RadioList {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: Rows::new(to_items(items)),
            selected: None,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.rows.items
    }

    pub fn cursor(&self) -> usize {
        self.rows.cursor
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Replaces the labels and clears the selection.
    pub fn set_items<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.items = to_items(items);
        self.selected = None;
    }

    pub fn cursor_up(&mut self) {
        self.rows.up();
    }

    pub fn cursor_down(&mut self) {
        self.rows.down();
    }

    /// Applies the single-choice rule to item `index` and returns the resulting changes in
    /// emission order:
    ///
    /// - nothing selected: `[(index, true)]`
    /// - `index` already selected: `[(index, false)]`, selection cleared
    /// - another item selected: `[(previous, false), (index, true)]`
    ///
    /// Out-of-range indices change nothing.
    pub fn toggle(&mut self, index: usize) -> Vec<(usize, bool)> {
        if index >= self.rows.items.len() {
            return Vec::new();
        }
        match self.selected {
            Some(prev) if prev == index => {
                self.selected = None;
                vec![(index, false)]
            }
            Some(prev) => {
                self.selected = Some(index);
                vec![(prev, false), (index, true)]
            }
            None => {
                self.selected = Some(index);
                vec![(index, true)]
            }
        }
    }

    pub fn toggle_cursor(&mut self) -> Vec<(usize, bool)> {
        match self.rows.cursor_item() {
            Some(index) => self.toggle(index),
            None => Vec::new(),
        }
    }

    pub(super) fn draw(
        &self,
        id: WidgetId,
        view: &ViewState,
        region: &str,
        engine: &mut dyn Engine,
    ) -> Result<(), EngineError> {
        self.rows.draw(id, view, region, engine, |i| {
            if self.selected == Some(i) {
                "(x)"
            } else {
                "( )"
            }
        })
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/list.rs"]
mod tests;
