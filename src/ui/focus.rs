use crate::ui::widgets::WidgetId;
use rustc_hash::FxHashSet;

/// Interactive widgets in first-drawn order, each registered once.
#[derive(Debug, Default, Clone)]
pub struct FocusChain {
    entries: Vec<WidgetId>,
    seen: FxHashSet<WidgetId>,
}

impl FocusChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` unless already present. Returns whether it was added.
    pub fn register(&mut self, id: WidgetId) -> bool {
        if !self.seen.insert(id) {
            return false;
        }
        self.entries.push(id);
        true
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.seen.contains(&id)
    }

    pub fn entries(&self) -> &[WidgetId] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops a destroyed widget.
    pub(crate) fn forget(&mut self, id: WidgetId) {
        if self.seen.remove(&id) {
            self.entries.retain(|e| *e != id);
        }
    }

    /// Entry after `current`, wrapping. Falls back to the first entry when `current` is `None`
    /// or not in the chain.
    pub fn next(&self, current: Option<WidgetId>) -> Option<WidgetId> {
        self.step(current, false)
    }

    /// Entry before `current`, wrapping. Same fallback as [`FocusChain::next`].
    pub fn prev(&self, current: Option<WidgetId>) -> Option<WidgetId> {
        self.step(current, true)
    }

    fn step(&self, current: Option<WidgetId>, backwards: bool) -> Option<WidgetId> {
        let first = *self.entries.first()?;
        let Some(idx) = current.and_then(|c| self.entries.iter().position(|e| *e == c)) else {
            return Some(first);
        };
        let len = self.entries.len();
        let next = if backwards {
            (idx + len - 1) % len
        } else {
            (idx + 1) % len
        };
        Some(self.entries[next])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/focus.rs"]
mod tests;
