//! Change listeners for list widgets.

use crate::ui::widgets::{ChoiceEvent, WidgetId};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type ChoiceListener = Box<dyn FnMut(&ChoiceEvent)>;

/// Per-widget listener lists, invoked in registration order.
#[derive(Default)]
pub struct Listeners {
    next: u64,
    by_widget: FxHashMap<WidgetId, Vec<(ListenerId, ChoiceListener)>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, widget: WidgetId, listener: ChoiceListener) -> ListenerId {
        let id = ListenerId(self.next);
        self.next += 1;
        self.by_widget.entry(widget).or_default().push((id, listener));
        id
    }

    /// Returns whether a listener was removed.
    pub fn remove(&mut self, widget: WidgetId, listener: ListenerId) -> bool {
        let Some(list) = self.by_widget.get_mut(&widget) else {
            return false;
        };
        let before = list.len();
        list.retain(|(id, _)| *id != listener);
        let removed = list.len() != before;
        if list.is_empty() {
            self.by_widget.remove(&widget);
        }
        removed
    }

    pub fn clear_widget(&mut self, widget: WidgetId) {
        self.by_widget.remove(&widget);
    }

    pub fn count(&self, widget: WidgetId) -> usize {
        self.by_widget.get(&widget).map_or(0, Vec::len)
    }

    pub fn emit(&mut self, event: &ChoiceEvent) {
        if let Some(list) = self.by_widget.get_mut(&event.widget) {
            for (_, listener) in list.iter_mut() {
                listener(event);
            }
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("widgets", &self.by_widget.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/listeners.rs"]
mod tests;
