use super::WidgetId;
use crate::ui::core::layout::Axis;

/// Ordered children split into equal bands along one axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    axis: Axis,
    children: Vec<WidgetId>,
    border: bool,
}

impl Container {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            children: Vec::new(),
            border: false,
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    pub fn border(&self) -> bool {
        self.border
    }

    pub fn set_border(&mut self, border: bool) {
        self.border = border;
    }

    pub fn push(&mut self, child: WidgetId) {
        self.children.push(child);
    }

    /// Removes every occurrence of `child`. Returns whether anything was removed.
    pub fn remove(&mut self, child: WidgetId) -> bool {
        let before = self.children.len();
        self.children.retain(|c| *c != child);
        before != self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/container.rs"]
mod tests;
