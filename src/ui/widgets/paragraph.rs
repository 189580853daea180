use super::ViewState;
use crate::ui::engine::{Engine, EngineError};
use std::borrow::Cow;

/// Plain text display. Not interactive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    text: String,
    auto_scroll: bool,
    line_wrapping: bool,
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Paragraph {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            auto_scroll: false,
            line_wrapping: true,
        }
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn auto_scroll(&self) -> bool {
        self.auto_scroll
    }

    pub fn line_wrapping(&self) -> bool {
        self.line_wrapping
    }

    pub fn set_auto_scroll(&mut self, on: bool) {
        self.auto_scroll = on;
    }

    pub fn set_line_wrapping(&mut self, on: bool) {
        self.line_wrapping = on;
    }

    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn append_line(&mut self, text: &str) {
        self.text.push_str(text);
        self.text.push('\n');
    }

    pub fn new_line(&mut self) {
        self.text.push('\n');
    }

    /// Text as it will be written into a region `width` cells wide.
    ///
    /// Wrapping targets the content columns inside the frame (`width - 1`) and never splits a
    /// word; a word longer than the line stays whole.
    pub fn wrapped(&self, width: i32) -> Cow<'_, str> {
        if !self.line_wrapping || width <= 1 {
            return Cow::Borrowed(&self.text);
        }
        let options = textwrap::Options::new((width - 1) as usize).break_words(false);
        textwrap::fill(&self.text, options).into()
    }

    pub(super) fn draw(
        &self,
        view: &ViewState,
        region: &str,
        engine: &mut dyn Engine,
    ) -> Result<(), EngineError> {
        engine.set_autoscroll(region, self.auto_scroll)?;
        let (width, _) = view.size();
        engine.write(region, &self.wrapped(width))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/paragraph.rs"]
mod tests;
