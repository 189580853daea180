use super::geom::{Pos, Rect};
use super::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderKind {
    Plain,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    FillRect { rect: Rect, style: Style },
    /// Apply a style to the existing buffer cells without changing their symbols.
    StyleRect { rect: Rect, style: Style },
    /// One line of text. Glyphs outside `clip` are dropped.
    Text {
        pos: Pos,
        text: String,
        style: Style,
        clip: Rect,
    },
    Border {
        rect: Rect,
        style: Style,
        kind: BorderKind,
    },
}

#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        self.cmds.push(PaintCmd::FillRect { rect, style });
    }

    pub fn style_rect(&mut self, rect: Rect, style: Style) {
        self.cmds.push(PaintCmd::StyleRect { rect, style });
    }

    pub fn text_clipped(&mut self, pos: Pos, text: impl Into<String>, style: Style, clip: Rect) {
        self.cmds.push(PaintCmd::Text {
            pos,
            text: text.into(),
            style,
            clip,
        });
    }

    pub fn border(&mut self, rect: Rect, style: Style, kind: BorderKind) {
        self.cmds.push(PaintCmd::Border { rect, style, kind });
    }
}

/// Cells written by a line of text: `(x, grapheme, width)`, left to right.
///
/// Zero-width graphemes are skipped. The first glyph that would cross the right edge of `clip`
/// ends the line, so wide glyphs are never split.
pub fn glyphs<'a>(
    pos: Pos,
    text: &'a str,
    clip: Rect,
) -> impl Iterator<Item = (u16, &'a str, u16)> + 'a {
    let visible = !clip.is_empty() && pos.y >= clip.y && pos.y < clip.bottom();
    let (left, right) = (clip.x, clip.right());
    text.graphemes(true)
        .take_while(move |_| visible)
        .filter_map(|g| {
            let w = UnicodeWidthStr::width(g) as u16;
            (w > 0).then_some((g, w))
        })
        .scan(pos.x, move |x, (g, w)| {
            let start = *x;
            if start.saturating_add(w) > right {
                return None;
            }
            *x = start.saturating_add(w);
            Some((start, g, w))
        })
        .filter(move |(x, _, _)| *x >= left)
}

/// Border cells of `rect` as `(x, y, symbol)`. Rects under 2x2 have no border.
pub fn border_cells(rect: Rect, kind: BorderKind) -> Vec<(u16, u16, &'static str)> {
    if rect.w < 2 || rect.h < 2 {
        return Vec::new();
    }
    let (tl, tr, bl, br, h, v) = match kind {
        BorderKind::Plain => ("┌", "┐", "└", "┘", "─", "│"),
    };
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    let mut cells = Vec::with_capacity(2 * (rect.w as usize + rect.h as usize));
    for x in rect.x + 1..right {
        cells.push((x, rect.y, h));
        cells.push((x, bottom, h));
    }
    for y in rect.y + 1..bottom {
        cells.push((rect.x, y, v));
        cells.push((right, y, v));
    }
    cells.extend([
        (rect.x, rect.y, tl),
        (right, rect.y, tr),
        (rect.x, bottom, bl),
        (right, bottom, br),
    ]);
    cells
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
