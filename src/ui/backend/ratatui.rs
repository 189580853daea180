use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::{border_cells, glyphs, BorderKind, PaintCmd};
use crate::ui::core::style::{Color, Mod, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use std::io;

pub struct RatatuiBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
    cursor: Option<Pos>,
}

impl<'a, 'f> RatatuiBackend<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>) -> Self {
        Self { frame, cursor: None }
    }
}

impl Drop for RatatuiBackend<'_, '_> {
    fn drop(&mut self) {
        // Without this call ratatui hides the cursor for the frame.
        if let Some(pos) = self.cursor {
            self.frame.set_cursor_position((pos.x, pos.y));
        }
    }
}

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RRect {
    fn from(r: Rect) -> Self {
        RRect {
            x: r.x,
            y: r.y,
            width: r.w,
            height: r.h,
        }
    }
}

impl Backend for RatatuiBackend<'_, '_> {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        self.frame.render_widget(PaintWidget { cmds }, area.into());
    }

    fn set_cursor(&mut self, pos: Option<Pos>) {
        self.cursor = pos;
    }
}

/// Opaque terminal wrapper so the rest of the crate does not need to reference `ratatui` types.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend, Rect),
    {
        self.terminal.draw(|frame| {
            let area: Rect = frame.area().into();
            let mut backend = RatatuiBackend::new(frame);
            f(&mut backend, area);
        })?;
        Ok(())
    }
}

struct PaintWidget<'a> {
    cmds: &'a [PaintCmd],
}

impl Widget for PaintWidget<'_> {
    fn render(self, area: RRect, buf: &mut Buffer) {
        let bounds: Rect = area.into();
        for cmd in self.cmds {
            match cmd {
                PaintCmd::FillRect { rect, style } => {
                    let style = to_ratatui_style(*style);
                    for_each_cell(buf, rect.intersect(bounds), |cell| {
                        cell.set_char(' ').set_style(style);
                    });
                }
                PaintCmd::StyleRect { rect, style } => {
                    let style = to_ratatui_style(*style);
                    for_each_cell(buf, rect.intersect(bounds), |cell| {
                        cell.set_style(style);
                    });
                }
                PaintCmd::Text {
                    pos,
                    text,
                    style,
                    clip,
                } => {
                    draw_text(buf, *pos, text, *style, clip.intersect(bounds));
                }
                PaintCmd::Border { rect, style, kind } => {
                    draw_border(buf, rect.intersect(bounds), *style, *kind)
                }
            }
        }
    }
}

fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    let mut mods = RModifier::empty();
    if s.mods.contains(Mod::BOLD) {
        mods |= RModifier::BOLD;
    }
    if s.mods.contains(Mod::REVERSE) {
        mods |= RModifier::REVERSED;
    }
    out.add_modifier(mods)
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn for_each_cell(buf: &mut Buffer, rect: Rect, mut f: impl FnMut(&mut ratatui::buffer::Cell)) {
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                f(cell);
            }
        }
    }
}

fn put(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: RStyle) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol).set_style(style);
    }
}

fn draw_text(buf: &mut Buffer, pos: Pos, text: &str, style: Style, clip: Rect) {
    let style = to_ratatui_style(style);
    for (x, g, w) in glyphs(pos, text, clip) {
        put(buf, x, pos.y, g, style);
        for dx in 1..w {
            put(buf, x + dx, pos.y, " ", style);
        }
    }
}

fn draw_border(buf: &mut Buffer, rect: Rect, style: Style, kind: BorderKind) {
    let style = to_ratatui_style(style);
    for (x, y, symbol) in border_cells(rect, kind) {
        put(buf, x, y, symbol, style);
    }
}

// Rendering behaviour is covered through the headless backend in `tests/unit/ui/backend/test.rs`.
