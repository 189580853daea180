use super::{Engine, EngineError};
use crate::core::{Command, Key};
use crate::ui::core::geom::{Bounds, Pos, Rect};
use crate::ui::core::painter::{BorderKind, Painter};
use crate::ui::core::style::Palette;
use rustc_hash::FxHashMap;

/// One named region: corners, text buffer and decoration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    name: String,
    bounds: Bounds,
    text: String,
    cursor: (usize, usize),
    frame: bool,
    title: Option<String>,
    highlight: bool,
    autoscroll: bool,
}

impl Region {
    fn new(name: &str, bounds: Bounds) -> Self {
        Self {
            name: name.to_string(),
            bounds,
            text: String::new(),
            cursor: (0, 0),
            frame: false,
            title: None,
            highlight: false,
            autoscroll: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    pub fn has_frame(&self) -> bool {
        self.frame
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlight
    }

    pub fn autoscroll(&self) -> bool {
        self.autoscroll
    }

    /// First buffer line shown given `rows` visible rows.
    fn origin(&self, rows: usize) -> usize {
        if rows == 0 {
            return 0;
        }
        if self.autoscroll {
            return self.text.lines().count().saturating_sub(rows);
        }
        if self.cursor.1 >= rows {
            return self.cursor.1 + 1 - rows;
        }
        0
    }
}

/// Region store and key dispatch table.
///
/// Regions stack in allocation order, so a region created later (a modal) paints over earlier
/// ones. Resizing an existing region keeps its place in the stack.
#[derive(Debug)]
pub struct Screen {
    width: u16,
    height: u16,
    regions: Vec<Region>,
    current: Option<String>,
    global: FxHashMap<Key, Command>,
    scoped: FxHashMap<String, FxHashMap<Key, Command>>,
    palette: Palette,
}

impl Screen {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            regions: Vec::new(),
            current: None,
            global: FxHashMap::default(),
            scoped: FxHashMap::default(),
            palette: Palette::default(),
        }
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    fn region_mut(&mut self, name: &str) -> Result<&mut Region, EngineError> {
        self.regions
            .iter_mut()
            .find(|r| r.name == name)
            .ok_or_else(|| EngineError::UnknownRegion(name.to_string()))
    }

    /// Emits paint commands for every region, bottom-most first.
    pub fn paint(&self, painter: &mut Painter) {
        let area = self.area();
        for region in &self.regions {
            let outer = region.bounds.outer_rect(area);
            if outer.is_empty() {
                continue;
            }
            painter.fill_rect(outer, self.palette.text);

            if region.frame && outer.w >= 2 && outer.h >= 2 {
                painter.border(outer, self.palette.border, BorderKind::Plain);
                if let Some(title) = region.title.as_deref().filter(|t| !t.is_empty()) {
                    let clip = Rect::new(outer.x.saturating_add(1), outer.y, outer.w - 2, 1);
                    painter.text_clipped(
                        Pos::new(clip.x, clip.y),
                        title,
                        self.palette.title,
                        clip,
                    );
                }
            }

            let inner = region.bounds.inner_rect(area);
            if inner.is_empty() {
                continue;
            }
            let rows = inner.h as usize;
            let origin = region.origin(rows);
            for (row, line) in region.text.lines().skip(origin).take(rows).enumerate() {
                let pos = Pos::new(inner.x, inner.y.saturating_add(row as u16));
                painter.text_clipped(pos, line, self.palette.text, inner);
            }

            if region.highlight && region.cursor.1 >= origin {
                let row = inner.row((region.cursor.1 - origin) as u16);
                if !row.is_empty() {
                    painter.style_rect(row, self.palette.highlight);
                }
            }
        }
    }
}

impl Engine for Screen {
    fn size(&self) -> (i32, i32) {
        (self.width as i32, self.height as i32)
    }

    fn set_region(&mut self, name: &str, bounds: Bounds) -> Result<(), EngineError> {
        if let Some(region) = self.regions.iter_mut().find(|r| r.name == name) {
            region.bounds = bounds;
            return Ok(());
        }
        self.regions.push(Region::new(name, bounds));
        Err(EngineError::UnknownRegion(name.to_string()))
    }

    fn delete_region(&mut self, name: &str) -> Result<(), EngineError> {
        let idx = self
            .regions
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| EngineError::UnknownRegion(name.to_string()))?;
        self.regions.remove(idx);
        self.scoped.remove(name);
        if self.current.as_deref() == Some(name) {
            self.current = None;
        }
        Ok(())
    }

    fn has_region(&self, name: &str) -> bool {
        self.region(name).is_some()
    }

    fn set_on_top(&mut self, name: &str) -> Result<(), EngineError> {
        let idx = self
            .regions
            .iter()
            .position(|r| r.name == name)
            .ok_or_else(|| EngineError::UnknownRegion(name.to_string()))?;
        let region = self.regions.remove(idx);
        self.regions.push(region);
        Ok(())
    }

    fn region_names(&self) -> Vec<String> {
        self.regions.iter().map(|r| r.name.clone()).collect()
    }

    fn clear(&mut self, name: &str) -> Result<(), EngineError> {
        self.region_mut(name)?.text.clear();
        Ok(())
    }

    fn write(&mut self, name: &str, text: &str) -> Result<(), EngineError> {
        self.region_mut(name)?.text.push_str(text);
        Ok(())
    }

    fn set_cursor(&mut self, name: &str, x: usize, y: usize) -> Result<(), EngineError> {
        self.region_mut(name)?.cursor = (x, y);
        Ok(())
    }

    fn set_frame(
        &mut self,
        name: &str,
        frame: bool,
        title: Option<&str>,
    ) -> Result<(), EngineError> {
        let region = self.region_mut(name)?;
        region.frame = frame;
        region.title = title.map(str::to_string);
        Ok(())
    }

    fn set_highlight(&mut self, name: &str, highlight: bool) -> Result<(), EngineError> {
        self.region_mut(name)?.highlight = highlight;
        Ok(())
    }

    fn set_autoscroll(&mut self, name: &str, autoscroll: bool) -> Result<(), EngineError> {
        self.region_mut(name)?.autoscroll = autoscroll;
        Ok(())
    }

    fn set_current(&mut self, name: Option<&str>) -> Result<(), EngineError> {
        match name {
            None => {
                self.current = None;
                Ok(())
            }
            Some(name) => {
                if !self.has_region(name) {
                    return Err(EngineError::UnknownRegion(name.to_string()));
                }
                self.current = Some(name.to_string());
                Ok(())
            }
        }
    }

    fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    fn bind(
        &mut self,
        scope: Option<&str>,
        key: Key,
        command: Command,
    ) -> Result<(), EngineError> {
        match scope {
            None => {
                self.global.insert(key, command);
            }
            Some(name) => {
                if !self.has_region(name) {
                    return Err(EngineError::UnknownRegion(name.to_string()));
                }
                self.scoped
                    .entry(name.to_string())
                    .or_default()
                    .insert(key, command);
            }
        }
        Ok(())
    }

    fn unbind(&mut self, scope: Option<&str>, key: Key) {
        match scope {
            None => {
                self.global.remove(&key);
            }
            Some(name) => {
                if let Some(map) = self.scoped.get_mut(name) {
                    map.remove(&key);
                }
            }
        }
    }

    fn unbind_region(&mut self, name: &str) {
        self.scoped.remove(name);
    }

    fn resolve(&self, key: Key) -> Option<Command> {
        let scoped = self
            .current
            .as_deref()
            .and_then(|name| self.scoped.get(name))
            .and_then(|map| map.get(&key));
        scoped.or_else(|| self.global.get(&key)).copied()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/engine/screen.rs"]
mod tests;
