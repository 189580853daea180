#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// A rectangle of screen cells, `x..x+w` by `y..y+h`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn contains(&self, p: Pos) -> bool {
        if self.is_empty() {
            return false;
        }
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    pub fn intersect(self, other: Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }

    /// The row `dy` cells below the top, or an empty rect when out of range.
    pub fn row(self, dy: u16) -> Rect {
        if dy >= self.h {
            return Rect::new(self.x, self.bottom(), self.w, 0);
        }
        Rect::new(self.x, self.y.saturating_add(dy), self.w, 1)
    }
}

/// Engine region corners.
///
/// `x0,y0` and `x1,y1` are the frame corners, both inclusive: a region drawn with a frame puts
/// its border on those rows/columns and its content strictly inside. Coordinates are signed
/// because layouts of tiny terminals may legitimately produce inverted or off-screen corners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Bounds of a region at `(x, y)` spanning `width` by `height` cells of extent.
    pub const fn from_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    /// Content area (inside the frame columns/rows), clipped to `screen`.
    pub fn inner_rect(&self, screen: Rect) -> Rect {
        clip(self.x0 + 1, self.y0 + 1, self.x1 - 1, self.y1 - 1, screen)
    }

    /// Full area including the frame corners, clipped to `screen`.
    pub fn outer_rect(&self, screen: Rect) -> Rect {
        clip(self.x0, self.y0, self.x1, self.y1, screen)
    }
}

// Inclusive corners -> clipped half-open cell rect.
fn clip(x0: i32, y0: i32, x1: i32, y1: i32, screen: Rect) -> Rect {
    let left = x0.max(screen.x as i32);
    let top = y0.max(screen.y as i32);
    let right = (x1 + 1).min(screen.right() as i32);
    let bottom = (y1 + 1).min(screen.bottom() as i32);
    if right <= left || bottom <= top {
        let x = left.clamp(0, u16::MAX as i32) as u16;
        let y = top.clamp(0, u16::MAX as i32) as u16;
        return Rect::new(x, y, 0, 0);
    }
    Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    )
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/geom.rs"]
mod tests;
