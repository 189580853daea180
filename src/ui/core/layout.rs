//! Proportional band layout for containers.
//!
//! A container divides its long axis into `N` equal integer bands separated by a one-cell gutter.
//! The last child absorbs the division remainder. A container that is not nested inside another
//! container additionally pulls its far edges in by one cell so the terminal's own outer frame
//! has room.

use super::geom::Bounds;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Children side by side, splitting the width.
    #[default]
    Horizontal,
    /// Children stacked, splitting the height.
    Vertical,
}

/// Input to [`split`]: the container's own placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitArea {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Whether the container is itself a child of another container.
    pub nested: bool,
}

/// Returns one bounds per child, in child order. `count == 0` yields nothing and performs no
/// division.
pub fn split(area: SplitArea, axis: Axis, count: usize) -> Vec<Bounds> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as i32;
    let (long_origin, long_total, short_origin, short_total) = match axis {
        Axis::Horizontal => (area.x, area.width, area.y, area.height),
        Axis::Vertical => (area.y, area.height, area.x, area.width),
    };
    let band = long_total / n;
    let margin = if area.nested { 0 } else { 1 };

    let mut out = Vec::with_capacity(count);
    for i in 0..n {
        let start = long_origin + i * (band + 1);
        let mut end = start + band;
        if i == n - 1 {
            end = long_origin + long_total - margin;
        }
        let short_end = short_origin + short_total - margin;

        let bounds = match axis {
            Axis::Horizontal => Bounds::new(start, short_origin, end, short_end),
            Axis::Vertical => Bounds::new(short_origin, start, short_end, end),
        };
        out.push(bounds);
    }
    out
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/layout.rs"]
mod tests;
