use crate::ui::core::geom::Bounds;
use crate::ui::widgets::WidgetId;

/// Height of every modal as a fraction of the terminal height.
const HEIGHT_FRACTION: f64 = 0.10;
const MIN_HEIGHT: i32 = 2;

/// A centered floating region hosting one widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    title: String,
    width_percent: u8,
    child: WidgetId,
}

/// Where a modal lands on a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalGeometry {
    pub bounds: Bounds,
    pub width: i32,
    pub height: i32,
}

impl Modal {
    /// # Panics
    ///
    /// Panics when `width_percent` exceeds 100.
    pub fn new(title: impl Into<String>, width_percent: u8, child: WidgetId) -> Self {
        assert!(
            width_percent <= 100,
            "modal width must be a percentage in 0..=100, got {width_percent}"
        );
        Self {
            title: title.into(),
            width_percent,
            child,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn width_percent(&self) -> u8 {
        self.width_percent
    }

    pub fn child(&self) -> WidgetId {
        self.child
    }

    /// Centered region for a `max_x` by `max_y` terminal.
    ///
    /// Width is the rounded percentage of `max_x`; height is 10% of `max_y`, at least 2 rows.
    /// Corners sit half the size either side of the screen center, so odd sizes lose a cell.
    pub fn geometry(&self, max_x: i32, max_y: i32) -> ModalGeometry {
        let width = (max_x as f64 * self.width_percent as f64 / 100.0).round() as i32;
        let height = ((max_y as f64 * HEIGHT_FRACTION).round() as i32).max(MIN_HEIGHT);
        let (cx, cy) = (max_x / 2, max_y / 2);
        ModalGeometry {
            bounds: Bounds::new(
                cx - width / 2,
                cy - height / 2,
                cx + width / 2,
                cy + height / 2,
            ),
            width,
            height,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/modal.rs"]
mod tests;
