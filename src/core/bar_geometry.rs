use serde::{Deserialize, Serialize};

use crate::core::{BarId, BarMetrics, BubbleMetrics, CornerRadii, Point};

/// Axis-aligned rectangle in length units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.width / 2.0
    }

    #[must_use]
    pub fn center_y(self) -> f64 {
        self.y + self.height / 2.0
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// Selection bubble placement above one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubbleGeometry {
    pub body: Rect,
    pub corner_radius: f64,
    pub tail: [Point; 3],
}

impl BubbleGeometry {
    /// Places the bubble so its bottom padding ends at `bar_top`.
    ///
    /// `slide_offset` moves the whole bubble down, used by enter/exit
    /// transitions.
    #[must_use]
    pub fn above_bar(center_x: f64, bar_top: f64, slide_offset: f64) -> Self {
        let tail_bottom = bar_top - BubbleMetrics::BOTTOM_PADDING + slide_offset;
        let tail_top = tail_bottom - BubbleMetrics::TAIL_SIZE.height;
        let body = Rect::new(
            center_x - BubbleMetrics::SIZE.width / 2.0,
            tail_top - BubbleMetrics::SIZE.height,
            BubbleMetrics::SIZE.width,
            BubbleMetrics::SIZE.height,
        );
        Self {
            body,
            corner_radius: BubbleMetrics::CORNER_RADIUS,
            tail: BubbleMetrics::tail_triangle(center_x, tail_top),
        }
    }
}

/// Pixel geometry of one bar column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub id: BarId,
    pub column_x: f64,
    pub column_width: f64,
    pub bar: Rect,
    pub corner_radii: CornerRadii,
    pub name_row: Rect,
    /// Clickable area: the bar plus its name row, full column width.
    pub hit_region: Rect,
}

impl BarGeometry {
    #[must_use]
    pub fn resolve(id: BarId, column_x: f64, baseline_y: f64, bar_height: f64) -> Self {
        let column_width = BarMetrics::ROOT_WIDTH;
        let bar_height = bar_height.max(0.0);
        let bar = Rect::new(
            column_x + (column_width - BarMetrics::BAR_WIDTH) / 2.0,
            baseline_y - bar_height,
            BarMetrics::BAR_WIDTH,
            bar_height,
        );
        let name_row = Rect::new(
            column_x,
            baseline_y,
            column_width,
            BarMetrics::TEXT_ROW_HEIGHT,
        );
        let hit_region = Rect::new(
            column_x,
            bar.y,
            column_width,
            bar_height + BarMetrics::TEXT_ROW_HEIGHT,
        );

        Self {
            id,
            column_x,
            column_width,
            bar,
            corner_radii: BarMetrics::CORNER_RADII,
            name_row,
            hit_region,
        }
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.column_x + self.column_width / 2.0
    }

    #[must_use]
    pub fn bubble(&self, slide_offset: f64) -> BubbleGeometry {
        BubbleGeometry::above_bar(self.center_x(), self.bar.y, slide_offset)
    }
}
