use serde::{Deserialize, Serialize};

use crate::core::{BarMetrics, ChartMetrics, Viewport};
use crate::error::{ChartError, ChartResult};

/// Horizontal placement of bar columns inside the scrollable bar row.
///
/// Columns are spread with equal gaps before, between and after them. When
/// they do not fit, gaps collapse to zero and the row becomes scrollable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRowLayout {
    pub row_x: f64,
    pub row_width: f64,
    pub bar_count: usize,
    pub gap: f64,
    pub content_width: f64,
}

impl BarRowLayout {
    pub fn new(row_x: f64, row_width: f64, bar_count: usize) -> ChartResult<Self> {
        if !row_x.is_finite() || !row_width.is_finite() || row_width < 0.0 {
            return Err(ChartError::InvalidData(
                "bar row bounds must be finite with width >= 0".to_owned(),
            ));
        }

        let columns_width = bar_count as f64 * BarMetrics::ROOT_WIDTH;
        let gap = ((row_width - columns_width) / (bar_count as f64 + 1.0)).max(0.0);
        Ok(Self {
            row_x,
            row_width,
            bar_count,
            gap,
            content_width: columns_width.max(row_width),
        })
    }

    /// Row spanning from the end of the axis column to the right edge.
    pub fn for_viewport(viewport: Viewport, bar_count: usize) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let row_x = ChartMetrics::axis_lines_start_x();
        let row_width = (viewport.width_f64() - row_x).max(0.0);
        Self::new(row_x, row_width, bar_count)
    }

    #[must_use]
    pub fn max_scroll(self) -> f64 {
        self.content_width - self.row_width
    }

    #[must_use]
    pub fn is_scrollable(self) -> bool {
        self.max_scroll() > 0.0
    }

    #[must_use]
    pub fn clamp_scroll(self, offset: f64) -> f64 {
        if !offset.is_finite() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll())
    }

    /// Absolute left x of column `index` for the given scroll offset.
    #[must_use]
    pub fn slot_x(self, index: usize, scroll_offset: f64) -> f64 {
        let index = index as f64;
        self.row_x + self.gap * (index + 1.0) + BarMetrics::ROOT_WIDTH * index
            - self.clamp_scroll(scroll_offset)
    }

    /// Whether a column starting at `slot_x` intersects the visible row.
    #[must_use]
    pub fn is_slot_visible(self, slot_x: f64) -> bool {
        slot_x + BarMetrics::ROOT_WIDTH > self.row_x && slot_x < self.row_x + self.row_width
    }
}
