use crate::core::{BarMetrics, BubbleMetrics, GoalIndicatorMetrics};

/// Layout budget of the whole chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartMetrics;

impl ChartMetrics {
    pub const BACKGROUND_CORNER_RADIUS: f64 = 8.0;
    pub const Y_AXIS_LINES_START_PADDING: f64 = 4.0;
    /// Column reserved on the left for the max-value label and goal badge.
    pub const START_Y_AXIS_SPACE: f64 = GoalIndicatorMetrics::SIZE.width;
    /// Band above the content that leaves room for the selection bubble.
    pub const TOP_CONTENT_PADDING: f64 = BubbleMetrics::total_height();
    /// Band below the content that holds the bar names.
    pub const BOTTOM_CONTENT_PADDING: f64 = BarMetrics::TEXT_ROW_HEIGHT;

    #[must_use]
    pub const fn reserved_height() -> f64 {
        Self::TOP_CONTENT_PADDING + Self::BOTTOM_CONTENT_PADDING
    }

    /// Height left for bars once the top and bottom bands are removed.
    ///
    /// Callers guarantee `chart_height > reserved_height()`.
    #[must_use]
    pub fn total_content_height(chart_height: f64) -> f64 {
        chart_height - (Self::TOP_CONTENT_PADDING + Self::BOTTOM_CONTENT_PADDING)
    }

    /// Top offset that vertically centers a label of `label_height` on the
    /// upper edge of the content area.
    #[must_use]
    pub fn top_draw_padding(label_height: f64) -> f64 {
        Self::TOP_CONTENT_PADDING - label_height / 2.0
    }

    /// X where axis lines and the bar row begin.
    #[must_use]
    pub const fn axis_lines_start_x() -> f64 {
        Self::Y_AXIS_LINES_START_PADDING + Self::START_Y_AXIS_SPACE
    }
}
