use crate::core::Size;

/// Fixed measures of the goal badge and its dashed reference line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalIndicatorMetrics;

impl GoalIndicatorMetrics {
    pub const SIZE: Size = Size::new(55.0, 20.0);
    pub const CORNER_RADIUS: f64 = 5.0;
    pub const STROKE_WIDTH: f64 = 2.0;
    /// On/off lengths of the reference line dashes.
    pub const DASH_PATTERN: [f64; 2] = [10.0, 10.0];

    /// Top y of the goal badge, measured from the chart top.
    ///
    /// The goal value is converted with the same per-unit scale as the bars,
    /// then the badge is centered on that line and shifted by the reserved
    /// top band.
    #[must_use]
    pub fn indicator_y_position(
        total_content_height: f64,
        top_content_padding: f64,
        content_height_per_unit: f64,
        goal_value: f64,
    ) -> f64 {
        total_content_height - (content_height_per_unit * goal_value)
            + (top_content_padding - Self::SIZE.height / 2.0)
    }
}
