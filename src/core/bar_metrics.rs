use crate::core::{BubbleMetrics, CornerRadii};

/// Fixed measures of one bar column and the value-to-height formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarMetrics;

impl BarMetrics {
    /// Column width; wide enough for the selection bubble.
    pub const ROOT_WIDTH: f64 = BubbleMetrics::total_width();
    pub const BAR_WIDTH: f64 = Self::ROOT_WIDTH / 2.0;
    pub const CORNER_RADII: CornerRadii = CornerRadii::top_bottom(5.0, 2.0);
    /// Height of the bar name row below the baseline.
    pub const TEXT_ROW_HEIGHT: f64 = 24.0;
    pub const MINIMUM_VISIBLE_HEIGHT: f64 = 2.0;

    /// Scales `value` into a bar height.
    ///
    /// A positive value whose scaled height is exactly zero is lifted to
    /// [`Self::MINIMUM_VISIBLE_HEIGHT`] so it still renders as a sliver.
    #[must_use]
    pub fn bar_height(content_height_per_unit: f64, value: f64) -> f64 {
        let computed = content_height_per_unit * value;
        if computed == 0.0 && value > 0.0 {
            Self::MINIMUM_VISIBLE_HEIGHT
        } else {
            computed
        }
    }
}
