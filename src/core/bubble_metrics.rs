use crate::core::{Point, Size};

/// Fixed measures of the selection bubble shown above the selected bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubbleMetrics;

impl BubbleMetrics {
    pub const BOTTOM_PADDING: f64 = 4.0;
    pub const SIZE: Size = Size::new(40.0, 20.0);
    pub const TAIL_SIZE: Size = Size::new(10.0, 5.0);
    pub const CORNER_RADIUS: f64 = 5.0;

    /// Box + tail + bottom padding.
    #[must_use]
    pub const fn total_height() -> f64 {
        Self::SIZE.height + Self::TAIL_SIZE.height + Self::BOTTOM_PADDING
    }

    #[must_use]
    pub const fn total_width() -> f64 {
        Self::SIZE.width
    }

    /// Vertices of the downward-pointing tail whose top edge starts at `top_y`.
    #[must_use]
    pub fn tail_triangle(center_x: f64, top_y: f64) -> [Point; 3] {
        let half = Self::TAIL_SIZE.width / 2.0;
        [
            Point::new(center_x - half, top_y),
            Point::new(center_x, top_y + Self::TAIL_SIZE.height),
            Point::new(center_x + half, top_y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::BubbleMetrics;

    #[test]
    fn totals_follow_box_tail_and_padding() {
        assert_eq!(BubbleMetrics::total_height(), 29.0);
        assert_eq!(BubbleMetrics::total_width(), 40.0);
    }

    #[test]
    fn tail_points_down_from_its_top_edge() {
        let [left, tip, right] = BubbleMetrics::tail_triangle(20.0, 100.0);
        assert_eq!((left.x, left.y), (15.0, 100.0));
        assert_eq!((tip.x, tip.y), (20.0, 105.0));
        assert_eq!((right.x, right.y), (25.0, 100.0));
    }
}
