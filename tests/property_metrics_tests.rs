use barchart_rs::core::{BarMetrics, BarRowLayout, ChartMetrics, ContentScale};
use proptest::prelude::*;

proptest! {
    #[test]
    fn bar_height_is_non_negative_for_non_negative_inputs(
        per_unit in 0.0f64..1_000.0,
        value in 0.0f64..1_000_000.0
    ) {
        prop_assert!(BarMetrics::bar_height(per_unit, value) >= 0.0);
    }

    #[test]
    fn zero_per_unit_lifts_every_positive_value(value in 1e-9f64..1_000_000.0) {
        prop_assert_eq!(
            BarMetrics::bar_height(0.0, value),
            BarMetrics::MINIMUM_VISIBLE_HEIGHT
        );
    }

    #[test]
    fn bar_height_is_monotonic_in_value(
        per_unit in 1e-3f64..100.0,
        a in 0.0f64..10_000.0,
        b in 0.0f64..10_000.0
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            BarMetrics::bar_height(per_unit, low) <= BarMetrics::bar_height(per_unit, high)
        );
    }

    #[test]
    fn bar_height_is_deterministic(per_unit in 0.0f64..100.0, value in -1_000.0f64..1_000.0) {
        prop_assert_eq!(
            BarMetrics::bar_height(per_unit, value).to_bits(),
            BarMetrics::bar_height(per_unit, value).to_bits()
        );
    }

    #[test]
    fn total_content_height_has_unit_slope(
        a in 54.0f64..10_000.0,
        b in 54.0f64..10_000.0
    ) {
        let delta = ChartMetrics::total_content_height(a) - ChartMetrics::total_content_height(b);
        prop_assert!((delta - (a - b)).abs() <= 1e-9);
        prop_assert!(
            (ChartMetrics::total_content_height(a) - (a - ChartMetrics::reserved_height())).abs()
                <= 1e-9
        );
    }

    #[test]
    fn max_value_bar_fills_content_height(
        chart_height in 54.0f64..4_000.0,
        max_value in 1e-3f64..1e6
    ) {
        let scale = ContentScale::for_chart_height(chart_height, max_value).expect("valid scale");
        let filled = scale.bar_height(max_value);
        prop_assert!((filled - ChartMetrics::total_content_height(chart_height)).abs() <= 1e-6 * chart_height);
    }

    #[test]
    fn goal_line_meets_bar_top_of_equal_value(
        chart_height in 54.0f64..4_000.0,
        max_value in 1.0f64..1e4,
        fraction in 0.01f64..1.0
    ) {
        let scale = ContentScale::for_chart_height(chart_height, max_value).expect("valid scale");
        let value = max_value * fraction;
        let baseline = chart_height - ChartMetrics::BOTTOM_CONTENT_PADDING;
        let bar_top = baseline - scale.bar_height(value);
        let goal_center = scale.goal_y(value) + 10.0;
        prop_assert!((bar_top - goal_center).abs() <= 1e-6 * chart_height);
    }

    #[test]
    fn row_slots_never_overlap_and_stay_ordered(
        row_width in 0.0f64..3_000.0,
        bar_count in 1usize..64
    ) {
        let layout = BarRowLayout::new(59.0, row_width, bar_count).expect("valid row");
        prop_assert!(layout.gap >= 0.0);
        for index in 1..bar_count {
            let previous = layout.slot_x(index - 1, 0.0);
            let current = layout.slot_x(index, 0.0);
            prop_assert!(current - previous >= BarMetrics::ROOT_WIDTH - 1e-9);
        }
    }

    #[test]
    fn scroll_clamp_stays_in_range(
        row_width in 0.0f64..2_000.0,
        bar_count in 0usize..100,
        offset in -10_000.0f64..10_000.0
    ) {
        let layout = BarRowLayout::new(59.0, row_width, bar_count).expect("valid row");
        let clamped = layout.clamp_scroll(offset);
        prop_assert!(clamped >= 0.0);
        prop_assert!(clamped <= layout.max_scroll() + 1e-9);
    }
}
