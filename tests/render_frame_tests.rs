use approx::assert_relative_eq;
use barchart_rs::api::{BarChart, BarChartConfig, ChartColors};
use barchart_rs::core::{BarDatum, BarId, GoalDatum, Viewport};
use barchart_rs::render::{Color, FrameLayerKind, LineStrokeStyle, NullRenderer, TextHAlign};

fn bars() -> Vec<BarDatum> {
    vec![
        BarDatum::new(BarId(1), "Mon", 50.0, "50"),
        BarDatum::new(BarId(2), "Tue", 100.0, "100"),
        BarDatum::new(BarId(3), "Wed", 0.0, "0"),
    ]
}

fn plain_config() -> BarChartConfig {
    BarChartConfig::new(Viewport::new(259, 200), 100.0, "100").with_bars(bars())
}

#[test]
fn plain_chart_frame_has_axes_bars_and_labels() {
    let chart = BarChart::new(NullRenderer::default(), plain_config()).expect("chart init");
    let frame = chart.build_render_frame().expect("frame");
    frame.validate().expect("valid frame");

    assert_eq!(frame.lines().count(), 2, "top and bottom axis lines");
    assert_eq!(frame.rects().count(), 2, "zero-height bar is skipped");
    assert_eq!(frame.triangles().count(), 0);
    assert_eq!(frame.texts().count(), 4, "max value label + three names");
}

#[test]
fn axis_lines_start_after_label_column() {
    let chart = BarChart::new(NullRenderer::default(), plain_config()).expect("chart init");
    let frame = chart.build_render_frame().expect("frame");
    let lines: Vec<_> = frame.lines().collect();
    for line in &lines {
        assert_eq!(line.x1, 59.0);
        assert_eq!(line.x2, 259.0);
    }
    assert_eq!(lines[1].y1, 176.0);
    assert_relative_eq!(lines[0].y1, 29.0, epsilon = 1e-9);
}

#[test]
fn bar_rects_are_bottom_aligned_and_rounded() {
    let chart = BarChart::new(NullRenderer::default(), plain_config()).expect("chart init");
    let frame = chart.build_render_frame().expect("frame");
    let tallest = *frame.rects().nth(1).expect("tuesday bar");
    assert_eq!(tallest.x, 149.0);
    assert_eq!(tallest.width, 20.0);
    assert_relative_eq!(tallest.y + tallest.height, 176.0);
    assert_relative_eq!(tallest.height, 147.0);
    assert_eq!(tallest.corner_radii.top_left, 5.0);
    assert_eq!(tallest.corner_radii.bottom_left, 2.0);
}

#[test]
fn bar_names_are_centered_under_columns() {
    let chart = BarChart::new(NullRenderer::default(), plain_config()).expect("chart init");
    let frame = chart.build_render_frame().expect("frame");
    let monday = frame
        .texts()
        .find(|text| text.text == "Mon")
        .expect("monday label");
    assert_eq!(monday.h_align, TextHAlign::Center);
    assert_relative_eq!(monday.x, 99.0);
    assert_eq!(monday.y, 176.0);
    assert_eq!(monday.font_size_px, 13.0);
}

#[test]
fn goal_adds_badge_dashed_line_and_label() {
    let config = plain_config().with_goal(GoalDatum::new(50.0, "Goal"));
    let chart = BarChart::new(NullRenderer::default(), config).expect("chart init");
    let frame = chart.build_render_frame().expect("frame");

    assert_eq!(frame.lines().count(), 3);
    let goal_line = frame.lines().nth(2).expect("goal line");
    assert_eq!(goal_line.stroke_width, 2.0);
    assert_eq!(goal_line.stroke_style, LineStrokeStyle::dashed(&[10.0, 10.0]));
    assert_eq!(goal_line.x1, 55.0);
    // Goal line meets the top of the 50-valued bar.
    assert_relative_eq!(goal_line.y1, 176.0 - 73.5, epsilon = 1e-9);

    let guides = frame.layer(FrameLayerKind::Guides).expect("guides layer");
    let badge = guides.rects.last().expect("badge rect");
    assert_eq!(badge.width, 55.0);
    assert_eq!(badge.height, 20.0);
    assert_eq!(badge.corner_radii.top_left, 5.0);
    assert!(guides.texts.iter().any(|text| text.text == "Goal"));
}

#[test]
fn goal_line_is_painted_before_the_bar_that_covers_it() {
    let config = plain_config().with_goal(GoalDatum::new(50.0, "Goal"));
    let chart = BarChart::new(NullRenderer::default(), config).expect("chart init");
    let frame = chart.build_render_frame().expect("frame");

    let layer_index = |kind| {
        frame
            .layers
            .iter()
            .position(|layer| layer.kind == kind)
            .expect("layer present")
    };
    let guides_index = layer_index(FrameLayerKind::Guides);
    let bars_index = layer_index(FrameLayerKind::Bars);
    assert!(guides_index < bars_index);

    let goal_line = frame.layers[guides_index]
        .lines
        .iter()
        .find(|line| line.stroke_style != LineStrokeStyle::Solid)
        .expect("dashed goal line");
    let tallest = frame.layers[bars_index]
        .rects
        .iter()
        .find(|rect| rect.x == 149.0)
        .expect("tuesday bar");
    // The dashed line crosses the bar interior, so the bar must paint over it.
    assert!(goal_line.x1 < tallest.x && goal_line.x2 > tallest.x + tallest.width);
    assert!(goal_line.y1 > tallest.y && goal_line.y1 < tallest.y + tallest.height);

    assert!(frame.layers[bars_index].lines.is_empty());
}

#[test]
fn selected_bar_draws_bubble_with_tail() {
    let config = plain_config().with_selected_id(BarId(2));
    let chart = BarChart::new(NullRenderer::default(), config).expect("chart init");
    let frame = chart.build_render_frame().expect("frame");

    assert_eq!(frame.triangles().count(), 1);
    assert_eq!(frame.rects().count(), 3);
    let bubble = *frame.rects().nth(2).expect("bubble body");
    assert_eq!(bubble.width, 40.0);
    assert_eq!(bubble.height, 20.0);
    assert_eq!(bubble.x, 139.0);
    assert_relative_eq!(bubble.y + 20.0 + 5.0 + 4.0, 29.0, epsilon = 1e-9);

    let tail = *frame.triangles().next().expect("bubble tail");
    assert_relative_eq!(tail.points[1].x, 159.0);
    assert!(frame.texts().any(|text| text.text == "100" && text.font_size_px == 10.0));
    assert_eq!(bubble.fill_color, chart.colors().selected_bar);
}

#[test]
fn unit_label_is_drawn_when_present() {
    let config = plain_config().with_unit("km");
    let chart = BarChart::new(NullRenderer::default(), config).expect("chart init");
    let frame = chart.build_render_frame().expect("frame");
    let unit = frame
        .texts()
        .find(|text| text.text == "km")
        .expect("unit label");
    assert_relative_eq!(unit.x, 29.5);
    assert_eq!(unit.y, 176.0);
}

#[test]
fn opaque_background_is_drawn_with_rounded_corners() {
    let colors = ChartColors::default().with_background(Color::WHITE);
    let chart = BarChart::new(
        NullRenderer::default(),
        plain_config().with_colors(colors),
    )
    .expect("chart init");
    let frame = chart.build_render_frame().expect("frame");
    let background = *frame.rects().next().expect("background rect");
    assert_eq!(background.width, 259.0);
    assert_eq!(background.height, 200.0);
    assert_eq!(background.corner_radii.top_right, 8.0);
}

#[test]
fn scrolled_out_bars_are_culled() {
    let config = BarChartConfig::new(Viewport::new(99, 200), 100.0, "100").with_bars(bars());
    let mut chart = BarChart::new(NullRenderer::default(), config).expect("chart init");
    let frame = chart.build_render_frame().expect("frame");
    assert_eq!(frame.rects().count(), 1);
    assert!(frame.texts().any(|text| text.text == "Mon"));
    assert!(!frame.texts().any(|text| text.text == "Tue"));

    chart.scroll_by(40.0);
    let frame = chart.build_render_frame().expect("frame");
    assert!(frame.texts().any(|text| text.text == "Tue"));
    assert!(!frame.texts().any(|text| text.text == "Mon"));
}

#[test]
fn render_passes_validated_frame_to_renderer() {
    let mut chart = BarChart::new(NullRenderer::default(), plain_config()).expect("chart init");
    chart.render().expect("render");
    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_line_count, 2);
    assert_eq!(renderer.last_text_count, 4);
}
