use std::time::Duration;

use approx::assert_relative_eq;
use barchart_rs::animation::{AnimationConfig, Animated, Easing, TweenSpec};
use barchart_rs::api::{BarChart, BarChartConfig};
use barchart_rs::core::{BarDatum, BarId, Viewport};
use barchart_rs::render::NullRenderer;

fn chart_with(animation: AnimationConfig) -> BarChart<NullRenderer> {
    let config = BarChartConfig::new(Viewport::new(259, 200), 100.0, "100")
        .with_bars(vec![
            BarDatum::new(BarId(1), "Mon", 50.0, "50"),
            BarDatum::new(BarId(2), "Tue", 20.0, "20"),
        ])
        .with_animation(animation);
    BarChart::new(NullRenderer::default(), config).expect("chart init")
}

fn bar_height(chart: &BarChart<NullRenderer>, id: BarId) -> f64 {
    chart
        .bar_geometries()
        .expect("geometries")
        .into_iter()
        .find(|geometry| geometry.id == id)
        .map(|geometry| geometry.bar.height)
        .expect("bar present")
}

#[test]
fn initial_bars_are_settled() {
    let chart = chart_with(AnimationConfig::default());
    assert!(!chart.is_animating());
    assert_relative_eq!(bar_height(&chart, BarId(1)), 73.5);
}

#[test]
fn value_update_tweens_height_over_500ms() {
    let mut chart = chart_with(AnimationConfig::default());
    chart
        .update_bar_value(BarId(1), 100.0, "100")
        .expect("update");
    assert!(chart.is_animating());
    assert_relative_eq!(bar_height(&chart, BarId(1)), 73.5);

    assert!(chart.advance(Duration::from_millis(250)));
    let midway = bar_height(&chart, BarId(1));
    assert!(midway > 73.5 && midway < 147.0, "midway height {midway}");

    assert!(!chart.advance(Duration::from_millis(250)));
    assert_relative_eq!(bar_height(&chart, BarId(1)), 147.0);
    assert!(!chart.is_animating());
}

#[test]
fn max_value_change_rescales_every_bar_with_animation() {
    let mut chart = chart_with(AnimationConfig::default());
    chart.set_max_value(50.0, "50").expect("rescale");
    assert!(chart.is_animating());
    chart.finish_animations();
    assert_relative_eq!(bar_height(&chart, BarId(1)), 147.0);
    assert_relative_eq!(bar_height(&chart, BarId(2)), 58.8);
    assert_eq!(chart.max_value_label(), "50");
}

#[test]
fn new_bars_appear_at_rest() {
    let mut chart = chart_with(AnimationConfig::default());
    chart
        .set_bars(vec![
            BarDatum::new(BarId(1), "Mon", 50.0, "50"),
            BarDatum::new(BarId(9), "Sun", 100.0, "100"),
        ])
        .expect("set bars");
    assert!(!chart.is_animating());
    assert_relative_eq!(bar_height(&chart, BarId(9)), 147.0);
}

#[test]
fn selection_fades_bubble_in_and_out() {
    let mut chart = chart_with(AnimationConfig::default());
    chart.select(BarId(1)).expect("select");
    assert!(chart.is_animating());

    let geometry = chart.geometry().expect("geometry");
    assert!(geometry.bars[0].bubble.is_none(), "bubble starts hidden");

    chart.advance(Duration::from_millis(250));
    let geometry = chart.geometry().expect("geometry");
    let bubble = geometry.bars[0].bubble.as_ref().expect("bubble entering");
    assert!(bubble.alpha > 0.0 && bubble.alpha < 1.0);

    chart.advance(Duration::from_millis(250));
    let geometry = chart.geometry().expect("geometry");
    let bubble = geometry.bars[0].bubble.as_ref().expect("bubble shown");
    assert_relative_eq!(bubble.alpha, 1.0);
    assert_relative_eq!(bubble.geometry.body.bottom(), 102.5 - 4.0 - 5.0);

    chart.select(BarId(2)).expect("select other");
    chart.advance(Duration::from_millis(200));
    let geometry = chart.geometry().expect("geometry");
    assert!(geometry.bars[0].bubble.is_none(), "exit fade is 200ms");
    assert!(geometry.bars[1].bubble.is_some());
}

#[test]
fn selection_tweens_bar_color() {
    let mut chart = chart_with(AnimationConfig::default());
    let colors = chart.colors();
    chart.select(BarId(2)).expect("select");

    chart.advance(Duration::from_millis(150));
    let geometry = chart.geometry().expect("geometry");
    assert_ne!(geometry.bars[1].fill_color, colors.bar);
    assert_ne!(geometry.bars[1].fill_color, colors.selected_bar);

    chart.advance(Duration::from_millis(150));
    let geometry = chart.geometry().expect("geometry");
    assert_eq!(geometry.bars[1].fill_color, colors.selected_bar);
}

#[test]
fn disabled_animations_snap() {
    let mut chart = chart_with(AnimationConfig::disabled());
    chart
        .update_bar_value(BarId(2), 100.0, "100")
        .expect("update");
    chart.select(BarId(2)).expect("select");
    assert!(!chart.is_animating());
    assert_relative_eq!(bar_height(&chart, BarId(2)), 147.0);
    let geometry = chart.geometry().expect("geometry");
    assert_relative_eq!(geometry.bars[1].bubble.as_ref().expect("bubble").alpha, 1.0);
}

#[test]
fn disabling_animations_finishes_running_ones() {
    let mut chart = chart_with(AnimationConfig::default());
    chart
        .update_bar_value(BarId(1), 0.0, "0")
        .expect("update");
    chart.set_animation_config(AnimationConfig::disabled());
    assert!(!chart.is_animating());
    assert_eq!(bar_height(&chart, BarId(1)), 0.0);
}

#[test]
fn retargeting_mid_tween_starts_from_current_value() {
    let spec = TweenSpec::new(Duration::from_millis(100), Easing::Linear);
    let mut value = Animated::new(0.0);
    value.animate_to(10.0, spec);
    value.step(Duration::from_millis(50));
    assert_relative_eq!(value.value(), 5.0);

    value.animate_to(0.0, spec);
    value.step(Duration::from_millis(50));
    assert_relative_eq!(value.value(), 2.5);
}

#[test]
fn fast_out_slow_in_leads_linear_midway() {
    let eased = Easing::FastOutSlowIn.apply(0.5);
    assert!(eased > 0.5);
    assert_relative_eq!(Easing::FastOutSlowIn.apply(0.0), 0.0);
    assert_relative_eq!(Easing::FastOutSlowIn.apply(1.0), 1.0);
}
