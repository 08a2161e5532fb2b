use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use barchart_rs::api::{BarChart, BarChartConfig};
use barchart_rs::core::{BarDatum, BarId, GoalDatum, Viewport};
use barchart_rs::extensions::{ChartPlugin, PluginContext, PluginEvent};
use barchart_rs::render::NullRenderer;

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(PluginEvent, PluginContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl ChartPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: PluginEvent, context: PluginContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn event_kind(event: &PluginEvent) -> &'static str {
    match event {
        PluginEvent::BarsUpdated { .. } => "bars",
        PluginEvent::GoalUpdated { .. } => "goal",
        PluginEvent::ScaleChanged { .. } => "scale",
        PluginEvent::SelectionChanged { .. } => "selection",
        PluginEvent::Scrolled { .. } => "scroll",
        PluginEvent::AnimationsSettled => "settled",
        PluginEvent::Rendered => "rendered",
    }
}

fn chart() -> BarChart<NullRenderer> {
    let config = BarChartConfig::new(Viewport::new(99, 200), 100.0, "100").with_bars(vec![
        BarDatum::new(BarId(1), "Mon", 50.0, "50"),
        BarDatum::new(BarId(2), "Tue", 100.0, "100"),
    ]);
    BarChart::new(NullRenderer::default(), config).expect("chart init")
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let mut chart = chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    chart.select(BarId(1)).expect("select");
    chart.advance(Duration::from_millis(600));
    chart.scroll_by(20.0);
    chart.set_goal(Some(GoalDatum::new(40.0, "40"))).expect("goal");
    chart.set_max_value(200.0, "200").expect("max");
    chart
        .update_bar_value(BarId(2), 10.0, "10")
        .expect("update");
    chart.render().expect("render");

    let kinds: Vec<&str> = events
        .borrow()
        .iter()
        .map(|(event, _)| event_kind(event))
        .collect();
    assert_eq!(
        kinds,
        vec!["selection", "settled", "scroll", "goal", "scale", "bars", "rendered"]
    );
}

#[test]
fn selection_event_carries_previous_and_context() {
    let mut chart = chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");

    chart.select(BarId(1)).expect("select 1");
    chart.select(BarId(2)).expect("select 2");

    let recorded = events.borrow();
    assert_eq!(
        recorded[0].0,
        PluginEvent::SelectionChanged {
            previous: None,
            current: BarId(1)
        }
    );
    assert_eq!(
        recorded[1].0,
        PluginEvent::SelectionChanged {
            previous: Some(BarId(1)),
            current: BarId(2)
        }
    );
    let context = recorded[1].1;
    assert_eq!(context.selected_id, Some(BarId(2)));
    assert_eq!(context.bars_len, 2);
    assert_eq!(context.max_value, 100.0);
    assert!(context.animating);
}

#[test]
fn duplicate_or_empty_plugin_ids_are_rejected() {
    let mut chart = chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_plugin(Box::new(RecordingPlugin::new("a", events.clone())))
        .expect("register");
    assert!(
        chart
            .register_plugin(Box::new(RecordingPlugin::new("a", events.clone())))
            .is_err()
    );
    assert!(
        chart
            .register_plugin(Box::new(RecordingPlugin::new("", events)))
            .is_err()
    );
    assert_eq!(chart.plugin_count(), 1);
}

#[test]
fn unregistered_plugin_stops_receiving_events() {
    let mut chart = chart();
    let events = Rc::new(RefCell::new(Vec::new()));
    chart
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register");
    assert!(chart.has_plugin("recorder"));
    assert!(chart.unregister_plugin("recorder"));
    assert!(!chart.unregister_plugin("recorder"));

    chart.render().expect("render");
    assert!(events.borrow().is_empty());
}
