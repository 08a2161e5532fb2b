use serde::{Deserialize, Serialize};

use crate::core::{BarId, Viewport};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub max_value: f64,
    pub content_height_per_unit: f64,
    pub bars_len: usize,
    pub selected_id: Option<BarId>,
    pub scroll_offset: f64,
    pub animating: bool,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    BarsUpdated {
        bars_len: usize,
    },
    GoalUpdated {
        has_goal: bool,
    },
    ScaleChanged {
        content_height_per_unit: f64,
    },
    SelectionChanged {
        previous: Option<BarId>,
        current: BarId,
    },
    Scrolled {
        offset: f64,
    },
    AnimationsSettled,
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read chart context without mutating chart
/// internals directly.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
