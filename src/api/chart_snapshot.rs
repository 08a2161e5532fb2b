use serde::{Deserialize, Serialize};

use crate::core::{BarDatum, BarId, GoalDatum, Viewport};

use super::ChartGeometry;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub max_value: f64,
    pub max_value_label: String,
    pub unit: String,
    pub selected_id: Option<BarId>,
    pub scroll_offset: f64,
    pub animating: bool,
    pub bars: Vec<BarDatum>,
    pub goal: Option<GoalDatum>,
    pub geometry: ChartGeometry,
}
