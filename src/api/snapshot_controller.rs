use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{BarChart, ChartSnapshot};

impl<R: Renderer> BarChart<R> {
    /// Builds a deterministic snapshot of the current animation step.
    pub fn snapshot(&self) -> ChartResult<ChartSnapshot> {
        Ok(ChartSnapshot {
            viewport: self.viewport,
            max_value: self.scale.max_value(),
            max_value_label: self.max_value_label.clone(),
            unit: self.unit.clone(),
            selected_id: self.selection.selected(),
            scroll_offset: self.scroll.offset(),
            animating: self.is_animating(),
            bars: self.bars.values().cloned().collect(),
            goal: self.goal.clone(),
            geometry: self.geometry()?,
        })
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        let snapshot = self.snapshot()?;
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
