use tracing::trace;

use crate::core::BarId;
use crate::error::{ChartError, ChartResult};
use crate::interaction::hit_test;
use crate::render::Renderer;

use super::{BarChart, PluginEvent};

impl<R: Renderer> BarChart<R> {
    /// Handles a tap at chart coordinates and selects the bar under it.
    ///
    /// Returns the tapped bar id, or `None` when the tap missed every bar.
    pub fn tap(&mut self, x: f64, y: f64) -> ChartResult<Option<BarId>> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "tap coordinates must be finite".to_owned(),
            ));
        }

        let layout = self.row_layout()?;
        let row_start = layout.row_x;
        let row_end = layout.row_x + layout.row_width;
        if x < row_start || x > row_end {
            trace!(x, y, "tap outside bar row");
            return Ok(None);
        }

        let geometry = self.bar_geometries()?;
        let hit = hit_test(&geometry, x, y);
        match hit {
            Some(id) => {
                self.select(id)?;
            }
            None => trace!(x, y, "tap missed every bar"),
        }
        Ok(hit)
    }

    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll.offset()
    }

    #[must_use]
    pub fn max_scroll_offset(&self) -> f64 {
        self.scroll.max_offset()
    }

    /// Scrolls the bar row horizontally. Returns `true` when it moved.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        let moved = self.scroll.scroll_by(delta);
        if moved {
            self.emit_plugin_event(PluginEvent::Scrolled {
                offset: self.scroll.offset(),
            });
        }
        moved
    }
}
