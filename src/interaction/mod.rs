use serde::{Deserialize, Serialize};

use crate::core::{BarGeometry, BarId};

/// Currently selected bar; at most one at a time.
///
/// The selected id may reference no bar in the chart (for example an initial
/// id supplied before data arrives); then nothing is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SelectionState {
    selected: Option<BarId>,
}

impl SelectionState {
    #[must_use]
    pub fn new(selected: Option<BarId>) -> Self {
        Self { selected }
    }

    #[must_use]
    pub fn selected(self) -> Option<BarId> {
        self.selected
    }

    #[must_use]
    pub fn is_selected(self, id: BarId) -> bool {
        self.selected == Some(id)
    }

    /// Selects `id`; returns the previous selection when it changed.
    pub fn select(&mut self, id: BarId) -> Option<Option<BarId>> {
        if self.selected == Some(id) {
            return None;
        }
        Some(self.selected.replace(id))
    }
}

/// Horizontal scroll position of the bar row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ScrollState {
    offset: f64,
    max_offset: f64,
}

impl ScrollState {
    #[must_use]
    pub fn offset(self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn max_offset(self) -> f64 {
        self.max_offset
    }

    /// Updates the scroll range, keeping the offset inside it.
    pub fn set_max_offset(&mut self, max_offset: f64) {
        self.max_offset = if max_offset.is_finite() {
            max_offset.max(0.0)
        } else {
            0.0
        };
        self.offset = self.offset.clamp(0.0, self.max_offset);
    }

    /// Scrolls by `delta` (positive reveals bars to the right).
    /// Returns `true` when the offset moved.
    pub fn scroll_by(&mut self, delta: f64) -> bool {
        if !delta.is_finite() {
            return false;
        }
        let next = (self.offset + delta).clamp(0.0, self.max_offset);
        let moved = next != self.offset;
        self.offset = next;
        moved
    }
}

/// First bar whose clickable area contains the point.
#[must_use]
pub fn hit_test(bars: &[BarGeometry], x: f64, y: f64) -> Option<BarId> {
    bars.iter()
        .find(|bar| bar.hit_region.contains(x, y))
        .map(|bar| bar.id)
}
