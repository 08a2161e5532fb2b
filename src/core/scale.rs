use serde::{Deserialize, Serialize};

use crate::core::{BarMetrics, ChartMetrics, GoalIndicatorMetrics};
use crate::error::{ChartError, ChartResult};

/// Raw content-height-per-unit ratio.
///
/// `max_value` must be > 0; a zero max yields an infinite or NaN ratio.
/// Use [`ContentScale::new`] when the inputs are not already validated.
#[must_use]
pub fn content_height_per_unit(total_content_height: f64, max_value: f64) -> f64 {
    total_content_height / max_value
}

/// Validated vertical scale shared by bars and the goal indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentScale {
    total_content_height: f64,
    max_value: f64,
    per_unit: f64,
}

impl ContentScale {
    pub fn new(total_content_height: f64, max_value: f64) -> ChartResult<Self> {
        if !max_value.is_finite() || max_value <= 0.0 {
            return Err(ChartError::InvalidScale { max_value });
        }
        if !total_content_height.is_finite() || total_content_height < 0.0 {
            return Err(ChartError::InvalidData(
                "total content height must be finite and >= 0".to_owned(),
            ));
        }

        Ok(Self {
            total_content_height,
            max_value,
            per_unit: content_height_per_unit(total_content_height, max_value),
        })
    }

    /// Builds the scale from the full chart height, rejecting heights that
    /// leave no room between the reserved top and bottom bands.
    pub fn for_chart_height(chart_height: f64, max_value: f64) -> ChartResult<Self> {
        let reserved = ChartMetrics::reserved_height();
        if !chart_height.is_finite() || chart_height <= reserved {
            return Err(ChartError::ChartTooShort {
                height: chart_height,
                reserved,
            });
        }
        Self::new(ChartMetrics::total_content_height(chart_height), max_value)
    }

    #[must_use]
    pub fn total_content_height(self) -> f64 {
        self.total_content_height
    }

    #[must_use]
    pub fn max_value(self) -> f64 {
        self.max_value
    }

    #[must_use]
    pub fn per_unit(self) -> f64 {
        self.per_unit
    }

    #[must_use]
    pub fn bar_height(self, value: f64) -> f64 {
        BarMetrics::bar_height(self.per_unit, value)
    }

    /// Top y of the goal badge for `goal_value`.
    #[must_use]
    pub fn goal_y(self, goal_value: f64) -> f64 {
        GoalIndicatorMetrics::indicator_y_position(
            self.total_content_height,
            ChartMetrics::TOP_CONTENT_PADDING,
            self.per_unit,
            goal_value,
        )
    }
}
