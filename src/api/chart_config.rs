use serde::{Deserialize, Serialize};

use crate::animation::AnimationConfig;
use crate::core::{BarDatum, BarId, GoalDatum, Viewport};
use crate::error::{ChartError, ChartResult};

use super::validation::{validate_bars, validate_max_value};
use super::{ChartColors, ChartTextStyles};

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist and reload chart setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub viewport: Viewport,
    pub max_value: f64,
    pub max_value_label: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub goal: Option<GoalDatum>,
    #[serde(default)]
    pub bars: Vec<BarDatum>,
    #[serde(default)]
    pub initial_selected_id: Option<BarId>,
    #[serde(default)]
    pub colors: ChartColors,
    #[serde(default)]
    pub text_styles: ChartTextStyles,
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl BarChartConfig {
    /// Creates a config without bars, goal or selection.
    #[must_use]
    pub fn new(viewport: Viewport, max_value: f64, max_value_label: impl Into<String>) -> Self {
        Self {
            viewport,
            max_value,
            max_value_label: max_value_label.into(),
            unit: String::new(),
            goal: None,
            bars: Vec::new(),
            initial_selected_id: None,
            colors: ChartColors::default(),
            text_styles: ChartTextStyles::default(),
            animation: AnimationConfig::default(),
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    #[must_use]
    pub fn with_goal(mut self, goal: GoalDatum) -> Self {
        self.goal = Some(goal);
        self
    }

    #[must_use]
    pub fn with_bars(mut self, bars: Vec<BarDatum>) -> Self {
        self.bars = bars;
        self
    }

    #[must_use]
    pub fn with_selected_id(mut self, id: BarId) -> Self {
        self.initial_selected_id = Some(id);
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: ChartColors) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_text_styles(mut self, text_styles: ChartTextStyles) -> Self {
        self.text_styles = text_styles;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Checks every caller-side precondition of the geometry core.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        validate_max_value(self.max_value)?;
        validate_bars(&self.bars)?;
        if let Some(goal) = &self.goal {
            goal.validate()?;
        }
        self.colors.validate()?;
        self.text_styles.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))
    }
}
