use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::FontWeight;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size_px: f64,
    #[serde(default)]
    pub weight: FontWeight,
}

impl TextStyle {
    #[must_use]
    pub const fn new(font_size_px: f64, weight: FontWeight) -> Self {
        Self {
            font_size_px,
            weight,
        }
    }

    #[must_use]
    pub const fn regular(font_size_px: f64) -> Self {
        Self::new(font_size_px, FontWeight::Normal)
    }

    fn validate(self, role: &str) -> ChartResult<()> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{role} font size must be finite and > 0"
            )));
        }
        Ok(())
    }
}

/// Independent text styles for each chart label role.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartTextStyles {
    pub bubble: TextStyle,
    pub bar_name: TextStyle,
    pub unit: TextStyle,
    pub goal: TextStyle,
    pub max_value: TextStyle,
}

impl Default for ChartTextStyles {
    fn default() -> Self {
        Self {
            bubble: TextStyle::regular(10.0),
            bar_name: TextStyle::regular(13.0),
            unit: TextStyle::new(11.0, FontWeight::SemiBold),
            goal: TextStyle::regular(11.0),
            max_value: TextStyle::new(12.0, FontWeight::Bold),
        }
    }
}

impl ChartTextStyles {
    pub fn validate(&self) -> ChartResult<()> {
        self.bubble.validate("bubble")?;
        self.bar_name.validate("bar name")?;
        self.unit.validate("unit")?;
        self.goal.validate("goal")?;
        self.max_value.validate("max value")
    }
}
