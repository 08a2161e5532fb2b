use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    #[must_use]
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }
}

/// Width/height pair in length units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Per-corner rounding radii, clockwise from top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    #[must_use]
    pub const fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    #[must_use]
    pub const fn top_bottom(top: f64, bottom: f64) -> Self {
        Self {
            top_left: top,
            top_right: top,
            bottom_right: bottom,
            bottom_left: bottom,
        }
    }

    #[must_use]
    pub fn is_square(self) -> bool {
        self.top_left <= 0.0
            && self.top_right <= 0.0
            && self.bottom_right <= 0.0
            && self.bottom_left <= 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        for (corner, value) in [
            ("top_left", self.top_left),
            ("top_right", self.top_right),
            ("bottom_right", self.bottom_right),
            ("bottom_left", self.bottom_left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "corner radius `{corner}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Identifier of one bar; unique within a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BarId(pub i32);

impl BarId {
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl fmt::Display for BarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One bar of the chart: raw value plus its pre-formatted display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    pub id: BarId,
    pub name: String,
    pub value: f64,
    pub display_value: String,
}

impl BarDatum {
    #[must_use]
    pub fn new(
        id: BarId,
        name: impl Into<String>,
        value: f64,
        display_value: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            display_value: display_value.into(),
        }
    }

    pub fn from_decimal(
        id: BarId,
        name: impl Into<String>,
        value: Decimal,
        display_value: impl Into<String>,
    ) -> ChartResult<Self> {
        Ok(Self::new(
            id,
            name,
            decimal_to_f64(value, "bar value")?,
            display_value,
        ))
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "bar `{}` value must be finite",
                self.id
            )));
        }
        Ok(())
    }
}

/// Target value drawn as a dashed reference line with a badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalDatum {
    pub value: f64,
    pub display_value: String,
}

impl GoalDatum {
    #[must_use]
    pub fn new(value: f64, display_value: impl Into<String>) -> Self {
        Self {
            value,
            display_value: display_value.into(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.value.is_finite() {
            return Err(ChartError::InvalidData(
                "goal value must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}
