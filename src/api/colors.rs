use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::Color;

/// Color set of one chart; selection-dependent colors are resolved through
/// the accessor methods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartColors {
    pub background: Color,
    pub on_background: Color,
    pub goal_indicator: Color,
    pub on_goal_indicator: Color,
    pub bar: Color,
    pub on_bar: Color,
    pub selected_bar: Color,
    pub on_selected_bar: Color,
    pub bar_name: Color,
    pub selected_bar_name: Color,
}

impl ChartColors {
    /// Builds a color set with a transparent background and black content.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        bar: Color,
        on_bar: Color,
        selected_bar: Color,
        on_selected_bar: Color,
        bar_name: Color,
        selected_bar_name: Color,
        goal_indicator: Color,
        on_goal_indicator: Color,
    ) -> Self {
        Self {
            background: Color::TRANSPARENT,
            on_background: Color::BLACK,
            goal_indicator,
            on_goal_indicator,
            bar,
            on_bar,
            selected_bar,
            on_selected_bar,
            bar_name,
            selected_bar_name,
        }
    }

    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    #[must_use]
    pub fn with_on_background(mut self, on_background: Color) -> Self {
        self.on_background = on_background;
        self
    }

    #[must_use]
    pub fn bar_color(&self, selected: bool) -> Color {
        if selected { self.selected_bar } else { self.bar }
    }

    #[must_use]
    pub fn on_bar_color(&self, selected: bool) -> Color {
        if selected {
            self.on_selected_bar
        } else {
            self.on_bar
        }
    }

    #[must_use]
    pub fn bar_name_color(&self, selected: bool) -> Color {
        if selected {
            self.selected_bar_name
        } else {
            self.bar_name
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        for color in [
            self.background,
            self.on_background,
            self.goal_indicator,
            self.on_goal_indicator,
            self.bar,
            self.on_bar,
            self.selected_bar,
            self.on_selected_bar,
            self.bar_name,
            self.selected_bar_name,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}

impl Default for ChartColors {
    fn default() -> Self {
        Self::new(
            Color::from_rgb_hex(0xB0BEC5),
            Color::BLACK,
            Color::from_rgb_hex(0x3F51B5),
            Color::WHITE,
            Color::from_rgb_hex(0x607D8B),
            Color::from_rgb_hex(0x3F51B5),
            Color::from_rgb_hex(0xFF9800),
            Color::BLACK,
        )
    }
}
