use crate::render::FontWeight;

/// Measured size of one single-line label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

/// Measures labels so layout can center them before drawing.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64, font_weight: FontWeight) -> TextExtent;
}

/// Deterministic, backend-independent estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTextMeasurer;

impl EstimatedTextMeasurer {
    const LINE_HEIGHT_FACTOR: f64 = 1.2;
    const BOLD_WIDTH_FACTOR: f64 = 1.06;
}

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure(&self, text: &str, font_size_px: f64, font_weight: FontWeight) -> TextExtent {
        let units = text.chars().fold(0.0, |acc, ch| {
            acc + match ch {
                '0'..='9' => 0.62,
                '.' | ',' => 0.34,
                '-' | '+' | '%' => 0.42,
                ' ' => 0.33,
                _ => 0.58,
            }
        });
        let weight_factor = match font_weight {
            FontWeight::Normal => 1.0,
            FontWeight::SemiBold | FontWeight::Bold => Self::BOLD_WIDTH_FACTOR,
        };
        TextExtent {
            width: units * font_size_px * weight_factor,
            height: font_size_px * Self::LINE_HEIGHT_FACTOR,
        }
    }
}
