use thiserror::Error;

use crate::core::BarId;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid scale: max value must be finite and > 0, got {max_value}")]
    InvalidScale { max_value: f64 },

    #[error("chart height {height} must exceed the reserved content padding {reserved}")]
    ChartTooShort { height: f64, reserved: f64 },

    #[error("duplicate bar id: {0}")]
    DuplicateBarId(BarId),

    #[error("unknown bar id: {0}")]
    UnknownBarId(BarId),
}
