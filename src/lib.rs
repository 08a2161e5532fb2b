//! barchart-rs: animated bar chart with a pure geometry core.
//!
//! The `core` module holds the fixed metrics and the value-to-pixel math
//! shared by every chart element. `api::BarChart` layers data, selection,
//! scrolling and deterministic animations on top and hands materialized
//! frames to a `render::Renderer`.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{BarChart, BarChartConfig};
pub use error::{ChartError, ChartResult};
