//! Public chart facade.
//!
//! [`BarChart`] is split across controller files by concern: data, selection,
//! interaction, animation, geometry, render frame building, plugins and
//! snapshots. Every file contributes an `impl<R: Renderer> BarChart<R>` block.

mod animation_controller;
mod chart_config;
mod chart_geometry;
mod chart_snapshot;
mod colors;
mod data_controller;
mod engine;
mod interaction_controller;
mod json_contract;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod selection_controller;
mod snapshot_controller;
mod text_styles;
mod validation;

pub use chart_config::BarChartConfig;
pub use chart_geometry::{
    AxisLineGeometry, BarVisual, BubbleVisual, ChartGeometry, GoalGeometry, LabelGeometry,
};
pub use chart_snapshot::ChartSnapshot;
pub use colors::ChartColors;
pub use engine::BarChart;
pub use json_contract::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1};
pub use text_styles::{ChartTextStyles, TextStyle};
pub use validation::max_bar_value;

use crate::extensions::PluginEvent;
