//! Optional extension hooks.
//!
//! Extensions observe the chart through events and never couple into core
//! geometry paths.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent};
