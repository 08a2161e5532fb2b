pub mod bar_geometry;
pub mod bar_metrics;
pub mod bubble_metrics;
pub mod chart_metrics;
pub mod goal_indicator_metrics;
pub mod layout;
pub mod scale;
pub mod types;

pub use bar_geometry::{BarGeometry, BubbleGeometry, Rect};
pub use bar_metrics::BarMetrics;
pub use bubble_metrics::BubbleMetrics;
pub use chart_metrics::ChartMetrics;
pub use goal_indicator_metrics::GoalIndicatorMetrics;
pub use layout::BarRowLayout;
pub use scale::{ContentScale, content_height_per_unit};
pub use types::{BarDatum, BarId, CornerRadii, GoalDatum, Point, Size, Viewport, decimal_to_f64};
