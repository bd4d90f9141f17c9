// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the line chart widget, its geometry and the draw target API.

pub mod error;
pub mod geometry;
pub mod layout;
pub mod render;
pub mod scale;
pub mod series;
pub mod source;
pub mod theme;
pub mod types;
pub mod view;

pub use error::{ChartError, ChartResult};
pub use geometry::{ArrowHead, PointF, Segment, ViewBounds};
pub use layout::{ChartGeometry, Label};
pub use render::{draw_chart, DrawCommand, DrawList, DrawTarget, Paint, PaintStyle};
pub use scale::Scale;
pub use series::Series;
pub use source::{DataSource, RandomSource};
pub use theme::{ChartStyle, Color};
pub use types::Insets;
pub use view::ChartView;
