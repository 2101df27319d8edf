// File: crates/decade-chart/src/lib.rs
// Summary: Core library entry point; exports the dataset model, scales, draw pass, view and SVG backend.

pub mod axis;
pub mod chart;
pub mod cloud;
pub mod data;
pub mod error;
pub mod format;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod ticks;
pub mod tooltip;
pub mod view;

pub use axis::{Axis, Orientation, TickDensity};
pub use chart::{build_scene, build_scene_with, RenderOptions};
pub use cloud::{ApproxMetrics, CloudLayout, CloudWord, PlacedWord, TextMetrics};
pub use data::{ChartData, ChartDimensions, ChartMeta, DecadeRecord, Margin, Year};
pub use error::{ChartError, ChartResult};
pub use scale::{ChartScales, LinearScale, TimeScale};
pub use scene::{Node, Paint, Scene};
pub use svg::to_svg;
pub use theme::Theme;
pub use ticks::{compute_ticks, Tick};
pub use tooltip::{Tooltip, TooltipContent};
pub use view::{ChartView, RenderState};
