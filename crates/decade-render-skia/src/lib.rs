// File: crates/decade-render-skia/src/lib.rs
// Summary: Skia raster backend crate; CPU surfaces, PNG encoding and shaped text for decade-chart scenes.

pub mod raster;
pub mod text;

pub use raster::{RasterOptions, SkiaRenderer};
pub use text::{AdvanceTable, TextShaper};
