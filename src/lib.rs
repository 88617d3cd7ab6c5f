//! Point sets for shape drawing
//!
//! [`PointSet`] is the core of the crate: an unordered, deduplicated collection of
//! [`Point`]s with O(1) membership tests. The remaining modules build point sets from
//! shapes and images and turn them back into drawable strokes.

pub mod drawing;
pub mod image_processing;
pub mod impls;
pub mod models;
pub mod settings;
pub mod utils;

pub use drawing::components::{find_connected_components, trace_strokes};
pub use drawing::shapes::{circle, line, rasterize_all, rectangle, Shape};
pub use image_processing::conversion::{
    dark_pixels, extract_points, load_dark_pixels, otsu_threshold,
};
pub use models::{Point, PointSet};
pub use settings::{ThresholdMode, TraceSettings};
