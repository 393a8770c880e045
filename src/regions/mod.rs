//! Region conversion: polygons to cell sets and cell sets back to
//! polygon outlines.

pub mod polyfill;
pub mod to_polygon;

pub use polyfill::{max_polygon_to_cells_size, polygon_to_cells, polygon_to_cells_compact};
pub use to_polygon::cells_to_multi_polygon;
