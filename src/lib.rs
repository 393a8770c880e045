#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)] // pervasive in the fixed-width digit arithmetic
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)] // grid constants read better unseparated
#![allow(clippy::similar_names)]

//! `hexsphere` is a hierarchical hexagonal discrete global grid.
//!
//! The sphere is partitioned into 122 base cells (110 hexagons and 12
//! pentagons) projected from an icosahedron, each subdivided by aperture
//! 7 through sixteen resolutions. Every cell, directed edge and
//! topological vertex packs into a 64-bit [`CellIndex`].
//!
//! The crate provides point indexing and boundaries, hierarchy
//! navigation, grid traversal (disks, rings, distances, paths), cell-set
//! compaction, polygon rasterization and its inverse, and the directed
//! edge / vertex subsystem. All operations are pure functions over
//! immutable static tables and are freely usable across threads.

pub mod base_cells;
pub mod compaction;
pub mod constants;
pub mod coords;
pub mod edges;
pub mod error;
pub mod hierarchy;
pub mod index;
pub mod indexing;
pub mod inspection;
pub mod iterators;
pub mod latlng;
pub mod local_ij;
pub mod math;
pub mod measures;
pub mod polygon;
pub mod regions;
pub mod traversal;
pub mod types;
pub mod vertexes;

pub use constants::MAX_BOUNDARY_VERTS;
pub use coords::{CoordIJK, Digit, FaceIJK};
pub use error::GridError;
pub use index::{
  cell_to_string, is_valid_cell, string_to_cell, CellIndex, CELL_MODE, DIRECTED_EDGE_MODE, NULL_CELL,
  UNDIRECTED_EDGE_MODE, VERTEX_MODE,
};
pub use math::{Vec2d, Vec3d};
pub use types::{
  BBox, CellBoundary, ContainmentMode, CoordIJ, GeoLoop, GeoPolygon, LatLng, LoopPolygon, MultiPolygon,
};

pub use latlng::{
  degs_to_rads, get_hexagon_area_avg_km2, get_hexagon_area_avg_m2, get_hexagon_edge_length_avg_km,
  get_hexagon_edge_length_avg_m, great_circle_distance_km, great_circle_distance_m,
  great_circle_distance_rads, rads_to_degs,
};

pub use indexing::{cell_to_boundary, cell_to_latlng, latlng_to_cell};

pub use inspection::{
  get_base_cell_number, get_icosahedron_faces, get_num_cells, get_pentagons, get_res0_cells,
  is_pentagon, is_res_class_iii, max_face_count, pentagon_count, res0_cell_count,
};

pub use hierarchy::{
  cell_to_center_child, cell_to_child_pos, cell_to_children, cell_to_children_size, cell_to_parent,
  child_pos_to_cell,
};
pub use iterators::ChildIter;

pub use compaction::{compact_cells, uncompact_cells, uncompact_cells_size};

pub use traversal::{
  are_neighbor_cells, grid_disk, grid_disk_cells, grid_disk_distances, grid_disk_distances_unsafe,
  grid_disk_unsafe, grid_distance, grid_path_cells, grid_path_cells_size, grid_ring, grid_ring_unsafe,
  max_grid_disk_size,
};
pub use traversal::disk::{grid_disk_distances_cells, grid_disk_distances_safe};

pub use local_ij::{cell_to_local_ij, local_ij_to_cell};

pub use regions::{
  cells_to_multi_polygon, max_polygon_to_cells_size, polygon_to_cells, polygon_to_cells_compact,
};

pub use edges::{
  cells_to_directed_edge, directed_edge_to_boundary, directed_edge_to_cells, exact_edge_length_km,
  exact_edge_length_m, exact_edge_length_rads, get_directed_edge_destination, get_directed_edge_origin,
  is_valid_directed_edge, origin_to_directed_edges,
};

pub use vertexes::{cell_to_vertex, cell_to_vertexes, is_valid_vertex, vertex_to_latlng};

pub use measures::{cell_area_km2, cell_area_m2, cell_area_rads2};
