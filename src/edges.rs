//! Directed edges: an (origin, destination) pair of adjacent cells packed
//! into one index.
//!
//! The edge reuses the origin cell's bits, switches the mode field and
//! stores the traversal digit toward the destination in the reserved
//! bits.

use crate::coords::Digit;
use crate::error::GridError;
use crate::index::{is_valid_cell, CellIndex, CELL_MODE, DIRECTED_EDGE_MODE};
use crate::indexing::cell_to_face_ijk;
use crate::inspection::is_pentagon;
use crate::traversal::neighbors::{direction_for_neighbor, neighbor_rotations};
use crate::types::CellBoundary;
use crate::vertexes::vertex_num_for_direction;

/// The directed edge from `origin` to a grid-adjacent `destination`.
/// Fails with `NotNeighbors` when the cells do not share an edge.
pub fn cells_to_directed_edge(origin: CellIndex, destination: CellIndex) -> Result<CellIndex, GridError> {
  if !is_valid_cell(origin) || !is_valid_cell(destination) {
    return Err(GridError::CellInvalid);
  }
  // an unequal-resolution pair can never be adjacent
  let direction = direction_for_neighbor(origin, destination);
  if direction == Digit::Invalid || direction == Digit::Center {
    return Err(GridError::NotNeighbors);
  }

  let mut edge = origin;
  edge.set_mode(DIRECTED_EDGE_MODE);
  edge.set_reserved_bits(direction as u8);
  Ok(edge)
}

/// The origin cell of a directed edge.
pub fn get_directed_edge_origin(edge: CellIndex) -> Result<CellIndex, GridError> {
  if edge.mode() != DIRECTED_EDGE_MODE {
    return Err(GridError::DirectedEdgeInvalid);
  }
  let mut origin = edge;
  origin.set_mode(CELL_MODE);
  origin.set_reserved_bits(0);
  Ok(origin)
}

/// The destination cell of a directed edge.
pub fn get_directed_edge_destination(edge: CellIndex) -> Result<CellIndex, GridError> {
  let direction = Digit::from_bits(edge.reserved_bits());
  let origin = get_directed_edge_origin(edge)?;
  let mut rotations = 0;
  neighbor_rotations(origin, direction, &mut rotations)
}

/// Both endpoint cells of a directed edge, origin first.
pub fn directed_edge_to_cells(edge: CellIndex) -> Result<(CellIndex, CellIndex), GridError> {
  if !is_valid_directed_edge(edge) {
    return Err(GridError::DirectedEdgeInvalid);
  }
  Ok((get_directed_edge_origin(edge)?, get_directed_edge_destination(edge)?))
}

/// Structural validity of a directed edge index: edge mode, a real
/// traversal digit (never k off a pentagon), and a valid origin cell.
#[must_use]
pub fn is_valid_directed_edge(edge: CellIndex) -> bool {
  if edge.mode() != DIRECTED_EDGE_MODE {
    return false;
  }
  let direction = Digit::from_bits(edge.reserved_bits());
  if direction == Digit::Center || direction == Digit::Invalid {
    return false;
  }
  let origin = match get_directed_edge_origin(edge) {
    Ok(o) => o,
    Err(_) => return false,
  };
  if is_pentagon(origin) && direction == Digit::K {
    return false;
  }
  is_valid_cell(origin)
}

/// All directed edges leaving a cell: six for hexagons, five for
/// pentagons.
pub fn origin_to_directed_edges(origin: CellIndex) -> Result<Vec<CellIndex>, GridError> {
  if !is_valid_cell(origin) {
    return Err(GridError::CellInvalid);
  }
  let start = if is_pentagon(origin) { Digit::J as u8 } else { Digit::K as u8 };
  let mut out = Vec::with_capacity(6);
  for dir_bits in start..Digit::COUNT {
    let mut edge = origin;
    edge.set_mode(DIRECTED_EDGE_MODE);
    edge.set_reserved_bits(dir_bits);
    out.push(edge);
  }
  Ok(out)
}

/// The geographic outline of a directed edge: the two shared boundary
/// vertices, or three when a Class III edge crosses an icosahedron face
/// edge.
pub fn directed_edge_to_boundary(edge: CellIndex) -> Result<CellBoundary, GridError> {
  if !is_valid_directed_edge(edge) {
    return Err(GridError::DirectedEdgeInvalid);
  }
  let origin = get_directed_edge_origin(edge)?;
  let direction = Digit::from_bits(edge.reserved_bits());

  // the edge spans from this vertex to the next one around the cell
  let start_vertex = vertex_num_for_direction(origin, direction);
  if start_vertex < 0 {
    return Err(GridError::Failed);
  }

  let res = origin.resolution();
  let fijk = cell_to_face_ijk(origin)?;
  // two topological vertexes per edge; the boundary kernel inserts a
  // third when a Class III edge crosses an icosahedron face edge
  let boundary = if is_pentagon(origin) {
    fijk.pent_boundary(res, start_vertex, 2)
  } else {
    fijk.hex_boundary(res, start_vertex, 2)
  };
  Ok(boundary)
}

/// Length of a directed edge in radians, summed over its boundary
/// segments.
pub fn exact_edge_length_rads(edge: CellIndex) -> Result<f64, GridError> {
  let boundary = directed_edge_to_boundary(edge)?;
  let mut length = 0.0;
  for pair in boundary.verts().windows(2) {
    length += crate::latlng::great_circle_distance_rads(&pair[0], &pair[1]);
  }
  Ok(length)
}

/// Length of a directed edge in kilometers.
pub fn exact_edge_length_km(edge: CellIndex) -> Result<f64, GridError> {
  Ok(exact_edge_length_rads(edge)? * crate::constants::EARTH_RADIUS_KM)
}

/// Length of a directed edge in meters.
pub fn exact_edge_length_m(edge: CellIndex) -> Result<f64, GridError> {
  Ok(exact_edge_length_km(edge)? * 1000.0)
}
