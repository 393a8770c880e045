//! Topological vertexes: the corner points shared by up to three cells,
//! each canonically owned by exactly one of them.
//!
//! A vertex index reuses the owning cell's bits, switches the mode field
//! and stores the owner's vertex number (0-5, 0-4 for pentagons) in the
//! reserved bits. The owner is the sharing cell with the lowest index
//! value, so the vertex index is independent of which cell it was
//! derived from.

use crate::base_cells::{
  base_cell_to_face_ijk, base_cell_to_rotations, is_base_cell_pentagon, is_base_cell_polar_pentagon,
  pentagon_direction_faces,
};
use crate::constants::{NUM_HEX_VERTS, NUM_PENT_VERTS};
use crate::coords::Digit;
use crate::error::GridError;
use crate::index::{is_valid_cell, CellIndex, CELL_MODE, VERTEX_MODE};
use crate::indexing::cell_to_face_ijk;
use crate::inspection::is_pentagon;
use crate::traversal::neighbors::{direction_for_neighbor, neighbor_rotations};
use crate::types::LatLng;

const INVALID_VERTEX_NUM: i32 = -1;

/// Hexagon vertex numbers to the digit direction of the neighbor sharing
/// the edge that starts at that vertex (ccw).
const VERTEX_NUM_TO_DIRECTION_HEX: [Digit; NUM_HEX_VERTS] =
  [Digit::Ij, Digit::J, Digit::Jk, Digit::K, Digit::Ik, Digit::I];
const VERTEX_NUM_TO_DIRECTION_PENT: [Digit; NUM_PENT_VERTS] =
  [Digit::Ij, Digit::J, Digit::Jk, Digit::Ik, Digit::I];

/// Inverse of the tables above, indexed by digit value.
#[rustfmt::skip]
const DIRECTION_TO_VERTEX_NUM_HEX: [i32; 7] =
  [INVALID_VERTEX_NUM, 3, 1, 2, 5, 4, 0];
#[rustfmt::skip]
const DIRECTION_TO_VERTEX_NUM_PENT: [i32; 7] =
  [INVALID_VERTEX_NUM, INVALID_VERTEX_NUM, 1, 2, 4, 3, 0];

/// How many 60-degree ccw rotations the cell's vertex numbering is
/// offset from the canonical base-cell-aligned orientation.
fn vertex_rotations(cell: CellIndex) -> Result<i32, GridError> {
  let fijk = cell_to_face_ijk(cell)?;
  let base_cell = cell.base_cell();
  let base_fijk = base_cell_to_face_ijk(base_cell);

  let mut ccw_rot60 = base_cell_to_rotations(base_cell, fijk.face);
  if ccw_rot60 < 0 {
    return Err(GridError::Failed);
  }

  if is_base_cell_pentagon(base_cell) {
    let faces = pentagon_direction_faces(base_cell).ok_or(GridError::Failed)?;

    // additional ccw rotation for polar neighbors or ik-face neighbors
    if fijk.face != base_fijk.face
      && (is_base_cell_polar_pentagon(base_cell) || fijk.face == faces.faces[Digit::Ik as usize - 2])
    {
      ccw_rot60 = (ccw_rot60 + 1) % 6;
    }

    // crossing the deleted subsequence warps the numbering
    match cell.leading_non_zero_digit() {
      Digit::Jk => ccw_rot60 = (ccw_rot60 + 5) % 6,
      Digit::Ik => ccw_rot60 = (ccw_rot60 + 1) % 6,
      _ => {}
    }
  }
  Ok(ccw_rot60)
}

/// The vertex number at the start of the edge toward `direction`, or
/// negative when the direction has no vertex on this cell.
pub(crate) fn vertex_num_for_direction(origin: CellIndex, direction: Digit) -> i32 {
  let pent = is_pentagon(origin);
  if direction == Digit::Center
    || direction == Digit::Invalid
    || (pent && direction == Digit::K)
  {
    return INVALID_VERTEX_NUM;
  }

  let rotations = match vertex_rotations(origin) {
    Ok(r) => r,
    Err(_) => return INVALID_VERTEX_NUM,
  };

  if pent {
    (DIRECTION_TO_VERTEX_NUM_PENT[direction as usize] + NUM_PENT_VERTS as i32 - rotations)
      % NUM_PENT_VERTS as i32
  } else {
    (DIRECTION_TO_VERTEX_NUM_HEX[direction as usize] + NUM_HEX_VERTS as i32 - rotations)
      % NUM_HEX_VERTS as i32
  }
}

/// The digit direction of the edge starting at `vertex_num`, or
/// `Digit::Invalid` for an out-of-range vertex number.
pub(crate) fn direction_for_vertex_num(origin: CellIndex, vertex_num: i32) -> Digit {
  let pent = is_pentagon(origin);
  let num_verts = if pent { NUM_PENT_VERTS } else { NUM_HEX_VERTS } as i32;
  if !(0..num_verts).contains(&vertex_num) {
    return Digit::Invalid;
  }

  let rotations = match vertex_rotations(origin) {
    Ok(r) => r,
    Err(_) => return Digit::Invalid,
  };

  if pent {
    VERTEX_NUM_TO_DIRECTION_PENT[((vertex_num + rotations) % NUM_PENT_VERTS as i32) as usize]
  } else {
    VERTEX_NUM_TO_DIRECTION_HEX[((vertex_num + rotations) % NUM_HEX_VERTS as i32) as usize]
  }
}

/// The canonical vertex index for the given vertex of a cell. The owner
/// is the lowest-indexed of the up-to-three cells sharing the vertex.
pub fn cell_to_vertex(cell: CellIndex, vertex_num: i32) -> Result<CellIndex, GridError> {
  if !is_valid_cell(cell) {
    return Err(GridError::CellInvalid);
  }
  let cell_is_pentagon = is_pentagon(cell);
  let num_verts = if cell_is_pentagon { NUM_PENT_VERTS } else { NUM_HEX_VERTS } as i32;
  if !(0..num_verts).contains(&vertex_num) {
    return Err(GridError::Domain);
  }

  let mut owner = cell;
  let mut owner_vertex_num = vertex_num;

  // the neighbor sharing the edge leaving this vertex (ccw)
  let left_dir = direction_for_vertex_num(cell, vertex_num);
  if left_dir == Digit::Invalid {
    return Err(GridError::Failed);
  }
  let mut left_rotations = 0;
  let left = neighbor_rotations(cell, left_dir, &mut left_rotations)?;
  if left < owner {
    owner = left;
  }

  // the neighbor sharing the edge arriving at this vertex (cw)
  let right_dir = direction_for_vertex_num(cell, (vertex_num - 1 + num_verts) % num_verts);
  if right_dir == Digit::Invalid {
    return Err(GridError::Failed);
  }
  let mut right_rotations = 0;
  let right = neighbor_rotations(cell, right_dir, &mut right_rotations)?;
  if right < owner {
    owner = right;
    let dir = if is_pentagon(owner) {
      direction_for_neighbor(owner, cell)
    } else {
      rotated_reverse_direction(right_dir, right_rotations)
    };
    owner_vertex_num = vertex_num_for_direction(owner, dir);
  }

  if owner == left {
    let dir = if is_pentagon(owner) {
      direction_for_neighbor(owner, cell)
    } else {
      rotated_reverse_direction(left_dir, left_rotations)
    };
    let edge_vertex = vertex_num_for_direction(owner, dir);
    if edge_vertex < 0 {
      return Err(GridError::Failed);
    }
    // the shared vertex is the second one of the owner's edge
    let owner_num_verts = if is_pentagon(owner) { NUM_PENT_VERTS } else { NUM_HEX_VERTS } as i32;
    owner_vertex_num = (edge_vertex + 1) % owner_num_verts;
  }

  if owner_vertex_num < 0 {
    return Err(GridError::Failed);
  }

  let mut vertex = owner;
  vertex.set_mode(VERTEX_MODE);
  vertex.set_reserved_bits(owner_vertex_num as u8);
  Ok(vertex)
}

/// The direction from a hexagon neighbor back to the original cell, given
/// the outbound direction and the rotation picked up crossing into the
/// neighbor's frame.
fn rotated_reverse_direction(dir: Digit, rotations: i32) -> Digit {
  // reversing an axis direction crosses the hexagon to the opposite side
  const REVERSE: [Digit; 7] = [
    Digit::Invalid,
    Digit::Ij,
    Digit::Ik,
    Digit::I,
    Digit::Jk,
    Digit::J,
    Digit::K,
  ];
  let mut out = REVERSE[dir as usize];
  for _ in 0..rotations.rem_euclid(6) {
    out = out.rotate60_ccw();
  }
  out
}

/// All canonical vertexes of a cell, in vertex-number order.
pub fn cell_to_vertexes(cell: CellIndex) -> Result<Vec<CellIndex>, GridError> {
  let num_verts = if is_pentagon(cell) { NUM_PENT_VERTS } else { NUM_HEX_VERTS } as i32;
  let mut out = Vec::with_capacity(num_verts as usize);
  for vertex_num in 0..num_verts {
    out.push(cell_to_vertex(cell, vertex_num)?);
  }
  Ok(out)
}

/// The geographic point of a vertex index.
pub fn vertex_to_latlng(vertex: CellIndex) -> Result<LatLng, GridError> {
  if vertex.mode() != VERTEX_MODE {
    return Err(GridError::VertexInvalid);
  }
  let vertex_num = i32::from(vertex.reserved_bits());
  let mut owner = vertex;
  owner.set_mode(CELL_MODE);
  owner.set_reserved_bits(0);
  if !is_valid_cell(owner) {
    return Err(GridError::VertexInvalid);
  }

  // slice out the single boundary vertex of the owner
  let res = owner.resolution();
  let fijk = cell_to_face_ijk(owner)?;
  let boundary = if is_pentagon(owner) {
    fijk.pent_boundary(res, vertex_num, 1)
  } else {
    fijk.hex_boundary(res, vertex_num, 1)
  };
  if boundary.num_verts < 1 {
    return Err(GridError::Failed);
  }
  Ok(boundary.verts[0])
}

/// Structural validity of a vertex index: vertex mode, a valid owner
/// cell, and canonical ownership.
#[must_use]
pub fn is_valid_vertex(vertex: CellIndex) -> bool {
  if vertex.mode() != VERTEX_MODE {
    return false;
  }
  let vertex_num = i32::from(vertex.reserved_bits());
  let mut owner = vertex;
  owner.set_mode(CELL_MODE);
  owner.set_reserved_bits(0);
  if !is_valid_cell(owner) {
    return false;
  }
  // canonical form: rebuilding from the owner must reproduce the index
  match cell_to_vertex(owner, vertex_num) {
    Ok(canonical) => canonical == vertex,
    Err(_) => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::index::string_to_cell;
  use crate::indexing::latlng_to_cell;
  use crate::latlng::geo_almost_equal_threshold;
  use crate::traversal::neighbors::neighbor_cells;
  use crate::types::LatLng;
  use std::collections::HashSet;

  #[test]
  fn hexagon_has_six_distinct_vertexes() {
    let cell = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 9).unwrap();
    let vertexes = cell_to_vertexes(cell).unwrap();
    assert_eq!(vertexes.len(), 6);
    let unique: HashSet<_> = vertexes.iter().collect();
    assert_eq!(unique.len(), 6);
    for v in vertexes {
      assert!(is_valid_vertex(v), "{v}");
    }
  }

  #[test]
  fn pentagon_has_five_vertexes() {
    let pent = string_to_cell("820807fffffffff");
    assert!(is_pentagon(pent));
    let vertexes = cell_to_vertexes(pent).unwrap();
    assert_eq!(vertexes.len(), 5);
    assert_eq!(cell_to_vertex(pent, 5), Err(GridError::Domain));
  }

  #[test]
  fn vertex_num_domain() {
    let cell = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 9).unwrap();
    assert_eq!(cell_to_vertex(cell, -1), Err(GridError::Domain));
    assert_eq!(cell_to_vertex(cell, 6), Err(GridError::Domain));
    assert_eq!(cell_to_vertex(CellIndex::NULL, 0), Err(GridError::CellInvalid));
  }

  #[test]
  fn shared_vertex_is_canonical_across_cells() {
    // every vertex of a cell must also appear among the vertexes its
    // neighbors compute, with the same index value
    let cell = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 9).unwrap();
    let own: HashSet<_> = cell_to_vertexes(cell).unwrap().into_iter().collect();

    let mut shared = 0;
    for neighbor in neighbor_cells(cell) {
      let theirs: HashSet<_> = cell_to_vertexes(neighbor).unwrap().into_iter().collect();
      shared += own.intersection(&theirs).count();
    }
    // each of the six vertexes is shared with exactly two neighbors
    assert_eq!(shared, 12);
  }

  #[test]
  fn vertex_points_match_cell_boundary() {
    let cell = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 8).unwrap();
    let boundary = crate::indexing::cell_to_boundary(cell).unwrap();
    for vertex in cell_to_vertexes(cell).unwrap() {
      let point = vertex_to_latlng(vertex).unwrap();
      assert!(
        boundary
          .verts()
          .iter()
          .any(|b| geo_almost_equal_threshold(b, &point, 1e-9)),
        "vertex point {point:?} lies on the cell boundary"
      );
    }
  }

  #[test]
  fn invalid_vertexes_rejected() {
    let cell = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 9).unwrap();
    assert!(!is_valid_vertex(cell), "cell mode is not a vertex");
    assert!(!is_valid_vertex(CellIndex::NULL));
    assert_eq!(vertex_to_latlng(cell), Err(GridError::VertexInvalid));

    // non-canonical owner bits
    let vertex = cell_to_vertex(cell, 0).unwrap();
    let mut corrupted = vertex;
    corrupted.set_reserved_bits(7);
    assert!(!is_valid_vertex(corrupted));
  }
}
