//! Point location and its inverses: geographic point to cell index, cell
//! index to center point and to boundary polygon.

use crate::base_cells::{
  base_cell_is_cw_offset, base_cell_to_face_ijk, face_ijk_to_base_cell, face_ijk_to_base_cell_rotations,
  is_base_cell_pentagon, INVALID_BASE_CELL, INVALID_ROTATIONS, MAX_FACE_COORD,
};
use crate::constants::{EPSILON_RAD, MAX_RESOLUTION, NUM_BASE_CELLS, NUM_HEX_VERTS, NUM_PENT_VERTS};
use crate::coords::face::{is_class_iii_res, Overage};
use crate::coords::{CoordIJK, Digit, FaceIJK};
use crate::error::GridError;
use crate::index::{is_valid_cell, CellIndex, CELL_MODE, INIT_PATTERN, NULL_CELL};
use crate::inspection::is_pentagon;
use crate::types::{CellBoundary, LatLng};
use std::f64::consts::FRAC_PI_2;

/// Encode the cell at a face address into an index by walking the digit
/// sequence up to resolution 0. Returns the null index when the address
/// is out of range.
#[must_use]
pub(crate) fn face_ijk_to_cell(fijk: &FaceIJK, res: i32) -> CellIndex {
  let mut h = CellIndex(INIT_PATTERN);
  h.set_mode(CELL_MODE);
  h.set_resolution(res);

  if res == 0 {
    if fijk.coord.i > MAX_FACE_COORD || fijk.coord.j > MAX_FACE_COORD || fijk.coord.k > MAX_FACE_COORD {
      return NULL_CELL;
    }
    let base_cell = face_ijk_to_base_cell(fijk);
    if base_cell == INVALID_BASE_CELL {
      return NULL_CELL;
    }
    h.set_base_cell(base_cell);
    return h;
  }

  // quantize the address up one resolution at a time, recording which
  // child position each level's coordinates occupied
  let mut fijk_bc = *fijk;
  for r in (1..=res).rev() {
    let last_ijk = fijk_bc.coord;
    let mut last_center: CoordIJK;
    if is_class_iii_res(r) {
      fijk_bc.coord.up_ap7();
      last_center = fijk_bc.coord;
      last_center.down_ap7();
    } else {
      fijk_bc.coord.up_ap7r();
      last_center = fijk_bc.coord;
      last_center.down_ap7r();
    }

    let mut diff = last_ijk.sub(&last_center);
    diff.normalize();
    let digit = diff.to_digit();
    if digit == Digit::Invalid {
      return NULL_CELL;
    }
    h.set_digit(r, digit);
  }

  // fijk_bc now holds the base cell address on the original face
  if fijk_bc.coord.i > MAX_FACE_COORD || fijk_bc.coord.j > MAX_FACE_COORD || fijk_bc.coord.k > MAX_FACE_COORD {
    return NULL_CELL;
  }
  let base_cell = face_ijk_to_base_cell(&fijk_bc);
  if base_cell == INVALID_BASE_CELL {
    return NULL_CELL;
  }
  h.set_base_cell(base_cell);

  let num_rots = face_ijk_to_base_cell_rotations(&fijk_bc);
  if num_rots == INVALID_ROTATIONS {
    return NULL_CELL;
  }

  if is_base_cell_pentagon(base_cell) {
    // a leading k-axis digit crosses the deleted subsequence; rotate out
    // of it in the direction given by the face's offset sense
    if h.leading_non_zero_digit() == Digit::K {
      if base_cell_is_cw_offset(base_cell, fijk_bc.face) {
        h = h.rotate60_cw();
      } else {
        h = h.rotate60_ccw();
      }
    }
    for _ in 0..num_rots {
      h = h.rotate_pent60_ccw();
    }
  } else {
    for _ in 0..num_rots {
      h = h.rotate60_ccw();
    }
  }
  h
}

/// Apply a cell's digits to its base cell's home address, leaving the
/// result on the home face. Returns whether the final coordinates could
/// have spilled past the face bounds.
pub(crate) fn cell_to_face_ijk_on_home_face(h: CellIndex, fijk: &mut FaceIJK) -> bool {
  let res = h.resolution();
  let base_cell = h.base_cell();

  // a cell entirely inside its home face cannot overage
  let mut possible_overage = true;
  if !is_base_cell_pentagon(base_cell)
    && (res == 0 || (fijk.coord.i == 0 && fijk.coord.j == 0 && fijk.coord.k == 0))
  {
    possible_overage = false;
  }

  for r in 1..=res {
    if is_class_iii_res(r) {
      fijk.coord.down_ap7();
    } else {
      fijk.coord.down_ap7r();
    }
    fijk.coord.neighbor(h.digit(r));
  }
  possible_overage
}

/// The canonical face address of a cell.
pub(crate) fn cell_to_face_ijk(h: CellIndex) -> Result<FaceIJK, GridError> {
  let base_cell = h.base_cell();
  if !(0..NUM_BASE_CELLS).contains(&base_cell) {
    return Err(GridError::CellInvalid);
  }

  // a pentagon cell leading with an ik-axis digit is rotated into the
  // adjacent sequence before placement
  let mut h_digits = h;
  if is_base_cell_pentagon(base_cell) && h_digits.leading_non_zero_digit() == Digit::Ik {
    h_digits = h_digits.rotate60_cw();
  }

  let mut fijk = base_cell_to_face_ijk(base_cell);
  if !cell_to_face_ijk_on_home_face(h_digits, &mut fijk) {
    return Ok(fijk);
  }

  // the cell may lie past the home face edge; check on the Class II grid
  let orig_ijk = fijk.coord;
  let res = h.resolution();
  let mut adj_res = res;
  if is_class_iii_res(res) {
    fijk.coord.down_ap7r();
    adj_res += 1;
  }

  let pent_leading_4 =
    is_base_cell_pentagon(base_cell) && h_digits.leading_non_zero_digit() == Digit::I;

  let mut overage = fijk.adjust_overage_class_ii(adj_res, pent_leading_4, false);
  if overage != Overage::None {
    // pentagon base cells can overage repeatedly onto further faces
    if is_base_cell_pentagon(base_cell) {
      while overage == Overage::NewFace {
        overage = fijk.adjust_overage_class_ii(adj_res, false, false);
      }
    }
    if adj_res != res {
      fijk.coord.up_ap7r();
    }
  } else if adj_res != res {
    fijk.coord = orig_ijk;
  }
  Ok(fijk)
}

/// Index the cell containing a geographic point at the given resolution.
///
/// Longitude is normalized internally; latitude must lie in
/// `[-pi/2, pi/2]` and both components must be finite.
pub fn latlng_to_cell(geo: &LatLng, res: i32) -> Result<CellIndex, GridError> {
  if !(0..=MAX_RESOLUTION).contains(&res) {
    return Err(GridError::ResolutionDomain);
  }
  if !geo.lat.is_finite() || !geo.lng.is_finite() || geo.lat.abs() > FRAC_PI_2 + EPSILON_RAD {
    return Err(GridError::LatLngDomain);
  }

  let fijk = FaceIJK::from_geo(geo, res);
  let h = face_ijk_to_cell(&fijk, res);
  if h == NULL_CELL {
    Err(GridError::Failed)
  } else {
    Ok(h)
  }
}

/// The geographic center point of a cell.
pub fn cell_to_latlng(cell: CellIndex) -> Result<LatLng, GridError> {
  if !is_valid_cell(cell) {
    return Err(GridError::CellInvalid);
  }
  let fijk = cell_to_face_ijk(cell)?;
  Ok(fijk.to_geo(cell.resolution()))
}

/// The boundary outline of a cell: six vertices for hexagons, five for
/// pentagons, plus icosahedron edge crossings where the cell straddles
/// faces.
pub fn cell_to_boundary(cell: CellIndex) -> Result<CellBoundary, GridError> {
  if !is_valid_cell(cell) {
    return Err(GridError::CellInvalid);
  }
  let fijk = cell_to_face_ijk(cell)?;
  let res = cell.resolution();
  let boundary = if is_pentagon(cell) {
    fijk.pent_boundary(res, 0, NUM_PENT_VERTS as i32)
  } else {
    fijk.hex_boundary(res, 0, NUM_HEX_VERTS as i32)
  };
  Ok(boundary)
}
