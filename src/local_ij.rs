//! Anchored local coordinates: express one cell's position as IJK/IJ
//! offsets from an origin cell of the same resolution.
//!
//! The local frame is produced by unfolding the origin's base cell and
//! its immediate neighbors onto one plane. It is only defined near the
//! origin: distant cells and certain pentagon configurations fail.

use crate::base_cells::{
  base_cell_direction, base_cell_neighbor, is_base_cell_pentagon, is_base_cell_polar_pentagon,
  BASE_CELL_NEIGHBOR_60CCW_ROTS, INVALID_BASE_CELL,
};
use crate::constants::NUM_BASE_CELLS;
use crate::coords::face::is_class_iii_res;
use crate::coords::{CoordIJK, Digit, FaceIJK};
use crate::error::GridError;
use crate::index::{is_valid_cell, CellIndex, CELL_MODE, INIT_PATTERN};
use crate::indexing::cell_to_face_ijk_on_home_face;
use crate::types::CoordIJ;

/// 60-degree cw rotations to apply to a cell's coordinates when the
/// origin is a pentagon, indexed by the origin's leading digit and the
/// direction toward the cell. -1 marks unreachable configurations.
#[rustfmt::skip]
static PENTAGON_ROTATIONS: [[i32; 7]; 7] = [
  [ 0, -1,  0,  0,  0,  0,  0],
  [-1, -1, -1, -1, -1, -1, -1],
  [ 0, -1,  0,  0,  0,  1,  0],
  [ 0, -1,  0,  0,  1,  1,  0],
  [ 0, -1,  0,  5,  0,  0,  0],
  [ 0, -1,  5,  5,  0,  0,  0],
  [ 0, -1,  0,  0,  0,  0,  0],
];

/// Inverse of [`PENTAGON_ROTATIONS`], used when walking back out of the
/// pentagon's frame.
#[rustfmt::skip]
static PENTAGON_ROTATIONS_REVERSE: [[i32; 7]; 7] = [
  [ 0,  0,  0,  0,  0,  0,  0],
  [-1, -1, -1, -1, -1, -1, -1],
  [ 0,  1,  0,  0,  0,  0,  0],
  [ 0,  1,  0,  0,  0,  1,  0],
  [ 0,  5,  0,  0,  0,  0,  0],
  [ 0,  5,  0,  5,  0,  0,  0],
  [ 0,  0,  0,  0,  0,  0,  0],
];

/// Reverse rotations when the indexed cell is on a non-polar pentagon,
/// indexed by the direction back to the origin and the cell's leading
/// digit.
#[rustfmt::skip]
static PENTAGON_ROTATIONS_REVERSE_NONPOLAR: [[i32; 7]; 7] = [
  [ 0,  0,  0,  0,  0,  0,  0],
  [-1, -1, -1, -1, -1, -1, -1],
  [ 0,  1,  0,  0,  0,  0,  0],
  [ 0,  1,  0,  0,  0,  1,  0],
  [ 0,  5,  0,  0,  0,  0,  0],
  [ 0,  1,  0,  5,  1,  1,  0],
  [ 0,  0,  0,  0,  0,  0,  0],
];

/// As above for the two polar pentagons, whose neighbors are all
/// i-oriented.
#[rustfmt::skip]
static PENTAGON_ROTATIONS_REVERSE_POLAR: [[i32; 7]; 7] = [
  [ 0,  0,  0,  0,  0,  0,  0],
  [-1, -1, -1, -1, -1, -1, -1],
  [ 0,  1,  1,  1,  1,  1,  1],
  [ 0,  1,  0,  0,  0,  1,  0],
  [ 0,  1,  0,  0,  1,  1,  1],
  [ 0,  1,  0,  5,  1,  1,  0],
  [ 0,  1,  1,  0,  1,  1,  1],
];

/// Leading digit / direction pairs whose unfolding across a pentagon is
/// not well defined; these configurations are rejected.
#[rustfmt::skip]
static FAILED_DIRECTIONS: [[bool; 7]; 7] = [
  [false, false, false, false, false, false, false],
  [false, false, false, false, false, false, false],
  [false, false, false, false, true,  true,  false],
  [false, false, false, false, true,  false, true ],
  [false, false, true,  true,  false, false, false],
  [false, false, true,  false, false, false, true ],
  [false, false, false, true,  false, true,  false],
];

/// The digits of `h` applied to a zeroed frame: coordinates in the base
/// cell's own coordinate space (the face number is meaningless here).
fn cell_to_base_cell_coords(h: CellIndex) -> CoordIJK {
  let mut fijk = FaceIJK::default();
  cell_to_face_ijk_on_home_face(h, &mut fijk);
  fijk.coord
}

/// The local IJK coordinates of `index` relative to `origin`.
pub(crate) fn cell_to_local_ijk(origin: CellIndex, index: CellIndex) -> Result<CoordIJK, GridError> {
  let res = origin.resolution();
  if res != index.resolution() {
    return Err(GridError::ResolutionMismatch);
  }

  let origin_base_cell = origin.base_cell();
  let base_cell = index.base_cell();
  if !(0..NUM_BASE_CELLS).contains(&origin_base_cell) || !(0..NUM_BASE_CELLS).contains(&base_cell) {
    return Err(GridError::CellInvalid);
  }

  // direction from the origin base cell to the index base cell
  let mut dir = Digit::Center;
  let mut rev_dir = Digit::Center;
  if origin_base_cell != base_cell {
    dir = base_cell_direction(origin_base_cell, base_cell);
    if dir == Digit::Invalid {
      // base cells are not neighbors; the local frame cannot reach
      return Err(GridError::Failed);
    }
    rev_dir = base_cell_direction(base_cell, origin_base_cell);
    if rev_dir == Digit::Invalid {
      return Err(GridError::Failed);
    }
  }

  let origin_on_pent = is_base_cell_pentagon(origin_base_cell);
  let index_on_pent = is_base_cell_pentagon(base_cell);

  let mut index_rotated = index;
  if dir != Digit::Center {
    // rotate the index into the origin base cell's orientation, cw
    // because we are undoing the rotation into its own base cell
    let mut base_cell_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[origin_base_cell as usize][dir as usize];
    if index_on_pent {
      while base_cell_rotations > 0 {
        index_rotated = index_rotated.rotate_pent60_cw();
        rev_dir = rev_dir.rotate60_cw();
        if rev_dir == Digit::K {
          rev_dir = rev_dir.rotate60_cw();
        }
        base_cell_rotations -= 1;
      }
    } else {
      while base_cell_rotations > 0 {
        index_rotated = index_rotated.rotate60_cw();
        rev_dir = rev_dir.rotate60_cw();
        base_cell_rotations -= 1;
      }
    }
  }

  let mut index_coord = cell_to_base_cell_coords(index_rotated);

  if dir != Digit::Center {
    // the base cells differ; unfold the neighbor onto the origin's plane
    let mut pentagon_rotations = 0;
    let mut direction_rotations = 0;

    if origin_on_pent {
      let origin_leading = origin.leading_non_zero_digit();
      if FAILED_DIRECTIONS[origin_leading as usize][dir as usize] {
        return Err(GridError::Pentagon);
      }
      direction_rotations = PENTAGON_ROTATIONS[origin_leading as usize][dir as usize];
      pentagon_rotations = direction_rotations;
    } else if index_on_pent {
      let index_leading = index_rotated.leading_non_zero_digit();
      if FAILED_DIRECTIONS[index_leading as usize][rev_dir as usize] {
        return Err(GridError::Pentagon);
      }
      pentagon_rotations = PENTAGON_ROTATIONS[rev_dir as usize][index_leading as usize];
    }

    if pentagon_rotations < 0 || direction_rotations < 0 {
      return Err(GridError::CellInvalid);
    }

    for _ in 0..pentagon_rotations {
      index_coord.rotate60_cw();
    }

    // the offset of the neighboring base cell's origin, scaled to res
    let mut offset = CoordIJK::default();
    offset.neighbor(dir);
    for r in (1..=res).rev() {
      if is_class_iii_res(r) {
        offset.down_ap7();
      } else {
        offset.down_ap7r();
      }
    }
    for _ in 0..direction_rotations {
      offset.rotate60_cw();
    }

    index_coord = index_coord.add(&offset);
    index_coord.normalize();
  } else if origin_on_pent && index_on_pent {
    // same pentagon base cell; correct the warp between subtrees
    let origin_leading = origin.leading_non_zero_digit();
    let index_leading = index.leading_non_zero_digit();
    if FAILED_DIRECTIONS[origin_leading as usize][index_leading as usize] {
      return Err(GridError::Pentagon);
    }
    let rotations = PENTAGON_ROTATIONS[origin_leading as usize][index_leading as usize];
    if rotations < 0 {
      return Err(GridError::CellInvalid);
    }
    for _ in 0..rotations {
      index_coord.rotate60_cw();
    }
  }

  let origin_coord = cell_to_base_cell_coords(origin);
  Ok(index_coord.sub(&origin_coord))
}

/// The cell at the given local IJK coordinates relative to `origin`.
pub(crate) fn local_ijk_to_cell(origin: CellIndex, ijk: &CoordIJK) -> Result<CellIndex, GridError> {
  let res = origin.resolution();
  let origin_base_cell = origin.base_cell();
  if !(0..NUM_BASE_CELLS).contains(&origin_base_cell) {
    return Err(GridError::CellInvalid);
  }
  let origin_on_pent = is_base_cell_pentagon(origin_base_cell);

  // translate into the origin base cell's own coordinate space
  let origin_coord = cell_to_base_cell_coords(origin);
  let mut cursor = origin_coord.add(ijk);
  cursor.normalize();

  let mut out = CellIndex(INIT_PATTERN);
  out.set_mode(CELL_MODE);
  out.set_resolution(res);

  if res == 0 {
    if cursor.i > 1 || cursor.j > 1 || cursor.k > 1 {
      return Err(GridError::Failed);
    }
    let dir = cursor.to_digit();
    if dir == Digit::Invalid {
      return Err(GridError::Failed);
    }
    let new_base_cell = base_cell_neighbor(origin_base_cell, dir);
    if new_base_cell == INVALID_BASE_CELL {
      // moving off a pentagon's deleted axis
      return Err(GridError::Pentagon);
    }
    out.set_base_cell(new_base_cell);
    return Ok(out);
  }

  // build the index digits from the finest resolution up; what remains is
  // the base cell offset in the origin base cell's space
  for r in (1..=res).rev() {
    let last_ijk = cursor;
    let mut last_center: CoordIJK;
    // caller-supplied coordinates can be arbitrarily large, so the
    // quantization steps are overflow-checked
    if is_class_iii_res(r) {
      cursor.up_ap7_checked()?;
      last_center = cursor;
      last_center.down_ap7();
    } else {
      cursor.up_ap7r_checked()?;
      last_center = cursor;
      last_center.down_ap7r();
    }
    let mut diff = last_ijk.sub(&last_center);
    diff.normalize();
    out.set_digit(r, diff.to_digit());
  }

  if cursor.i > 1 || cursor.j > 1 || cursor.k > 1 {
    return Err(GridError::Failed);
  }

  let mut dir = cursor.to_digit();
  if dir == Digit::Invalid {
    return Err(GridError::Failed);
  }
  let mut base_cell = base_cell_neighbor(origin_base_cell, dir);
  // pentagon base cells never border each other, so an invalid neighbor
  // can only mean the origin is a pentagon
  let index_on_pent = base_cell != INVALID_BASE_CELL && is_base_cell_pentagon(base_cell);

  if dir != Digit::Center {
    let mut pentagon_rotations: i32 = 0;
    if origin_on_pent {
      let origin_leading = origin.leading_non_zero_digit();
      pentagon_rotations = PENTAGON_ROTATIONS_REVERSE[origin_leading as usize][dir as usize];
      if pentagon_rotations < 0 {
        return Err(GridError::CellInvalid);
      }
      for _ in 0..pentagon_rotations {
        dir = dir.rotate60_ccw();
      }
      // the rotation should take us off the deleted axis; if not, the
      // coordinates point into a deleted subsequence
      if dir == Digit::K {
        return Err(GridError::Pentagon);
      }
      base_cell = base_cell_neighbor(origin_base_cell, dir);
      if base_cell == INVALID_BASE_CELL {
        return Err(GridError::Pentagon);
      }
    }

    let base_cell_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[origin_base_cell as usize][dir as usize];
    if base_cell_rotations < 0 {
      return Err(GridError::CellInvalid);
    }

    if is_base_cell_pentagon(base_cell) {
      // rotate into the pentagon's orientation first, then correct the
      // warp from the pentagon's own leading digit
      let rev_dir = base_cell_direction(base_cell, origin_base_cell);
      if rev_dir == Digit::Invalid {
        return Err(GridError::Failed);
      }
      for _ in 0..base_cell_rotations {
        out = out.rotate60_ccw();
      }

      let index_leading = out.leading_non_zero_digit();
      pentagon_rotations = if is_base_cell_polar_pentagon(base_cell) {
        PENTAGON_ROTATIONS_REVERSE_POLAR[rev_dir as usize][index_leading as usize]
      } else {
        PENTAGON_ROTATIONS_REVERSE_NONPOLAR[rev_dir as usize][index_leading as usize]
      };
      if pentagon_rotations < 0 {
        return Err(GridError::CellInvalid);
      }
      for _ in 0..pentagon_rotations {
        out = out.rotate_pent60_ccw();
      }
    } else {
      // undo the origin-pentagon warp on the digits, then adjust for the
      // coordinate space of the target base cell
      for _ in 0..pentagon_rotations {
        out = out.rotate60_ccw();
      }
      for _ in 0..base_cell_rotations {
        out = out.rotate60_ccw();
      }
    }
  } else if origin_on_pent && index_on_pent {
    let origin_leading = origin.leading_non_zero_digit();
    let index_leading = out.leading_non_zero_digit();
    if FAILED_DIRECTIONS[origin_leading as usize][index_leading as usize] {
      return Err(GridError::Pentagon);
    }
    let rotations = PENTAGON_ROTATIONS_REVERSE[origin_leading as usize][index_leading as usize];
    if rotations < 0 {
      return Err(GridError::CellInvalid);
    }
    for _ in 0..rotations {
      out = out.rotate60_ccw();
    }
  }

  if index_on_pent && out.leading_non_zero_digit() == Digit::K {
    // the recovered index would sit in the deleted subsequence
    return Err(GridError::Pentagon);
  }

  out.set_base_cell(base_cell);
  Ok(out)
}

/// The anchored two-axis coordinates of `index` relative to `origin`.
pub fn cell_to_local_ij(origin: CellIndex, index: CellIndex) -> Result<CoordIJ, GridError> {
  if !is_valid_cell(origin) || !is_valid_cell(index) {
    return Err(GridError::CellInvalid);
  }
  let ijk = cell_to_local_ijk(origin, index)?;
  Ok(ijk.to_ij())
}

/// The cell at anchored two-axis coordinates relative to `origin`.
pub fn local_ij_to_cell(origin: CellIndex, ij: &CoordIJ) -> Result<CellIndex, GridError> {
  if !is_valid_cell(origin) {
    return Err(GridError::CellInvalid);
  }
  let ijk = CoordIJK::from_ij(ij)?;
  local_ijk_to_cell(origin, &ijk)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::index::{string_to_cell, NULL_CELL};
  use crate::indexing::latlng_to_cell;
  use crate::inspection::is_pentagon;
  use crate::types::LatLng;

  #[test]
  fn identity_is_zero() {
    let origin = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 5).unwrap();
    assert_eq!(cell_to_local_ijk(origin, origin), Ok(CoordIJK::default()));
    assert_eq!(cell_to_local_ij(origin, origin), Ok(CoordIJ { i: 0, j: 0 }));
    assert_eq!(local_ijk_to_cell(origin, &CoordIJK::default()), Ok(origin));
  }

  #[test]
  fn roundtrip_within_base_cell() {
    let origin = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 5).unwrap();
    for (i, j) in [(1, 0), (0, 1), (2, 3), (-2, -1), (3, -2)] {
      let ij = CoordIJ { i, j };
      let cell = local_ij_to_cell(origin, &ij).unwrap();
      assert!(is_valid_cell(cell), "{ij:?}");
      assert_eq!(cell_to_local_ij(origin, cell), Ok(ij));
    }
  }

  #[test]
  fn mismatched_inputs() {
    let origin = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 5).unwrap();
    let finer = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 6).unwrap();
    assert_eq!(cell_to_local_ijk(origin, finer), Err(GridError::ResolutionMismatch));
    assert_eq!(cell_to_local_ij(origin, NULL_CELL), Err(GridError::CellInvalid));
    assert_eq!(local_ij_to_cell(NULL_CELL, &CoordIJ { i: 0, j: 0 }), Err(GridError::CellInvalid));
  }

  #[test]
  fn base_cell_frames_at_res0() {
    // every base cell relative to itself
    for bc in [0, 15, 31, 70, 110] {
      let origin = crate::index::base_cell_to_cell(bc);
      assert_eq!(cell_to_local_ij(origin, origin), Ok(CoordIJ { i: 0, j: 0 }));
    }

    // res-0 neighbors are one unit away
    let origin = crate::index::base_cell_to_cell(15);
    let neighbor = crate::index::base_cell_to_cell(crate::base_cells::base_cell_neighbor(15, Digit::I));
    let ij = cell_to_local_ij(origin, neighbor).unwrap();
    assert_eq!(ij.i.abs().max(ij.j.abs()), 1);
  }

  #[test]
  fn distant_cells_fail() {
    // base cells on opposite sides of the globe are not neighbors, so the
    // local frame cannot be constructed
    let origin = string_to_cell("8029fffffffffff");
    let antipode = string_to_cell("80f3fffffffffff");
    assert_eq!(cell_to_local_ijk(origin, antipode), Err(GridError::Failed));
  }

  #[test]
  fn pentagon_identity() {
    let pent = string_to_cell("8009fffffffffff");
    assert!(is_pentagon(pent));
    assert_eq!(cell_to_local_ijk(pent, pent), Ok(CoordIJK::default()));
    assert_eq!(local_ijk_to_cell(pent, &CoordIJK::default()), Ok(pent));

    // moving along the deleted k-axis off a res-0 pentagon fails
    let k_off = CoordIJK::new(0, 0, 1);
    assert_eq!(local_ijk_to_cell(pent, &k_off), Err(GridError::Pentagon));
  }
}
