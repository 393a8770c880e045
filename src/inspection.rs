//! Read-only queries over cell indexes: pentagon tests, cell counts,
//! resolution class, face membership.

use crate::base_cells::is_base_cell_pentagon;
use crate::constants::{MAX_RESOLUTION, NUM_BASE_CELLS, NUM_PENTAGONS};
use crate::coords::face::is_class_iii_res;
use crate::coords::Digit;
use crate::error::GridError;
use crate::index::{base_cell_to_cell, is_valid_cell, CellIndex, CELL_MODE};
use crate::indexing::cell_to_face_ijk;
use crate::math::ipow;

/// Whether the index names a pentagon cell: a pentagon base cell with
/// every digit at the center.
#[must_use]
pub fn is_pentagon(h: CellIndex) -> bool {
  if h.mode() != CELL_MODE || !is_valid_cell(h) {
    return false;
  }
  is_base_cell_pentagon(h.base_cell()) && h.leading_non_zero_digit() == Digit::Center
}

/// The base cell number field of the index. No validation is applied.
#[must_use]
pub fn get_base_cell_number(h: CellIndex) -> i32 {
  h.base_cell()
}

/// Whether the index's resolution uses the Class III grid orientation.
#[must_use]
pub fn is_res_class_iii(h: CellIndex) -> bool {
  is_class_iii_res(h.resolution())
}

/// Number of unique cells at a resolution: `2 + 120 * 7^res`.
pub fn get_num_cells(res: i32) -> Result<i64, GridError> {
  if !(0..=MAX_RESOLUTION).contains(&res) {
    return Err(GridError::ResolutionDomain);
  }
  Ok(2 + 120 * ipow(7, i64::from(res)))
}

/// Number of pentagon cells at every resolution.
#[must_use]
pub fn pentagon_count() -> i32 {
  NUM_PENTAGONS
}

/// The twelve pentagon cells at a resolution.
pub fn get_pentagons(res: i32) -> Result<Vec<CellIndex>, GridError> {
  if !(0..=MAX_RESOLUTION).contains(&res) {
    return Err(GridError::ResolutionDomain);
  }
  let mut out = Vec::with_capacity(NUM_PENTAGONS as usize);
  for bc in 0..NUM_BASE_CELLS {
    if is_base_cell_pentagon(bc) {
      // the pentagon at res is the all-center descendant of the base cell
      out.push(CellIndex::init(res, bc, Digit::Center));
    }
  }
  Ok(out)
}

/// Number of resolution-0 cells.
#[must_use]
pub fn res0_cell_count() -> i32 {
  NUM_BASE_CELLS
}

/// All 122 resolution-0 cells.
#[must_use]
pub fn get_res0_cells() -> Vec<CellIndex> {
  (0..NUM_BASE_CELLS).map(base_cell_to_cell).collect()
}

/// Upper bound on the number of icosahedron faces a cell's boundary may
/// touch: two for hexagons, five for pentagons.
pub fn max_face_count(h: CellIndex) -> Result<usize, GridError> {
  if !is_valid_cell(h) {
    return Err(GridError::CellInvalid);
  }
  Ok(if is_pentagon(h) { 5 } else { 2 })
}

/// The icosahedron faces intersected by a cell, in no particular order.
pub fn get_icosahedron_faces(h: CellIndex) -> Result<Vec<i32>, GridError> {
  if !is_valid_cell(h) {
    return Err(GridError::CellInvalid);
  }
  let mut res = h.resolution();
  let pent = is_pentagon(h);

  // Class II pentagons have all vertices exactly on icosahedron edges,
  // which defeats the vertex test; their center child crosses the same
  // faces, so recurse on it. (Resolution 15 is Class III, so this always
  // terminates.)
  if pent && !is_class_iii_res(res) {
    return get_icosahedron_faces(h.direct_child(Digit::Center));
  }

  let mut fijk = cell_to_face_ijk(h)?;

  let mut faces: Vec<i32> = Vec::with_capacity(if pent { 5 } else { 2 });
  if pent {
    for mut vert in fijk.pent_verts(&mut res) {
      vert.adjust_pent_vert_overage(res);
      if !faces.contains(&vert.face) {
        faces.push(vert.face);
      }
    }
  } else {
    for mut vert in fijk.hex_verts(&mut res) {
      vert.adjust_overage_class_ii(res, false, true);
      if !faces.contains(&vert.face) {
        faces.push(vert.face);
      }
    }
  }
  Ok(faces)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::index::string_to_cell;

  #[test]
  fn pentagon_predicate() {
    assert!(!is_pentagon(string_to_cell("85283473fffffff")));
    assert!(is_pentagon(string_to_cell("8009fffffffffff")));
    assert!(!is_pentagon(CellIndex::NULL));
  }

  #[test]
  fn base_cell_number_and_class() {
    let cell = string_to_cell("85283473fffffff");
    assert_eq!(get_base_cell_number(cell), 20);
    assert!(is_res_class_iii(cell), "res 5 is class III");
    assert!(!is_res_class_iii(string_to_cell("8428347ffffffff")), "res 4 is class II");
  }

  #[test]
  fn cell_counts() {
    assert_eq!(get_num_cells(0), Ok(122));
    assert_eq!(get_num_cells(1), Ok(842));
    assert_eq!(get_num_cells(15), Ok(569_707_381_193_162));
    assert_eq!(get_num_cells(16), Err(GridError::ResolutionDomain));
  }

  #[test]
  fn res0_and_pentagon_lists() {
    let res0 = get_res0_cells();
    assert_eq!(res0.len(), 122);
    assert!(res0.iter().all(|&c| is_valid_cell(c)));

    for res in [0, 5, 15] {
      let pents = get_pentagons(res).unwrap();
      assert_eq!(pents.len(), pentagon_count() as usize);
      for p in pents {
        assert!(is_pentagon(p), "res {res}");
        assert_eq!(p.resolution(), res);
      }
    }
    assert!(get_pentagons(-1).is_err());
  }

  #[test]
  fn face_membership() {
    // a cell well inside a face touches exactly one
    let cell = string_to_cell("85283473fffffff");
    let faces = get_icosahedron_faces(cell).unwrap();
    assert!(!faces.is_empty() && faces.len() <= max_face_count(cell).unwrap());
    for f in &faces {
      assert!((0..20).contains(f));
    }

    // a res-0 pentagon touches all five surrounding faces
    let pent = string_to_cell("8009fffffffffff");
    let pent_faces = get_icosahedron_faces(pent).unwrap();
    assert_eq!(pent_faces.len(), 5);
  }
}
