//! Single-step neighbor traversal in the packed digit representation.
//!
//! Stepping to a neighbor rewrites the digit sequence bottom-up through
//! transition tables; crossing a base-cell edge additionally rotates the
//! sequence into the neighbor's frame. Pentagon base cells warp this
//! process around their deleted k-axis.

use crate::base_cells::{
  base_cell_direction, base_cell_is_cw_offset, base_cell_to_face_ijk, is_base_cell_pentagon,
  is_base_cell_polar_pentagon, BASE_CELL_NEIGHBORS, BASE_CELL_NEIGHBOR_60CCW_ROTS, INVALID_BASE_CELL,
};
use crate::constants::NUM_BASE_CELLS;
use crate::coords::face::is_class_iii_res;
use crate::coords::Digit;
use crate::error::GridError;
use crate::index::{is_valid_cell, CellIndex, CELL_MODE, NULL_CELL};
use crate::inspection::is_pentagon;

use crate::coords::Digit::{Center, Ij, Ik, Jk, I, J, K};

/// New digit for the moved-into cell, by current digit and movement
/// direction, on Class III resolutions.
#[rustfmt::skip]
pub(crate) static NEW_DIGIT_II: [[Digit; 7]; 7] = [
  [Center, K,      J,      Jk,     I,      Ik,     Ij],
  [K,      I,      Jk,     Ij,     Ik,     J,      Center],
  [J,      Jk,     K,      I,      Ij,     Center, Ik],
  [Jk,     Ij,     I,      Ik,     Center, K,      J],
  [I,      Ik,     Ij,     Center, J,      Jk,     K],
  [Ik,     J,      Center, K,      Jk,     Ij,     I],
  [Ij,     Center, Ik,     J,      K,      I,      Jk],
];

/// Movement direction to continue with in the next coarser digit, by
/// current digit and movement direction, on Class III resolutions.
/// Center means the move is absorbed at this level.
#[rustfmt::skip]
pub(crate) static NEW_ADJUSTMENT_II: [[Digit; 7]; 7] = [
  [Center, Center, Center, Center, Center, Center, Center],
  [Center, K,      Center, K,      Center, Ik,     Center],
  [Center, Center, J,      Jk,     Center, Center, J],
  [Center, K,      Jk,     Jk,     Center, Center, Center],
  [Center, Center, Center, Center, I,      I,      Ij],
  [Center, Ik,     Center, Center, I,      Ik,     Center],
  [Center, Center, J,      Center, Ij,     Center, Ij],
];

/// As [`NEW_DIGIT_II`] for Class II resolutions.
#[rustfmt::skip]
pub(crate) static NEW_DIGIT_III: [[Digit; 7]; 7] = [
  [Center, K,      J,      Jk,     I,      Ik,     Ij],
  [K,      J,      Jk,     I,      Ik,     Ij,     Center],
  [J,      Jk,     I,      Ik,     Ij,     Center, K],
  [Jk,     I,      Ik,     Ij,     Center, K,      J],
  [I,      Ik,     Ij,     Center, K,      J,      Jk],
  [Ik,     Ij,     Center, K,      J,      Jk,     I],
  [Ij,     Center, K,      J,      Jk,     I,      Ik],
];

/// As [`NEW_ADJUSTMENT_II`] for Class II resolutions.
#[rustfmt::skip]
pub(crate) static NEW_ADJUSTMENT_III: [[Digit; 7]; 7] = [
  [Center, Center, Center, Center, Center, Center, Center],
  [Center, K,      Center, Jk,     Center, K,      Center],
  [Center, Center, J,      J,      Center, Center, Ij],
  [Center, Jk,     J,      Jk,     Center, Center, Center],
  [Center, Center, Center, Center, I,      Ik,     I],
  [Center, K,      Center, Center, Ik,     Ik,     Center],
  [Center, Center, Ij,     Center, I,      Center, Ij],
];

/// The neighbor of `origin` in direction `dir`.
///
/// `rotations` expresses `dir` relative to the origin's frame: the given
/// number of ccw rotations is applied to `dir` first, and on return the
/// value accounts for any frame change crossing into the neighbor. Fails
/// with `Pentagon` when the step runs into a deleted pentagon
/// subsequence.
pub(crate) fn neighbor_rotations(
  origin: CellIndex,
  mut dir: Digit,
  rotations: &mut i32,
) -> Result<CellIndex, GridError> {
  let mut out = origin;

  if dir == Digit::Invalid {
    return Err(GridError::Failed);
  }

  // protect against rotation overflow before any additions
  *rotations = rotations.rem_euclid(6);
  for _ in 0..*rotations {
    dir = dir.rotate60_ccw();
  }

  let mut new_rotations = 0;
  let old_base_cell = out.base_cell();
  if !(0..NUM_BASE_CELLS).contains(&old_base_cell) {
    return Err(GridError::CellInvalid);
  }
  let old_leading_digit = out.leading_non_zero_digit();

  // rewrite digits from the finest resolution up until the move is
  // absorbed, possibly crossing into another base cell
  let mut r = out.resolution() - 1;
  loop {
    if r == -1 {
      out.set_base_cell(BASE_CELL_NEIGHBORS[old_base_cell as usize][dir as usize]);
      new_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[old_base_cell as usize][dir as usize];

      if out.base_cell() == INVALID_BASE_CELL {
        // the origin is in a pentagon base cell and the move pointed
        // down the deleted k-axis; that edge actually borders the
        // ik-neighbor
        out.set_base_cell(BASE_CELL_NEIGHBORS[old_base_cell as usize][Digit::Ik as usize]);
        new_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[old_base_cell as usize][Digit::Ik as usize];
        out = out.rotate60_ccw();
        *rotations += 1;
      }
      break;
    }

    let old_digit = out.digit(r + 1);
    if old_digit == Digit::Invalid {
      return Err(GridError::CellInvalid);
    }
    let next_dir;
    if is_class_iii_res(r + 1) {
      out.set_digit(r + 1, NEW_DIGIT_II[old_digit as usize][dir as usize]);
      next_dir = NEW_ADJUSTMENT_II[old_digit as usize][dir as usize];
    } else {
      out.set_digit(r + 1, NEW_DIGIT_III[old_digit as usize][dir as usize]);
      next_dir = NEW_ADJUSTMENT_III[old_digit as usize][dir as usize];
    }

    if next_dir == Digit::Center {
      // the move was absorbed at this level
      break;
    }
    dir = next_dir;
    r -= 1;
  }

  let new_base_cell = out.base_cell();
  if is_base_cell_pentagon(new_base_cell) {
    let mut already_adjusted_k_subsequence = false;

    // force rotation out of the missing k-axes subsequence
    if out.leading_non_zero_digit() == Digit::K {
      if old_base_cell != new_base_cell {
        // traversed into the deleted subsequence of a neighboring
        // pentagon; the offset sense of the entry face decides the
        // rotation direction
        if base_cell_is_cw_offset(new_base_cell, base_cell_to_face_ijk(old_base_cell).face) {
          out = out.rotate60_cw();
        } else {
          out = out.rotate60_ccw();
        }
        already_adjusted_k_subsequence = true;
      } else {
        // traversed into the deleted subsequence from within the same
        // pentagon base cell
        match old_leading_digit {
          Digit::Center => return Err(GridError::Pentagon),
          Digit::Jk => {
            out = out.rotate60_ccw();
            *rotations += 1;
          }
          Digit::Ik => {
            out = out.rotate60_cw();
            *rotations += 5;
          }
          _ => return Err(GridError::Failed),
        }
      }
    }

    for _ in 0..new_rotations {
      out = out.rotate_pent60_ccw();
    }

    // account for the differing orientation of the base cells
    if old_base_cell != new_base_cell {
      if is_base_cell_polar_pentagon(new_base_cell) {
        // polar pentagons have all-i neighbors
        if old_base_cell != 118 && old_base_cell != 8 && out.leading_non_zero_digit() != Digit::Jk {
          *rotations += 1;
        }
      } else if out.leading_non_zero_digit() == Digit::Ik && !already_adjusted_k_subsequence {
        *rotations += 1;
      }
    }
  } else {
    for _ in 0..new_rotations {
      out = out.rotate60_ccw();
    }
  }

  *rotations = (*rotations + new_rotations).rem_euclid(6);
  Ok(out)
}

/// The digit direction from `origin` to a grid-adjacent `destination`, or
/// `Digit::Invalid` if they are not neighbors.
pub(crate) fn direction_for_neighbor(origin: CellIndex, destination: CellIndex) -> Digit {
  if origin == destination {
    return Digit::Center;
  }
  // pentagons have no k-axis neighbor
  let start = if is_pentagon(origin) { Digit::J as u8 } else { Digit::K as u8 };
  for dir_bits in start..Digit::COUNT {
    let dir = Digit::from_bits(dir_bits);
    let mut rotations = 0;
    match neighbor_rotations(origin, dir, &mut rotations) {
      Ok(neighbor) if neighbor == destination => return dir,
      _ => {}
    }
  }
  Digit::Invalid
}

/// Whether two cells share an edge.
pub fn are_neighbor_cells(origin: CellIndex, destination: CellIndex) -> Result<bool, GridError> {
  if origin.mode() != CELL_MODE || destination.mode() != CELL_MODE {
    return Err(GridError::CellInvalid);
  }
  if origin == destination {
    return Ok(false);
  }
  if origin.resolution() != destination.resolution() {
    return Err(GridError::ResolutionMismatch);
  }
  if !is_valid_cell(origin) || !is_valid_cell(destination) {
    return Err(GridError::CellInvalid);
  }
  Ok(direction_for_neighbor(origin, destination) != Digit::Invalid)
}

/// All neighbors of a cell: six for hexagons, five for pentagons.
pub(crate) fn neighbor_cells(origin: CellIndex) -> Vec<CellIndex> {
  let mut out = Vec::with_capacity(6);
  for dir_bits in 1..Digit::COUNT {
    let mut rotations = 0;
    if let Ok(neighbor) = neighbor_rotations(origin, Digit::from_bits(dir_bits), &mut rotations) {
      if neighbor != NULL_CELL && !out.contains(&neighbor) {
        out.push(neighbor);
      }
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::index::string_to_cell;
  use crate::indexing::latlng_to_cell;
  use crate::types::LatLng;

  #[test]
  fn hexagon_has_six_distinct_neighbors() {
    let origin = latlng_to_cell(&LatLng::from_degrees(37.779265, -122.419277), 9).unwrap();
    let neighbors = neighbor_cells(origin);
    assert_eq!(neighbors.len(), 6);
    for n in &neighbors {
      assert!(is_valid_cell(*n));
      assert_ne!(*n, origin);
      let dir = direction_for_neighbor(origin, *n);
      assert_ne!(dir, Digit::Invalid);
      // direction roundtrip
      let mut rotations = 0;
      assert_eq!(neighbor_rotations(origin, dir, &mut rotations), Ok(*n));
    }
  }

  #[test]
  fn pentagon_has_five_neighbors() {
    let pent = string_to_cell("820807fffffffff");
    assert!(is_pentagon(pent));
    let neighbors = neighbor_cells(pent);
    assert_eq!(neighbors.len(), 5);
    for n in &neighbors {
      let dir = direction_for_neighbor(pent, *n);
      assert_ne!(dir, Digit::Invalid);
      assert_ne!(dir, Digit::K, "no k-axis neighbor off a pentagon");
    }
  }

  #[test]
  fn pentagon_k_step_is_rejected_within_subtree() {
    // a pentagon cell itself cannot step down its deleted axis
    let pent = string_to_cell("820807fffffffff");
    let mut rotations = 0;
    assert_eq!(neighbor_rotations(pent, Digit::K, &mut rotations), Err(GridError::Pentagon));
  }

  #[test]
  fn neighbor_predicate() {
    let origin = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 9).unwrap();
    let neighbors = neighbor_cells(origin);
    for n in &neighbors {
      assert_eq!(are_neighbor_cells(origin, *n), Ok(true));
      assert_eq!(are_neighbor_cells(*n, origin), Ok(true));
    }
    assert_eq!(are_neighbor_cells(origin, origin), Ok(false));

    // a neighbor of a neighbor picked to be two steps away
    let two_away = neighbor_cells(neighbors[0])
      .into_iter()
      .find(|c| *c != origin && !neighbors.contains(c))
      .unwrap();
    assert_eq!(are_neighbor_cells(origin, two_away), Ok(false));

    let coarser = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 8).unwrap();
    assert_eq!(are_neighbor_cells(origin, coarser), Err(GridError::ResolutionMismatch));
    assert_eq!(are_neighbor_cells(origin, NULL_CELL), Err(GridError::CellInvalid));
  }

  #[test]
  fn known_neighbor_pair() {
    let a = string_to_cell("85283473fffffff");
    let b = string_to_cell("85283477fffffff");
    assert_eq!(are_neighbor_cells(a, b), Ok(true));
  }
}
