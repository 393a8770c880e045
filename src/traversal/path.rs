//! Shortest grid paths by cube-coordinate line interpolation.

use crate::coords::CoordIJK;
use crate::error::GridError;
use crate::index::CellIndex;
use crate::local_ij::{cell_to_local_ijk, local_ijk_to_cell};
use crate::traversal::distance::grid_distance;

/// Number of cells in the path from `start` to `end`, including both
/// endpoints. Fails exactly when [`grid_distance`] fails.
pub fn grid_path_cells_size(start: CellIndex, end: CellIndex) -> Result<i64, GridError> {
  Ok(grid_distance(start, end)? + 1)
}

/// Round fractional cube coordinates to the nearest cell, preserving
/// `i + j + k == 0` by correcting the component with the largest error.
fn cube_round(i: f64, j: f64, k: f64) -> CoordIJK {
  let mut ri = i.round();
  let mut rj = j.round();
  let mut rk = k.round();

  let i_diff = (ri - i).abs();
  let j_diff = (rj - j).abs();
  let k_diff = (rk - k).abs();

  if i_diff > j_diff && i_diff > k_diff {
    ri = -rj - rk;
  } else if j_diff > k_diff {
    rj = -ri - rk;
  } else {
    rk = -ri - rj;
  }
  CoordIJK::new(ri as i32, rj as i32, rk as i32)
}

/// The inclusive shortest path of grid-adjacent cells from `start` to
/// `end`. Consecutive output cells are neighbors and the path length is
/// `grid_distance + 1`. Fails like [`grid_distance`], plus `Pentagon`
/// when the straight line would cross pentagon distortion.
pub fn grid_path_cells(start: CellIndex, end: CellIndex) -> Result<Vec<CellIndex>, GridError> {
  let distance = grid_distance(start, end)?;

  // both conversions succeed if the distance computation did
  let mut start_ijk = cell_to_local_ijk(start, start)?;
  let mut end_ijk = cell_to_local_ijk(start, end)?;

  start_ijk.to_cube();
  end_ijk.to_cube();

  let (i_step, j_step, k_step) = if distance == 0 {
    (0.0, 0.0, 0.0)
  } else {
    let d = distance as f64;
    (
      f64::from(end_ijk.i - start_ijk.i) / d,
      f64::from(end_ijk.j - start_ijk.j) / d,
      f64::from(end_ijk.k - start_ijk.k) / d,
    )
  };

  let mut out = Vec::with_capacity(distance as usize + 1);
  for n in 0..=distance {
    let n = n as f64;
    let mut current = cube_round(
      f64::from(start_ijk.i) + i_step * n,
      f64::from(start_ijk.j) + j_step * n,
      f64::from(start_ijk.k) + k_step * n,
    );
    current.from_cube();
    out.push(local_ijk_to_cell(start, &current)?);
  }
  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::indexing::latlng_to_cell;
  use crate::traversal::neighbors::are_neighbor_cells;
  use crate::types::LatLng;

  #[test]
  fn path_to_self() {
    let h = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 5).unwrap();
    assert_eq!(grid_path_cells(h, h), Ok(vec![h]));
    assert_eq!(grid_path_cells_size(h, h), Ok(1));
  }

  #[test]
  fn path_endpoints_adjacency_and_length() {
    let start = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 7).unwrap();
    let end = latlng_to_cell(&LatLng::from_degrees(37.812, -122.361), 7).unwrap();

    let distance = grid_distance(start, end).unwrap();
    assert!(distance > 1, "endpoints chosen several cells apart");

    let path = grid_path_cells(start, end).unwrap();
    assert_eq!(path.len() as i64, distance + 1);
    assert_eq!(path[0], start);
    assert_eq!(*path.last().unwrap(), end);
    for pair in path.windows(2) {
      assert_eq!(are_neighbor_cells(pair[0], pair[1]), Ok(true), "{} -> {}", pair[0], pair[1]);
    }
  }

  #[test]
  fn path_errors_match_distance_errors() {
    let res5 = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 5).unwrap();
    let res6 = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 6).unwrap();
    assert_eq!(grid_path_cells(res5, res6), Err(GridError::ResolutionMismatch));
    assert_eq!(grid_path_cells_size(res5, res6), Err(GridError::ResolutionMismatch));
  }
}
