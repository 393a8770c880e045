//! Exact per-cell measures derived from the projected geometry.

use crate::constants::EARTH_RADIUS_KM;
use crate::error::GridError;
use crate::index::{is_valid_cell, CellIndex};
use crate::indexing::cell_to_boundary;
use crate::polygon::sphere_area_rads2;

/// Exact area of a cell in steradians.
pub fn cell_area_rads2(cell: CellIndex) -> Result<f64, GridError> {
  if !is_valid_cell(cell) {
    return Err(GridError::CellInvalid);
  }
  let boundary = cell_to_boundary(cell)?;
  Ok(sphere_area_rads2(boundary.verts()))
}

/// Exact area of a cell in square kilometers.
pub fn cell_area_km2(cell: CellIndex) -> Result<f64, GridError> {
  Ok(cell_area_rads2(cell)? * EARTH_RADIUS_KM * EARTH_RADIUS_KM)
}

/// Exact area of a cell in square meters.
pub fn cell_area_m2(cell: CellIndex) -> Result<f64, GridError> {
  Ok(cell_area_km2(cell)? * 1_000_000.0)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::index::string_to_cell;
  use crate::latlng::get_hexagon_area_avg_km2;

  #[test]
  fn reference_cell_area() {
    let cell = string_to_cell("85283473fffffff");
    let rads2 = cell_area_rads2(cell).unwrap();
    assert!((rads2 - 0.0000065310).abs() < 0.0000065310 * 0.01, "got {rads2}");

    let km2 = cell_area_km2(cell).unwrap();
    assert!((km2 - 265.0925581283).abs() < 265.0 * 0.01, "got {km2}");
    assert!((cell_area_m2(cell).unwrap() - km2 * 1e6).abs() < 1.0);
  }

  #[test]
  fn areas_cluster_around_the_resolution_average() {
    let cell = string_to_cell("85283473fffffff");
    let avg = get_hexagon_area_avg_km2(5).unwrap();
    let exact = cell_area_km2(cell).unwrap();
    assert!((exact - avg).abs() < avg * 0.25);
  }

  #[test]
  fn invalid_cells_rejected() {
    assert_eq!(cell_area_rads2(CellIndex::NULL), Err(GridError::CellInvalid));
  }
}
