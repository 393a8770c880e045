//! Grid distance between two cells of equal resolution.

use crate::error::GridError;
use crate::index::{is_valid_cell, CellIndex, CELL_MODE};
use crate::local_ij::cell_to_local_ijk;

/// Minimum number of edge hops between two cells.
///
/// Computed by projecting both cells into a local frame anchored at the
/// origin, so it can fail with `Failed` when the cells are too far apart
/// or separated by pentagon distortion.
pub fn grid_distance(origin: CellIndex, destination: CellIndex) -> Result<i64, GridError> {
  if origin.mode() != CELL_MODE || destination.mode() != CELL_MODE {
    return Err(GridError::CellInvalid);
  }
  if origin.resolution() != destination.resolution() {
    return Err(GridError::ResolutionMismatch);
  }
  if !is_valid_cell(origin) || !is_valid_cell(destination) {
    return Err(GridError::CellInvalid);
  }

  let origin_ijk = cell_to_local_ijk(origin, origin)?;
  let destination_ijk = cell_to_local_ijk(origin, destination)?;
  Ok(i64::from(origin_ijk.distance_to(&destination_ijk)))
}
