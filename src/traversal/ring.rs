//! Hollow rings: the cells at exactly grid distance k.

use crate::error::GridError;
use crate::index::{is_valid_cell, CellIndex, NULL_CELL};
use crate::inspection::is_pentagon;
use crate::traversal::disk::{grid_disk_distances_safe, max_grid_disk_size, NEXT_RING_DIRECTION, RING_DIRECTIONS};
use crate::traversal::neighbors::neighbor_rotations;

/// Fast hollow ring of radius `k` around the origin. Output holds one
/// cell for `k == 0` and `6k` cells otherwise, in traversal order. Fails
/// with `Pentagon` when a pentagon or its distortion is encountered.
pub fn grid_ring_unsafe(origin: CellIndex, k: i32, out: &mut [CellIndex]) -> Result<(), GridError> {
  if k < 0 {
    return Err(GridError::Domain);
  }
  let size = if k == 0 { 1 } else { 6 * k as usize };
  if out.len() < size {
    return Err(GridError::MemoryBounds);
  }
  if !is_valid_cell(origin) {
    return Err(GridError::CellInvalid);
  }
  if k == 0 {
    out[0] = origin;
    return Ok(());
  }
  if is_pentagon(origin) {
    return Err(GridError::Pentagon);
  }

  // walk out to the ring
  let mut rotations = 0;
  let mut current = origin;
  for _ in 0..k {
    current = neighbor_rotations(current, NEXT_RING_DIRECTION, &mut rotations)?;
    if is_pentagon(current) {
      return Err(GridError::Pentagon);
    }
  }

  let ring_start = current;
  let mut idx = 0;
  out[idx] = current;
  idx += 1;

  for (side, direction) in RING_DIRECTIONS.iter().enumerate() {
    for pos in 0..k {
      current = neighbor_rotations(current, *direction, &mut rotations)?;
      // the final step returns to the start; traverse it for the
      // distortion check but do not record it twice
      if pos != k - 1 || side != RING_DIRECTIONS.len() - 1 {
        out[idx] = current;
        idx += 1;
        if is_pentagon(current) {
          return Err(GridError::Pentagon);
        }
      }
    }
  }

  // a spiral that does not close means distortion slipped through
  if current != ring_start {
    return Err(GridError::Pentagon);
  }
  Ok(())
}

/// Hollow ring of radius `k`, correct near pentagons: tries the fast
/// walk, then falls back to filtering a safe disk by distance. Ordering
/// is unspecified.
pub fn grid_ring(origin: CellIndex, k: i32) -> Result<Vec<CellIndex>, GridError> {
  if k < 0 {
    return Err(GridError::Domain);
  }
  let size = if k == 0 { 1 } else { 6 * k as usize };
  let mut out = vec![NULL_CELL; size];
  match grid_ring_unsafe(origin, k, &mut out) {
    Ok(()) => Ok(out),
    Err(GridError::Pentagon) => {
      let disk_size = max_grid_disk_size(k)? as usize;
      let mut cells = vec![NULL_CELL; disk_size];
      let mut distances = vec![0i32; disk_size];
      grid_disk_distances_safe(origin, k, &mut cells, &mut distances)?;
      Ok(
        cells
          .into_iter()
          .zip(distances)
          .filter(|&(c, d)| c != NULL_CELL && d == k)
          .map(|(c, _)| c)
          .collect(),
      )
    }
    Err(e) => Err(e),
  }
}
