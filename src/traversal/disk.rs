//! Filled disks (k-rings): every cell within grid distance k of an
//! origin.
//!
//! Two algorithms are provided. The fast spiral walk assumes no pentagon
//! distortion and fails with `Pentagon` when it meets any; the safe
//! recursive walk is always correct but slower and uses its output buffer
//! as a hash set, leaving null holes between entries.

use crate::constants::NUM_CELLS_MAX_RES;
use crate::coords::Digit;
use crate::error::GridError;
use crate::index::{is_valid_cell, CellIndex, NULL_CELL};
use crate::inspection::is_pentagon;
use crate::traversal::neighbors::neighbor_rotations;

/// Ring traversal directions, one per side of the hexagonal ring.
pub(crate) const RING_DIRECTIONS: [Digit; 6] = [Digit::J, Digit::Jk, Digit::K, Digit::Ik, Digit::I, Digit::Ij];
/// Direction stepping outward onto the next larger ring.
pub(crate) const NEXT_RING_DIRECTION: Digit = Digit::I;

/// A disk of this radius covers every cell at the finest resolution.
const K_ALL_CELLS_AT_MAX_RES: i32 = 13_780_510;

/// Maximum number of cells in a disk of radius `k`: `3k(k+1) + 1`,
/// capped at the total cell count of the finest resolution.
pub fn max_grid_disk_size(k: i32) -> Result<i64, GridError> {
  if k < 0 {
    return Err(GridError::Domain);
  }
  if k >= K_ALL_CELLS_AT_MAX_RES {
    return Ok(NUM_CELLS_MAX_RES);
  }
  let k = i64::from(k);
  Ok(3 * k * (k + 1) + 1)
}

/// Recursive safe disk algorithm. `out` doubles as an open-addressed hash
/// set keyed by the index value; `distances` rides along with it.
fn disk_distances_recursive(
  origin: CellIndex,
  k: i32,
  out: &mut [CellIndex],
  distances: &mut [i32],
  current_k: i32,
) -> Result<(), GridError> {
  let max_idx = out.len() as u64;

  // find this cell's slot, probing linearly past collisions
  let mut offset = (origin.0 % max_idx) as usize;
  loop {
    if out[offset] == NULL_CELL {
      break;
    }
    if out[offset] == origin {
      if distances[offset] <= current_k {
        // already reached by a path at least as short
        return Ok(());
      }
      break;
    }
    offset = (offset + 1) % max_idx as usize;
  }
  out[offset] = origin;
  distances[offset] = current_k;

  if current_k >= k {
    return Ok(());
  }

  for dir in RING_DIRECTIONS {
    let mut rotations = 0;
    match neighbor_rotations(origin, dir, &mut rotations) {
      Ok(next) => disk_distances_recursive(next, k, out, distances, current_k + 1)?,
      // stepping off a pentagon's deleted axis is an expected dead end
      Err(GridError::Pentagon) => {}
      Err(e) => return Err(e),
    }
  }
  Ok(())
}

/// Safe disk with distances. Output slices must hold at least
/// [`max_grid_disk_size`] entries; unused slots are left as the null
/// index and the filled slots are unordered.
pub fn grid_disk_distances_safe(
  origin: CellIndex,
  k: i32,
  out: &mut [CellIndex],
  distances: &mut [i32],
) -> Result<(), GridError> {
  let size = max_grid_disk_size(k)? as usize;
  if out.len() < size || distances.len() < size {
    return Err(GridError::MemoryBounds);
  }
  if !is_valid_cell(origin) {
    return Err(GridError::CellInvalid);
  }
  out.fill(NULL_CELL);
  distances.fill(0);
  // both slices are truncated to the disk size so the probe sequence
  // stays inside the pair of them
  disk_distances_recursive(origin, k, &mut out[..size], &mut distances[..size], 0)
}

/// Fast spiral disk with distances. Output is ordered ring by ring.
/// Fails with `Pentagon` whenever a pentagon (or its distortion) is
/// encountered; callers fall back to the safe algorithm.
pub fn grid_disk_distances_unsafe(
  origin: CellIndex,
  k: i32,
  out: &mut [CellIndex],
  mut distances: Option<&mut [i32]>,
) -> Result<(), GridError> {
  if k < 0 {
    return Err(GridError::Domain);
  }
  let size = max_grid_disk_size(k)? as usize;
  if out.len() < size {
    return Err(GridError::MemoryBounds);
  }
  if let Some(ref d) = distances {
    if d.len() < size {
      return Err(GridError::MemoryBounds);
    }
  }
  if !is_valid_cell(origin) {
    return Err(GridError::CellInvalid);
  }

  let mut idx = 0;
  out[idx] = origin;
  if let Some(ref mut d) = distances {
    d[idx] = 0;
  }
  idx += 1;

  if is_pentagon(origin) {
    return Err(GridError::Pentagon);
  }

  let mut current = origin;
  // current ring, side of the ring, and position along the side
  let mut ring = 1;
  let mut direction = 0;
  let mut i = 0;
  // accumulated ccw rotations from crossed faces
  let mut rotations = 0;

  while ring <= k {
    if direction == 0 && i == 0 {
      // step out to the next ring; this cell is recorded when the
      // spiral closes back onto it
      current = neighbor_rotations(current, NEXT_RING_DIRECTION, &mut rotations)?;
      if is_pentagon(current) {
        return Err(GridError::Pentagon);
      }
    }

    current = neighbor_rotations(current, RING_DIRECTIONS[direction], &mut rotations)?;
    out[idx] = current;
    if let Some(ref mut d) = distances {
      d[idx] = ring;
    }
    idx += 1;

    i += 1;
    if i == ring {
      i = 0;
      direction += 1;
      if direction == 6 {
        direction = 0;
        ring += 1;
      }
    }

    if is_pentagon(current) {
      return Err(GridError::Pentagon);
    }
  }
  Ok(())
}

/// Fast spiral disk without distances; see
/// [`grid_disk_distances_unsafe`].
pub fn grid_disk_unsafe(origin: CellIndex, k: i32, out: &mut [CellIndex]) -> Result<(), GridError> {
  grid_disk_distances_unsafe(origin, k, out, None)
}

/// Disk with distances: tries the fast spiral first and falls back to
/// the safe algorithm when pentagon distortion interferes. On fallback
/// the output is unordered with null holes.
pub fn grid_disk_distances(
  origin: CellIndex,
  k: i32,
  out: &mut [CellIndex],
  distances: &mut [i32],
) -> Result<(), GridError> {
  match grid_disk_distances_unsafe(origin, k, out, Some(distances)) {
    Ok(()) => Ok(()),
    Err(GridError::Domain) => Err(GridError::Domain),
    Err(GridError::MemoryBounds) => Err(GridError::MemoryBounds),
    Err(GridError::CellInvalid) => Err(GridError::CellInvalid),
    Err(_) => grid_disk_distances_safe(origin, k, out, distances),
  }
}

/// Disk without distances; dense output with null holes on the safe
/// fallback path.
pub fn grid_disk(origin: CellIndex, k: i32, out: &mut [CellIndex]) -> Result<(), GridError> {
  match grid_disk_distances_unsafe(origin, k, out, None) {
    Ok(()) => Ok(()),
    Err(GridError::Domain) => Err(GridError::Domain),
    Err(GridError::MemoryBounds) => Err(GridError::MemoryBounds),
    Err(GridError::CellInvalid) => Err(GridError::CellInvalid),
    Err(_) => {
      let size = max_grid_disk_size(k)? as usize;
      let mut distances = vec![0i32; size];
      grid_disk_distances_safe(origin, k, out, &mut distances)
    }
  }
}

/// Allocating, pruned disk: the cells within distance `k`, no holes, in
/// no particular order.
pub fn grid_disk_cells(origin: CellIndex, k: i32) -> Result<Vec<CellIndex>, GridError> {
  let size = max_grid_disk_size(k)? as usize;
  let mut out = vec![NULL_CELL; size];
  grid_disk(origin, k, &mut out)?;
  out.retain(|&c| c != NULL_CELL);
  Ok(out)
}

/// Allocating, pruned disk with per-cell grid distances.
pub fn grid_disk_distances_cells(origin: CellIndex, k: i32) -> Result<Vec<(CellIndex, i32)>, GridError> {
  let size = max_grid_disk_size(k)? as usize;
  let mut out = vec![NULL_CELL; size];
  let mut distances = vec![0i32; size];
  grid_disk_distances(origin, k, &mut out, &mut distances)?;
  Ok(
    out
      .into_iter()
      .zip(distances)
      .filter(|&(c, _)| c != NULL_CELL)
      .collect(),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::index::string_to_cell;
  use crate::indexing::latlng_to_cell;
  use crate::types::LatLng;
  use std::collections::HashSet;

  #[test]
  fn disk_size_formula() {
    assert_eq!(max_grid_disk_size(0), Ok(1));
    assert_eq!(max_grid_disk_size(1), Ok(7));
    assert_eq!(max_grid_disk_size(2), Ok(19));
    assert_eq!(max_grid_disk_size(-1), Err(GridError::Domain));
    assert_eq!(max_grid_disk_size(K_ALL_CELLS_AT_MAX_RES), Ok(NUM_CELLS_MAX_RES));
  }

  #[test]
  fn disk_k0_is_origin() {
    let origin = string_to_cell("85283473fffffff");
    assert_eq!(grid_disk_cells(origin, 0), Ok(vec![origin]));
  }

  #[test]
  fn disk_k1_matches_reference() {
    let origin = string_to_cell("85283473fffffff");
    let expected: HashSet<CellIndex> = [
      "85283473fffffff",
      "85283447fffffff",
      "8528347bfffffff",
      "85283463fffffff",
      "85283477fffffff",
      "8528340ffffffff",
      "8528340bfffffff",
    ]
    .iter()
    .map(|s| string_to_cell(s))
    .collect();

    let cells: HashSet<CellIndex> = grid_disk_cells(origin, 1).unwrap().into_iter().collect();
    assert_eq!(cells, expected);
  }

  #[test]
  fn disk_sizes_away_from_pentagons() {
    let origin = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 7).unwrap();
    for k in 0..5 {
      let cells = grid_disk_cells(origin, k).unwrap();
      assert_eq!(cells.len() as i64, max_grid_disk_size(k).unwrap(), "k {k}");
      let unique: HashSet<_> = cells.iter().collect();
      assert_eq!(unique.len(), cells.len(), "no duplicates at k {k}");
    }
  }

  #[test]
  fn unsafe_disk_errors_on_pentagon_and_safe_succeeds() {
    let pent = string_to_cell("820807fffffffff");
    assert!(is_pentagon(pent));

    let size = max_grid_disk_size(1).unwrap() as usize;
    let mut out = vec![NULL_CELL; size];
    assert_eq!(grid_disk_unsafe(pent, 1, &mut out), Err(GridError::Pentagon));

    // the combined entry point falls back and yields the 5 neighbors
    let cells = grid_disk_cells(pent, 1).unwrap();
    assert_eq!(cells.len(), 6, "pentagon disk k=1 has origin + 5 neighbors");
  }

  #[test]
  fn distances_partition_disk() {
    let origin = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 7).unwrap();
    let k = 3;
    let cells = grid_disk_distances_cells(origin, k).unwrap();
    for ring in 0..=k {
      let at_ring = cells.iter().filter(|&&(_, d)| d == ring).count();
      let expected = if ring == 0 { 1 } else { 6 * ring as usize };
      assert_eq!(at_ring, expected, "ring {ring}");
    }
  }

  #[test]
  fn disk_input_validation() {
    let origin = string_to_cell("85283473fffffff");
    let mut small = [NULL_CELL; 3];
    assert_eq!(grid_disk(origin, 1, &mut small), Err(GridError::MemoryBounds));
    assert_eq!(grid_disk_cells(NULL_CELL, 1), Err(GridError::CellInvalid));
    assert_eq!(grid_disk_cells(origin, -1), Err(GridError::Domain));
  }
}
