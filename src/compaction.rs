//! Merging complete sibling sets into parents, and the inverse expansion.

use crate::constants::MAX_RESOLUTION;
use crate::error::GridError;
use crate::hierarchy::{cell_to_children_size, cell_to_parent};
use crate::index::{is_valid_cell, CellIndex, NULL_CELL};
use crate::inspection::is_pentagon;
use crate::iterators::ChildIter;

/// Compact a set of same-resolution cells: any complete set of siblings
/// is replaced by their parent, repeatedly, until no further merge is
/// possible. Null entries are ignored; duplicates are an error.
pub fn compact_cells(cell_set: &[CellIndex]) -> Result<Vec<CellIndex>, GridError> {
  let mut current: Vec<CellIndex> = cell_set.iter().copied().filter(|&h| h != NULL_CELL).collect();
  if current.is_empty() {
    return Ok(Vec::new());
  }

  let res = current[0].resolution();
  for &cell in &current {
    if !is_valid_cell(cell) {
      return Err(GridError::CellInvalid);
    }
    if cell.resolution() != res {
      return Err(GridError::ResolutionMismatch);
    }
  }

  current.sort_unstable();
  if current.windows(2).any(|w| w[0] == w[1]) {
    return Err(GridError::DuplicateInput);
  }

  let mut out = Vec::new();
  while !current.is_empty() {
    let cur_res = current[0].resolution();
    if cur_res == 0 {
      out.append(&mut current);
      break;
    }

    // sorted input keeps siblings adjacent, so complete sets show up as
    // runs sharing a parent
    let mut promoted: Vec<CellIndex> = Vec::new();
    let mut i = 0;
    while i < current.len() {
      let parent = cell_to_parent(current[i], cur_res - 1)?;
      let mut j = i + 1;
      while j < current.len() && cell_to_parent(current[j], cur_res - 1)? == parent {
        j += 1;
      }
      let family = if is_pentagon(parent) { 6 } else { 7 };
      if j - i == family {
        promoted.push(parent);
      } else {
        out.extend_from_slice(&current[i..j]);
      }
      i = j;
    }

    // parent order follows child order, so the next round stays sorted
    current = promoted;
  }
  Ok(out)
}

/// Exact output size of [`uncompact_cells`] for the given set and target
/// resolution.
pub fn uncompact_cells_size(compacted_set: &[CellIndex], res: i32) -> Result<i64, GridError> {
  if !(0..=MAX_RESOLUTION).contains(&res) {
    return Err(GridError::ResolutionDomain);
  }
  let mut count: i64 = 0;
  for &cell in compacted_set {
    if cell == NULL_CELL {
      continue;
    }
    if !is_valid_cell(cell) {
      return Err(GridError::CellInvalid);
    }
    if cell.resolution() > res {
      return Err(GridError::ResolutionMismatch);
    }
    count = count.saturating_add(cell_to_children_size(cell, res)?);
  }
  Ok(count)
}

/// Expand every cell in the set into its full descendant set at `res`.
/// Cells already at `res` pass through; cells finer than `res` fail with
/// a resolution mismatch.
pub fn uncompact_cells(compacted_set: &[CellIndex], res: i32) -> Result<Vec<CellIndex>, GridError> {
  let size = uncompact_cells_size(compacted_set, res)?;
  let mut out = Vec::with_capacity(size as usize);
  for &cell in compacted_set {
    if cell == NULL_CELL {
      continue;
    }
    out.extend(ChildIter::new(cell, res));
  }
  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::hierarchy::cell_to_children;
  use crate::index::string_to_cell;
  use std::collections::HashSet;

  #[test]
  fn compact_complete_family() {
    let parent = string_to_cell("85283473fffffff");
    let children = cell_to_children(parent, 6).unwrap();
    assert_eq!(compact_cells(&children), Ok(vec![parent]));
  }

  #[test]
  fn compact_incomplete_family_is_identity() {
    let parent = string_to_cell("85283473fffffff");
    let mut children = cell_to_children(parent, 6).unwrap();
    children.pop();
    let mut result = compact_cells(&children).unwrap();
    result.sort_unstable();
    assert_eq!(result, children);
  }

  #[test]
  fn compact_two_levels() {
    let grandparent = string_to_cell("8428347ffffffff");
    let res6 = uncompact_cells(&[grandparent], 6).unwrap();
    assert_eq!(res6.len(), 49);
    assert_eq!(compact_cells(&res6), Ok(vec![grandparent]));
  }

  #[test]
  fn compact_input_errors() {
    let cell = string_to_cell("86283470fffffff");
    assert_eq!(compact_cells(&[cell, cell]), Err(GridError::DuplicateInput));

    let mixed = [string_to_cell("85283473fffffff"), cell];
    assert_eq!(compact_cells(&mixed), Err(GridError::ResolutionMismatch));

    assert_eq!(compact_cells(&[CellIndex(0x1)]), Err(GridError::CellInvalid));
    assert_eq!(compact_cells(&[]), Ok(Vec::new()));
  }

  #[test]
  fn compact_pentagon_family() {
    let pent = string_to_cell("8009fffffffffff");
    assert!(is_pentagon(pent));
    let children = cell_to_children(pent, 1).unwrap();
    assert_eq!(children.len(), 6);
    assert_eq!(compact_cells(&children), Ok(vec![pent]));
  }

  #[test]
  fn uncompact_sizes_and_errors() {
    let cell = string_to_cell("85283473fffffff");
    assert_eq!(uncompact_cells_size(&[cell], 5), Ok(1));
    assert_eq!(uncompact_cells_size(&[cell], 6), Ok(7));
    assert_eq!(uncompact_cells_size(&[cell], 7), Ok(49));
    assert_eq!(uncompact_cells_size(&[cell], 4), Err(GridError::ResolutionMismatch));
    assert_eq!(uncompact_cells_size(&[NULL_CELL], 5), Ok(0));
    assert_eq!(uncompact_cells_size(&[cell], 16), Err(GridError::ResolutionDomain));
    assert_eq!(uncompact_cells(&[cell], 4), Err(GridError::ResolutionMismatch));
  }

  #[test]
  fn uncompact_compact_is_stable() {
    // compaction inverse: uncompact(compact(S), r) == uncompact(S, r)
    let parent = string_to_cell("85283473fffffff");
    let cells = cell_to_children(parent, 7).unwrap();
    let compacted = compact_cells(&cells).unwrap();
    assert_eq!(compacted, vec![parent]);

    let direct: HashSet<_> = uncompact_cells(&cells, 9).unwrap().into_iter().collect();
    let via_compact: HashSet<_> = uncompact_cells(&compacted, 9).unwrap().into_iter().collect();
    assert_eq!(direct, via_compact);
  }
}
