//! Vertical navigation of the cell hierarchy: parents, children, center
//! children and the dense child-position ordering.

use crate::constants::MAX_RESOLUTION;
use crate::coords::Digit;
use crate::error::GridError;
use crate::index::{is_valid_cell, CellIndex};
use crate::inspection::is_pentagon;
use crate::iterators::ChildIter;
use crate::math::ipow;

/// Whether `child_res` is a valid child resolution for the cell. Every
/// resolution is a child resolution of itself.
fn has_child_at_res(parent: CellIndex, child_res: i32) -> bool {
  (parent.resolution()..=MAX_RESOLUTION).contains(&child_res)
}

/// Number of descendants of a pentagon cell, `n` resolution levels down.
/// One pentagon subtree plus five full hexagon subtrees per level.
fn pentagon_children_count(n: i32) -> i64 {
  1 + 5 * (ipow(7, i64::from(n)) - 1) / 6
}

/// The ancestor of `h` at `parent_res`: the digit sequence truncated to
/// the coarser resolution.
pub fn cell_to_parent(h: CellIndex, parent_res: i32) -> Result<CellIndex, GridError> {
  if !is_valid_cell(h) {
    return Err(GridError::CellInvalid);
  }
  let child_res = h.resolution();
  if !(0..=child_res).contains(&parent_res) {
    return Err(GridError::ResolutionDomain);
  }
  if parent_res == child_res {
    return Ok(h);
  }

  let mut parent = h;
  parent.set_resolution(parent_res);
  for r in (parent_res + 1)..=child_res {
    parent.set_digit(r, Digit::Invalid);
  }
  Ok(parent)
}

/// Exact number of descendants of `h` at `child_res`.
pub fn cell_to_children_size(h: CellIndex, child_res: i32) -> Result<i64, GridError> {
  if !is_valid_cell(h) {
    return Err(GridError::CellInvalid);
  }
  if !has_child_at_res(h, child_res) {
    return Err(GridError::ResolutionDomain);
  }
  let n = child_res - h.resolution();
  if is_pentagon(h) {
    Ok(pentagon_children_count(n))
  } else {
    Ok(ipow(7, i64::from(n)))
  }
}

/// All descendants of `h` at `child_res`, in ascending index order.
pub fn cell_to_children(h: CellIndex, child_res: i32) -> Result<Vec<CellIndex>, GridError> {
  let size = cell_to_children_size(h, child_res)?;
  let mut out = Vec::with_capacity(size as usize);
  out.extend(ChildIter::new(h, child_res));
  Ok(out)
}

/// The single descendant reached by appending all-center digits.
pub fn cell_to_center_child(h: CellIndex, child_res: i32) -> Result<CellIndex, GridError> {
  if !is_valid_cell(h) {
    return Err(GridError::CellInvalid);
  }
  if !has_child_at_res(h, child_res) {
    return Err(GridError::ResolutionDomain);
  }

  let parent_res = h.resolution();
  let mut child = h;
  child.set_resolution(child_res);
  for r in (parent_res + 1)..=child_res {
    child.set_digit(r, Digit::Center);
  }
  Ok(child)
}

/// The position of `child` in the dense, gap-free ordering of all
/// descendants (at the child's own resolution) of its ancestor at
/// `parent_res`. The ordering is lexicographic over the digit sequence,
/// with pentagon subtrees closing the gap left by the deleted k-axis
/// digit.
pub fn cell_to_child_pos(child: CellIndex, parent_res: i32) -> Result<i64, GridError> {
  let child_res = child.resolution();
  // validates the child and the resolution range
  let parent = cell_to_parent(child, parent_res)?;

  if !is_pentagon(parent) {
    // the digit sequence is a base-7 number
    let mut pos: i64 = 0;
    for res in (parent_res + 1)..=child_res {
      pos += ipow(7, i64::from(child_res - res)) * child.digit(res) as i64;
    }
    return Ok(pos);
  }

  // beneath a pentagon, the subtree stays pentagonal until the first
  // non-center digit, which skips K; afterwards the count is plain base 7
  let mut pos: i64 = 0;
  let mut on_pentagon_spine = true;
  for res in (parent_res + 1)..=child_res {
    let hex_count = ipow(7, i64::from(child_res - res));
    let digit = child.digit(res);
    if on_pentagon_spine {
      match digit {
        Digit::Center => {}
        Digit::K => return Err(GridError::CellInvalid),
        _ => {
          on_pentagon_spine = false;
          pos += pentagon_children_count(child_res - res) + (digit as i64 - 2) * hex_count;
        }
      }
    } else {
      pos += hex_count * digit as i64;
    }
  }
  Ok(pos)
}

/// The inverse of [`cell_to_child_pos`]: the descendant of `parent` at
/// `child_res` occupying position `child_pos`.
pub fn child_pos_to_cell(child_pos: i64, parent: CellIndex, child_res: i32) -> Result<CellIndex, GridError> {
  if !(0..=MAX_RESOLUTION).contains(&child_res) {
    return Err(GridError::ResolutionDomain);
  }
  let parent_res = parent.resolution();
  if child_res < parent_res {
    return Err(GridError::ResolutionMismatch);
  }
  if !is_valid_cell(parent) {
    return Err(GridError::CellInvalid);
  }
  let max_count = cell_to_children_size(parent, child_res)?;
  if !(0..max_count).contains(&child_pos) {
    return Err(GridError::Domain);
  }

  let mut child = parent;
  child.set_resolution(child_res);
  let mut pos = child_pos;
  let mut on_pentagon_spine = is_pentagon(parent);

  for res in (parent_res + 1)..=child_res {
    let hex_count = ipow(7, i64::from(child_res - res));
    if on_pentagon_spine {
      let pent_count = pentagon_children_count(child_res - res);
      if pos < pent_count {
        child.set_digit(res, Digit::Center);
      } else {
        on_pentagon_spine = false;
        pos -= pent_count;
        // digit values 0 and 1 are taken by the spine and the deleted axis
        child.set_digit(res, Digit::from_bits((pos / hex_count + 2) as u8));
        pos %= hex_count;
      }
    } else {
      child.set_digit(res, Digit::from_bits((pos / hex_count) as u8));
      pos %= hex_count;
    }
  }
  Ok(child)
}
