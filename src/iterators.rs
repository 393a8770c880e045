//! Streaming iteration over a cell's descendants, without materializing
//! the full child set.
//!
//! The iterator walks the digit sequence like an odometer, with one extra
//! rule for pentagon ancestry: the first non-center digit between the
//! parent and child resolutions must never be the k-axis digit, so that
//! digit position skips from K to J as it rolls over.

use crate::constants::{MAX_RESOLUTION, NUM_BASE_CELLS};
use crate::coords::Digit;
use crate::index::{base_cell_to_cell, is_valid_cell, CellIndex, NULL_CELL};
use crate::inspection::is_pentagon;

/// Iterator over all children of one cell at a fixed child resolution.
///
/// Yields cells in ascending index order.
#[derive(Debug, Clone, Copy)]
pub struct ChildIter {
  h: CellIndex,
  parent_res: i32,
  skip_digit: i32,
}

impl ChildIter {
  /// Children of `parent` at `child_res`. An invalid parent or resolution
  /// yields an empty iterator.
  #[must_use]
  pub fn new(parent: CellIndex, child_res: i32) -> ChildIter {
    let parent_res = parent.resolution();
    if !(parent_res..=MAX_RESOLUTION).contains(&child_res) || !is_valid_cell(parent) {
      return ChildIter::exhausted();
    }

    let mut h = parent;
    h.set_resolution(child_res);
    for r in (parent_res + 1)..=child_res {
      h.set_digit(r, Digit::Center);
    }

    ChildIter {
      // the center descendant of a pentagon is a pentagon; its deleted
      // k-axis subtree starts rolling over at the finest digit
      skip_digit: if is_pentagon(h) { child_res } else { -1 },
      h,
      parent_res,
    }
  }

  /// Children of a base cell (by number) at `child_res`.
  #[must_use]
  pub fn for_base_cell(base_cell: i32, child_res: i32) -> ChildIter {
    if !(0..NUM_BASE_CELLS).contains(&base_cell) {
      return ChildIter::exhausted();
    }
    ChildIter::new(base_cell_to_cell(base_cell), child_res)
  }

  fn exhausted() -> ChildIter {
    ChildIter {
      h: NULL_CELL,
      parent_res: -1,
      skip_digit: -1,
    }
  }

  /// Add one to the digit at `res`, letting the carry ripple into coarser
  /// digits through the packed representation.
  fn increment_digit(&mut self, res: i32) {
    self.h.0 += 1u64 << ((MAX_RESOLUTION - res) * 3);
  }

  fn step(&mut self) {
    if self.h == NULL_CELL {
      return;
    }

    let child_res = self.h.resolution();
    self.increment_digit(child_res);

    let mut i = child_res;
    while i >= self.parent_res {
      if i == self.parent_res {
        // the carry walked into the parent's own digits: exhausted
        *self = ChildIter::exhausted();
        return;
      }
      if i == self.skip_digit && self.h.digit(i) == Digit::K {
        // skip the deleted pentagon subsequence; the rollover
        // responsibility moves one digit coarser
        self.increment_digit(i);
        self.skip_digit -= 1;
        return;
      }
      if self.h.digit(i) == Digit::Invalid {
        // rolled past the last digit value: carry into the next digit
        self.increment_digit(i);
        i -= 1;
      } else {
        return;
      }
    }
  }
}

impl Iterator for ChildIter {
  type Item = CellIndex;

  fn next(&mut self) -> Option<CellIndex> {
    if self.h == NULL_CELL {
      return None;
    }
    let current = self.h;
    self.step();
    Some(current)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::hierarchy::{cell_to_children_size, cell_to_parent};
  use crate::index::string_to_cell;

  #[test]
  fn invalid_inits_are_empty() {
    let parent = string_to_cell("85283473fffffff");
    assert_eq!(ChildIter::new(parent, 4).count(), 0, "coarser child res");
    assert_eq!(ChildIter::new(parent, 16).count(), 0, "res out of range");
    assert_eq!(ChildIter::new(NULL_CELL, 5).count(), 0);
    assert_eq!(ChildIter::for_base_cell(122, 0).count(), 0);
    assert_eq!(ChildIter::for_base_cell(-1, 0).count(), 0);
  }

  #[test]
  fn hexagon_children_complete_and_ordered() {
    let parent = string_to_cell("85283473fffffff");
    let child_res = 7;
    let expected = cell_to_children_size(parent, child_res).unwrap();

    let mut count = 0;
    let mut prev = NULL_CELL;
    for child in ChildIter::new(parent, child_res) {
      assert_eq!(child.resolution(), child_res);
      assert!(is_valid_cell(child));
      assert_eq!(cell_to_parent(child, 5).unwrap(), parent);
      assert!(child.0 > prev.0, "ascending order");
      prev = child;
      count += 1;
    }
    assert_eq!(count, expected);
  }

  #[test]
  fn pentagon_children_skip_deleted_subtree() {
    let pent = ChildIter::for_base_cell(4, 0).next().unwrap();
    assert!(is_pentagon(pent));

    let child_res = 2;
    let expected = cell_to_children_size(pent, child_res).unwrap();
    assert_eq!(expected, 41);

    let mut count = 0;
    for child in ChildIter::new(pent, child_res) {
      assert!(is_valid_cell(child), "{child}");
      assert_eq!(cell_to_parent(child, 0).unwrap(), pent);
      count += 1;
    }
    assert_eq!(count, expected);
  }

  #[test]
  fn same_res_yields_self() {
    let cell = string_to_cell("85283473fffffff");
    let children: Vec<_> = ChildIter::new(cell, 5).collect();
    assert_eq!(children, vec![cell]);
  }
}
