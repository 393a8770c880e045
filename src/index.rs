//! The 64-bit cell index: bit layout, structural validation and digit
//! rotations.
//!
//! Layout, high bit to low: 1 reserved bit, 4 mode bits, 3 reserved bits,
//! 4 resolution bits, 7 base-cell bits, then fifteen 3-bit digits. Digit
//! slots past the encoded resolution hold the sentinel value 7.

use crate::base_cells::is_base_cell_pentagon;
use crate::constants::{MAX_RESOLUTION, NUM_BASE_CELLS};
use crate::coords::Digit;
use crate::error::GridError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Index mode for cells.
pub const CELL_MODE: u8 = 1;
/// Index mode for directed edges.
pub const DIRECTED_EDGE_MODE: u8 = 2;
/// Index mode for undirected edges (reserved, not produced by this crate).
pub const UNDIRECTED_EDGE_MODE: u8 = 3;
/// Index mode for topological vertexes.
pub const VERTEX_MODE: u8 = 4;

const HIGH_BIT_OFFSET: u8 = 63;
const MODE_OFFSET: u8 = 59;
const RESERVED_OFFSET: u8 = 56;
const RES_OFFSET: u8 = 52;
const BASE_CELL_OFFSET: u8 = 45;
const PER_DIGIT_BITS: u8 = 3;

const HIGH_BIT_MASK: u64 = 1 << HIGH_BIT_OFFSET;
const MODE_MASK: u64 = 0b1111 << MODE_OFFSET;
const RESERVED_MASK: u64 = 0b111 << RESERVED_OFFSET;
const RES_MASK: u64 = 0b1111 << RES_OFFSET;
const BASE_CELL_MASK: u64 = 0b111_1111 << BASE_CELL_OFFSET;
const DIGIT_MASK: u64 = 0b111;

/// Blank index pattern: mode 0, resolution 0, base cell 0, every digit
/// set to the sentinel. Field setters carve real values into this.
pub(crate) const INIT_PATTERN: u64 = 0x0000_1fff_ffff_ffff;

/// A packed 64-bit grid index. Depending on its mode bits it identifies a
/// cell, a directed edge or a topological vertex.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellIndex(pub u64);

/// The all-zero index. Never valid in any mode; used as the absent marker
/// in dense outputs.
pub const NULL_CELL: CellIndex = CellIndex(0);

impl CellIndex {
  /// The never-valid null index.
  pub const NULL: CellIndex = NULL_CELL;

  /// A fresh cell-mode index at the given resolution and base cell, every
  /// digit initialized to `init_digit`.
  #[must_use]
  pub(crate) fn init(res: i32, base_cell: i32, init_digit: Digit) -> CellIndex {
    let mut h = CellIndex(INIT_PATTERN);
    h.set_mode(CELL_MODE);
    h.set_resolution(res);
    h.set_base_cell(base_cell);
    for r in 1..=res {
      h.set_digit(r, init_digit);
    }
    h
  }

  #[inline]
  #[must_use]
  pub(crate) const fn high_bit(self) -> u8 {
    ((self.0 & HIGH_BIT_MASK) >> HIGH_BIT_OFFSET) as u8
  }

  /// The 4-bit mode field.
  #[inline]
  #[must_use]
  pub const fn mode(self) -> u8 {
    ((self.0 & MODE_MASK) >> MODE_OFFSET) as u8
  }

  #[inline]
  pub(crate) fn set_mode(&mut self, mode: u8) {
    self.0 = (self.0 & !MODE_MASK) | ((mode as u64) << MODE_OFFSET);
  }

  #[inline]
  #[must_use]
  pub(crate) const fn reserved_bits(self) -> u8 {
    ((self.0 & RESERVED_MASK) >> RESERVED_OFFSET) as u8
  }

  #[inline]
  pub(crate) fn set_reserved_bits(&mut self, v: u8) {
    self.0 = (self.0 & !RESERVED_MASK) | ((v as u64) << RESERVED_OFFSET);
  }

  /// The encoded resolution, 0-15.
  #[inline]
  #[must_use]
  pub const fn resolution(self) -> i32 {
    ((self.0 & RES_MASK) >> RES_OFFSET) as i32
  }

  #[inline]
  pub(crate) fn set_resolution(&mut self, res: i32) {
    self.0 = (self.0 & !RES_MASK) | ((res as u64) << RES_OFFSET);
  }

  /// The encoded base cell number, 0-121 for well-formed indexes.
  #[inline]
  #[must_use]
  pub const fn base_cell(self) -> i32 {
    ((self.0 & BASE_CELL_MASK) >> BASE_CELL_OFFSET) as i32
  }

  #[inline]
  pub(crate) fn set_base_cell(&mut self, base_cell: i32) {
    self.0 = (self.0 & !BASE_CELL_MASK) | ((base_cell as u64) << BASE_CELL_OFFSET);
  }

  /// The digit at resolution `res` (1-based).
  #[inline]
  #[must_use]
  pub(crate) fn digit(self, res: i32) -> Digit {
    let shift = (MAX_RESOLUTION - res) * PER_DIGIT_BITS as i32;
    Digit::from_bits(((self.0 >> shift) & DIGIT_MASK) as u8)
  }

  #[inline]
  pub(crate) fn set_digit(&mut self, res: i32, digit: Digit) {
    let shift = (MAX_RESOLUTION - res) * PER_DIGIT_BITS as i32;
    self.0 = (self.0 & !(DIGIT_MASK << shift)) | ((digit as u64) << shift);
  }

  /// The coarsest non-center digit, or `Digit::Center` if every digit is
  /// the center.
  #[must_use]
  pub(crate) fn leading_non_zero_digit(self) -> Digit {
    for r in 1..=self.resolution() {
      let digit = self.digit(r);
      if digit != Digit::Center {
        return digit;
      }
    }
    Digit::Center
  }

  /// The child of this cell one resolution finer, in the given digit
  /// position. No pentagon adjustment is applied.
  #[must_use]
  pub(crate) fn direct_child(self, digit: Digit) -> CellIndex {
    let child_res = self.resolution() + 1;
    let mut child = self;
    child.set_resolution(child_res);
    child.set_digit(child_res, digit);
    child
  }

  /// Rotate the digit sequence 60 degrees counter-clockwise.
  #[must_use]
  pub(crate) fn rotate60_ccw(mut self) -> CellIndex {
    for r in 1..=self.resolution() {
      self.set_digit(r, self.digit(r).rotate60_ccw());
    }
    self
  }

  /// Rotate the digit sequence 60 degrees clockwise.
  #[must_use]
  pub(crate) fn rotate60_cw(mut self) -> CellIndex {
    for r in 1..=self.resolution() {
      self.set_digit(r, self.digit(r).rotate60_cw());
    }
    self
  }

  /// Rotate 60 degrees counter-clockwise about a pentagonal center,
  /// skipping the deleted k-axis subsequence.
  #[must_use]
  pub(crate) fn rotate_pent60_ccw(mut self) -> CellIndex {
    let res = self.resolution();
    let mut found_first_non_zero = false;
    for r in 1..=res {
      self.set_digit(r, self.digit(r).rotate60_ccw());
      if !found_first_non_zero && self.digit(r) != Digit::Center {
        found_first_non_zero = true;
        if self.leading_non_zero_digit() == Digit::K {
          self = self.rotate_pent60_ccw();
        }
      }
    }
    self
  }

  /// Rotate 60 degrees clockwise about a pentagonal center, skipping the
  /// deleted k-axis subsequence.
  #[must_use]
  pub(crate) fn rotate_pent60_cw(mut self) -> CellIndex {
    let res = self.resolution();
    let mut found_first_non_zero = false;
    for r in 1..=res {
      self.set_digit(r, self.digit(r).rotate60_cw());
      if !found_first_non_zero && self.digit(r) != Digit::Center {
        found_first_non_zero = true;
        if self.leading_non_zero_digit() == Digit::K {
          self = self.rotate_pent60_cw();
        }
      }
    }
    self
  }
}

/// Structural validity check for cell-mode indexes. Pure bit inspection;
/// no geometry is computed. The null index is rejected.
#[must_use]
pub fn is_valid_cell(h: CellIndex) -> bool {
  if h.high_bit() != 0 || h.mode() != CELL_MODE || h.reserved_bits() != 0 {
    return false;
  }

  // the 4-bit field cannot exceed MAX_RESOLUTION
  let res = h.resolution();

  let base_cell = h.base_cell();
  if base_cell >= NUM_BASE_CELLS {
    return false;
  }

  // digits at or below the resolution must be real, later slots must all
  // hold the sentinel
  for r in 1..=res {
    if h.digit(r) == Digit::Invalid {
      return false;
    }
  }
  let unused_bits = (MAX_RESOLUTION - res) * PER_DIGIT_BITS as i32;
  if unused_bits > 0 {
    let unused_mask = (1u64 << unused_bits) - 1;
    if h.0 & unused_mask != unused_mask {
      return false;
    }
  }

  // a pentagon's first non-center digit may not point down the deleted
  // k-axis subsequence
  if is_base_cell_pentagon(base_cell) && h.leading_non_zero_digit() == Digit::K {
    return false;
  }

  true
}

/// The resolution-0 cell index for a base cell number, or the null index
/// if out of range.
#[must_use]
pub(crate) fn base_cell_to_cell(base_cell: i32) -> CellIndex {
  if !(0..NUM_BASE_CELLS).contains(&base_cell) {
    return NULL_CELL;
  }
  let mut h = CellIndex(INIT_PATTERN);
  h.set_mode(CELL_MODE);
  h.set_resolution(0);
  h.set_base_cell(base_cell);
  h
}

impl fmt::Display for CellIndex {
  /// Lowercase hexadecimal with no prefix; the interchange string form.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:x}", self.0)
  }
}

impl FromStr for CellIndex {
  type Err = GridError;

  /// Parses the hexadecimal string form. A leading `0x`/`0X` is
  /// tolerated. Malformed input is an error; see [`string_to_cell`] for
  /// the null-coercing variant.
  fn from_str(s: &str) -> Result<Self, GridError> {
    let t = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    u64::from_str_radix(t, 16).map(CellIndex).map_err(|_| GridError::Failed)
  }
}

/// Parse an index from its hexadecimal string form. Malformed input
/// yields the null index, which no validity predicate accepts.
#[must_use]
pub fn string_to_cell(s: &str) -> CellIndex {
  s.parse().unwrap_or(NULL_CELL)
}

/// Format an index as its interchange string: lowercase hexadecimal, no
/// prefix.
#[must_use]
pub fn cell_to_string(h: CellIndex) -> String {
  h.to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn field_roundtrips() {
    let mut h = CellIndex(0);
    for mode in 0..=15 {
      h.set_mode(mode);
      assert_eq!(h.mode(), mode);
    }
    for res in 0..=MAX_RESOLUTION {
      h.set_resolution(res);
      assert_eq!(h.resolution(), res);
    }
    for bc in 0..NUM_BASE_CELLS {
      h.set_base_cell(bc);
      assert_eq!(h.base_cell(), bc);
    }
    h.set_resolution(MAX_RESOLUTION);
    for r in 1..=MAX_RESOLUTION {
      for d in 0..7 {
        h.set_digit(r, Digit::from_bits(d));
        assert_eq!(h.digit(r), Digit::from_bits(d));
      }
    }
  }

  #[test]
  fn init_matches_reference_pattern() {
    let h = CellIndex::init(5, 12, Digit::K);
    assert_eq!(h.resolution(), 5);
    assert_eq!(h.base_cell(), 12);
    assert_eq!(h.mode(), CELL_MODE);
    for r in 1..=5 {
      assert_eq!(h.digit(r), Digit::K);
    }
    for r in 6..=MAX_RESOLUTION {
      assert_eq!(h.digit(r), Digit::Invalid);
    }
    assert_eq!(h.0, 0x85184927fffffff);
  }

  #[test]
  fn leading_non_zero_digit() {
    let mut h = CellIndex::init(5, 0, Digit::Center);
    assert_eq!(h.leading_non_zero_digit(), Digit::Center);
    h.set_digit(3, Digit::J);
    assert_eq!(h.leading_non_zero_digit(), Digit::J);
    h.set_digit(1, Digit::K);
    assert_eq!(h.leading_non_zero_digit(), Digit::K);
  }

  #[test]
  fn rotations() {
    let h_i = CellIndex::init(1, 0, Digit::I);
    assert_eq!(h_i.rotate60_ccw(), CellIndex::init(1, 0, Digit::Ij));
    assert_eq!(h_i.rotate60_cw(), CellIndex::init(1, 0, Digit::Ik));
    // without a leading K, the pentagon rotation behaves like the plain one
    assert_eq!(h_i.rotate_pent60_ccw(), CellIndex::init(1, 0, Digit::Ij));
    let h_j = CellIndex::init(1, 14, Digit::J);
    assert_eq!(h_j.rotate_pent60_ccw(), CellIndex::init(1, 14, Digit::Jk));
  }

  #[test]
  fn validation_accepts_canonical_cells() {
    for res in 0..=MAX_RESOLUTION {
      assert!(is_valid_cell(CellIndex::init(res, 0, Digit::Center)), "res {res}");
    }
    for bc in 0..NUM_BASE_CELLS {
      assert!(is_valid_cell(base_cell_to_cell(bc)), "base cell {bc}");
    }
  }

  #[test]
  fn validation_rejects_malformed() {
    assert!(!is_valid_cell(NULL_CELL));

    let valid = CellIndex(0x85283473fffffff);
    assert!(is_valid_cell(valid));

    let mut wrong_mode = valid;
    wrong_mode.set_mode(DIRECTED_EDGE_MODE);
    assert!(!is_valid_cell(wrong_mode));

    let mut high_bit = valid;
    high_bit.0 |= HIGH_BIT_MASK;
    assert!(!is_valid_cell(high_bit));

    let mut reserved = valid;
    reserved.set_reserved_bits(3);
    assert!(!is_valid_cell(reserved));

    let mut bad_base = CellIndex::init(0, 0, Digit::Center);
    bad_base.set_base_cell(NUM_BASE_CELLS);
    assert!(!is_valid_cell(bad_base));

    // a used digit slot holding the sentinel
    let mut bad_digit = CellIndex::init(1, 0, Digit::Center);
    bad_digit.set_digit(1, Digit::Invalid);
    assert!(!is_valid_cell(bad_digit));

    // an unused digit slot not holding the sentinel
    let mut bad_padding = CellIndex::init(1, 0, Digit::Center);
    bad_padding.set_digit(2, Digit::Center);
    assert!(!is_valid_cell(bad_padding));

    // pentagon with a leading K digit
    let pent_k = CellIndex::init(1, 4, Digit::K);
    assert!(!is_valid_cell(pent_k));
    let hex_k = CellIndex::init(1, 0, Digit::K);
    assert!(is_valid_cell(hex_k));
  }

  #[test]
  fn string_roundtrip() {
    let h = CellIndex(0x8928308280fffff);
    assert_eq!(cell_to_string(h), "8928308280fffff");
    assert_eq!(string_to_cell("8928308280fffff"), h);
    assert_eq!(string_to_cell("0x8928308280fffff"), h);
    assert_eq!(string_to_cell(""), NULL_CELL);
    assert_eq!(string_to_cell("not hex"), NULL_CELL);
    assert_eq!(string_to_cell("10000000000000000"), NULL_CELL);
    assert_eq!("85283473fffffff".parse::<CellIndex>(), Ok(CellIndex(0x85283473fffffff)));
    assert!("zz".parse::<CellIndex>().is_err());
  }
}
