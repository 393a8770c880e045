//! IJK+ coordinates on the face-local hexagonal lattice, and the digit
//! alphabet used to descend resolutions.
//!
//! IJK+ uses three non-negative axes spaced 120 degrees apart, normalized
//! so at least one component is zero. Cube coordinates (i + j + k = 0) are
//! used transiently for distance and line interpolation.

use crate::constants::{ONE_SEVENTH, RSIN60, SIN60};
use crate::error::GridError;
use crate::math::Vec2d;
use crate::types::CoordIJ;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A resolution digit: one of the seven cells of an aperture-7 subdivision,
/// named for the lattice axes it lies along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Digit {
  /// The center child.
  Center = 0,
  /// The k-axis neighbor. Deleted beneath pentagons.
  K = 1,
  /// The j-axis neighbor.
  J = 2,
  /// The j+k diagonal neighbor.
  Jk = 3,
  /// The i-axis neighbor.
  I = 4,
  /// The i+k diagonal neighbor.
  Ik = 5,
  /// The i+j diagonal neighbor.
  Ij = 6,
  /// Sentinel for digit slots past a cell's resolution.
  Invalid = 7,
}

impl Default for Digit {
  fn default() -> Self {
    Digit::Center
  }
}

impl Digit {
  /// All seven valid digit values in ascending order.
  pub const COUNT: u8 = 7;

  /// Decode a 3-bit field. Values above 7 cannot occur for masked input.
  #[inline]
  #[must_use]
  pub(crate) fn from_bits(bits: u8) -> Digit {
    match bits & 0b111 {
      0 => Digit::Center,
      1 => Digit::K,
      2 => Digit::J,
      3 => Digit::Jk,
      4 => Digit::I,
      5 => Digit::Ik,
      6 => Digit::Ij,
      _ => Digit::Invalid,
    }
  }

  /// Rotate 60 degrees counter-clockwise. Center and Invalid are fixed
  /// points.
  #[inline]
  #[must_use]
  pub(crate) fn rotate60_ccw(self) -> Digit {
    match self {
      Digit::K => Digit::Ik,
      Digit::Ik => Digit::I,
      Digit::I => Digit::Ij,
      Digit::Ij => Digit::J,
      Digit::J => Digit::Jk,
      Digit::Jk => Digit::K,
      other => other,
    }
  }

  /// Rotate 60 degrees clockwise. Center and Invalid are fixed points.
  #[inline]
  #[must_use]
  pub(crate) fn rotate60_cw(self) -> Digit {
    match self {
      Digit::K => Digit::Jk,
      Digit::Jk => Digit::J,
      Digit::J => Digit::Ij,
      Digit::Ij => Digit::I,
      Digit::I => Digit::Ik,
      Digit::Ik => Digit::K,
      other => other,
    }
  }
}

impl TryFrom<u8> for Digit {
  type Error = GridError;

  fn try_from(value: u8) -> Result<Self, GridError> {
    if value > 7 {
      return Err(GridError::Domain);
    }
    Ok(Digit::from_bits(value))
  }
}

/// IJK+ lattice coordinates. `k` is redundant once normalized but kept
/// explicit so axis arithmetic stays symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJK {
  pub i: i32,
  pub j: i32,
  pub k: i32,
}

/// Unit vectors for each digit direction, indexed by digit value.
#[rustfmt::skip]
pub(crate) const UNIT_VECS: [CoordIJK; 7] = [
  CoordIJK { i: 0, j: 0, k: 0 }, // Center
  CoordIJK { i: 0, j: 0, k: 1 }, // K
  CoordIJK { i: 0, j: 1, k: 0 }, // J
  CoordIJK { i: 0, j: 1, k: 1 }, // Jk
  CoordIJK { i: 1, j: 0, k: 0 }, // I
  CoordIJK { i: 1, j: 0, k: 1 }, // Ik
  CoordIJK { i: 1, j: 1, k: 0 }, // Ij
];

/// Round to nearest, ties away from zero.
#[inline]
fn lround(v: f64) -> i32 {
  v.round() as i32
}

impl CoordIJK {
  #[inline]
  #[must_use]
  pub const fn new(i: i32, j: i32, k: i32) -> Self {
    Self { i, j, k }
  }

  /// Component-wise sum, saturating at the i32 range.
  #[inline]
  #[must_use]
  pub(crate) fn add(&self, other: &CoordIJK) -> CoordIJK {
    CoordIJK {
      i: self.i.saturating_add(other.i),
      j: self.j.saturating_add(other.j),
      k: self.k.saturating_add(other.k),
    }
  }

  /// Component-wise difference, saturating at the i32 range.
  #[inline]
  #[must_use]
  pub(crate) fn sub(&self, other: &CoordIJK) -> CoordIJK {
    CoordIJK {
      i: self.i.saturating_sub(other.i),
      j: self.j.saturating_sub(other.j),
      k: self.k.saturating_sub(other.k),
    }
  }

  /// Uniform scale, saturating at the i32 range.
  #[inline]
  pub(crate) fn scale(&mut self, factor: i32) {
    self.i = self.i.saturating_mul(factor);
    self.j = self.j.saturating_mul(factor);
    self.k = self.k.saturating_mul(factor);
  }

  /// Normalize in place to minimal non-negative components (at least one
  /// component becomes zero).
  pub(crate) fn normalize(&mut self) {
    if self.i < 0 {
      self.j = self.j.saturating_sub(self.i);
      self.k = self.k.saturating_sub(self.i);
      self.i = 0;
    }
    if self.j < 0 {
      self.i = self.i.saturating_sub(self.j);
      self.k = self.k.saturating_sub(self.j);
      self.j = 0;
    }
    if self.k < 0 {
      self.i = self.i.saturating_sub(self.k);
      self.j = self.j.saturating_sub(self.k);
      self.k = 0;
    }
    let min = self.i.min(self.j).min(self.k);
    if min > 0 {
      self.i -= min;
      self.j -= min;
      self.k -= min;
    }
  }

  /// Whether normalizing would overflow i32 arithmetic. Only meaningful
  /// for inputs with `k == 0`, as produced by [`CoordIJK::from_ij`].
  #[must_use]
  pub(crate) fn normalize_could_overflow(&self) -> bool {
    let (max, min) = if self.i > self.j { (self.i, self.j) } else { (self.j, self.i) };
    if min < 0 {
      if max.checked_add(min).is_none() {
        return true;
      }
      if 0i32.checked_sub(min).is_none() {
        return true;
      }
      if max.checked_sub(min).is_none() {
        return true;
      }
    }
    false
  }

  /// The digit for a unit (or zero) vector, or `Digit::Invalid` if the
  /// normalized coordinates are not a unit vector.
  #[must_use]
  pub(crate) fn to_digit(&self) -> Digit {
    let mut c = *self;
    c.normalize();
    for (d, unit) in UNIT_VECS.iter().enumerate() {
      if c == *unit {
        return Digit::from_bits(d as u8);
      }
    }
    Digit::Invalid
  }

  /// Step one cell in the given digit direction, normalizing the result.
  pub(crate) fn neighbor(&mut self, digit: Digit) {
    if digit != Digit::Center && digit != Digit::Invalid {
      *self = self.add(&UNIT_VECS[digit as usize]);
      self.normalize();
    }
  }

  /// Quantize planar hex coordinates into the containing cell.
  #[must_use]
  pub(crate) fn from_hex2d(v: &Vec2d) -> CoordIJK {
    let mut h = CoordIJK::default();

    let a1 = v.x.abs();
    let a2 = v.y.abs();

    // reverse the conversion in to_hex2d
    let x2 = a2 * RSIN60;
    let x1 = a1 + x2 / 2.0;

    let m1 = x1 as i32;
    let m2 = x2 as i32;

    let r1 = x1 - f64::from(m1);
    let r2 = x2 - f64::from(m2);

    if r1 < 0.5 {
      if r1 < 1.0 / 3.0 {
        h.i = m1;
        h.j = if r2 < (1.0 + r1) / 2.0 { m2 } else { m2 + 1 };
      } else {
        h.j = if r2 < (1.0 - r1) { m2 } else { m2 + 1 };
        h.i = if (1.0 - r1) <= r2 && r2 < (2.0 * r1) { m1 + 1 } else { m1 };
      }
    } else if r1 < 2.0 / 3.0 {
      h.j = if r2 < (1.0 - r1) { m2 } else { m2 + 1 };
      h.i = if (2.0 * r1 - 1.0) < r2 && r2 < (1.0 - r1) { m1 } else { m1 + 1 };
    } else {
      h.i = m1 + 1;
      h.j = if r2 < (r1 / 2.0) { m2 } else { m2 + 1 };
    }

    // fold across the axes if necessary
    if v.x < 0.0 {
      if (h.j % 2) == 0 {
        let axis_i = i64::from(h.j) / 2;
        let diff = i64::from(h.i) - axis_i;
        h.i = (i64::from(h.i) - 2 * diff) as i32;
      } else {
        let axis_i = (i64::from(h.j) + 1) / 2;
        let diff = i64::from(h.i) - axis_i;
        h.i = (i64::from(h.i) - (2 * diff + 1)) as i32;
      }
    }
    if v.y < 0.0 {
      h.i = (i64::from(h.i) - (2 * i64::from(h.j) + 1) / 2) as i32;
      h.j = -h.j;
    }

    h.normalize();
    h
  }

  /// The planar center point of this cell. Assumes normalized input.
  #[must_use]
  pub(crate) fn to_hex2d(&self) -> Vec2d {
    let i = self.i - self.k;
    let j = self.j - self.k;
    Vec2d {
      x: f64::from(i) - 0.5 * f64::from(j),
      y: f64::from(j) * SIN60,
    }
  }

  /// Indexing parent on the counter-clockwise aperture-7 grid (Class III).
  pub(crate) fn up_ap7(&mut self) {
    let i = self.i - self.k;
    let j = self.j - self.k;
    self.i = lround(f64::from(3 * i - j) * ONE_SEVENTH);
    self.j = lround(f64::from(i + 2 * j) * ONE_SEVENTH);
    self.k = 0;
    self.normalize();
  }

  /// Indexing parent on the clockwise aperture-7 grid (Class II).
  pub(crate) fn up_ap7r(&mut self) {
    let i = self.i - self.k;
    let j = self.j - self.k;
    self.i = lround(f64::from(2 * i + j) * ONE_SEVENTH);
    self.j = lround(f64::from(3 * j - i) * ONE_SEVENTH);
    self.k = 0;
    self.normalize();
  }

  /// Overflow-checked variant of [`CoordIJK::up_ap7`].
  pub(crate) fn up_ap7_checked(&mut self) -> Result<(), GridError> {
    let i = self.i.checked_sub(self.k).ok_or(GridError::Failed)?;
    let j = self.j.checked_sub(self.k).ok_or(GridError::Failed)?;
    let num_i = i.checked_mul(3).and_then(|t| t.checked_sub(j)).ok_or(GridError::Failed)?;
    let num_j = j.checked_mul(2).and_then(|t| t.checked_add(i)).ok_or(GridError::Failed)?;
    self.i = lround(f64::from(num_i) * ONE_SEVENTH);
    self.j = lround(f64::from(num_j) * ONE_SEVENTH);
    self.k = 0;
    if self.normalize_could_overflow() {
      return Err(GridError::Failed);
    }
    self.normalize();
    Ok(())
  }

  /// Overflow-checked variant of [`CoordIJK::up_ap7r`].
  pub(crate) fn up_ap7r_checked(&mut self) -> Result<(), GridError> {
    let i = self.i.checked_sub(self.k).ok_or(GridError::Failed)?;
    let j = self.j.checked_sub(self.k).ok_or(GridError::Failed)?;
    let num_i = i.checked_mul(2).and_then(|t| t.checked_add(j)).ok_or(GridError::Failed)?;
    let num_j = j.checked_mul(3).and_then(|t| t.checked_sub(i)).ok_or(GridError::Failed)?;
    self.i = lround(f64::from(num_i) * ONE_SEVENTH);
    self.j = lround(f64::from(num_j) * ONE_SEVENTH);
    self.k = 0;
    if self.normalize_could_overflow() {
      return Err(GridError::Failed);
    }
    self.normalize();
    Ok(())
  }

  /// Center of this cell on the next finer counter-clockwise aperture-7
  /// grid (Class III).
  pub(crate) fn down_ap7(&mut self) {
    self.apply_basis(
      &CoordIJK::new(3, 0, 1),
      &CoordIJK::new(1, 3, 0),
      &CoordIJK::new(0, 1, 3),
    );
  }

  /// Center of this cell on the next finer clockwise aperture-7 grid
  /// (Class II).
  pub(crate) fn down_ap7r(&mut self) {
    self.apply_basis(
      &CoordIJK::new(3, 1, 0),
      &CoordIJK::new(0, 3, 1),
      &CoordIJK::new(1, 0, 3),
    );
  }

  /// Center of this cell on the next finer counter-clockwise aperture-3
  /// (substrate) grid.
  pub(crate) fn down_ap3(&mut self) {
    self.apply_basis(
      &CoordIJK::new(2, 0, 1),
      &CoordIJK::new(1, 2, 0),
      &CoordIJK::new(0, 1, 2),
    );
  }

  /// Center of this cell on the next finer clockwise aperture-3
  /// (substrate) grid.
  pub(crate) fn down_ap3r(&mut self) {
    self.apply_basis(
      &CoordIJK::new(2, 1, 0),
      &CoordIJK::new(0, 2, 1),
      &CoordIJK::new(1, 0, 2),
    );
  }

  /// Rotate 60 degrees counter-clockwise about the origin.
  pub(crate) fn rotate60_ccw(&mut self) {
    self.apply_basis(
      &CoordIJK::new(1, 1, 0),
      &CoordIJK::new(0, 1, 1),
      &CoordIJK::new(1, 0, 1),
    );
  }

  /// Rotate 60 degrees clockwise about the origin.
  pub(crate) fn rotate60_cw(&mut self) {
    self.apply_basis(
      &CoordIJK::new(1, 0, 1),
      &CoordIJK::new(1, 1, 0),
      &CoordIJK::new(0, 1, 1),
    );
  }

  /// Re-express this coordinate in terms of images of the three axis unit
  /// vectors, then normalize.
  fn apply_basis(&mut self, i_vec: &CoordIJK, j_vec: &CoordIJK, k_vec: &CoordIJK) {
    let mut vi = *i_vec;
    vi.scale(self.i);
    let mut vj = *j_vec;
    vj.scale(self.j);
    let mut vk = *k_vec;
    vk.scale(self.k);
    *self = vi.add(&vj).add(&vk);
    self.normalize();
  }

  /// Grid distance to another IJK+ coordinate in the same frame.
  #[must_use]
  pub(crate) fn distance_to(&self, other: &CoordIJK) -> i32 {
    let mut diff = self.sub(other);
    diff.normalize();
    diff.i.abs().max(diff.j.abs()).max(diff.k.abs())
  }

  /// Project onto the two-axis IJ system.
  #[inline]
  #[must_use]
  pub(crate) fn to_ij(&self) -> CoordIJ {
    CoordIJ {
      i: self.i - self.k,
      j: self.j - self.k,
    }
  }

  /// Lift a two-axis IJ coordinate back into normalized IJK+, checking for
  /// overflow during normalization.
  pub(crate) fn from_ij(ij: &CoordIJ) -> Result<CoordIJK, GridError> {
    let mut ijk = CoordIJK {
      i: ij.i,
      j: ij.j,
      k: 0,
    };
    if ijk.normalize_could_overflow() {
      return Err(GridError::Failed);
    }
    ijk.normalize();
    Ok(ijk)
  }

  /// Convert in place to cube coordinates (i + j + k = 0).
  #[inline]
  pub(crate) fn to_cube(&mut self) {
    self.i = -self.i + self.k;
    self.j -= self.k;
    self.k = -self.i - self.j;
  }

  /// Convert in place from cube coordinates back to normalized IJK+.
  #[inline]
  pub(crate) fn from_cube(&mut self) {
    self.i = self.i.saturating_neg();
    self.k = 0;
    self.normalize();
  }
}
