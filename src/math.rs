//! Small planar and spherical vector kernels used by the projection code.

use crate::types::LatLng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D Cartesian vector on a face-local plane.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2d {
  pub x: f64,
  pub y: f64,
}

impl Vec2d {
  /// Vector magnitude.
  #[inline]
  #[must_use]
  pub(crate) fn mag(&self) -> f64 {
    (self.x * self.x + self.y * self.y).sqrt()
  }

  /// Intersection of line `p0`-`p1` with line `p2`-`p3`. The caller
  /// guarantees the lines are not parallel and do intersect.
  #[must_use]
  pub(crate) fn intersect(p0: &Vec2d, p1: &Vec2d, p2: &Vec2d, p3: &Vec2d) -> Vec2d {
    let s1 = Vec2d {
      x: p1.x - p0.x,
      y: p1.y - p0.y,
    };
    let s2 = Vec2d {
      x: p3.x - p2.x,
      y: p3.y - p2.y,
    };
    let t = (s2.x * (p0.y - p2.y) - s2.y * (p0.x - p2.x)) / (-s2.x * s1.y + s1.x * s2.y);
    Vec2d {
      x: p0.x + t * s1.x,
      y: p0.y + t * s1.y,
    }
  }

  /// Equality within f64 epsilon on both components.
  #[inline]
  #[must_use]
  pub(crate) fn almost_equals(&self, other: &Vec2d) -> bool {
    (self.x - other.x).abs() < f64::EPSILON && (self.y - other.y).abs() < f64::EPSILON
  }
}

/// 3D Cartesian vector, used for points on the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3d {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

impl Vec3d {
  /// The unit-sphere point under a geographic coordinate.
  #[must_use]
  pub(crate) fn from_latlng(geo: &LatLng) -> Vec3d {
    let r = geo.lat.cos();
    Vec3d {
      x: geo.lng.cos() * r,
      y: geo.lng.sin() * r,
      z: geo.lat.sin(),
    }
  }

  /// Squared Euclidean distance to another point.
  #[inline]
  #[must_use]
  pub(crate) fn square_dist(&self, other: &Vec3d) -> f64 {
    let dx = self.x - other.x;
    let dy = self.y - other.y;
    let dz = self.z - other.z;
    dx * dx + dy * dy + dz * dz
  }
}

/// Integer exponentiation by squaring. Negative exponents truncate toward
/// zero the way integer division does.
#[inline]
#[must_use]
pub(crate) fn ipow(mut base: i64, mut exp: i64) -> i64 {
  if exp < 0 {
    return match base {
      1 => 1,
      -1 => {
        if exp % 2 == 0 {
          1
        } else {
          -1
        }
      }
      _ => 0,
    };
  }
  let mut result: i64 = 1;
  loop {
    if exp & 1 != 0 {
      result = result.wrapping_mul(base);
    }
    exp >>= 1;
    if exp == 0 {
      break;
    }
    base = base.wrapping_mul(base);
  }
  result
}
