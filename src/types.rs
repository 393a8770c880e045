//! Shared value types of the grid system.

use crate::constants::MAX_BOUNDARY_VERTS;
use crate::error::GridError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Latitude/longitude pair in radians.
///
/// Public entry points take and return degrees; conversion happens at the
/// boundary (see [`crate::latlng::degs_to_rads`]).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lng: f64,
}

/// Closed outline of a cell or edge: up to [`MAX_BOUNDARY_VERTS`] vertices
/// in counter-clockwise order within the face-local frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellBoundary {
  /// Number of significant vertices.
  pub num_verts: usize,
  /// Vertex storage; entries past `num_verts` are meaningless.
  pub verts: [LatLng; MAX_BOUNDARY_VERTS],
}

impl Default for CellBoundary {
  fn default() -> Self {
    Self {
      num_verts: 0,
      verts: [LatLng::default(); MAX_BOUNDARY_VERTS],
    }
  }
}

impl CellBoundary {
  /// The significant vertices as a slice.
  #[must_use]
  pub fn verts(&self) -> &[LatLng] {
    &self.verts[..self.num_verts]
  }

  pub(crate) fn push(&mut self, v: LatLng) {
    self.verts[self.num_verts] = v;
    self.num_verts += 1;
  }
}

/// One closed loop of geographic vertices. The final vertex connects back
/// to the first implicitly.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoLoop {
  pub verts: Vec<LatLng>,
}

impl GeoLoop {
  #[must_use]
  pub fn num_verts(&self) -> usize {
    self.verts.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.verts.is_empty()
  }
}

/// A polygon: one outer loop plus zero or more hole loops. Holes are
/// subtracted regions and must not overlap each other.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPolygon {
  /// The outer loop.
  pub geoloop: GeoLoop,
  /// Hole loops.
  pub holes: Vec<GeoLoop>,
}

/// A polygon produced by tracing a cell set: outer loop first, holes after.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoopPolygon {
  pub outer: Vec<LatLng>,
  pub holes: Vec<Vec<LatLng>>,
}

/// The result of [`crate::regions::cells_to_multi_polygon`].
pub type MultiPolygon = Vec<LoopPolygon>;

/// Two-axis grid coordinates relative to an anchor cell. Axes are spaced
/// 120 degrees apart; values are only comparable against coordinates that
/// share the same anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJ {
  pub i: i32,
  pub j: i32,
}

/// Geographic bounding box, radians. `east < west` encodes transmeridian
/// boxes.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BBox {
  pub north: f64,
  pub south: f64,
  pub east: f64,
  pub west: f64,
}

/// Predicate deciding whether a candidate cell belongs to a rasterized
/// polygon region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum ContainmentMode {
  /// Cell center is inside the shape.
  Center = 0,
  /// Cell is fully inside the shape.
  Full = 1,
  /// Cell overlaps the shape at any point.
  Overlapping = 2,
  /// Cell bounding box overlaps the shape.
  OverlappingBbox = 3,
}

impl Default for ContainmentMode {
  fn default() -> Self {
    ContainmentMode::Center
  }
}

impl TryFrom<u32> for ContainmentMode {
  type Error = GridError;

  fn try_from(value: u32) -> Result<Self, GridError> {
    match value {
      0 => Ok(ContainmentMode::Center),
      1 => Ok(ContainmentMode::Full),
      2 => Ok(ContainmentMode::Overlapping),
      3 => Ok(ContainmentMode::OverlappingBbox),
      _ => Err(GridError::OptionInvalid),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn containment_mode_from_flags() {
    assert_eq!(ContainmentMode::try_from(0), Ok(ContainmentMode::Center));
    assert_eq!(ContainmentMode::try_from(3), Ok(ContainmentMode::OverlappingBbox));
    assert_eq!(ContainmentMode::try_from(4), Err(GridError::OptionInvalid));
  }

  #[test]
  fn boundary_push_tracks_len() {
    let mut b = CellBoundary::default();
    assert!(b.verts().is_empty());
    b.push(LatLng { lat: 0.5, lng: -0.25 });
    assert_eq!(b.verts().len(), 1);
    assert_eq!(b.verts()[0].lat, 0.5);
  }
}
