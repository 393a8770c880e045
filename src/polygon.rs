//! Planar-ish geometry over geographic loops: bounding boxes, point-in-
//! loop tests, segment crossing, winding order and spherical area. These
//! predicates drive the region rasterizer.

use crate::constants::{CELL_SCALE_FACTOR, EPSILON, EPSILON_RAD, MAX_RESOLUTION, TWO_PI};
use crate::error::GridError;
use crate::latlng::{constrain_lng, get_hexagon_area_avg_km2, great_circle_distance_km, normalize_lng};
use crate::math::Vec3d;
use crate::types::{BBox, CellBoundary, GeoLoop, GeoPolygon, LatLng};
use std::f64::consts::{FRAC_PI_2, PI};

/// Longitude comparison frame for boxes that may straddle the
/// antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LongitudeNormalization {
  None,
  East,
  West,
}

impl BBox {
  #[inline]
  #[must_use]
  pub(crate) fn is_transmeridian(&self) -> bool {
    self.east < self.west
  }

  #[must_use]
  pub(crate) fn width_rads(&self) -> f64 {
    if self.is_transmeridian() {
      self.east - self.west + TWO_PI
    } else {
      self.east - self.west
    }
  }

  #[must_use]
  pub(crate) fn height_rads(&self) -> f64 {
    self.north - self.south
  }

  #[must_use]
  pub(crate) fn center(&self) -> LatLng {
    let east = if self.is_transmeridian() { self.east + TWO_PI } else { self.east };
    LatLng {
      lat: (self.north + self.south) * 0.5,
      lng: constrain_lng((east + self.west) * 0.5),
    }
  }

  #[must_use]
  pub(crate) fn contains_point(&self, point: &LatLng) -> bool {
    if point.lat < self.south - EPSILON_RAD || point.lat > self.north + EPSILON_RAD {
      return false;
    }
    if self.is_transmeridian() {
      point.lng >= self.west - EPSILON_RAD || point.lng <= self.east + EPSILON_RAD
    } else {
      point.lng >= self.west - EPSILON_RAD && point.lng <= self.east + EPSILON_RAD
    }
  }

  #[must_use]
  pub(crate) fn overlaps(&self, other: &BBox) -> bool {
    if self.north < other.south || self.south > other.north {
      return false;
    }
    let (a_norm, b_norm) = bbox_normalization(self, other);
    !(normalize_lng(self.east, a_norm) < normalize_lng(other.west, b_norm)
      || normalize_lng(self.west, a_norm) > normalize_lng(other.east, b_norm))
  }

  /// Grow the box around its center by `scale`, clamping at the poles and
  /// wrapping longitudes.
  pub(crate) fn scale(&mut self, scale: f64) {
    let width_buffer = (self.width_rads() * scale - self.width_rads()) * 0.5;
    let height_buffer = (self.height_rads() * scale - self.height_rads()) * 0.5;
    self.north = (self.north + height_buffer).min(FRAC_PI_2);
    self.south = (self.south - height_buffer).max(-FRAC_PI_2);
    self.east = constrain_lng(self.east + width_buffer);
    self.west = constrain_lng(self.west - width_buffer);
  }

  /// The bounding box of a loop, detecting antimeridian-crossing arcs.
  #[must_use]
  pub(crate) fn from_geoloop(geoloop: &GeoLoop) -> BBox {
    if geoloop.is_empty() {
      return BBox::default();
    }

    let mut bbox = BBox {
      north: -f64::MAX,
      south: f64::MAX,
      east: -f64::MAX,
      west: f64::MAX,
    };
    let mut crosses_antimeridian = false;

    for (i, p) in geoloop.verts.iter().enumerate() {
      bbox.south = bbox.south.min(p.lat);
      bbox.north = bbox.north.max(p.lat);
      bbox.west = bbox.west.min(p.lng);
      bbox.east = bbox.east.max(p.lng);
      let next = geoloop.verts[(i + 1) % geoloop.num_verts()];
      if (p.lng - next.lng).abs() > PI {
        crosses_antimeridian = true;
      }
    }

    if crosses_antimeridian {
      // the tight box runs from the smallest positive longitude east
      // through the antimeridian to the largest negative longitude
      let mut west = f64::MAX;
      let mut east = -f64::MAX;
      for p in &geoloop.verts {
        if p.lng > 0.0 {
          west = west.min(p.lng);
        } else {
          east = east.max(p.lng);
        }
      }
      bbox.west = west;
      bbox.east = east;
    }
    bbox
  }

}

/// Pick comparison frames so two boxes' longitudes are directly
/// comparable even when one or both cross the antimeridian.
#[must_use]
pub(crate) fn bbox_normalization(a: &BBox, b: &BBox) -> (LongitudeNormalization, LongitudeNormalization) {
  let a_is_tm = a.is_transmeridian();
  let b_is_tm = b.is_transmeridian();
  // shift toward the direction with the shorter gap between the boxes
  let trends_east = (a.west - b.east).abs() < (b.west - a.east).abs();

  let a_norm = if !a_is_tm {
    LongitudeNormalization::None
  } else if b_is_tm || trends_east {
    LongitudeNormalization::East
  } else {
    LongitudeNormalization::West
  };
  let b_norm = if !b_is_tm {
    LongitudeNormalization::None
  } else if a_is_tm || !trends_east {
    LongitudeNormalization::East
  } else {
    LongitudeNormalization::West
  };
  (a_norm, b_norm)
}

/// Ray-casting point-in-loop test over raw vertices.
fn point_inside_verts(verts: &[LatLng], bbox: &BBox, coord: &LatLng) -> bool {
  if verts.is_empty() || !bbox.contains_point(coord) {
    return false;
  }

  let norm = if bbox.is_transmeridian() {
    LongitudeNormalization::East
  } else {
    LongitudeNormalization::None
  };

  let mut contains = false;
  let mut lat = coord.lat;
  let mut lng = normalize_lng(coord.lng, norm);

  for i in 0..verts.len() {
    let p1 = verts[i];
    let p2 = verts[(i + 1) % verts.len()];

    // bias the ray north off vertices and west off vertical edges so
    // boundary points are counted once
    if lat == p1.lat || lat == p2.lat {
      lat += f64::EPSILON * 10.0;
    }
    let p1_lng = normalize_lng(p1.lng, norm);
    let p2_lng = normalize_lng(p2.lng, norm);
    if (p1_lng - lng).abs() < f64::EPSILON || (p2_lng - lng).abs() < f64::EPSILON {
      lng -= f64::EPSILON * 10.0;
    }

    let (a, a_lng, b, b_lng) = if p1.lat > p2.lat {
      (p2, p2_lng, p1, p1_lng)
    } else {
      (p1, p1_lng, p2, p2_lng)
    };

    if lat < a.lat || lat >= b.lat {
      continue;
    }

    let intersect_lng = (b_lng - a_lng) * (lat - a.lat) / (b.lat - a.lat) + a_lng;
    if intersect_lng > lng {
      contains = !contains;
    }
  }
  contains
}

/// Whether `coord` lies inside the loop. `bbox` is the loop's
/// pre-computed bounding box.
#[must_use]
pub(crate) fn point_inside_geoloop(geoloop: &GeoLoop, bbox: &BBox, coord: &LatLng) -> bool {
  point_inside_verts(&geoloop.verts, bbox, coord)
}

/// Whether `coord` lies inside a cell boundary outline.
#[must_use]
pub(crate) fn point_inside_cell_boundary(boundary: &CellBoundary, bbox: &BBox, coord: &LatLng) -> bool {
  point_inside_verts(boundary.verts(), bbox, coord)
}

/// Whether `coord` lies inside the polygon: inside the outer loop and
/// outside every hole. `bboxes[0]` is the outer box, the rest follow the
/// holes.
#[must_use]
pub(crate) fn point_inside_polygon(polygon: &GeoPolygon, bboxes: &[BBox], coord: &LatLng) -> bool {
  if polygon.geoloop.is_empty() {
    return false;
  }
  if !point_inside_geoloop(&polygon.geoloop, &bboxes[0], coord) {
    return false;
  }
  for (i, hole) in polygon.holes.iter().enumerate() {
    if !hole.is_empty() && point_inside_geoloop(hole, &bboxes[i + 1], coord) {
      return false;
    }
  }
  true
}

/// Shoelace winding test; clockwise loops are holes in GeoJSON terms.
#[must_use]
pub(crate) fn is_clockwise_verts(verts: &[LatLng], is_transmeridian: bool) -> bool {
  if verts.len() < 3 {
    return false;
  }
  let norm = if is_transmeridian {
    LongitudeNormalization::East
  } else {
    LongitudeNormalization::None
  };
  let mut sum = 0.0;
  for i in 0..verts.len() {
    let p1 = verts[i];
    let p2 = verts[(i + 1) % verts.len()];
    sum += (normalize_lng(p2.lng, norm) - normalize_lng(p1.lng, norm)) * (p2.lat + p1.lat);
  }
  sum < 0.0
}

/// Whether two planar segments intersect.
#[must_use]
pub(crate) fn line_crosses_line(a1: &LatLng, a2: &LatLng, b1: &LatLng, b2: &LatLng) -> bool {
  let denom = (b2.lng - b1.lng) * (a2.lat - a1.lat) - (b2.lat - b1.lat) * (a2.lng - a1.lng);
  if denom.abs() < f64::EPSILON {
    return false;
  }
  let ua = ((b2.lat - b1.lat) * (a1.lng - b1.lng) - (b2.lng - b1.lng) * (a1.lat - b1.lat)) / denom;
  let ub = ((a2.lat - a1.lat) * (a1.lng - b1.lng) - (a2.lng - a1.lng) * (a1.lat - b1.lat)) / denom;
  (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)
}

/// Whether any segment of a cell boundary crosses any segment of the
/// loop. Containment without edge intersection is not crossing.
pub(crate) fn cell_boundary_crosses_geoloop(
  geoloop: &GeoLoop,
  loop_bbox: &BBox,
  boundary: &CellBoundary,
  boundary_bbox: &BBox,
) -> bool {
  if geoloop.is_empty() || boundary.num_verts == 0 || !loop_bbox.overlaps(boundary_bbox) {
    return false;
  }

  let (loop_norm, boundary_norm) = bbox_normalization(loop_bbox, boundary_bbox);
  let n = geoloop.num_verts();
  let m = boundary.num_verts;

  for i in 0..n {
    let mut p1 = geoloop.verts[i];
    let mut p2 = geoloop.verts[(i + 1) % n];
    p1.lng = normalize_lng(p1.lng, loop_norm);
    p2.lng = normalize_lng(p2.lng, loop_norm);

    for j in 0..m {
      let mut q1 = boundary.verts[j];
      let mut q2 = boundary.verts[(j + 1) % m];
      q1.lng = normalize_lng(q1.lng, boundary_norm);
      q2.lng = normalize_lng(q2.lng, boundary_norm);
      if line_crosses_line(&p1, &p2, &q1, &q2) {
        return true;
      }
    }
  }
  false
}

/// Whether the cell boundary crosses the outer loop or any hole.
pub(crate) fn cell_boundary_crosses_polygon(
  polygon: &GeoPolygon,
  bboxes: &[BBox],
  boundary: &CellBoundary,
  boundary_bbox: &BBox,
) -> bool {
  if cell_boundary_crosses_geoloop(&polygon.geoloop, &bboxes[0], boundary, boundary_bbox) {
    return true;
  }
  polygon
    .holes
    .iter()
    .enumerate()
    .any(|(i, hole)| cell_boundary_crosses_geoloop(hole, &bboxes[i + 1], boundary, boundary_bbox))
}

/// Whether the cell boundary lies entirely inside the polygon (outside
/// every hole, crossing nothing).
pub(crate) fn cell_boundary_inside_polygon(
  polygon: &GeoPolygon,
  bboxes: &[BBox],
  boundary: &CellBoundary,
  boundary_bbox: &BBox,
) -> bool {
  if boundary.num_verts == 0 {
    return false;
  }

  // every vertex inside the outer loop
  for v in boundary.verts() {
    if !point_inside_geoloop(&polygon.geoloop, &bboxes[0], v) {
      return false;
    }
  }
  if cell_boundary_crosses_geoloop(&polygon.geoloop, &bboxes[0], boundary, boundary_bbox) {
    return false;
  }

  // no hole may poke into the cell or be crossed by it
  for (i, hole) in polygon.holes.iter().enumerate() {
    if !hole.is_empty() && point_inside_cell_boundary(boundary, boundary_bbox, &hole.verts[0]) {
      return false;
    }
    if cell_boundary_crosses_geoloop(hole, &bboxes[i + 1], boundary, boundary_bbox) {
      return false;
    }
  }
  true
}

/// Bounding boxes for a polygon: outer loop first, then one per hole.
#[must_use]
pub(crate) fn bboxes_from_polygon(polygon: &GeoPolygon) -> Vec<BBox> {
  let mut out = Vec::with_capacity(1 + polygon.holes.len());
  out.push(BBox::from_geoloop(&polygon.geoloop));
  out.extend(polygon.holes.iter().map(BBox::from_geoloop));
  out
}

fn v3d_cross(a: &Vec3d, b: &Vec3d) -> Vec3d {
  Vec3d {
    x: a.y * b.z - a.z * b.y,
    y: a.z * b.x - a.x * b.z,
    z: a.x * b.y - a.y * b.x,
  }
}

fn v3d_dot(a: &Vec3d, b: &Vec3d) -> f64 {
  a.x * b.x + a.y * b.y + a.z * b.z
}

/// Area in steradians of the spherical polygon through `verts`, by
/// summing signed spherical triangle excesses against an anchor vertex.
#[must_use]
pub(crate) fn sphere_area_rads2(verts: &[LatLng]) -> f64 {
  if verts.len() < 3 {
    return 0.0;
  }
  let anchor = Vec3d::from_latlng(&verts[0]);
  let mut total = 0.0;
  for i in 1..(verts.len() - 1) {
    let v1 = Vec3d::from_latlng(&verts[i]);
    let v2 = Vec3d::from_latlng(&verts[i + 1]);
    let v = v3d_dot(&v3d_cross(&anchor, &v1), &v2);
    let s = 1.0 + v3d_dot(&anchor, &v1) + v3d_dot(&v1, &v2) + v3d_dot(&v2, &anchor);
    total += v.atan2(s);
  }
  (total * 2.0).abs()
}

/// Estimate of the number of cells at `res` needed to cover the box.
pub(crate) fn bbox_hex_estimate(bbox: &BBox, res: i32) -> Result<i64, GridError> {
  if !(0..=MAX_RESOLUTION).contains(&res) {
    return Err(GridError::ResolutionDomain);
  }
  let avg_area_km2 = get_hexagon_area_avg_km2(res)?;

  let height_km = great_circle_distance_km(
    &LatLng { lat: bbox.north, lng: bbox.west },
    &LatLng { lat: bbox.south, lng: bbox.west },
  );
  let width_km = great_circle_distance_km(
    &LatLng { lat: bbox.south, lng: bbox.east },
    &LatLng { lat: bbox.south, lng: bbox.west },
  );
  let area_km2 = height_km * width_km * CELL_SCALE_FACTOR;
  if area_km2 < EPSILON {
    return Ok(1);
  }

  let estimate = (area_km2 / avg_area_km2).ceil();
  if !estimate.is_finite() {
    return Err(GridError::Failed);
  }
  Ok((estimate as i64).max(1))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::f64::consts::PI;

  // a small loop around central San Francisco, radians
  fn sf_loop() -> GeoLoop {
    let raw = [
      (0.659966917655, -2.1364398519396),
      (0.6595011102219, -2.1359434279405),
      (0.6583348114025, -2.1354884206045),
      (0.6581220034068, -2.1382437718946),
      (0.6594479998527, -2.1384597563896),
      (0.6599990002976, -2.1376771158464),
    ];
    GeoLoop {
      verts: raw.iter().map(|&(lat, lng)| LatLng { lat, lng }).collect(),
    }
  }

  #[test]
  fn bbox_from_loop_and_containment() {
    let geoloop = sf_loop();
    let bbox = BBox::from_geoloop(&geoloop);
    assert!(!bbox.is_transmeridian());

    let inside = LatLng { lat: 0.659, lng: -2.136 };
    let outside = LatLng { lat: 1.0, lng: 2.0 };
    assert!(point_inside_geoloop(&geoloop, &bbox, &inside));
    assert!(!point_inside_geoloop(&geoloop, &bbox, &outside));
  }

  #[test]
  fn transmeridian_bbox() {
    let geoloop = GeoLoop {
      verts: vec![
        LatLng { lat: 0.1, lng: PI - 0.1 },
        LatLng { lat: 0.1, lng: -PI + 0.1 },
        LatLng { lat: -0.1, lng: -PI + 0.1 },
        LatLng { lat: -0.1, lng: PI - 0.1 },
      ],
    };
    let bbox = BBox::from_geoloop(&geoloop);
    assert!(bbox.is_transmeridian());
    assert!((bbox.width_rads() - 0.2).abs() < EPSILON_RAD);
    assert!(bbox.contains_point(&LatLng { lat: 0.0, lng: PI - 0.05 }));
    assert!(bbox.contains_point(&LatLng { lat: 0.0, lng: -PI + 0.05 }));
    assert!(!bbox.contains_point(&LatLng { lat: 0.0, lng: 0.0 }));

    let center = bbox.center();
    assert!(center.lng.abs() > PI - EPSILON_RAD, "center sits on the antimeridian");
  }

  #[test]
  fn winding_order() {
    let ccw = [
      LatLng { lat: 0.0, lng: 0.0 },
      LatLng { lat: 0.0, lng: 1.0 },
      LatLng { lat: 1.0, lng: 1.0 },
      LatLng { lat: 1.0, lng: 0.0 },
    ];
    // traversing the same square in the opposite direction
    let cw: Vec<LatLng> = ccw.iter().rev().copied().collect();
    assert!(is_clockwise_verts(&cw, false) != is_clockwise_verts(&ccw, false));
  }

  #[test]
  fn segment_crossing() {
    let a1 = LatLng { lat: 0.0, lng: 0.0 };
    let a2 = LatLng { lat: 1.0, lng: 1.0 };
    let b1 = LatLng { lat: 0.0, lng: 1.0 };
    let b2 = LatLng { lat: 1.0, lng: 0.0 };
    assert!(line_crosses_line(&a1, &a2, &b1, &b2));

    let short = LatLng { lat: 0.4, lng: 0.4 };
    assert!(!line_crosses_line(&a1, &short, &b1, &b2));
  }

  #[test]
  fn octant_area() {
    let verts = [
      LatLng { lat: 0.0, lng: 0.0 },
      LatLng { lat: FRAC_PI_2, lng: 0.0 },
      LatLng { lat: 0.0, lng: FRAC_PI_2 },
    ];
    let area = sphere_area_rads2(&verts);
    assert!((area - PI / 2.0).abs() < 1e-9, "one octant of the sphere, got {area}");
  }

  #[test]
  fn polygon_with_hole_containment() {
    let outer = GeoLoop {
      verts: vec![
        LatLng { lat: 0.0, lng: 0.0 },
        LatLng { lat: 0.0, lng: 0.4 },
        LatLng { lat: 0.4, lng: 0.4 },
        LatLng { lat: 0.4, lng: 0.0 },
      ],
    };
    let hole = GeoLoop {
      verts: vec![
        LatLng { lat: 0.1, lng: 0.1 },
        LatLng { lat: 0.1, lng: 0.3 },
        LatLng { lat: 0.3, lng: 0.3 },
        LatLng { lat: 0.3, lng: 0.1 },
      ],
    };
    let polygon = GeoPolygon {
      geoloop: outer,
      holes: vec![hole],
    };
    let bboxes = bboxes_from_polygon(&polygon);
    assert_eq!(bboxes.len(), 2);

    let in_ring = LatLng { lat: 0.05, lng: 0.2 };
    let in_hole = LatLng { lat: 0.2, lng: 0.2 };
    let outside = LatLng { lat: 0.5, lng: 0.5 };
    assert!(point_inside_polygon(&polygon, &bboxes, &in_ring));
    assert!(!point_inside_polygon(&polygon, &bboxes, &in_hole));
    assert!(!point_inside_polygon(&polygon, &bboxes, &outside));
  }

  #[test]
  fn estimates_are_positive_and_scale() {
    let bbox = BBox {
      north: 0.1,
      south: 0.0,
      east: 0.1,
      west: 0.0,
    };
    let coarse = bbox_hex_estimate(&bbox, 3).unwrap();
    let fine = bbox_hex_estimate(&bbox, 6).unwrap();
    assert!(coarse >= 1);
    assert!(fine > coarse);
    assert_eq!(bbox_hex_estimate(&bbox, 16), Err(GridError::ResolutionDomain));
  }
}
