//! Face-anchored addressing and the gnomonic projection between the
//! sphere and face-local hexagonal planes.
//!
//! A cell's canonical address below the geographic layer is a [`FaceIJK`]:
//! an icosahedron face plus IJK+ coordinates on that face's grid. Cells
//! near a face edge may "overage" onto a neighboring face and must be
//! re-expressed in that face's system before projecting.

use crate::constants::{
  AP7_ROT_RADS, EPSILON, INV_RES0_U_GNOMONIC, MAX_BOUNDARY_VERTS, NUM_HEX_VERTS, NUM_PENT_VERTS,
  ONE_THIRD, RES0_U_GNOMONIC, RSQRT7, SIN60, SQRT7,
};
use crate::coords::icosahedron::{
  ADJACENT_FACE_DIR, FACE_AXES_AZ_RADS_CII, FACE_CENTER_GEO, FACE_CENTER_POINT, FACE_NEIGHBORS,
  IJ_QUADRANT, JK_QUADRANT, KI_QUADRANT, MAX_DIM_BY_CII_RES, UNIT_SCALE_BY_CII_RES,
};
use crate::coords::ijk::CoordIJK;
use crate::latlng::{geo_az_distance_rads, geo_azimuth_rads, pos_angle_rads};
use crate::math::{Vec2d, Vec3d};
use crate::types::{CellBoundary, LatLng};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a resolution uses the Class III (counter-clockwise rotated)
/// grid orientation. Odd resolutions are Class III.
#[inline]
#[must_use]
pub(crate) fn is_class_iii_res(res: i32) -> bool {
  res % 2 == 1
}

/// An icosahedron face number plus IJK+ coordinates on that face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceIJK {
  /// Face number (0-19).
  pub face: i32,
  /// IJK+ coordinates on the face grid.
  pub coord: CoordIJK,
}

/// How far a coordinate lies beyond its face's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overage {
  /// Within the face.
  None,
  /// Exactly on a face edge (substrate grids only).
  FaceEdge,
  /// Beyond the edge, re-expressed on the neighboring face.
  NewFace,
}

/// The face whose center is closest to `g`, with the squared 3D distance
/// to that center.
#[must_use]
pub(crate) fn geo_to_closest_face(g: &LatLng) -> (i32, f64) {
  let v3d = Vec3d::from_latlng(g);
  let mut face = 0;
  let mut sqd = 5.0;
  for (f, center) in FACE_CENTER_POINT.iter().enumerate() {
    let d = center.square_dist(&v3d);
    if d < sqd {
      face = f as i32;
      sqd = d;
    }
  }
  (face, sqd)
}

/// Project a geographic point onto the closest face's hex plane at the
/// given resolution's scale.
#[must_use]
pub(crate) fn geo_to_hex2d(g: &LatLng, res: i32) -> (i32, Vec2d) {
  let (face, sqd) = geo_to_closest_face(g);

  // cos(r) = 1 - 2 * sin^2(r/2) = 1 - sqd/2
  let r = (1.0 - sqd * 0.5).clamp(-1.0, 1.0).acos();
  if r < EPSILON {
    return (face, Vec2d::default());
  }

  // angle from the face's i-axis to the point
  let az = geo_azimuth_rads(&FACE_CENTER_GEO[face as usize], g);
  let mut theta = pos_angle_rads(FACE_AXES_AZ_RADS_CII[face as usize][0] - pos_angle_rads(az));
  if is_class_iii_res(res) {
    theta = pos_angle_rads(theta - AP7_ROT_RADS);
  }

  // gnomonic scaling, then into hex grid units at the target resolution
  let mut r = r.tan() * INV_RES0_U_GNOMONIC;
  for _ in 0..res {
    r *= SQRT7;
  }

  (face, Vec2d { x: r * theta.cos(), y: r * theta.sin() })
}

/// Project a face-plane point back to geographic coordinates. `substrate`
/// marks coordinates on the aperture-3 vertex grid.
#[must_use]
pub(crate) fn hex2d_to_geo(v: &Vec2d, face: i32, res: i32, substrate: bool) -> LatLng {
  let mut r = v.mag();
  if r < EPSILON {
    return FACE_CENTER_GEO[face as usize];
  }

  let mut theta = v.y.atan2(v.x);

  // scale back to resolution-0 units
  for _ in 0..res {
    r *= RSQRT7;
  }
  if substrate {
    r *= ONE_THIRD;
    if is_class_iii_res(res) {
      r *= RSQRT7;
    }
  }
  r = (r * RES0_U_GNOMONIC).atan();

  // substrate vertex grids are never rotated relative to the face
  if !substrate && is_class_iii_res(res) {
    theta = pos_angle_rads(theta + AP7_ROT_RADS);
  }
  let az = pos_angle_rads(FACE_AXES_AZ_RADS_CII[face as usize][0] - theta);
  geo_az_distance_rads(&FACE_CENTER_GEO[face as usize], az, r)
}

impl FaceIJK {
  #[inline]
  #[must_use]
  pub(crate) const fn new(face: i32, coord: CoordIJK) -> Self {
    Self { face, coord }
  }

  /// The face address of the cell containing `g` at the given resolution.
  #[must_use]
  pub(crate) fn from_geo(g: &LatLng, res: i32) -> FaceIJK {
    let (face, v) = geo_to_hex2d(g, res);
    FaceIJK {
      face,
      coord: CoordIJK::from_hex2d(&v),
    }
  }

  /// The geographic center of this cell.
  #[must_use]
  pub(crate) fn to_geo(&self, res: i32) -> LatLng {
    hex2d_to_geo(&self.coord.to_hex2d(), self.face, res, false)
  }

  /// If the coordinates lie beyond the face bounds for `res`, re-express
  /// them on the proper adjacent face. Works on Class II grids only;
  /// `substrate` triples the bounds for aperture-3 vertex grids.
  pub(crate) fn adjust_overage_class_ii(&mut self, res: i32, pent_leading_4: bool, substrate: bool) -> Overage {
    let max_dim_base = MAX_DIM_BY_CII_RES[res as usize];
    let max_dim = if substrate { max_dim_base * 3 } else { max_dim_base };

    let sum = self.coord.i + self.coord.j + self.coord.k;
    if substrate && sum == max_dim {
      return Overage::FaceEdge;
    }
    if sum <= max_dim {
      return Overage::None;
    }

    let orient = if self.coord.k > 0 {
      if self.coord.j > 0 {
        &FACE_NEIGHBORS[self.face as usize][JK_QUADRANT]
      } else {
        // adjust for the pentagonal missing sequence
        if pent_leading_4 {
          // rotate about the vertex opposite the missing sequence
          let origin = CoordIJK::new(max_dim_base, 0, 0);
          let mut tmp = self.coord.sub(&origin);
          tmp.rotate60_cw();
          self.coord = tmp.add(&origin);
        }
        &FACE_NEIGHBORS[self.face as usize][KI_QUADRANT]
      }
    } else {
      &FACE_NEIGHBORS[self.face as usize][IJ_QUADRANT]
    };

    self.face = orient.face;
    for _ in 0..orient.rot60 {
      self.coord.rotate60_ccw();
    }

    let mut trans = orient.translate;
    let mut unit_scale = UNIT_SCALE_BY_CII_RES[res as usize];
    if substrate {
      unit_scale *= 3;
    }
    trans.scale(unit_scale);
    self.coord = self.coord.add(&trans);
    self.coord.normalize();

    // a new face can still land exactly on a substrate edge
    if substrate && self.coord.i + self.coord.j + self.coord.k == max_dim {
      Overage::FaceEdge
    } else {
      Overage::NewFace
    }
  }

  /// Repeatedly adjust a pentagon vertex until it stops crossing faces.
  pub(crate) fn adjust_pent_vert_overage(&mut self, res: i32) -> Overage {
    loop {
      let overage = self.adjust_overage_class_ii(res, false, true);
      if overage != Overage::NewFace {
        return overage;
      }
    }
  }

  /// The six cell vertices on the substrate grid. Moves `self` onto the
  /// substrate grid and bumps `res` to the substrate's Class II
  /// resolution.
  #[must_use]
  pub(crate) fn hex_verts(&mut self, res: &mut i32) -> [FaceIJK; NUM_HEX_VERTS] {
    // the vertexes of an origin-centered cell in a Class II resolution on a
    // substrate grid with aperture sequence 33r
    #[rustfmt::skip]
    const VERTS_CII: [CoordIJK; NUM_HEX_VERTS] = [
      CoordIJK::new(2, 1, 0), CoordIJK::new(1, 2, 0),
      CoordIJK::new(0, 2, 1), CoordIJK::new(0, 1, 2),
      CoordIJK::new(1, 0, 2), CoordIJK::new(2, 0, 1),
    ];
    // the vertexes of an origin-centered cell in a Class III resolution on
    // a substrate grid with aperture sequence 33r7r
    #[rustfmt::skip]
    const VERTS_CIII: [CoordIJK; NUM_HEX_VERTS] = [
      CoordIJK::new(5, 4, 0), CoordIJK::new(1, 5, 0),
      CoordIJK::new(0, 5, 4), CoordIJK::new(0, 1, 5),
      CoordIJK::new(4, 0, 5), CoordIJK::new(5, 0, 1),
    ];
    let verts = if is_class_iii_res(*res) { &VERTS_CIII } else { &VERTS_CII };

    self.to_substrate(res);

    let mut out = [FaceIJK::default(); NUM_HEX_VERTS];
    for (v, vert) in verts.iter().enumerate() {
      out[v].face = self.face;
      out[v].coord = self.coord.add(vert);
      out[v].coord.normalize();
    }
    out
  }

  /// The five pentagon vertices on the substrate grid; otherwise as
  /// [`FaceIJK::hex_verts`].
  #[must_use]
  pub(crate) fn pent_verts(&mut self, res: &mut i32) -> [FaceIJK; NUM_PENT_VERTS] {
    #[rustfmt::skip]
    const VERTS_CII: [CoordIJK; NUM_PENT_VERTS] = [
      CoordIJK::new(2, 1, 0), CoordIJK::new(1, 2, 0),
      CoordIJK::new(0, 2, 1), CoordIJK::new(0, 1, 2),
      CoordIJK::new(1, 0, 2),
    ];
    #[rustfmt::skip]
    const VERTS_CIII: [CoordIJK; NUM_PENT_VERTS] = [
      CoordIJK::new(5, 4, 0), CoordIJK::new(1, 5, 0),
      CoordIJK::new(0, 5, 4), CoordIJK::new(0, 1, 5),
      CoordIJK::new(4, 0, 5),
    ];
    let verts = if is_class_iii_res(*res) { &VERTS_CIII } else { &VERTS_CII };

    self.to_substrate(res);

    let mut out = [FaceIJK::default(); NUM_PENT_VERTS];
    for (v, vert) in verts.iter().enumerate() {
      out[v].face = self.face;
      out[v].coord = self.coord.add(vert);
      out[v].coord.normalize();
    }
    out
  }

  /// Move the center onto the aperture-3 substrate grid, adjusting `res`
  /// to the substrate's Class II resolution.
  fn to_substrate(&mut self, res: &mut i32) {
    self.coord.down_ap3();
    self.coord.down_ap3r();
    if is_class_iii_res(*res) {
      self.coord.down_ap7r();
      *res += 1;
    }
  }

  /// The boundary of the hexagonal cell centered here, `length` vertices
  /// starting from topological vertex `start`. Inserts icosahedron edge
  /// crossings for Class III cells that straddle faces.
  #[must_use]
  pub(crate) fn hex_boundary(&self, res: i32, start: i32, length: i32) -> CellBoundary {
    let mut center = *self;
    let mut adj_res = res;
    let verts = center.hex_verts(&mut adj_res);

    // iterate one extra vertex to get the last edge's crossing
    let additional_iteration = i32::from(length == NUM_HEX_VERTS as i32);

    let mut g = CellBoundary::default();
    let mut last_face = -1;
    let mut last_overage = Overage::None;

    for vert in start..(start + length + additional_iteration) {
      let v = (vert % NUM_HEX_VERTS as i32) as usize;
      let mut fijk = verts[v];
      let overage = fijk.adjust_overage_class_ii(adj_res, false, true);

      // Class III edges that change faces cross an icosahedron edge and
      // need an extra vertex at the crossing; Class II cells have their
      // vertices on the face edge itself.
      if is_class_iii_res(res) && vert > start && fijk.face != last_face && last_overage != Overage::FaceEdge {
        let last_v = (v + NUM_HEX_VERTS - 1) % NUM_HEX_VERTS;
        let orig2d0 = verts[last_v].coord.to_hex2d();
        let orig2d1 = verts[v].coord.to_hex2d();

        let (edge0, edge1) = icosa_edge(self.face, if last_face == center.face { fijk.face } else { last_face }, adj_res);

        let inter = Vec2d::intersect(&orig2d0, &orig2d1, &edge0, &edge1);
        // a crossing exactly at a cell vertex needs no extra point
        if !orig2d0.almost_equals(&inter) && !orig2d1.almost_equals(&inter) && g.num_verts < MAX_BOUNDARY_VERTS {
          g.push(hex2d_to_geo(&inter, center.face, adj_res, true));
        }
      }

      if vert < start + length && g.num_verts < MAX_BOUNDARY_VERTS {
        g.push(hex2d_to_geo(&fijk.coord.to_hex2d(), fijk.face, adj_res, true));
      }

      last_face = fijk.face;
      last_overage = overage;
    }
    g
  }

  /// The boundary of the pentagonal cell centered here. Every Class III
  /// pentagon edge crosses an icosahedron edge.
  #[must_use]
  pub(crate) fn pent_boundary(&self, res: i32, start: i32, length: i32) -> CellBoundary {
    let mut center = *self;
    let mut adj_res = res;
    let verts = center.pent_verts(&mut adj_res);

    let additional_iteration = i32::from(length == NUM_PENT_VERTS as i32);

    let mut g = CellBoundary::default();
    let mut last_fijk = FaceIJK::default();

    for vert in start..(start + length + additional_iteration) {
      let v = (vert % NUM_PENT_VERTS as i32) as usize;
      let mut fijk = verts[v];
      fijk.adjust_pent_vert_overage(adj_res);

      if is_class_iii_res(res) && vert > start {
        // re-express the current vertex in the previous vertex's face
        // system, then intersect the edge between them with the
        // icosahedron edge separating the two faces
        let mut tmp = fijk;
        let orig2d0 = last_fijk.coord.to_hex2d();

        let to_last_dir = ADJACENT_FACE_DIR[tmp.face as usize][last_fijk.face as usize];
        let orient = &FACE_NEIGHBORS[tmp.face as usize][to_last_dir as usize];
        tmp.face = orient.face;
        for _ in 0..orient.rot60 {
          tmp.coord.rotate60_ccw();
        }
        let mut trans = orient.translate;
        trans.scale(UNIT_SCALE_BY_CII_RES[adj_res as usize] * 3);
        tmp.coord = tmp.coord.add(&trans);
        tmp.coord.normalize();

        let orig2d1 = tmp.coord.to_hex2d();

        let (edge0, edge1) = icosa_edge(tmp.face, fijk.face, adj_res);

        let inter = Vec2d::intersect(&orig2d0, &orig2d1, &edge0, &edge1);
        if g.num_verts < MAX_BOUNDARY_VERTS {
          g.push(hex2d_to_geo(&inter, tmp.face, adj_res, true));
        }
      }

      if vert < start + length && g.num_verts < MAX_BOUNDARY_VERTS {
        g.push(hex2d_to_geo(&fijk.coord.to_hex2d(), fijk.face, adj_res, true));
      }

      last_fijk = fijk;
    }
    g
  }
}

/// The two planar endpoints of the icosahedron edge lying in `face`'s
/// substrate plane towards `other_face`.
fn icosa_edge(face: i32, other_face: i32, adj_res: i32) -> (Vec2d, Vec2d) {
  let max_dim = f64::from(MAX_DIM_BY_CII_RES[adj_res as usize] * 3);
  let v0 = Vec2d { x: 3.0 * max_dim, y: 0.0 };
  let v1 = Vec2d {
    x: -1.5 * max_dim,
    y: 3.0 * SIN60 * max_dim,
  };
  let v2 = Vec2d {
    x: -1.5 * max_dim,
    y: -3.0 * SIN60 * max_dim,
  };
  match ADJACENT_FACE_DIR[face as usize][other_face as usize] {
    d if d == IJ_QUADRANT as i32 => (v0, v1),
    d if d == JK_QUADRANT as i32 => (v1, v2),
    _ => (v2, v0),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{EPSILON_RAD, MAX_RESOLUTION, NUM_ICOSA_FACES};
  use crate::latlng::geo_almost_equal_threshold;
  use std::f64::consts::FRAC_PI_2;

  #[test]
  fn face_centers_project_to_origin() {
    for f in 0..NUM_ICOSA_FACES as usize {
      let (face, v) = geo_to_hex2d(&FACE_CENTER_GEO[f], 0);
      assert_eq!(face, f as i32);
      assert!(v.mag() < EPSILON, "face {f} center projects to the plane origin");
    }
  }

  #[test]
  fn closest_face_at_poles() {
    let (north, _) = geo_to_closest_face(&LatLng { lat: FRAC_PI_2, lng: 0.0 });
    assert!((0..=4).contains(&north), "north pole face, got {north}");
    let (south, _) = geo_to_closest_face(&LatLng { lat: -FRAC_PI_2, lng: 0.0 });
    assert!((15..=19).contains(&south), "south pole face, got {south}");
  }

  #[test]
  fn hex2d_geo_roundtrip() {
    for f in 0..NUM_ICOSA_FACES as i32 {
      for res in [0, 1, 5] {
        let v = if res == 0 {
          Vec2d::default()
        } else {
          Vec2d {
            x: 0.1 * f64::from(f + 1),
            y: -0.05 * f64::from(f + 1),
          }
        };
        let geo = hex2d_to_geo(&v, f, res, false);
        let (face_rt, v_rt) = geo_to_hex2d(&geo, res);
        assert_eq!(face_rt, f, "res {res}");
        let tol = EPSILON * if res == 0 { 1.0 } else { 1e6 };
        assert!((v.x - v_rt.x).abs() < tol && (v.y - v_rt.y).abs() < tol, "res {res}");
      }
    }
  }

  #[test]
  fn face_centers_map_to_origin_cells() {
    for f in 0..NUM_ICOSA_FACES as usize {
      for res in 0..=MAX_RESOLUTION {
        let fijk = FaceIJK::from_geo(&FACE_CENTER_GEO[f], res);
        assert_eq!(fijk.face, f as i32, "face {f} res {res}");
        assert_eq!(fijk.coord, CoordIJK::default(), "face {f} res {res}");
      }
    }
  }

  #[test]
  fn face_ijk_geo_roundtrip() {
    for f in 0..NUM_ICOSA_FACES as i32 {
      for res in 0..=3 {
        let mut fijk = FaceIJK::new(f, CoordIJK::new(res + 1, res / 2, 0));
        fijk.coord.normalize();
        let geo = fijk.to_geo(res);
        let rt = FaceIJK::from_geo(&geo, res);
        assert_eq!(rt.face, fijk.face, "res {res}");
        let geo_rt = rt.to_geo(res);
        assert!(
          geo_almost_equal_threshold(&geo, &geo_rt, EPSILON_RAD),
          "res {res} face {f}"
        );
      }
    }
  }

  #[test]
  fn overage_noop_within_face() {
    let mut fijk = FaceIJK::new(1, CoordIJK::default());
    assert_eq!(fijk.adjust_overage_class_ii(2, false, false), Overage::None);
    assert_eq!(fijk.face, 1);

    let mut on_edge = FaceIJK::new(1, CoordIJK::new(42, 0, 0));
    assert_eq!(on_edge.adjust_overage_class_ii(2, false, true), Overage::FaceEdge);
    assert_eq!(on_edge.coord, CoordIJK::new(42, 0, 0));
  }

  #[test]
  fn overage_crosses_to_new_face() {
    let mut fijk = FaceIJK::new(0, CoordIJK::new(3, 0, 0));
    assert_eq!(fijk.adjust_overage_class_ii(0, false, false), Overage::NewFace);
    assert_eq!(fijk.face, 4);
    assert_eq!(fijk.coord, CoordIJK::new(3, 1, 0));
  }

  #[test]
  fn overage_pent_leading_4() {
    let mut fijk = FaceIJK::new(0, CoordIJK::new(1, 0, 2));
    assert_eq!(fijk.adjust_overage_class_ii(0, true, false), Overage::NewFace);
    assert_eq!(fijk.face, 1);
    assert_eq!(fijk.coord, CoordIJK::new(3, 3, 0));
  }

  #[test]
  fn pent_vert_overage_terminates_off_new_face() {
    let mut fijk = FaceIJK::new(0, CoordIJK::new(43, 0, 0));
    let overage = fijk.adjust_pent_vert_overage(2);
    assert_ne!(overage, Overage::NewFace);
  }

  #[test]
  fn hexagon_boundary_counts() {
    let mut fijk = FaceIJK::new(1, CoordIJK::new(1, 1, 0));
    fijk.coord.normalize();
    let boundary = fijk.hex_boundary(2, 0, NUM_HEX_VERTS as i32);
    assert_eq!(boundary.num_verts, NUM_HEX_VERTS);
  }

  #[test]
  fn pentagon_boundary_counts() {
    // class III pentagons pick up a distortion vertex on every edge
    let pent = FaceIJK::new(0, CoordIJK::new(2, 0, 0));
    let boundary = pent.pent_boundary(1, 0, NUM_PENT_VERTS as i32);
    assert_eq!(boundary.num_verts, 10);

    // class II pentagons do not
    let pent2 = FaceIJK::new(0, CoordIJK::new(14, 0, 0));
    let boundary2 = pent2.pent_boundary(2, 0, NUM_PENT_VERTS as i32);
    assert_eq!(boundary2.num_verts, NUM_PENT_VERTS);
  }

  #[test]
  fn substrate_vert_counts() {
    let mut fijk = FaceIJK::new(0, CoordIJK::new(1, 1, 0));
    let mut res = 2;
    let verts = fijk.hex_verts(&mut res);
    assert_eq!(res, 2, "class II resolution unchanged");
    assert!(verts.iter().all(|v| v.face == 0));

    let mut pent = FaceIJK::new(0, CoordIJK::new(2, 0, 0));
    let mut res = 1;
    let _ = pent.pent_verts(&mut res);
    assert_eq!(res, 2, "class III bumps to the substrate class II resolution");
  }
}
