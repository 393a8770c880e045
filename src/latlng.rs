//! Geographic coordinate helpers: angle normalization, azimuths, great
//! circle distances and per-resolution average cell statistics.

use crate::constants::{
  DEG_TO_RAD, EARTH_RADIUS_KM, EPSILON_RAD, MAX_RESOLUTION, RAD_TO_DEG, TWO_PI,
};
use crate::error::GridError;
use crate::polygon::LongitudeNormalization;
use crate::types::LatLng;
use std::f64::consts::{FRAC_PI_2, PI};

/// Converts degrees to radians.
#[inline]
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * DEG_TO_RAD
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * RAD_TO_DEG
}

impl LatLng {
  /// Build from degrees, converting to the internal radian representation.
  #[must_use]
  pub fn from_degrees(lat: f64, lng: f64) -> Self {
    LatLng {
      lat: degs_to_rads(lat),
      lng: degs_to_rads(lng),
    }
  }

  /// The (latitude, longitude) pair in degrees.
  #[must_use]
  pub fn to_degrees(&self) -> (f64, f64) {
    (rads_to_degs(self.lat), rads_to_degs(self.lng))
  }
}

/// Normalizes an angle in radians into `[0, 2*pi)`.
#[inline]
#[must_use]
pub(crate) fn pos_angle_rads(rads: f64) -> f64 {
  let mut tmp = if rads < 0.0 { rads + TWO_PI } else { rads };
  while tmp >= TWO_PI {
    tmp -= TWO_PI;
  }
  tmp
}

/// Whether two spherical coordinates are within `threshold` of each other
/// on both components.
#[inline]
#[must_use]
pub(crate) fn geo_almost_equal_threshold(p1: &LatLng, p2: &LatLng, threshold: f64) -> bool {
  (p1.lat - p2.lat).abs() < threshold && (p1.lng - p2.lng).abs() < threshold
}

/// Whether two spherical coordinates coincide within the standard grid
/// tolerance.
#[inline]
#[must_use]
pub(crate) fn geo_almost_equal(p1: &LatLng, p2: &LatLng) -> bool {
  geo_almost_equal_threshold(p1, p2, EPSILON_RAD)
}

/// Folds a latitude into `[-pi/2, pi/2]`, wrapping over the poles.
#[inline]
#[must_use]
pub(crate) fn constrain_lat(lat: f64) -> f64 {
  let mut lat = (lat + PI).rem_euclid(TWO_PI) - PI;
  if lat > FRAC_PI_2 {
    lat = PI - lat;
  } else if lat < -FRAC_PI_2 {
    lat = -PI - lat;
  }
  lat
}

/// Wraps a longitude into `[-pi, pi]`.
#[inline]
#[must_use]
pub(crate) fn constrain_lng(mut lng: f64) -> f64 {
  while lng > PI {
    lng -= TWO_PI;
  }
  while lng < -PI {
    lng += TWO_PI;
  }
  lng
}

/// Azimuth from `p1` to `p2` in radians.
#[inline]
#[must_use]
pub(crate) fn geo_azimuth_rads(p1: &LatLng, p2: &LatLng) -> f64 {
  (p2.lat.cos() * (p2.lng - p1.lng).sin())
    .atan2(p1.lat.cos() * p2.lat.sin() - p1.lat.sin() * p2.lat.cos() * (p2.lng - p1.lng).cos())
}

/// The point at the given azimuth and angular distance from `p1`.
#[must_use]
pub(crate) fn geo_az_distance_rads(p1: &LatLng, az: f64, distance: f64) -> LatLng {
  if distance < EPSILON_RAD {
    return *p1;
  }

  let az = pos_angle_rads(az);
  let mut p2 = LatLng::default();

  if az < EPSILON_RAD || (az - PI).abs() < EPSILON_RAD {
    // due north or south
    p2.lat = if az < EPSILON_RAD { p1.lat + distance } else { p1.lat - distance };
    if (p2.lat - FRAC_PI_2).abs() < EPSILON_RAD {
      p2.lat = FRAC_PI_2;
      p2.lng = 0.0;
    } else if (p2.lat + FRAC_PI_2).abs() < EPSILON_RAD {
      p2.lat = -FRAC_PI_2;
      p2.lng = 0.0;
    } else {
      p2.lng = constrain_lng(p1.lng);
    }
  } else {
    let sin_lat =
      (p1.lat.sin() * distance.cos() + p1.lat.cos() * distance.sin() * az.cos()).clamp(-1.0, 1.0);
    p2.lat = sin_lat.asin();
    if (p2.lat - FRAC_PI_2).abs() < EPSILON_RAD {
      p2.lat = FRAC_PI_2;
      p2.lng = 0.0;
    } else if (p2.lat + FRAC_PI_2).abs() < EPSILON_RAD {
      p2.lat = -FRAC_PI_2;
      p2.lng = 0.0;
    } else {
      let cos_p1_lat = p1.lat.cos();
      if cos_p1_lat.abs() < EPSILON_RAD {
        // starting at a pole: the azimuth is the longitude
        p2.lng = constrain_lng(az);
      } else {
        let inv_cos_p2_lat = 1.0 / p2.lat.cos();
        let sin_lng = (az.sin() * distance.sin() * inv_cos_p2_lat).clamp(-1.0, 1.0);
        let cos_lng =
          ((distance.cos() - p1.lat.sin() * p2.lat.sin()) / cos_p1_lat * inv_cos_p2_lat).clamp(-1.0, 1.0);
        p2.lng = constrain_lng(p1.lng + sin_lng.atan2(cos_lng));
      }
    }
  }
  p2
}

/// Great circle distance in radians between two points (haversine).
#[must_use]
pub fn great_circle_distance_rads(a: &LatLng, b: &LatLng) -> f64 {
  let sin_lat = ((b.lat - a.lat) * 0.5).sin();
  let sin_lng = ((b.lng - a.lng) * 0.5).sin();
  let h = (sin_lat * sin_lat + a.lat.cos() * b.lat.cos() * sin_lng * sin_lng).clamp(0.0, 1.0);
  2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great circle distance in kilometers between two points.
#[must_use]
pub fn great_circle_distance_km(a: &LatLng, b: &LatLng) -> f64 {
  great_circle_distance_rads(a, b) * EARTH_RADIUS_KM
}

/// Great circle distance in meters between two points.
#[must_use]
pub fn great_circle_distance_m(a: &LatLng, b: &LatLng) -> f64 {
  great_circle_distance_km(a, b) * 1000.0
}

/// Average hexagon area in square kilometers at the given resolution
/// (pentagons excluded from the average).
pub fn get_hexagon_area_avg_km2(res: i32) -> Result<f64, GridError> {
  #[rustfmt::skip]
  const AREAS_KM2: [f64; (MAX_RESOLUTION + 1) as usize] = [
    4.357_449_416_078_383e+06, 6.097_884_417_941_332e+05, 8.680_178_039_899_720e+04,
    1.239_343_465_508_816e+04, 1.770_347_654_491_307e+03, 2.529_038_581_819_449e+02,
    3.612_906_216_441_245e+01, 5.161_293_359_717_191e+00, 7.373_275_975_944_177e-01,
    1.053_325_134_272_067e-01, 1.504_750_190_766_435e-02, 2.149_643_129_451_879e-03,
    3.070_918_756_316_060e-04, 4.387_026_794_728_296e-05, 6.267_181_135_324_313e-06,
    8.953_115_907_605_790e-07,
  ];
  if !(0..=MAX_RESOLUTION).contains(&res) {
    return Err(GridError::ResolutionDomain);
  }
  Ok(AREAS_KM2[res as usize])
}

/// Average hexagon area in square meters at the given resolution.
pub fn get_hexagon_area_avg_m2(res: i32) -> Result<f64, GridError> {
  #[rustfmt::skip]
  const AREAS_M2: [f64; (MAX_RESOLUTION + 1) as usize] = [
    4.357_449_416_078_390e+12, 6.097_884_417_941_339e+11, 8.680_178_039_899_731e+10,
    1.239_343_465_508_818e+10, 1.770_347_654_491_309e+09, 2.529_038_581_819_452e+08,
    3.612_906_216_441_250e+07, 5.161_293_359_717_198e+06, 7.373_275_975_944_188e+05,
    1.053_325_134_272_069e+05, 1.504_750_190_766_437e+04, 2.149_643_129_451_882e+03,
    3.070_918_756_316_063e+02, 4.387_026_794_728_301e+01, 6.267_181_135_324_322e+00,
    8.953_115_907_605_802e-01,
  ];
  if !(0..=MAX_RESOLUTION).contains(&res) {
    return Err(GridError::ResolutionDomain);
  }
  Ok(AREAS_M2[res as usize])
}

/// Average hexagon edge length in kilometers at the given resolution.
pub fn get_hexagon_edge_length_avg_km(res: i32) -> Result<f64, GridError> {
  #[rustfmt::skip]
  const LENS_KM: [f64; (MAX_RESOLUTION + 1) as usize] = [
    1281.256011, 483.0568391, 182.5129565, 68.97922179,
    26.07175968, 9.854090990, 3.724532667, 1.406475763,
    0.531414010, 0.200786148, 0.075863783, 0.028663897,
    0.010830188, 0.004092010, 0.001546100, 0.000584169,
  ];
  if !(0..=MAX_RESOLUTION).contains(&res) {
    return Err(GridError::ResolutionDomain);
  }
  Ok(LENS_KM[res as usize])
}

/// Average hexagon edge length in meters at the given resolution.
pub fn get_hexagon_edge_length_avg_m(res: i32) -> Result<f64, GridError> {
  #[rustfmt::skip]
  const LENS_M: [f64; (MAX_RESOLUTION + 1) as usize] = [
    1281256.011, 483056.8391, 182512.9565, 68979.22179,
    26071.75968, 9854.090990, 3724.532667, 1406.475763,
    531.4140101, 200.7861476, 75.86378287, 28.66389748,
    10.83018784, 4.092010473, 1.546099657, 0.584168630,
  ];
  if !(0..=MAX_RESOLUTION).contains(&res) {
    return Err(GridError::ResolutionDomain);
  }
  Ok(LENS_M[res as usize])
}

/// Shifts a longitude into the comparison frame used when a bounding box
/// crosses the antimeridian.
#[inline]
#[must_use]
pub(crate) fn normalize_lng(lng: f64, normalization: LongitudeNormalization) -> f64 {
  match normalization {
    LongitudeNormalization::None => lng,
    LongitudeNormalization::East => {
      if lng < 0.0 {
        lng + TWO_PI
      } else {
        lng
      }
    }
    LongitudeNormalization::West => {
      if lng > 0.0 {
        lng - TWO_PI
      } else {
        lng
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pos_angle_wraps() {
    assert!((pos_angle_rads(0.0)).abs() < f64::EPSILON);
    assert!((pos_angle_rads(TWO_PI)).abs() < f64::EPSILON);
    assert!((pos_angle_rads(-FRAC_PI_2) - 1.5 * PI).abs() < f64::EPSILON);
    assert!((pos_angle_rads(2.5 * PI) - 0.5 * PI).abs() < f64::EPSILON);
  }

  #[test]
  fn constrain_ranges() {
    assert_eq!(constrain_lat(0.0), 0.0);
    assert_eq!(constrain_lat(1.0), 1.0);
    assert_eq!(constrain_lat(FRAC_PI_2), FRAC_PI_2);
    assert!((constrain_lat(PI)).abs() < 1e-15);
    assert!((constrain_lat(PI + 1.0) + 1.0).abs() < 1e-15);

    assert_eq!(constrain_lng(0.0), 0.0);
    assert_eq!(constrain_lng(PI), PI);
    assert!((constrain_lng(TWO_PI)).abs() < f64::EPSILON);
    assert!((constrain_lng(3.0 * PI) - PI).abs() < f64::EPSILON);
  }

  #[test]
  fn azimuth_cardinal_directions() {
    let origin = LatLng::from_degrees(0.0, 0.0);
    let north = LatLng::from_degrees(10.0, 0.0);
    let east = LatLng::from_degrees(0.0, 10.0);
    assert!(geo_azimuth_rads(&origin, &north).abs() < 1e-12, "due north is azimuth 0");
    assert!(
      (geo_azimuth_rads(&origin, &east) - FRAC_PI_2).abs() < 1e-12,
      "due east is azimuth pi/2"
    );
  }

  #[test]
  fn az_distance_zero_is_identity() {
    let start = LatLng::from_degrees(15.0, 10.0);
    let out = geo_az_distance_rads(&start, 0.0, 0.0);
    assert!(geo_almost_equal(&start, &out));
  }

  #[test]
  fn az_distance_due_north() {
    let start = LatLng::from_degrees(45.0, 1.0);
    let out = geo_az_distance_rads(&start, 0.0, degs_to_rads(45.0));
    let expected = LatLng::from_degrees(90.0, 0.0);
    assert!(geo_almost_equal(&expected, &out), "due north lands on the pole: {out:?}");

    let out = geo_az_distance_rads(&start, degs_to_rads(180.0), degs_to_rads(35.0));
    let expected = LatLng::from_degrees(10.0, 1.0);
    assert!(geo_almost_equal(&expected, &out), "due south stays on the meridian: {out:?}");
  }

  #[test]
  fn az_distance_reaches_computed_distance() {
    let start = LatLng::from_degrees(37.0, -122.0);
    for az_deg in [30.0, 110.0, 225.0, 316.0] {
      let d = degs_to_rads(13.0);
      let out = geo_az_distance_rads(&start, degs_to_rads(az_deg), d);
      assert!(
        (great_circle_distance_rads(&start, &out) - d).abs() < 1e-12,
        "azimuth {az_deg}"
      );
    }
  }

  #[test]
  fn haversine_known_distance() {
    // Paris to London, roughly 344 km
    let paris = LatLng::from_degrees(48.8566, 2.3522);
    let london = LatLng::from_degrees(51.5074, -0.1278);
    let km = great_circle_distance_km(&paris, &london);
    assert!((km - 344.0).abs() < 2.0, "got {km}");
    assert!((great_circle_distance_m(&paris, &london) - km * 1000.0).abs() < 1e-6);
  }

  #[test]
  fn average_stats_monotonic() {
    for res in 0..MAX_RESOLUTION {
      assert!(get_hexagon_area_avg_km2(res).unwrap() > get_hexagon_area_avg_km2(res + 1).unwrap());
      assert!(
        get_hexagon_edge_length_avg_m(res).unwrap() > get_hexagon_edge_length_avg_m(res + 1).unwrap()
      );
    }
    assert_eq!(get_hexagon_area_avg_km2(16), Err(GridError::ResolutionDomain));
    assert_eq!(get_hexagon_edge_length_avg_km(-1), Err(GridError::ResolutionDomain));
  }
}
