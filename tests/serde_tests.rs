#![cfg(feature = "serde")]

use hexsphere::*;

#[test]
fn cell_index_json_round_trip() {
  let cell = string_to_cell("85283473fffffff");
  let json = serde_json::to_string(&cell).unwrap();
  assert_eq!(json, "599686042433355775");
  let back: CellIndex = serde_json::from_str(&json).unwrap();
  assert_eq!(back, cell);
}

#[test]
fn latlng_json_round_trip() {
  let geo = LatLng::from_degrees(37.779265, -122.419277);
  let json = serde_json::to_string(&geo).unwrap();
  let back: LatLng = serde_json::from_str(&json).unwrap();
  assert!((back.lat - geo.lat).abs() < 1e-15);
  assert!((back.lng - geo.lng).abs() < 1e-15);
}

#[test]
fn error_codes_serialize_as_numbers() {
  assert_eq!(serde_json::to_string(&GridError::Pentagon).unwrap(), "9");
  assert_eq!(serde_json::from_str::<GridError>("11").unwrap(), GridError::NotNeighbors);
}

#[test]
fn containment_mode_serializes_as_flags() {
  assert_eq!(serde_json::to_string(&ContainmentMode::Full).unwrap(), "1");
  assert_eq!(
    serde_json::from_str::<ContainmentMode>("2").unwrap(),
    ContainmentMode::Overlapping
  );
}

#[test]
fn polygon_json_round_trip() {
  let polygon = GeoPolygon {
    geoloop: GeoLoop {
      verts: vec![
        LatLng::from_degrees(0.0, 0.0),
        LatLng::from_degrees(0.0, 1.0),
        LatLng::from_degrees(1.0, 1.0),
      ],
    },
    holes: Vec::new(),
  };
  let json = serde_json::to_string(&polygon).unwrap();
  let back: GeoPolygon = serde_json::from_str(&json).unwrap();
  assert_eq!(back, polygon);
}

#[test]
fn boundary_json_round_trip() {
  let boundary = cell_to_boundary(string_to_cell("85283473fffffff")).unwrap();
  let json = serde_json::to_string(&boundary).unwrap();
  let back: CellBoundary = serde_json::from_str(&json).unwrap();
  assert_eq!(back, boundary);
}
