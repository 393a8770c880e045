//! Rasterize a polygon into cells and trace the cover's outline back.

use hexsphere::*;

fn main() {
  // downtown San Francisco
  let polygon = GeoPolygon {
    geoloop: GeoLoop {
      verts: vec![
        LatLng::from_degrees(37.813, -122.408),
        LatLng::from_degrees(37.783, -122.385),
        LatLng::from_degrees(37.755, -122.406),
        LatLng::from_degrees(37.771, -122.447),
        LatLng::from_degrees(37.804, -122.445),
      ],
    },
    holes: Vec::new(),
  };

  for mode in [ContainmentMode::Full, ContainmentMode::Center, ContainmentMode::Overlapping] {
    let cells = polygon_to_cells(&polygon, 9, mode, None).unwrap();
    println!("{mode:?}: {} cells", cells.len());
  }

  let cells = polygon_to_cells(&polygon, 9, ContainmentMode::Center, None).unwrap();
  let estimate = max_polygon_to_cells_size(&polygon, 9, ContainmentMode::Center).unwrap();
  println!("\ncenter mode: {} cells (estimate {estimate})", cells.len());

  let outlines = cells_to_multi_polygon(&cells).unwrap();
  for (i, poly) in outlines.iter().enumerate() {
    println!(
      "outline {i}: {} outer vertices, {} holes",
      poly.outer.len(),
      poly.holes.len()
    );
  }
}
