//! Index a point, inspect the cell and walk back to geography.

use hexsphere::*;

fn main() {
  let geo = LatLng::from_degrees(37.779265, -122.419277);

  for res in [0, 5, 9, 15] {
    let cell = latlng_to_cell(&geo, res).expect("valid point and resolution");
    let center = cell_to_latlng(cell).expect("valid cell");
    let (lat, lng) = center.to_degrees();

    println!("res {res:>2}: cell {cell} (base cell {})", get_base_cell_number(cell));
    println!("         center ({lat:.6}, {lng:.6})");

    let boundary = cell_to_boundary(cell).expect("valid cell");
    println!("         boundary with {} vertices", boundary.num_verts);
  }

  let cell = latlng_to_cell(&geo, 9).unwrap();
  println!("\nstring form: {}", cell_to_string(cell));
  println!("parsed back: {}", string_to_cell(&cell_to_string(cell)));
  println!("area: {:.6} km^2", cell_area_km2(cell).unwrap());
}
