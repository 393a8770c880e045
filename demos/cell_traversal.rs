//! Disks, rings, distances and paths around an origin cell.

use hexsphere::*;

fn main() {
  let origin = latlng_to_cell(&LatLng::from_degrees(37.779265, -122.419277), 7).unwrap();
  println!("origin: {origin}");

  for k in 0..=2 {
    let disk = grid_disk_cells(origin, k).unwrap();
    let ring = grid_ring(origin, k).unwrap();
    println!("k={k}: disk {} cells, ring {} cells", disk.len(), ring.len());
  }

  let destination = latlng_to_cell(&LatLng::from_degrees(37.831, -122.289), 7).unwrap();
  let distance = grid_distance(origin, destination).unwrap();
  println!("\ndistance to {destination}: {distance} hops");

  let path = grid_path_cells(origin, destination).unwrap();
  println!("path of {} cells:", path.len());
  for cell in &path {
    println!("  {cell}");
  }

  for neighbor in grid_ring(origin, 1).unwrap() {
    let edge = cells_to_directed_edge(origin, neighbor).unwrap();
    println!("edge {edge}: {:.3} m", exact_edge_length_m(edge).unwrap());
  }
}
