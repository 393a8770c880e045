//! Compact a cell cover and expand it back.

use hexsphere::*;

fn main() {
  let origin = latlng_to_cell(&LatLng::from_degrees(37.779265, -122.419277), 5).unwrap();
  let disk = grid_disk_cells(origin, 3).unwrap();
  println!("disk of {} cells at res 5", disk.len());

  let compacted = compact_cells(&disk).unwrap();
  println!("compacted to {} cells:", compacted.len());
  for cell in &compacted {
    println!("  {cell} (res {})", cell.resolution());
  }

  let expanded = uncompact_cells(&compacted, 6).unwrap();
  println!(
    "uncompacted to res 6: {} cells (expected {})",
    expanded.len(),
    uncompact_cells_size(&compacted, 6).unwrap()
  );
}
