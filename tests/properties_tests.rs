//! Cross-cutting grid invariants exercised over many cells at once.

use hexsphere::*;
use std::collections::HashSet;

#[test]
fn round_trip_property_over_res0_centers() {
  // every resolution-0 cell center decodes and re-encodes to itself
  for cell in get_res0_cells() {
    let center = cell_to_latlng(cell).unwrap();
    assert_eq!(latlng_to_cell(&center, 0), Ok(cell), "{cell}");
  }
}

#[test]
fn round_trip_property_at_fine_resolutions() {
  for bc in [0, 14, 31, 63, 99, 117] {
    let base = get_res0_cells()[bc];
    for res in [4, 9] {
      let descendant = cell_to_center_child(base, res).unwrap();
      let center = cell_to_latlng(descendant).unwrap();
      assert_eq!(latlng_to_cell(&center, res), Ok(descendant), "bc {bc} res {res}");
    }
  }
}

#[test]
fn compaction_inverse_property() {
  // uncompact(compact(S), r) == uncompact(S, r) for mixed families
  let origin = latlng_to_cell(&LatLng::from_degrees(40.7, -74.0), 5).unwrap();
  let cells = grid_disk_cells(origin, 2).unwrap();
  let compacted = compact_cells(&cells).unwrap();
  assert!(compacted.len() <= cells.len());

  for r in [5, 6, 7] {
    let direct: HashSet<CellIndex> = uncompact_cells(&cells, r).unwrap().into_iter().collect();
    let via: HashSet<CellIndex> = uncompact_cells(&compacted, r).unwrap().into_iter().collect();
    assert_eq!(direct, via, "res {r}");
  }
}

#[test]
fn disk_ring_decomposition_property() {
  for (lat, lng) in [(37.77, -122.41), (51.5, -0.12), (-33.86, 151.2)] {
    let origin = latlng_to_cell(&LatLng::from_degrees(lat, lng), 6).unwrap();
    let k = 3;
    let disk: HashSet<CellIndex> = grid_disk_cells(origin, k).unwrap().into_iter().collect();
    let mut union = HashSet::new();
    for i in 0..=k {
      for cell in grid_ring(origin, i).unwrap() {
        assert!(union.insert(cell), "({lat},{lng}) duplicate in ring {i}");
      }
    }
    assert_eq!(union, disk, "({lat},{lng})");
  }
}

#[test]
fn path_validity_property() {
  let pairs = [
    ("85283473fffffff", "8528342bfffffff"),
    ("85283473fffffff", "85283477fffffff"),
    ("85283473fffffff", "85283473fffffff"),
  ];
  for (a_str, b_str) in pairs {
    let a = string_to_cell(a_str);
    let b = string_to_cell(b_str);
    let distance = grid_distance(a, b).unwrap();
    let path = grid_path_cells(a, b).unwrap();
    assert_eq!(path.len() as i64, distance + 1);
    assert_eq!(path[0], a);
    assert_eq!(*path.last().unwrap(), b);
    for pair in path.windows(2) {
      assert_eq!(are_neighbor_cells(pair[0], pair[1]), Ok(true));
    }
  }
}

#[test]
fn neighbor_distance_consistency() {
  // every disk-1 member is at grid distance <= 1 and mutual
  let origin = latlng_to_cell(&LatLng::from_degrees(48.85, 2.35), 8).unwrap();
  for cell in grid_disk_cells(origin, 1).unwrap() {
    let d = grid_distance(origin, cell).unwrap();
    assert!(d <= 1);
    assert_eq!(d == 1, are_neighbor_cells(origin, cell).unwrap());
  }
}

#[test]
fn cell_counts_sum_over_children() {
  // the children of all res-0 cells at res 1 cover res 1 exactly
  let total: i64 = get_res0_cells()
    .into_iter()
    .map(|c| cell_to_children_size(c, 1).unwrap())
    .sum();
  assert_eq!(total, get_num_cells(1).unwrap());
}

#[test]
fn area_sums_approximate_the_sphere() {
  // res-0 cell areas sum to the full sphere within numerical tolerance
  let total: f64 = get_res0_cells()
    .into_iter()
    .map(|c| cell_area_rads2(c).unwrap())
    .sum();
  let sphere = 4.0 * std::f64::consts::PI;
  assert!((total - sphere).abs() < sphere * 0.01, "total {total} vs {sphere}");
}
