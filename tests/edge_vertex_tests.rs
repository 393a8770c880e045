use hexsphere::*;
use std::collections::HashSet;

#[test]
fn edges_round_trip_through_encoding() {
  let origin = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 9).unwrap();
  for edge in origin_to_directed_edges(origin).unwrap() {
    assert!(is_valid_directed_edge(edge));
    let (o, d) = directed_edge_to_cells(edge).unwrap();
    assert_eq!(o, origin);
    assert_eq!(are_neighbor_cells(o, d), Ok(true));
    // re-encoding the pair yields the same edge
    assert_eq!(cells_to_directed_edge(o, d), Ok(edge));
    // and the reverse edge is a different index with swapped endpoints
    let reverse = cells_to_directed_edge(d, o).unwrap();
    assert_ne!(reverse, edge);
    assert_eq!(directed_edge_to_cells(reverse), Ok((d, o)));
  }
}

#[test]
fn edge_failures() {
  let origin = string_to_cell("85283473fffffff");
  let far = string_to_cell("8528342bfffffff");
  assert_eq!(grid_distance(origin, far), Ok(2));
  assert_eq!(cells_to_directed_edge(origin, far), Err(GridError::NotNeighbors));
  assert!(!is_valid_directed_edge(origin));
  assert_eq!(directed_edge_to_boundary(origin), Err(GridError::DirectedEdgeInvalid));
}

#[test]
fn edge_boundaries_lie_on_both_cells() {
  let origin = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 8).unwrap();
  let origin_boundary = cell_to_boundary(origin).unwrap();
  for edge in origin_to_directed_edges(origin).unwrap() {
    let edge_boundary = directed_edge_to_boundary(edge).unwrap();
    assert!((2..=3).contains(&edge_boundary.num_verts));
    // each edge endpoint is a vertex of the origin's boundary
    for v in edge_boundary.verts() {
      assert!(
        origin_boundary
          .verts()
          .iter()
          .any(|b| (b.lat - v.lat).abs() < 1e-9 && (b.lng - v.lng).abs() < 1e-9),
        "edge vertex should appear on the origin boundary"
      );
    }
  }
}

#[test]
fn edge_lengths_are_positive_and_consistent() {
  let origin = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 9).unwrap();
  for edge in origin_to_directed_edges(origin).unwrap() {
    let rads = exact_edge_length_rads(edge).unwrap();
    let km = exact_edge_length_km(edge).unwrap();
    let m = exact_edge_length_m(edge).unwrap();
    assert!(rads > 0.0);
    assert!((m - km * 1000.0).abs() < 1e-6);
    // within a factor of the published average for the resolution
    let avg_km = get_hexagon_edge_length_avg_km(9).unwrap();
    assert!(km > avg_km * 0.3 && km < avg_km * 3.0, "{km} vs avg {avg_km}");
  }
}

#[test]
fn vertexes_are_shared_and_canonical() {
  let cell = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 9).unwrap();
  let vertexes = cell_to_vertexes(cell).unwrap();
  assert_eq!(vertexes.len(), 6);

  let own: HashSet<CellIndex> = vertexes.iter().copied().collect();
  for neighbor in grid_ring(cell, 1).unwrap() {
    let theirs: HashSet<CellIndex> = cell_to_vertexes(neighbor).unwrap().into_iter().collect();
    // adjacent cells share exactly two vertexes
    assert_eq!(own.intersection(&theirs).count(), 2, "{neighbor}");
  }
}

#[test]
fn vertex_points_agree_across_owners() {
  // the point for a shared vertex must agree no matter which cell asked
  let cell = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 9).unwrap();
  for vertex in cell_to_vertexes(cell).unwrap() {
    assert!(is_valid_vertex(vertex));
    let p1 = vertex_to_latlng(vertex).unwrap();
    // resolve again through a neighbor that shares the vertex
    for neighbor in grid_ring(cell, 1).unwrap() {
      let shared: Vec<CellIndex> = cell_to_vertexes(neighbor)
        .unwrap()
        .into_iter()
        .filter(|v| *v == vertex)
        .collect();
      for v in shared {
        let p2 = vertex_to_latlng(v).unwrap();
        assert!((p1.lat - p2.lat).abs() < 1e-9);
        assert!((p1.lng - p2.lng).abs() < 1e-9);
      }
    }
  }
}

#[test]
fn pentagon_vertex_and_edge_counts() {
  for pent in get_pentagons(4).unwrap() {
    assert_eq!(origin_to_directed_edges(pent).unwrap().len(), 5);
    assert_eq!(cell_to_vertexes(pent).unwrap().len(), 5);
  }
}
