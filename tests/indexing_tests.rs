use hexsphere::*;

#[test]
fn encode_reference_point() {
  // reference vector: a point in the Bering Strait at resolution 5
  let geo = LatLng::from_degrees(67.1509268640, -168.3908885810);
  let cell = latlng_to_cell(&geo, 5).unwrap();
  assert_eq!(cell, string_to_cell("850dab63fffffff"));
  assert_eq!(get_base_cell_number(cell), 6);

  let boundary = cell_to_boundary(cell).unwrap();
  assert_eq!(boundary.num_verts, 6);

  // the cell appears among its parent's children at the original
  // resolution
  let parent = cell_to_parent(cell, 4).unwrap();
  let children = cell_to_children(parent, 5).unwrap();
  assert!(children.contains(&cell));
}

#[test]
fn encode_decode_round_trip() {
  let points = [
    (37.779265, -122.419277),
    (-35.2809, 149.1300),
    (64.1466, -21.9426),
    (0.0, 0.0),
    (-89.9, 120.0),
  ];
  for (lat, lng) in points {
    let geo = LatLng::from_degrees(lat, lng);
    for res in [0, 3, 7, 11, 15] {
      let cell = latlng_to_cell(&geo, res).unwrap();
      assert!(is_valid_cell(cell), "({lat},{lng}) res {res}");
      assert_eq!(cell.resolution(), res);

      // decoding a cell center and re-encoding is the identity
      let center = cell_to_latlng(cell).unwrap();
      assert_eq!(latlng_to_cell(&center, res).unwrap(), cell, "({lat},{lng}) res {res}");
    }
  }
}

#[test]
fn string_round_trip() {
  let cell = string_to_cell("8928308280fffff");
  assert!(is_valid_cell(cell));
  assert_eq!(cell_to_string(cell), "8928308280fffff");
  assert_eq!(string_to_cell("0x8928308280fffff"), cell);

  // malformed strings coerce to the never-valid null index
  assert_eq!(string_to_cell("not-an-index"), NULL_CELL);
  assert!(!is_valid_cell(string_to_cell("zzz")));
}

#[test]
fn validation_is_structural() {
  assert!(!is_valid_cell(NULL_CELL));
  assert!(is_valid_cell(string_to_cell("85283473fffffff")));
  // a used digit slot holding the sentinel makes the index malformed
  assert!(!is_valid_cell(string_to_cell("85283472fffffff")));
  // wrong mode
  assert!(!is_valid_cell(string_to_cell("115283473fffffff")));
}

#[test]
fn boundary_vertex_counts() {
  // hexagons have at least 6 boundary verts, pentagons at least 5
  let hex = string_to_cell("85283473fffffff");
  assert!(cell_to_boundary(hex).unwrap().num_verts >= 6);

  for pent in get_pentagons(5).unwrap() {
    let n = cell_to_boundary(pent).unwrap().num_verts;
    assert!((5..=MAX_BOUNDARY_VERTS).contains(&n), "{pent}: {n}");
  }
}

#[test]
fn poles_index_consistently() {
  let north = LatLng::from_degrees(90.0, 0.0);
  let south = LatLng::from_degrees(-90.0, 0.0);
  for res in 0..=15 {
    let n = latlng_to_cell(&north, res).unwrap();
    let s = latlng_to_cell(&south, res).unwrap();
    assert!(is_valid_cell(n));
    assert!(is_valid_cell(s));
    assert_ne!(n, s);
    // polar cells nest: each finer pole cell descends from the coarser one
    assert_eq!(cell_to_parent(n, 0).unwrap(), latlng_to_cell(&north, 0).unwrap());
    assert_eq!(cell_to_parent(s, 0).unwrap(), latlng_to_cell(&south, 0).unwrap());
  }
}

#[test]
fn inspection_queries() {
  let cell = string_to_cell("85283473fffffff");
  assert_eq!(cell.resolution(), 5);
  assert_eq!(get_base_cell_number(cell), 20);
  assert!(!is_pentagon(cell));
  assert!(is_res_class_iii(cell));

  assert_eq!(get_num_cells(0).unwrap(), 122);
  assert_eq!(res0_cell_count(), 122);
  assert_eq!(get_res0_cells().len(), 122);
  assert_eq!(pentagon_count(), 12);

  let faces = get_icosahedron_faces(cell).unwrap();
  assert!(!faces.is_empty());
  assert!(faces.len() <= max_face_count(cell).unwrap());
}
