use hexsphere::*;
use std::collections::HashSet;

#[test]
fn parent_child_round_trip() {
  let geo = LatLng::from_degrees(37.779265, -122.419277);
  let cell = latlng_to_cell(&geo, 9).unwrap();

  for parent_res in (0..=9).rev() {
    let parent = cell_to_parent(cell, parent_res).unwrap();
    assert_eq!(parent.resolution(), parent_res);
    let children = cell_to_children(parent, 9).unwrap();
    assert!(children.contains(&cell), "parent res {parent_res}");
    assert_eq!(children.len() as i64, cell_to_children_size(parent, 9).unwrap());
  }
}

#[test]
fn children_partition_under_parents() {
  // children of distinct siblings never overlap
  let parent = string_to_cell("8528347ffffffff");
  let siblings = cell_to_children(cell_to_parent(parent, 4).unwrap(), 5).unwrap();
  let mut seen: HashSet<CellIndex> = HashSet::new();
  for sibling in siblings {
    for child in cell_to_children(sibling, 7).unwrap() {
      assert!(seen.insert(child), "{child} under two parents");
    }
  }
}

#[test]
fn center_child_chain() {
  let cell = string_to_cell("85283473fffffff");
  let center15 = cell_to_center_child(cell, 15).unwrap();
  assert_eq!(cell_to_parent(center15, 5).unwrap(), cell);
  // stepping one level at a time lands at the same descendant
  let mut step = cell;
  for res in 6..=15 {
    step = cell_to_center_child(step, res).unwrap();
  }
  assert_eq!(step, center15);
}

#[test]
fn child_positions_are_dense() {
  for parent in [string_to_cell("85283473fffffff"), get_pentagons(5).unwrap()[0]] {
    let child_res = 7;
    let count = cell_to_children_size(parent, child_res).unwrap();
    let children = cell_to_children(parent, child_res).unwrap();
    assert_eq!(children.len() as i64, count);

    for (pos, child) in children.iter().enumerate() {
      assert_eq!(cell_to_child_pos(*child, 5), Ok(pos as i64), "{child}");
      assert_eq!(child_pos_to_cell(pos as i64, parent, child_res), Ok(*child));
    }
    // the position space is exactly [0, count)
    assert!(child_pos_to_cell(count, parent, child_res).is_err());
  }
}

#[test]
fn pentagon_children_exclude_deleted_subtree() {
  let pent = get_pentagons(2).unwrap()[0];
  let children = cell_to_children(pent, 3).unwrap();
  assert_eq!(children.len(), 6);
  assert_eq!(children.iter().filter(|c| is_pentagon(**c)).count(), 1);
}

#[test]
fn compact_uncompact_inverse() {
  let parent = string_to_cell("8528347ffffffff");
  let cells = cell_to_children(parent, 7).unwrap();

  let compacted = compact_cells(&cells).unwrap();
  assert_eq!(compacted, vec![parent]);

  for target in [7, 8, 9] {
    let direct: HashSet<CellIndex> = uncompact_cells(&cells, target).unwrap().into_iter().collect();
    let via: HashSet<CellIndex> = uncompact_cells(&compacted, target).unwrap().into_iter().collect();
    assert_eq!(direct, via, "res {target}");
    assert_eq!(direct.len() as i64, uncompact_cells_size(&cells, target).unwrap());
  }
}

#[test]
fn compact_disk_family() {
  // the center child of a parent plus its immediate ring are exactly the
  // parent's seven children
  let parent = string_to_cell("8428347ffffffff");
  let center_child = cell_to_center_child(parent, 5).unwrap();
  let family = grid_disk_cells(center_child, 1).unwrap();
  assert_eq!(family.len(), 7);
  assert_eq!(compact_cells(&family), Ok(vec![parent]));
}

#[test]
fn partial_families_do_not_compact() {
  let parent = string_to_cell("8528347ffffffff");
  let mut cells = cell_to_children(parent, 6).unwrap();
  cells.pop();
  let compacted = compact_cells(&cells).unwrap();
  assert_eq!(compacted.len(), 6);
  assert!(compacted.iter().all(|c| c.resolution() == 6));
}
