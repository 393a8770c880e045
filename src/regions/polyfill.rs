//! Polygon rasterization: the set of cells at a target resolution whose
//! relationship to a polygon satisfies a containment predicate.
//!
//! The algorithm walks the global cell tree depth-first from the 122
//! base cells. Subtrees whose child-covering bounding box misses the
//! polygon are pruned; subtrees wholly inside it are emitted as compact
//! coarse cells; everything else descends to the target resolution where
//! the per-cell predicate decides.

use crate::constants::{
  CELL_SCALE_FACTOR, CHILD_SCALE_FACTOR, MAX_EDGE_LENGTH_RADS, MAX_RESOLUTION, NORTH_POLE_CELLS,
  NUM_BASE_CELLS, RES0_BBOXES, SOUTH_POLE_CELLS,
};
use crate::coords::Digit;
use crate::error::GridError;
use crate::hierarchy::cell_to_children_size;
use crate::index::{base_cell_to_cell, CellIndex, NULL_CELL};
use crate::indexing::{cell_to_boundary, cell_to_latlng};
use crate::inspection::is_pentagon;
use crate::iterators::ChildIter;
use crate::polygon::{
  bbox_hex_estimate, bboxes_from_polygon, cell_boundary_crosses_polygon, cell_boundary_inside_polygon,
  point_inside_cell_boundary, point_inside_polygon,
};
use crate::types::{BBox, CellBoundary, ContainmentMode, GeoPolygon, LatLng};
use std::f64::consts::{FRAC_PI_2, PI};

/// Approximate bounding box of a cell. With `cover_children` the box is
/// grown to cover all descendants at any finer resolution.
pub(crate) fn cell_to_bbox(cell: CellIndex, cover_children: bool) -> Result<BBox, GridError> {
  let res = cell.resolution();

  let mut bbox;
  if res == 0 {
    let base_cell = cell.base_cell();
    if !(0..NUM_BASE_CELLS).contains(&base_cell) {
      return Err(GridError::CellInvalid);
    }
    bbox = RES0_BBOXES[base_cell as usize];
  } else {
    let center = cell_to_latlng(cell)?;
    let lat_span = MAX_EDGE_LENGTH_RADS[res as usize];
    let lng_span = if center.lat.cos().abs() > f64::EPSILON {
      lat_span / center.lat.cos().abs()
    } else {
      PI
    };
    bbox = BBox {
      north: (center.lat + lat_span).min(FRAC_PI_2),
      south: (center.lat - lat_span).max(-FRAC_PI_2),
      east: center.lng + lng_span,
      west: center.lng - lng_span,
    };
  }

  bbox.scale(if cover_children { CHILD_SCALE_FACTOR } else { CELL_SCALE_FACTOR });

  // polar cells need the full longitude range
  if cell.0 == NORTH_POLE_CELLS[res as usize] {
    bbox.north = FRAC_PI_2;
  }
  if cell.0 == SOUTH_POLE_CELLS[res as usize] {
    bbox.south = -FRAC_PI_2;
  }
  if bbox.north == FRAC_PI_2 || bbox.south == -FRAC_PI_2 {
    bbox.east = PI;
    bbox.west = -PI;
  }
  Ok(bbox)
}

/// The four corners of a bounding box as a boundary outline, ccw.
fn bbox_to_cell_boundary(bbox: &BBox) -> CellBoundary {
  let mut boundary = CellBoundary::default();
  boundary.push(LatLng { lat: bbox.south, lng: bbox.west });
  boundary.push(LatLng { lat: bbox.south, lng: bbox.east });
  boundary.push(LatLng { lat: bbox.north, lng: bbox.east });
  boundary.push(LatLng { lat: bbox.north, lng: bbox.west });
  boundary
}

/// Advance the tree cursor: next sibling if one exists, else up to the
/// parent's next sibling, exhausting at the null index after the last
/// base cell. Pentagon parents skip their deleted k-digit.
fn next_cell(mut cell: CellIndex) -> CellIndex {
  loop {
    let res = cell.resolution();
    if res == 0 {
      let next_base = cell.base_cell() + 1;
      return if next_base < NUM_BASE_CELLS {
        base_cell_to_cell(next_base)
      } else {
        NULL_CELL
      };
    }

    let mut parent = cell;
    parent.set_resolution(res - 1);
    parent.set_digit(res, Digit::Invalid);

    let digit = cell.digit(res);
    let mut next_digit = digit as u8 + 1;
    if is_pentagon(parent) && next_digit == Digit::K as u8 {
      next_digit += 1;
    }
    if next_digit < Digit::Invalid as u8 {
      cell.set_digit(res, Digit::from_bits(next_digit));
      return cell;
    }
    cell = parent;
  }
}

/// Whether a cell at the target resolution satisfies the containment
/// predicate.
fn cell_matches(
  cell: CellIndex,
  polygon: &GeoPolygon,
  bboxes: &[BBox],
  mode: ContainmentMode,
) -> Result<bool, GridError> {
  // cheapest test first: the cell center
  if matches!(
    mode,
    ContainmentMode::Center | ContainmentMode::Overlapping | ContainmentMode::OverlappingBbox
  ) {
    let center = cell_to_latlng(cell)?;
    if point_inside_polygon(polygon, bboxes, &center) {
      return Ok(true);
    }
  }
  if mode == ContainmentMode::Center {
    return Ok(false);
  }

  let boundary = cell_to_boundary(cell)?;
  let cell_bbox = cell_to_bbox(cell, false)?;

  if matches!(mode, ContainmentMode::Full | ContainmentMode::OverlappingBbox)
    && cell_boundary_inside_polygon(polygon, bboxes, &boundary, &cell_bbox)
  {
    return Ok(true);
  }
  if mode == ContainmentMode::Full {
    return Ok(false);
  }

  if cell_boundary_crosses_polygon(polygon, bboxes, &boundary, &cell_bbox) {
    return Ok(true);
  }
  // a polygon entirely inside the cell touches neither test above
  if !polygon.geoloop.is_empty()
    && point_inside_cell_boundary(&boundary, &cell_bbox, &polygon.geoloop.verts[0])
  {
    return Ok(true);
  }

  if mode == ContainmentMode::OverlappingBbox && cell_bbox.overlaps(&bboxes[0]) {
    let bbox_boundary = bbox_to_cell_boundary(&cell_bbox);
    if point_inside_polygon(polygon, bboxes, &bbox_boundary.verts[0])
      || cell_boundary_crosses_polygon(polygon, bboxes, &bbox_boundary, &cell_bbox)
      || cell_bbox.contains_point(&polygon.geoloop.verts[0])
    {
      return Ok(true);
    }
  }
  Ok(false)
}

/// Walk the cell tree and hand every matching compact cell to `emit`.
fn for_each_compact_cell(
  polygon: &GeoPolygon,
  res: i32,
  mode: ContainmentMode,
  emit: &mut dyn FnMut(CellIndex) -> Result<(), GridError>,
) -> Result<(), GridError> {
  if !(0..=MAX_RESOLUTION).contains(&res) {
    return Err(GridError::ResolutionDomain);
  }
  if polygon.geoloop.is_empty() {
    return Ok(());
  }

  let bboxes = bboxes_from_polygon(polygon);

  let mut cell = base_cell_to_cell(0);
  while cell != NULL_CELL {
    let cell_res = cell.resolution();

    if cell_res == res {
      if cell_matches(cell, polygon, &bboxes, mode)? {
        emit(cell)?;
      }
      cell = next_cell(cell);
      continue;
    }

    // coarser than target: prune, emit whole subtrees, or descend
    let children_bbox = cell_to_bbox(cell, true)?;
    if children_bbox.overlaps(&bboxes[0]) {
      let bbox_boundary = bbox_to_cell_boundary(&children_bbox);
      if mode != ContainmentMode::OverlappingBbox
        && cell_boundary_inside_polygon(polygon, &bboxes, &bbox_boundary, &children_bbox)
      {
        // every descendant is inside; emit compactly
        emit(cell)?;
        cell = next_cell(cell);
      } else {
        // descend into the first child
        cell = cell.direct_child(Digit::Center);
      }
    } else {
      cell = next_cell(cell);
    }
  }
  Ok(())
}

/// Upper bound on the number of cells produced by [`polygon_to_cells`]
/// for this polygon, resolution and mode; used to pre-size storage.
pub fn max_polygon_to_cells_size(
  polygon: &GeoPolygon,
  res: i32,
  mode: ContainmentMode,
) -> Result<i64, GridError> {
  let mut count: i64 = 0;
  for_each_compact_cell(polygon, res, mode, &mut |cell| {
    count = count.saturating_add(cell_to_children_size(cell, res)?);
    Ok(())
  })?;
  Ok(count)
}

/// The compact (mixed-resolution) cell cover of the polygon region.
pub fn polygon_to_cells_compact(
  polygon: &GeoPolygon,
  res: i32,
  mode: ContainmentMode,
) -> Result<Vec<CellIndex>, GridError> {
  let mut out = Vec::new();
  for_each_compact_cell(polygon, res, mode, &mut |cell| {
    out.push(cell);
    Ok(())
  })?;
  Ok(out)
}

/// The cells at `res` matching the polygon under the given containment
/// mode. An empty outer loop yields an empty result. When `max_cells` is
/// given, producing more cells fails with `MemoryBounds`.
pub fn polygon_to_cells(
  polygon: &GeoPolygon,
  res: i32,
  mode: ContainmentMode,
  max_cells: Option<i64>,
) -> Result<Vec<CellIndex>, GridError> {
  if !(0..=MAX_RESOLUTION).contains(&res) {
    return Err(GridError::ResolutionDomain);
  }
  // pre-size from the bounding geometry before any cells are produced
  let mut out: Vec<CellIndex> = if polygon.geoloop.is_empty() {
    Vec::new()
  } else {
    let estimate = bbox_hex_estimate(&BBox::from_geoloop(&polygon.geoloop), res)?;
    let cap = max_cells.unwrap_or(i64::MAX).min(estimate).max(1);
    Vec::with_capacity(cap.min(1 << 20) as usize)
  };
  for_each_compact_cell(polygon, res, mode, &mut |cell| {
    for child in ChildIter::new(cell, res) {
      if let Some(cap) = max_cells {
        if out.len() as i64 >= cap {
          return Err(GridError::MemoryBounds);
        }
      }
      out.push(child);
    }
    Ok(())
  })?;
  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::indexing::latlng_to_cell;
  use crate::types::GeoLoop;
  use std::collections::HashSet;

  // the San Francisco test polygon, radians
  fn sf_polygon() -> GeoPolygon {
    let raw = [
      (0.659966917655, -2.1364398519396),
      (0.6595011102219, -2.1359434279405),
      (0.6583348114025, -2.1354884206045),
      (0.6581220034068, -2.1382437718946),
      (0.6594479998527, -2.1384597563896),
      (0.6599990002976, -2.1376771158464),
    ];
    GeoPolygon {
      geoloop: GeoLoop {
        verts: raw.iter().map(|&(lat, lng)| LatLng { lat, lng }).collect(),
      },
      holes: Vec::new(),
    }
  }

  #[test]
  fn sf_center_mode_count() {
    let cells = polygon_to_cells(&sf_polygon(), 9, ContainmentMode::Center, None).unwrap();
    assert_eq!(cells.len(), 1253, "reference cell count for the SF polygon at res 9");
    let unique: HashSet<_> = cells.iter().collect();
    assert_eq!(unique.len(), cells.len());
  }

  #[test]
  fn empty_polygon_yields_empty() {
    let empty = GeoPolygon::default();
    assert_eq!(polygon_to_cells(&empty, 5, ContainmentMode::Center, None), Ok(Vec::new()));
    assert_eq!(max_polygon_to_cells_size(&empty, 5, ContainmentMode::Center), Ok(0));
  }

  #[test]
  fn estimates_bound_results() {
    let polygon = sf_polygon();
    for mode in [ContainmentMode::Center, ContainmentMode::Full, ContainmentMode::Overlapping] {
      let bound = max_polygon_to_cells_size(&polygon, 9, mode).unwrap();
      let count = polygon_to_cells(&polygon, 9, mode, None).unwrap().len() as i64;
      assert!(count <= bound, "{mode:?}: {count} > {bound}");
    }
  }

  #[test]
  fn containment_modes_are_monotonic() {
    let polygon = sf_polygon();
    let full: HashSet<_> = polygon_to_cells(&polygon, 9, ContainmentMode::Full, None)
      .unwrap()
      .into_iter()
      .collect();
    let center: HashSet<_> = polygon_to_cells(&polygon, 9, ContainmentMode::Center, None)
      .unwrap()
      .into_iter()
      .collect();
    let overlap: HashSet<_> = polygon_to_cells(&polygon, 9, ContainmentMode::Overlapping, None)
      .unwrap()
      .into_iter()
      .collect();
    assert!(full.is_subset(&center), "full ⊆ center");
    assert!(center.is_subset(&overlap), "center ⊆ overlap");
  }

  #[test]
  fn hole_subtracts_cells() {
    let mut polygon = sf_polygon();
    let solid = polygon_to_cells(&polygon, 9, ContainmentMode::Center, None).unwrap();

    // a hole in the middle of the polygon
    let hole_raw = [
      (0.6595072188743, -2.1371053983433),
      (0.6591482046471, -2.1373141048153),
      (0.6592295020837, -2.1365222838402),
    ];
    polygon.holes.push(GeoLoop {
      verts: hole_raw.iter().map(|&(lat, lng)| LatLng { lat, lng }).collect(),
    });
    let holed = polygon_to_cells(&polygon, 9, ContainmentMode::Center, None).unwrap();
    assert!(holed.len() < solid.len());
    let solid_set: HashSet<_> = solid.into_iter().collect();
    assert!(holed.iter().all(|c| solid_set.contains(c)));
  }

  #[test]
  fn max_cells_cap_is_enforced() {
    let polygon = sf_polygon();
    assert_eq!(
      polygon_to_cells(&polygon, 9, ContainmentMode::Center, Some(10)),
      Err(GridError::MemoryBounds)
    );
  }

  #[test]
  fn resolution_domain_checked() {
    let polygon = sf_polygon();
    assert_eq!(
      polygon_to_cells(&polygon, 16, ContainmentMode::Center, None),
      Err(GridError::ResolutionDomain)
    );
    assert_eq!(
      polygon_to_cells(&polygon, -1, ContainmentMode::Center, None),
      Err(GridError::ResolutionDomain)
    );
  }

  #[test]
  fn rasterized_cells_recover_the_seed_cell() {
    // polygonal outline of one cell re-rasterizes to include that cell
    let cell = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 7).unwrap();
    let boundary = cell_to_boundary(cell).unwrap();
    let polygon = GeoPolygon {
      geoloop: GeoLoop {
        verts: boundary.verts().to_vec(),
      },
      holes: Vec::new(),
    };
    let cells = polygon_to_cells(&polygon, 7, ContainmentMode::Center, None).unwrap();
    assert!(cells.contains(&cell));
  }

  #[test]
  fn compact_cover_uncompacts_to_full_cover() {
    let polygon = sf_polygon();
    let compact = polygon_to_cells_compact(&polygon, 9, ContainmentMode::Center).unwrap();
    let full: HashSet<_> = polygon_to_cells(&polygon, 9, ContainmentMode::Center, None)
      .unwrap()
      .into_iter()
      .collect();
    let expanded: HashSet<_> = crate::compaction::uncompact_cells(&compact, 9)
      .unwrap()
      .into_iter()
      .collect();
    assert_eq!(expanded, full);
  }

  #[test]
  fn tree_cursor_exhausts_after_last_base_cell() {
    let last = base_cell_to_cell(NUM_BASE_CELLS - 1);
    assert_eq!(next_cell(last), NULL_CELL);
  }
}
