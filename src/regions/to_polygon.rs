//! Tracing a cell set back into polygon outlines.
//!
//! Directed boundary edges shared by two cells in the set cancel; the
//! survivors are linked end-to-end into closed loops. Loops winding
//! counter-clockwise are outer boundaries, clockwise loops are holes and
//! attach to the outer loop that contains them.
//!
//! Input hygiene is the caller's concern: duplicate cells or mixed
//! resolutions produce unspecified output.

use crate::error::GridError;
use crate::index::{is_valid_cell, CellIndex, NULL_CELL};
use crate::indexing::cell_to_boundary;
use crate::latlng::geo_almost_equal;
use crate::polygon::{is_clockwise_verts, point_inside_geoloop};
use crate::types::{BBox, GeoLoop, LatLng, LoopPolygon, MultiPolygon};

/// Open-addressed bag of directed edges keyed by a coarse hash of the
/// starting vertex; lookups compare with the geographic tolerance since
/// shared vertices computed from different cells differ in the last
/// bits.
struct EdgeGraph {
  buckets: Vec<Vec<(LatLng, LatLng)>>,
  size: usize,
  res: i32,
}

impl EdgeGraph {
  fn new(num_buckets: usize, res: i32) -> Self {
    EdgeGraph {
      buckets: vec![Vec::new(); num_buckets.max(1)],
      size: 0,
      res,
    }
  }

  fn bucket_of(&self, v: &LatLng) -> usize {
    let h = ((v.lat + v.lng) * f64::from(self.res + 1)).abs();
    (h % self.buckets.len() as f64) as usize
  }

  fn add(&mut self, from: LatLng, to: LatLng) {
    let b = self.bucket_of(&from);
    self.buckets[b].push((from, to));
    self.size += 1;
  }

  /// Remove the exact directed edge if present.
  fn remove(&mut self, from: &LatLng, to: &LatLng) -> bool {
    let b = self.bucket_of(from);
    if let Some(pos) = self.buckets[b]
      .iter()
      .position(|(f, t)| geo_almost_equal(f, from) && geo_almost_equal(t, to))
    {
      self.buckets[b].swap_remove(pos);
      self.size -= 1;
      return true;
    }
    false
  }

  /// Remove and return any edge.
  fn take_any(&mut self) -> Option<(LatLng, LatLng)> {
    for bucket in &mut self.buckets {
      if let Some(edge) = bucket.pop() {
        self.size -= 1;
        return Some(edge);
      }
    }
    None
  }

  /// Remove and return an edge starting at `from`.
  fn take_from(&mut self, from: &LatLng) -> Option<(LatLng, LatLng)> {
    let b = self.bucket_of(from);
    if let Some(pos) = self.buckets[b].iter().position(|(f, _)| geo_almost_equal(f, from)) {
      self.size -= 1;
      return Some(self.buckets[b].swap_remove(pos));
    }
    // hash collisions across the tolerance boundary can land the edge in
    // a neighboring bucket; fall back to a full scan
    for bucket in &mut self.buckets {
      if let Some(pos) = bucket.iter().position(|(f, _)| geo_almost_equal(f, from)) {
        self.size -= 1;
        return Some(bucket.swap_remove(pos));
      }
    }
    None
  }
}

/// Load every un-shared boundary edge of the cell set into the graph.
fn cells_to_edge_graph(cells: &[CellIndex]) -> Result<EdgeGraph, GridError> {
  let live: Vec<CellIndex> = cells.iter().copied().filter(|&c| c != NULL_CELL).collect();
  let res = live.first().map_or(0, |c| c.resolution());
  let mut graph = EdgeGraph::new(live.len().max(6), res);

  for &cell in &live {
    if !is_valid_cell(cell) {
      return Err(GridError::CellInvalid);
    }
    if cell.resolution() != res {
      return Err(GridError::ResolutionMismatch);
    }
    let boundary = cell_to_boundary(cell)?;
    for j in 0..boundary.num_verts {
      let from = boundary.verts[j];
      let to = boundary.verts[(j + 1) % boundary.num_verts];
      // an edge shared with an already-seen cell appears reversed;
      // cancel instead of adding
      if !graph.remove(&to, &from) {
        graph.add(from, to);
      }
    }
  }
  Ok(graph)
}

/// Link the surviving edges into closed vertex loops.
fn edge_graph_to_loops(graph: &mut EdgeGraph) -> Result<Vec<Vec<LatLng>>, GridError> {
  let mut loops = Vec::new();
  while let Some((start, mut cursor)) = graph.take_any() {
    let mut verts = vec![start];
    while !geo_almost_equal(&cursor, &start) {
      verts.push(cursor);
      let (_, next) = graph.take_from(&cursor).ok_or(GridError::Failed)?;
      cursor = next;
    }
    loops.push(verts);
  }
  Ok(loops)
}

/// Classify loops into outer boundaries and holes and attach each hole
/// to the outer loop containing it.
fn assemble_polygons(loops: Vec<Vec<LatLng>>) -> Result<MultiPolygon, GridError> {
  let mut polygons: Vec<(LoopPolygon, BBox)> = Vec::new();
  let mut holes: Vec<(Vec<LatLng>, BBox)> = Vec::new();

  for verts in loops {
    let bbox = BBox::from_geoloop(&GeoLoop { verts: verts.clone() });
    if is_clockwise_verts(&verts, bbox.is_transmeridian()) {
      holes.push((verts, bbox));
    } else {
      polygons.push((
        LoopPolygon {
          outer: verts,
          holes: Vec::new(),
        },
        bbox,
      ));
    }
  }

  for (hole_verts, _) in holes {
    let probe = hole_verts[0];
    let owner = polygons.iter_mut().find(|(poly, bbox)| {
      point_inside_geoloop(
        &GeoLoop {
          verts: poly.outer.clone(),
        },
        bbox,
        &probe,
      )
    });
    match owner {
      Some((poly, _)) => poly.holes.push(hole_verts),
      // a hole with no surrounding outer loop means the edge
      // cancellation produced a malformed subdivision
      None => return Err(GridError::Failed),
    }
  }

  Ok(polygons.into_iter().map(|(poly, _)| poly).collect())
}

/// Trace a set of same-resolution cells into polygon outlines, the
/// inverse of rasterization. Output polygons carry their outer loop
/// first and any hole loops after it.
pub fn cells_to_multi_polygon(cells: &[CellIndex]) -> Result<MultiPolygon, GridError> {
  if cells.iter().all(|&c| c == NULL_CELL) {
    return Ok(Vec::new());
  }
  let mut graph = cells_to_edge_graph(cells)?;
  let loops = edge_graph_to_loops(&mut graph)?;
  assemble_polygons(loops)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::{NUM_HEX_VERTS, NUM_PENT_VERTS};
  use crate::index::string_to_cell;
  use crate::indexing::latlng_to_cell;
  use crate::inspection::is_pentagon;
  use crate::traversal::{grid_disk_cells, grid_ring};
  use crate::types::LatLng;

  #[test]
  fn single_cell_outline() {
    let cell = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 5).unwrap();
    let polygons = cells_to_multi_polygon(&[cell]).unwrap();
    assert_eq!(polygons.len(), 1);
    let expected = if is_pentagon(cell) { NUM_PENT_VERTS } else { NUM_HEX_VERTS };
    assert_eq!(polygons[0].outer.len(), expected);
    assert!(polygons[0].holes.is_empty());
  }

  #[test]
  fn contiguous_pair_merges_into_one_loop() {
    let cell = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 5).unwrap();
    let pair: Vec<CellIndex> = grid_disk_cells(cell, 1).unwrap().into_iter().take(2).collect();
    // two neighbors share one edge; the union outline has 10 vertices
    let polygons = cells_to_multi_polygon(&pair).unwrap();
    assert_eq!(polygons.len(), 1);
    assert_eq!(polygons[0].outer.len(), 10);
    assert!(polygons[0].holes.is_empty());
  }

  #[test]
  fn disjoint_cells_produce_two_polygons() {
    let a = latlng_to_cell(&LatLng::from_degrees(0.0, 0.0), 5).unwrap();
    let b = latlng_to_cell(&LatLng::from_degrees(10.0, 10.0), 5).unwrap();
    let polygons = cells_to_multi_polygon(&[a, b]).unwrap();
    assert_eq!(polygons.len(), 2);
  }

  #[test]
  fn ring_produces_hole() {
    let center = latlng_to_cell(&LatLng::from_degrees(37.779, -122.419), 5).unwrap();
    let donut = grid_ring(center, 1).unwrap();
    assert_eq!(donut.len(), 6);

    let polygons = cells_to_multi_polygon(&donut).unwrap();
    assert_eq!(polygons.len(), 1, "a donut is one polygon");
    assert_eq!(polygons[0].holes.len(), 1, "with one hole");
    assert_eq!(polygons[0].holes[0].len(), NUM_HEX_VERTS, "the hole is the center cell outline");
    assert_eq!(polygons[0].outer.len(), 6 * 3, "outer boundary of a 6-cell ring");
  }

  #[test]
  fn empty_and_invalid_input() {
    assert_eq!(cells_to_multi_polygon(&[]), Ok(Vec::new()));
    assert_eq!(cells_to_multi_polygon(&[NULL_CELL]), Ok(Vec::new()));
    assert_eq!(cells_to_multi_polygon(&[CellIndex(0x1)]), Err(GridError::CellInvalid));

    let res5 = string_to_cell("85283473fffffff");
    let res6 = string_to_cell("862834707ffffff");
    assert_eq!(cells_to_multi_polygon(&[res5, res6]), Err(GridError::ResolutionMismatch));
  }
}
