//! The 122 base cells tiling the sphere at resolution 0, and the lookup
//! tables tying them to icosahedron faces.
//!
//! Twelve base cells are pentagons; each is centered on an icosahedron
//! vertex and has no neighbor in its k-axis direction.

use crate::constants::{NUM_BASE_CELLS, NUM_ICOSA_FACES};
use crate::coords::{CoordIJK, Digit, FaceIJK};

/// Base cell number marking "no such base cell" in the neighbor tables.
pub(crate) const INVALID_BASE_CELL: i32 = 127;
/// Largest IJK+ component addressing a base cell on a face.
pub(crate) const MAX_FACE_COORD: i32 = 2;
/// Rotation count marking "not found" in orientation lookups.
pub(crate) const INVALID_ROTATIONS: i32 = -1;

/// Per-base-cell placement data.
pub(crate) struct BaseCellData {
  /// Home face and normalized IJK+ coordinates on that face.
  pub home: FaceIJK,
  /// Whether this base cell is a pentagon.
  pub pentagon: bool,
  /// For pentagons: the two clockwise-offset adjacent faces, else -1.
  pub cw_offset_faces: [i32; 2],
}

/// A base cell and its orientation relative to the face it was looked up
/// on.
#[derive(Debug, Clone, Copy)]
struct BaseCellOrient {
  base: i32,
  rot60: i32,
}

/// For each pentagon base cell, the face used when traversing out of it
/// in each of the five real directions (J, JK, I, IK, IJ).
pub(crate) struct PentagonDirectionFaces {
  pub base_cell: i32,
  pub faces: [i32; 5],
}

#[rustfmt::skip]
pub(crate) static PENTAGON_DIRECTION_FACES: [PentagonDirectionFaces; 12] = [
  PentagonDirectionFaces { base_cell: 4,   faces: [4, 0, 2, 1, 3] },
  PentagonDirectionFaces { base_cell: 14,  faces: [6, 11, 2, 7, 1] },
  PentagonDirectionFaces { base_cell: 24,  faces: [5, 10, 1, 6, 0] },
  PentagonDirectionFaces { base_cell: 38,  faces: [7, 12, 3, 8, 2] },
  PentagonDirectionFaces { base_cell: 49,  faces: [9, 14, 0, 5, 4] },
  PentagonDirectionFaces { base_cell: 58,  faces: [8, 13, 4, 9, 3] },
  PentagonDirectionFaces { base_cell: 63,  faces: [11, 6, 15, 10, 16] },
  PentagonDirectionFaces { base_cell: 72,  faces: [12, 7, 16, 11, 17] },
  PentagonDirectionFaces { base_cell: 83,  faces: [10, 5, 19, 14, 15] },
  PentagonDirectionFaces { base_cell: 97,  faces: [13, 8, 17, 12, 18] },
  PentagonDirectionFaces { base_cell: 107, faces: [14, 9, 18, 13, 19] },
  PentagonDirectionFaces { base_cell: 117, faces: [15, 19, 17, 18, 16] },
];

/// Whether the base cell number names a pentagon.
#[inline]
#[must_use]
pub(crate) fn is_base_cell_pentagon(base_cell: i32) -> bool {
  if !(0..NUM_BASE_CELLS).contains(&base_cell) {
    return false;
  }
  BASE_CELL_DATA[base_cell as usize].pentagon
}

/// Whether the base cell is one of the two polar pentagons, whose
/// neighbors are all oriented towards it.
#[inline]
#[must_use]
pub(crate) fn is_base_cell_polar_pentagon(base_cell: i32) -> bool {
  base_cell == 4 || base_cell == 117
}

/// The base cell at a resolution-0 IJK+ coordinate on a face, or
/// [`INVALID_BASE_CELL`] when out of lookup range.
#[inline]
#[must_use]
pub(crate) fn face_ijk_to_base_cell(h: &FaceIJK) -> i32 {
  match orient_at(h) {
    Some(o) => o.base,
    None => INVALID_BASE_CELL,
  }
}

/// The 60-degree ccw rotation count from the face frame into the base
/// cell's own frame, or [`INVALID_ROTATIONS`] when out of lookup range.
#[inline]
#[must_use]
pub(crate) fn face_ijk_to_base_cell_rotations(h: &FaceIJK) -> i32 {
  match orient_at(h) {
    Some(o) => o.rot60,
    None => INVALID_ROTATIONS,
  }
}

fn orient_at(h: &FaceIJK) -> Option<&'static BaseCellOrient> {
  let (i, j, k) = (h.coord.i, h.coord.j, h.coord.k);
  if !(0..NUM_ICOSA_FACES).contains(&h.face)
    || !(0..=MAX_FACE_COORD).contains(&i)
    || !(0..=MAX_FACE_COORD).contains(&j)
    || !(0..=MAX_FACE_COORD).contains(&k)
  {
    return None;
  }
  Some(&FACE_IJK_BASE_CELLS[h.face as usize][i as usize][j as usize][k as usize])
}

/// The home face and coordinates of a base cell.
#[inline]
#[must_use]
pub(crate) fn base_cell_to_face_ijk(base_cell: i32) -> FaceIJK {
  BASE_CELL_DATA[base_cell as usize].home
}

/// The rotation count for a base cell as seen from the given face, or
/// [`INVALID_ROTATIONS`] if the base cell does not appear on that face.
#[must_use]
pub(crate) fn base_cell_to_rotations(base_cell: i32, face: i32) -> i32 {
  if !(0..NUM_ICOSA_FACES).contains(&face) || !(0..NUM_BASE_CELLS).contains(&base_cell) {
    return INVALID_ROTATIONS;
  }
  for i in 0..=MAX_FACE_COORD as usize {
    for j in 0..=MAX_FACE_COORD as usize {
      for k in 0..=MAX_FACE_COORD as usize {
        let orient = &FACE_IJK_BASE_CELLS[face as usize][i][j][k];
        if orient.base == base_cell {
          return orient.rot60;
        }
      }
    }
  }
  INVALID_ROTATIONS
}

/// Whether `test_face` is a clockwise-offset face of the given pentagon.
#[inline]
#[must_use]
pub(crate) fn base_cell_is_cw_offset(base_cell: i32, test_face: i32) -> bool {
  if !(0..NUM_BASE_CELLS).contains(&base_cell) {
    return false;
  }
  let data = &BASE_CELL_DATA[base_cell as usize];
  data.pentagon && (data.cw_offset_faces[0] == test_face || data.cw_offset_faces[1] == test_face)
}

/// The neighboring base cell in the given digit direction, or
/// [`INVALID_BASE_CELL`] across a pentagon's deleted k-axis.
#[inline]
#[must_use]
pub(crate) fn base_cell_neighbor(base_cell: i32, dir: Digit) -> i32 {
  if !(0..NUM_BASE_CELLS).contains(&base_cell) || dir == Digit::Invalid {
    return INVALID_BASE_CELL;
  }
  BASE_CELL_NEIGHBORS[base_cell as usize][dir as usize]
}

/// The digit direction from one base cell to a neighboring base cell, or
/// `Digit::Invalid` if they are not neighbors.
#[must_use]
pub(crate) fn base_cell_direction(origin: i32, neighbor: i32) -> Digit {
  if !(0..NUM_BASE_CELLS).contains(&origin) || !(0..NUM_BASE_CELLS).contains(&neighbor) {
    return Digit::Invalid;
  }
  for dir_val in 0..Digit::COUNT {
    let dir = Digit::from_bits(dir_val);
    if base_cell_neighbor(origin, dir) == neighbor {
      return dir;
    }
  }
  Digit::Invalid
}

/// The direction-face record for a pentagon base cell.
#[must_use]
pub(crate) fn pentagon_direction_faces(base_cell: i32) -> Option<&'static PentagonDirectionFaces> {
  PENTAGON_DIRECTION_FACES.iter().find(|p| p.base_cell == base_cell)
}

/// Neighboring base cell in each digit direction, [`INVALID_BASE_CELL`]
/// along deleted pentagon axes.
#[rustfmt::skip]
pub(crate) static BASE_CELL_NEIGHBORS: [[i32; 7]; NUM_BASE_CELLS as usize] = [
  [0, 1, 5, 2, 4, 3, 8],                          // base cell 0
  [1, 7, 6, 9, 0, 3, 2],                          // base cell 1
  [2, 6, 10, 11, 0, 1, 5],                        // base cell 2
  [3, 13, 1, 7, 4, 12, 0],                        // base cell 3
  [4, INVALID_BASE_CELL, 15, 8, 3, 0, 12],        // base cell 4 (pentagon)
  [5, 2, 18, 10, 8, 0, 16],                       // base cell 5
  [6, 14, 11, 17, 1, 9, 2],                       // base cell 6
  [7, 21, 9, 19, 3, 13, 1],                       // base cell 7
  [8, 5, 22, 16, 4, 0, 15],                       // base cell 8
  [9, 19, 14, 20, 1, 7, 6],                       // base cell 9
  [10, 11, 24, 23, 5, 2, 18],                     // base cell 10
  [11, 17, 23, 25, 2, 6, 10],                     // base cell 11
  [12, 28, 13, 26, 4, 15, 3],                     // base cell 12
  [13, 26, 21, 29, 3, 12, 7],                     // base cell 13
  [14, INVALID_BASE_CELL, 17, 27, 9, 20, 6],      // base cell 14 (pentagon)
  [15, 22, 28, 31, 4, 8, 12],                     // base cell 15
  [16, 18, 33, 30, 8, 5, 22],                     // base cell 16
  [17, 11, 14, 6, 35, 25, 27],                    // base cell 17
  [18, 24, 30, 32, 5, 10, 16],                    // base cell 18
  [19, 34, 20, 36, 7, 21, 9],                     // base cell 19
  [20, 14, 19, 9, 40, 27, 36],                    // base cell 20
  [21, 38, 19, 34, 13, 29, 7],                    // base cell 21
  [22, 16, 41, 33, 15, 8, 31],                    // base cell 22
  [23, 24, 11, 10, 39, 37, 25],                   // base cell 23
  [24, INVALID_BASE_CELL, 32, 37, 10, 23, 18],    // base cell 24 (pentagon)
  [25, 23, 17, 11, 45, 39, 35],                   // base cell 25
  [26, 42, 29, 43, 12, 28, 13],                   // base cell 26
  [27, 40, 35, 46, 14, 20, 17],                   // base cell 27
  [28, 31, 42, 44, 12, 15, 26],                   // base cell 28
  [29, 43, 38, 47, 13, 26, 21],                   // base cell 29
  [30, 32, 48, 50, 16, 18, 33],                   // base cell 30
  [31, 41, 44, 53, 15, 22, 28],                   // base cell 31
  [32, 30, 24, 18, 52, 50, 37],                   // base cell 32
  [33, 30, 49, 48, 22, 16, 41],                   // base cell 33
  [34, 19, 38, 21, 54, 36, 51],                   // base cell 34
  [35, 46, 45, 56, 17, 27, 25],                   // base cell 35
  [36, 20, 34, 19, 55, 40, 54],                   // base cell 36
  [37, 39, 52, 57, 24, 23, 32],                   // base cell 37
  [38, INVALID_BASE_CELL, 34, 51, 29, 47, 21],    // base cell 38 (pentagon)
  [39, 37, 25, 23, 59, 57, 45],                   // base cell 39
  [40, 27, 36, 20, 60, 46, 55],                   // base cell 40
  [41, 49, 53, 61, 22, 33, 31],                   // base cell 41
  [42, 58, 43, 62, 28, 44, 26],                   // base cell 42
  [43, 62, 47, 64, 26, 42, 29],                   // base cell 43
  [44, 53, 58, 65, 28, 31, 42],                   // base cell 44
  [45, 39, 35, 25, 63, 59, 56],                   // base cell 45
  [46, 60, 56, 68, 27, 40, 35],                   // base cell 46
  [47, 38, 43, 29, 69, 51, 64],                   // base cell 47
  [48, 49, 30, 33, 67, 66, 50],                   // base cell 48
  [49, INVALID_BASE_CELL, 61, 66, 33, 48, 41],    // base cell 49 (pentagon)
  [50, 48, 32, 30, 70, 67, 52],                   // base cell 50
  [51, 69, 54, 71, 38, 47, 34],                   // base cell 51
  [52, 57, 70, 74, 32, 37, 50],                   // base cell 52
  [53, 61, 65, 75, 31, 41, 44],                   // base cell 53
  [54, 71, 55, 73, 34, 51, 36],                   // base cell 54
  [55, 40, 54, 36, 72, 60, 73],                   // base cell 55
  [56, 68, 63, 77, 35, 46, 45],                   // base cell 56
  [57, 59, 74, 78, 37, 39, 52],                   // base cell 57
  [58, INVALID_BASE_CELL, 62, 76, 44, 65, 42],    // base cell 58 (pentagon)
  [59, 63, 78, 79, 39, 45, 57],                   // base cell 59
  [60, 72, 68, 80, 40, 55, 46],                   // base cell 60
  [61, 53, 49, 41, 81, 75, 66],                   // base cell 61
  [62, 43, 58, 42, 82, 64, 76],                   // base cell 62
  [63, INVALID_BASE_CELL, 56, 45, 79, 59, 77],    // base cell 63 (pentagon)
  [64, 47, 62, 43, 84, 69, 82],                   // base cell 64
  [65, 58, 53, 44, 86, 76, 75],                   // base cell 65
  [66, 67, 81, 85, 49, 48, 61],                   // base cell 66
  [67, 66, 50, 48, 87, 85, 70],                   // base cell 67
  [68, 56, 60, 46, 90, 77, 80],                   // base cell 68
  [69, 51, 64, 47, 89, 71, 84],                   // base cell 69
  [70, 67, 52, 50, 83, 87, 74],                   // base cell 70
  [71, 89, 73, 91, 51, 69, 54],                   // base cell 71
  [72, INVALID_BASE_CELL, 73, 55, 80, 60, 88],    // base cell 72 (pentagon)
  [73, 91, 72, 88, 54, 71, 55],                   // base cell 73
  [74, 78, 83, 92, 52, 57, 70],                   // base cell 74
  [75, 65, 61, 53, 94, 86, 81],                   // base cell 75
  [76, 86, 82, 96, 58, 65, 62],                   // base cell 76
  [77, 63, 68, 56, 93, 79, 90],                   // base cell 77
  [78, 74, 59, 57, 95, 92, 79],                   // base cell 78
  [79, 78, 63, 59, 93, 95, 77],                   // base cell 79
  [80, 68, 72, 60, 99, 90, 88],                   // base cell 80
  [81, 85, 94, 101, 61, 66, 75],                  // base cell 81
  [82, 96, 84, 98, 62, 76, 64],                   // base cell 82
  [83, INVALID_BASE_CELL, 74, 70, 100, 87, 92],   // base cell 83 (pentagon)
  [84, 69, 82, 64, 97, 89, 98],                   // base cell 84
  [85, 87, 101, 102, 66, 67, 81],                 // base cell 85
  [86, 76, 75, 65, 104, 96, 94],                  // base cell 86
  [87, 83, 102, 100, 67, 70, 85],                 // base cell 87
  [88, 72, 91, 73, 99, 80, 105],                  // base cell 88
  [89, 97, 91, 103, 69, 84, 71],                  // base cell 89
  [90, 77, 80, 68, 106, 93, 99],                  // base cell 90
  [91, 73, 89, 71, 105, 88, 103],                 // base cell 91
  [92, 83, 78, 74, 108, 100, 95],                 // base cell 92
  [93, 79, 90, 77, 109, 95, 106],                 // base cell 93
  [94, 86, 81, 75, 107, 104, 101],                // base cell 94
  [95, 92, 79, 78, 109, 108, 93],                 // base cell 95
  [96, 104, 98, 110, 76, 86, 82],                 // base cell 96
  [97, INVALID_BASE_CELL, 98, 84, 103, 89, 111],  // base cell 97 (pentagon)
  [98, 110, 97, 111, 82, 96, 84],                 // base cell 98
  [99, 80, 105, 88, 106, 90, 113],                // base cell 99
  [100, 102, 83, 87, 108, 114, 92],               // base cell 100
  [101, 102, 107, 112, 81, 85, 94],               // base cell 101
  [102, 101, 87, 85, 114, 112, 100],              // base cell 102
  [103, 91, 97, 89, 116, 105, 111],               // base cell 103
  [104, 107, 110, 115, 86, 94, 96],               // base cell 104
  [105, 88, 103, 91, 113, 99, 116],               // base cell 105
  [106, 93, 99, 90, 117, 109, 113],               // base cell 106
  [107, INVALID_BASE_CELL, 101, 94, 115, 104, 112],// base cell 107 (pentagon)
  [108, 100, 95, 92, 118, 114, 109],              // base cell 108
  [109, 108, 93, 95, 117, 118, 106],              // base cell 109
  [110, 98, 104, 96, 119, 111, 115],              // base cell 110
  [111, 97, 110, 98, 116, 103, 119],              // base cell 111
  [112, 107, 102, 101, 120, 115, 114],            // base cell 112
  [113, 99, 116, 105, 117, 106, 121],             // base cell 113
  [114, 112, 100, 102, 118, 120, 108],            // base cell 114
  [115, 110, 107, 104, 120, 119, 112],            // base cell 115
  [116, 103, 119, 111, 113, 105, 121],            // base cell 116
  [117, INVALID_BASE_CELL, 109, 118, 113, 121, 106],// base cell 117 (pentagon)
  [118, 120, 108, 114, 117, 121, 109],            // base cell 118
  [119, 111, 115, 110, 121, 116, 120],            // base cell 119
  [120, 115, 114, 112, 121, 119, 118],            // base cell 120
  [121, 116, 120, 119, 117, 113, 118],            // base cell 121
];

/// 60-degree ccw rotations entering the neighboring base cell in each
/// digit direction, -1 along deleted pentagon axes.
#[rustfmt::skip]
pub(crate) static BASE_CELL_NEIGHBOR_60CCW_ROTS: [[i32; 7]; NUM_BASE_CELLS as usize] = [
  [0, 5, 0, 0, 1, 5, 1],   // base cell 0
  [0, 0, 1, 0, 1, 0, 1],   // base cell 1
  [0, 0, 0, 0, 0, 5, 0],   // base cell 2
  [0, 5, 0, 0, 2, 5, 1],   // base cell 3
  [0, -1, 1, 0, 3, 4, 2],  // base cell 4 (pentagon)
  [0, 0, 1, 0, 1, 0, 1],   // base cell 5
  [0, 0, 0, 3, 5, 5, 0],   // base cell 6
  [0, 0, 0, 0, 0, 5, 0],   // base cell 7
  [0, 5, 0, 0, 0, 5, 1],   // base cell 8
  [0, 0, 1, 3, 0, 0, 1],   // base cell 9
  [0, 0, 1, 3, 0, 0, 1],   // base cell 10
  [0, 3, 3, 3, 0, 0, 0],   // base cell 11
  [0, 5, 0, 0, 3, 5, 1],   // base cell 12
  [0, 0, 1, 0, 1, 0, 1],   // base cell 13
  [0, -1, 3, 0, 5, 2, 0],  // base cell 14 (pentagon)
  [0, 5, 0, 0, 4, 5, 1],   // base cell 15
  [0, 0, 0, 0, 0, 5, 0],   // base cell 16
  [0, 3, 3, 3, 3, 0, 3],   // base cell 17
  [0, 0, 0, 3, 5, 5, 0],   // base cell 18
  [0, 3, 3, 3, 0, 0, 0],   // base cell 19
  [0, 3, 3, 3, 0, 3, 0],   // base cell 20
  [0, 0, 0, 3, 5, 5, 0],   // base cell 21
  [0, 0, 1, 0, 1, 0, 1],   // base cell 22
  [0, 3, 3, 3, 0, 3, 0],   // base cell 23
  [0, -1, 3, 0, 5, 2, 0],  // base cell 24 (pentagon)
  [0, 0, 0, 3, 0, 0, 3],   // base cell 25
  [0, 0, 0, 0, 0, 5, 0],   // base cell 26
  [0, 3, 0, 0, 0, 3, 3],   // base cell 27
  [0, 0, 1, 0, 1, 0, 1],   // base cell 28
  [0, 0, 1, 3, 0, 0, 1],   // base cell 29
  [0, 3, 3, 3, 0, 0, 0],   // base cell 30
  [0, 0, 0, 0, 0, 5, 0],   // base cell 31
  [0, 3, 3, 3, 3, 0, 3],   // base cell 32
  [0, 0, 1, 3, 0, 0, 1],   // base cell 33
  [0, 3, 3, 3, 3, 0, 3],   // base cell 34
  [0, 0, 3, 0, 3, 0, 3],   // base cell 35
  [0, 0, 0, 3, 0, 0, 3],   // base cell 36
  [0, 3, 0, 0, 0, 3, 3],   // base cell 37
  [0, -1, 3, 0, 5, 2, 0],  // base cell 38 (pentagon)
  [0, 3, 0, 0, 3, 3, 0],   // base cell 39
  [0, 3, 0, 0, 3, 3, 0],   // base cell 40
  [0, 0, 0, 3, 5, 5, 0],   // base cell 41
  [0, 0, 0, 3, 5, 5, 0],   // base cell 42
  [0, 3, 3, 3, 0, 0, 0],   // base cell 43
  [0, 0, 1, 3, 0, 0, 1],   // base cell 44
  [0, 0, 3, 0, 0, 3, 3],   // base cell 45
  [0, 0, 0, 3, 0, 3, 0],   // base cell 46
  [0, 3, 3, 3, 0, 3, 0],   // base cell 47
  [0, 3, 3, 3, 0, 3, 0],   // base cell 48
  [0, -1, 3, 0, 5, 2, 0],  // base cell 49 (pentagon)
  [0, 0, 0, 3, 0, 0, 3],   // base cell 50
  [0, 3, 0, 0, 0, 3, 3],   // base cell 51
  [0, 0, 3, 0, 3, 0, 3],   // base cell 52
  [0, 3, 3, 3, 0, 0, 0],   // base cell 53
  [0, 0, 3, 0, 3, 0, 3],   // base cell 54
  [0, 0, 3, 0, 0, 3, 3],   // base cell 55
  [0, 3, 3, 3, 0, 0, 3],   // base cell 56
  [0, 0, 0, 3, 0, 3, 0],   // base cell 57
  [0, -1, 3, 0, 5, 2, 0],  // base cell 58 (pentagon)
  [0, 3, 3, 3, 3, 3, 0],   // base cell 59
  [0, 3, 3, 3, 3, 3, 0],   // base cell 60
  [0, 3, 3, 3, 3, 0, 3],   // base cell 61
  [0, 3, 3, 3, 3, 0, 3],   // base cell 62
  [0, -1, 3, 0, 5, 2, 0],  // base cell 63 (pentagon)
  [0, 0, 0, 3, 0, 0, 3],   // base cell 64
  [0, 3, 3, 3, 0, 3, 0],   // base cell 65
  [0, 3, 0, 0, 0, 3, 3],   // base cell 66
  [0, 3, 0, 0, 3, 3, 0],   // base cell 67
  [0, 3, 3, 3, 0, 0, 0],   // base cell 68
  [0, 3, 0, 0, 3, 3, 0],   // base cell 69
  [0, 0, 3, 0, 0, 3, 3],   // base cell 70
  [0, 0, 0, 3, 0, 3, 0],   // base cell 71
  [0, -1, 3, 0, 5, 2, 0],  // base cell 72 (pentagon)
  [0, 3, 3, 3, 0, 0, 3],   // base cell 73
  [0, 3, 3, 3, 0, 0, 3],   // base cell 74
  [0, 0, 0, 3, 0, 0, 3],   // base cell 75
  [0, 3, 0, 0, 0, 3, 3],   // base cell 76
  [0, 0, 0, 3, 0, 5, 0],   // base cell 77
  [0, 3, 3, 3, 0, 0, 0],   // base cell 78
  [0, 0, 1, 3, 1, 0, 1],   // base cell 79
  [0, 0, 1, 3, 1, 0, 1],   // base cell 80
  [0, 0, 3, 0, 3, 0, 3],   // base cell 81
  [0, 0, 3, 0, 3, 0, 3],   // base cell 82
  [0, -1, 3, 0, 5, 2, 0],  // base cell 83 (pentagon)
  [0, 0, 3, 0, 0, 3, 3],   // base cell 84
  [0, 0, 0, 3, 0, 3, 0],   // base cell 85
  [0, 3, 0, 0, 3, 3, 0],   // base cell 86
  [0, 3, 3, 3, 3, 3, 0],   // base cell 87
  [0, 0, 0, 3, 0, 5, 0],   // base cell 88
  [0, 3, 3, 3, 3, 3, 0],   // base cell 89
  [0, 0, 0, 0, 0, 0, 1],   // base cell 90
  [0, 3, 3, 3, 0, 0, 0],   // base cell 91
  [0, 0, 0, 3, 0, 5, 0],   // base cell 92
  [0, 5, 0, 0, 5, 5, 0],   // base cell 93
  [0, 0, 3, 0, 0, 3, 3],   // base cell 94
  [0, 0, 0, 0, 0, 0, 1],   // base cell 95
  [0, 0, 0, 3, 0, 3, 0],   // base cell 96
  [0, -1, 3, 0, 5, 2, 0],  // base cell 97 (pentagon)
  [0, 3, 3, 3, 0, 0, 3],   // base cell 98
  [0, 5, 0, 0, 5, 5, 0],   // base cell 99
  [0, 0, 1, 3, 1, 0, 1],   // base cell 100
  [0, 3, 3, 3, 0, 0, 3],   // base cell 101
  [0, 3, 3, 3, 0, 0, 0],   // base cell 102
  [0, 0, 1, 3, 1, 0, 1],   // base cell 103
  [0, 3, 3, 3, 3, 3, 0],   // base cell 104
  [0, 0, 0, 0, 0, 0, 1],   // base cell 105
  [0, 0, 1, 0, 3, 5, 1],   // base cell 106
  [0, -1, 3, 0, 5, 2, 0],  // base cell 107 (pentagon)
  [0, 5, 0, 0, 5, 5, 0],   // base cell 108
  [0, 0, 1, 0, 4, 5, 1],   // base cell 109
  [0, 3, 3, 3, 0, 0, 0],   // base cell 110
  [0, 0, 0, 3, 0, 5, 0],   // base cell 111
  [0, 0, 0, 3, 0, 5, 0],   // base cell 112
  [0, 0, 1, 0, 2, 5, 1],   // base cell 113
  [0, 0, 0, 0, 0, 0, 1],   // base cell 114
  [0, 0, 1, 3, 1, 0, 1],   // base cell 115
  [0, 5, 0, 0, 5, 5, 0],   // base cell 116
  [0, -1, 1, 0, 3, 4, 2],  // base cell 117 (pentagon)
  [0, 0, 1, 0, 0, 5, 1],   // base cell 118
  [0, 0, 0, 0, 0, 0, 1],   // base cell 119
  [0, 5, 0, 0, 5, 5, 0],   // base cell 120
  [0, 0, 1, 0, 1, 5, 1],   // base cell 121
];

/// Placement data for every base cell: home face, home coordinates,
/// pentagon flag and clockwise-offset faces.
#[rustfmt::skip]
pub(crate) static BASE_CELL_DATA: [BaseCellData; NUM_BASE_CELLS as usize] = [
  BaseCellData { home: FaceIJK { face: 1, coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 0
  BaseCellData { home: FaceIJK { face: 2, coord: CoordIJK { i: 1, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 1
  BaseCellData { home: FaceIJK { face: 1, coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 2
  BaseCellData { home: FaceIJK { face: 2, coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 3
  BaseCellData { home: FaceIJK { face: 0, coord: CoordIJK { i: 2, j: 0, k: 0 } }, pentagon: true,  cw_offset_faces: [-1, -1] },  // base cell 4 (pentagon)
  BaseCellData { home: FaceIJK { face: 1, coord: CoordIJK { i: 1, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 5
  BaseCellData { home: FaceIJK { face: 1, coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 6
  BaseCellData { home: FaceIJK { face: 2, coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 7
  BaseCellData { home: FaceIJK { face: 0, coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 8
  BaseCellData { home: FaceIJK { face: 2, coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 9
  BaseCellData { home: FaceIJK { face: 1, coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 10
  BaseCellData { home: FaceIJK { face: 1, coord: CoordIJK { i: 0, j: 1, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 11
  BaseCellData { home: FaceIJK { face: 3, coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 12
  BaseCellData { home: FaceIJK { face: 3, coord: CoordIJK { i: 1, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 13
  BaseCellData { home: FaceIJK { face: 11,coord: CoordIJK { i: 2, j: 0, k: 0 } }, pentagon: true,  cw_offset_faces: [2, 6] },    // base cell 14 (pentagon)
  BaseCellData { home: FaceIJK { face: 4, coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 15
  BaseCellData { home: FaceIJK { face: 0, coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 16
  BaseCellData { home: FaceIJK { face: 6, coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 17
  BaseCellData { home: FaceIJK { face: 0, coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 18
  BaseCellData { home: FaceIJK { face: 2, coord: CoordIJK { i: 0, j: 1, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 19
  BaseCellData { home: FaceIJK { face: 7, coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 20
  BaseCellData { home: FaceIJK { face: 2, coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 21
  BaseCellData { home: FaceIJK { face: 0, coord: CoordIJK { i: 1, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 22
  BaseCellData { home: FaceIJK { face: 6, coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 23
  BaseCellData { home: FaceIJK { face: 10,coord: CoordIJK { i: 2, j: 0, k: 0 } }, pentagon: true,  cw_offset_faces: [1, 5] },    // base cell 24 (pentagon)
  BaseCellData { home: FaceIJK { face: 6, coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 25
  BaseCellData { home: FaceIJK { face: 3, coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 26
  BaseCellData { home: FaceIJK { face: 11,coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 27
  BaseCellData { home: FaceIJK { face: 4, coord: CoordIJK { i: 1, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 28
  BaseCellData { home: FaceIJK { face: 3, coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 29
  BaseCellData { home: FaceIJK { face: 0, coord: CoordIJK { i: 0, j: 1, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 30
  BaseCellData { home: FaceIJK { face: 4, coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 31
  BaseCellData { home: FaceIJK { face: 5, coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 32
  BaseCellData { home: FaceIJK { face: 0, coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 33
  BaseCellData { home: FaceIJK { face: 7, coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 34
  BaseCellData { home: FaceIJK { face: 11,coord: CoordIJK { i: 1, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 35
  BaseCellData { home: FaceIJK { face: 7, coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 36
  BaseCellData { home: FaceIJK { face: 10,coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 37
  BaseCellData { home: FaceIJK { face: 12,coord: CoordIJK { i: 2, j: 0, k: 0 } }, pentagon: true,  cw_offset_faces: [3, 7] },    // base cell 38 (pentagon)
  BaseCellData { home: FaceIJK { face: 6, coord: CoordIJK { i: 1, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 39
  BaseCellData { home: FaceIJK { face: 7, coord: CoordIJK { i: 1, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 40
  BaseCellData { home: FaceIJK { face: 4, coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 41
  BaseCellData { home: FaceIJK { face: 3, coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 42
  BaseCellData { home: FaceIJK { face: 3, coord: CoordIJK { i: 0, j: 1, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 43
  BaseCellData { home: FaceIJK { face: 4, coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 44
  BaseCellData { home: FaceIJK { face: 6, coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 45
  BaseCellData { home: FaceIJK { face: 11,coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 46
  BaseCellData { home: FaceIJK { face: 8, coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 47
  BaseCellData { home: FaceIJK { face: 5, coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 48
  BaseCellData { home: FaceIJK { face: 14,coord: CoordIJK { i: 2, j: 0, k: 0 } }, pentagon: true,  cw_offset_faces: [0, 9] },    // base cell 49 (pentagon)
  BaseCellData { home: FaceIJK { face: 5, coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 50
  BaseCellData { home: FaceIJK { face: 12,coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 51
  BaseCellData { home: FaceIJK { face: 10,coord: CoordIJK { i: 1, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 52
  BaseCellData { home: FaceIJK { face: 4, coord: CoordIJK { i: 0, j: 1, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 53
  BaseCellData { home: FaceIJK { face: 12,coord: CoordIJK { i: 1, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 54
  BaseCellData { home: FaceIJK { face: 7, coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 55
  BaseCellData { home: FaceIJK { face: 11,coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 56
  BaseCellData { home: FaceIJK { face: 10,coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 57
  BaseCellData { home: FaceIJK { face: 13,coord: CoordIJK { i: 2, j: 0, k: 0 } }, pentagon: true,  cw_offset_faces: [4, 8] },    // base cell 58 (pentagon)
  BaseCellData { home: FaceIJK { face: 10,coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 59
  BaseCellData { home: FaceIJK { face: 11,coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 60
  BaseCellData { home: FaceIJK { face: 9, coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 61
  BaseCellData { home: FaceIJK { face: 8, coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 62
  BaseCellData { home: FaceIJK { face: 6, coord: CoordIJK { i: 2, j: 0, k: 0 } }, pentagon: true,  cw_offset_faces: [11,15] },   // base cell 63 (pentagon)
  BaseCellData { home: FaceIJK { face: 8, coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 64
  BaseCellData { home: FaceIJK { face: 9, coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 65
  BaseCellData { home: FaceIJK { face: 14,coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 66
  BaseCellData { home: FaceIJK { face: 5, coord: CoordIJK { i: 1, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 67
  BaseCellData { home: FaceIJK { face: 16,coord: CoordIJK { i: 0, j: 1, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 68
  BaseCellData { home: FaceIJK { face: 8, coord: CoordIJK { i: 1, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 69
  BaseCellData { home: FaceIJK { face: 5, coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 70
  BaseCellData { home: FaceIJK { face: 12,coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 71
  BaseCellData { home: FaceIJK { face: 7, coord: CoordIJK { i: 2, j: 0, k: 0 } }, pentagon: true,  cw_offset_faces: [12,16] },   // base cell 72 (pentagon)
  BaseCellData { home: FaceIJK { face: 12,coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 73
  BaseCellData { home: FaceIJK { face: 10,coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 74
  BaseCellData { home: FaceIJK { face: 9, coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 75
  BaseCellData { home: FaceIJK { face: 13,coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 76
  BaseCellData { home: FaceIJK { face: 16,coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 77
  BaseCellData { home: FaceIJK { face: 15,coord: CoordIJK { i: 0, j: 1, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 78
  BaseCellData { home: FaceIJK { face: 15,coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 79
  BaseCellData { home: FaceIJK { face: 16,coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 80
  BaseCellData { home: FaceIJK { face: 14,coord: CoordIJK { i: 1, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 81
  BaseCellData { home: FaceIJK { face: 13,coord: CoordIJK { i: 1, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 82
  BaseCellData { home: FaceIJK { face: 5, coord: CoordIJK { i: 2, j: 0, k: 0 } }, pentagon: true,  cw_offset_faces: [10,19] },   // base cell 83 (pentagon)
  BaseCellData { home: FaceIJK { face: 8, coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 84
  BaseCellData { home: FaceIJK { face: 14,coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 85
  BaseCellData { home: FaceIJK { face: 9, coord: CoordIJK { i: 1, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 86
  BaseCellData { home: FaceIJK { face: 14,coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 87
  BaseCellData { home: FaceIJK { face: 17,coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 88
  BaseCellData { home: FaceIJK { face: 12,coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 89
  BaseCellData { home: FaceIJK { face: 16,coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 90
  BaseCellData { home: FaceIJK { face: 17,coord: CoordIJK { i: 0, j: 1, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 91
  BaseCellData { home: FaceIJK { face: 15,coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 92
  BaseCellData { home: FaceIJK { face: 16,coord: CoordIJK { i: 1, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 93
  BaseCellData { home: FaceIJK { face: 9, coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 94
  BaseCellData { home: FaceIJK { face: 15,coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 95
  BaseCellData { home: FaceIJK { face: 13,coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 96
  BaseCellData { home: FaceIJK { face: 8, coord: CoordIJK { i: 2, j: 0, k: 0 } }, pentagon: true,  cw_offset_faces: [13,17] },   // base cell 97 (pentagon)
  BaseCellData { home: FaceIJK { face: 13,coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 98
  BaseCellData { home: FaceIJK { face: 17,coord: CoordIJK { i: 1, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 99
  BaseCellData { home: FaceIJK { face: 19,coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 100
  BaseCellData { home: FaceIJK { face: 14,coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 101
  BaseCellData { home: FaceIJK { face: 19,coord: CoordIJK { i: 0, j: 1, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 102
  BaseCellData { home: FaceIJK { face: 17,coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 103
  BaseCellData { home: FaceIJK { face: 13,coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 104
  BaseCellData { home: FaceIJK { face: 17,coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 105
  BaseCellData { home: FaceIJK { face: 16,coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 106
  BaseCellData { home: FaceIJK { face: 9, coord: CoordIJK { i: 2, j: 0, k: 0 } }, pentagon: true,  cw_offset_faces: [14,18] },   // base cell 107 (pentagon)
  BaseCellData { home: FaceIJK { face: 15,coord: CoordIJK { i: 1, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 108
  BaseCellData { home: FaceIJK { face: 15,coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 109
  BaseCellData { home: FaceIJK { face: 18,coord: CoordIJK { i: 0, j: 1, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 110
  BaseCellData { home: FaceIJK { face: 18,coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 111
  BaseCellData { home: FaceIJK { face: 19,coord: CoordIJK { i: 0, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 112
  BaseCellData { home: FaceIJK { face: 17,coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 113
  BaseCellData { home: FaceIJK { face: 19,coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 114
  BaseCellData { home: FaceIJK { face: 18,coord: CoordIJK { i: 0, j: 1, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 115
  BaseCellData { home: FaceIJK { face: 18,coord: CoordIJK { i: 1, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 116
  BaseCellData { home: FaceIJK { face: 19,coord: CoordIJK { i: 2, j: 0, k: 0 } }, pentagon: true,  cw_offset_faces: [-1, -1] },  // base cell 117 (pentagon)
  BaseCellData { home: FaceIJK { face: 19,coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 118
  BaseCellData { home: FaceIJK { face: 18,coord: CoordIJK { i: 0, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 119
  BaseCellData { home: FaceIJK { face: 19,coord: CoordIJK { i: 1, j: 0, k: 1 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 120
  BaseCellData { home: FaceIJK { face: 18,coord: CoordIJK { i: 1, j: 0, k: 0 } }, pentagon: false, cw_offset_faces: [-1, -1] },   // base cell 121
];

/// Resolution-0 lookup: for each face and IJK+ coordinate in (0..=2)^3,
/// the base cell at that coordinate and the ccw rotation count into its
/// frame.
#[rustfmt::skip]
static FACE_IJK_BASE_CELLS: [[[[BaseCellOrient; 3]; 3]; 3]; NUM_ICOSA_FACES as usize] = [
  // face 0
  [[[BaseCellOrient { base: 16, rot60: 0 }, BaseCellOrient { base: 18, rot60: 0 }, BaseCellOrient { base: 24, rot60: 0 }],
    [BaseCellOrient { base: 33, rot60: 0 }, BaseCellOrient { base: 30, rot60: 0 }, BaseCellOrient { base: 32, rot60: 3 }],
    [BaseCellOrient { base: 49, rot60: 1 }, BaseCellOrient { base: 48, rot60: 3 }, BaseCellOrient { base: 50, rot60: 3 }]],
   [[BaseCellOrient { base: 8, rot60: 0 }, BaseCellOrient { base: 5, rot60: 5 }, BaseCellOrient { base: 10, rot60: 5 }],
    [BaseCellOrient { base: 22, rot60: 0 }, BaseCellOrient { base: 16, rot60: 0 }, BaseCellOrient { base: 18, rot60: 0 }],
    [BaseCellOrient { base: 41, rot60: 1 }, BaseCellOrient { base: 33, rot60: 0 }, BaseCellOrient { base: 30, rot60: 0 }]],
   [[BaseCellOrient { base: 4, rot60: 0 }, BaseCellOrient { base: 0, rot60: 5 }, BaseCellOrient { base: 2, rot60: 5 }],
    [BaseCellOrient { base: 15, rot60: 1 }, BaseCellOrient { base: 8, rot60: 0 }, BaseCellOrient { base: 5, rot60: 5 }],
    [BaseCellOrient { base: 31, rot60: 1 }, BaseCellOrient { base: 22, rot60: 0 }, BaseCellOrient { base: 16, rot60: 0 }]]],
  // face 1
  [[[BaseCellOrient { base: 2, rot60: 0 }, BaseCellOrient { base: 6, rot60: 0 }, BaseCellOrient { base: 14, rot60: 0 }],
    [BaseCellOrient { base: 10, rot60: 0 }, BaseCellOrient { base: 11, rot60: 0 }, BaseCellOrient { base: 17, rot60: 3 }],
    [BaseCellOrient { base: 24, rot60: 1 }, BaseCellOrient { base: 23, rot60: 3 }, BaseCellOrient { base: 25, rot60: 3 }]],
   [[BaseCellOrient { base: 0, rot60: 0 }, BaseCellOrient { base: 1, rot60: 5 }, BaseCellOrient { base: 9, rot60: 5 }],
    [BaseCellOrient { base: 5, rot60: 0 }, BaseCellOrient { base: 2, rot60: 0 }, BaseCellOrient { base: 6, rot60: 0 }],
    [BaseCellOrient { base: 18, rot60: 1 }, BaseCellOrient { base: 10, rot60: 0 }, BaseCellOrient { base: 11, rot60: 0 }]],
   [[BaseCellOrient { base: 4, rot60: 1 }, BaseCellOrient { base: 3, rot60: 5 }, BaseCellOrient { base: 7, rot60: 5 }],
    [BaseCellOrient { base: 8, rot60: 1 }, BaseCellOrient { base: 0, rot60: 0 }, BaseCellOrient { base: 1, rot60: 5 }],
    [BaseCellOrient { base: 16, rot60: 1 }, BaseCellOrient { base: 5, rot60: 0 }, BaseCellOrient { base: 2, rot60: 0 }]]],
  // face 2
  [[[BaseCellOrient { base: 7, rot60: 0 }, BaseCellOrient { base: 21, rot60: 0 }, BaseCellOrient { base: 38, rot60: 0 }],
    [BaseCellOrient { base: 9, rot60: 0 }, BaseCellOrient { base: 19, rot60: 0 }, BaseCellOrient { base: 34, rot60: 3 }],
    [BaseCellOrient { base: 14, rot60: 1 }, BaseCellOrient { base: 20, rot60: 3 }, BaseCellOrient { base: 36, rot60: 3 }]],
   [[BaseCellOrient { base: 3, rot60: 0 }, BaseCellOrient { base: 13, rot60: 5 }, BaseCellOrient { base: 29, rot60: 5 }],
    [BaseCellOrient { base: 1, rot60: 0 }, BaseCellOrient { base: 7, rot60: 0 }, BaseCellOrient { base: 21, rot60: 0 }],
    [BaseCellOrient { base: 6, rot60: 1 }, BaseCellOrient { base: 9, rot60: 0 }, BaseCellOrient { base: 19, rot60: 0 }]],
   [[BaseCellOrient { base: 4, rot60: 2 }, BaseCellOrient { base: 12, rot60: 5 }, BaseCellOrient { base: 26, rot60: 5 }],
    [BaseCellOrient { base: 0, rot60: 1 }, BaseCellOrient { base: 3, rot60: 0 }, BaseCellOrient { base: 13, rot60: 5 }],
    [BaseCellOrient { base: 2, rot60: 1 }, BaseCellOrient { base: 1, rot60: 0 }, BaseCellOrient { base: 7, rot60: 0 }]]],
  // face 3
  [[[BaseCellOrient { base: 26, rot60: 0 }, BaseCellOrient { base: 42, rot60: 0 }, BaseCellOrient { base: 58, rot60: 0 }],
    [BaseCellOrient { base: 29, rot60: 0 }, BaseCellOrient { base: 43, rot60: 0 }, BaseCellOrient { base: 62, rot60: 3 }],
    [BaseCellOrient { base: 38, rot60: 1 }, BaseCellOrient { base: 47, rot60: 3 }, BaseCellOrient { base: 64, rot60: 3 }]],
   [[BaseCellOrient { base: 12, rot60: 0 }, BaseCellOrient { base: 28, rot60: 5 }, BaseCellOrient { base: 44, rot60: 5 }],
    [BaseCellOrient { base: 13, rot60: 0 }, BaseCellOrient { base: 26, rot60: 0 }, BaseCellOrient { base: 42, rot60: 0 }],
    [BaseCellOrient { base: 21, rot60: 1 }, BaseCellOrient { base: 29, rot60: 0 }, BaseCellOrient { base: 43, rot60: 0 }]],
   [[BaseCellOrient { base: 4, rot60: 3 }, BaseCellOrient { base: 15, rot60: 5 }, BaseCellOrient { base: 31, rot60: 5 }],
    [BaseCellOrient { base: 3, rot60: 1 }, BaseCellOrient { base: 12, rot60: 0 }, BaseCellOrient { base: 28, rot60: 5 }],
    [BaseCellOrient { base: 7, rot60: 1 }, BaseCellOrient { base: 13, rot60: 0 }, BaseCellOrient { base: 26, rot60: 0 }]]],
  // face 4
  [[[BaseCellOrient { base: 31, rot60: 0 }, BaseCellOrient { base: 41, rot60: 0 }, BaseCellOrient { base: 49, rot60: 0 }],
    [BaseCellOrient { base: 44, rot60: 0 }, BaseCellOrient { base: 53, rot60: 0 }, BaseCellOrient { base: 61, rot60: 3 }],
    [BaseCellOrient { base: 58, rot60: 1 }, BaseCellOrient { base: 65, rot60: 3 }, BaseCellOrient { base: 75, rot60: 3 }]],
   [[BaseCellOrient { base: 15, rot60: 0 }, BaseCellOrient { base: 22, rot60: 5 }, BaseCellOrient { base: 33, rot60: 5 }],
    [BaseCellOrient { base: 28, rot60: 0 }, BaseCellOrient { base: 31, rot60: 0 }, BaseCellOrient { base: 41, rot60: 0 }],
    [BaseCellOrient { base: 42, rot60: 1 }, BaseCellOrient { base: 44, rot60: 0 }, BaseCellOrient { base: 53, rot60: 0 }]],
   [[BaseCellOrient { base: 4, rot60: 4 }, BaseCellOrient { base: 8, rot60: 5 }, BaseCellOrient { base: 16, rot60: 5 }],
    [BaseCellOrient { base: 12, rot60: 1 }, BaseCellOrient { base: 15, rot60: 0 }, BaseCellOrient { base: 22, rot60: 5 }],
    [BaseCellOrient { base: 26, rot60: 1 }, BaseCellOrient { base: 28, rot60: 0 }, BaseCellOrient { base: 31, rot60: 0 }]]],
  // face 5
  [[[BaseCellOrient { base: 50, rot60: 0 }, BaseCellOrient { base: 48, rot60: 0 }, BaseCellOrient { base: 49, rot60: 3 }],
    [BaseCellOrient { base: 32, rot60: 0 }, BaseCellOrient { base: 30, rot60: 3 }, BaseCellOrient { base: 33, rot60: 3 }],
    [BaseCellOrient { base: 24, rot60: 3 }, BaseCellOrient { base: 18, rot60: 3 }, BaseCellOrient { base: 16, rot60: 3 }]],
   [[BaseCellOrient { base: 70, rot60: 0 }, BaseCellOrient { base: 67, rot60: 0 }, BaseCellOrient { base: 66, rot60: 3 }],
    [BaseCellOrient { base: 52, rot60: 3 }, BaseCellOrient { base: 50, rot60: 0 }, BaseCellOrient { base: 48, rot60: 0 }],
    [BaseCellOrient { base: 37, rot60: 3 }, BaseCellOrient { base: 32, rot60: 0 }, BaseCellOrient { base: 30, rot60: 3 }]],
   [[BaseCellOrient { base: 83, rot60: 0 }, BaseCellOrient { base: 87, rot60: 3 }, BaseCellOrient { base: 85, rot60: 3 }],
    [BaseCellOrient { base: 74, rot60: 3 }, BaseCellOrient { base: 70, rot60: 0 }, BaseCellOrient { base: 67, rot60: 0 }],
    [BaseCellOrient { base: 57, rot60: 1 }, BaseCellOrient { base: 52, rot60: 3 }, BaseCellOrient { base: 50, rot60: 0 }]]],
  // face 6
  [[[BaseCellOrient { base: 25, rot60: 0 }, BaseCellOrient { base: 23, rot60: 0 }, BaseCellOrient { base: 24, rot60: 3 }],
    [BaseCellOrient { base: 17, rot60: 0 }, BaseCellOrient { base: 11, rot60: 3 }, BaseCellOrient { base: 10, rot60: 3 }],
    [BaseCellOrient { base: 14, rot60: 3 }, BaseCellOrient { base: 6, rot60: 3 }, BaseCellOrient { base: 2, rot60: 3 }]],
   [[BaseCellOrient { base: 45, rot60: 0 }, BaseCellOrient { base: 39, rot60: 0 }, BaseCellOrient { base: 37, rot60: 3 }],
    [BaseCellOrient { base: 35, rot60: 3 }, BaseCellOrient { base: 25, rot60: 0 }, BaseCellOrient { base: 23, rot60: 0 }],
    [BaseCellOrient { base: 27, rot60: 3 }, BaseCellOrient { base: 17, rot60: 0 }, BaseCellOrient { base: 11, rot60: 3 }]],
   [[BaseCellOrient { base: 63, rot60: 0 }, BaseCellOrient { base: 59, rot60: 3 }, BaseCellOrient { base: 57, rot60: 3 }],
    [BaseCellOrient { base: 56, rot60: 3 }, BaseCellOrient { base: 45, rot60: 0 }, BaseCellOrient { base: 39, rot60: 0 }],
    [BaseCellOrient { base: 46, rot60: 3 }, BaseCellOrient { base: 35, rot60: 3 }, BaseCellOrient { base: 25, rot60: 0 }]]],
  // face 7
  [[[BaseCellOrient { base: 36, rot60: 0 }, BaseCellOrient { base: 20, rot60: 0 }, BaseCellOrient { base: 14, rot60: 3 }],
    [BaseCellOrient { base: 34, rot60: 0 }, BaseCellOrient { base: 19, rot60: 3 }, BaseCellOrient { base: 9, rot60: 3 }],
    [BaseCellOrient { base: 38, rot60: 3 }, BaseCellOrient { base: 21, rot60: 3 }, BaseCellOrient { base: 7, rot60: 3 }]],
   [[BaseCellOrient { base: 55, rot60: 0 }, BaseCellOrient { base: 40, rot60: 0 }, BaseCellOrient { base: 27, rot60: 3 }],
    [BaseCellOrient { base: 54, rot60: 3 }, BaseCellOrient { base: 36, rot60: 0 }, BaseCellOrient { base: 20, rot60: 0 }],
    [BaseCellOrient { base: 51, rot60: 3 }, BaseCellOrient { base: 34, rot60: 0 }, BaseCellOrient { base: 19, rot60: 3 }]],
   [[BaseCellOrient { base: 72, rot60: 0 }, BaseCellOrient { base: 60, rot60: 3 }, BaseCellOrient { base: 46, rot60: 3 }],
    [BaseCellOrient { base: 73, rot60: 3 }, BaseCellOrient { base: 55, rot60: 0 }, BaseCellOrient { base: 40, rot60: 0 }],
    [BaseCellOrient { base: 71, rot60: 3 }, BaseCellOrient { base: 54, rot60: 3 }, BaseCellOrient { base: 36, rot60: 0 }]]],
  // face 8
  [[[BaseCellOrient { base: 64, rot60: 0 }, BaseCellOrient { base: 47, rot60: 0 }, BaseCellOrient { base: 38, rot60: 3 }],
    [BaseCellOrient { base: 62, rot60: 0 }, BaseCellOrient { base: 43, rot60: 3 }, BaseCellOrient { base: 29, rot60: 3 }],
    [BaseCellOrient { base: 58, rot60: 3 }, BaseCellOrient { base: 42, rot60: 3 }, BaseCellOrient { base: 26, rot60: 3 }]],
   [[BaseCellOrient { base: 84, rot60: 0 }, BaseCellOrient { base: 69, rot60: 0 }, BaseCellOrient { base: 51, rot60: 3 }],
    [BaseCellOrient { base: 82, rot60: 3 }, BaseCellOrient { base: 64, rot60: 0 }, BaseCellOrient { base: 47, rot60: 0 }],
    [BaseCellOrient { base: 76, rot60: 3 }, BaseCellOrient { base: 62, rot60: 0 }, BaseCellOrient { base: 43, rot60: 3 }]],
   [[BaseCellOrient { base: 97, rot60: 0 }, BaseCellOrient { base: 89, rot60: 3 }, BaseCellOrient { base: 71, rot60: 3 }],
    [BaseCellOrient { base: 98, rot60: 3 }, BaseCellOrient { base: 84, rot60: 0 }, BaseCellOrient { base: 69, rot60: 0 }],
    [BaseCellOrient { base: 96, rot60: 3 }, BaseCellOrient { base: 82, rot60: 3 }, BaseCellOrient { base: 64, rot60: 0 }]]],
  // face 9
  [[[BaseCellOrient { base: 75, rot60: 0 }, BaseCellOrient { base: 65, rot60: 0 }, BaseCellOrient { base: 58, rot60: 3 }],
    [BaseCellOrient { base: 61, rot60: 0 }, BaseCellOrient { base: 53, rot60: 3 }, BaseCellOrient { base: 44, rot60: 3 }],
    [BaseCellOrient { base: 49, rot60: 3 }, BaseCellOrient { base: 41, rot60: 3 }, BaseCellOrient { base: 31, rot60: 3 }]],
   [[BaseCellOrient { base: 94, rot60: 0 }, BaseCellOrient { base: 86, rot60: 0 }, BaseCellOrient { base: 76, rot60: 3 }],
    [BaseCellOrient { base: 81, rot60: 3 }, BaseCellOrient { base: 75, rot60: 0 }, BaseCellOrient { base: 65, rot60: 0 }],
    [BaseCellOrient { base: 66, rot60: 3 }, BaseCellOrient { base: 61, rot60: 0 }, BaseCellOrient { base: 53, rot60: 3 }]],
   [[BaseCellOrient { base: 107, rot60: 0 }, BaseCellOrient { base: 104, rot60: 3 }, BaseCellOrient { base: 96, rot60: 3 }],
    [BaseCellOrient { base: 101, rot60: 3 }, BaseCellOrient { base: 94, rot60: 0 }, BaseCellOrient { base: 86, rot60: 0 }],
    [BaseCellOrient { base: 85, rot60: 3 }, BaseCellOrient { base: 81, rot60: 3 }, BaseCellOrient { base: 75, rot60: 0 }]]],
  // face 10
  [[[BaseCellOrient { base: 57, rot60: 0 }, BaseCellOrient { base: 59, rot60: 0 }, BaseCellOrient { base: 63, rot60: 3 }],
    [BaseCellOrient { base: 74, rot60: 0 }, BaseCellOrient { base: 78, rot60: 3 }, BaseCellOrient { base: 79, rot60: 3 }],
    [BaseCellOrient { base: 83, rot60: 3 }, BaseCellOrient { base: 92, rot60: 3 }, BaseCellOrient { base: 95, rot60: 3 }]],
   [[BaseCellOrient { base: 37, rot60: 0 }, BaseCellOrient { base: 39, rot60: 3 }, BaseCellOrient { base: 45, rot60: 3 }],
    [BaseCellOrient { base: 52, rot60: 0 }, BaseCellOrient { base: 57, rot60: 0 }, BaseCellOrient { base: 59, rot60: 0 }],
    [BaseCellOrient { base: 70, rot60: 3 }, BaseCellOrient { base: 74, rot60: 0 }, BaseCellOrient { base: 78, rot60: 3 }]],
   [[BaseCellOrient { base: 24, rot60: 0 }, BaseCellOrient { base: 23, rot60: 3 }, BaseCellOrient { base: 25, rot60: 3 }],
    [BaseCellOrient { base: 32, rot60: 3 }, BaseCellOrient { base: 37, rot60: 0 }, BaseCellOrient { base: 39, rot60: 3 }],
    [BaseCellOrient { base: 50, rot60: 3 }, BaseCellOrient { base: 52, rot60: 0 }, BaseCellOrient { base: 57, rot60: 0 }]]],
  // face 11
  [[[BaseCellOrient { base: 46, rot60: 0 }, BaseCellOrient { base: 60, rot60: 0 }, BaseCellOrient { base: 72, rot60: 3 }],
    [BaseCellOrient { base: 56, rot60: 0 }, BaseCellOrient { base: 68, rot60: 3 }, BaseCellOrient { base: 80, rot60: 3 }],
    [BaseCellOrient { base: 63, rot60: 3 }, BaseCellOrient { base: 77, rot60: 3 }, BaseCellOrient { base: 90, rot60: 3 }]],
   [[BaseCellOrient { base: 27, rot60: 0 }, BaseCellOrient { base: 40, rot60: 3 }, BaseCellOrient { base: 55, rot60: 3 }],
    [BaseCellOrient { base: 35, rot60: 0 }, BaseCellOrient { base: 46, rot60: 0 }, BaseCellOrient { base: 60, rot60: 0 }],
    [BaseCellOrient { base: 45, rot60: 3 }, BaseCellOrient { base: 56, rot60: 0 }, BaseCellOrient { base: 68, rot60: 3 }]],
   [[BaseCellOrient { base: 14, rot60: 0 }, BaseCellOrient { base: 20, rot60: 3 }, BaseCellOrient { base: 36, rot60: 3 }],
    [BaseCellOrient { base: 17, rot60: 3 }, BaseCellOrient { base: 27, rot60: 0 }, BaseCellOrient { base: 40, rot60: 3 }],
    [BaseCellOrient { base: 25, rot60: 3 }, BaseCellOrient { base: 35, rot60: 0 }, BaseCellOrient { base: 46, rot60: 0 }]]],
  // face 12
  [[[BaseCellOrient { base: 71, rot60: 0 }, BaseCellOrient { base: 89, rot60: 0 }, BaseCellOrient { base: 97, rot60: 3 }],
    [BaseCellOrient { base: 73, rot60: 0 }, BaseCellOrient { base: 91, rot60: 3 }, BaseCellOrient { base: 103, rot60: 3 }],
    [BaseCellOrient { base: 72, rot60: 3 }, BaseCellOrient { base: 88, rot60: 3 }, BaseCellOrient { base: 105, rot60: 3 }]],
   [[BaseCellOrient { base: 51, rot60: 0 }, BaseCellOrient { base: 69, rot60: 3 }, BaseCellOrient { base: 84, rot60: 3 }],
    [BaseCellOrient { base: 54, rot60: 0 }, BaseCellOrient { base: 71, rot60: 0 }, BaseCellOrient { base: 89, rot60: 0 }],
    [BaseCellOrient { base: 55, rot60: 3 }, BaseCellOrient { base: 73, rot60: 0 }, BaseCellOrient { base: 91, rot60: 3 }]],
   [[BaseCellOrient { base: 38, rot60: 0 }, BaseCellOrient { base: 47, rot60: 3 }, BaseCellOrient { base: 64, rot60: 3 }],
    [BaseCellOrient { base: 34, rot60: 3 }, BaseCellOrient { base: 51, rot60: 0 }, BaseCellOrient { base: 69, rot60: 3 }],
    [BaseCellOrient { base: 36, rot60: 3 }, BaseCellOrient { base: 54, rot60: 0 }, BaseCellOrient { base: 71, rot60: 0 }]]],
  // face 13
  [[[BaseCellOrient { base: 96, rot60: 0 }, BaseCellOrient { base: 104, rot60: 0 }, BaseCellOrient { base: 107, rot60: 3 }],
    [BaseCellOrient { base: 98, rot60: 0 }, BaseCellOrient { base: 110, rot60: 3 }, BaseCellOrient { base: 115, rot60: 3 }],
    [BaseCellOrient { base: 97, rot60: 3 }, BaseCellOrient { base: 111, rot60: 3 }, BaseCellOrient { base: 119, rot60: 3 }]],
   [[BaseCellOrient { base: 76, rot60: 0 }, BaseCellOrient { base: 86, rot60: 3 }, BaseCellOrient { base: 94, rot60: 3 }],
    [BaseCellOrient { base: 82, rot60: 0 }, BaseCellOrient { base: 96, rot60: 0 }, BaseCellOrient { base: 104, rot60: 0 }],
    [BaseCellOrient { base: 84, rot60: 3 }, BaseCellOrient { base: 98, rot60: 0 }, BaseCellOrient { base: 110, rot60: 3 }]],
   [[BaseCellOrient { base: 58, rot60: 0 }, BaseCellOrient { base: 65, rot60: 3 }, BaseCellOrient { base: 75, rot60: 3 }],
    [BaseCellOrient { base: 62, rot60: 3 }, BaseCellOrient { base: 76, rot60: 0 }, BaseCellOrient { base: 86, rot60: 3 }],
    [BaseCellOrient { base: 64, rot60: 3 }, BaseCellOrient { base: 82, rot60: 0 }, BaseCellOrient { base: 96, rot60: 0 }]]],
  // face 14
  [[[BaseCellOrient { base: 85, rot60: 0 }, BaseCellOrient { base: 87, rot60: 0 }, BaseCellOrient { base: 83, rot60: 3 }],
    [BaseCellOrient { base: 101, rot60: 0 }, BaseCellOrient { base: 102, rot60: 3 }, BaseCellOrient { base: 100, rot60: 3 }],
    [BaseCellOrient { base: 107, rot60: 3 }, BaseCellOrient { base: 112, rot60: 3 }, BaseCellOrient { base: 114, rot60: 3 }]],
   [[BaseCellOrient { base: 66, rot60: 0 }, BaseCellOrient { base: 67, rot60: 3 }, BaseCellOrient { base: 70, rot60: 3 }],
    [BaseCellOrient { base: 81, rot60: 0 }, BaseCellOrient { base: 85, rot60: 0 }, BaseCellOrient { base: 87, rot60: 0 }],
    [BaseCellOrient { base: 94, rot60: 3 }, BaseCellOrient { base: 101, rot60: 0 }, BaseCellOrient { base: 102, rot60: 3 }]],
   [[BaseCellOrient { base: 49, rot60: 0 }, BaseCellOrient { base: 48, rot60: 3 }, BaseCellOrient { base: 50, rot60: 3 }],
    [BaseCellOrient { base: 61, rot60: 3 }, BaseCellOrient { base: 66, rot60: 0 }, BaseCellOrient { base: 67, rot60: 3 }],
    [BaseCellOrient { base: 75, rot60: 3 }, BaseCellOrient { base: 81, rot60: 0 }, BaseCellOrient { base: 85, rot60: 0 }]]],
  // face 15
  [[[BaseCellOrient { base: 95, rot60: 0 }, BaseCellOrient { base: 92, rot60: 0 }, BaseCellOrient { base: 83, rot60: 0 }],
    [BaseCellOrient { base: 79, rot60: 0 }, BaseCellOrient { base: 78, rot60: 0 }, BaseCellOrient { base: 74, rot60: 3 }],
    [BaseCellOrient { base: 63, rot60: 1 }, BaseCellOrient { base: 59, rot60: 3 }, BaseCellOrient { base: 57, rot60: 3 }]],
   [[BaseCellOrient { base: 109, rot60: 0 }, BaseCellOrient { base: 108, rot60: 0 }, BaseCellOrient { base: 100, rot60: 5 }],
    [BaseCellOrient { base: 93, rot60: 1 }, BaseCellOrient { base: 95, rot60: 0 }, BaseCellOrient { base: 92, rot60: 0 }],
    [BaseCellOrient { base: 77, rot60: 1 }, BaseCellOrient { base: 79, rot60: 0 }, BaseCellOrient { base: 78, rot60: 0 }]],
   [[BaseCellOrient { base: 117, rot60: 4 }, BaseCellOrient { base: 118, rot60: 5 }, BaseCellOrient { base: 114, rot60: 5 }],
    [BaseCellOrient { base: 106, rot60: 1 }, BaseCellOrient { base: 109, rot60: 0 }, BaseCellOrient { base: 108, rot60: 0 }],
    [BaseCellOrient { base: 90, rot60: 1 }, BaseCellOrient { base: 93, rot60: 1 }, BaseCellOrient { base: 95, rot60: 0 }]]],
  // face 16
  [[[BaseCellOrient { base: 90, rot60: 0 }, BaseCellOrient { base: 77, rot60: 0 }, BaseCellOrient { base: 63, rot60: 0 }],
    [BaseCellOrient { base: 80, rot60: 0 }, BaseCellOrient { base: 68, rot60: 0 }, BaseCellOrient { base: 56, rot60: 3 }],
    [BaseCellOrient { base: 72, rot60: 1 }, BaseCellOrient { base: 60, rot60: 3 }, BaseCellOrient { base: 46, rot60: 3 }]],
   [[BaseCellOrient { base: 106, rot60: 0 }, BaseCellOrient { base: 93, rot60: 0 }, BaseCellOrient { base: 79, rot60: 5 }],
    [BaseCellOrient { base: 99, rot60: 1 }, BaseCellOrient { base: 90, rot60: 0 }, BaseCellOrient { base: 77, rot60: 0 }],
    [BaseCellOrient { base: 88, rot60: 1 }, BaseCellOrient { base: 80, rot60: 0 }, BaseCellOrient { base: 68, rot60: 0 }]],
   [[BaseCellOrient { base: 117, rot60: 3 }, BaseCellOrient { base: 109, rot60: 5 }, BaseCellOrient { base: 95, rot60: 5 }],
    [BaseCellOrient { base: 113, rot60: 1 }, BaseCellOrient { base: 106, rot60: 0 }, BaseCellOrient { base: 93, rot60: 0 }],
    [BaseCellOrient { base: 105, rot60: 1 }, BaseCellOrient { base: 99, rot60: 1 }, BaseCellOrient { base: 90, rot60: 0 }]]],
  // face 17
  [[[BaseCellOrient { base: 105, rot60: 0 }, BaseCellOrient { base: 88, rot60: 0 }, BaseCellOrient { base: 72, rot60: 0 }],
    [BaseCellOrient { base: 103, rot60: 0 }, BaseCellOrient { base: 91, rot60: 0 }, BaseCellOrient { base: 73, rot60: 3 }],
    [BaseCellOrient { base: 97, rot60: 1 }, BaseCellOrient { base: 89, rot60: 3 }, BaseCellOrient { base: 71, rot60: 3 }]],
   [[BaseCellOrient { base: 113, rot60: 0 }, BaseCellOrient { base: 99, rot60: 0 }, BaseCellOrient { base: 80, rot60: 5 }],
    [BaseCellOrient { base: 116, rot60: 1 }, BaseCellOrient { base: 105, rot60: 0 }, BaseCellOrient { base: 88, rot60: 0 }],
    [BaseCellOrient { base: 111, rot60: 1 }, BaseCellOrient { base: 103, rot60: 0 }, BaseCellOrient { base: 91, rot60: 0 }]],
   [[BaseCellOrient { base: 117, rot60: 2 }, BaseCellOrient { base: 106, rot60: 5 }, BaseCellOrient { base: 90, rot60: 5 }],
    [BaseCellOrient { base: 121, rot60: 1 }, BaseCellOrient { base: 113, rot60: 0 }, BaseCellOrient { base: 99, rot60: 0 }],
    [BaseCellOrient { base: 119, rot60: 1 }, BaseCellOrient { base: 116, rot60: 1 }, BaseCellOrient { base: 105, rot60: 0 }]]],
  // face 18
  [[[BaseCellOrient { base: 119, rot60: 0 }, BaseCellOrient { base: 111, rot60: 0 }, BaseCellOrient { base: 97, rot60: 0 }],
    [BaseCellOrient { base: 115, rot60: 0 }, BaseCellOrient { base: 110, rot60: 0 }, BaseCellOrient { base: 98, rot60: 3 }],
    [BaseCellOrient { base: 107, rot60: 1 }, BaseCellOrient { base: 104, rot60: 3 }, BaseCellOrient { base: 96, rot60: 3 }]],
   [[BaseCellOrient { base: 121, rot60: 0 }, BaseCellOrient { base: 116, rot60: 0 }, BaseCellOrient { base: 103, rot60: 5 }],
    [BaseCellOrient { base: 120, rot60: 1 }, BaseCellOrient { base: 119, rot60: 0 }, BaseCellOrient { base: 111, rot60: 0 }],
    [BaseCellOrient { base: 112, rot60: 1 }, BaseCellOrient { base: 115, rot60: 0 }, BaseCellOrient { base: 110, rot60: 0 }]],
   [[BaseCellOrient { base: 117, rot60: 1 }, BaseCellOrient { base: 113, rot60: 5 }, BaseCellOrient { base: 105, rot60: 5 }],
    [BaseCellOrient { base: 118, rot60: 1 }, BaseCellOrient { base: 121, rot60: 0 }, BaseCellOrient { base: 116, rot60: 0 }],
    [BaseCellOrient { base: 114, rot60: 1 }, BaseCellOrient { base: 120, rot60: 1 }, BaseCellOrient { base: 119, rot60: 0 }]]],
  // face 19
  [[[BaseCellOrient { base: 114, rot60: 0 }, BaseCellOrient { base: 112, rot60: 0 }, BaseCellOrient { base: 107, rot60: 0 }],
    [BaseCellOrient { base: 100, rot60: 0 }, BaseCellOrient { base: 102, rot60: 0 }, BaseCellOrient { base: 101, rot60: 3 }],
    [BaseCellOrient { base: 83, rot60: 1 }, BaseCellOrient { base: 87, rot60: 3 }, BaseCellOrient { base: 85, rot60: 3 }]],
   [[BaseCellOrient { base: 118, rot60: 0 }, BaseCellOrient { base: 120, rot60: 0 }, BaseCellOrient { base: 115, rot60: 5 }],
    [BaseCellOrient { base: 108, rot60: 1 }, BaseCellOrient { base: 114, rot60: 0 }, BaseCellOrient { base: 112, rot60: 0 }],
    [BaseCellOrient { base: 92, rot60: 1 }, BaseCellOrient { base: 100, rot60: 0 }, BaseCellOrient { base: 102, rot60: 0 }]],
   [[BaseCellOrient { base: 117, rot60: 0 }, BaseCellOrient { base: 121, rot60: 5 }, BaseCellOrient { base: 119, rot60: 5 }],
    [BaseCellOrient { base: 109, rot60: 1 }, BaseCellOrient { base: 118, rot60: 0 }, BaseCellOrient { base: 120, rot60: 0 }],
    [BaseCellOrient { base: 95, rot60: 1 }, BaseCellOrient { base: 108, rot60: 1 }, BaseCellOrient { base: 114, rot60: 0 }]]],
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pentagon_count_is_twelve() {
    let count = (0..NUM_BASE_CELLS).filter(|&bc| is_base_cell_pentagon(bc)).count();
    assert_eq!(count, 12);
    assert!(is_base_cell_pentagon(4));
    assert!(is_base_cell_pentagon(117));
    assert!(!is_base_cell_pentagon(0));
  }

  #[test]
  fn neighbor_tables_are_consistent() {
    for bc in 0..NUM_BASE_CELLS {
      // every base cell is its own center neighbor
      assert_eq!(base_cell_neighbor(bc, Digit::Center), bc);
      // pentagons have no k-axis neighbor, hexagons always do
      let k_neighbor = base_cell_neighbor(bc, Digit::K);
      if is_base_cell_pentagon(bc) {
        assert_eq!(k_neighbor, INVALID_BASE_CELL, "base cell {bc}");
      } else {
        assert!((0..NUM_BASE_CELLS).contains(&k_neighbor), "base cell {bc}");
      }
    }
  }

  #[test]
  fn neighbors_are_symmetric() {
    for bc in 0..NUM_BASE_CELLS {
      for d in 1..Digit::COUNT {
        let n = base_cell_neighbor(bc, Digit::from_bits(d));
        if n != INVALID_BASE_CELL {
          assert_ne!(base_cell_direction(n, bc), Digit::Invalid, "{bc} -> {n}");
        }
      }
    }
  }

  #[test]
  fn home_lookup_roundtrip() {
    for bc in 0..NUM_BASE_CELLS {
      let home = base_cell_to_face_ijk(bc);
      assert_eq!(face_ijk_to_base_cell(&home), bc, "base cell {bc}");
      assert_eq!(face_ijk_to_base_cell_rotations(&home), 0, "base cell {bc} is unrotated at home");
    }
  }

  #[test]
  fn pentagon_direction_faces_cover_all_pentagons() {
    for bc in 0..NUM_BASE_CELLS {
      assert_eq!(pentagon_direction_faces(bc).is_some(), is_base_cell_pentagon(bc));
    }
  }

  #[test]
  fn out_of_range_lookups_fail_closed() {
    let bad = FaceIJK { face: 20, coord: CoordIJK::new(0, 0, 0) };
    assert_eq!(face_ijk_to_base_cell(&bad), INVALID_BASE_CELL);
    let far = FaceIJK { face: 0, coord: CoordIJK::new(3, 0, 0) };
    assert_eq!(face_ijk_to_base_cell_rotations(&far), INVALID_ROTATIONS);
    assert_eq!(base_cell_to_rotations(4, 13), INVALID_ROTATIONS);
  }
}
