//! Coordinate systems below the geographic layer: the face-local hex
//! lattice (IJK+) and icosahedron face addressing.

pub mod face;
pub(crate) mod icosahedron;
pub mod ijk;

pub(crate) use face::is_class_iii_res;
pub use face::FaceIJK;
pub use ijk::{CoordIJK, Digit};
