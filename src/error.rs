//! The closed failure taxonomy shared by every fallible grid operation.

#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// Failure codes surfaced by the grid engine.
///
/// Exactly one code is returned per failure; operations never retry
/// internally. The numeric discriminants are stable and form the
/// interchange representation of the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum GridError {
  /// The operation failed and no more specific code applies.
  #[error("operation failed")]
  Failed = 1,
  /// A numeric argument was outside its acceptable range.
  #[error("argument outside acceptable range")]
  Domain = 2,
  /// A latitude or longitude argument was non-finite or out of range.
  #[error("latitude or longitude outside acceptable range")]
  LatLngDomain = 3,
  /// A resolution argument was outside [0, 15].
  #[error("resolution outside acceptable range")]
  ResolutionDomain = 4,
  /// A cell index argument was structurally invalid.
  #[error("cell index is not valid")]
  CellInvalid = 5,
  /// A directed edge index argument was structurally invalid.
  #[error("directed edge index is not valid")]
  DirectedEdgeInvalid = 6,
  /// An undirected edge index argument was structurally invalid.
  #[error("undirected edge index is not valid")]
  UndirectedEdgeInvalid = 7,
  /// A vertex index argument was structurally invalid.
  #[error("vertex index is not valid")]
  VertexInvalid = 8,
  /// Pentagon distortion was encountered and the algorithm cannot proceed.
  #[error("pentagon distortion encountered")]
  Pentagon = 9,
  /// Duplicate input entries where the algorithm requires a set.
  #[error("duplicate input")]
  DuplicateInput = 10,
  /// The two cell arguments are not grid neighbors.
  #[error("cells are not neighbors")]
  NotNeighbors = 11,
  /// The cell arguments have incompatible resolutions.
  #[error("incompatible resolutions")]
  ResolutionMismatch = 12,
  /// A necessary allocation failed.
  #[error("memory allocation failed")]
  MemoryAlloc = 13,
  /// A caller-provided buffer or cap was too small for the result.
  #[error("provided memory bounds too small")]
  MemoryBounds = 14,
  /// A mode or flags argument was not valid.
  #[error("mode or flags argument is not valid")]
  OptionInvalid = 15,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn discriminants_are_stable() {
    assert_eq!(GridError::Failed as u32, 1);
    assert_eq!(GridError::LatLngDomain as u32, 3);
    assert_eq!(GridError::Pentagon as u32, 9);
    assert_eq!(GridError::ResolutionMismatch as u32, 12);
    assert_eq!(GridError::OptionInvalid as u32, 15);
  }

  #[test]
  fn errors_display() {
    assert_eq!(GridError::NotNeighbors.to_string(), "cells are not neighbors");
    assert_eq!(GridError::Pentagon.to_string(), "pentagon distortion encountered");
  }
}
