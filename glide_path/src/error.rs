// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for path construction from raw coordinates.

/// Errors produced when ingesting control points from a flat coordinate list.
///
/// Sampling itself never fails; see [`Path::sample`](crate::Path::sample).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The coordinate count is not a multiple of twelve.
    #[error("expected a multiple of 12 coordinates (four 3D control points per segment), got {len}")]
    RaggedCoordinates {
        /// Number of coordinates supplied.
        len: usize,
    },
    /// A coordinate is NaN or infinite.
    #[error("coordinate {index} is not finite")]
    NonFiniteCoordinate {
        /// Position of the offending value in the flat list.
        index: usize,
    },
}
