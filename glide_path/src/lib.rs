// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=glide_path --heading-base-level=0

//! Glide Path: piecewise cubic Bézier paths with constant-speed sampling.
//!
//! A [`Path`] is an ordered list of [`CubicSegment`]s. Raw Bézier parameters
//! bunch up where control points are close together, so moving `t` at a steady
//! rate gives uneven speed. The path instead measures every segment once,
//! storing an [`ArcTable`] of `(t, cumulative length)` samples, and answers
//! queries in normalized arc length `u ∈ [0, 1]`.
//!
//! - [`Path::set_segments`] replaces the segment list and rebuilds every table in full.
//! - [`Path::sample`] and [`Path::tangent_at`] map `u` to a position or unit tangent.
//! - [`Path::frame_at`] and [`Frame::to_matrix`] orient an object riding the path.
//! - [`PathCursor`] loops a traveller around a closed path at a fixed lap rate.
//!
//! Lookup walks the segments linearly (counts are small) and binary-searches
//! inside one segment's table (tables hold hundreds of entries).
//!
//! ## Degenerate input
//!
//! Nothing here fails at sample time. An empty path samples to the origin with
//! the configured [`PathOptions::fallback_tangent`]; zero-length segments have
//! flat tables; out-of-range `u` is clamped. The only fallible entry point is
//! [`Path::set_coords`], which parses twelve coordinates per segment.
//!
//! # Example
//!
//! ```rust
//! use glam::Vec3;
//! use glide_path::{CubicSegment, Path};
//!
//! let mut path = Path::with_resolution(64);
//! path.set_segments(&[CubicSegment::new(
//!     Vec3::ZERO,
//!     Vec3::new(0.33, 0.0, 0.0),
//!     Vec3::new(0.66, 0.0, 0.0),
//!     Vec3::X,
//! )]);
//!
//! let mid = path.sample(0.5);
//! assert!((mid - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-3);
//! assert!(path.tangent_at(0.5).dot(Vec3::X) > 0.999);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arclen;
mod cursor;
mod error;
mod frame;
mod path;
mod segment;

pub use arclen::{ArcEntry, ArcTable, SPAN_EPSILON};
pub use cursor::PathCursor;
pub use error::PathError;
pub use frame::Frame;
pub use path::{DEFAULT_SAMPLES_PER_SEGMENT, MIN_SAMPLES_PER_SEGMENT, Path, PathOptions};
pub use segment::{COORDS_PER_SEGMENT, CubicSegment, segments_from_coords};
