// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments in 3D.

use alloc::vec::Vec;
use glam::Vec3;

use crate::error::PathError;

/// Number of scalar coordinates describing one segment (four 3D control points).
pub const COORDS_PER_SEGMENT: usize = 12;

/// A cubic Bézier curve defined by four control points.
///
/// Degenerate configurations (coincident or collinear points) are valid; the
/// evaluators never divide, so they stay finite for finite inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    /// Start point, reached at `t = 0`.
    pub p0: Vec3,
    /// First handle.
    pub p1: Vec3,
    /// Second handle.
    pub p2: Vec3,
    /// End point, reached at `t = 1`.
    pub p3: Vec3,
}

impl CubicSegment {
    /// Create a segment from its four control points.
    pub const fn new(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// A straight segment from `a` to `b` with handles at the thirds.
    ///
    /// The parameterization of such a segment is already uniform in arc length.
    pub fn line(a: Vec3, b: Vec3) -> Self {
        Self::new(a, a.lerp(b, 1.0 / 3.0), a.lerp(b, 2.0 / 3.0), b)
    }

    /// Build a segment from twelve coordinates laid out as `p0.xyz, p1.xyz, p2.xyz, p3.xyz`.
    pub fn from_coords(c: &[f32; COORDS_PER_SEGMENT]) -> Self {
        Self::new(
            Vec3::new(c[0], c[1], c[2]),
            Vec3::new(c[3], c[4], c[5]),
            Vec3::new(c[6], c[7], c[8]),
            Vec3::new(c[9], c[10], c[11]),
        )
    }

    /// Position at parameter `t` (Bernstein form).
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate the polynomial.
    /// Evaluated relative to `p0`, so coincident control points return `p0` exactly.
    pub fn position(&self, t: f32) -> Vec3 {
        let u = 1.0 - t;
        let uu = u * u;
        let tt = t * t;
        self.p0
            + (self.p1 - self.p0) * (3.0 * uu * t)
            + (self.p2 - self.p0) * (3.0 * u * tt)
            + (self.p3 - self.p0) * (tt * t)
    }

    /// First derivative at parameter `t`.
    ///
    /// The result is not normalized and may be (numerically) zero for
    /// coincident control points. Callers that need a direction must handle that.
    pub fn tangent(&self, t: f32) -> Vec3 {
        let u = 1.0 - t;
        (self.p1 - self.p0) * (3.0 * u * u)
            + (self.p2 - self.p1) * (6.0 * u * t)
            + (self.p3 - self.p2) * (3.0 * t * t)
    }

    /// Whether every control point is finite.
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }
}

/// Parse a flat coordinate list into segments, twelve coordinates per segment.
///
/// Fails on a length that is not a multiple of twelve or on any NaN/infinite value.
pub fn segments_from_coords(coords: &[f32]) -> Result<Vec<CubicSegment>, PathError> {
    if coords.len() % COORDS_PER_SEGMENT != 0 {
        return Err(PathError::RaggedCoordinates { len: coords.len() });
    }
    if let Some(index) = coords.iter().position(|c| !c.is_finite()) {
        return Err(PathError::NonFiniteCoordinate { index });
    }
    Ok(coords
        .chunks_exact(COORDS_PER_SEGMENT)
        .map(|chunk| {
            let mut c = [0.0; COORDS_PER_SEGMENT];
            c.copy_from_slice(chunk);
            CubicSegment::from_coords(&c)
        })
        .collect())
}
