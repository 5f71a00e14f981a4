// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-segment arc-length tables.
//!
//! A table samples a segment at `N + 1` evenly spaced parameters and records the
//! cumulative chord length up to each sample. Inverting the table (length → `t`)
//! is a bracketing binary search followed by linear interpolation.

use alloc::vec::Vec;

use crate::segment::CubicSegment;

/// Floor applied to the interpolation denominator so zero-length spans never divide by zero.
pub const SPAN_EPSILON: f32 = 1e-6;

/// One sample of an arc-length table.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ArcEntry {
    /// Curve parameter of the sample.
    pub t: f32,
    /// Chordal length travelled from `t = 0` to this sample.
    pub length: f32,
}

/// Monotonic `(t, cumulative length)` table for one segment.
///
/// Always starts at `(0, 0)`, ends at `t = 1`, and never decreases in length.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcTable {
    entries: Vec<ArcEntry>,
}

impl ArcTable {
    /// Sample `segment` at `samples + 1` evenly spaced parameters.
    ///
    /// `samples` must be at least one; [`Path`](crate::Path) always passes at least
    /// [`MIN_SAMPLES_PER_SEGMENT`](crate::MIN_SAMPLES_PER_SEGMENT).
    pub fn build(segment: &CubicSegment, samples: usize) -> Self {
        debug_assert!(samples >= 1, "an arc table needs at least one span");
        let mut entries = Vec::with_capacity(samples + 1);
        entries.push(ArcEntry { t: 0.0, length: 0.0 });

        let mut length = 0.0;
        let mut prev = segment.position(0.0);
        for k in 1..=samples {
            #[allow(
                clippy::cast_precision_loss,
                reason = "Sample counts are far below 2^24."
            )]
            let t = k as f32 / samples as f32;
            let p = segment.position(t);
            length += prev.distance(p);
            entries.push(ArcEntry { t, length });
            prev = p;
        }
        Self { entries }
    }

    /// Entries in increasing `t` order.
    pub fn entries(&self) -> &[ArcEntry] {
        &self.entries
    }

    /// Total chordal length of the segment (the last entry's length).
    pub fn length(&self) -> f32 {
        self.entries.last().map_or(0.0, |e| e.length)
    }

    /// Curve parameter at which `length` has been travelled.
    ///
    /// `length` is expected in `[0, self.length()]`; values outside that range
    /// resolve to the first or last span and the interpolation weight is clamped.
    pub fn param_at(&self, length: f32) -> f32 {
        let lut = &self.entries;
        if lut.len() < 2 {
            return 0.0;
        }

        // Invariant: lut[lo].length <= length (or lo == 0), and hi > lo.
        let mut lo = 0_usize;
        let mut hi = lut.len() - 1;
        while lo + 1 < hi {
            let mid = (lo + hi) / 2;
            if lut[mid].length < length {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        let a = lut[lo];
        let b = lut[hi];
        let span = (b.length - a.length).max(SPAN_EPSILON);
        let alpha = ((length - a.length) / span).clamp(0.0, 1.0);
        (1.0 - alpha) * a.t + alpha * b.t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn table_starts_at_origin_and_ends_at_one() {
        let seg = CubicSegment::line(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        let table = ArcTable::build(&seg, 16);
        let entries = table.entries();
        assert_eq!(entries.len(), 17, "N + 1 entries");
        assert_eq!(entries[0], ArcEntry { t: 0.0, length: 0.0 }, "first entry");
        assert_eq!(entries[16].t, 1.0, "last entry at t = 1");
        assert!((table.length() - 2.0).abs() < 1e-5, "line length");
    }

    #[test]
    fn table_is_monotonic_for_cusped_segment() {
        // Handles crossed over each other produce a cusp.
        let seg = CubicSegment::new(
            Vec3::ZERO,
            Vec3::new(3.0, 1.0, 0.0),
            Vec3::new(-2.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        );
        let table = ArcTable::build(&seg, 64);
        for pair in table.entries().windows(2) {
            assert!(pair[0].length <= pair[1].length, "length decreased");
            assert!(pair[0].t < pair[1].t, "t not increasing");
        }
    }

    #[test]
    fn degenerate_segment_has_flat_table() {
        for p in [
            Vec3::new(0.5, -1.0, 2.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.3, -7.1, 12.5),
        ] {
            let table = ArcTable::build(&CubicSegment::new(p, p, p, p), 16);
            assert!(
                table.entries().iter().all(|e| e.length == 0.0),
                "all entries zero for {p:?}"
            );
            let t = table.param_at(0.0);
            assert!(t.is_finite(), "zero-length lookup at {p:?} produced {t}");
        }
    }

    #[test]
    fn param_at_inverts_uniform_line() {
        let seg = CubicSegment::line(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0));
        let table = ArcTable::build(&seg, 32);
        for i in 0..=8 {
            let s = i as f32 * 0.5;
            let t = table.param_at(s);
            assert!((t - s / 4.0).abs() < 1e-4, "t at length {s} was {t}");
        }
    }

    #[test]
    fn param_at_clamps_outside_table() {
        let seg = CubicSegment::line(Vec3::ZERO, Vec3::X);
        let table = ArcTable::build(&seg, 16);
        assert_eq!(table.param_at(-1.0), 0.0, "before start");
        assert_eq!(table.param_at(5.0), 1.0, "past end");
    }
}
