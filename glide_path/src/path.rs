// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc-length parameterized paths built from cubic segments.

use alloc::vec::Vec;
use glam::Vec3;

use crate::arclen::ArcTable;
use crate::error::PathError;
use crate::frame::Frame;
use crate::segment::{CubicSegment, segments_from_coords};

/// Smallest accepted sampling resolution per segment.
pub const MIN_SAMPLES_PER_SEGMENT: usize = 16;

/// Sampling resolution used by [`PathOptions::default`].
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 200;

/// Squared tangent magnitude below which a tangent is treated as degenerate.
const DEGENERATE_TANGENT_SQ: f32 = 1e-12;

/// Construction options for a [`Path`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathOptions {
    /// Table resolution per segment. Raised to [`MIN_SAMPLES_PER_SEGMENT`] if lower.
    pub samples_per_segment: usize,
    /// Direction returned by [`Path::tangent_at`] when the path is empty or the
    /// tangent is degenerate. Normalized on construction; a zero vector becomes `+Z`.
    pub fallback_tangent: Vec3,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,
            fallback_tangent: Vec3::Z,
        }
    }
}

/// An ordered list of cubic segments with arc-length tables.
///
/// Segments are assumed, not checked, to connect end to start.
/// Tables are rebuilt in full whenever the segment list is replaced, so a
/// `Path` never holds tables for a segment list other than its own.
#[derive(Clone, Debug)]
pub struct Path {
    options: PathOptions,
    segments: Vec<CubicSegment>,
    tables: Vec<ArcTable>,
    segment_lengths: Vec<f32>,
    total_length: f32,
}

impl Default for Path {
    fn default() -> Self {
        Self::new()
    }
}

impl Path {
    /// Create an empty path with default options.
    pub fn new() -> Self {
        Self::with_options(PathOptions::default())
    }

    /// Create an empty path with the given per-segment sampling resolution.
    pub fn with_resolution(samples_per_segment: usize) -> Self {
        Self::with_options(PathOptions {
            samples_per_segment,
            ..PathOptions::default()
        })
    }

    /// Create an empty path with explicit options.
    pub fn with_options(mut options: PathOptions) -> Self {
        if options.samples_per_segment < MIN_SAMPLES_PER_SEGMENT {
            log::warn!(
                "sampling resolution {} below minimum, using {MIN_SAMPLES_PER_SEGMENT}",
                options.samples_per_segment
            );
            options.samples_per_segment = MIN_SAMPLES_PER_SEGMENT;
        }
        options.fallback_tangent = options.fallback_tangent.normalize_or(Vec3::Z);
        Self {
            options,
            segments: Vec::new(),
            tables: Vec::new(),
            segment_lengths: Vec::new(),
            total_length: 0.0,
        }
    }

    /// Create a path and install `segments`.
    pub fn from_segments(segments: &[CubicSegment]) -> Self {
        let mut path = Self::new();
        path.set_segments(segments);
        path
    }

    /// Options in effect (after the resolution floor was applied).
    pub fn options(&self) -> &PathOptions {
        &self.options
    }

    /// Replace all segments and rebuild every arc-length table.
    pub fn set_segments(&mut self, segments: &[CubicSegment]) {
        self.segments.clear();
        self.segments.extend_from_slice(segments);
        self.rebuild();
    }

    /// Replace all segments from a flat coordinate list (twelve per segment).
    ///
    /// On error the path is left unchanged.
    pub fn set_coords(&mut self, coords: &[f32]) -> Result<(), PathError> {
        let segments = segments_from_coords(coords)?;
        self.segments = segments;
        self.rebuild();
        Ok(())
    }

    fn rebuild(&mut self) {
        let samples = self.options.samples_per_segment;
        self.tables = self
            .segments
            .iter()
            .map(|seg| ArcTable::build(seg, samples))
            .collect();
        self.segment_lengths = self.tables.iter().map(ArcTable::length).collect();
        self.total_length = self.segment_lengths.iter().sum();
        log::debug!(
            "rebuilt arc-length tables: {} segments, {samples} samples each, length {}",
            self.segments.len(),
            self.total_length
        );
    }

    /// Installed segments.
    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    /// Whether the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total approximate arc length.
    pub fn length(&self) -> f32 {
        self.total_length
    }

    /// Approximate arc length of each segment, in order.
    pub fn segment_lengths(&self) -> &[f32] {
        &self.segment_lengths
    }

    /// Arc-length table of segment `index`.
    pub fn arc_table(&self, index: usize) -> Option<&ArcTable> {
        self.tables.get(index)
    }

    /// Position on segment `index` at raw parameter `t`.
    pub fn segment_position(&self, index: usize, t: f32) -> Option<Vec3> {
        self.segments.get(index).map(|s| s.position(t))
    }

    /// Unnormalized derivative on segment `index` at raw parameter `t`.
    pub fn segment_tangent(&self, index: usize, t: f32) -> Option<Vec3> {
        self.segments.get(index).map(|s| s.tangent(t))
    }

    /// Map normalized arc length `u` to a segment index and a parameter on it.
    ///
    /// Returns `None` only for an empty path.
    pub fn locate(&self, u: f32) -> Option<(usize, f32)> {
        let last = self.segments.len().checked_sub(1)?;
        let mut target = u.clamp(0.0, 1.0) * self.total_length;

        // Segment counts are small; a linear walk is enough here.
        let mut index = last;
        let mut acc: f32 = 0.0;
        for (i, len) in self.segment_lengths.iter().copied().enumerate() {
            if target <= acc + len || i == last {
                index = i;
                break;
            }
            acc += len;
        }
        target -= acc;

        Some((index, self.tables[index].param_at(target)))
    }

    /// Position at normalized arc length `u` (clamped to `[0, 1]`).
    ///
    /// Sweeping `u` at a constant rate moves at constant speed along the path.
    /// An empty path yields the origin.
    pub fn sample(&self, u: f32) -> Vec3 {
        match self.locate(u) {
            Some((index, t)) => self.segments[index].position(t),
            None => Vec3::ZERO,
        }
    }

    /// Unit tangent at normalized arc length `u` (clamped to `[0, 1]`).
    ///
    /// Returns [`PathOptions::fallback_tangent`] for an empty path or where the
    /// derivative vanishes.
    pub fn tangent_at(&self, u: f32) -> Vec3 {
        let Some((index, t)) = self.locate(u) else {
            return self.options.fallback_tangent;
        };
        let d = self.segments[index].tangent(t);
        if d.length_squared() < DEGENERATE_TANGENT_SQ {
            return self.options.fallback_tangent;
        }
        d.normalize()
    }

    /// Oriented frame at normalized arc length `u`; see [`Frame::from_tangent`].
    pub fn frame_at(&self, u: f32, up_hint: Vec3) -> Frame {
        Frame::from_tangent(self.sample(u), self.tangent_at(u), up_hint)
    }

    /// Evaluated positions of every segment at its table parameters, in order.
    ///
    /// Suitable for drawing the path as a line strip.
    pub fn polyline(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.segments
            .iter()
            .zip(&self.tables)
            .flat_map(|(seg, table)| table.entries().iter().map(move |e| seg.position(e.t)))
    }
}
