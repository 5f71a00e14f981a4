// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Looping travel along a path at a fixed normalized speed.

use glam::Vec3;

use crate::frame::Frame;
use crate::path::Path;

/// Position of a traveller on a closed loop, in normalized arc length.
///
/// `speed` is in path fractions per second, so the wall-clock time of one lap
/// is `1 / speed` regardless of the path's length.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PathCursor {
    /// Current normalized arc length, kept in `[0, 1)`.
    pub u: f32,
    /// Laps per second. Negative values travel backwards.
    pub speed: f32,
}

impl PathCursor {
    /// Cursor at the start of the path.
    pub const fn new(speed: f32) -> Self {
        Self { u: 0.0, speed }
    }

    /// Move forward by `dt` seconds, wrapping around the end of the loop.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.u = wrap_unit(self.u + dt * self.speed);
        self.u
    }

    /// Position at the cursor.
    pub fn sample(&self, path: &Path) -> Vec3 {
        path.sample(self.u)
    }

    /// Frame at the cursor.
    pub fn frame(&self, path: &Path, up_hint: Vec3) -> Frame {
        path.frame_at(self.u, up_hint)
    }
}

/// Wrap into `[0, 1)`.
fn wrap_unit(u: f32) -> f32 {
    let r = u % 1.0;
    let r = if r < 0.0 { r + 1.0 } else { r };
    // `-tiny % 1.0 + 1.0` rounds to exactly 1.0.
    if r >= 1.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_forward_and_backward() {
        let mut c = PathCursor::new(0.25);
        c.advance(3.0);
        assert!((c.u - 0.75).abs() < 1e-6, "three quarters");
        c.advance(2.0);
        assert!((c.u - 0.25).abs() < 1e-6, "wrapped past the end");

        let mut back = PathCursor::new(-0.5);
        back.advance(0.5);
        assert!((back.u - 0.75).abs() < 1e-6, "wrapped below zero");
    }

    #[test]
    fn stays_in_half_open_range() {
        assert_eq!(wrap_unit(1.0), 0.0, "exact lap");
        assert_eq!(wrap_unit(-1e-9), 0.0, "rounding near zero");
        assert!(wrap_unit(0.999) < 1.0, "below one");
    }
}
