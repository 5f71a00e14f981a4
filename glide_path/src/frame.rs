// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Oriented frames for objects riding a path.

use glam::{Mat4, Vec3, Vec4};

/// `|dot(up, forward)|` above which the up hint is considered parallel to the travel direction.
const PARALLEL_DOT: f32 = 0.98;

/// Squared length below which an up hint carries no direction.
const DEGENERATE_HINT_SQ: f32 = 1e-12;

/// Orthonormal basis placed at a point on a path.
///
/// Right-handed: `right = forward × up`, and `up` is re-derived as `right × forward`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    /// Origin of the frame.
    pub position: Vec3,
    /// Unit travel direction.
    pub forward: Vec3,
    /// Unit up vector, perpendicular to `forward`.
    pub up: Vec3,
    /// Unit right vector.
    pub right: Vec3,
}

impl Frame {
    /// Build a frame at `position` looking along `forward`, rolled so `up` follows `up_hint`.
    ///
    /// When the hint is zero or nearly parallel to `forward` it is replaced by
    /// `+Z` (or `+Y` if `forward` itself runs along Z). `forward` must be non-zero.
    pub fn from_tangent(position: Vec3, forward: Vec3, up_hint: Vec3) -> Self {
        let forward = forward.normalize();
        let up = if near_parallel(up_hint, forward) {
            if near_parallel(Vec3::Z, forward) {
                Vec3::Y
            } else {
                Vec3::Z
            }
        } else {
            up_hint
        };
        let right = forward.cross(up).normalize();
        let up = right.cross(forward).normalize();
        Self {
            position,
            forward,
            up,
            right,
        }
    }

    /// Rotation with columns `(right, up, -forward)`, the look-at convention where
    /// local `-Z` points along the travel direction.
    pub fn rotation(&self) -> Mat4 {
        Mat4::from_cols(
            self.right.extend(0.0),
            self.up.extend(0.0),
            (-self.forward).extend(0.0),
            Vec4::W,
        )
    }

    /// Model matrix `translate(position) × rotation × scale(uniform)`.
    pub fn to_matrix(&self, scale: f32) -> Mat4 {
        Mat4::from_translation(self.position)
            * self.rotation()
            * Mat4::from_scale(Vec3::splat(scale))
    }
}

fn near_parallel(a: Vec3, b: Vec3) -> bool {
    if a.length_squared() < DEGENERATE_HINT_SQ {
        return true;
    }
    let d = a.normalize_or_zero().dot(b);
    !(-PARALLEL_DOT..=PARALLEL_DOT).contains(&d)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthonormal(f: &Frame) {
        for v in [f.forward, f.up, f.right] {
            assert!((v.length() - 1.0).abs() < 1e-5, "{v:?} is not unit length");
        }
        assert!(f.forward.dot(f.up).abs() < 1e-5, "forward/up not orthogonal");
        assert!(f.forward.dot(f.right).abs() < 1e-5, "forward/right not orthogonal");
        assert!(f.up.dot(f.right).abs() < 1e-5, "up/right not orthogonal");
    }

    #[test]
    fn level_frame_keeps_world_up() {
        let f = Frame::from_tangent(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert_orthonormal(&f);
        assert!((f.up - Vec3::Y).length() < 1e-6, "up should stay +Y");
        assert!((f.right - Vec3::Z).length() < 1e-6, "X × Y = Z");
    }

    #[test]
    fn vertical_travel_switches_up_hint() {
        let f = Frame::from_tangent(Vec3::ZERO, Vec3::Y, Vec3::Y);
        assert_orthonormal(&f);
        assert!(f.up.dot(Vec3::Z) > 0.99, "fallback up is +Z");

        let g = Frame::from_tangent(Vec3::ZERO, Vec3::Z, Vec3::Z);
        assert_orthonormal(&g);
        assert!(g.up.dot(Vec3::Y) > 0.99, "second fallback is +Y");
    }

    #[test]
    fn zero_up_hint_uses_fallback() {
        let f = Frame::from_tangent(Vec3::ZERO, Vec3::X, Vec3::ZERO);
        assert_orthonormal(&f);
        assert!(f.up.dot(Vec3::Z) > 0.99, "zero hint falls back to +Z");

        let g = Frame::from_tangent(Vec3::ZERO, Vec3::Z, Vec3::splat(1e-9));
        assert_orthonormal(&g);
        assert!(g.up.dot(Vec3::Y) > 0.99, "tiny hint along Z travel falls back to +Y");
    }

    #[test]
    fn matrix_places_and_orients() {
        let f = Frame::from_tangent(Vec3::new(1.0, 2.0, 3.0), Vec3::X, Vec3::Y);
        let m = f.to_matrix(2.0);
        let origin = m.transform_point3(Vec3::ZERO);
        assert!((origin - f.position).length() < 1e-6, "translation");
        // Local -Z maps onto forward, scaled.
        let tip = m.transform_point3(Vec3::NEG_Z);
        assert!((tip - (f.position + Vec3::X * 2.0)).length() < 1e-5, "local -Z is forward");
    }
}
