// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orbit probe.
//!
//! Fly a probe around an undulating ring at constant speed. Each frame the path
//! is sampled, the probe's local transform is set from the oriented frame, a
//! rigidly attached antenna bobs relative to the probe, and the tree is updated
//! and traversed in draw order. The path overlay is a hidden-able node.
//!
//! Run:
//! - `RUST_LOG=info cargo run -p glide_demos --example orbit_probe`

use glam::{Mat4, Vec3};
use glide_path::{CubicSegment, Path, PathCursor};
use glide_tree::{LocalNode, NodeFlags, NodeId, TraverseFilter, Tree};

const RADIUS: f32 = 4.0;
const HEIGHT: f32 = 0.5;
const PROBE_SCALE: f32 = 0.12;
const FRAME_DT: f32 = 1.0 / 60.0;

/// Four quarter arcs with handles nudged up and down alternately.
fn ring() -> Vec<CubicSegment> {
    let (r, k) = (RADIUS, RADIUS * 0.55);
    let mut segs = vec![
        CubicSegment::new(
            Vec3::new(r, 0.0, 0.0),
            Vec3::new(r, 0.0, k),
            Vec3::new(k, 0.0, r),
            Vec3::new(0.0, 0.0, r),
        ),
        CubicSegment::new(
            Vec3::new(0.0, 0.0, r),
            Vec3::new(-k, 0.0, r),
            Vec3::new(-r, 0.0, k),
            Vec3::new(-r, 0.0, 0.0),
        ),
        CubicSegment::new(
            Vec3::new(-r, 0.0, 0.0),
            Vec3::new(-r, 0.0, -k),
            Vec3::new(-k, 0.0, -r),
            Vec3::new(0.0, 0.0, -r),
        ),
        CubicSegment::new(
            Vec3::new(0.0, 0.0, -r),
            Vec3::new(k, 0.0, -r),
            Vec3::new(r, 0.0, -k),
            Vec3::new(r, 0.0, 0.0),
        ),
    ];
    for (i, seg) in segs.iter_mut().enumerate() {
        let h = if i % 2 == 1 { HEIGHT } else { -HEIGHT };
        seg.p1.y += h;
        seg.p2.y -= h;
    }
    segs
}

struct Scene {
    tree: Tree,
    overlay: NodeId,
    probe: NodeId,
    antenna: NodeId,
}

impl Scene {
    fn new() -> Self {
        let mut tree = Tree::new();
        let overlay = tree.insert(None, LocalNode::default());
        let probe = tree.insert(None, LocalNode::default());
        // In probe space: the probe mesh is scaled down, so the offset is large.
        let antenna = tree.insert(
            Some(probe),
            LocalNode::from_transform(Mat4::from_translation(Vec3::new(0.0, 4.0, 0.0))),
        );
        Self {
            tree,
            overlay,
            probe,
            antenna,
        }
    }
}

fn main() {
    env_logger::init();

    let mut path = Path::new();
    path.set_segments(&ring());
    let polyline: Vec<Vec3> = path.polyline().collect();
    log::info!(
        "ring length {:.3}, overlay has {} points",
        path.length(),
        polyline.len()
    );

    let mut scene = Scene::new();
    let mut cursor = PathCursor::new(0.05);
    let mut last = path.sample(cursor.u);

    for frame in 0..=1200 {
        let u = cursor.advance(FRAME_DT);
        let pose = cursor.frame(&path, Vec3::Y);

        let bob = (frame as f32 * 0.2).sin() * 0.5;
        scene
            .tree
            .set_local_transform(scene.probe, pose.to_matrix(PROBE_SCALE));
        scene.tree.set_local_transform(
            scene.antenna,
            Mat4::from_translation(Vec3::new(0.0, 4.0 + bob, 0.0)),
        );
        // Show the overlay for the first lap only.
        let overlay_flags = if frame < 600 {
            NodeFlags::VISIBLE
        } else {
            NodeFlags::empty()
        };
        scene.tree.set_flags(scene.overlay, overlay_flags);
        scene.tree.update();

        let step = pose.position.distance(last);
        last = pose.position;

        if frame % 150 == 0 {
            let tip = scene
                .tree
                .world(scene.antenna)
                .map(|m| m.transform_point3(Vec3::ZERO))
                .unwrap_or_default();
            log::info!(
                "frame {frame:4} u={u:.3} probe={:?} step={step:.4} antenna={tip:?}",
                pose.position
            );
            let mut draws = 0;
            scene
                .tree
                .traverse_filtered(TraverseFilter { visible_only: true }, |id, world| {
                    draws += 1;
                    log::debug!("  draw {id:?} at {:?}", world.w_axis.truncate());
                });
            log::info!("  {draws} draw call(s)");
        }
    }
}
