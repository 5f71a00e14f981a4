// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform tree basics.
//!
//! Build a small hierarchy, animate locals, update, and traverse in draw order.
//!
//! Run:
//! - `cargo run -p glide_demos --example tree_basics`

use glam::{Mat4, Vec3};
use glide_tree::{LocalNode, NodeFlags, TraverseFilter, Tree};

fn main() {
    env_logger::init();

    let mut tree = Tree::new();
    let body = tree.insert(None, LocalNode::default());
    let antenna = tree.insert(
        Some(body),
        LocalNode::from_transform(Mat4::from_translation(Vec3::new(0.0, 0.5, 0.0))),
    );
    let tip = tree.insert(
        Some(antenna),
        LocalNode::from_transform(Mat4::from_translation(Vec3::new(0.0, 0.25, 0.0))),
    );
    let gizmo = tree.insert(
        Some(body),
        LocalNode {
            flags: NodeFlags::empty(),
            ..LocalNode::default()
        },
    );
    println!("{tree:?}");

    for frame in 0..3 {
        let angle = frame as f32 * 0.5;
        tree.set_local_transform(
            body,
            Mat4::from_translation(Vec3::new(frame as f32, 0.0, 0.0)) * Mat4::from_rotation_z(angle),
        );
        tree.update();

        let p = tree.world(tip).unwrap().transform_point3(Vec3::ZERO);
        println!("frame {frame}: tip at {p:?}");
    }

    println!("draw order (all):");
    tree.traverse(|id, world| println!("  {id:?} at {:?}", world.w_axis.truncate()));

    println!("draw order (visible only):");
    tree.traverse_filtered(TraverseFilter { visible_only: true }, |id, _| {
        println!("  {id:?}");
    });
    assert!(tree.flags(gizmo).is_some_and(|f| f.is_empty()), "gizmo is hidden");
}
