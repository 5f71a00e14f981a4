// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::{Mat4, Vec3};
use glide_tree::{LocalNode, NodeId, Tree};

/// Full tree of the given fan-out and depth; returns the tree and every node id.
fn gen_tree(fanout: usize, depth: usize) -> (Tree, Vec<NodeId>) {
    let mut tree = Tree::new();
    let root = tree.insert(None, LocalNode::default());
    let mut ids = vec![root];
    let mut level = vec![root];
    for d in 0..depth {
        let mut next = Vec::with_capacity(level.len() * fanout);
        for &parent in &level {
            for i in 0..fanout {
                let offset = Vec3::new(i as f32, 1.0, d as f32 * 0.1);
                let id = tree.insert(
                    Some(parent),
                    LocalNode::from_transform(
                        Mat4::from_translation(offset) * Mat4::from_rotation_y(0.1),
                    ),
                );
                next.push(id);
            }
        }
        ids.extend_from_slice(&next);
        level = next;
    }
    (tree, ids)
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree");
    for &(fanout, depth) in &[(2usize, 10usize), (4, 6), (16, 3)] {
        let (mut tree, ids) = gen_tree(fanout, depth);
        group.throughput(Throughput::Elements(ids.len() as u64));
        group.bench_function(format!("animate_update_f{}_d{}", fanout, depth), |b| {
            let mut frame = 0_u32;
            b.iter(|| {
                frame = frame.wrapping_add(1);
                let x = (frame % 100) as f32 * 0.01;
                tree.set_local_transform(ids[0], Mat4::from_translation(Vec3::new(x, 0.0, 0.0)));
                tree.update();
                black_box(tree.world(ids[ids.len() - 1]))
            })
        });
        group.bench_function(format!("traverse_f{}_d{}", fanout, depth), |b| {
            b.iter(|| {
                let mut acc = Vec3::ZERO;
                tree.traverse(|_, world| acc += world.w_axis.truncate());
                black_box(acc)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
