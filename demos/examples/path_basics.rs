// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path basics.
//!
//! Build a lopsided segment and compare stepping by raw `t` with stepping by arc length.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p glide_demos --example path_basics`

use glam::Vec3;
use glide_path::{CubicSegment, Path};

fn main() {
    env_logger::init();

    // Handles bunched near the start: raw t crawls, then sprints.
    let seg = CubicSegment::new(
        Vec3::ZERO,
        Vec3::new(0.2, 0.0, 0.0),
        Vec3::new(0.4, 1.0, 0.0),
        Vec3::new(6.0, 0.0, 0.0),
    );
    let mut path = Path::with_resolution(128);
    path.set_segments(&[seg]);
    println!("path length: {:.4}", path.length());

    println!("{:>5} {:>10} {:>10}", "step", "by t", "by u");
    for i in 0..10 {
        let a = i as f32 / 10.0;
        let b = (i + 1) as f32 / 10.0;
        let by_t = seg.position(a).distance(seg.position(b));
        let by_u = path.sample(a).distance(path.sample(b));
        println!("{:>5} {:>10.4} {:>10.4}", i, by_t, by_u);
    }

    // The same path from flat coordinates, as a loader would supply it.
    let coords = [
        0.0, 0.0, 0.0, 0.2, 0.0, 0.0, 0.4, 1.0, 0.0, 6.0, 0.0, 0.0, //
    ];
    let mut loaded = Path::new();
    match loaded.set_coords(&coords) {
        Ok(()) => println!("loaded {} segment(s)", loaded.segments().len()),
        Err(e) => println!("rejected: {e}"),
    }
    if let Err(e) = loaded.set_coords(&coords[..7]) {
        println!("rejected: {e}");
    }

    let tangent = path.tangent_at(0.5);
    println!("tangent at u = 0.5: {tangent:?}");
    println!("polyline points: {}", path.polyline().count());
}
