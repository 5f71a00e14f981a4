// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::Vec3;
use glide_path::{CubicSegment, Path};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f32(&mut self) -> f32 {
        let v = self.next_u64() >> 40;
        (v as f32) / ((1u64 << 24) as f32)
    }
    fn next_vec3(&mut self, extent: f32) -> Vec3 {
        Vec3::new(
            (self.next_f32() - 0.5) * extent,
            (self.next_f32() - 0.5) * extent,
            (self.next_f32() - 0.5) * extent,
        )
    }
}

/// A connected chain of random segments.
fn gen_chain(count: usize, extent: f32) -> Vec<CubicSegment> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    let mut start = Vec3::ZERO;
    for _ in 0..count {
        let end = start + rng.next_vec3(extent);
        out.push(CubicSegment::new(
            start,
            start + rng.next_vec3(extent),
            end + rng.next_vec3(extent),
            end,
        ));
        start = end;
    }
    out
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("rebuild");
    let segs = gen_chain(8, 10.0);
    for &n in &[16usize, 200, 1000] {
        group.throughput(Throughput::Elements((segs.len() * n) as u64));
        group.bench_function(format!("set_segments_8x{}", n), |b| {
            b.iter_batched(
                || Path::with_resolution(n),
                |mut path| {
                    path.set_segments(&segs);
                    black_box(path.length());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    for &count in &[1usize, 4, 16] {
        let path = Path::from_segments(&gen_chain(count, 10.0));
        let us: Vec<f32> = (0..1024).map(|i| i as f32 / 1023.0).collect();
        group.throughput(Throughput::Elements(us.len() as u64));
        group.bench_function(format!("sample_segments{}", count), |b| {
            b.iter(|| {
                let mut acc = Vec3::ZERO;
                for &u in &us {
                    acc += path.sample(u);
                }
                black_box(acc)
            })
        });
        group.bench_function(format!("tangent_at_segments{}", count), |b| {
            b.iter(|| {
                let mut acc = Vec3::ZERO;
                for &u in &us {
                    acc += path.tangent_at(u);
                }
                black_box(acc)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rebuild, bench_sample);
criterion_main!(benches);
