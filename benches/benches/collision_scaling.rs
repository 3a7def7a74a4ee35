// Copyright 2025 the Dashgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dashgrid_collision::{CollisionEngine, CollisionPolicy, Widget};
use dashgrid_quadtree::{QuadTree, Rect};

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
    fn in_range(&mut self, lo: i32, hi: i32) -> i32 {
        lo + (self.next_u64() % (hi - lo) as u64) as i32
    }
}

fn gen_tiled_rects(n: i32) -> Vec<Rect> {
    let mut out = Vec::with_capacity((n * n) as usize);
    for y in 0..n {
        for x in 0..n {
            out.push(Rect::new(x, y, 1, 1));
        }
    }
    out
}

fn gen_scattered_rects(side: i32, count: usize, seed: u64) -> Vec<Rect> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let w = rng.in_range(1, 4);
        let h = rng.in_range(1, 4);
        out.push(Rect::new(
            rng.in_range(0, side - w),
            rng.in_range(0, side - h),
            w,
            h,
        ));
    }
    out
}

fn brute_force_hits(items: &[Rect], region: &Rect) -> usize {
    items.iter().filter(|r| r.intersects(region)).count()
}

fn bench_quadtree_vs_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_vs_linear");
    for &n in &[8i32, 16, 32] {
        let rects = gen_tiled_rects(n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("quadtree_build_query_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::<u32>::new(Rect::new(0, 0, n, n)),
                |mut tree| {
                    for (i, r) in rects.iter().copied().enumerate() {
                        let _ = tree.insert(r, i as u32);
                    }
                    let mut hits = 0usize;
                    for q in 0..64 {
                        let region = Rect::new(q % n, (q * 7) % n, 3, 3);
                        hits += tree.query(&region).len();
                    }
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("linear_scan_query_n{}", n), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for q in 0..64 {
                    let region = Rect::new(q % n, (q * 7) % n, 3, 3);
                    hits += brute_force_hits(&rects, &region);
                }
                black_box(hits);
            })
        });
    }
    group.finish();
}

fn bench_detect_collision(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_collision");
    let widgets: Vec<Widget> = gen_tiled_rects(10)
        .into_iter()
        .enumerate()
        .map(|(i, r)| Widget::new(format!("w{}", i), "bench", r))
        .collect();
    let engine =
        CollisionEngine::from_descriptor(widgets, "10x10", CollisionPolicy::default()).unwrap();
    group.throughput(Throughput::Elements(100));
    group.bench_function("hundred_queries_full_grid", |b| {
        b.iter(|| {
            let mut collisions = 0usize;
            for i in 0..100i32 {
                let hit = engine
                    .detect_collision(Rect::new(i % 9, i / 12, 2, 2), None)
                    .unwrap();
                collisions += usize::from(hit.has_collision);
            }
            black_box(collisions);
        })
    });
    group.finish();
}

fn bench_push_widgets(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_widgets");
    let rects = gen_scattered_rects(16, 48, 0xDA5B_BE4C_0000_0001);
    let widgets: Vec<Widget> = rects
        .into_iter()
        .enumerate()
        .map(|(i, r)| Widget::new(format!("w{}", i), "bench", r))
        .collect();
    let engine =
        CollisionEngine::from_descriptor(widgets, "16x16", CollisionPolicy::default()).unwrap();
    group.bench_function("push_into_cluster", |b| {
        b.iter(|| {
            let out = engine
                .push_widgets("w0", Rect::new(6, 6, 4, 4))
                .unwrap();
            black_box(out.widgets.len());
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_quadtree_vs_linear,
    bench_detect_collision,
    bench_push_widgets,
);
criterion_main!(benches);
