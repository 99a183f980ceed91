use common::shapes::Rectangle;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadtree::QuadTree;
use rand::prelude::*;

fn random_rects(count: usize, region: &Rectangle) -> Vec<Rectangle> {
    let mut rng = StdRng::seed_from_u64(1);
    (0..count)
        .map(|_| region.get_random_rect_inside(5.0, 5.0, &mut rng))
        .collect()
}

fn rebuild_benchmark(c: &mut Criterion) {
    let region = Rectangle::new(0.0, 0.0, 1000.0, 1000.0);
    let rects = random_rects(1000, &region);
    let mut quadtree = QuadTree::new(region).unwrap();

    c.bench_function("quadtree_rebuild_1000", |b| {
        b.iter(|| {
            quadtree.clear();
            for (i, rect) in rects.iter().enumerate() {
                quadtree.insert(black_box(i as u32), rect);
            }
        })
    });
}

fn query_benchmark(c: &mut Criterion) {
    let region = Rectangle::new(0.0, 0.0, 1000.0, 1000.0);
    let rects = random_rects(1000, &region);
    let mut quadtree = QuadTree::new(region).unwrap();
    for (i, rect) in rects.iter().enumerate() {
        quadtree.insert(i as u32, rect);
    }

    let query = Rectangle::new(40.0, 40.0, 20.0, 20.0);
    let mut collisions: Vec<u32> = Vec::new();
    c.bench_function("quadtree_query", |b| {
        b.iter(|| {
            collisions.clear();
            quadtree.query(black_box(&query), &mut collisions);
        })
    });
}

criterion_group!(quadtree_benchmarks, rebuild_benchmark, query_benchmark);
criterion_main!(quadtree_benchmarks);
