use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadtree::quadtree::QuadTree;
use quadtree::shapes::Rectangle;
use rand::prelude::*;

const WORLD: Rectangle = Rectangle {
    x: 0.0,
    y: 0.0,
    width: 1000.0,
    height: 1000.0,
};

fn random_shapes(rng: &mut StdRng, count: usize) -> Vec<Rectangle> {
    (0..count)
        .map(|_| Rectangle {
            x: rng.gen_range(0.0..995.0),
            y: rng.gen_range(0.0..995.0),
            width: 5.0,
            height: 5.0,
        })
        .collect()
}

fn insert_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(36207250);
    let shapes = random_shapes(&mut rng, 1000);
    let mut quadtree = QuadTree::new(WORLD, 0);

    c.bench_function("quadtree_insert_1000", |b| {
        b.iter(|| {
            quadtree.clear();
            for shape in &shapes {
                quadtree.insert(black_box(*shape));
            }
        })
    });
}

fn retrieve_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(36207250);
    let mut quadtree = QuadTree::new(WORLD, 0);
    for shape in random_shapes(&mut rng, 1000) {
        quadtree.insert(shape);
    }

    // Define a query rectangle
    let query = Rectangle {
        x: 400.0,
        y: 400.0,
        width: 200.0,
        height: 200.0,
    };

    c.bench_function("quadtree_retrieve", |b| {
        let mut candidates = Vec::new();
        b.iter(|| {
            candidates.clear();
            quadtree.retrieve_into(black_box(&query), &mut candidates);
        })
    });

    c.bench_function("quadtree_retrieve_overlapping", |b| {
        b.iter(|| quadtree.retrieve_overlapping(black_box(&query)))
    });
}

fn clear_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(36207250);
    let shapes = random_shapes(&mut rng, 1000);
    let mut populated = QuadTree::new(WORLD, 0);
    for shape in &shapes {
        populated.insert(*shape);
    }

    c.bench_function("quadtree_clear", |b| {
        b.iter_batched(
            || populated.clone(),
            |mut quadtree| quadtree.clear(),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    quadtree_benchmarks,
    insert_benchmark,
    retrieve_benchmark,
    clear_benchmark
);
criterion_main!(quadtree_benchmarks);
