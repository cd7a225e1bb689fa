use criterion::{black_box, criterion_group, criterion_main, Criterion};

use artkit_core::Rect;
use artkit_scene::{visible_bounds, Group, PathLeaf, SceneNode};

fn wide_tree(leaves: usize) -> SceneNode {
    let children = (0..leaves)
        .map(|i| {
            let x = i as f64 * 3.0;
            SceneNode::Leaf(PathLeaf::new(Rect::new(x, 10.0, x + 2.0, 0.0)))
        })
        .collect();
    SceneNode::Group(Group::new(children))
}

fn deep_tree(depth: usize) -> SceneNode {
    let mut node = SceneNode::Leaf(PathLeaf::new(Rect::new(0.0, 1.0, 1.0, 0.0)));
    for _ in 0..depth {
        node = SceneNode::Group(Group::new(vec![node]));
    }
    node
}

fn bounds_benchmark(c: &mut Criterion) {
    let wide = wide_tree(1000);
    c.bench_function("visible_bounds_wide_1000", |b| {
        b.iter(|| visible_bounds(black_box(&wide)))
    });

    let deep = deep_tree(60);
    c.bench_function("visible_bounds_deep_60", |b| {
        b.iter(|| visible_bounds(black_box(&deep)))
    });
}

criterion_group!(benches, bounds_benchmark);
criterion_main!(benches);
