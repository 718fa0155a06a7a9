use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexgrid::{GridConfig, GridShape, HexagonGrid, Orientation, Point2};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid-population");
    group.sample_size(10);

    let config = GridConfig {
        size: 16,
        orientation: Orientation::PointyTop,
        shape: GridShape::Rectangular {
            width: 200,
            height: 200,
        },
    };
    group.bench_function("populate 200x200", |b| {
        b.iter(|| HexagonGrid::from_config(black_box(config)))
    });

    let grid = HexagonGrid::from_config(config).unwrap();
    group.bench_function("cell_at", |b| {
        b.iter(|| grid.cell_at(black_box(Point2::new(1234.5, 987.6))))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
