//! Benchmark the planning pipeline on room maps.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use marga::{
    CellClass, CoordinateFrame, GridCoord, GridDilator, GridPathfinder, OccupancyGrid,
    RoutePlanner, WorldPoint,
};

/// Walled room with an interior wall leaving a gap to the north.
fn room(size: usize) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(size, CoordinateFrame::centered(size, 2.0));
    let last = size as i32 - 1;

    for i in 0..size as i32 {
        grid.set_class(GridCoord::new(0, i), CellClass::Obstacle);
        grid.set_class(GridCoord::new(last, i), CellClass::Obstacle);
        grid.set_class(GridCoord::new(i, 0), CellClass::Obstacle);
        grid.set_class(GridCoord::new(i, last), CellClass::Obstacle);
    }
    let wall_col = (size * 5 / 8) as i32;
    for row in 0..=(size * 3 / 4) as i32 {
        grid.set_class(GridCoord::new(row, wall_col), CellClass::Obstacle);
    }

    grid
}

/// Start in the room's south-west quarter, goal behind the wall.
fn endpoints(size: usize) -> (WorldPoint, WorldPoint) {
    let quarter = size as f64 / 8.0;
    (
        WorldPoint::new(-quarter, -quarter),
        WorldPoint::new(1.5 * quarter, -1.5 * quarter),
    )
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [32usize, 128] {
        let mut grid = room(size);
        GridDilator::default().dilate(&mut grid);
        let (start, goal) = endpoints(size);
        let pathfinder = GridPathfinder::with_defaults();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter_batched(
                || grid.clone(),
                |mut g| black_box(pathfinder.find_path(&mut g, start, goal)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("route");

    for size in [32usize, 128] {
        let grid = room(size);
        let (start, goal) = endpoints(size);
        let planner = RoutePlanner::with_defaults();

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter_batched(
                || grid.clone(),
                |mut g| black_box(planner.plan(&mut g, start, goal)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_dilation(c: &mut Criterion) {
    let grid = room(128);
    let dilator = GridDilator::new(2);

    c.bench_function("dilate_128_margin_2", |b| {
        b.iter_batched(
            || grid.clone(),
            |mut g| black_box(dilator.dilate(&mut g)),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_search, bench_route, bench_dilation);
criterion_main!(benches);
