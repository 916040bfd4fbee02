//! Benchmarks for the backtracking search.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench backtrack
//! ```

use std::str::FromStr as _;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use gridfill_core::Grid;
use gridfill_solver::solve;

const CLASSIC_PUZZLE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

fn bench_solve(c: &mut Criterion) {
    let puzzles = [
        ("classic", Grid::from_str(CLASSIC_PUZZLE).unwrap()),
        ("empty", Grid::new()),
    ];

    let mut group = c.benchmark_group("solve");
    for (param, puzzle) in puzzles {
        group.bench_function(param, |b| {
            b.iter_batched(
                || puzzle.clone(),
                |mut grid| {
                    solve(&mut grid).unwrap();
                    grid
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
