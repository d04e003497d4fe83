//! Solver benchmarks over reference puzzles.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use deduku_core::Grid;
use deduku_solver::{Outcome, TechniqueSolver};

const EASY: &str = "
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

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_easy", |b| {
        b.iter(|| black_box(EASY).parse::<Grid>().unwrap());
    });
}

fn bench_solve_easy(c: &mut Criterion) {
    let grid: Grid = EASY.parse().unwrap();
    let solver = TechniqueSolver::with_all_techniques();
    c.bench_function("solve_easy", |b| {
        b.iter(|| {
            let mut grid = black_box(&grid).clone();
            let (outcome, _stats) = solver.solve(&mut grid);
            assert_eq!(outcome, Outcome::Solved);
            grid
        });
    });
}

fn bench_stuck_empty(c: &mut Criterion) {
    let solver = TechniqueSolver::with_all_techniques();
    c.bench_function("fixed_point_empty", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            solver.solve(black_box(&mut grid))
        });
    });
}

criterion_group!(benches, bench_parse, bench_solve_easy, bench_stuck_empty);
criterion_main!(benches);
