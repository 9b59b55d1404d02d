//! Row-0 results checked against independent reference computations.

use gridbench::{GRID_DIM, Grid, Row, SeedPolicy, run_with_grid};

/// Exact sum in i128, reduced mod 2^32 at the end. Only valid while the
/// accumulator fits in i128, i.e. a few dozen doublings.
fn exact_reference(grid: &Grid, iterations: u64) -> Row {
    std::array::from_fn(|j| {
        let mut acc = grid.row(0)[j] as i128;
        for i in 0..iterations {
            let src = (i % GRID_DIM as u64) as usize;
            acc += if src == 0 { acc } else { grid.row(src)[j] as i128 };
        }
        acc as i32
    })
}

/// 64-bit wrapping model truncated to 32 bits. Wrapping mod 2^64 agrees with
/// wrapping mod 2^32 in the low half, so this holds for any count.
fn wide_reference(grid: &Grid, iterations: u64) -> Row {
    let mut acc: [i64; GRID_DIM] = std::array::from_fn(|j| grid.row(0)[j] as i64);
    for i in 0..iterations {
        let src = (i % GRID_DIM as u64) as usize;
        for (j, a) in acc.iter_mut().enumerate() {
            let add = if src == 0 { *a } else { grid.row(src)[j] as i64 };
            *a = a.wrapping_add(add);
        }
    }
    acc.map(|a| a as i32)
}

#[test]
fn sixteen_iterations_equal_closed_form() {
    let grid = Grid::seeded(SeedPolicy::Fixed(2024));

    // One full cycle: row 0 doubles once, then rows 1..16 each add once.
    let closed: Row = std::array::from_fn(|j| {
        let tail: i128 = (1..GRID_DIM).map(|r| grid.row(r)[j] as i128).sum();
        (2 * grid.row(0)[j] as i128 + tail) as i32
    });

    let report = run_with_grid(grid, 16);
    assert_eq!(report.row, closed);
    assert_eq!(report.row, exact_reference(&grid, 16));
}

#[test]
fn exact_reference_agrees_across_several_cycles() {
    let grid = Grid::seeded(SeedPolicy::Fixed(77));
    for iterations in [1, 2, 15, 17, 48, 80] {
        let report = run_with_grid(grid, iterations);
        assert_eq!(report.row, exact_reference(&grid, iterations), "n={iterations}");
    }
}

#[test]
fn long_runs_match_wide_wrapping_model() {
    let grid = Grid::seeded(SeedPolicy::Fixed(31337));
    for iterations in [1_000, 4_099, 65_536] {
        let report = run_with_grid(grid, iterations);
        assert_eq!(report.row, wide_reference(&grid, iterations), "n={iterations}");
    }
}

#[test]
fn columns_are_independent() {
    let mut cells = [[0; GRID_DIM]; GRID_DIM];
    for row in cells.iter_mut() {
        row[3] = 5;
    }
    let mut grid = Grid::from_rows(cells);
    grid.accumulate(1_000);

    for (j, value) in grid.accumulator().iter().enumerate() {
        if j != 3 {
            assert_eq!(*value, 0, "column {j}");
        }
    }
    assert_ne!(grid.accumulator()[3], 0);
}

#[test]
fn accumulation_wraps_instead_of_panicking() {
    let mut grid = Grid::from_rows([[i32::MAX; GRID_DIM]; GRID_DIM]);

    // MAX doubled wraps to -2; debug builds would panic on a plain `+`.
    grid.accumulate(1);
    assert_eq!(grid.accumulator(), &[-2; GRID_DIM]);
}
