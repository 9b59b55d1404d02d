//! The 16×16 value grid and its accumulation loop.
//!
//! Cells are `i32`, the width of C `int`. Accumulation uses
//! [`i32::wrapping_add`], so overflow wraps two's-complement in every build
//! profile instead of panicking under debug assertions. Row 0 grows far past
//! `i32::MAX` within a few dozen passes, so wrapping is the normal case, not an
//! edge case.

use crate::config::SeedPolicy;

/// Side length of the grid.
pub const GRID_DIM: usize = 16;

/// One row of the grid.
pub type Row = [i32; GRID_DIM];

/// Fixed 16×16 grid of integers. Row 0 is the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [Row; GRID_DIM],
}

impl Grid {
    /// All-zero grid.
    pub fn new() -> Self {
        Self {
            cells: [[0; GRID_DIM]; GRID_DIM],
        }
    }

    /// Wrap explicit contents.
    pub fn from_rows(cells: [Row; GRID_DIM]) -> Self {
        Self { cells }
    }

    /// Fill row-major from `rng`, each cell drawn from `0..=i32::MAX`
    /// (the range of C `rand()`).
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        let mut grid = Self::new();
        for row in grid.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = rng.i32(0..=i32::MAX);
            }
        }
        grid
    }

    /// Fill from a generator built per `seed`.
    pub fn seeded(seed: SeedPolicy) -> Self {
        Self::random(&mut seed.rng())
    }

    /// Run `iterations` passes of `grid[0][j] = grid[i % 16][j] + grid[0][j]`.
    ///
    /// When `i % 16 == 0` the source row is row 0 itself, so the accumulator
    /// doubles. Rows 1..16 are never written.
    pub fn accumulate(&mut self, iterations: u64) {
        let cells = &mut self.cells;
        for i in 0..iterations {
            let src = cells[(i % GRID_DIM as u64) as usize];
            for (acc, add) in cells[0].iter_mut().zip(src) {
                *acc = add.wrapping_add(*acc);
            }
        }
    }

    /// Row `r`. Panics if `r >= 16`.
    pub fn row(&self, r: usize) -> &Row {
        &self.cells[r]
    }

    /// Row 0.
    pub fn accumulator(&self) -> &Row {
        &self.cells[0]
    }

    pub fn rows(&self) -> &[Row; GRID_DIM] {
        &self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
