//! The evolution rule: standard B3/S23 Conway life over a pixel raster.
//!
//! Cells are classified by exact equality against the canonical alive pixel;
//! the two canonical values below are the only ones the engine ever writes.
//! All functions here are stateless and read only the generation they are
//! given, which is what makes the double-buffered update sound: no cell's
//! next state can observe another cell's new value.

use crate::raster::PixelGrid;

/// Canonical pixel values, `0x00RRGGBB` layout.
pub const ALIVE: u32 = 0x00ff_ffff;
pub const DEAD: u32 = 0x0000_0000;

/// The 8 Moore-neighborhood offsets as (row, col) deltas.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Whether the cell holds the canonical alive pixel. (row, col) must be
/// within the grid extent.
pub fn is_alive(grid: &PixelGrid, row: usize, col: usize) -> bool {
    grid.pixel(row, col) == ALIVE
}

/// Count live neighbors of (row, col). Offsets falling outside the grid are
/// skipped entirely: the board does not wrap, and the void beyond the edge
/// contributes nothing.
pub fn live_neighbors(grid: &PixelGrid, row: usize, col: usize) -> u32 {
    let h = grid.height() as isize;
    let w = grid.width() as isize;

    let mut count = 0;
    for (dr, dc) in NEIGHBORS {
        let nr = row as isize + dr;
        let nc = col as isize + dc;

        if nr < 0 || nr >= h || nc < 0 || nc >= w {
            continue;
        }

        count += u32::from(is_alive(grid, nr as usize, nc as usize));
    }
    count
}

/// Next-generation value for one cell: birth on 3 neighbors, survival on
/// 2 or 3, death otherwise.
pub fn next_state(grid: &PixelGrid, row: usize, col: usize) -> u32 {
    let alive = is_alive(grid, row, col);
    let neighbors = live_neighbors(grid, row, col);

    if matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3)) {
        ALIVE
    } else {
        DEAD
    }
}

/// Fill `write` with the generation that follows `read`. The two grids must
/// have identical geometry; `read` is never touched.
pub fn compute_generation(read: &PixelGrid, write: &mut PixelGrid) {
    debug_assert_eq!((read.width(), read.height()), (write.width(), write.height()));

    for row in 0..read.height() {
        for col in 0..read.width() {
            write.put(row, col, next_state(read, row, col));
        }
    }
}
