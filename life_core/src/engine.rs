// engine.rs - Generation advance for Conway's Game of Life (B3/S23)

use crate::grid::{count_live, Grid};

/// B3/S23: what a cell becomes given its current state and live neighbour count.
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Advances `grid` by exactly one generation.
///
/// Every next state is computed from the current buffer into the scratch
/// buffer; only after the whole grid has been scanned are the two swapped,
/// so no reader ever sees a half-updated generation.
pub fn advance(grid: &mut Grid) {
    let (width, height) = (grid.width(), grid.height());
    let (cells, scratch) = grid.buffers_mut();

    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            let neighbors = count_live(cells, width, height, x, y);
            scratch[i] = next_state(cells[i], neighbors);
        }
    }

    grid.commit();
    log::trace!("advanced to generation {}", grid.generation());
}

/// Runs `generations` successive advances.
pub fn advance_by(grid: &mut Grid, generations: u64) {
    for _ in 0..generations {
        advance(grid);
    }
}
