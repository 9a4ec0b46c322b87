// grid.rs - Double-buffered cell storage for Conway's Game of Life

use std::fmt;

use crate::error::{LifeError, Result};

/// The eight Moore offsets as `(dx, dy)`, row by row.
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Fixed-size Life grid.
///
/// `cells` is the authoritative row-major state, indexed `y * width + x`.
/// `scratch` has the same length and only carries meaning while
/// [`crate::engine::advance`] is running; it is never exposed.
#[derive(Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    scratch: Vec<bool>,
    generation: u64,
}

impl Grid {
    /// Creates an all-dead grid at generation 0.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }
        let area = width
            .checked_mul(height)
            .ok_or(LifeError::AllocationFailure { cells: usize::MAX })?;

        let cells = dead_buffer(area)?;
        let scratch = dead_buffer(area)?;
        log::debug!("created {width}x{height} grid");

        Ok(Self {
            width,
            height,
            cells,
            scratch,
            generation: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, x: usize, y: usize) -> Result<bool> {
        let i = self.index(x, y)?;
        Ok(self.cells[i])
    }

    /// Seeds or clears one cell. The engine never goes through here.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        let i = self.index(x, y)?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool> {
        let i = self.index(x, y)?;
        self.cells[i] = !self.cells[i];
        Ok(self.cells[i])
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Read-only row-major view of the current state.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Every cell as `(x, y, alive)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &alive)| (i % width, i / width, alive))
    }

    /// In-bounds Moore neighbours of `(x, y)`: 3 at a corner, 5 on an edge, 8 inside.
    pub fn neighbor_positions(&self, x: usize, y: usize) -> Result<Vec<(usize, usize)>> {
        self.index(x, y)?;
        Ok(MOORE_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| offset(x, y, dx, dy, self.width, self.height))
            .collect())
    }

    pub fn live_neighbors(&self, x: usize, y: usize) -> Result<u8> {
        self.index(x, y)?;
        Ok(count_live(&self.cells, self.width, self.height, x, y))
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    /// Current state for reading alongside the scratch buffer for writing.
    pub(crate) fn buffers_mut(&mut self) -> (&[bool], &mut [bool]) {
        (&self.cells, &mut self.scratch)
    }

    /// Makes the fully written scratch buffer current and bumps the generation.
    pub(crate) fn commit(&mut self) {
        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.generation == other.generation
            && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("generation", &self.generation)
            .field("population", &self.population())
            .finish_non_exhaustive()
    }
}

fn dead_buffer(len: usize) -> Result<Vec<bool>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| LifeError::AllocationFailure { cells: len })?;
    buf.resize(len, false);
    Ok(buf)
}

#[inline]
fn offset(x: usize, y: usize, dx: isize, dy: isize, width: usize, height: usize) -> Option<(usize, usize)> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    (nx < width && ny < height).then_some((nx, ny))
}

/// Alive Moore neighbours of an in-bounds `(x, y)`; off-grid positions are skipped.
#[inline]
pub(crate) fn count_live(cells: &[bool], width: usize, height: usize, x: usize, y: usize) -> u8 {
    let mut count = 0;
    for &(dx, dy) in &MOORE_OFFSETS {
        if let Some((nx, ny)) = offset(x, y, dx, dy, width, height) {
            if cells[ny * width + nx] { count += 1; }
        }
    }
    count
}
