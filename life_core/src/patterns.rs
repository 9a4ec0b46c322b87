// patterns.rs - Named starting patterns and random seeding

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{LifeError, Result};
use crate::grid::Grid;

/// A named pattern; `cells` are `(x, y)` offsets from the pattern's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

pub const PULSAR: Pattern = Pattern {
    name: "Pulsar",
    cells: &[
        // Top half
        (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
        (0, 2), (5, 2), (7, 2), (12, 2),
        (0, 3), (5, 3), (7, 3), (12, 3),
        (0, 4), (5, 4), (7, 4), (12, 4),
        (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
        // Bottom half (mirrored)
        (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
        (0, 8), (5, 8), (7, 8), (12, 8),
        (0, 9), (5, 9), (7, 9), (12, 9),
        (0, 10), (5, 10), (7, 10), (12, 10),
        (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
    ],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Glider Gun",
    cells: &[
        (24, 0),
        (22, 1), (24, 1),
        (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
        (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
        (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
        (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
        (10, 6), (16, 6), (24, 6),
        (11, 7), (15, 7),
        (12, 8), (13, 8),
    ],
};

pub const PATTERNS: &[Pattern] = &[
    GLIDER,
    BLINKER,
    TOAD,
    BEACON,
    BLOCK,
    PULSAR,
    R_PENTOMINO,
    GOSPER_GLIDER_GUN,
];

/// Looks a pattern up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// Bounding box as `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        let w = self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
        let h = self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
        (w, h)
    }

    /// Sets the pattern's cells alive with its top-left corner at `(x, y)`.
    ///
    /// Nothing is written unless the whole pattern fits.
    pub fn place(&self, grid: &mut Grid, x: usize, y: usize) -> Result<()> {
        let (w, h) = self.size();
        let fits = x.checked_add(w).is_some_and(|right| right <= grid.width())
            && y.checked_add(h).is_some_and(|bottom| bottom <= grid.height());
        if !fits {
            return Err(LifeError::OutOfBounds {
                x: x.saturating_add(w.saturating_sub(1)),
                y: y.saturating_add(h.saturating_sub(1)),
                width: grid.width(),
                height: grid.height(),
            });
        }

        for &(dx, dy) in self.cells {
            grid.set(x + dx, y + dy, true)?;
        }
        log::debug!("placed {} at ({x}, {y})", self.name);
        Ok(())
    }

    /// Places the pattern in the middle of the grid.
    pub fn place_centered(&self, grid: &mut Grid) -> Result<()> {
        let (w, h) = self.size();
        let x = grid.width().saturating_sub(w) / 2;
        let y = grid.height().saturating_sub(h) / 2;
        self.place(grid, x, y)
    }
}

/// Fills every cell alive with probability `density`, reproducibly for a given seed.
pub fn randomize(grid: &mut Grid, seed: u64, density: f64) -> Result<()> {
    let density = density.clamp(0.0, 1.0);
    let mut rng = StdRng::seed_from_u64(seed);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            grid.set(x, y, rng.gen_bool(density))?;
        }
    }
    log::debug!("randomized grid with seed {seed}, density {density:.2}");
    Ok(())
}
