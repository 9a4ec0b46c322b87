//! Conway's Game of Life on a fixed-size grid.
//!
//! A [`Grid`] holds the current generation plus a scratch buffer of the same
//! shape. [`advance`] computes every next state from the current buffer into
//! the scratch buffer and then swaps them, so a generation is always derived
//! from one consistent snapshot. Edges are clamped: neighbours that would lie
//! off the grid are simply not counted.
//!
//! ```
//! use life_core::{advance, patterns, Grid};
//!
//! let mut grid = Grid::new(5, 5)?;
//! patterns::BLINKER.place_centered(&mut grid)?;
//! advance(&mut grid);
//! assert!(grid.get(2, 1)? && grid.get(2, 3)?);
//! assert_eq!(grid.generation(), 1);
//! # Ok::<(), life_core::LifeError>(())
//! ```

pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;

pub use engine::{advance, advance_by, next_state};
pub use error::{LifeError, Result};
pub use grid::{Grid, MOORE_OFFSETS};
pub use patterns::Pattern;
