// render.rs - Plain-text frame for the terminal shell

use std::fmt::Write;

use life_core::Grid;

pub const ALIVE: &str = "o ";
pub const DEAD: &str = "  ";

/// Header lines followed by one text line per grid row.
pub fn frame(grid: &Grid) -> String {
    let mut out = String::with_capacity(32 + grid.height() * (grid.width() * 2 + 1));
    let _ = writeln!(out, "Generation: {}", grid.generation());
    let _ = writeln!(out, "Population: {}", grid.population());
    for row in grid.rows() {
        for &alive in row {
            out.push_str(if alive { ALIVE } else { DEAD });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::advance;

    #[test]
    fn frame_layout() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(0, 0, true).unwrap();
        grid.set(2, 1, true).unwrap();
        assert_eq!(
            frame(&grid),
            "Generation: 0\nPopulation: 2\no     \n    o \n"
        );
    }

    #[test]
    fn frame_tracks_generation() {
        let mut grid = Grid::new(2, 2).unwrap();
        advance(&mut grid);
        advance(&mut grid);
        assert!(frame(&grid).starts_with("Generation: 2\nPopulation: 0\n"));
    }
}
