// history.rs - Recent-state ring used to pause once a pattern repeats

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use life_core::Grid;

const DEPTH: usize = 10;

#[derive(Debug, Default)]
pub struct CycleWatch {
    recent: VecDeque<u64>,
}

impl CycleWatch {
    pub fn reset(&mut self) {
        self.recent.clear();
    }

    /// Records `grid` and reports whether it matches one of the last few states.
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let hash = hash_cells(grid);
        if self.recent.contains(&hash) {
            return true;
        }
        if self.recent.len() == DEPTH {
            self.recent.pop_front();
        }
        self.recent.push_back(hash);
        false
    }
}

fn hash_cells(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.cells().hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_core::{advance, patterns};

    #[test]
    fn still_life_repeats_next_generation() {
        let mut grid = Grid::new(6, 6).unwrap();
        patterns::BLOCK.place_centered(&mut grid).unwrap();
        let mut watch = CycleWatch::default();
        advance(&mut grid);
        assert!(!watch.observe(&grid));
        advance(&mut grid);
        assert!(watch.observe(&grid));
    }

    #[test]
    fn blinker_repeats_after_two() {
        let mut grid = Grid::new(5, 5).unwrap();
        patterns::BLINKER.place_centered(&mut grid).unwrap();
        let mut watch = CycleWatch::default();
        for _ in 0..2 {
            advance(&mut grid);
            assert!(!watch.observe(&grid));
        }
        advance(&mut grid);
        assert!(watch.observe(&grid));
    }

    #[test]
    fn glider_does_not_repeat_while_moving() {
        let mut grid = Grid::new(30, 30).unwrap();
        patterns::GLIDER.place(&mut grid, 0, 0).unwrap();
        let mut watch = CycleWatch::default();
        for _ in 0..40 {
            advance(&mut grid);
            assert!(!watch.observe(&grid));
        }
    }

    #[test]
    fn reset_forgets() {
        let grid = Grid::new(3, 3).unwrap();
        let mut watch = CycleWatch::default();
        watch.observe(&grid);
        watch.reset();
        assert!(!watch.observe(&grid));
    }
}
