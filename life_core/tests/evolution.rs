use life_core::patterns::{BEACON, BLINKER, BLOCK, GLIDER, GOSPER_GLIDER_GUN, PULSAR, TOAD};
use life_core::{advance, advance_by, Grid, Pattern};

fn alive(grid: &Grid) -> Vec<(usize, usize)> {
    grid.iter().filter(|&(_, _, a)| a).map(|(x, y, _)| (x, y)).collect()
}

fn seeded(width: usize, height: usize, cells: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    for &(x, y) in cells {
        grid.set(x, y, true).unwrap();
    }
    grid
}

fn placed(width: usize, height: usize, pattern: &Pattern, x: usize, y: usize) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    pattern.place(&mut grid, x, y).unwrap();
    grid
}

#[test]
fn block_is_a_still_life() {
    let mut grid = placed(6, 6, &BLOCK, 2, 2);
    let start = alive(&grid);
    advance_by(&mut grid, 10);
    assert_eq!(alive(&grid), start);
    assert_eq!(grid.generation(), 10);
}

#[test]
fn block_in_the_origin_corner_survives() {
    let mut grid = placed(5, 5, &BLOCK, 0, 0);
    advance(&mut grid);
    assert_eq!(alive(&grid), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
}

#[test]
fn isolated_cell_dies() {
    let mut grid = seeded(5, 5, &[(2, 2)]);
    advance(&mut grid);
    assert_eq!(grid.population(), 0);
}

#[test]
fn pair_dies() {
    let mut grid = seeded(5, 5, &[(1, 1), (2, 1)]);
    advance(&mut grid);
    assert_eq!(grid.population(), 0);
}

#[test]
fn dead_cell_with_three_neighbours_is_born() {
    // L-tromino: (2,2) has exactly three live neighbours.
    let mut grid = seeded(5, 5, &[(1, 1), (2, 1), (1, 2)]);
    assert_eq!(grid.live_neighbors(2, 2).unwrap(), 3);
    advance(&mut grid);
    assert!(grid.get(2, 2).unwrap());
}

#[test]
fn overcrowded_cell_dies() {
    // Centre of a plus sign has four neighbours.
    let mut grid = seeded(5, 5, &[(2, 2), (2, 1), (1, 2), (3, 2), (2, 3)]);
    advance(&mut grid);
    assert!(!grid.get(2, 2).unwrap());
}

#[test]
fn blinker_has_period_two() {
    let mut grid = placed(5, 5, &BLINKER, 1, 2);
    let horizontal = alive(&grid);
    assert_eq!(horizontal, vec![(1, 2), (2, 2), (3, 2)]);

    advance(&mut grid);
    assert_eq!(alive(&grid), vec![(2, 1), (2, 2), (2, 3)]);

    advance(&mut grid);
    assert_eq!(alive(&grid), horizontal);
    assert_eq!(grid.generation(), 2);
}

#[test]
fn other_oscillators_return() {
    for (pattern, period) in [(&TOAD, 2), (&BEACON, 2), (&PULSAR, 3)] {
        let mut grid = Grid::new(21, 21).unwrap();
        pattern.place_centered(&mut grid).unwrap();
        let start = alive(&grid);

        advance(&mut grid);
        assert_ne!(alive(&grid), start, "{} did not move", pattern.name);
        advance_by(&mut grid, period - 1);
        assert_eq!(alive(&grid), start, "{} period", pattern.name);
    }
}

#[test]
fn glider_translates_diagonally() {
    let mut grid = placed(10, 10, &GLIDER, 1, 1);
    let start = alive(&grid);
    advance_by(&mut grid, 4);
    let shifted: Vec<_> = start.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
    assert_eq!(alive(&grid), shifted);
}

#[test]
fn gun_emits_gliders() {
    let mut grid = placed(80, 80, &GOSPER_GLIDER_GUN, 1, 1);
    assert_eq!(grid.population(), 36);
    advance_by(&mut grid, 60);
    // The gun never reaches below row 12; anything there is a released glider.
    assert!(grid.population() > 36);
    assert!(grid.iter().any(|(_, y, a)| a && y > 14));
}

#[test]
fn dead_grid_stays_dead_and_counts_generations() {
    let mut grid = Grid::new(8, 3).unwrap();
    for expected in 1..=4 {
        advance(&mut grid);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), expected);
    }
}

#[test]
fn origin_has_three_candidate_neighbours() {
    let mut grid = Grid::new(5, 5).unwrap();
    let positions = grid.neighbor_positions(0, 0).unwrap();
    assert_eq!(positions.len(), 3);

    for (x, y) in positions {
        grid.set(x, y, true).unwrap();
    }
    // Fill the far edges as well; they are not neighbours of the origin.
    for i in 0..5 {
        grid.set(4, i, true).unwrap();
        grid.set(i, 4, true).unwrap();
    }
    assert_eq!(grid.live_neighbors(0, 0).unwrap(), 3);
}

#[test]
fn reads_between_advances_are_stable() {
    let mut grid = placed(7, 7, &GLIDER, 2, 2);
    advance(&mut grid);
    let snapshot = grid.clone();
    let population = grid.population();
    for _ in 0..5 {
        assert_eq!(grid.population(), population);
        assert_eq!(grid.generation(), 1);
        assert_eq!(grid.get(3, 3).unwrap(), snapshot.get(3, 3).unwrap());
    }
    assert_eq!(grid, snapshot);
}
