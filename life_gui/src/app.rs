// app.rs - Window-side state around the Life grid

use std::time::{Duration, Instant};

use egui::Color32;
use life_core::{advance, patterns, Grid, LifeError, Pattern};

use crate::history::CycleWatch;
use crate::mode::{CellLayout, Mode};

const RANDOM_DENSITY: f64 = 0.33;

pub struct GameOfLife {
    pub grid: Grid,
    pub mode: Mode,
    pub layout: CellLayout,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,

    cycle_watch: CycleWatch,
    random_seed: u64,
}

impl GameOfLife {
    pub fn new(width: usize, height: usize, cell_size: f32, update_interval: Duration) -> Result<Self, LifeError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            mode: Mode::Seeding,
            layout: CellLayout::new(cell_size),
            last_update: Instant::now(),
            update_interval,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            cycle_watch: CycleWatch::default(),
            random_seed: 0,
        })
    }

    /// One frame's worth of work, decided by the current mode.
    ///
    /// Seeding applies a clicked cell; Running advances once the interval has elapsed.
    pub fn tick(&mut self, now: Instant, click: Option<(usize, usize)>) {
        match self.mode {
            Mode::Seeding => {
                if let Some((x, y)) = click {
                    match self.grid.toggle(x, y) {
                        Ok(alive) => log::debug!("cell ({x}, {y}) -> {alive}"),
                        Err(e) => log::warn!("ignored click: {e}"),
                    }
                }
            }
            Mode::Running => {
                if now.duration_since(self.last_update) >= self.update_interval {
                    self.step();
                    self.last_update = now;
                }
            }
        }
    }

    /// Advances one generation and pauses if the board has started repeating.
    pub fn step(&mut self) {
        advance(&mut self.grid);
        if self.cycle_watch.observe(&self.grid) && self.mode.is_running() {
            log::info!("pattern repeats at generation {}, pausing", self.grid.generation());
            self.set_mode(Mode::Seeding);
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            log::info!("{:?} -> {:?} at generation {}", self.mode, mode, self.grid.generation());
            self.mode = mode;
            if mode.is_running() {
                self.last_update = Instant::now();
            }
        }
    }

    pub fn toggle_running(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Replaces the board with an empty one of the same size.
    pub fn clear_grid(&mut self) {
        if let Some(grid) = self.blank_grid() {
            self.replace_grid(grid);
        }
    }

    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        let Some(mut grid) = self.blank_grid() else { return };
        match pattern.place_centered(&mut grid) {
            Ok(()) => {
                log::info!("applied {}", pattern.name);
                self.replace_grid(grid);
            }
            Err(e) => log::warn!("cannot apply {}: {e}", pattern.name),
        }
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            self.apply_pattern(pattern);
        }
    }

    pub fn apply_random_pattern(&mut self) {
        let Some(mut grid) = self.blank_grid() else { return };
        self.random_seed = self.random_seed.wrapping_add(1);
        match patterns::randomize(&mut grid, self.random_seed, RANDOM_DENSITY) {
            Ok(()) => self.replace_grid(grid),
            Err(e) => log::warn!("random fill failed: {e}"),
        }
    }

    fn blank_grid(&self) -> Option<Grid> {
        Grid::new(self.grid.width(), self.grid.height())
            .map_err(|e| log::error!("cannot allocate a new grid: {e}"))
            .ok()
    }

    fn replace_grid(&mut self, grid: Grid) {
        self.set_mode(Mode::Seeding);
        self.grid = grid;
        self.cycle_watch.reset();
    }
}
