// mode.rs - Seeding/Running state and pointer-to-cell mapping

/// What a tick does: edit cells, or advance generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Seeding,
    Running,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Seeding => Mode::Running,
            Mode::Running => Mode::Seeding,
        }
    }

    pub fn is_running(self) -> bool {
        self == Mode::Running
    }
}

/// Pixel geometry of the drawn board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLayout {
    pub cell_size: f32,
    pub spacing: f32,
}

impl CellLayout {
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size, spacing: 0.5 }
    }

    /// Distance between the top-left corners of adjacent cells.
    pub fn pitch(&self) -> f32 {
        self.cell_size + self.spacing
    }

    /// Board size in pixels for a `width` x `height` grid.
    pub fn board_size(&self, width: usize, height: usize) -> (f32, f32) {
        (
            self.pitch() * width as f32 - self.spacing,
            self.pitch() * height as f32 - self.spacing,
        )
    }

    /// Top-left pixel offset of cell `(x, y)` from the board origin.
    pub fn cell_origin(&self, x: usize, y: usize) -> (f32, f32) {
        (x as f32 * self.pitch(), y as f32 * self.pitch())
    }

    /// Cell under a pointer offset from the board origin.
    ///
    /// `None` off the board and in the gutter between cells.
    pub fn cell_at(&self, px: f32, py: f32, width: usize, height: usize) -> Option<(usize, usize)> {
        if !(px >= 0.0 && py >= 0.0) {
            return None;
        }
        let pitch = self.pitch();
        let (x, y) = ((px / pitch) as usize, (py / pitch) as usize);
        if x >= width || y >= height {
            return None;
        }
        let in_cell = px - x as f32 * pitch < self.cell_size && py - y as f32 * pitch < self.cell_size;
        in_cell.then_some((x, y))
    }
}
