use trail_engine::GameConfig;

/// Pixel-space placement of the board grid.
pub struct BoardLayout {
    pub window_size: f32,
    pub cell_size: f32,
}

impl BoardLayout {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            window_size: config.window_size,
            cell_size: config.cell_size,
        }
    }

    /// Pixel center of a grid cell.
    pub fn cell_center(&self, cell: (i32, i32)) -> (f32, f32) {
        (
            cell.0 as f32 * self.cell_size + self.cell_size / 2.0,
            cell.1 as f32 * self.cell_size + self.cell_size / 2.0,
        )
    }

    /// The head and the food fill half the cell, body segments a third.
    pub fn head_radius(&self) -> f32 {
        self.cell_size / 2.0
    }

    pub fn body_radius(&self) -> f32 {
        self.cell_size / 3.0
    }
}
