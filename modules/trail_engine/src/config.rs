use serde::{Deserialize, Serialize};

/// Fixed game constants, passed in at startup instead of living as globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub window_size: f32,
    pub cell_size: f32,
    pub respawn_secs: f64,
    pub starting_lives: u32,
    pub tick_hz: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_size: 600.0,
            cell_size: 30.0,
            respawn_secs: 3.0,
            starting_lives: 2,
            tick_hz: 20.0,
        }
    }
}

impl GameConfig {
    /// Cells per board side (20 with the default window and cell size).
    pub fn grid_count(&self) -> i32 {
        (self.window_size / self.cell_size) as i32
    }

    pub fn step_secs(&self) -> f64 {
        1.0 / self.tick_hz
    }
}
