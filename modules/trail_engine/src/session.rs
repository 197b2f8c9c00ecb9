use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::direction::Direction;
use crate::grid::Grid;
use crate::trail::Trail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Respawning,
    GameOver,
}

/// One run of the game: the trail, the food cell, score, lives, and the
/// Playing / Respawning / GameOver phase machine. Owns its RNG; time comes
/// in as an argument so tests never wait on a real clock.
pub struct GameSession {
    config: GameConfig,
    grid: Grid,
    trail: Trail,
    rng: ChaCha8Rng,
    food: (i32, i32),
    score: u32,
    lives: u32,
    phase: GamePhase,
}

impl GameSession {
    const FOOD_SAMPLE_LIMIT_FACTOR: usize = 4;

    pub fn new(config: GameConfig, seed: u64) -> Self {
        let grid = Grid::new(config.grid_count());
        let trail = Trail::new(grid.center(), config.respawn_secs);
        let mut session = Self {
            grid,
            trail,
            rng: ChaCha8Rng::seed_from_u64(seed),
            food: (0, 0),
            score: 0,
            lives: config.starting_lives,
            phase: GamePhase::Playing,
            config,
        };
        session.spawn_food();
        session
    }

    // ─────────────────────────────────────────────────────
    // Read accessors
    // ─────────────────────────────────────────────────────
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn food(&self) -> (i32, i32) {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn respawn_remaining(&self, now: f64) -> f64 {
        self.trail.respawn_remaining(now)
    }

    // ─────────────────────────────────────────────────────
    // Input policy
    // ─────────────────────────────────────────────────────
    /// Set the heading. Dropped while not playing, and dropped when the
    /// request is the exact reverse of the current heading, which would let
    /// the head step straight into the segment behind it.
    pub fn steer(&mut self, direction: Direction) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if direction.is_opposite(self.trail.heading()) {
            return;
        }
        self.trail.set_heading(direction);
    }

    // ─────────────────────────────────────────────────────
    // Simulation
    // ─────────────────────────────────────────────────────
    /// One fixed-rate step: advance the trail, then resolve wall, self and
    /// food collisions in that order. No-op outside the Playing phase.
    pub fn step(&mut self, now: f64) {
        if self.phase != GamePhase::Playing {
            return;
        }

        self.trail.advance();
        let head = self.trail.head();

        if !self.grid.in_bounds(head) {
            self.lives -= 1;
            if self.lives > 0 {
                self.trail.start_respawn(now);
                self.phase = GamePhase::Respawning;
            } else {
                self.phase = GamePhase::GameOver;
            }
        } else if self.trail.positions().iter().skip(1).any(|&cell| cell == head) {
            self.phase = GamePhase::GameOver;
        } else if head == self.food {
            self.trail.grow();
            self.score += 1;
            self.spawn_food();
        }
    }

    /// Checked every frame in every phase. On respawn completion the trail
    /// is back at the center, so the food gets a fresh unoccupied cell.
    pub fn poll_respawn(&mut self, now: f64) -> bool {
        if self.trail.check_respawn_complete(now) {
            self.phase = GamePhase::Playing;
            self.spawn_food();
            true
        } else {
            false
        }
    }

    /// Rebuild the session wholesale: fresh trail, food, score and lives.
    pub fn restart(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.trail = Trail::new(self.grid.center(), self.config.respawn_secs);
        self.score = 0;
        self.lives = self.config.starting_lives;
        self.phase = GamePhase::Playing;
        self.spawn_food();
    }

    // ─────────────────────────────────────────────────────
    // Test hooks
    // ─────────────────────────────────────────────────────
    pub fn debug_set_trail(&mut self, cells_head_first: &[(i32, i32)], heading: Direction) {
        self.trail.debug_set(cells_head_first, heading);
        self.phase = GamePhase::Playing;
    }

    pub fn debug_set_food(&mut self, x: i32, y: i32) {
        self.food = (x, y);
    }

    // ─────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────
    /// Rejection-sample an unoccupied cell. Bounded: after enough misses,
    /// scan for the first free cell instead. A completely full board leaves
    /// the food in place; the run ends before the trail can fill the board.
    fn spawn_food(&mut self) {
        let count = self.grid.count();
        for _ in 0..self.grid.cell_count() * Self::FOOD_SAMPLE_LIMIT_FACTOR {
            let cell = (self.rng.gen_range(0..count), self.rng.gen_range(0..count));
            if !self.trail.contains(cell) {
                self.food = cell;
                return;
            }
        }
        for idx in 0..self.grid.cell_count() {
            let cell = self.grid.from_index(idx);
            if !self.trail.contains(cell) {
                self.food = cell;
                return;
            }
        }
    }
}
