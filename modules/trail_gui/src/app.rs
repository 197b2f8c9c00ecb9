use macroquad::logging::info;
use macroquad::prelude::*;
use macroquad::rand::gen_range;

use trail_engine::{GameConfig, GamePhase, GameSession};

use crate::input::{Action, InputHandler};
use crate::ui::{BoardLayout, Renderer};

/// Application layer: input, fixed-step simulation, rendering, every frame.
pub struct App {
    config: GameConfig,
    session: GameSession,
    step_timer: f64,
}

impl App {
    pub fn new() -> Self {
        let config = GameConfig::default();
        let session = GameSession::new(config.clone(), Self::rand_seed());
        Self {
            config,
            session,
            step_timer: 0.0,
        }
    }

    /// Called every display frame. Returns false on a quit request.
    pub fn tick(&mut self) -> bool {
        if !self.handle_input() {
            return false;
        }
        self.update(get_frame_time() as f64);
        self.render();
        true
    }

    // ─────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────
    fn handle_input(&mut self) -> bool {
        for action in InputHandler::poll() {
            match action {
                Action::Quit => return false,
                Action::Steer(direction) => {
                    // The session drops reversals and respawn-time input.
                    self.session.steer(direction);
                }
                Action::Restart => {
                    if self.session.phase() == GamePhase::GameOver {
                        info!("restarting session");
                        self.session.restart(Self::rand_seed());
                        self.step_timer = 0.0;
                    }
                }
            }
        }
        true
    }

    // ─────────────────────────────────────────────────────
    // Simulation at a fixed 20 Hz, independent of display rate
    // ─────────────────────────────────────────────────────
    fn update(&mut self, dt: f64) {
        let step = self.config.step_secs();
        self.step_timer += dt;
        while self.step_timer >= step {
            self.step_timer -= step;
            let before = self.session.phase();
            self.session.step(get_time());
            match (before, self.session.phase()) {
                (GamePhase::Playing, GamePhase::Respawning) => {
                    info!("wall hit, {} lives left", self.session.lives());
                }
                (GamePhase::Playing, GamePhase::GameOver) => {
                    info!("game over, final score {}", self.session.score());
                }
                _ => {}
            }
            if self.session.phase() != GamePhase::Playing {
                break;
            }
        }

        self.session.poll_respawn(get_time());
    }

    // ─────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────
    fn render(&self) {
        let layout = BoardLayout::new(&self.config);
        Renderer::draw_frame(&layout, &self.session, get_time());
    }

    fn rand_seed() -> u64 {
        gen_range(0, i32::MAX) as u64
    }
}
