use macroquad::prelude::*;

use trail_engine::Direction;

/// User intent translated from this frame's key presses.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    Steer(Direction),
    Restart,
    Quit,
}

/// Turns keyboard events into actions, most urgent first.
pub struct InputHandler;

impl InputHandler {
    pub fn poll() -> Vec<Action> {
        let mut actions = Vec::new();

        if is_key_pressed(KeyCode::Escape) {
            actions.push(Action::Quit);
        }

        if is_key_pressed(KeyCode::Up) {
            actions.push(Action::Steer(Direction::Up));
        }
        if is_key_pressed(KeyCode::Down) {
            actions.push(Action::Steer(Direction::Down));
        }
        if is_key_pressed(KeyCode::Left) {
            actions.push(Action::Steer(Direction::Left));
        }
        if is_key_pressed(KeyCode::Right) {
            actions.push(Action::Steer(Direction::Right));
        }

        if is_key_pressed(KeyCode::Space) {
            actions.push(Action::Restart);
        }

        actions
    }
}
