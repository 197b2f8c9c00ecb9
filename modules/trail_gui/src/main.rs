//! Star Trail - a snake-style arcade game with star-shaped segments.
//!
//! Module structure:
//! - app: per-frame orchestration (input, fixed-step simulation, drawing)
//! - input: keyboard event translation
//! - ui: layout math and rendering
//!
//! The rules live in the `trail_engine` crate and know nothing about the UI.

mod app;
mod input;
mod ui;

use macroquad::prelude::*;
use trail_engine::GameConfig;

fn window_conf() -> Conf {
    let config = GameConfig::default();
    Conf {
        window_title: "Star Trail".to_owned(),
        window_width: config.window_size as i32,
        window_height: config.window_size as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut app = app::App::new();
    loop {
        if !app.tick() {
            break;
        }
        next_frame().await;
    }
}
