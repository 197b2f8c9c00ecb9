use macroquad::prelude::*;

use trail_engine::{star_polygon, GamePhase, GameSession};

use super::layout::BoardLayout;

/// Rendering context, responsible for all drawing.
pub struct Renderer;

impl Renderer {
    const FOOD_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    const TEXT_FG: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    const HUD_FONT_SIZE: f32 = 28.0;

    pub fn draw_frame(layout: &BoardLayout, session: &GameSession, now: f64) {
        clear_background(BLACK);

        // Trail, head first, each segment in its own rainbow color.
        let trail = session.trail();
        for (i, &cell) in trail.positions().iter().enumerate() {
            let radius = if i == 0 {
                layout.head_radius()
            } else {
                layout.body_radius()
            };
            let (r, g, b) = trail.color_at(i);
            Self::draw_star(layout.cell_center(cell), radius, Color::from_rgba(r, g, b, 255));
        }

        // Food, head-sized in the fixed accent color.
        Self::draw_star(
            layout.cell_center(session.food()),
            layout.head_radius(),
            Self::FOOD_COLOR,
        );

        let hud = format!("Score: {}  Lives: {}", session.score(), session.lives());
        draw_text(&hud, 10.0, 30.0, Self::HUD_FONT_SIZE, Self::TEXT_FG);

        match session.phase() {
            GamePhase::Respawning => {
                let line = format!("Respawning in: {:.1}", session.respawn_remaining(now));
                Self::draw_centered(&line, layout.window_size);
            }
            GamePhase::GameOver => {
                Self::draw_centered("Game Over! Press SPACE to restart", layout.window_size);
            }
            GamePhase::Playing => {}
        }
    }

    /// Fill the 10-vertex star ring as a triangle fan around the center.
    /// The star is star-shaped with respect to its centroid, so the fan
    /// covers it exactly.
    fn draw_star(center: (f32, f32), outer_radius: f32, color: Color) {
        let ring = star_polygon(center, outer_radius);
        let hub = vec2(center.0, center.1);
        for i in 0..ring.len() {
            let a = ring[i];
            let b = ring[(i + 1) % ring.len()];
            draw_triangle(hub, vec2(a.0, a.1), vec2(b.0, b.1), color);
        }
    }

    fn draw_centered(text: &str, window_size: f32) {
        let dims = measure_text(text, None, Self::HUD_FONT_SIZE as u16, 1.0);
        draw_text(
            text,
            (window_size - dims.width) / 2.0,
            window_size / 2.0,
            Self::HUD_FONT_SIZE,
            Self::TEXT_FG,
        );
    }
}
