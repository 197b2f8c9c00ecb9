use std::collections::VecDeque;

use crate::color::hsv_to_rgb;
use crate::direction::Direction;

const HUE_STEP: f32 = 0.02;
const SEGMENT_HUE_OFFSET: f32 = 0.1;
const ROTATION_STEP_DEGREES: f32 = 5.0;

/// The player-controlled chain of star segments, head first.
///
/// Collision policy lives in the session, not here: wall, self and food
/// checks all need board context this entity does not carry.
#[derive(Debug, Clone)]
pub struct Trail {
    positions: VecDeque<(i32, i32)>,
    heading: Direction,
    grow_pending: bool,
    // Present iff respawning; compared against an injected clock.
    respawn_deadline: Option<f64>,
    respawn_secs: f64,
    hue_phase: f32,
    rotation_phase: f32,
    spawn_cell: (i32, i32),
}

impl Trail {
    pub fn new(spawn_cell: (i32, i32), respawn_secs: f64) -> Self {
        let mut trail = Self {
            positions: VecDeque::new(),
            heading: Direction::Right,
            grow_pending: false,
            respawn_deadline: None,
            respawn_secs,
            hue_phase: 0.0,
            rotation_phase: 0.0,
            spawn_cell,
        };
        trail.reset();
        trail
    }

    /// Back to a single segment at the spawn cell, heading right.
    pub fn reset(&mut self) {
        self.positions.clear();
        self.positions.push_front(self.spawn_cell);
        self.heading = Direction::Right;
        self.grow_pending = false;
    }

    // ─────────────────────────────────────────────────────
    // Read accessors
    // ─────────────────────────────────────────────────────
    pub fn positions(&self) -> &VecDeque<(i32, i32)> {
        &self.positions
    }

    pub fn head(&self) -> (i32, i32) {
        *self.positions.front().expect("trail always has a head")
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn contains(&self, cell: (i32, i32)) -> bool {
        self.positions.iter().any(|&c| c == cell)
    }

    pub fn hue_phase(&self) -> f32 {
        self.hue_phase
    }

    pub fn rotation_phase(&self) -> f32 {
        self.rotation_phase
    }

    // ─────────────────────────────────────────────────────
    // Movement
    // ─────────────────────────────────────────────────────
    pub fn set_heading(&mut self, heading: Direction) {
        self.heading = heading;
    }

    /// One simulation step: shift the trail along the heading, or extend it
    /// by one cell if a growth is pending. No-op while respawning.
    pub fn advance(&mut self) {
        if self.is_respawning() {
            return;
        }

        let (dx, dy) = self.heading.delta();
        let (head_x, head_y) = self.head();
        let new_head = (head_x + dx, head_y + dy);

        if self.grow_pending {
            self.grow_pending = false;
        } else {
            self.positions.pop_back();
        }
        self.positions.push_front(new_head);

        self.hue_phase = (self.hue_phase + HUE_STEP) % 1.0;
        self.rotation_phase = (self.rotation_phase + ROTATION_STEP_DEGREES) % 360.0;
    }

    /// Takes effect on the next `advance`, not immediately.
    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    // ─────────────────────────────────────────────────────
    // Respawn timer
    // ─────────────────────────────────────────────────────
    pub fn start_respawn(&mut self, now: f64) {
        self.respawn_deadline = Some(now + self.respawn_secs);
    }

    pub fn is_respawning(&self) -> bool {
        self.respawn_deadline.is_some()
    }

    pub fn respawn_remaining(&self, now: f64) -> f64 {
        self.respawn_deadline
            .map(|deadline| (deadline - now).max(0.0))
            .unwrap_or(0.0)
    }

    /// True exactly once, on the first call at or past the deadline; the
    /// trail is reset to its spawn cell and the caller should relocate food.
    pub fn check_respawn_complete(&mut self, now: f64) -> bool {
        match self.respawn_deadline {
            Some(deadline) if now >= deadline => {
                self.respawn_deadline = None;
                self.reset();
                true
            }
            _ => false,
        }
    }

    // ─────────────────────────────────────────────────────
    // Presentation
    // ─────────────────────────────────────────────────────
    /// Rainbow color of the segment at `index`, shifting as the hue phase
    /// advances each step.
    pub fn color_at(&self, index: usize) -> (u8, u8, u8) {
        let hue = (self.hue_phase + index as f32 * SEGMENT_HUE_OFFSET) % 1.0;
        hsv_to_rgb(hue, 1.0, 1.0)
    }

    pub(crate) fn debug_set(&mut self, cells_head_first: &[(i32, i32)], heading: Direction) {
        self.positions.clear();
        for &cell in cells_head_first {
            self.positions.push_back(cell);
        }
        self.heading = heading;
        self.grow_pending = false;
        self.respawn_deadline = None;
    }
}
