//! The player's bird

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Horizontal position (never changes)
    pub x: f32,
    pub y: f32,
    /// Vertical velocity (pixels/tick, positive = down)
    pub velocity: f32,
    /// Visual half-width
    pub size: f32,
    /// Remaining invincibility ticks (0 = none)
    pub shield_ticks: u32,
    /// Body tilt in degrees, follows velocity
    pub tilt: f32,
    /// Wing flap phase in degrees
    pub wing_angle: f32,
    /// Recent positions, oldest first
    pub trail: VecDeque<Vec2>,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            x: BIRD_X,
            y: BIRD_START_Y,
            velocity: 0.0,
            size: BIRD_SIZE,
            shield_ticks: 0,
            tilt: 0.0,
            wing_angle: 0.0,
            trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
        }
    }
}

impl Bird {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flap: velocity becomes the impulse regardless of what it was
    pub fn jump(&mut self, strength: f32) {
        self.velocity = strength;
    }

    /// Integrate one tick. `nudge` is an extra velocity kick (snow turbulence).
    pub fn update(&mut self, gravity: f32, nudge: f32) {
        self.velocity += nudge;
        self.velocity += gravity;
        self.y += self.velocity;

        self.wing_angle = (self.wing_angle + 15.0) % 360.0;
        self.tilt = (self.velocity * 3.0).clamp(-30.0, 30.0);

        self.trail.push_back(Vec2::new(self.x, self.y));
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.pop_front();
        }

        self.shield_ticks = self.shield_ticks.saturating_sub(1);
    }

    pub fn grant_shield(&mut self, ticks: u32) {
        self.shield_ticks = ticks;
    }

    pub fn is_shielded(&self) -> bool {
        self.shield_ticks > 0
    }

    /// Whole seconds of shield left, rounded up for display
    pub fn shield_seconds(&self) -> u32 {
        if self.is_shielded() {
            self.shield_ticks / TICK_HZ + 1
        } else {
            0
        }
    }

    /// Half extents of the hitbox (smaller than the visual body)
    pub fn hitbox_half(&self) -> Vec2 {
        let inner = self.size - BIRD_HITBOX_INSET;
        Vec2::new(inner, inner / 2.0)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn collision_rect(&self) -> Rect {
        Rect::from_center(self.position(), self.hitbox_half())
    }

    /// Above the ceiling or into the ground
    pub fn out_of_bounds(&self, floor_y: f32) -> bool {
        self.y > floor_y - self.size || self.y < -self.size
    }
}
