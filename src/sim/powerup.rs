//! Collectible power-ups

use std::f32::consts::TAU;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::random::RandomSource;
use crate::consts::*;
use crate::error::ConfigError;

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerUpKind {
    /// Flat score bonus
    Bonus,
    /// Temporary invincibility against pipes
    Shield,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 2] = [PowerUpKind::Bonus, PowerUpKind::Shield];

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerUpKind::Bonus => "bonus",
            PowerUpKind::Shield => "shield",
        }
    }
}

impl fmt::Display for PowerUpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PowerUpKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bonus" | "star" => Ok(PowerUpKind::Bonus),
            "shield" => Ok(PowerUpKind::Shield),
            _ => Err(ConfigError::UnknownPowerUp(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub kind: PowerUpKind,
    pub collected: bool,
    /// Random phase so neighbouring pickups don't bob in sync
    pub bob_phase: f32,
    pub bob_timer: f32,
}

impl PowerUp {
    pub fn new(x: f32, y: f32, kind: PowerUpKind) -> Self {
        Self {
            x,
            y,
            kind,
            collected: false,
            bob_phase: 0.0,
            bob_timer: 0.0,
        }
    }

    /// Random kind and height just beyond the right edge
    pub fn spawn<R: RandomSource>(rng: &mut R) -> Self {
        let kind = *rng.pick(&PowerUpKind::ALL);
        let y = rng.range_i32(POWER_UP_MARGIN, FLOOR_Y as i32 - POWER_UP_MARGIN) as f32;
        let mut power_up = Self::new(WIDTH + POWER_UP_SPAWN_OFFSET, y, kind);
        power_up.bob_phase = rng.range_f32(0.0, TAU);
        power_up
    }

    pub fn update(&mut self, speed: f32) {
        self.x -= speed;
        self.bob_timer += 0.1;
    }

    /// Drawn height; collisions use the steady `y`
    pub fn bob_y(&self) -> f32 {
        self.y + (self.bob_timer + self.bob_phase).sin() * 3.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x - POWER_UP_SIZE,
            self.y - POWER_UP_SIZE,
            POWER_UP_SIZE * 2.0,
            POWER_UP_SIZE * 2.0,
        )
    }

    pub fn is_off_screen(&self) -> bool {
        self.x + POWER_UP_SIZE < 0.0
    }
}
