//! Cosmetic particle bursts. No collisions, no gameplay effect.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use crate::consts::PARTICLE_LIFE;

/// Palette slot for a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectColor {
    Star,
    Shield,
}

impl EffectColor {
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            EffectColor::Star => [255, 255, 0],
            EffectColor::Shield => [147, 112, 219],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: EffectColor,
    pub life: u32,
    pub max_life: u32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, color: EffectColor) -> Self {
        Self {
            pos,
            vel,
            color,
            life: PARTICLE_LIFE,
            max_life: PARTICLE_LIFE,
        }
    }

    /// Move, age, then damp horizontally and pull down
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life = self.life.saturating_sub(1);
        self.vel = Vec2::new(self.vel.x * 0.98, self.vel.y + 0.1);
    }

    pub fn is_dead(&self) -> bool {
        self.life == 0
    }

    pub fn life_ratio(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f32 / self.max_life as f32
        }
    }
}

/// Shape of a particle burst
#[derive(Debug, Clone, Copy)]
pub struct Burst {
    pub count: usize,
    /// Max integer offset from the origin on each axis
    pub spread: i32,
    /// Horizontal speed range is [-vx, vx]
    pub vx: f32,
    /// Vertical speed range (always upward)
    pub vy: (f32, f32),
    pub color: EffectColor,
}

impl Burst {
    pub const SCORE: Burst = Burst {
        count: 5,
        spread: 20,
        vx: 2.0,
        vy: (-3.0, -1.0),
        color: EffectColor::Star,
    };
    pub const BONUS: Burst = Burst {
        count: 10,
        spread: 30,
        vx: 4.0,
        vy: (-5.0, -1.0),
        color: EffectColor::Star,
    };
    pub const SHIELD: Burst = Burst {
        count: 8,
        spread: 25,
        vx: 3.0,
        vy: (-4.0, -1.0),
        color: EffectColor::Shield,
    };

    /// Append a burst at `origin`, dropping the oldest particles past `cap`
    pub fn emit<R: RandomSource>(
        &self,
        origin: Vec2,
        particles: &mut Vec<Particle>,
        cap: usize,
        rng: &mut R,
    ) {
        for _ in 0..self.count {
            let offset = Vec2::new(
                rng.range_i32(-self.spread, self.spread) as f32,
                rng.range_i32(-self.spread, self.spread) as f32,
            );
            let vel = Vec2::new(
                rng.range_f32(-self.vx, self.vx),
                rng.range_f32(self.vy.0, self.vy.1),
            );
            particles.push(Particle::new(origin + offset, vel, self.color));
        }
        if particles.len() > cap {
            let excess = particles.len() - cap;
            particles.drain(..excess);
        }
    }
}
