//! Data-driven game balance
//!
//! Every number a designer might want to tweak lives here. Defaults are the
//! shipped balance; a `Tuning` loaded from settings is validated before the
//! simulation ever sees it.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Base downward acceleration (pixels/tick²) before season/weather
    pub gravity: f32,
    /// Velocity set by a jump (negative = up)
    pub jump_strength: f32,

    /// Pipe width in pixels
    pub pipe_width: f32,
    /// Vertical gap between top and bottom segments
    pub pipe_gap: f32,
    /// Pipe scroll speed (pixels/tick)
    pub pipe_speed: f32,
    /// Ticks between pipe spawns (spawn fires once the timer exceeds this)
    pub pipe_spawn_ticks: u32,
    /// Minimum gap top
    pub min_gap_top: i32,
    /// Clearance kept between the gap bottom and the ground
    pub gap_floor_margin: i32,

    /// Chance of a power-up accompanying each pipe spawn
    pub power_up_chance: f32,
    /// Power-up scroll speed (pixels/tick)
    pub power_up_speed: f32,
    /// Points granted by a bonus pickup
    pub bonus_points: u64,
    /// Shield duration in ticks
    pub shield_ticks: u32,

    /// Score → season step
    pub season_threshold: u64,
    /// Length of one day/night cycle in score units × `day_speed`
    pub day_length: u64,
    /// Score multiplier feeding the day cycle
    pub day_speed: u64,

    /// Ticks between weather rolls
    pub weather_interval: u32,
    /// Probability that a weather roll changes the weather
    pub weather_change_chance: f32,

    /// Live particle cap (oldest are dropped first)
    pub max_particles: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.4,
            jump_strength: -7.0,

            pipe_width: 80.0,
            pipe_gap: 200.0,
            pipe_speed: 2.5,
            pipe_spawn_ticks: 90,
            min_gap_top: 120,
            gap_floor_margin: 120,

            power_up_chance: 0.4,
            power_up_speed: 2.5,
            bonus_points: 5,
            shield_ticks: 300,

            season_threshold: 30,
            day_length: 2000,
            day_speed: 10,

            weather_interval: 1800,
            weather_change_chance: 0.3,

            max_particles: 256,
        }
    }
}

impl Tuning {
    /// Highest gap top that still leaves the gap plus margin above the ground
    pub fn max_gap_top(&self) -> i32 {
        // Float maths; the cast saturates for absurd gaps
        (FLOOR_Y - self.pipe_gap - self.gap_floor_margin as f32) as i32
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(ConfigError::tuning("gravity", "must be positive"));
        }
        if !(self.jump_strength.is_finite() && self.jump_strength < 0.0) {
            return Err(ConfigError::tuning("jump_strength", "must be negative (upward)"));
        }
        if !(self.pipe_width > 0.0 && self.pipe_width < WIDTH) {
            return Err(ConfigError::tuning("pipe_width", "must fit the playfield"));
        }
        if !(self.pipe_speed > 0.0) {
            return Err(ConfigError::tuning("pipe_speed", "must be positive"));
        }
        if !(self.power_up_speed > 0.0) {
            return Err(ConfigError::tuning("power_up_speed", "must be positive"));
        }
        if self.pipe_spawn_ticks == 0 {
            return Err(ConfigError::tuning("pipe_spawn_ticks", "must be non-zero"));
        }
        if self.min_gap_top < 0 {
            return Err(ConfigError::tuning("min_gap_top", "must not be negative"));
        }
        if self.gap_floor_margin < 0 {
            return Err(ConfigError::tuning("gap_floor_margin", "must not be negative"));
        }
        if !(self.pipe_gap.is_finite() && self.pipe_gap > 0.0 && self.pipe_gap < FLOOR_Y)
            || self.max_gap_top() < self.min_gap_top
        {
            return Err(ConfigError::tuning(
                "pipe_gap",
                format!(
                    "gap {} with margins {}/{} does not fit a {}px playfield",
                    self.pipe_gap, self.min_gap_top, self.gap_floor_margin, HEIGHT - GROUND_HEIGHT
                ),
            ));
        }
        if !(0.0..=1.0).contains(&self.power_up_chance) {
            return Err(ConfigError::tuning("power_up_chance", "must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.weather_change_chance) {
            return Err(ConfigError::tuning("weather_change_chance", "must be within [0, 1]"));
        }
        if self.season_threshold == 0 {
            return Err(ConfigError::tuning("season_threshold", "must be non-zero"));
        }
        if self.day_length == 0 {
            return Err(ConfigError::tuning("day_length", "must be non-zero"));
        }
        Ok(())
    }
}
