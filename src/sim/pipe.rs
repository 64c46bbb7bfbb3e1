//! Pipes: the obstacles the bird threads through

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::random::RandomSource;
use crate::consts::*;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Bottom of the top segment (top of the gap)
    pub gap_top: f32,
    /// Trailing edge has gone behind the bird
    pub passed: bool,
    /// Points have been awarded for this pipe
    pub scored: bool,
}

impl Pipe {
    /// New pipe at `x` with a gap placed uniformly within the tuning bounds
    pub fn spawn<R: RandomSource>(x: f32, tuning: &Tuning, rng: &mut R) -> Self {
        let gap_top = rng.range_i32(tuning.min_gap_top, tuning.max_gap_top());
        Self::with_gap(x, gap_top as f32)
    }

    pub fn with_gap(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            passed: false,
            scored: false,
        }
    }

    pub fn update(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// Bottom of the gap (top of the bottom segment)
    pub fn gap_bottom(&self, tuning: &Tuning) -> f32 {
        self.gap_top + tuning.pipe_gap
    }

    pub fn center_x(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.pipe_width / 2.0
    }

    /// Top and bottom segment hitboxes, inset from the drawn width
    pub fn collision_rects(&self, tuning: &Tuning) -> [Rect; 2] {
        let x = self.x + PIPE_MARGIN;
        let w = tuning.pipe_width - 2.0 * PIPE_MARGIN;
        let bottom_y = self.gap_bottom(tuning);
        [
            Rect::new(x, 0.0, w, self.gap_top),
            Rect::new(x, bottom_y, w, FLOOR_Y - bottom_y),
        ]
    }

    pub fn hits(&self, bird: &Rect, tuning: &Tuning) -> bool {
        self.collision_rects(tuning).iter().any(|r| r.overlaps(bird))
    }

    pub fn is_off_screen(&self, tuning: &Tuning) -> bool {
        self.x + tuning.pipe_width < 0.0
    }

    /// Mark the pipe scored the first time its trailing edge is behind `bird_x`.
    /// Returns true only on that transition.
    pub fn try_score(&mut self, bird_x: f32, tuning: &Tuning) -> bool {
        if self.scored || self.x + tuning.pipe_width >= bird_x {
            return false;
        }
        self.passed = true;
        self.scored = true;
        true
    }

    /// Whether `y` lies outside the open gap band
    fn outside_gap(&self, y: f32, tuning: &Tuning) -> bool {
        y < self.gap_top || y > self.gap_bottom(tuning)
    }
}

/// Upward "air pressure" from nearby pipe walls, summed over all pipes.
///
/// Pipes whose centre is within `PRESSURE_RADIUS` horizontally push up
/// linearly harder the closer they are, but only while the bird is level with
/// a wall rather than the gap. Subtracted from gravity.
pub fn proximity_pressure(pipes: &[Pipe], bird_x: f32, bird_y: f32, tuning: &Tuning) -> f32 {
    pipes
        .iter()
        .filter_map(|pipe| {
            let distance = (pipe.center_x(tuning) - bird_x).abs();
            (distance < PRESSURE_RADIUS && pipe.outside_gap(bird_y, tuning))
                .then(|| (PRESSURE_RADIUS - distance) / PRESSURE_RADIUS * PRESSURE_STRENGTH)
        })
        .sum()
}
