//! Environment: time of day, seasons and weather
//!
//! Time of day and season are pure functions of score. Weather is the only
//! part with randomness, and only at its periodic roll.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use super::weather::{WeatherKind, WeatherSystem};
use crate::consts::WIDTH;
use crate::tuning::Tuning;
use crate::{darken_rgb, lerp_rgb};

pub const SKY_BLUE: [u8; 3] = [135, 206, 235];
pub const NIGHT_BLUE: [u8; 3] = [25, 25, 112];
const CLOUD_DAY: [u8; 3] = [255, 255, 255];
const CLOUD_NIGHT: [u8; 3] = [200, 200, 220];

/// Coarse sky band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayBand {
    Night,
    Dawn,
    Day,
    Dusk,
}

/// Day/night cycle driven by score
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TimeOfDay {
    /// Cycle position in [0, 1)
    pub phase: f32,
}

impl TimeOfDay {
    pub fn update(&mut self, score: u64, tuning: &Tuning) {
        self.phase = day_phase(score, tuning.day_speed, tuning.day_length);
    }

    pub fn band(&self) -> DayBand {
        match self.phase {
            p if p < 0.125 => DayBand::Night,
            p if p < 0.25 => DayBand::Dawn,
            p if p < 0.75 => DayBand::Day,
            p if p < 0.875 => DayBand::Dusk,
            _ => DayBand::Night,
        }
    }

    pub fn is_night(&self) -> bool {
        self.phase < 0.25 || self.phase > 0.75
    }

    /// Stars fade in a little before dusk and linger past dawn
    pub fn stars_visible(&self) -> bool {
        self.phase < 0.3 || self.phase > 0.7
    }

    pub fn sky_color(&self) -> [u8; 3] {
        if self.phase < 0.25 {
            lerp_rgb(NIGHT_BLUE, SKY_BLUE, self.phase / 0.25)
        } else if self.phase < 0.75 {
            SKY_BLUE
        } else {
            lerp_rgb(SKY_BLUE, NIGHT_BLUE, (self.phase - 0.75) / 0.25)
        }
    }

    pub fn cloud_color(&self) -> [u8; 3] {
        if self.is_night() {
            CLOUD_NIGHT
        } else {
            CLOUD_DAY
        }
    }
}

/// `(score * speed mod length) / length`, always in [0, 1)
pub fn day_phase(score: u64, speed: u64, length: u64) -> f32 {
    if length == 0 {
        return 0.0;
    }
    let position = score.wrapping_mul(speed) % length;
    position as f32 / length as f32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    pub fn gravity_multiplier(&self) -> f32 {
        match self {
            Season::Spring => 0.9,
            Season::Summer => 0.8,
            Season::Fall => 1.0,
            Season::Winter => 1.1,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `(score / threshold) mod 4`. A zero threshold pins the first season.
pub fn season_index(score: u64, threshold: u64) -> usize {
    if threshold == 0 {
        return 0;
    }
    ((score / threshold) % 4) as usize
}

/// Tracks the current season and reports each crossing once
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SeasonCycle {
    pub current: Season,
}

impl SeasonCycle {
    pub fn update(&mut self, score: u64, threshold: u64) -> Option<Season> {
        let next = Season::from_index(season_index(score, threshold));
        if next == self.current {
            return None;
        }
        log::info!("Season: {} -> {}", self.current, next);
        self.current = next;
        Some(next)
    }
}

/// Gravity after season, nearby-pipe pressure and weather.
///
/// Pressure is subtracted before the weather multiplier; the result can go
/// negative right next to pipe walls.
pub fn effective_gravity(base: f32, season: Season, weather: WeatherKind, pressure: f32) -> f32 {
    (base * season.gravity_multiplier() - pressure) * weather.gravity_multiplier()
}

/// Points for passing a pipe: fog beats winter, no stacking
pub fn score_for_pass(season: Season, weather: WeatherKind) -> u64 {
    if weather == WeatherKind::Fog {
        3
    } else if season == Season::Winter {
        2
    } else {
        1
    }
}

/// Parallax speed factors for far, mid and near background layers
pub const PARALLAX_FACTORS: [f32; 3] = [0.2, 0.5, 0.8];

/// Everything outside the entities that changes as the run goes on
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Environment {
    pub time: TimeOfDay,
    pub seasons: SeasonCycle,
    pub weather: WeatherSystem,
    /// Background scroll offsets, each wrapping at `-WIDTH`
    pub parallax: [f32; 3],
}

/// What changed during an environment step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnvironmentChanges {
    pub season: Option<Season>,
    pub weather: Option<WeatherKind>,
}

impl Environment {
    pub fn season(&self) -> Season {
        self.seasons.current
    }

    pub fn weather_kind(&self) -> WeatherKind {
        self.weather.kind
    }

    /// Advance time, season, weather and background scroll for one tick
    pub fn advance<R: RandomSource>(
        &mut self,
        score: u64,
        tuning: &Tuning,
        rng: &mut R,
    ) -> EnvironmentChanges {
        self.time.update(score, tuning);
        let season = self.seasons.update(score, tuning.season_threshold);
        let weather =
            self.weather
                .roll(tuning.weather_interval, tuning.weather_change_chance, rng);
        self.weather.update(rng);

        for (offset, factor) in self.parallax.iter_mut().zip(PARALLAX_FACTORS) {
            *offset -= tuning.pipe_speed * factor;
            if *offset <= -WIDTH {
                *offset = 0.0;
            }
        }

        EnvironmentChanges { season, weather }
    }

    pub fn gravity(&self, tuning: &Tuning, pressure: f32) -> f32 {
        effective_gravity(tuning.gravity, self.season(), self.weather_kind(), pressure)
    }

    pub fn pass_points(&self) -> u64 {
        score_for_pass(self.season(), self.weather_kind())
    }

    /// Sky color after weather darkening
    pub fn sky_color(&self) -> [u8; 3] {
        darken_rgb(self.time.sky_color(), self.weather_kind().sky_darkening())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
