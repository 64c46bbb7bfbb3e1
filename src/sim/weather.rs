//! Weather: a randomized periodic mode with its own particle field
//!
//! The field is cosmetic; the kind itself feeds gravity (snow) and scoring (fog).

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use crate::consts::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherKind {
    #[default]
    Clear,
    Rain,
    Snow,
    Fog,
}

impl WeatherKind {
    pub const ALL: [WeatherKind; 4] = [
        WeatherKind::Clear,
        WeatherKind::Rain,
        WeatherKind::Snow,
        WeatherKind::Fog,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherKind::Clear => "clear",
            WeatherKind::Rain => "rain",
            WeatherKind::Snow => "snow",
            WeatherKind::Fog => "fog",
        }
    }

    /// Field population at full intensity
    fn base_population(&self) -> f32 {
        match self {
            WeatherKind::Clear => 0.0,
            WeatherKind::Rain => 50.0,
            WeatherKind::Snow => 30.0,
            WeatherKind::Fog => 20.0,
        }
    }

    /// Multiplier applied to gravity after pressure
    pub fn gravity_multiplier(&self) -> f32 {
        match self {
            WeatherKind::Snow => 0.8,
            _ => 1.0,
        }
    }

    /// Flat sky darkening per channel
    pub fn sky_darkening(&self) -> u8 {
        match self {
            WeatherKind::Fog => 30,
            WeatherKind::Rain => 20,
            _ => 0,
        }
    }
}

impl fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeatherKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownWeather(s.to_string()))
    }
}

/// One rain drop, snow flake or fog bank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherParticle {
    pub pos: Vec2,
    /// Fall speed (rain/snow) or drift speed (fog)
    pub speed: f32,
    /// Streak length (rain) or radius (snow/fog)
    pub size: f32,
    /// Horizontal sway per tick (snow)
    pub sway: f32,
    /// Opacity 0-255 (fog)
    pub alpha: u8,
}

impl WeatherParticle {
    fn spawn<R: RandomSource>(kind: WeatherKind, rng: &mut R) -> Self {
        let w = WIDTH as i32;
        let h = HEIGHT as i32;
        match kind {
            WeatherKind::Rain => Self {
                pos: Vec2::new(rng.range_i32(-50, w + 50) as f32, rng.range_i32(-h, 0) as f32),
                speed: rng.range_f32(8.0, 12.0),
                size: rng.range_i32(10, 20) as f32,
                sway: 0.0,
                alpha: 255,
            },
            WeatherKind::Snow => Self {
                pos: Vec2::new(rng.range_i32(0, w) as f32, rng.range_i32(-h, 0) as f32),
                speed: rng.range_f32(1.0, 3.0),
                size: rng.range_i32(2, 5) as f32,
                sway: rng.range_f32(-0.5, 0.5),
                alpha: 255,
            },
            WeatherKind::Fog | WeatherKind::Clear => Self {
                pos: Vec2::new(
                    rng.range_i32(-100, w + 100) as f32,
                    rng.range_i32(0, FLOOR_Y as i32) as f32,
                ),
                speed: rng.range_f32(0.5, 1.5),
                size: rng.range_i32(40, 80) as f32,
                sway: 0.0,
                alpha: rng.range_i32(30, 80) as u8,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSystem {
    pub kind: WeatherKind,
    pub intensity: f32,
    pub particles: Vec<WeatherParticle>,
    /// Ticks since the last roll
    pub timer: u32,
}

impl Default for WeatherSystem {
    fn default() -> Self {
        Self {
            kind: WeatherKind::Clear,
            intensity: 0.0,
            particles: Vec::new(),
            timer: 0,
        }
    }
}

impl WeatherSystem {
    /// Switch weather and rebuild the particle field for it
    pub fn set_weather<R: RandomSource>(&mut self, kind: WeatherKind, intensity: f32, rng: &mut R) {
        let intensity = if intensity.is_finite() {
            intensity.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.kind = kind;
        self.intensity = intensity;
        self.particles.clear();

        let count = (kind.base_population() * intensity) as usize;
        self.particles
            .extend((0..count).map(|_| WeatherParticle::spawn(kind, rng)));
    }

    /// Back to clear skies with a fresh roll timer
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance the periodic roll. A successful roll rebuilds the field at a
    /// new intensity; returns the new kind only when it differs.
    pub fn roll<R: RandomSource>(
        &mut self,
        interval: u32,
        change_chance: f32,
        rng: &mut R,
    ) -> Option<WeatherKind> {
        self.timer += 1;
        if self.timer <= interval {
            return None;
        }
        self.timer = 0;
        if !rng.chance(change_chance) {
            return None;
        }
        let kind = *rng.pick(&WeatherKind::ALL);
        let intensity = rng.range_f32(0.5, 1.0);
        let previous = self.kind;
        self.set_weather(kind, intensity, rng);
        if kind == previous {
            log::debug!("Weather stays {} ({:.2})", kind, intensity);
            return None;
        }
        log::info!("Weather: {} -> {} ({:.2})", previous, kind, intensity);
        Some(kind)
    }

    /// Move the field; rain and snow respawn above the screen, fog wraps
    pub fn update<R: RandomSource>(&mut self, rng: &mut R) {
        let w = WIDTH as i32;
        match self.kind {
            WeatherKind::Clear => {}
            WeatherKind::Rain => {
                for drop in &mut self.particles {
                    drop.pos.y += drop.speed;
                    drop.pos.x -= 2.0;
                    if drop.pos.y > HEIGHT {
                        drop.pos.y = rng.range_i32(-50, -10) as f32;
                        drop.pos.x = rng.range_i32(-50, w + 50) as f32;
                    }
                }
            }
            WeatherKind::Snow => {
                for flake in &mut self.particles {
                    flake.pos.y += flake.speed;
                    flake.pos.x += flake.sway;
                    if flake.pos.y > HEIGHT {
                        flake.pos.y = rng.range_i32(-50, -10) as f32;
                        flake.pos.x = rng.range_i32(0, w) as f32;
                    }
                }
            }
            WeatherKind::Fog => {
                for bank in &mut self.particles {
                    bank.pos.x -= bank.speed;
                    if bank.pos.x < -bank.size {
                        bank.pos.x = WIDTH + bank.size;
                    }
                }
            }
        }
    }

    /// Snow occasionally knocks the bird's velocity
    pub fn turbulence<R: RandomSource>(&self, rng: &mut R) -> f32 {
        if self.kind == WeatherKind::Snow && rng.chance(0.1) {
            rng.range_f32(-0.5, 0.5)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::seeded;

    #[test]
    fn test_population_scales_with_intensity() {
        let mut rng = seeded(5);
        let mut weather = WeatherSystem::default();
        weather.set_weather(WeatherKind::Rain, 1.0, &mut rng);
        assert_eq!(weather.particles.len(), 50);
        weather.set_weather(WeatherKind::Snow, 0.5, &mut rng);
        assert_eq!(weather.particles.len(), 15);
        weather.set_weather(WeatherKind::Fog, 0.75, &mut rng);
        assert_eq!(weather.particles.len(), 15);
        weather.set_weather(WeatherKind::Clear, 1.0, &mut rng);
        assert!(weather.particles.is_empty());
    }

    #[test]
    fn test_intensity_clamped() {
        let mut rng = seeded(5);
        let mut weather = WeatherSystem::default();
        weather.set_weather(WeatherKind::Rain, 3.0, &mut rng);
        assert_eq!(weather.intensity, 1.0);
        assert_eq!(weather.particles.len(), 50);
        weather.set_weather(WeatherKind::Rain, -1.0, &mut rng);
        assert!(weather.particles.is_empty());
    }

    #[test]
    fn test_rain_respawns_above_screen() {
        let mut rng = seeded(6);
        let mut weather = WeatherSystem::default();
        weather.set_weather(WeatherKind::Rain, 1.0, &mut rng);
        for _ in 0..400 {
            weather.update(&mut rng);
            for drop in &weather.particles {
                assert!(drop.pos.y <= HEIGHT);
            }
        }
    }

    #[test]
    fn test_fog_wraps_to_right_edge() {
        let mut rng = seeded(6);
        let mut weather = WeatherSystem::default();
        weather.set_weather(WeatherKind::Fog, 1.0, &mut rng);
        weather.particles[0].pos.x = -weather.particles[0].size;
        weather.particles[0].speed = 1.0;
        weather.update(&mut rng);
        let bank = &weather.particles[0];
        assert_eq!(bank.pos.x, WIDTH + bank.size);
    }

    #[test]
    fn test_roll_waits_for_interval() {
        let mut rng = seeded(8);
        let mut weather = WeatherSystem::default();
        for _ in 0..10 {
            assert_eq!(weather.roll(10, 1.0, &mut rng), None);
        }
        // Eleventh tick passes the interval; chance 1.0 always picks something
        let _ = weather.roll(10, 1.0, &mut rng);
        assert_eq!(weather.timer, 0);
        assert!((0.5..=1.0).contains(&weather.intensity));
    }

    #[test]
    fn test_roll_reports_only_real_changes() {
        let mut rng = seeded(21);
        let mut weather = WeatherSystem::default();
        let mut saw_repeat = false;
        for _ in 0..200 {
            let before = weather.kind;
            match weather.roll(0, 1.0, &mut rng) {
                Some(kind) => {
                    assert_ne!(kind, before);
                    assert_eq!(kind, weather.kind);
                }
                None => {
                    assert_eq!(weather.kind, before);
                    saw_repeat = true;
                }
            }
        }
        assert!(saw_repeat);
    }

    #[test]
    fn test_roll_with_zero_chance_never_changes() {
        let mut rng = seeded(8);
        let mut weather = WeatherSystem::default();
        for _ in 0..100 {
            assert_eq!(weather.roll(3, 0.0, &mut rng), None);
        }
        assert_eq!(weather.kind, WeatherKind::Clear);
    }

    #[test]
    fn test_turbulence_only_in_snow() {
        let mut rng = seeded(10);
        let mut weather = WeatherSystem::default();
        for _ in 0..200 {
            assert_eq!(weather.turbulence(&mut rng), 0.0);
        }
        weather.set_weather(WeatherKind::Snow, 1.0, &mut rng);
        let nudges: Vec<f32> = (0..500).map(|_| weather.turbulence(&mut rng)).collect();
        assert!(nudges.iter().any(|n| *n != 0.0));
        assert!(nudges.iter().all(|n| n.abs() <= 0.5));
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("FOG".parse::<WeatherKind>(), Ok(WeatherKind::Fog));
        assert!("hail".parse::<WeatherKind>().is_err());
    }
}
