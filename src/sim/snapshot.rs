//! Read-only view of a simulation for presentation layers
//!
//! Plain data, serializable, rebuilt from the simulation on demand.

use glam::Vec2;
use serde::Serialize;

use super::environment::{DayBand, Season};
use super::powerup::PowerUpKind;
use super::random::RandomSource;
use super::state::{ScorePopup, Simulation};
use super::weather::{WeatherKind, WeatherParticle};
use crate::highscores::GameStats;

#[derive(Debug, Clone, Serialize)]
pub struct BirdView {
    pub x: f32,
    pub y: f32,
    pub tilt: f32,
    pub wing_angle: f32,
    pub shielded: bool,
    pub shield_seconds: u32,
    pub trail: Vec<Vec2>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PipeView {
    pub x: f32,
    pub width: f32,
    pub gap_top: f32,
    pub gap_height: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PowerUpView {
    pub x: f32,
    /// Bobbing draw height
    pub y: f32,
    pub kind: PowerUpKind,
    pub collected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub color: [u8; 3],
    pub life: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentView {
    pub phase: f32,
    pub band: DayBand,
    pub is_night: bool,
    pub stars_visible: bool,
    pub sky_color: [u8; 3],
    pub cloud_color: [u8; 3],
    pub season: Season,
    pub weather: WeatherKind,
    pub weather_intensity: f32,
    pub weather_particles: Vec<WeatherParticle>,
    pub parallax: [f32; 3],
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub bird: BirdView,
    pub pipes: Vec<PipeView>,
    pub power_ups: Vec<PowerUpView>,
    pub particles: Vec<ParticleView>,
    pub environment: EnvironmentView,
    pub score: u64,
    pub high_score: u64,
    pub game_over: bool,
    pub games_played: u32,
    pub average_score: Option<f64>,
    pub popup: Option<ScorePopup>,
}

impl<R: RandomSource> Simulation<R> {
    pub fn snapshot(&self, stats: &GameStats) -> RenderSnapshot {
        let tuning = &self.tuning;
        let env = &self.environment;

        RenderSnapshot {
            tick: self.time_ticks,
            bird: BirdView {
                x: self.bird.x,
                y: self.bird.y,
                tilt: self.bird.tilt,
                wing_angle: self.bird.wing_angle,
                shielded: self.bird.is_shielded(),
                shield_seconds: self.bird.shield_seconds(),
                trail: self.bird.trail.iter().copied().collect(),
            },
            pipes: self
                .pipes
                .iter()
                .map(|p| PipeView {
                    x: p.x,
                    width: tuning.pipe_width,
                    gap_top: p.gap_top,
                    gap_height: tuning.pipe_gap,
                })
                .collect(),
            power_ups: self
                .power_ups
                .iter()
                .map(|p| PowerUpView {
                    x: p.x,
                    y: p.bob_y(),
                    kind: p.kind,
                    collected: p.collected,
                })
                .collect(),
            particles: self
                .particles
                .iter()
                .map(|p| ParticleView {
                    pos: p.pos,
                    color: p.color.rgb(),
                    life: p.life_ratio(),
                })
                .collect(),
            environment: EnvironmentView {
                phase: env.time.phase,
                band: env.time.band(),
                is_night: env.time.is_night(),
                stars_visible: env.time.stars_visible(),
                sky_color: env.sky_color(),
                cloud_color: env.time.cloud_color(),
                season: env.season(),
                weather: env.weather_kind(),
                weather_intensity: env.weather.intensity,
                weather_particles: env.weather.particles.clone(),
                parallax: env.parallax,
            },
            score: self.score,
            // The in-progress run counts toward the displayed best
            high_score: stats.high_score.max(self.score),
            game_over: self.is_game_over(),
            games_played: stats.games_played,
            average_score: stats.average_score(),
            popup: self.popup.is_visible().then_some(self.popup),
        }
    }
}
