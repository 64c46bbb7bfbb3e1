//! Simulation state and core types
//!
//! Everything a run needs lives in `Simulation`. Entity lists are owned here
//! and only mutated inside [`super::tick`].

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::environment::{Environment, Season};
use super::particle::Particle;
use super::pipe::Pipe;
use super::powerup::{PowerUp, PowerUpKind};
use super::random::{RandomSource, seeded};
use super::weather::WeatherKind;
use crate::consts::POPUP_TICKS;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// Things that happened during a tick, for audio and other observers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Scored { points: u64 },
    PowerUp { kind: PowerUpKind },
    SeasonChanged { season: Season },
    WeatherChanged { weather: WeatherKind },
    GameOver { score: u64, new_high_score: bool },
    Restarted,
}

/// Floating "+N" after scoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScorePopup {
    pub points: u64,
    pub x: f32,
    pub y: f32,
    /// Ticks left on screen
    pub timer: u32,
}

impl ScorePopup {
    pub fn show(&mut self, points: u64, x: f32, y: f32) {
        *self = Self {
            points,
            x,
            y,
            timer: POPUP_TICKS,
        };
    }

    pub fn is_visible(&self) -> bool {
        self.timer > 0
    }

    pub fn countdown(&mut self) {
        self.timer = self.timer.saturating_sub(1);
    }
}

/// Complete run state
#[derive(Debug, Clone)]
pub struct Simulation<R: RandomSource = Pcg32> {
    pub tuning: Tuning,
    pub rng: R,
    pub phase: GamePhase,
    pub score: u64,
    /// Ticks advanced while playing this run
    pub time_ticks: u64,
    /// Ticks since the last pipe spawn
    pub pipe_timer: u32,
    pub bird: Bird,
    pub pipes: Vec<Pipe>,
    pub power_ups: Vec<PowerUp>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub environment: Environment,
    pub popup: ScorePopup,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl Simulation<Pcg32> {
    /// Seeded simulation with the production RNG
    pub fn with_seed(tuning: Tuning, seed: u64) -> Self {
        Self::new(tuning, seeded(seed))
    }
}

impl<R: RandomSource> Simulation<R> {
    pub fn new(tuning: Tuning, rng: R) -> Self {
        Self {
            tuning,
            rng,
            phase: GamePhase::Playing,
            score: 0,
            time_ticks: 0,
            pipe_timer: 0,
            bird: Bird::new(),
            pipes: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            environment: Environment::default(),
            popup: ScorePopup::default(),
            events: Vec::new(),
        }
    }

    /// Back to the start of a run. The RNG keeps its position so
    /// consecutive runs differ.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.time_ticks = 0;
        self.pipe_timer = 0;
        self.bird = Bird::new();
        self.pipes.clear();
        self.power_ups.clear();
        self.particles.clear();
        self.environment.reset();
        self.popup = ScorePopup::default();
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// First pipe whose trailing edge is still ahead of the bird
    pub fn next_pipe(&self) -> Option<&Pipe> {
        self.pipes
            .iter()
            .find(|p| p.x + self.tuning.pipe_width >= self.bird.x)
    }
}
