//! Skyflap - an endless side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, environment)
//! - `session`: Outer lifecycle wiring the simulation to stats, storage and audio
//! - `platform`: Frame pacing and edge-triggered input
//! - `persistence`: High score storage
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod error;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use highscores::GameStats;
pub use session::Session;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulation tick rate
    pub const TICK_HZ: u32 = 60;

    /// Playfield dimensions
    pub const WIDTH: f32 = 600.0;
    pub const HEIGHT: f32 = 800.0;
    pub const GROUND_HEIGHT: f32 = 100.0;
    /// Top of the ground strip
    pub const FLOOR_Y: f32 = HEIGHT - GROUND_HEIGHT;

    /// Bird defaults
    pub const BIRD_X: f32 = WIDTH / 4.0;
    pub const BIRD_START_Y: f32 = HEIGHT / 2.0;
    pub const BIRD_SIZE: f32 = 20.0;
    /// Hitbox inset from the visual size (forgiving collisions)
    pub const BIRD_HITBOX_INSET: f32 = 5.0;
    pub const TRAIL_LENGTH: usize = 8;

    /// Pipe collision inset on each side
    pub const PIPE_MARGIN: f32 = 3.0;
    /// Horizontal radius within which pipes perturb gravity
    pub const PRESSURE_RADIUS: f32 = 100.0;
    /// Peak upward pressure at zero distance
    pub const PRESSURE_STRENGTH: f32 = 0.2;

    /// Power-up collision half-size
    pub const POWER_UP_SIZE: f32 = 20.0;
    /// Power-ups spawn this far beyond the right edge
    pub const POWER_UP_SPAWN_OFFSET: f32 = 150.0;
    /// Power-ups keep this far from the top and the ground
    pub const POWER_UP_MARGIN: i32 = 100;

    /// Particle lifetime in ticks
    pub const PARTICLE_LIFE: u32 = 30;

    /// Score popup duration in ticks
    pub const POPUP_TICKS: u32 = 60;
}

/// Linear interpolation between two RGB colors, truncating like integer pixels do
#[inline]
pub fn lerp_rgb(from: [u8; 3], to: [u8; 3], t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mut out = [0u8; 3];
    for i in 0..3 {
        let a = from[i] as f32;
        let b = to[i] as f32;
        out[i] = (a + (b - a) * t) as u8;
    }
    out
}

/// Darken an RGB color by a flat amount per channel
#[inline]
pub fn darken_rgb(color: [u8; 3], amount: u8) -> [u8; 3] {
    color.map(|c| c.saturating_sub(amount))
}
