//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or storage dependencies

pub mod bird;
pub mod collision;
pub mod environment;
pub mod particle;
pub mod pipe;
pub mod powerup;
pub mod random;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod weather;

pub use bird::Bird;
pub use collision::Rect;
pub use environment::{
    DayBand, Environment, Season, TimeOfDay, effective_gravity, score_for_pass, season_index,
};
pub use particle::{Burst, EffectColor, Particle};
pub use pipe::{Pipe, proximity_pressure};
pub use powerup::{PowerUp, PowerUpKind};
pub use random::{RandomSource, seeded};
pub use snapshot::RenderSnapshot;
pub use state::{GameEvent, GamePhase, ScorePopup, Simulation};
pub use tick::{TickInput, tick};
pub use weather::{WeatherKind, WeatherSystem};
