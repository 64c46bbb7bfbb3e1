//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;

use super::particle::Burst;
use super::pipe::{Pipe, proximity_pressure};
use super::powerup::{PowerUp, PowerUpKind};
use super::random::RandomSource;
use super::state::{GameEvent, GamePhase, Simulation};
use crate::consts::*;
use crate::highscores::GameStats;

/// Input commands for a single tick (edge-triggered, consumed once)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap (space/click/tap)
    pub jump: bool,
    /// Start a new run after game over
    pub restart: bool,
    /// Demo mode - the autopilot decides when to flap
    pub autopilot: bool,
}

/// Advance the simulation by one fixed tick.
///
/// While playing, the order is: environment, bird, bounds, spawning, pipes,
/// power-ups, particles, popup. Anything spawned this tick starts moving on
/// the next one. A run that ends is folded into `stats` exactly once.
pub fn tick<R: RandomSource>(sim: &mut Simulation<R>, input: &TickInput, stats: &mut GameStats) {
    sim.events.clear();

    if sim.phase == GamePhase::GameOver {
        if input.restart {
            sim.reset();
            stats.record_restart();
            sim.events.push(GameEvent::Restarted);
            log::info!("Restart (games played: {})", stats.games_played);
        }
        return;
    }

    if input.jump || (input.autopilot && autopilot_wants_jump(sim)) {
        sim.bird.jump(sim.tuning.jump_strength);
        sim.events.push(GameEvent::Jumped);
    }

    sim.time_ticks += 1;

    // Environment reads the score from before this tick's passes
    let changes = sim.environment.advance(sim.score, &sim.tuning, &mut sim.rng);
    if let Some(season) = changes.season {
        sim.events.push(GameEvent::SeasonChanged { season });
    }
    if let Some(weather) = changes.weather {
        sim.events.push(GameEvent::WeatherChanged { weather });
    }

    // Bird physics
    let pressure = proximity_pressure(&sim.pipes, sim.bird.x, sim.bird.y, &sim.tuning);
    let gravity = sim.environment.gravity(&sim.tuning, pressure);
    let nudge = sim.environment.weather.turbulence(&mut sim.rng);
    sim.bird.update(gravity, nudge);

    // Leaving the playfield ends the run even under a shield
    let mut crashed = sim.bird.out_of_bounds(FLOOR_Y);
    if crashed {
        log::debug!("Bird left the playfield at y={:.1}", sim.bird.y);
    }

    // Spawning
    let moving_pipes = sim.pipes.len();
    let moving_power_ups = sim.power_ups.len();
    sim.pipe_timer += 1;
    if sim.pipe_timer > sim.tuning.pipe_spawn_ticks {
        sim.pipe_timer = 0;
        let pipe = Pipe::spawn(WIDTH, &sim.tuning, &mut sim.rng);
        log::trace!("Pipe spawned, gap top {}", pipe.gap_top);
        sim.pipes.push(pipe);

        if sim.rng.chance(sim.tuning.power_up_chance) {
            let power_up = PowerUp::spawn(&mut sim.rng);
            log::trace!("Power-up spawned: {} at y={}", power_up.kind, power_up.y);
            sim.power_ups.push(power_up);
        }
    }

    // Pipes: move, score, collide
    let bird_pos = sim.bird.position();
    let bird_rect = sim.bird.collision_rect();
    let shielded = sim.bird.is_shielded();
    let pass_points = sim.environment.pass_points();
    let max_particles = sim.tuning.max_particles;

    for (idx, pipe) in sim.pipes.iter_mut().enumerate() {
        if idx < moving_pipes {
            pipe.update(sim.tuning.pipe_speed);
        }

        if pipe.try_score(bird_pos.x, &sim.tuning) {
            sim.score += pass_points;
            sim.popup.show(pass_points, bird_pos.x, bird_pos.y - 30.0);
            sim.events.push(GameEvent::Scored {
                points: pass_points,
            });
            Burst::SCORE.emit(bird_pos, &mut sim.particles, max_particles, &mut sim.rng);
        }

        if !shielded && !crashed && pipe.hits(&bird_rect, &sim.tuning) {
            log::debug!("Bird hit a pipe at x={:.1}", pipe.x);
            crashed = true;
        }
    }
    sim.pipes.retain(|p| !p.is_off_screen(&sim.tuning));

    // Power-ups: move, collect
    for (idx, power_up) in sim.power_ups.iter_mut().enumerate() {
        if idx < moving_power_ups {
            power_up.update(sim.tuning.power_up_speed);
        }
        if power_up.collected || !power_up.rect().overlaps(&bird_rect) {
            continue;
        }

        power_up.collected = true;
        sim.events.push(GameEvent::PowerUp {
            kind: power_up.kind,
        });
        let origin = Vec2::new(power_up.x, power_up.y);
        match power_up.kind {
            PowerUpKind::Bonus => {
                let bonus = sim.tuning.bonus_points;
                sim.score += bonus;
                sim.popup.show(bonus, power_up.x, power_up.y);
                Burst::BONUS.emit(origin, &mut sim.particles, max_particles, &mut sim.rng);
            }
            PowerUpKind::Shield => {
                sim.bird.grant_shield(sim.tuning.shield_ticks);
                Burst::SHIELD.emit(origin, &mut sim.particles, max_particles, &mut sim.rng);
            }
        }
        log::debug!("Collected {} power-up", power_up.kind);
    }
    sim.power_ups.retain(|p| !p.collected && !p.is_off_screen());

    // Particles
    for particle in &mut sim.particles {
        particle.update();
    }
    sim.particles.retain(|p| !p.is_dead());

    sim.popup.countdown();

    if crashed {
        sim.phase = GamePhase::GameOver;
        let new_high_score = stats.record_game_over(sim.score);
        sim.events.push(GameEvent::GameOver {
            score: sim.score,
            new_high_score,
        });
        log::info!(
            "Game over: score {} (high score {}{})",
            sim.score,
            stats.high_score,
            if new_high_score { ", new record" } else { "" }
        );
    }
}

/// Demo AI: flap whenever the bird sinks below its aim point in the next gap
fn autopilot_wants_jump<R: RandomSource>(sim: &Simulation<R>) -> bool {
    let target = sim
        .next_pipe()
        .map(|p| p.gap_top + sim.tuning.pipe_gap * 0.6)
        .unwrap_or(FLOOR_Y / 2.0);

    let falling = sim.bird.velocity >= 0.0;
    let far_below = sim.bird.y > target + 60.0 && sim.bird.velocity > -2.0;
    (falling && sim.bird.y > target) || far_below
}
