//! End-to-end runs through the public API

use skyflap::audio::AudioManager;
use skyflap::consts::*;
use skyflap::persistence::{HighScoreStore, JsonFileStore, MemoryStore};
use skyflap::platform::{Action, InputLatch};
use skyflap::sim::{
    GameEvent, Pipe, PowerUp, PowerUpKind, Simulation, TickInput, WeatherKind, tick,
};
use skyflap::{GameStats, Session, Tuning};

fn new_sim(seed: u64) -> Simulation {
    Simulation::with_seed(Tuning::default(), seed)
}

/// One tick with the bird parked at `y` and no stray power-ups
fn step_at(sim: &mut Simulation, stats: &mut GameStats, y: f32) {
    sim.bird.y = y;
    sim.bird.velocity = 0.0;
    sim.power_ups.clear();
    tick(sim, &TickInput::default(), stats);
}

fn step_held(sim: &mut Simulation, stats: &mut GameStats) {
    step_at(sim, stats, 400.0);
}

#[test]
fn first_pipe_appears_after_one_interval() {
    let mut sim = new_sim(1);
    let mut stats = GameStats::new();
    let interval = sim.tuning.pipe_spawn_ticks;

    for _ in 0..=interval {
        step_held(&mut sim, &mut stats);
    }
    assert_eq!(sim.pipes.len(), 1);
    assert_eq!(sim.pipes[0].x, WIDTH);
    let gap_top = sim.pipes[0].gap_top;
    assert!(gap_top >= sim.tuning.min_gap_top as f32);
    assert!(gap_top <= sim.tuning.max_gap_top() as f32);

    // Fly through the middle of its gap until it is behind the bird
    let mid_gap = gap_top + sim.tuning.pipe_gap / 2.0;
    let mut ticks = 0;
    while !sim.pipes[0].scored {
        assert_eq!(sim.score, 0, "scored before the pipe was passed");
        step_at(&mut sim, &mut stats, mid_gap);
        ticks += 1;
        assert!(ticks < 400, "pipe never passed the bird");
    }
    assert!(!sim.is_game_over());
    assert_eq!(sim.score, 1);
    assert!(sim.pipes[0].x + sim.tuning.pipe_width < BIRD_X);

    for _ in 0..20 {
        step_at(&mut sim, &mut stats, mid_gap);
    }
    assert_eq!(sim.score, 1);
}

#[test]
fn passing_a_pipe_scores_once() {
    let mut sim = new_sim(2);
    let mut stats = GameStats::new();
    let width = sim.tuning.pipe_width;
    sim.pipes.push(Pipe::with_gap(BIRD_X - width + 1.0, 300.0));

    step_held(&mut sim, &mut stats);
    assert_eq!(sim.score, 1);
    assert!(sim.events.contains(&GameEvent::Scored { points: 1 }));

    for _ in 0..20 {
        step_held(&mut sim, &mut stats);
    }
    assert_eq!(sim.score, 1);
    assert!(!sim.is_game_over());
}

#[test]
fn shield_lasts_until_its_final_tick() {
    let mut sim = new_sim(3);
    let mut stats = GameStats::new();
    let duration = sim.tuning.shield_ticks;

    // Pickup tick: the shield lands after the bird has moved
    sim.bird.y = 400.0;
    sim.bird.velocity = 0.0;
    let speed = sim.tuning.power_up_speed;
    sim.power_ups
        .push(PowerUp::new(BIRD_X + speed, 400.0, PowerUpKind::Shield));
    tick(&mut sim, &TickInput::default(), &mut stats);
    assert!(sim.events.contains(&GameEvent::PowerUp {
        kind: PowerUpKind::Shield
    }));
    assert_eq!(sim.bird.shield_ticks, duration);

    // Parked inside a pipe wall the whole time
    let blocked = || vec![Pipe::with_gap(BIRD_X - 20.0, 120.0)];
    for t in 1..duration {
        sim.pipes = blocked();
        step_held(&mut sim, &mut stats);
        assert!(!sim.is_game_over(), "died at tick {t} while shielded");
    }

    sim.pipes = blocked();
    step_held(&mut sim, &mut stats);
    assert!(!sim.bird.is_shielded());
    assert!(sim.is_game_over());
}

#[test]
fn restart_starts_a_fresh_run() {
    let mut sim = new_sim(4);
    let mut stats = GameStats::new();
    sim.score = 12;
    sim.environment
        .weather
        .set_weather(WeatherKind::Snow, 0.8, &mut sim.rng);
    sim.bird.y = HEIGHT;
    tick(&mut sim, &TickInput::default(), &mut stats);
    assert!(sim.is_game_over());
    assert_eq!(stats.average_score(), None);

    let restart = TickInput {
        restart: true,
        ..TickInput::default()
    };
    tick(&mut sim, &restart, &mut stats);
    assert!(!sim.is_game_over());
    assert_eq!(sim.score, 0);
    assert_eq!(sim.bird.y, BIRD_START_Y);
    assert_eq!(sim.environment.weather_kind(), WeatherKind::Clear);
    assert!(sim.environment.weather.particles.is_empty());
    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.high_score, 12);
    assert_eq!(stats.average_score(), Some(12.0));
}

#[test]
fn saved_high_score_never_drops() {
    let dir = std::env::temp_dir().join(format!("skyflap-scenario-{}", std::process::id()));
    let path = dir.join("highscore.json");
    let _ = std::fs::remove_dir_all(&dir);

    for (score, expected) in [(7, 7), (3, 7), (9, 9)] {
        let mut session = Session::new(new_sim(score), JsonFileStore::new(&path), AudioManager::default());
        session.simulation_mut().score = score;
        session.simulation_mut().bird.y = HEIGHT;
        session.frame(Default::default());
        assert!(session.is_game_over());
        assert_eq!(JsonFileStore::new(&path).load_high_score(), expected);
    }
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn latched_input_drives_a_session() {
    let mut session = Session::new(new_sim(5), MemoryStore::default(), AudioManager::default());
    let mut latch = InputLatch::new();

    latch.press(Action::Jump);
    assert!(session.frame(latch.take()));
    assert!(session.simulation().events.contains(&GameEvent::Jumped));

    // Still held: no second flap
    assert!(session.frame(latch.take()));
    assert!(!session.simulation().events.contains(&GameEvent::Jumped));

    latch.press(Action::Quit);
    assert!(!session.frame(latch.take()));
}

#[test]
fn same_seed_same_snapshot() {
    let run = || {
        let mut session = Session::new(new_sim(77), MemoryStore::default(), AudioManager::default());
        session.autopilot = true;
        for _ in 0..1200 {
            session.frame(Default::default());
        }
        serde_json::to_string(&session.snapshot()).unwrap()
    };
    assert_eq!(run(), run());
}
