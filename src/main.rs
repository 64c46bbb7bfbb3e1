//! Skyflap entry point
//!
//! Headless demo: the autopilot plays a few rounds at 60 Hz while the log
//! narrates. A windowed front end would drive the same `Session` with real
//! key events fed through an `InputLatch`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use skyflap::audio::AudioManager;
    use skyflap::consts::TICK_HZ;
    use skyflap::persistence::{BackgroundStore, HighScoreStore, JsonFileStore, MemoryStore};
    use skyflap::platform::{Action, FrameClock, InputLatch};
    use skyflap::sim::Simulation;
    use skyflap::{Session, Settings};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Skyflap (headless demo) starting...");

    let settings = Settings::load_or_default();
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Seed {}", seed);

    let store: Box<dyn HighScoreStore> = match settings.high_score_path() {
        Some(path) => match BackgroundStore::spawn(JsonFileStore::new(path)) {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("No background writer ({}), high score kept in memory", e);
                Box::new(MemoryStore::default())
            }
        },
        None => {
            log::warn!("No data directory, high score kept in memory");
            Box::new(MemoryStore::default())
        }
    };

    let mut audio = AudioManager::default();
    settings.apply_audio(&mut audio);

    let sim = Simulation::with_seed(settings.effective_tuning(), seed);
    let mut session = Session::new(sim, store, audio);
    session.autopilot = true;

    let mut clock = FrameClock::new(TICK_HZ);
    let mut latch = InputLatch::new();
    let mut rounds = 0;
    // Pause on the game-over screen before the demo restarts
    let mut game_over_frames = 0;

    loop {
        if session.is_game_over() {
            game_over_frames += 1;
            if game_over_frames == 1 {
                rounds += 1;
            }
            if rounds >= settings.demo_rounds {
                latch.press(Action::Quit);
            } else if game_over_frames > TICK_HZ {
                latch.press(Action::Restart);
                game_over_frames = 0;
            }
        }

        if !session.frame(latch.take()) {
            break;
        }
        latch.release(Action::Restart);

        if clock.frames() % u64::from(TICK_HZ * 5) == 0 {
            let snap = session.snapshot();
            log::info!(
                "t={}s score={} best={} season={} weather={} band={:?}",
                snap.tick / u64::from(TICK_HZ),
                snap.score,
                snap.high_score,
                snap.environment.season,
                snap.environment.weather,
                snap.environment.band,
            );
        }
        clock.wait();
    }

    let stats = session.stats();
    match stats.average_score() {
        Some(avg) => log::info!(
            "Done: {} rounds, best {}, average {:.1}",
            rounds,
            stats.high_score,
            avg
        ),
        None => log::info!("Done: {} rounds, best {}", rounds, stats.high_score),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No web front end; the library is the product on wasm
}
