//! Top-level game session
//!
//! Wires one simulation to the outside world: per-frame input in, sound cues
//! and high-score saves out.

use rand_pcg::Pcg32;

use crate::audio::{AudioManager, AudioSink, LogSink};
use crate::highscores::GameStats;
use crate::persistence::HighScoreStore;
use crate::platform::FrameInput;
use crate::sim::{GameEvent, RandomSource, RenderSnapshot, Simulation, TickInput, tick};

pub struct Session<S: HighScoreStore, A: AudioSink = LogSink, R: RandomSource = Pcg32> {
    sim: Simulation<R>,
    stats: GameStats,
    store: S,
    audio: AudioManager<A>,
    /// Let the demo AI fly
    pub autopilot: bool,
}

impl<S: HighScoreStore, A: AudioSink, R: RandomSource> Session<S, A, R> {
    /// Start a session, seeding the stats with the stored high score
    pub fn new(sim: Simulation<R>, store: S, audio: AudioManager<A>) -> Self {
        let high_score = store.load_high_score();
        log::info!("Session started (high score {})", high_score);
        Self {
            sim,
            stats: GameStats::with_high_score(high_score),
            store,
            audio,
            autopilot: false,
        }
    }

    /// Run one frame. Returns false once the player asked to quit.
    pub fn frame(&mut self, input: FrameInput) -> bool {
        if input.quit {
            log::info!("Quit requested");
            return false;
        }

        let tick_input = TickInput {
            jump: input.jump,
            restart: input.restart,
            autopilot: self.autopilot,
        };
        tick(&mut self.sim, &tick_input, &mut self.stats);

        self.audio.play_events(&self.sim.events);
        for event in &self.sim.events {
            if let GameEvent::GameOver {
                score,
                new_high_score,
            } = *event
            {
                log::info!("Game over with {} (best {})", score, self.stats.high_score);
                if new_high_score {
                    self.store.save_high_score(self.stats.high_score);
                }
            }
        }
        true
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        self.sim.snapshot(&self.stats)
    }

    pub fn simulation(&self) -> &Simulation<R> {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation<R> {
        &mut self.sim
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &AudioManager<A> {
        &self.audio
    }

    pub fn is_game_over(&self) -> bool {
        self.sim.is_game_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::tuning::Tuning;

    fn session(high_score: u64) -> Session<MemoryStore> {
        Session::new(
            Simulation::with_seed(Tuning::default(), 11),
            MemoryStore::new(high_score),
            AudioManager::default(),
        )
    }

    #[test]
    fn test_new_loads_stored_high_score() {
        let session = session(25);
        assert_eq!(session.stats().high_score, 25);
        assert_eq!(session.snapshot().high_score, 25);
    }

    #[test]
    fn test_quit_stops_without_ticking() {
        let mut session = session(0);
        let running = session.frame(FrameInput {
            quit: true,
            jump: true,
            ..FrameInput::default()
        });
        assert!(!running);
        assert_eq!(session.simulation().time_ticks, 0);
    }

    #[test]
    fn test_game_over_persists_new_record() {
        let mut session = session(2);
        session.simulation_mut().score = 6;
        session.simulation_mut().bird.y = 2000.0;
        assert!(session.frame(FrameInput::default()));

        assert!(session.is_game_over());
        assert_eq!(session.store().load_high_score(), 6);
        assert_eq!(session.store().writes(), 1);

        // Frozen frames after the crash do not save again
        session.frame(FrameInput::default());
        assert_eq!(session.store().writes(), 1);
    }

    #[test]
    fn test_lower_score_is_not_saved() {
        let mut session = session(50);
        session.simulation_mut().score = 4;
        session.simulation_mut().bird.y = 2000.0;
        session.frame(FrameInput::default());
        assert!(session.is_game_over());
        assert_eq!(session.store().writes(), 0);
        assert_eq!(session.store().load_high_score(), 50);
    }
}
