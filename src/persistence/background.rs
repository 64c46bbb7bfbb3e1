//! Off-thread writer for high score saves

use std::io;
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use super::HighScoreStore;

/// Runs another store's saves on a writer thread
///
/// The caller keeps a cached record, so loads and the only-raise rule are
/// answered without waiting on the disk. Dropping the store drains pending
/// writes before returning.
pub struct BackgroundStore {
    cached: u64,
    tx: Option<Sender<u64>>,
    writer: Option<JoinHandle<()>>,
}

impl BackgroundStore {
    pub fn spawn<S>(mut inner: S) -> io::Result<Self>
    where
        S: HighScoreStore + Send + 'static,
    {
        let cached = inner.load_high_score();
        let (tx, rx) = mpsc::channel::<u64>();
        let writer = thread::Builder::new()
            .name("highscore-writer".into())
            .spawn(move || {
                for candidate in rx {
                    inner.save_high_score(candidate);
                }
                log::debug!("High score writer stopped");
            })?;

        Ok(Self {
            cached,
            tx: Some(tx),
            writer: Some(writer),
        })
    }
}

impl HighScoreStore for BackgroundStore {
    fn load_high_score(&self) -> u64 {
        self.cached
    }

    fn save_high_score(&mut self, candidate: u64) {
        if candidate <= self.cached {
            return;
        }
        self.cached = candidate;
        let sent = self.tx.as_ref().map(|tx| tx.send(candidate).is_ok());
        if sent != Some(true) {
            log::warn!("High score writer is gone; {} not persisted", candidate);
        }
    }
}

impl Drop for BackgroundStore {
    fn drop(&mut self) {
        // Closing the channel ends the writer loop
        self.tx.take();
        if let Some(writer) = self.writer.take() {
            if writer.join().is_err() {
                log::warn!("High score writer panicked");
            }
        }
    }
}
