//! High-score persistence
//!
//! Stores only ever move the record upward. Failures are logged and
//! swallowed; a broken disk must never end a run.

mod background;
mod file;

pub use background::BackgroundStore;
pub use file::JsonFileStore;

/// Somewhere the all-time best score lives
pub trait HighScoreStore {
    /// Stored record, or 0 when nothing usable is stored
    fn load_high_score(&self) -> u64;

    /// Persist `candidate` if it beats the stored record
    fn save_high_score(&mut self, candidate: u64);
}

/// In-memory store for tests and throwaway runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    high_score: u64,
    writes: u32,
}

impl MemoryStore {
    pub fn new(high_score: u64) -> Self {
        Self {
            high_score,
            writes: 0,
        }
    }

    /// Number of saves that changed the record
    pub fn writes(&self) -> u32 {
        self.writes
    }
}

impl HighScoreStore for MemoryStore {
    fn load_high_score(&self) -> u64 {
        self.high_score
    }

    fn save_high_score(&mut self, candidate: u64) {
        if candidate > self.high_score {
            self.high_score = candidate;
            self.writes += 1;
        }
    }
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load_high_score(&self) -> u64 {
        (**self).load_high_score()
    }

    fn save_high_score(&mut self, candidate: u64) {
        (**self).save_high_score(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_memory_store_only_raises() {
        let mut store = MemoryStore::new(10);
        store.save_high_score(4);
        assert_eq!(store.load_high_score(), 10);
        store.save_high_score(10);
        assert_eq!(store.writes(), 0);
        store.save_high_score(12);
        assert_eq!(store.load_high_score(), 12);
        assert_eq!(store.writes(), 1);
    }

    proptest! {
        #[test]
        fn prop_saved_record_is_running_max(saves in prop::collection::vec(0u64..1000, 0..40)) {
            let mut store = MemoryStore::default();
            let mut prev = 0;
            for s in &saves {
                store.save_high_score(*s);
                prop_assert!(store.load_high_score() >= prev);
                prev = store.load_high_score();
            }
            prop_assert_eq!(store.load_high_score(), saves.iter().copied().max().unwrap_or(0));
        }
    }
}
