//! High score record kept as a small JSON file

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::HighScoreStore;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Record {
    high_score: u64,
}

/// JSON record on disk: `{"high_score": N}`
///
/// Writes land in a `.tmp` sibling first and are renamed over the record,
/// so a crash mid-write leaves the previous record intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read(&self) -> io::Result<u64> {
        let text = fs::read_to_string(&self.path)?;
        let record: Record = serde_json::from_str(&text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(record.high_score)
    }

    fn write(&self, high_score: u64) -> io::Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string(&Record { high_score })
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let tmp = self.tmp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)
    }
}

impl HighScoreStore for JsonFileStore {
    fn load_high_score(&self) -> u64 {
        match self.read() {
            Ok(score) => score,
            Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => {
                log::warn!("Ignoring unreadable high score {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save_high_score(&mut self, candidate: u64) {
        if candidate <= self.load_high_score() {
            return;
        }
        match self.write(candidate) {
            Ok(()) => log::info!("High score {} saved to {}", candidate, self.path.display()),
            Err(e) => log::warn!("Failed to save high score to {}: {}", self.path.display(), e),
        }
    }
}
