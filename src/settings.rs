//! Game settings and preferences
//!
//! Stored as JSON in the platform config directory, separately from the
//! high score (which lives in the data directory).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::audio::{AudioManager, AudioSink};
use crate::error::ConfigError;
use crate::tuning::Tuning;

const APP_NAME: &str = "skyflap";
const SETTINGS_FILE: &str = "settings.json";
const HIGH_SCORE_FILE: &str = "highscore.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Visual Effects ===
    /// Particle effects (score bursts, pickups)
    pub particles: bool,

    // === Run ===
    /// Fixed RNG seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
    /// High score file override
    pub save_path: Option<PathBuf>,
    /// Rounds the headless demo plays before exiting
    pub demo_rounds: u32,

    /// Game balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            particles: true,

            seed: None,
            save_path: None,
            demo_rounds: 3,

            tuning: Tuning::default(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

impl Settings {
    /// Default settings file location
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// Where the high score is kept: the override, else the data directory
    pub fn high_score_path(&self) -> Option<PathBuf> {
        self.save_path
            .clone()
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().join(HIGH_SCORE_FILE)))
    }

    /// Parse and validate settings JSON
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.tuning.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`
    ///
    /// A missing or unreadable file yields defaults. A file that parses but
    /// carries invalid tuning is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                log::warn!("Could not read {}: {}; using defaults", path.display(), e);
                return Ok(Self::default());
            }
        };

        match Self::parse(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(ConfigError::Parse(reason)) => {
                log::warn!("Corrupt settings {}: {}; using defaults", path.display(), reason);
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Load from the default location, falling back to defaults on any
    /// problem
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            log::info!("No config directory, using default settings");
            return Self::default();
        };
        Self::load(&path).unwrap_or_else(|e| {
            log::error!("Rejected settings {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Balance the simulation should run with (particle toggle applied)
    pub fn effective_tuning(&self) -> Tuning {
        let mut tuning = self.tuning.clone();
        if !self.particles {
            tuning.max_particles = 0;
        }
        tuning
    }

    pub fn apply_audio<S: AudioSink>(&self, audio: &mut AudioManager<S>) {
        audio.set_master_volume(self.master_volume);
        audio.set_sfx_volume(self.sfx_volume);
        audio.set_muted(self.muted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::parse(r#"{"muted": true, "tuning": {"pipe_speed": 3.0}}"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.tuning.pipe_speed, 3.0);
        assert_eq!(settings.tuning.pipe_gap, Tuning::default().pipe_gap);
        assert_eq!(settings.demo_rounds, 3);
    }

    #[test]
    fn test_invalid_tuning_is_rejected() {
        let err = Settings::parse(r#"{"tuning": {"pipe_gap": 900.0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTuning { field: "pipe_gap", .. }));
    }

    #[test]
    fn test_out_of_range_gap_settings_are_rejected() {
        let err = Settings::parse(r#"{"tuning": {"pipe_gap": 1e30}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTuning { field: "pipe_gap", .. }));

        let err = Settings::parse(r#"{"tuning": {"gap_floor_margin": -400}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidTuning {
                field: "gap_floor_margin",
                ..
            }
        ));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        assert!(matches!(Settings::parse("{{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_particles_off_zeroes_cap() {
        let settings = Settings {
            particles: false,
            ..Settings::default()
        };
        assert_eq!(settings.effective_tuning().max_particles, 0);
    }

    #[test]
    fn test_save_path_override() {
        let settings = Settings {
            save_path: Some(PathBuf::from("/tmp/best.json")),
            ..Settings::default()
        };
        assert_eq!(settings.high_score_path(), Some(PathBuf::from("/tmp/best.json")));
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("skyflap-settings-{}", std::process::id()));
        let path = dir.join(SETTINGS_FILE);

        assert_eq!(Settings::load(&path).unwrap(), Settings::default());

        let settings = Settings {
            seed: Some(99),
            demo_rounds: 1,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);

        fs::write(&path, "corrupt").unwrap();
        assert_eq!(Settings::load(&path).unwrap(), Settings::default());
        let _ = fs::remove_dir_all(&dir);
    }
}
