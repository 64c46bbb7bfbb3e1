//! Configuration errors
//!
//! Runtime failures (storage, audio) never surface: they are logged and
//! swallowed where they happen. Only bad configuration is an error, and it is
//! rejected when the configuration is built.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown power-up kind `{0}`")]
    UnknownPowerUp(String),

    #[error("unknown weather kind `{0}`")]
    UnknownWeather(String),

    #[error("invalid tuning value for `{field}`: {reason}")]
    InvalidTuning { field: &'static str, reason: String },

    #[error("failed to parse settings: {0}")]
    Parse(String),
}

impl ConfigError {
    pub(crate) fn tuning(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidTuning {
            field,
            reason: reason.into(),
        }
    }
}
