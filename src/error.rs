//! Setup errors
//!
//! Everything that can go wrong happens while wiring a rocket up. Per-frame
//! processing never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("rocket is missing its {0}")]
    MissingCollaborator(&'static str),
    #[error("invalid setting `{name}`: {value}")]
    InvalidSetting { name: &'static str, value: String },
    #[error("failed to parse settings: {0}")]
    Config(#[from] serde_json::Error),
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
}

impl SetupError {
    pub(crate) fn invalid(name: &'static str, value: impl ToString) -> Self {
        SetupError::InvalidSetting {
            name,
            value: value.to_string(),
        }
    }
}
