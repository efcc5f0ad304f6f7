use thiserror::Error;

use crate::errors::domain::DomainError;

/// Application-level error: everything the session layer can fail with.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Settings error: {detail}")]
    Settings { detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn settings(detail: impl Into<String>) -> Self {
        Self::Settings {
            detail: detail.into(),
        }
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(DomainError::InvalidConfig(_)) => "INVALID_MATCH_CONFIG",
            AppError::Domain(DomainError::PhaseMismatch { .. }) => "PHASE_MISMATCH",
            AppError::Domain(DomainError::UnknownSport(_)) => "UNKNOWN_SPORT",
            AppError::Domain(DomainError::TimerUnavailable(_)) => "TIMER_UNAVAILABLE",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Settings { .. } => "SETTINGS_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "JSON_ERROR",
        }
    }
}
