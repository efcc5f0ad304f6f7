//! Domain-level error type used by the scoring core.
//!
//! Scoring itself is total: ignored actions are reported through return
//! values, not errors. `DomainError` only covers caller-contract violations
//! (bad setup, lifecycle misuse) and a missing timer runtime. Callers that
//! also deal with configuration or storage convert it into
//! `crate::error::AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::match_state::Phase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Match setup rejected before the match can become active.
    InvalidConfig(String),
    /// Operation requires a different lifecycle phase.
    PhaseMismatch { expected: Phase, actual: Phase },
    /// Sport name not present in the catalogue.
    UnknownSport(String),
    /// The tick task could not be scheduled.
    TimerUnavailable(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidConfig(d) => write!(f, "invalid match config: {d}"),
            DomainError::PhaseMismatch { expected, actual } => {
                write!(f, "phase mismatch: expected {expected:?}, got {actual:?}")
            }
            DomainError::UnknownSport(s) => write!(f, "unknown sport: {s}"),
            DomainError::TimerUnavailable(d) => write!(f, "timer unavailable: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_config(detail: impl Into<String>) -> Self {
        Self::InvalidConfig(detail.into())
    }
}
