use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::history::DEFAULT_HISTORY_CAPACITY;
use crate::error::AppError;

pub const HISTORY_CAPACITY_VAR: &str = "POINTS_HISTORY_CAPACITY";
pub const SETTINGS_PATH_VAR: &str = "POINTS_SETTINGS_PATH";
pub const TIMER_TICK_MS_VAR: &str = "POINTS_TIMER_TICK_MS";

const DEFAULT_TICK_MS: u64 = 1000;

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Maximum number of archived matches kept in history
    pub history_capacity: usize,
    /// Settings file; `None` keeps preferences in memory only
    pub settings_path: Option<PathBuf>,
    /// Match timer period
    pub timer_tick: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            settings_path: None,
            timer_tick: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

impl AppConfig {
    /// Builds the config from environment variables, defaulting what is unset
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            history_capacity: history_capacity()?,
            settings_path: settings_path(),
            timer_tick: Duration::from_millis(timer_tick_ms()?),
        })
    }
}

/// History capacity (defaults to 20, must be at least 1)
fn history_capacity() -> Result<usize, AppError> {
    let capacity = parse_var(HISTORY_CAPACITY_VAR)?.unwrap_or(DEFAULT_HISTORY_CAPACITY as u64);
    if capacity == 0 {
        return Err(AppError::config(format!(
            "{HISTORY_CAPACITY_VAR} must be at least 1"
        )));
    }
    usize::try_from(capacity)
        .map_err(|_| AppError::config(format!("{HISTORY_CAPACITY_VAR} is out of range")))
}

fn settings_path() -> Option<PathBuf> {
    env::var_os(SETTINGS_PATH_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Timer tick in milliseconds (defaults to 1000, must be at least 1)
fn timer_tick_ms() -> Result<u64, AppError> {
    let ms = parse_var(TIMER_TICK_MS_VAR)?.unwrap_or(DEFAULT_TICK_MS);
    if ms == 0 {
        return Err(AppError::config(format!("{TIMER_TICK_MS_VAR} must be at least 1")));
    }
    Ok(ms)
}

/// Optional unsigned integer variable; set-but-invalid is an error
fn parse_var(name: &str) -> Result<Option<u64>, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{name} must be a whole number, got '{raw}'"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(AppError::config(format!("{name} is not valid unicode")))
        }
    }
}
