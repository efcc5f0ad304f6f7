use std::sync::Arc;

use parking_lot::Mutex;
use time::UtcOffset;
use tracing::info;

use crate::config::app::AppConfig;
use crate::domain::history::{DayGroup, MatchHistory};
use crate::domain::match_config::MatchConfig;
use crate::domain::match_state::MatchState;
use crate::domain::record::Match;
use crate::error::AppError;
use crate::services::match_timer::MatchTimer;
use crate::services::recorder::MatchRecorder;
use crate::settings::preferences::Settings;
use crate::settings::store::{JsonFileStore, MemoryStore, SettingsStore};

/// Handle to the session's match history.
///
/// Every read and write goes through one mutex, so an `add` or `clear` is
/// never observed half-done by a grouped read.
#[derive(Debug, Clone)]
pub struct SharedHistory {
    inner: Arc<Mutex<MatchHistory>>,
}

impl SharedHistory {
    pub fn new(history: MatchHistory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(history)),
        }
    }

    pub fn add(&self, entry: Match) -> Option<Match> {
        self.inner.lock().add(entry)
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Copy of the records, newest first.
    pub fn snapshot(&self) -> Vec<Match> {
        self.inner.lock().iter().cloned().collect()
    }

    pub fn grouped_by_day(&self) -> Vec<DayGroup> {
        self.inner.lock().grouped_by_day()
    }

    pub fn grouped_by_day_in(&self, offset: UtcOffset) -> Vec<DayGroup> {
        self.inner.lock().grouped_by_day_in(offset)
    }
}

/// Application session: built once at startup and passed to every consumer.
#[derive(Debug, Clone)]
pub struct SessionState {
    config: AppConfig,
    history: SharedHistory,
    settings: Arc<Mutex<Settings>>,
}

impl SessionState {
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn history(&self) -> &SharedHistory {
        &self.history
    }

    pub fn settings(&self) -> &Arc<Mutex<Settings>> {
        &self.settings
    }

    pub fn recorder(&self) -> MatchRecorder {
        MatchRecorder::new(self.history.clone())
    }

    /// Fresh match in Setup for a validated config.
    pub fn new_match(&self, config: MatchConfig) -> MatchState {
        MatchState::new(config)
    }

    /// Stopped timer using the configured tick.
    pub fn new_timer(&self) -> MatchTimer {
        MatchTimer::with_tick(self.config.timer_tick)
    }
}

/// Builder for creating SessionState instances (used in both tests and binaries)
#[derive(Debug, Default)]
pub struct SessionBuilder {
    config: Option<AppConfig>,
    store: Option<Arc<dyn SettingsStore>>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Explicit store; overrides `settings_path` from the config.
    pub fn with_store(mut self, store: Arc<dyn SettingsStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> Result<SessionState, AppError> {
        let config = match self.config {
            Some(config) => config,
            None => AppConfig::from_env()?,
        };

        let store: Arc<dyn SettingsStore> = match (self.store, &config.settings_path) {
            (Some(store), _) => store,
            (None, Some(path)) => Arc::new(JsonFileStore::new(path.clone())),
            (None, None) => Arc::new(MemoryStore::new()),
        };
        let settings = Settings::load(store)?;

        info!(
            history_capacity = config.history_capacity,
            settings_file = ?config.settings_path,
            "session ready"
        );

        Ok(SessionState {
            history: SharedHistory::new(MatchHistory::with_capacity(config.history_capacity)),
            settings: Arc::new(Mutex::new(settings)),
            config,
        })
    }
}

pub fn build_session() -> SessionBuilder {
    SessionBuilder::new()
}
