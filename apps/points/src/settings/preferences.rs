use std::collections::BTreeSet;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::domain::sport::{Sport, SPORT_CATALOGUE};
use crate::error::AppError;
use crate::settings::store::SettingsStore;

pub const SPORTS_KEY: &str = "Sports";
pub const SELECTED_SPORTS_KEY: &str = "SelectedSports";
pub const LONG_PRESS_KEY: &str = "longPressEnabled";

/// User preferences, written through to the store on every change.
///
/// The core never interprets these; they drive the sport menu and the
/// finish gesture in the presentation layer.
#[derive(Debug, Clone)]
pub struct Settings {
    sports: Vec<Sport>,
    selected: BTreeSet<Sport>,
    long_press_finish: bool,
    store: Arc<dyn SettingsStore>,
}

impl Settings {
    /// Read preferences from `store`, falling back to defaults for missing or
    /// undecodable entries.
    pub fn load(store: Arc<dyn SettingsStore>) -> Result<Self, AppError> {
        let mut sports: Vec<Sport> =
            read_or_default(store.as_ref(), SPORTS_KEY, || SPORT_CATALOGUE.to_vec())?;
        let mut seen = BTreeSet::new();
        sports.retain(|s| seen.insert(*s));

        let selected: Vec<Sport> =
            read_or_default(store.as_ref(), SELECTED_SPORTS_KEY, || SPORT_CATALOGUE.to_vec())?;
        let long_press_finish = read_or_default(store.as_ref(), LONG_PRESS_KEY, || true)?;

        Ok(Self {
            sports,
            selected: selected.into_iter().collect(),
            long_press_finish,
            store,
        })
    }

    pub fn sports(&self) -> &[Sport] {
        &self.sports
    }

    pub fn is_enabled(&self, sport: Sport) -> bool {
        self.selected.contains(&sport)
    }

    pub fn long_press_finish(&self) -> bool {
        self.long_press_finish
    }

    /// Menu entries: configured order, enabled sports only.
    pub fn visible_sports(&self) -> Vec<Sport> {
        self.sports
            .iter()
            .copied()
            .filter(|s| self.selected.contains(s))
            .collect()
    }

    /// Move the sport at `from` so it lands at `to`. Out-of-range is a no-op.
    ///
    /// Each setter saves the new value first and only commits it in memory
    /// once the store accepted it.
    pub fn move_sport(&mut self, from: usize, to: usize) -> Result<bool, AppError> {
        if from >= self.sports.len() || to >= self.sports.len() || from == to {
            return Ok(false);
        }
        let mut sports = self.sports.clone();
        let sport = sports.remove(from);
        sports.insert(to, sport);
        self.store.save(SPORTS_KEY, serde_json::to_value(&sports)?)?;
        self.sports = sports;
        Ok(true)
    }

    pub fn set_sport_enabled(&mut self, sport: Sport, enabled: bool) -> Result<(), AppError> {
        if self.selected.contains(&sport) == enabled {
            return Ok(());
        }
        let mut selected = self.selected.clone();
        if enabled {
            selected.insert(sport);
        } else {
            selected.remove(&sport);
        }
        self.store
            .save(SELECTED_SPORTS_KEY, serde_json::to_value(&selected)?)?;
        self.selected = selected;
        Ok(())
    }

    pub fn set_long_press_finish(&mut self, enabled: bool) -> Result<(), AppError> {
        self.store.save(LONG_PRESS_KEY, Value::Bool(enabled))?;
        self.long_press_finish = enabled;
        Ok(())
    }
}

fn read_or_default<T, F>(store: &dyn SettingsStore, key: &str, default: F) -> Result<T, AppError>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let Some(raw) = store.load(key)? else {
        return Ok(default());
    };
    match serde_json::from_value(raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(key, error = %e, "stored setting unreadable, using default");
            Ok(default())
        }
    }
}
