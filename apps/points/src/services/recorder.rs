use tracing::info;

use crate::domain::match_state::MatchState;
use crate::domain::record::Match;
use crate::errors::domain::DomainError;
use crate::services::match_timer::MatchTimer;
use crate::state::session::SharedHistory;

/// Finishes matches and archives them into the session history.
#[derive(Debug, Clone)]
pub struct MatchRecorder {
    history: SharedHistory,
}

impl MatchRecorder {
    pub fn new(history: SharedHistory) -> Self {
        Self { history }
    }

    pub fn history(&self) -> &SharedHistory {
        &self.history
    }

    /// Finish `state` and push its record to the history.
    pub fn archive(&self, state: &mut MatchState) -> Result<Match, DomainError> {
        let record = state.finish()?;
        self.store(record.clone());
        Ok(record)
    }

    /// Like [`MatchRecorder::archive`], stopping `timer` and stamping its
    /// elapsed value on the record.
    pub fn archive_timed(
        &self,
        state: &mut MatchState,
        timer: &mut MatchTimer,
    ) -> Result<Match, DomainError> {
        timer.pause();
        let record = state.finish_with_elapsed(timer.elapsed())?;
        self.store(record.clone());
        Ok(record)
    }

    fn store(&self, record: Match) {
        let id = record.id;
        let sport = record.sport;
        let tally = record.tally();
        let evicted = self.history.add(record);
        info!(match_id = %id, %sport, %tally, "match archived");
        if let Some(old) = evicted {
            info!(match_id = %old.id, "history full, evicted oldest match");
        }
    }
}
