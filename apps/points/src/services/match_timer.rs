//! Elapsed-time counter for a live match.
//!
//! The only asynchronous piece of the core: a Tokio task ticks the counter
//! once per period while the timer runs. Pausing or dropping the timer
//! cancels that task, so no tick can land after teardown.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::errors::domain::DomainError;

pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Default)]
struct Clock {
    elapsed: u64,
    laps: Vec<u64>,
}

#[derive(Debug)]
pub struct MatchTimer {
    clock: Arc<Mutex<Clock>>,
    tick: Duration,
    running: Option<CancellationToken>,
}

impl Default for MatchTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchTimer {
    pub fn new() -> Self {
        Self::with_tick(DEFAULT_TICK)
    }

    /// Timer whose counter advances once per `tick`.
    pub fn with_tick(tick: Duration) -> Self {
        Self {
            clock: Arc::new(Mutex::new(Clock::default())),
            tick: tick.max(Duration::from_millis(1)),
            running: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Accumulated ticks (seconds with the default tick).
    pub fn elapsed(&self) -> u64 {
        self.clock.lock().elapsed
    }

    pub fn laps(&self) -> Vec<u64> {
        self.clock.lock().laps.clone()
    }

    /// Start counting from the current value. Idempotent while running.
    ///
    /// Must be called from inside a Tokio runtime. Never called
    /// implicitly: the caller decides when the match is ready.
    pub fn start(&mut self) -> Result<(), DomainError> {
        if self.running.is_some() {
            return Ok(());
        }
        let handle = Handle::try_current()
            .map_err(|e| DomainError::TimerUnavailable(e.to_string()))?;

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let clock = Arc::clone(&self.clock);
        let period = self.tick;

        handle.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = ticker.tick() => clock.lock().elapsed += 1,
                }
            }
        });

        debug!(elapsed = self.elapsed(), "timer started");
        self.running = Some(token);
        Ok(())
    }

    /// Stop counting; the accumulated value is kept.
    pub fn pause(&mut self) {
        if let Some(token) = self.running.take() {
            token.cancel();
            debug!(elapsed = self.elapsed(), "timer paused");
        }
    }

    /// Zero the counter and drop laps. Does not change running state.
    pub fn reset(&mut self) {
        let mut clock = self.clock.lock();
        clock.elapsed = 0;
        clock.laps.clear();
    }

    /// Record the current value as a lap and return it.
    pub fn lap(&mut self) -> u64 {
        let mut clock = self.clock.lock();
        let at = clock.elapsed;
        clock.laps.push(at);
        at
    }

    /// Advance one tick by hand, for callers driving their own clock.
    pub fn tick(&self) {
        self.clock.lock().elapsed += 1;
    }
}

impl Drop for MatchTimer {
    fn drop(&mut self) {
        if let Some(token) = self.running.take() {
            token.cancel();
        }
    }
}

/// `MM:SS`, or `H:MM:SS` from one hour on.
pub fn format_elapsed(secs: u64) -> String {
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m:02}:{s:02}")
    }
}
