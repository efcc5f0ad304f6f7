//! Shared helpers for the `points` integration tests: one-time logging and
//! match fixtures.

pub mod fixtures;
pub mod logging;
