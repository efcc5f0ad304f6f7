//! One subscriber per test binary.
//!
//! Installed from `ctor` hooks in the `points` unit and integration tests.
//! `TEST_LOG` wins over `RUST_LOG`; with neither set only warnings show.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

const FILTER_VARS: [&str; 2] = ["TEST_LOG", "RUST_LOG"];
const QUIET: &str = "warn";

static INSTALLED: OnceCell<()> = OnceCell::new();

fn filter() -> EnvFilter {
    FILTER_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(QUIET))
}

/// Safe to call repeatedly; a subscriber installed elsewhere is left alone.
pub fn init() {
    INSTALLED.get_or_init(|| {
        let _ = fmt()
            .compact()
            .with_env_filter(filter())
            .with_test_writer()
            .without_time()
            .try_init();
    });
}
