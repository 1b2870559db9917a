//! Test-time tracing for `jeo`.
//!
//! Both the `jeo` unit tests and its integration test binaries call [`init`]
//! from a `ctor` hook, so interpreter and console logs show up under
//! `cargo test -- --nocapture` when asked for.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when neither `TEST_LOG` nor `RUST_LOG` is set. Rejected
/// entries log at `warn`, so they stay visible by default.
const DEFAULT_DIRECTIVE: &str = "warn";

static SUBSCRIBER: OnceCell<()> = OnceCell::new();

/// Install the test subscriber once per process. Later calls do nothing.
pub fn init() {
    SUBSCRIBER.get_or_init(|| {
        // A subscriber installed by someone else wins.
        let _ = fmt()
            .with_env_filter(test_filter())
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init();
    });
}

// `TEST_LOG` lets a test run be made noisy without touching `RUST_LOG`.
fn test_filter() -> EnvFilter {
    ["TEST_LOG", "RUST_LOG"]
        .into_iter()
        .find_map(|key| std::env::var(key).ok())
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
