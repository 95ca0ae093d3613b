//! Shared setup for the hello_core integration tests.
#![allow(dead_code)]

use std::fmt::Debug;
use std::sync::Once;

use flexi_logger::Logger;

static SETUP: Once = Once::new();

/// Starts logging for this test binary. Runs once, before the first case
/// that calls it; later calls are no-ops.
///
/// Markers are logged at `info`, so run with `RUST_LOG=info` to see them.
pub fn setup() {
    SETUP.call_once(|| {
        Logger::try_with_env_or_str("warn")
            .expect("parse log spec")
            .log_to_stderr()
            .start()
            .expect("start logger");
        log::info!("Start unit test");
    });
}

/// Collects mismatches without stopping the test. Call [`Checks::finish`]
/// at the end to fail with every recorded message.
#[derive(Debug, Default)]
pub struct Checks {
    failures: Vec<String>,
}

impl Checks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure when `actual != expected` and returns whether the
    /// check passed.
    pub fn eq<T: PartialEq + Debug>(&mut self, expected: T, actual: T, context: &str) -> bool {
        if expected == actual {
            return true;
        }
        let msg = format!("{context}: expected {expected:?}, got {actual:?}");
        log::error!("{msg}");
        self.failures.push(msg);
        false
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    pub fn finish(self) {
        assert!(
            self.failures.is_empty(),
            "{} check(s) failed:\n{}",
            self.failures.len(),
            self.failures.join("\n")
        );
    }
}
