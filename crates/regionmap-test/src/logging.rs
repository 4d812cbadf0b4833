//! Logger setup for test binaries

use crate::error::{TestError, TestResult};
use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use std::sync::OnceLock;

static LOGGER: OnceLock<Option<LoggerHandle>> = OnceLock::new();

fn start_logger() -> TestResult<LoggerHandle> {
    let handle = Logger::try_with_env_or_str("warn")
        .map_err(|e| TestError::Logger(e.to_string()))?
        .log_to_stderr()
        .start()
        .map_err(|e| TestError::Logger(e.to_string()))?;
    debug!("test logging started");
    Ok(handle)
}

/// Route `log` records to stderr, filtered by `RUST_LOG` (default `warn`).
///
/// Safe to call from every test; only the first call starts the logger.
/// Returns `false` if the logger could not be started, for example because
/// another logger was installed first.
pub fn init_test_logging() -> bool {
    LOGGER
        .get_or_init(|| match start_logger() {
            Ok(handle) => Some(handle),
            Err(e) => {
                eprintln!("{}", e);
                None
            }
        })
        .is_some()
}
