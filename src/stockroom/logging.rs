//! File logging bootstrap.
//!
//! The library only talks to the `log` facade. Binaries call [`init_logging`]
//! once to route those records into size-rotated files.
//!
//! # Invariants
//! - Initialization happens at most once per process.
//! - Repeating it with the same directory and level is a no-op.
//! - Switching directory or level after the fact is rejected.

use crate::error::{Result, StockroomError};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "stockroom";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Starts the file logger writing under `log_dir` at `level`.
///
/// # Errors
/// - `InvalidValue` when `level` is not one of trace|debug|info|warn|error.
/// - `Io` when `log_dir` cannot be created.
/// - `Logging` when the backend fails to start or a different configuration
///   is already active.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<()> {
    let level = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState> {
        std::fs::create_dir_all(log_dir)?;

        let logger = Logger::try_with_str(level)
            .map_err(|err| StockroomError::Logging(format!("invalid log spec `{level}`: {err}")))?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|err| StockroomError::Logging(format!("failed to start logger: {err}")))?;

        info!(
            "event=app_start module=core status=ok version={} level={} log_dir={}",
            env!("CARGO_PKG_VERSION"),
            level,
            log_dir.display()
        );

        Ok(LoggingState {
            level,
            log_dir: log_dir.to_path_buf(),
            _logger: logger,
        })
    })?;

    if state.log_dir != log_dir {
        return Err(StockroomError::Logging(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            state.log_dir.display(),
            log_dir.display()
        )));
    }
    if state.level != level {
        return Err(StockroomError::Logging(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, level
        )));
    }
    Ok(())
}

/// Returns `(level, log_dir)` of the active logger, if any.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    LOGGING_STATE
        .get()
        .map(|state| (state.level, state.log_dir.clone()))
}

pub(crate) fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(StockroomError::InvalidValue(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        ))),
    }
}
