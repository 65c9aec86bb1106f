// src/log.rs
/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_ENV, LOG_FILE};

/// Where log lines go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to `.store/debug.log` (GUI; there's no console on Windows).
    File,
    /// Write to stderr so stdout stays clean for data (CLI).
    Stderr,
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global tracing subscriber. Safe to call more than once;
/// only the first call wins.
pub fn init(target: LogTarget) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_target(false);

    let installed = match target {
        LogTarget::File => match open_log_file(Path::new(LOG_FILE)) {
            Ok(file) => builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .is_ok(),
            Err(e) => {
                eprintln!("Log file unavailable ({e}), logging to stderr");
                builder.with_writer(std::io::stderr).try_init().is_ok()
            }
        },
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init().is_ok(),
    };

    if installed {
        logd!("Log: subscriber installed ({:?})", target);
    }
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}
