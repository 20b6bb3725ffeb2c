// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Structured logging via `tracing`.
//!
//! The terminal belongs to the UI, so events go to a log file. `POLICYSCOPE_LOG` overrides the
//! configured filter (same syntax as `RUST_LOG`).

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const LOG_ENV_VAR: &str = "POLICYSCOPE_LOG";

const LOG_FILE_NAME: &str = "policyscope.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter {filter:?}: {message}")]
    Filter { filter: String, message: String },
    #[error("could not determine a state directory for the log file")]
    NoStateDir,
    #[error("failed to open log file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("a global subscriber is already installed")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Filter directive: `trace`, `debug`, `info`, `warn`, `error`, `off`, or per-module
    /// directives such as `policyscope::nav=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file; `None` uses the platform state directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            file: None,
        }
    }
}

/// Log file path: explicit config first, then the platform state directory.
pub fn resolve_log_file_path(config: &LoggingConfig) -> Result<PathBuf, LoggingError> {
    if let Some(path) = config.file.as_ref().filter(|path| !path.as_os_str().is_empty()) {
        return Ok(path.clone());
    }
    let dirs = directories::ProjectDirs::from("", "policyscope", "policyscope")
        .ok_or(LoggingError::NoStateDir)?;
    let dir = dirs.state_dir().unwrap_or_else(|| dirs.data_local_dir());
    Ok(dir.join(LOG_FILE_NAME))
}

fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|err| LoggingError::Filter {
        filter: config.level.clone(),
        message: err.to_string(),
    })
}

/// Installs the global subscriber. Disabled logging installs nothing.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LoggingError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = build_env_filter(config)?;
    let path = resolve_log_file_path(config)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| LoggingError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LoggingError::Io {
            path: path.clone(),
            source,
        })?;

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}
