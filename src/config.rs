// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layered settings.
//!
//! Precedence (lowest to highest): built-in defaults, optional TOML file, `POLICYSCOPE__*`
//! environment variables (`__` separates nested keys, e.g. `POLICYSCOPE__LAYOUT__NARROW_WIDTH`).

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::logging::LoggingConfig;

pub const ENV_PREFIX: &str = "POLICYSCOPE";

const DEFAULT_NARROW_WIDTH: u16 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Terminals narrower than this render the stacked (mobile) page.
    #[serde(default = "default_narrow_width")]
    pub narrow_width: u16,
}

fn default_narrow_width() -> u16 {
    DEFAULT_NARROW_WIDTH
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            narrow_width: default_narrow_width(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Metadata JSON; the built-in demo metadata is used when unset.
    #[serde(default)]
    pub metadata: Option<PathBuf>,
    /// Directory of reform documents; reforms live in memory only when unset.
    #[serde(default)]
    pub reform_dir: Option<PathBuf>,
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Loads settings from an optional file plus the environment.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(file, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(file: Option<&Path>, environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(File::from(file).format(FileFormat::Toml).required(true));
        }
        builder = builder.add_source(
            environment
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );
        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use config::Environment;

    use super::{Settings, ENV_PREFIX};

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect::<HashMap<_, _>>();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn defaults_apply_without_sources() {
        let settings = Settings::load_with_env(None, env(&[])).expect("settings");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.layout.narrow_width, 100);
        assert!(settings.metadata.is_none());
    }

    #[test]
    fn file_then_environment_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policyscope.toml");
        std::fs::write(
            &path,
            "metadata = \"/data/uk.json\"\n[layout]\nnarrow_width = 80\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let settings = Settings::load_with_env(
            Some(&path),
            env(&[("POLICYSCOPE__LAYOUT__NARROW_WIDTH", "120")]),
        )
        .expect("settings");

        assert_eq!(settings.metadata.as_deref(), Some(std::path::Path::new("/data/uk.json")));
        assert_eq!(settings.layout.narrow_width, 120);
        assert_eq!(settings.logging.level, "debug");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(Settings::load_with_env(Some(&path), env(&[])).is_err());
    }
}
