// SPDX-FileCopyrightText: 2025-2026 Campus Events Hub contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use campus_events_core::{APP_NAME, Config as CoreConfig};
use tokio::fs;

const CONFIG_ENV: &str = "CAMPUS_EVENTS_CONFIG";

/// Loads the configuration.
///
/// Lookup order: the `--config` path, then `$CAMPUS_EVENTS_CONFIG`, then
/// `<config dir>/campus-events/config.toml`. Only a missing default file
/// falls back to the built-in defaults; an explicit path must exist.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<CoreConfig, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok(CoreConfig::default());
        }
        config
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| a.core)
}

#[derive(Debug, Default, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| format!("Failed to parse config: {e}").into())
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
