// Configuration module for threadpeek
// This module handles loading and parsing configuration from ~/.config/threadpeek/config.toml

mod types;

pub use types::{BannerConfig, Config, DEFAULT_BANNER_WIDTH, DEFAULT_TOAST_WIDTH};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ThreadPeekError;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

impl ConfigResult {
    fn defaults(warning: Option<String>) -> Self {
        ConfigResult {
            config: Config::default(),
            warning,
        }
    }
}

/// Loads configuration from an explicit path, or from ~/.config/threadpeek/config.toml
///
/// The default location may be absent, in which case defaults are returned silently.
/// An explicit path that does not exist is an error. Read and parse failures never
/// fail the load: defaults are returned with a warning for the status line.
pub fn load_config(explicit: Option<&Path>) -> Result<ConfigResult, ThreadPeekError> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ThreadPeekError::ConfigNotFound(path.to_path_buf()));
            }
            Ok(load_config_from(path))
        }
        None => Ok(load_config_from(&get_config_path())),
    }
}

/// Loads configuration from `config_path`, falling back to defaults
pub fn load_config_from(config_path: &Path) -> ConfigResult {
    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    if !config_path.exists() {
        #[cfg(debug_assertions)]
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult::defaults(None);
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult::defaults(Some(format!("Failed to read config: {}", e)));
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            #[cfg(debug_assertions)]
            log::debug!(
                "Config parsed: width={} toast_width={} placement={:?}",
                config.banner.width,
                config.banner.toast_width,
                config.banner.placement
            );
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult::defaults(Some(format!("Invalid config: {}", e)))
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/threadpeek/config.toml on all platforms for consistency.
pub fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("threadpeek")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
