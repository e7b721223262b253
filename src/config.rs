//! Optional configuration file with defaults for the command line options.
//!
//! ```toml
//! controller = "intel_backlight"
//!
//! [discovery]
//! paths = ["/sys/class/backlight", "/sys/class/leds"]
//!
//! [fade]
//! time = 200
//! steps = 0
//! fps = 0
//! ```

use crate::external::brightness::discovery::CONTROLLERS_PATHS;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

const CONFIG_FILE: &str = "lucerna/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Name or path of the controller used when `-ctrl` isn't given
    pub controller: Option<String>,
    pub discovery: DiscoveryConfig,
    pub fade: FadeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// Directories scanned for controllers, in order
    pub paths: Vec<PathBuf>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        DiscoveryConfig {
            paths: CONTROLLERS_PATHS.iter().map(PathBuf::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FadeConfig {
    /// Fading period in milliseconds
    pub time: u64,
    pub steps: u32,
    pub fps: u32,
}

impl Default for FadeConfig {
    fn default() -> Self {
        FadeConfig {
            time: 200,
            steps: 0,
            fps: 0,
        }
    }
}

impl Config {
    pub fn from_toml(contents: &str) -> Result<Config> {
        Ok(toml::from_str(contents)?)
    }

    /// Load the configuration from `path`, which has to exist, or from the
    /// default location if it's [None]. A missing default file is not an
    /// error, the built-in defaults are used instead.
    pub async fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => Config::load_file(path).await,
            None => {
                Config::load_default(default_location_from(
                    env::var_os("XDG_CONFIG_HOME"),
                    env::var_os("HOME"),
                ))
                .await
            }
        }
    }

    async fn load_default(location: Option<PathBuf>) -> Result<Config> {
        match location {
            Some(path) if path.exists() => Config::load_file(&path).await,
            _ => {
                log::debug!("No configuration file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    async fn load_file(path: &Path) -> Result<Config> {
        log::debug!("Loading configuration from {}", path.display());
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Couldn't read configuration file {}", path.display()))?;
        Config::from_toml(&contents)
            .with_context(|| format!("Invalid configuration file {}", path.display()))
    }
}

/// Where the configuration file lives, given the values of `XDG_CONFIG_HOME`
/// and `HOME`. An empty `XDG_CONFIG_HOME` counts as unset.
fn default_location_from(
    xdg_config_home: Option<OsString>,
    home: Option<OsString>,
) -> Option<PathBuf> {
    xdg_config_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join(CONFIG_FILE))
}
