use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use buzzline_bridge::RICH_VIBRATION_MIN_API_LEVEL;

/// Config file looked up in the current directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "buzzline.yaml";
/// Socket file name used when the config does not name one.
pub const SOCKET_FILE_NAME: &str = "vibrator.sock";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml deserialize error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Vibrator implementation the daemon drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Log every primitive call.
    #[default]
    Log,
    /// Keep calls in memory only.
    Recording,
    /// Rumble the first attached game controller.
    Sdl2,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    pub socket: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub api_level: u32,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            api_level: RICH_VIBRATION_MIN_API_LEVEL,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub channel: ChannelConfig,
    pub platform: PlatformConfig,
    pub backend: Backend,
}

impl Config {
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Loads the config at `path`, or `buzzline.yaml` in the current
    /// directory. A missing default file yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::parse(&fs::read_to_string(path)?),
            None => {
                let default_path = std::env::current_dir()
                    .map(|p| p.join(DEFAULT_CONFIG_FILE))
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
                if default_path.exists() {
                    Self::parse(&fs::read_to_string(default_path)?)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn socket_path(&self) -> PathBuf {
        self.channel
            .socket
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(SOCKET_FILE_NAME))
    }
}
