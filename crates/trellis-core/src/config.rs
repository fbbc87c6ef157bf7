use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pointer-sensor activation constraint handed to the host's gesture
/// library. A press only becomes a drag after the pointer travels
/// `distance` pixels or `delay_ms` elapses, so plain clicks stay clicks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivationConstraint {
    #[serde(default = "default_activation_distance")]
    pub distance: f32,
    #[serde(default = "default_activation_delay_ms")]
    pub delay_ms: u64,
}

fn default_activation_distance() -> f32 {
    5.0
}

fn default_activation_delay_ms() -> u64 {
    250
}

impl Default for ActivationConstraint {
    fn default() -> Self {
        Self {
            distance: default_activation_distance(),
            delay_ms: default_activation_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the serialized board blob lives. Falls back to the
    /// platform data directory when unset.
    #[serde(default)]
    pub board_path: Option<PathBuf>,
    /// How often the status sweep re-buckets due dates, in seconds.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    #[serde(default)]
    pub drag_activation: ActivationConstraint,
}

fn default_refresh_interval_secs() -> u64 {
    3600
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_path: None,
            refresh_interval_secs: default_refresh_interval_secs(),
            drag_activation: ActivationConstraint::default(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/trellis/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("trellis/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("trellis\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn effective_board_path(&self) -> PathBuf {
        self.board_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("trellis/board.json")
        })
    }
}
