//! Game settings and preferences
//!
//! Read once at startup from `settings.json` in the working directory.
//! A missing or malformed file falls back to defaults.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all audio
    pub muted: bool,

    // === Debug ===
    /// Draw collision outlines on top of every entity
    pub show_hitboxes: bool,
    /// The player never loses a life
    pub god_mode: bool,
    /// Start runs at this level instead of level 1
    pub skip_to_level: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Audio
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            // Debug - all off by default
            show_hitboxes: false,
            god_mode: false,
            skip_to_level: None,
        }
    }
}

impl Settings {
    /// Settings file name
    const FILE: &'static str = "settings.json";

    /// Load settings from disk
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", Self::FILE);
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed {}: {err}", Self::FILE);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no {} found, using defaults", Self::FILE);
                Self::default()
            }
        }
    }
}
