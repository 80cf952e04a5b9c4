//! Game settings and preferences
//!
//! Persisted separately from the best score: LocalStorage on web, a JSON
//! file next to the binary on native.

use serde::{Deserialize, Serialize};

use crate::persistence::BEST_SCORE_KEY;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Visuals ===
    /// Faint background grid
    pub show_grid: bool,
    /// Flash the swing sector when attacking
    pub show_swing_arc: bool,

    // === Controls ===
    /// Key that restarts the run (matched exactly as the host reports it)
    pub restart_key: String,
    /// Key that toggles the demo autopilot
    pub autopilot_key: String,

    // === Run ===
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Storage key for the best score
    pub best_score_key: String,
    /// Simulated seconds the native headless demo runs for
    pub demo_seconds: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_swing_arc: true,

            restart_key: "r".to_string(),
            autopilot_key: "i".to_string(),

            seed: None,
            best_score_key: BEST_SCORE_KEY.to_string(),
            demo_seconds: 60.0,
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(err) => {
                log::warn!("Ignoring malformed settings: {err}");
                None
            }
        }
    }

    pub fn is_restart_key(&self, key: &str) -> bool {
        key == self.restart_key
    }

    pub fn is_autopilot_key(&self, key: &str) -> bool {
        key.eq_ignore_ascii_case(&self.autopilot_key)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "hack_slash_settings";

    /// Settings file name (native)
    #[allow(dead_code)]
    const FILE_NAME: &'static str = "hack_slash_settings.json";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the working directory (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE_NAME) {
            Ok(json) => {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from {}", Self::FILE_NAME);
                    return settings;
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => log::warn!("Could not read {}: {err}", Self::FILE_NAME),
        }
        log::info!("Using default settings");
        Self::default()
    }
}
