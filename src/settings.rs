//! Player settings.
//!
//! Defaults reproduce the stock page. On the web an optional JSON override can
//! be seeded into local storage under [`SETTINGS_KEY`]; it is read once at
//! startup and never written back.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{errors::StorageError, LocalStorage, Storage};

pub const SETTINGS_KEY: &str = "playdeck.settings";

pub const DEFAULT_SEARCH_PROMPT: &str = "Type to filter the current playlist tracks.";
pub const DEFAULT_NO_RESULTS: &str = "No results";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub initial_volume: f64,
    /// Start the first playlist track as soon as the page loads.
    pub autoplay_on_load: bool,
    pub search_prompt: String,
    pub no_results_text: String,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            initial_volume: 1.0,
            autoplay_on_load: true,
            search_prompt: DEFAULT_SEARCH_PROMPT.to_string(),
            no_results_text: DEFAULT_NO_RESULTS.to_string(),
        }
    }
}

impl PlayerSettings {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(raw)?;
        Ok(settings.normalized())
    }

    fn normalized(mut self) -> Self {
        self.initial_volume = normalize_volume(self.initial_volume);
        self
    }
}

/// Clamp a stored volume into `[0, 1]`, accepting percentages as well.
pub fn normalize_volume(mut value: f64) -> f64 {
    if !value.is_finite() {
        return 1.0;
    }
    let mut passes = 0;
    while value > 1.0 && passes < 4 {
        value /= 100.0;
        passes += 1;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(target_arch = "wasm32")]
pub fn load_settings() -> PlayerSettings {
    match LocalStorage::get::<PlayerSettings>(SETTINGS_KEY) {
        Ok(settings) => settings.normalized(),
        Err(StorageError::KeyNotFound(_)) => PlayerSettings::default(),
        Err(err) => {
            tracing::warn!("ignoring stored settings: {err}");
            PlayerSettings::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_settings() -> PlayerSettings {
    PlayerSettings::default()
}
