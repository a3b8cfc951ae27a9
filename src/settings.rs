//! Widget settings
//!
//! Persisted in LocalStorage on the web; read from an optional JSON file natively.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::vertex::colors;

/// Widget settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ball radius in pane pixels
    pub radius: f32,
    /// Milliseconds between ticks at rate 1.0
    pub tick_interval_ms: u32,
    /// Rate change per speed up/down
    pub rate_step: f32,
    /// Playback rate at startup
    pub initial_rate: f32,
    /// Displacement per tick at startup
    pub initial_velocity: [f32; 2],

    // === Colors (linear RGBA) ===
    pub ball_color: [f32; 4],
    pub background_color: [f32; 4],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
            tick_interval_ms: (TICK_INTERVAL * 1000.0) as u32,
            rate_step: RATE_STEP,
            initial_rate: DEFAULT_RATE,
            initial_velocity: [BALL_START_VELOCITY.0, BALL_START_VELOCITY.1],
            ball_color: colors::BALL,
            background_color: colors::BACKGROUND,
        }
    }
}

impl Settings {
    /// Tick interval in seconds
    pub fn tick_interval(&self) -> f32 {
        self.tick_interval_ms as f32 / 1000.0
    }

    /// Replace values the widget cannot run with by their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.radius.is_finite() && self.radius > 0.0) {
            log::warn!("invalid radius {}, using {}", self.radius, defaults.radius);
            self.radius = defaults.radius;
        }
        if self.tick_interval_ms == 0 {
            log::warn!(
                "tick interval must be positive, using {} ms",
                defaults.tick_interval_ms
            );
            self.tick_interval_ms = defaults.tick_interval_ms;
        }
        if !(self.rate_step.is_finite() && self.rate_step >= 0.0) {
            log::warn!("invalid rate step {}, using {}", self.rate_step, defaults.rate_step);
            self.rate_step = defaults.rate_step;
        }
        if !(self.initial_rate.is_finite() && self.initial_rate >= 0.0) {
            log::warn!(
                "invalid initial rate {}, using {}",
                self.initial_rate,
                defaults.initial_rate
            );
            self.initial_rate = defaults.initial_rate;
        }
        if !self.initial_velocity.iter().all(|v| v.is_finite()) {
            log::warn!("invalid initial velocity, using default");
            self.initial_velocity = defaults.initial_velocity;
        }

        self
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bouncing_ball_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Stored settings unreadable: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable, settings not saved");
            return;
        };

        match serde_json::to_string(self) {
            Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                Ok(()) => log::debug!("Settings saved"),
                Err(e) => log::warn!("Failed to save settings: {:?}", e),
            },
            Err(e) => log::warn!("Cannot serialize settings: {}", e),
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_widget_constants() {
        let settings = Settings::default();
        assert_eq!(settings.radius, 20.0);
        assert_eq!(settings.tick_interval_ms, 50);
        assert!((settings.tick_interval() - 0.05).abs() < 1e-6);
        assert_eq!(settings.initial_rate, 1.0);
        assert_eq!(settings.initial_velocity, [1.0, 1.0]);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "radius": 12.5 }"#).unwrap();
        assert_eq!(settings.radius, 12.5);
        assert_eq!(settings.tick_interval_ms, 50);
        assert_eq!(settings.rate_step, RATE_STEP);
    }

    #[test]
    fn test_sanitize_rejects_bad_values() {
        let settings = Settings::from_json(
            r#"{ "radius": -4.0, "tick_interval_ms": 0, "initial_rate": -1.0, "rate_step": -0.5 }"#,
        )
        .unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ radius: ").is_err());
    }

    #[test]
    fn test_json_round_trip_keeps_colors() {
        let mut settings = Settings::default();
        settings.ball_color = [1.0, 0.0, 0.0, 1.0];
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_save_to_then_load_from() {
        let path = std::env::temp_dir().join(format!(
            "bouncing_ball_settings_{}.json",
            std::process::id()
        ));
        let settings = Settings {
            radius: 15.0,
            initial_rate: 1.5,
            ..Settings::default()
        };

        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, settings);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::path::Path::new("/nonexistent/bouncing_ball_settings.json");
        assert_eq!(Settings::load_from(path), Settings::default());
    }
}
