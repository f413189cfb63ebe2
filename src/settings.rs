//! Rocket tuning and key bindings
//!
//! Loaded once at startup. A controller copies what it needs at construction,
//! so edits never reach a rocket that is already flying.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SetupError;
use crate::sim::Key;

/// Which key drives which control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Counter-clockwise roll (held)
    pub rotate_positive: Key,
    /// Clockwise roll (held)
    pub rotate_negative: Key,
    /// Main engine (held)
    pub thrust: Key,
    /// Debug: jump to the next level (edge-triggered)
    pub debug_next_level: Key,
    /// Debug: toggle collision handling (edge-triggered)
    pub debug_toggle_collisions: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            rotate_positive: Key::A,
            rotate_negative: Key::D,
            thrust: Key::Space,
            debug_next_level: Key::L,
            debug_toggle_collisions: Key::C,
        }
    }
}

/// Rocket/game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Flight ===
    /// Rotation speed (degrees per second)
    pub rcs_thrust: f32,
    /// Main engine force per second of burn
    pub main_thrust: f32,

    // === Lifecycle ===
    /// Seconds between death/success and the level load
    pub level_load_delay: f32,
    /// Volume of the success jingle (0.0 - 1.0)
    pub success_volume: f32,
    /// Number of levels in the build
    pub level_count: usize,

    // === Audio ===
    /// Master volume applied to every clip (0.0 - 1.0)
    pub master_volume: f32,

    // === Debug ===
    /// Enable the next-level / toggle-collision keys
    pub debug_keys: bool,

    pub bindings: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rcs_thrust: RCS_THRUST,
            main_thrust: MAIN_THRUST,

            level_load_delay: LEVEL_LOAD_DELAY,
            success_volume: SUCCESS_VOLUME,
            level_count: LEVEL_COUNT,

            master_volume: MASTER_VOLUME,

            // Debug keys only in debug builds
            debug_keys: cfg!(debug_assertions),

            bindings: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SetupError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values a rocket cannot fly with
    pub fn validate(&self) -> Result<(), SetupError> {
        if !(self.rcs_thrust.is_finite() && self.rcs_thrust > 0.0) {
            return Err(SetupError::invalid("rcs_thrust", self.rcs_thrust));
        }
        if !(self.main_thrust.is_finite() && self.main_thrust > 0.0) {
            return Err(SetupError::invalid("main_thrust", self.main_thrust));
        }
        if !(self.level_load_delay.is_finite() && self.level_load_delay >= 0.0) {
            return Err(SetupError::invalid("level_load_delay", self.level_load_delay));
        }
        if !(0.0..=1.0).contains(&self.success_volume) {
            return Err(SetupError::invalid("success_volume", self.success_volume));
        }
        if !(0.0..=1.0).contains(&self.master_volume) {
            return Err(SetupError::invalid("master_volume", self.master_volume));
        }
        if self.level_count == 0 {
            return Err(SetupError::invalid("level_count", self.level_count));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.rcs_thrust, 100.0);
        assert_eq!(settings.main_thrust, 100.0);
        assert_eq!(settings.level_load_delay, 2.0);
        assert_eq!(settings.success_volume, 0.6);
        assert_eq!(settings.master_volume, 0.8);
        assert_eq!(settings.bindings.thrust, Key::Space);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "main_thrust": 1200.0 }"#).unwrap();
        assert_eq!(settings.main_thrust, 1200.0);
        assert_eq!(settings.rcs_thrust, 100.0);
        assert_eq!(settings.bindings, KeyBindings::default());
    }

    #[test]
    fn test_rebinding_from_json() {
        let settings =
            Settings::from_json(r#"{ "bindings": { "thrust": "W", "rotate_positive": "Q" } }"#)
                .unwrap();
        assert_eq!(settings.bindings.thrust, Key::W);
        assert_eq!(settings.bindings.rotate_positive, Key::Q);
        assert_eq!(settings.bindings.rotate_negative, Key::D);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Settings::from_json(r#"{ "rcs_thrust": -5.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SetupError::InvalidSetting {
                name: "rcs_thrust",
                ..
            }
        ));

        let settings = Settings {
            level_load_delay: -1.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            success_volume: 1.5,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            master_volume: f32::NAN,
            ..Default::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            level_count: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_delay_is_allowed() {
        let settings = Settings {
            level_load_delay: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SetupError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Settings::load("/nonexistent/rocket-settings.json"),
            Err(SetupError::Io(_))
        ));
    }
}
