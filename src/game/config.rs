//! Locomotion Tuning
//!
//! Per-actor tuning values, supplied once at construction and never mutated.
//! Loadable from JSON so designers can tweak the stamina economy without a
//! rebuild.

use std::path::Path;
use serde::{Serialize, Deserialize};

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid JSON for this schema
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is NaN or infinite
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Offending field
        field: &'static str,
        /// Offending value
        value: f32,
    },

    /// A value that must be non-negative is negative
    #[error("{field} must be non-negative, got {value}")]
    Negative {
        /// Offending field
        field: &'static str,
        /// Offending value
        value: f32,
    },
}

/// Movement and stamina tuning for one actor.
///
/// Field names are accepted in camelCase in JSON; missing fields fall back to
/// the [`LocomotionConfig::controller`] preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocomotionConfig {
    /// Base horizontal speed (units per second)
    pub move_speed: f32,
    /// Signed vertical acceleration, negative pulls down
    pub gravity: f32,
    /// Desired jump apex height
    pub jump_height: f32,
    /// Scale inside the jump impulse formula `sqrt(jump_height * -scale * gravity)`.
    ///
    /// The camera-bound controller used 3.0 and the low-level motor used 0.3.
    /// Kept as a tuning value until design settles on one.
    pub jump_impulse_scale: f32,
    /// Speed scale while sprinting
    pub sprint_multiplier: f32,
    /// Lockout duration after a forced stop (seconds)
    pub sprint_cooldown: f32,
    /// Continuous-sprint cap (seconds)
    pub sprint_max_duration: f32,
    /// Stamina capacity
    pub stamina_max: f32,
    /// Stamina drained per second while sprinting
    pub stamina_drain_rate: f32,
    /// Stamina restored per second once the regen delay has elapsed
    pub stamina_regen_rate: f32,
    /// Seconds after sprinting ends before regeneration starts
    pub stamina_regen_delay: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self::controller()
    }
}

impl LocomotionConfig {
    /// Tuning of the camera-bound player controller.
    pub const fn controller() -> Self {
        Self {
            move_speed: 5.0,
            gravity: -9.8,
            jump_height: 1.2,
            jump_impulse_scale: 3.0,
            sprint_multiplier: 1.8,
            sprint_cooldown: 10.0,
            sprint_max_duration: 10.0,
            stamina_max: 10.0,
            stamina_drain_rate: 1.0,
            stamina_regen_rate: 1.5,
            stamina_regen_delay: 2.0,
        }
    }

    /// Tuning of the low-level motor.
    ///
    /// Same stamina economy as the controller, different gravity and jump.
    pub const fn motor() -> Self {
        Self {
            move_speed: 5.0,
            gravity: -9.81,
            jump_height: 3.0,
            jump_impulse_scale: 0.3,
            ..Self::controller()
        }
    }

    /// Parse a config from JSON text and validate it.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Check every value is finite, and every value except gravity is non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields: [(&'static str, f32); 11] = [
            ("moveSpeed", self.move_speed),
            ("gravity", self.gravity),
            ("jumpHeight", self.jump_height),
            ("jumpImpulseScale", self.jump_impulse_scale),
            ("sprintMultiplier", self.sprint_multiplier),
            ("sprintCooldown", self.sprint_cooldown),
            ("sprintMaxDuration", self.sprint_max_duration),
            ("staminaMax", self.stamina_max),
            ("staminaDrainRate", self.stamina_drain_rate),
            ("staminaRegenRate", self.stamina_regen_rate),
            ("staminaRegenDelay", self.stamina_regen_delay),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
            if field != "gravity" && value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        Ok(())
    }

    /// Initial vertical velocity produced by a grounded jump.
    ///
    /// The radicand is clamped at zero so a non-negative gravity yields no
    /// impulse instead of NaN.
    #[inline]
    pub fn jump_velocity(&self) -> f32 {
        (self.jump_height * -self.jump_impulse_scale * self.gravity)
            .max(0.0)
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_controller_preset() {
        let config = LocomotionConfig::default();
        assert_eq!(config, LocomotionConfig::controller());
        assert_eq!(config.stamina_max, 10.0);
        assert_eq!(config.jump_impulse_scale, 3.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_motor_preset_differs_only_in_vertical_tuning() {
        let motor = LocomotionConfig::motor();
        let controller = LocomotionConfig::controller();
        assert_eq!(motor.jump_impulse_scale, 0.3);
        assert_eq!(motor.gravity, -9.81);
        assert_eq!(motor.stamina_drain_rate, controller.stamina_drain_rate);
        assert_eq!(motor.sprint_cooldown, controller.sprint_cooldown);
    }

    #[test]
    fn test_jump_velocity() {
        let config = LocomotionConfig {
            jump_height: 1.5,
            jump_impulse_scale: 3.0,
            gravity: -6.0,
            ..LocomotionConfig::controller()
        };
        // sqrt(1.5 * 3 * 6) = sqrt(27)
        assert!((config.jump_velocity() - 27.0f32.sqrt()).abs() < 1e-6);

        let upside_down = LocomotionConfig { gravity: 9.8, ..config };
        assert_eq!(upside_down.jump_velocity(), 0.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = LocomotionConfig::from_json_str(r#"{ "staminaMax": 4.0, "sprintCooldown": 3 }"#)
            .unwrap();
        assert_eq!(config.stamina_max, 4.0);
        assert_eq!(config.sprint_cooldown, 3.0);
        assert_eq!(config.move_speed, 5.0);
    }

    #[test]
    fn test_negative_value_rejected() {
        let err = LocomotionConfig::from_json_str(r#"{ "staminaDrainRate": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Negative { field: "staminaDrainRate", .. }));
    }

    #[test]
    fn test_negative_gravity_allowed() {
        let config = LocomotionConfig { gravity: -20.0, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        let config = LocomotionConfig { sprint_multiplier: f32::NAN, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "sprintMultiplier", .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = LocomotionConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = LocomotionConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
