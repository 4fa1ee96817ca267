//! Rig configuration loaded from TOML

use crate::error::{OrbitError, Result};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use std::fs;
use std::path::Path;

/// Top-level rig configuration
///
/// Every field has a default, so an empty TOML document is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    pub orbit: OrbitConfig,
    pub motion: MotionConfig,
}

/// Pointer/scroll tuning and the clamp bounds of the orbit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Radians of yaw/pitch per pixel of pointer drag
    pub angular_sensitivity: f32,
    /// Distance units per unit of scroll delta (before `zoom_speed`)
    pub scroll_sensitivity: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
    pub initial_distance: f32,
    pub initial_yaw: f32,
    pub initial_pitch: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            angular_sensitivity: 0.005,
            scroll_sensitivity: 0.01,
            zoom_speed: 0.5,
            min_distance: 0.0,
            max_distance: 20.0,
            min_pitch: -FRAC_PI_2,
            max_pitch: FRAC_PI_2,
            initial_distance: 10.0,
            initial_yaw: 0.0,
            initial_pitch: 0.0,
        }
    }
}

/// Subject movement tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// World units per tick for each held direction
    pub move_speed: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self { move_speed: 0.05 }
    }
}

impl RigConfig {
    /// Parse and validate a config from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RigConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize to a pretty TOML string
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check bounds and tuning values
    pub fn validate(&self) -> Result<()> {
        self.orbit.validate()?;
        self.motion.validate()
    }
}

impl OrbitConfig {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("angular_sensitivity", self.angular_sensitivity),
            ("scroll_sensitivity", self.scroll_sensitivity),
            ("zoom_speed", self.zoom_speed),
            ("min_distance", self.min_distance),
            ("max_distance", self.max_distance),
            ("min_pitch", self.min_pitch),
            ("max_pitch", self.max_pitch),
            ("initial_distance", self.initial_distance),
            ("initial_yaw", self.initial_yaw),
            ("initial_pitch", self.initial_pitch),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(invalid(format!("orbit.{} must be finite, got {}", name, value)));
            }
        }

        for (name, value) in [
            ("angular_sensitivity", self.angular_sensitivity),
            ("scroll_sensitivity", self.scroll_sensitivity),
            ("zoom_speed", self.zoom_speed),
        ] {
            if value <= 0.0 {
                return Err(invalid(format!("orbit.{} must be positive, got {}", name, value)));
            }
        }

        if self.min_distance < 0.0 {
            return Err(invalid(format!(
                "orbit.min_distance must not be negative, got {}",
                self.min_distance
            )));
        }
        if self.min_distance > self.max_distance {
            return Err(invalid(format!(
                "orbit.min_distance ({}) is greater than orbit.max_distance ({})",
                self.min_distance, self.max_distance
            )));
        }

        if self.min_pitch > self.max_pitch {
            return Err(invalid(format!(
                "orbit.min_pitch ({}) is greater than orbit.max_pitch ({})",
                self.min_pitch, self.max_pitch
            )));
        }
        if self.min_pitch < -FRAC_PI_2 || self.max_pitch > FRAC_PI_2 {
            return Err(invalid(format!(
                "orbit pitch bounds [{}, {}] exceed [-pi/2, pi/2]",
                self.min_pitch, self.max_pitch
            )));
        }

        Ok(())
    }
}

impl MotionConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.move_speed.is_finite() || self.move_speed < 0.0 {
            return Err(invalid(format!(
                "motion.move_speed must be a finite, non-negative number, got {}",
                self.move_speed
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> OrbitError {
    OrbitError::InvalidConfiguration(message)
}
