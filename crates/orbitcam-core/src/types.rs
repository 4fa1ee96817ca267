//! Orbit, movement and pose types

use crate::config::OrbitConfig;
use crate::error::Result;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Camera placement on a sphere around the subject
///
/// `yaw` has no range invariant, the trig in the rig wraps it. `pitch` and
/// `distance` are kept inside the bounds of the [`OrbitConfig`] they were
/// mutated with.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitState {
    /// Horizontal angle in radians (yaw around world up)
    pub yaw: f32,
    /// Vertical angle in radians
    pub pitch: f32,
    /// Distance from the subject
    pub distance: f32,
}

impl OrbitState {
    pub const fn new(yaw: f32, pitch: f32, distance: f32) -> Self {
        Self {
            yaw,
            pitch,
            distance,
        }
    }

    /// Initial orbit from a config, with pitch and distance clamped into range
    ///
    /// Fails with `InvalidConfiguration` if the config does not validate.
    pub fn from_config(config: &OrbitConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            yaw: config.initial_yaw,
            pitch: bound(config.initial_pitch, config.min_pitch, config.max_pitch),
            distance: bound(
                config.initial_distance,
                config.min_distance,
                config.max_distance,
            ),
        })
    }

    /// Add angle deltas, then clamp pitch
    ///
    /// A non-finite delta, or one that would overflow yaw, is dropped.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32, config: &OrbitConfig) {
        let yaw = self.yaw + delta_yaw;
        if yaw.is_finite() {
            self.yaw = yaw;
        }
        if delta_pitch.is_finite() {
            self.pitch = bound(self.pitch + delta_pitch, config.min_pitch, config.max_pitch);
        }
    }

    /// Add a distance delta, then clamp distance; non-finite deltas are dropped
    pub fn zoom(&mut self, delta: f32, config: &OrbitConfig) {
        if !delta.is_finite() {
            return;
        }
        self.distance = bound(self.distance + delta, config.min_distance, config.max_distance);
    }
}

impl Default for OrbitState {
    fn default() -> Self {
        let config = OrbitConfig::default();
        Self::new(config.initial_yaw, config.initial_pitch, config.initial_distance)
    }
}

/// Clamp that never panics: `max` wins over `min`, NaN bounds are ignored
fn bound(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Movement intent held by the keyboard
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionalFlags {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionalFlags {
    /// Is any direction held?
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// World placement of the tracked subject
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectTransform {
    pub position: Vec3,
}

impl SubjectTransform {
    pub const fn new(position: Vec3) -> Self {
        Self { position }
    }
}

/// A camera position plus the point it looks at
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_target: Vec3,
}

impl CameraPose {
    pub const fn new(position: Vec3, look_target: Vec3) -> Self {
        Self {
            position,
            look_target,
        }
    }

    /// Unit view direction, or zero when position and target coincide
    pub fn forward(&self) -> Vec3 {
        (self.look_target - self.position).normalize_or_zero()
    }

    /// Distance between the camera and its target
    pub fn distance(&self) -> f32 {
        self.position.distance(self.look_target)
    }
}
