//! Orbitcam Core - Foundational types for the orbit camera rig
//!
//! This crate provides the types every other orbitcam crate depends on:
//! - `OrbitState`, `DirectionalFlags`, `SubjectTransform`, `CameraPose` - the data model
//! - `RigConfig` - TOML-backed tuning and clamp bounds
//! - Error types and Result alias

mod config;
mod error;
mod types;

pub use config::{MotionConfig, OrbitConfig, RigConfig};
pub use error::{OrbitError, Result};
pub use types::{CameraPose, DirectionalFlags, OrbitState, SubjectTransform};
