//! Error types for orbitcam

use thiserror::Error;

/// The main error type for orbitcam operations
#[derive(Debug, Error)]
pub enum OrbitError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Config serialization error: {0}")]
    ConfigSerialize(String),
}

/// Result type alias for orbitcam operations
pub type Result<T> = std::result::Result<T, OrbitError>;

impl From<toml::de::Error> for OrbitError {
    fn from(err: toml::de::Error) -> Self {
        OrbitError::ConfigParse(err.to_string())
    }
}

impl From<toml::ser::Error> for OrbitError {
    fn from(err: toml::ser::Error) -> Self {
        OrbitError::ConfigSerialize(err.to_string())
    }
}
