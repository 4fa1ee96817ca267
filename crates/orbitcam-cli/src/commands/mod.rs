//! CLI command implementations

pub mod config;
pub mod pose;
pub mod simulate;
