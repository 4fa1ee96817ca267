//! Config command

use anyhow::{Context, Result};
use orbitcam_core::RigConfig;

pub fn run(path: Option<&str>) -> Result<()> {
    let config = match path {
        Some(path) => RigConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path))?,
        None => RigConfig::default(),
    };

    print!("{}", config.to_toml_string()?);
    Ok(())
}
