//! TOML configuration for the tools

use std::fs;
use std::path::Path;

use t9_core::EngineConfig;

use crate::error::Result;

pub fn config_from_str(contents: &str) -> Result<EngineConfig> {
    Ok(toml::from_str(contents)?)
}

pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let contents = fs::read_to_string(path)?;
    config_from_str(&contents)
}
