use std::path::Path;

use scribe_core::{Result, ScribeConfig};

/// Read a YAML config file. Missing sections take their defaults.
pub fn load_config(path: &Path) -> Result<ScribeConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = ScribeConfig::from_yaml(&content)?;
    log::info!("loaded config from {}", path.display());
    Ok(config)
}
