pub mod init;
pub mod stats;
pub mod study;
pub mod validate;

use std::path::Path;

use anyhow::Result;

use vocabdrill_core::config::{load_or_create_config, ConfigSource, DrillConfig};

/// Load the config, telling the user when a default one had to be written.
pub(crate) fn load_config(path: &Path) -> Result<DrillConfig> {
    let (config, source) = load_or_create_config(path)?;
    if source == ConfigSource::Generated {
        println!("Generated default config file {}", path.display());
    }
    Ok(config)
}
