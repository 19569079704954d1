//! The `vocabdrill init` command.

use std::path::PathBuf;

use anyhow::Result;

use vocabdrill_core::config::write_default_config;

pub fn execute(config_path: PathBuf) -> Result<()> {
    if config_path.exists() {
        println!("{} already exists, skipping.", config_path.display());
        return Ok(());
    }

    write_default_config(&config_path)?;
    println!("Created {}", config_path.display());

    println!("\nNext steps:");
    println!("  1. Point dictionary_path at a file of `word<TAB>definition` lines");
    println!("  2. Run: vocabdrill validate");
    println!("  3. Run: vocabdrill study");

    Ok(())
}
