//! The `vocabdrill validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use vocabdrill_core::dictionary::parse_dictionary_str;
use vocabdrill_core::error::StoreError;
use vocabdrill_core::validate::{validate_dictionary_str, validate_scores_str, ValidationWarning};

pub fn execute(config_path: PathBuf) -> Result<()> {
    let config = super::load_config(&config_path)?;

    let dict_path = &config.dictionary_path;
    if !dict_path.exists() {
        return Err(StoreError::DictionaryNotFound(dict_path.clone()).into());
    }
    let dict_content = std::fs::read_to_string(dict_path)
        .with_context(|| format!("failed to read dictionary file: {}", dict_path.display()))?;
    let dictionary = parse_dictionary_str(&dict_content);

    println!(
        "Dictionary: {} ({} words)",
        dict_path.display(),
        dictionary.len()
    );
    let mut total_warnings = print_warnings(&validate_dictionary_str(&dict_content));

    let scores_path = config.scores_path();
    if scores_path.exists() {
        let content = std::fs::read_to_string(&scores_path)
            .with_context(|| format!("failed to read score file: {}", scores_path.display()))?;
        println!("Scores: {}", scores_path.display());
        total_warnings += print_warnings(&validate_scores_str(&content, &dictionary));
    } else {
        println!("Scores: {} (not created yet)", scores_path.display());
    }

    if total_warnings == 0 {
        println!("All files valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}

fn print_warnings(warnings: &[ValidationWarning]) -> usize {
    for w in warnings {
        println!("  line {}: WARNING: {}", w.line, w.message);
    }
    warnings.len()
}
