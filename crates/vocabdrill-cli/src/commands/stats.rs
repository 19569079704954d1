//! The `vocabdrill stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use vocabdrill_core::quiz::StudyState;
use vocabdrill_core::statistics::MasteryStats;

pub fn execute(config_path: PathBuf) -> Result<()> {
    let config = super::load_config(&config_path)?;
    let state = StudyState::load(&config)?;
    let stats = MasteryStats::compute(state.dictionary(), state.scores());

    let mut table = Table::new();
    table.set_header(vec!["Level", "Words"]);
    for (level, count) in stats.per_level.iter().enumerate() {
        let label = match level {
            0 => "0 (needs review)".to_string(),
            4 => "4 (mastered)".to_string(),
            n => n.to_string(),
        };
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }

    println!("{table}");
    println!(
        "Mastered: {}/{} ({:.1}%), {} still in rotation",
        stats.mastered(),
        stats.total,
        stats.mastered_percent(),
        stats.remaining()
    );

    Ok(())
}
