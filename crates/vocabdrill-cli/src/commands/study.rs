//! The `vocabdrill study` command.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use vocabdrill_core::model::StudyMode;
use vocabdrill_core::quiz::{run_session, StudyState};

use crate::console::Console;

pub fn execute(
    config_path: PathBuf,
    mode: Option<StudyMode>,
    num_words: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let config = super::load_config(&config_path)?;
    let scores_path = config.scores_path();
    let mut state = StudyState::load(&config)?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.line("Welcome to vocabdrill!")?;

    let mode = match mode {
        Some(mode) => Some(mode),
        None => console.read_mode()?,
    };

    let session = match mode {
        Some(mode) => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let limit = num_words.unwrap_or(config.num_words);
            let words = state.select_words(mode, limit, &mut rng);
            tracing::debug!("{} mode, {} word(s) selected", mode, words.len());
            run_session(&mut state, &words, &mut console)
                .and_then(|summary| console.print_summary(&summary))
        }
        None => console.line("Invalid mode number!"),
    };

    // Answers given before a console failure still count.
    state.save(&scores_path)?;
    session?;

    console.line("This session is done. Goodbye!")?;
    Ok(())
}
