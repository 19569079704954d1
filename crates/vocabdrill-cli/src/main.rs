//! vocabdrill CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vocabdrill_core::config::DEFAULT_CONFIG_FILE;
use vocabdrill_core::model::StudyMode;

mod commands;
mod console;

#[derive(Parser)]
#[command(
    name = "vocabdrill",
    version,
    about = "Spelling drill for vocabulary lists"
)]
struct Cli {
    /// Config file path (created with defaults if missing)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a spelling session (the default)
    Study {
        /// Word order: 1/sequential or 2/random (asked interactively if omitted)
        #[arg(long)]
        mode: Option<StudyMode>,

        /// Words per session, overrides num_words from the config
        #[arg(long)]
        num_words: Option<usize>,

        /// Seed for random mode
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Create a default config file
    Init,

    /// Check the dictionary and score files for problems
    Validate,

    /// Show how many words sit at each mastery level
    Stats,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Study {
        mode: None,
        num_words: None,
        seed: None,
    });

    let result = match command {
        Commands::Study {
            mode,
            num_words,
            seed,
        } => commands::study::execute(cli.config, mode, num_words, seed),
        Commands::Init => commands::init::execute(cli.config),
        Commands::Validate => commands::validate::execute(cli.config),
        Commands::Stats => commands::stats::execute(cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
