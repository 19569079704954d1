//! Line-based console for study sessions.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use vocabdrill_core::model::StudyMode;
use vocabdrill_core::quiz::{AnswerOutcome, Prompter, SessionSummary};

/// Reads answers from `input` and writes prompts to `output`.
///
/// The mode prompt and the spelling prompts share one reader so buffered
/// input is never lost between them.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Print `prompt` without a newline and read one line. `None` on EOF.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = String::new();
        let read = self
            .input
            .read_line(&mut buf)
            .context("failed to read from stdin")?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(buf))
    }

    /// Show the mode menu and read a choice.
    ///
    /// Only `1` and `2` are accepted here; the longer names are for
    /// `--mode`. Returns `None` for anything else, including EOF.
    pub fn read_mode(&mut self) -> Result<Option<StudyMode>> {
        self.line("Choose a mode:")?;
        self.line("1. Sequential")?;
        self.line("2. Random")?;
        let Some(choice) = self.prompt("Enter mode number (1 or 2): ")? else {
            return Ok(None);
        };
        Ok(match choice.trim() {
            "1" => Some(StudyMode::Sequential),
            "2" => Some(StudyMode::Random),
            _ => None,
        })
    }

    pub fn print_summary(&mut self, summary: &SessionSummary) -> Result<()> {
        writeln!(self.output, "\nSession summary:")?;
        writeln!(self.output, "Total words: {}", summary.total())?;
        writeln!(
            self.output,
            "Correct: {} ({:.2}%)",
            summary.correct,
            summary.correct_rate()
        )?;
        writeln!(
            self.output,
            "Incorrect: {} ({:.2}%)",
            summary.incorrect,
            summary.incorrect_rate()
        )?;
        if !summary.missed.is_empty() {
            writeln!(self.output, "Missed words:")?;
            for word in &summary.missed {
                writeln!(self.output, "  - {word}")?;
            }
        }
        Ok(())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for Console<R, W> {
    fn ask_spelling(&mut self, definition: &str) -> Result<Option<String>> {
        writeln!(self.output, "\nDefinition: {definition}")?;
        self.prompt("Spell the word: ")
    }

    fn on_answer(&mut self, outcome: &AnswerOutcome) -> Result<()> {
        if outcome.newly_mastered() {
            self.line("Congratulations, you have mastered this word!")?;
        }
        if !outcome.correct {
            if outcome.needs_review() {
                self.line("This word needs more review.")?;
            }
            writeln!(self.output, "The correct answer is: {}", outcome.word)?;
        }
        Ok(())
    }
}
