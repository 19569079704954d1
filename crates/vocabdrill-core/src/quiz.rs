//! The quiz engine.
//!
//! A session picks up to N unmastered words, asks for the spelling of each
//! one from its definition, moves the word's score one step per answer,
//! and tallies the results. Console I/O sits behind [`Prompter`].

use std::path::Path;

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::DrillConfig;
use crate::dictionary::load_dictionary;
use crate::model::{Dictionary, MasteryScore, ScoreBook, StudyMode};
use crate::scores::{load_scores, save_scores};

/// Everything a session reads and mutates: the dictionary and the scores.
#[derive(Debug, Clone)]
pub struct StudyState {
    dictionary: Dictionary,
    scores: ScoreBook,
}

impl StudyState {
    /// Combine a dictionary with previously saved scores.
    ///
    /// Dictionary words without a score start at 0.
    pub fn new(dictionary: Dictionary, mut scores: ScoreBook) -> Self {
        let added = scores.track_all(&dictionary);
        if added > 0 {
            tracing::debug!("tracking {} new word(s)", added);
        }
        Self { dictionary, scores }
    }

    /// Load the dictionary and its score file as named by `config`.
    pub fn load(config: &DrillConfig) -> Result<Self> {
        let dictionary = load_dictionary(&config.dictionary_path)?;
        let scores = load_scores(&config.scores_path())?;
        Ok(Self::new(dictionary, scores))
    }

    /// Write the scores back to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        save_scores(path, &self.scores)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn scores(&self) -> &ScoreBook {
        &self.scores
    }

    /// Pick the words for one session.
    ///
    /// Candidates are dictionary words below [`MasteryScore::MAX`], in
    /// score book order. Random mode shuffles all candidates before the
    /// first `limit` are taken.
    pub fn select_words<R: Rng + ?Sized>(
        &self,
        mode: StudyMode,
        limit: usize,
        rng: &mut R,
    ) -> Vec<String> {
        let mut words: Vec<String> = self
            .scores
            .iter()
            .filter(|r| !r.score.is_mastered() && self.dictionary.contains(&r.word))
            .map(|r| r.word.clone())
            .collect();

        if mode == StudyMode::Random {
            words.shuffle(rng);
        }
        words.truncate(limit);
        words
    }

    /// Check a typed spelling and update the word's score.
    pub fn answer(&mut self, word: &str, input: &str) -> AnswerOutcome {
        let correct = is_correct_spelling(word, input);
        let score = self.scores.record_answer(word, correct);
        AnswerOutcome {
            word: word.to_string(),
            correct,
            score,
        }
    }
}

/// Case-insensitive comparison of a typed answer against the word.
/// Surrounding whitespace in the answer is ignored.
pub fn is_correct_spelling(word: &str, input: &str) -> bool {
    input.trim().to_lowercase() == word.to_lowercase()
}

/// Result of one answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub word: String,
    pub correct: bool,
    /// Score after the update.
    pub score: MasteryScore,
}

impl AnswerOutcome {
    /// The answer was right and pushed the word to full mastery.
    pub fn newly_mastered(&self) -> bool {
        self.correct && self.score.is_mastered()
    }

    /// The answer was wrong and the word is back at the bottom.
    pub fn needs_review(&self) -> bool {
        !self.correct && self.score == MasteryScore::MIN
    }
}

/// The interactive side of a session.
pub trait Prompter {
    /// Show a definition and read the user's spelling.
    ///
    /// `Ok(None)` means input is exhausted; the session stops there.
    fn ask_spelling(&mut self, definition: &str) -> Result<Option<String>>;

    /// Report the outcome of an answer.
    fn on_answer(&mut self, outcome: &AnswerOutcome) -> Result<()>;
}

/// Tally of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub correct: usize,
    pub incorrect: usize,
    /// Words answered wrongly, in the order they were asked.
    pub missed: Vec<String>,
}

impl SessionSummary {
    pub fn total(&self) -> usize {
        self.correct + self.incorrect
    }

    /// Percentage of correct answers, 0.0 for an empty session.
    pub fn correct_rate(&self) -> f64 {
        percentage(self.correct, self.total())
    }

    /// Percentage of incorrect answers, 0.0 for an empty session.
    pub fn incorrect_rate(&self) -> f64 {
        percentage(self.incorrect, self.total())
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Quiz the user on `words` and update `state` as answers come in.
pub fn run_session(
    state: &mut StudyState,
    words: &[String],
    prompter: &mut dyn Prompter,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    for word in words {
        let Some(definition) = state.dictionary.definition(word) else {
            tracing::warn!("'{}' is no longer in the dictionary, skipping", word);
            continue;
        };
        let definition = definition.to_string();

        let Some(input) = prompter.ask_spelling(&definition)? else {
            tracing::info!("input closed, ending session after {} word(s)", summary.total());
            break;
        };

        let outcome = state.answer(word, &input);
        if outcome.correct {
            summary.correct += 1;
        } else {
            summary.incorrect += 1;
            summary.missed.push(word.clone());
        }
        prompter.on_answer(&outcome)?;
    }

    Ok(summary)
}
