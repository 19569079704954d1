//! Core data model types for vocabdrill.
//!
//! These are the types the rest of the crate passes around: the mastery
//! score, the study mode, the dictionary, and the score book.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// How well a word is known, from 0 (needs review) to 4 (mastered).
///
/// The value is kept in range by construction: every constructor and
/// update clamps into `[MIN, MAX]`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
pub struct MasteryScore(u8);

impl MasteryScore {
    /// Lowest score; the word needs review.
    pub const MIN: MasteryScore = MasteryScore(0);
    /// Highest score; the word is mastered and no longer quizzed.
    pub const MAX: MasteryScore = MasteryScore(4);

    /// Build a score, returning `None` if `value` is outside `[0, 4]`.
    pub fn new(value: i64) -> Option<Self> {
        if (Self::MIN.0 as i64..=Self::MAX.0 as i64).contains(&value) {
            Some(MasteryScore(value as u8))
        } else {
            None
        }
    }

    /// Build a score, clamping `value` into `[0, 4]`.
    pub fn clamped(value: i64) -> Self {
        MasteryScore(value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// One step up, capped at [`MasteryScore::MAX`].
    pub fn increment(self) -> Self {
        MasteryScore((self.0 + 1).min(Self::MAX.0))
    }

    /// One step down, floored at [`MasteryScore::MIN`].
    pub fn decrement(self) -> Self {
        MasteryScore(self.0.saturating_sub(1))
    }

    pub fn is_mastered(self) -> bool {
        self == Self::MAX
    }
}

impl fmt::Display for MasteryScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for MasteryScore {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        MasteryScore::new(value).ok_or_else(|| format!("mastery score out of range: {value}"))
    }
}

impl From<MasteryScore> for u8 {
    fn from(score: MasteryScore) -> u8 {
        score.0
    }
}

/// Order in which unmastered words are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyMode {
    Sequential,
    Random,
}

impl fmt::Display for StudyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudyMode::Sequential => write!(f, "sequential"),
            StudyMode::Random => write!(f, "random"),
        }
    }
}

impl FromStr for StudyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "sequential" | "seq" => Ok(StudyMode::Sequential),
            "2" | "random" | "rand" => Ok(StudyMode::Random),
            other => Err(format!("invalid mode: {other:?} (expected 1 or 2)")),
        }
    }
}

/// A single dictionary line: the word to spell and the definition shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    pub definition: String,
}

/// Word → definition mapping that remembers file order.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a definition.
    ///
    /// A repeated word keeps its first position and takes the new
    /// definition. Returns `true` if the word was already present.
    pub fn insert(&mut self, word: impl Into<String>, definition: impl Into<String>) -> bool {
        let word = word.into();
        let definition = definition.into();
        if let Some(&i) = self.index.get(&word) {
            self.entries[i].definition = definition;
            true
        } else {
            self.index.insert(word.clone(), self.entries.len());
            self.entries.push(Entry { word, definition });
            false
        }
    }

    pub fn definition(&self, word: &str) -> Option<&str> {
        self.index
            .get(word)
            .map(|&i| self.entries[i].definition.as_str())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }
}

/// One line of the score file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub word: String,
    pub score: MasteryScore,
}

/// Ordered word → mastery score mapping.
///
/// Order is the order words were first added: score-file order on load,
/// then new dictionary words appended by [`ScoreBook::track_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBook {
    records: Vec<ScoreRecord>,
    index: HashMap<String, usize>,
}

impl ScoreBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word: &str) -> Option<MasteryScore> {
        self.index.get(word).map(|&i| self.records[i].score)
    }

    /// Set a word's score, appending the word if it is new.
    pub fn set(&mut self, word: impl Into<String>, score: MasteryScore) {
        let word = word.into();
        if let Some(&i) = self.index.get(&word) {
            self.records[i].score = score;
        } else {
            self.index.insert(word.clone(), self.records.len());
            self.records.push(ScoreRecord { word, score });
        }
    }

    /// Start tracking every dictionary word that has no score yet, at 0.
    ///
    /// Returns the number of words added.
    pub fn track_all(&mut self, dictionary: &Dictionary) -> usize {
        let mut added = 0;
        for word in dictionary.words() {
            if !self.index.contains_key(word) {
                self.set(word, MasteryScore::MIN);
                added += 1;
            }
        }
        added
    }

    /// Apply one answer to a word's score and return the new score.
    ///
    /// Unknown words start from 0.
    pub fn record_answer(&mut self, word: &str, correct: bool) -> MasteryScore {
        let current = self.get(word).unwrap_or_default();
        let next = if correct {
            current.increment()
        } else {
            current.decrement()
        };
        self.set(word, next);
        next
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreRecord> {
        self.records.iter()
    }
}
