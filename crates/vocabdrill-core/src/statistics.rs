//! Mastery statistics over a dictionary.

use crate::model::{Dictionary, MasteryScore, ScoreBook};

/// How many dictionary words sit at each mastery level.
#[derive(Debug, Clone, PartialEq)]
pub struct MasteryStats {
    /// `per_level[n]` is the number of words with score `n`.
    pub per_level: [usize; 5],
    /// Dictionary size.
    pub total: usize,
}

impl MasteryStats {
    /// Count levels for every dictionary word. Words without a score
    /// count as level 0; scored words missing from the dictionary are
    /// ignored.
    pub fn compute(dictionary: &Dictionary, scores: &ScoreBook) -> Self {
        let mut per_level = [0usize; 5];
        for word in dictionary.words() {
            let score = scores.get(word).unwrap_or_default();
            per_level[score.value() as usize] += 1;
        }
        Self {
            per_level,
            total: dictionary.len(),
        }
    }

    pub fn mastered(&self) -> usize {
        self.per_level[MasteryScore::MAX.value() as usize]
    }

    /// Words still in rotation.
    pub fn remaining(&self) -> usize {
        self.total - self.mastered()
    }

    pub fn mastered_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.mastered() as f64 / self.total as f64 * 100.0
        }
    }
}
