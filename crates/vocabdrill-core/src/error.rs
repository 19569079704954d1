//! Store error types.
//!
//! These represent failures reading the dictionary and score files that
//! callers need to tell apart: a missing dictionary ends the program, a
//! malformed score line is skipped.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading vocabdrill's data files.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The configured dictionary file does not exist.
    #[error("dictionary file {} does not exist, check dictionary_path in the config", .0.display())]
    DictionaryNotFound(PathBuf),

    /// A score line has no `=` separator or an empty word.
    #[error("line {line}: expected `word=score`, got {content:?}")]
    MalformedScoreLine { line: usize, content: String },

    /// The score part of a line is not an integer.
    #[error("line {line}: score for '{word}' is not an integer: {value:?}")]
    InvalidScore {
        line: usize,
        word: String,
        value: String,
    },
}
