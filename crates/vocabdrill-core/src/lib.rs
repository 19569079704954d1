//! vocabdrill-core — Dictionary parsing, mastery scores, and the quiz engine.
//!
//! This crate holds everything the `vocabdrill` binary needs except the
//! console itself: the data model, the JSON config loader, the
//! tab-separated dictionary parser, the `word=score` score store, word
//! selection and score updates, file validation, and mastery statistics.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod model;
pub mod quiz;
pub mod scores;
pub mod statistics;
pub mod validate;
