//! Checks for dictionary and score files.
//!
//! Loading is lenient and silently drops bad lines; these functions list
//! what would be dropped so the user can fix the files.

use std::collections::HashMap;

use crate::dictionary::parse_line;
use crate::model::{Dictionary, MasteryScore};
use crate::scores::parse_score_line;

/// A warning from file validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// 1-based line number.
    pub line: usize,
    /// Warning message.
    pub message: String,
}

/// Validate dictionary text for common issues.
pub fn validate_dictionary_str(content: &str) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (i, raw) in content.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_line(raw) {
            None if raw.contains('\t') => warnings.push(ValidationWarning {
                line,
                message: "missing word or definition".into(),
            }),
            None => warnings.push(ValidationWarning {
                line,
                message: "no tab between word and definition".into(),
            }),
            Some((word, definition)) => {
                if definition.is_empty() {
                    warnings.push(ValidationWarning {
                        line,
                        message: format!("empty definition for '{word}'"),
                    });
                }
                match seen.get(word) {
                    Some(first) => warnings.push(ValidationWarning {
                        line,
                        message: format!(
                            "duplicate word '{word}' (first on line {first}), later definition wins"
                        ),
                    }),
                    None => {
                        seen.insert(word.to_string(), line);
                    }
                }
            }
        }
    }

    warnings
}

/// Validate score file text against the dictionary it belongs to.
pub fn validate_scores_str(content: &str, dictionary: &Dictionary) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (i, raw) in content.lines().enumerate() {
        let line = i + 1;
        match parse_score_line(line, raw) {
            Ok(None) => {}
            Ok(Some((word, value))) => {
                if MasteryScore::new(value).is_none() {
                    warnings.push(ValidationWarning {
                        line,
                        message: format!(
                            "score {value} for '{word}' is outside {}..={}",
                            MasteryScore::MIN,
                            MasteryScore::MAX
                        ),
                    });
                }
                if !dictionary.contains(&word) {
                    warnings.push(ValidationWarning {
                        line,
                        message: format!("'{word}' is not in the dictionary"),
                    });
                }
            }
            Err(e) => warnings.push(ValidationWarning {
                line,
                message: e.to_string(),
            }),
        }
    }

    warnings
}
