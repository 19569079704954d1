//! Tab-separated dictionary parser.
//!
//! Each line is `word<TAB>definition`. Blank lines and lines without a tab
//! are skipped.

use std::path::Path;

use anyhow::{Context, Result};

use crate::error::StoreError;
use crate::model::Dictionary;

/// Split one dictionary line into `(word, definition)`.
///
/// Returns `None` for lines that carry no entry. Fields past the second
/// are ignored.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let mut fields = line.split('\t');
    let word = fields.next()?.trim();
    let definition = fields.next()?.trim();
    Some((word, definition))
}

/// Parse dictionary text (useful for testing).
pub fn parse_dictionary_str(content: &str) -> Dictionary {
    let mut dictionary = Dictionary::new();
    for (i, line) in content.lines().enumerate() {
        match parse_line(line) {
            Some((word, definition)) => {
                dictionary.insert(word, definition);
            }
            None if !line.trim().is_empty() => {
                tracing::debug!("skipping dictionary line {}: {:?}", i + 1, line);
            }
            None => {}
        }
    }
    dictionary
}

/// Load a dictionary file.
///
/// A missing file is reported as [`StoreError::DictionaryNotFound`] so the
/// caller can tell it apart from other read failures.
pub fn load_dictionary(path: &Path) -> Result<Dictionary> {
    if !path.exists() {
        return Err(StoreError::DictionaryNotFound(path.to_path_buf()).into());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dictionary file: {}", path.display()))?;
    let dictionary = parse_dictionary_str(&content);
    tracing::debug!("loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "abandon\tto leave behind\n\
                          \n\
                          benevolent\t  kind and generous  \n\
                          no tab on this line\n\
                          \tmissing word\n\
                          candid\ttruthful\tthird field ignored\n";

    #[test]
    fn parse_skips_malformed_lines() {
        let dict = parse_dictionary_str(SAMPLE);
        assert_eq!(dict.len(), 3);
        assert_eq!(
            dict.words().collect::<Vec<_>>(),
            vec!["abandon", "benevolent", "candid"]
        );
        assert_eq!(dict.definition("benevolent"), Some("kind and generous"));
        assert_eq!(dict.definition("candid"), Some("truthful"));
    }

    #[test]
    fn parse_line_trims_fields() {
        assert_eq!(parse_line("  word \t def \r"), Some(("word", "def")));
        assert_eq!(parse_line("word\t\tsecond is empty"), Some(("word", "")));
        assert_eq!(parse_line("word\t"), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("word only"), None);
    }

    #[test]
    fn later_duplicate_overwrites_definition() {
        let dict = parse_dictionary_str("a\tfirst\nb\tsecond\na\tthird\n");
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.definition("a"), Some("third"));
        assert_eq!(dict.words().next(), Some("a"));
    }

    #[test]
    fn load_missing_file_is_classified() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dictionary(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::DictionaryNotFound(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, SAMPLE).unwrap();

        let dict = load_dictionary(&path).unwrap();
        assert_eq!(dict.len(), 3);
    }
}
