//! Score file store.
//!
//! The score file holds one `word=score` line per tracked word. Loading
//! is lenient: malformed lines are skipped with a warning and out-of-range
//! scores are clamped. Saving replaces the file atomically.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::Builder;

use crate::error::StoreError;
use crate::model::{MasteryScore, ScoreBook};

/// Split one score line into `(word, raw_score)`.
///
/// `line_no` is 1-based and only used in errors. Returns `Ok(None)` for
/// blank lines. The split is on the last `=`, so a word may itself
/// contain `=`.
pub fn parse_score_line(line_no: usize, line: &str) -> Result<Option<(String, i64)>, StoreError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, value) = line
        .rsplit_once('=')
        .ok_or_else(|| StoreError::MalformedScoreLine {
            line: line_no,
            content: line.to_string(),
        })?;
    let word = word.trim();
    if word.is_empty() {
        return Err(StoreError::MalformedScoreLine {
            line: line_no,
            content: line.to_string(),
        });
    }

    let value = value.trim();
    let score = value.parse::<i64>().map_err(|_| StoreError::InvalidScore {
        line: line_no,
        word: word.to_string(),
        value: value.to_string(),
    })?;

    Ok(Some((word.to_string(), score)))
}

/// Parse score file text (useful for testing).
pub fn parse_scores_str(content: &str) -> ScoreBook {
    let mut book = ScoreBook::new();
    for (i, line) in content.lines().enumerate() {
        match parse_score_line(i + 1, line) {
            Ok(Some((word, raw))) => {
                let score = MasteryScore::clamped(raw);
                if i64::from(score.value()) != raw {
                    tracing::warn!(
                        "score for '{}' on line {} is out of range ({}), using {}",
                        word,
                        i + 1,
                        raw,
                        score
                    );
                }
                book.set(word, score);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("skipping score entry: {}", e);
            }
        }
    }
    book
}

/// Load the score file, or an empty book if it does not exist yet.
pub fn load_scores(path: &Path) -> Result<ScoreBook> {
    if !path.exists() {
        tracing::debug!("no score file at {}, starting fresh", path.display());
        return Ok(ScoreBook::new());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read score file: {}", path.display()))?;
    Ok(parse_scores_str(&content))
}

/// Render a score book as score file text, in book order.
pub fn format_scores(book: &ScoreBook) -> String {
    let mut out = String::new();
    for record in book.iter() {
        out.push_str(&record.word);
        out.push('=');
        out.push_str(&record.score.to_string());
        out.push('\n');
    }
    out
}

/// Write the score book to `path`.
///
/// The content goes to a temporary file in the same directory which is
/// then renamed over `path`, so a crash never leaves a half-written file.
/// An existing file keeps its permissions; a new one gets the same mode a
/// plain create would.
pub fn save_scores(path: &Path, book: &ScoreBook) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Masked by the umask at creation, like `File::create`.
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder
        .tempfile_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    if let Ok(meta) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .with_context(|| format!("failed to copy permissions of {}", path.display()))?;
    }
    tmp.write_all(format_scores(book).as_bytes())
        .context("failed to write scores")?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("failed to write score file to {}", path.display()))?;

    tracing::debug!("saved {} scores to {}", book.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_lines() {
        let book = parse_scores_str("apple=3\nbrick=0\n\ncloud=4\n");
        assert_eq!(book.len(), 3);
        assert_eq!(book.get("apple").map(MasteryScore::value), Some(3));
        assert_eq!(book.get("cloud"), Some(MasteryScore::MAX));
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let book = parse_scores_str("apple=3\nno separator\n=2\nbrick=lots\ncloud=1\n");
        let words: Vec<_> = book.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["apple", "cloud"]);
    }

    #[test]
    fn out_of_range_is_clamped() {
        let book = parse_scores_str("apple=9\nbrick=-2\n");
        assert_eq!(book.get("apple"), Some(MasteryScore::MAX));
        assert_eq!(book.get("brick"), Some(MasteryScore::MIN));
    }

    #[test]
    fn parse_line_errors() {
        assert!(matches!(
            parse_score_line(4, "oops"),
            Err(StoreError::MalformedScoreLine { line: 4, .. })
        ));
        assert!(matches!(
            parse_score_line(1, "word=x"),
            Err(StoreError::InvalidScore { .. })
        ));
        assert_eq!(parse_score_line(1, "  ").unwrap(), None);
        assert_eq!(
            parse_score_line(1, "a=b=2").unwrap(),
            Some(("a=b".to_string(), 2))
        );
    }

    #[test]
    fn missing_file_is_empty_book() {
        let dir = tempfile::tempdir().unwrap();
        let book = load_scores(&dir.path().join("none.cfg")).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn save_then_load_matches_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.cfg");

        let mut book = ScoreBook::new();
        book.set("zebra", MasteryScore::clamped(2));
        book.set("apple", MasteryScore::MAX);
        book.set("x=y", MasteryScore::MIN);
        book.set("café", MasteryScore::clamped(1));

        save_scores(&path, &book).unwrap();
        let reloaded = load_scores(&path).unwrap();
        assert_eq!(reloaded, book);

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "zebra=2\napple=4\nx=y=0\ncafé=1\n"
        );
    }

    #[test]
    fn save_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.cfg");
        std::fs::write(&path, "old=1\nstale=2\n").unwrap();

        let mut book = ScoreBook::new();
        book.set("new", MasteryScore::clamped(3));
        save_scores(&path, &book).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new=3\n");
    }

    #[cfg(unix)]
    #[test]
    fn save_keeps_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let mut book = ScoreBook::new();
        book.set("apple", MasteryScore::clamped(1));

        for mode in [0o644, 0o640] {
            let path = dir.path().join(format!("words-{mode:o}.cfg"));
            std::fs::write(&path, "apple=0\n").unwrap();
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();

            save_scores(&path, &book).unwrap();

            let after = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
            assert_eq!(after, mode, "mode changed for {}", path.display());
        }
    }

    #[cfg(unix)]
    #[test]
    fn new_score_file_gets_default_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("reference");
        std::fs::write(&reference, "").unwrap();
        let expected = std::fs::metadata(&reference).unwrap().permissions().mode() & 0o777;

        let path = dir.path().join("words.cfg");
        save_scores(&path, &ScoreBook::new()).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, expected);
    }
}
