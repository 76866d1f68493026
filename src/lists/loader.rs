//! Expression list loading utilities
//!
//! Lists are plain text: one entry per line, blank lines and `#` comments ignored.

use crate::core::Expression;
use crate::error::LoadError;
use std::fs;
use std::path::Path;

/// Load one expression per line
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and `LoadError::Parse`,
/// carrying the 1-based line number, for the first invalid entry.
///
/// # Examples
/// ```no_run
/// use nerdle_score::lists::load_expressions;
///
/// let exprs = load_expressions("answers6.txt").unwrap();
/// println!("Loaded {} expressions", exprs.len());
/// ```
pub fn load_expressions<P: AsRef<Path>>(path: P) -> Result<Vec<Expression>, LoadError> {
    let path = path.as_ref();
    let content = read(path)?;

    let exprs = entries(&content)
        .map(|(line, text)| {
            Expression::new(text).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                line,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(path = %path.display(), count = exprs.len(), "loaded expressions");
    Ok(exprs)
}

/// Load `<guess> <answer>` pairs, one per line
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, `LoadError::MalformedPair`
/// for a line without exactly two fields, and `LoadError::Parse` for an invalid
/// expression.
pub fn load_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<(Expression, Expression)>, LoadError> {
    let path = path.as_ref();
    let content = read(path)?;

    let parse = |line: usize, text: &str| {
        Expression::new(text).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            line,
            source,
        })
    };

    let pairs = entries(&content)
        .map(|(line, text)| {
            let mut fields = text.split_whitespace();
            match (fields.next(), fields.next(), fields.next()) {
                (Some(guess), Some(answer), None) => Ok((parse(line, guess)?, parse(line, answer)?)),
                _ => Err(LoadError::MalformedPair {
                    path: path.to_path_buf(),
                    line,
                }),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(path = %path.display(), count = pairs.len(), "loaded pairs");
    Ok(pairs)
}

/// Convert a string slice to expressions, skipping invalid entries
///
/// # Examples
/// ```
/// use nerdle_score::lists::expressions_from_slice;
///
/// let exprs = expressions_from_slice(&["1+2=3", "", "4*7=28"]);
/// assert_eq!(exprs.len(), 2);
/// ```
#[must_use]
pub fn expressions_from_slice(slice: &[&str]) -> Vec<Expression> {
    slice
        .iter()
        .filter_map(|&s| match Expression::new(s) {
            Ok(expr) => Some(expr),
            Err(err) => {
                tracing::warn!(entry = s, %err, "skipping invalid expression");
                None
            }
        })
        .collect()
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Non-empty, non-comment lines with their 1-based line numbers
fn entries(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoreError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_list(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_expressions_skips_blanks_and_comments() {
        let file = write_list("# mini nerdle\n1+2=3\n\n  4*7=28  \n");
        let exprs = load_expressions(file.path()).unwrap();

        assert_eq!(exprs.len(), 2);
        assert_eq!(exprs[0].as_str(), "1+2=3");
        assert_eq!(exprs[1].as_str(), "4*7=28");
    }

    #[test]
    fn load_expressions_reports_line_number() {
        let file = write_list("1+2=3\n\n123+456=579\n");
        let err = load_expressions(file.path()).unwrap_err();

        assert!(matches!(
            err,
            LoadError::Parse {
                line: 3,
                source: ScoreError::SlotCountExceeded { len: 11, max: 8 },
                ..
            }
        ));
    }

    #[test]
    fn load_expressions_missing_file() {
        let err = load_expressions("/nonexistent/list.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn load_pairs_parses_fields() {
        let file = write_list("54/9=6 4*7=28\n10-43=66\t12+34=56\n");
        let pairs = load_pairs(file.path()).unwrap();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0.as_str(), "54/9=6");
        assert_eq!(pairs[0].1.as_str(), "4*7=28");
        assert_eq!(pairs[1].1.as_str(), "12+34=56");
    }

    #[test]
    fn load_pairs_rejects_wrong_field_count() {
        let file = write_list("54/9=6 4*7=28\n1+2=3\n");
        assert!(matches!(
            load_pairs(file.path()).unwrap_err(),
            LoadError::MalformedPair { line: 2, .. }
        ));

        let file = write_list("1+2=3 3=2+1 extra\n");
        assert!(matches!(
            load_pairs(file.path()).unwrap_err(),
            LoadError::MalformedPair { line: 1, .. }
        ));
    }

    #[test]
    fn load_pairs_keeps_length_mismatch_for_scoring() {
        // Lengths are checked when scoring, not when loading
        let file = write_list("1+2=3 10-2=8\n");
        let pairs = load_pairs(file.path()).unwrap();
        assert_eq!(pairs[0].0.len(), 5);
        assert_eq!(pairs[0].1.len(), 6);
    }

    #[test]
    fn expressions_from_slice_skips_invalid() {
        let exprs = expressions_from_slice(&["1+2=3", "toolongexpr", "", "4*7=28"]);
        assert_eq!(exprs.len(), 2);
        assert_eq!(exprs[1].as_str(), "4*7=28");
    }

    #[test]
    fn expressions_from_slice_empty() {
        assert!(expressions_from_slice(&[]).is_empty());
    }
}
