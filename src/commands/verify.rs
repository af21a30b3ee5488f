//! Corpus verification command
//!
//! Checks every entry of an equation corpus in parallel and reports the ones
//! that could never be guessed: malformed, arithmetically false, or repeated.

use crate::core::Equation;
use crate::equations::{CorpusError, EQUATIONS};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fs;
use std::time::{Duration, Instant};

/// A corpus entry that failed verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEntry {
    /// 1-based line number
    pub line: usize,
    pub text: String,
    pub reason: String,
}

/// Statistics from verifying a corpus
#[derive(Debug)]
pub struct VerifyReport {
    pub total: usize,
    pub valid: usize,
    pub invalid: Vec<InvalidEntry>,
    /// Equations appearing more than once, with their count
    pub duplicates: Vec<(String, usize)>,
    pub duration: Duration,
}

impl VerifyReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty() && self.duplicates.is_empty()
    }
}

/// Read the raw corpus lines for `--equations` (`embedded` or a path)
///
/// Unlike the game loader nothing is filtered, so malformed lines can be
/// reported.
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read.
pub fn corpus_lines(arg: &str) -> Result<Vec<String>, CorpusError> {
    if arg == "embedded" {
        return Ok(EQUATIONS.iter().map(ToString::to_string).collect());
    }

    let content = fs::read_to_string(arg).map_err(|source| CorpusError::Io {
        path: arg.into(),
        source,
    })?;
    Ok(content.lines().map(ToString::to_string).collect())
}

/// Verify every non-blank line of a corpus
///
/// Lines are validated in parallel; the report lists failures in line order.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
#[must_use]
pub fn verify_corpus(lines: &[String], show_progress: bool) -> VerifyReport {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(lines.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let checked: Vec<(usize, &str, Result<(), String>)> = lines
        .par_iter()
        .enumerate()
        .filter_map(|(index, line)| {
            pb.inc(1);
            let text = line.trim();
            if text.is_empty() {
                return None;
            }
            let outcome = Equation::new(text)
                .map_err(|e| e.to_string())
                .and_then(|equation| equation.check().map_err(|e| e.to_string()));
            Some((index + 1, text, outcome))
        })
        .collect();

    pb.finish_and_clear();

    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    let mut invalid = Vec::new();
    let mut valid = 0;

    for (line, text, outcome) in &checked {
        match outcome {
            Ok(()) => {
                valid += 1;
                *counts.entry(*text).or_insert(0) += 1;
            }
            Err(reason) => invalid.push(InvalidEntry {
                line: *line,
                text: (*text).to_string(),
                reason: reason.clone(),
            }),
        }
    }

    let mut duplicates: Vec<(String, usize)> = counts
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(text, count)| (text.to_string(), count))
        .collect();
    duplicates.sort();

    tracing::info!(
        total = checked.len(),
        valid,
        invalid = invalid.len(),
        duplicates = duplicates.len(),
        "Corpus verified"
    );

    VerifyReport {
        total: checked.len(),
        valid,
        invalid,
        duplicates,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn embedded_corpus_is_clean() {
        let report = verify_corpus(&corpus_lines("embedded").unwrap(), false);
        assert!(report.is_clean(), "invalid: {:?}", report.invalid);
        assert_eq!(report.total, EQUATIONS.len());
        assert_eq!(report.valid, EQUATIONS.len());
    }

    #[test]
    fn reports_invalid_lines_in_order() {
        let report = verify_corpus(
            &lines(&["12+3=15", "1+1=2", "", "1+2+3=7", "5/0+1=1", "9-3*2=3"]),
            false,
        );

        assert_eq!(report.total, 5);
        assert_eq!(report.valid, 2);
        let bad: Vec<(usize, &str)> = report
            .invalid
            .iter()
            .map(|e| (e.line, e.text.as_str()))
            .collect();
        assert_eq!(bad, vec![(2, "1+1=2"), (4, "1+2+3=7"), (5, "5/0+1=1")]);
        assert!(!report.is_clean());
    }

    #[test]
    fn reports_duplicates() {
        let report = verify_corpus(&lines(&["12+3=15", "1+2+3=6", " 12+3=15 "]), false);
        assert!(report.invalid.is_empty());
        assert_eq!(report.duplicates, vec![("12+3=15".to_string(), 2)]);
        assert!(!report.is_clean());
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            corpus_lines("no/such/corpus.txt"),
            Err(CorpusError::Io { .. })
        ));
    }
}
