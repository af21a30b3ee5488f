//! Equation corpus loading utilities
//!
//! Provides functions to load equations from files or use the embedded list.

use super::CorpusError;
use crate::core::Equation;
use std::fs;
use std::path::Path;

/// Load equations from a file, one per line
///
/// Blank lines are skipped, as are lines that are not well-formed
/// equations (each skipped line is logged). Arithmetic correctness is not
/// checked here; use the `verify` command for that.
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use numberle::equations::loader::load_from_file;
///
/// let equations = load_from_file("data/equations.txt").unwrap();
/// println!("Loaded {} equations", equations.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Equation>, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let equations = equations_from_lines(content.lines());
    tracing::info!(
        path = %path.display(),
        count = equations.len(),
        "Loaded equation corpus"
    );

    Ok(equations)
}

/// Convert embedded string slice to Equation vector
///
/// # Examples
/// ```
/// use numberle::equations::loader::equations_from_slice;
/// use numberle::equations::EQUATIONS;
///
/// let equations = equations_from_slice(EQUATIONS);
/// assert_eq!(equations.len(), EQUATIONS.len());
/// ```
#[must_use]
pub fn equations_from_slice(slice: &[&str]) -> Vec<Equation> {
    equations_from_lines(slice.iter().copied())
}

fn equations_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Equation> {
    lines
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            Equation::new(trimmed)
                .inspect_err(|e| {
                    tracing::warn!(line = index + 1, text = trimmed, error = %e, "Skipping corpus entry");
                })
                .ok()
        })
        .collect()
}
