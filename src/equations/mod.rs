//! Equation corpus for Numberle
//!
//! Provides the embedded corpus compiled into the binary, file loading, and
//! the [`EquationSource`] seam from which a game draws its secret.

mod embedded;
pub mod loader;

pub use embedded::{EQUATIONS, EQUATIONS_COUNT};

use crate::core::Equation;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a secret equation
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("could not read equations from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("the equation corpus is empty")]
    Empty,
}

/// Something that supplies candidate secret equations
///
/// Entries are trusted to be correct equations; only player guesses are
/// validated.
pub trait EquationSource {
    /// Load the candidate equations
    ///
    /// # Errors
    /// Returns `CorpusError` if the candidates cannot be read.
    fn load(&self) -> Result<Vec<Equation>, CorpusError>;
}

/// The corpus embedded at build time
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EquationSource for EmbeddedSource {
    fn load(&self) -> Result<Vec<Equation>, CorpusError> {
        Ok(loader::equations_from_slice(EQUATIONS))
    }
}

/// A text file with one equation per line
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EquationSource for FileSource {
    fn load(&self) -> Result<Vec<Equation>, CorpusError> {
        loader::load_from_file(&self.path)
    }
}

impl EquationSource for [Equation] {
    fn load(&self) -> Result<Vec<Equation>, CorpusError> {
        Ok(self.to_vec())
    }
}

impl EquationSource for Vec<Equation> {
    fn load(&self) -> Result<Vec<Equation>, CorpusError> {
        self.as_slice().load()
    }
}

/// Pick a secret uniformly at random
///
/// # Errors
/// Returns `CorpusError::Empty` if there are no candidates.
pub fn choose_secret<R: Rng + ?Sized>(
    candidates: &[Equation],
    rng: &mut R,
) -> Result<Equation, CorpusError> {
    candidates.choose(rng).cloned().ok_or(CorpusError::Empty)
}

/// Resolve the `--equations` option: `embedded` or a file path
#[must_use]
pub fn source_from_arg(arg: &str) -> Box<dyn EquationSource> {
    match arg {
        "embedded" => Box::new(EmbeddedSource),
        path => Box::new(FileSource::new(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn equations_count_matches_const() {
        assert_eq!(EQUATIONS.len(), EQUATIONS_COUNT);
        assert!(EQUATIONS_COUNT > 0);
    }

    #[test]
    fn embedded_equations_are_correct() {
        for &text in EQUATIONS {
            let equation = Equation::new(text)
                .unwrap_or_else(|e| panic!("Equation '{text}' is malformed: {e}"));
            assert!(
                equation.check().is_ok(),
                "Equation '{text}' is not arithmetically true"
            );
        }
    }

    #[test]
    fn embedded_source_loads_everything() {
        let equations = EmbeddedSource.load().unwrap();
        assert_eq!(equations.len(), EQUATIONS_COUNT);
    }

    #[test]
    fn choose_secret_returns_a_candidate() {
        let candidates = loader::equations_from_slice(&["12+3=15", "1+2+3=6", "9-3*2=3"]);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let secret = choose_secret(&candidates, &mut rng).unwrap();
            assert!(candidates.contains(&secret));
        }
    }

    #[test]
    fn choose_secret_reaches_every_candidate() {
        let candidates = loader::equations_from_slice(&["12+3=15", "1+2+3=6", "9-3*2=3"]);
        let mut rng = StdRng::seed_from_u64(1);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(choose_secret(&candidates, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), candidates.len());
    }

    #[test]
    fn choose_secret_from_empty_fails() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(matches!(
            choose_secret(&[], &mut rng),
            Err(CorpusError::Empty)
        ));
    }

    #[test]
    fn seeded_choice_is_reproducible() {
        let candidates = EmbeddedSource.load().unwrap();
        let a = choose_secret(&candidates, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = choose_secret(&candidates, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn source_from_arg_selects_embedded() {
        let source = source_from_arg("embedded");
        assert_eq!(source.load().unwrap().len(), EQUATIONS_COUNT);

        let missing = source_from_arg("no/such/corpus.txt");
        assert!(matches!(missing.load(), Err(CorpusError::Io { .. })));
    }
}
