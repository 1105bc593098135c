//! Puzzle loading utilities
//!
//! Resolves the `--puzzle` argument: a built-in number, a JSON file in the
//! options format, or an encoded parameter / play link.

use super::builtin;
use super::options::{self, PuzzleOptions};
use crate::core::{Puzzle, PuzzleError};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read authored options from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
///
/// # Examples
/// ```no_run
/// use clusters::puzzles::loader::load_options;
///
/// let options = load_options("puzzle.json").unwrap();
/// println!("{} categories", options.names.len());
/// ```
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<PuzzleOptions, PuzzleError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a puzzle from a JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not describe a valid
/// puzzle.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Puzzle, PuzzleError> {
    load_options(path)?.to_puzzle()
}

/// Resolve a puzzle source
///
/// # Errors
///
/// Returns an error if the source names no built-in, no readable file, and is
/// not a valid encoded puzzle.
pub fn resolve(source: &str) -> Result<Puzzle, PuzzleError> {
    let source = source.trim();

    if let Ok(number) = source.parse::<usize>() {
        debug!(number, "loading built-in puzzle");
        return builtin::puzzle(number);
    }

    let path = Path::new(source);
    if path.is_file() {
        debug!(path = %path.display(), "loading puzzle file");
        return load_from_file(path);
    }

    debug!("decoding puzzle parameter");
    options::decode(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn resolve_builtin_number() {
        let puzzle = resolve("2").unwrap();
        assert_eq!(puzzle.title(), "Connections #204");
    }

    #[test]
    fn resolve_unknown_builtin() {
        assert!(matches!(resolve("99"), Err(PuzzleError::UnknownBuiltin(99))));
    }

    #[test]
    fn resolve_encoded_parameter() {
        let encoded = options::encode(&builtin::puzzle(3).unwrap()).unwrap();
        let puzzle = resolve(&encoded).unwrap();
        assert_eq!(puzzle.title(), "Connections #235");
    }

    #[test]
    fn resolve_file() {
        let json = serde_json::to_string(&builtin::BUILTIN[0].options()).unwrap();
        let path = std::env::temp_dir().join(format!("clusters-loader-{}.json", std::process::id()));
        fs::File::create(&path)
            .unwrap()
            .write_all(json.as_bytes())
            .unwrap();

        let puzzle = resolve(path.to_str().unwrap()).unwrap();
        assert_eq!(puzzle.title(), "Connections #173");

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn resolve_garbage() {
        assert!(resolve("definitely not a puzzle").is_err());
    }

    #[test]
    fn load_missing_file() {
        assert!(matches!(
            load_from_file("/nonexistent/puzzle.json"),
            Err(PuzzleError::Io(_))
        ));
    }
}
