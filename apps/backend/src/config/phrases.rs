//! Phrase pool loading.
//!
//! The pool ships embedded in the binary; deployments can swap it with a
//! plain text file (one phrase per line) via `BINGO_PHRASES_PATH`.

use crate::domain::phrases::PhrasePool;
use crate::error::AppError;

/// Environment variable pointing at an optional phrases file.
pub const PHRASES_PATH_ENV: &str = "BINGO_PHRASES_PATH";

const EMBEDDED_PHRASES: &str = include_str!("../../resources/phrases.txt");

/// The pool compiled into the binary.
pub fn embedded_pool() -> Result<PhrasePool, AppError> {
    Ok(PhrasePool::from_lines(EMBEDDED_PHRASES)?)
}

/// The configured pool: `BINGO_PHRASES_PATH` when set, embedded otherwise.
pub fn load_pool() -> Result<PhrasePool, AppError> {
    match std::env::var(PHRASES_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => {
            let raw = std::fs::read_to_string(&path).map_err(|e| {
                AppError::config(format!("Failed to read phrase file {path}: {e}"))
            })?;
            Ok(PhrasePool::from_lines(&raw)?)
        }
        _ => embedded_pool(),
    }
}
