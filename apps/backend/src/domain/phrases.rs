//! The fixed phrase pool backing scorecards and the call sequence.

use std::collections::HashSet;

use crate::errors::domain::DomainError;

/// Ordered, de-duplicated set of distinct phrases for one deployment.
///
/// The pool is fixed for the process lifetime: scorecards sample from it and
/// the call sequencer reshuffles it each round, but nothing ever mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhrasePool {
    phrases: Vec<String>,
}

impl PhrasePool {
    /// Build a pool from raw phrase candidates.
    ///
    /// Entries are trimmed, blank lines are skipped, and duplicates keep
    /// their first position. An empty result is a validation error.
    pub fn new(candidates: impl IntoIterator<Item = String>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        let mut phrases = Vec::new();
        for candidate in candidates {
            let phrase = candidate.trim();
            if phrase.is_empty() {
                continue;
            }
            if seen.insert(phrase.to_string()) {
                phrases.push(phrase.to_string());
            }
        }
        if phrases.is_empty() {
            return Err(DomainError::validation("Phrase pool is empty"));
        }
        Ok(Self { phrases })
    }

    /// Build a pool from newline-separated text, e.g. a phrases file.
    pub fn from_lines(raw: &str) -> Result<Self, DomainError> {
        Self::new(raw.lines().map(str::to_string))
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases.iter().any(|p| p == phrase)
    }
}
