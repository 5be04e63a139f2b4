//! Core data model types for wordgame.
//!
//! A [`WordPair`] is the unit everything else works with: datasets are
//! arrays of them, prompts are one of them, and the translation lookup is
//! built from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One candidate translation: an English text and a Spanish text.
///
/// Equality and hashing cover both fields, which is what dataset
/// deduplication relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    /// The English side of the pair.
    #[serde(rename = "text_eng")]
    pub english_text: String,
    /// The Spanish side of the pair.
    #[serde(rename = "text_spa")]
    pub spanish_text: String,
}

impl WordPair {
    pub fn new(english_text: impl Into<String>, spanish_text: impl Into<String>) -> Self {
        Self {
            english_text: english_text.into(),
            spanish_text: spanish_text.into(),
        }
    }
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.english_text, self.spanish_text)
    }
}
