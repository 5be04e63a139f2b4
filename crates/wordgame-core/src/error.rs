//! Dataset loading errors.
//!
//! A [`LoadError`] is what a [`WordPairStore`](crate::store::WordPairStore)
//! reports when a dataset can't be produced. The engine never propagates it:
//! it logs the failure and starts with an empty word pool. Strict callers
//! such as dataset validation surface it as-is.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a word-pair dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No dataset exists under the given name or path.
    #[error("dataset not found: {0}")]
    NotFound(String),

    /// The dataset file exists but couldn't be read.
    #[error("failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content isn't a JSON array of word-pair records.
    #[error("malformed dataset {origin}: {source}")]
    Malformed {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Returns `true` if the dataset is simply absent, as opposed to broken.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound(_))
    }
}
