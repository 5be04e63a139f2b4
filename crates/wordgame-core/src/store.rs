//! Word-pair datasets: the store trait, its implementations, and validation.
//!
//! A dataset is a JSON array of `{ "text_eng": ..., "text_spa": ... }`
//! records. Stores hand the raw, possibly duplicated records to the engine,
//! which does its own deduplication.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::model::WordPair;

/// Name of the dataset bundled into the binary.
pub const BUILTIN_DATASET: &str = "words";

const BUILTIN_WORDS_JSON: &str = include_str!("../data/words.json");

/// A source of word-pair datasets, addressed by name.
pub trait WordPairStore {
    /// Load the raw records of the named dataset.
    fn load(&self, source: &str) -> Result<Vec<WordPair>, LoadError>;
}

/// Parse a JSON string into word-pair records.
///
/// `origin` is only used to label errors.
pub fn parse_word_pairs_str(content: &str, origin: &str) -> Result<Vec<WordPair>, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::Malformed {
        origin: origin.to_string(),
        source,
    })
}

/// Read and parse a dataset file.
pub fn parse_word_pairs_file(path: &Path) -> Result<Vec<WordPair>, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_word_pairs_str(&content, &path.display().to_string())
}

// ---------------------------------------------------------------------------
// JSON files on disk
// ---------------------------------------------------------------------------

/// Loads `<base_dir>/<source>.json`.
///
/// A source that already carries a `.json` extension is taken as a path:
/// used directly if it exists, otherwise looked up under `base_dir`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    base_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The file a dataset name maps to.
    pub fn resolve(&self, source: &str) -> PathBuf {
        let given = Path::new(source);
        if given.extension().is_some_and(|ext| ext == "json") {
            if given.is_absolute() || given.is_file() {
                return given.to_path_buf();
            }
            return self.base_dir.join(given);
        }
        self.base_dir.join(format!("{source}.json"))
    }
}

impl WordPairStore for JsonFileStore {
    fn load(&self, source: &str) -> Result<Vec<WordPair>, LoadError> {
        let path = self.resolve(source);
        tracing::debug!("loading dataset '{}' from {}", source, path.display());
        parse_word_pairs_file(&path)
    }
}

// ---------------------------------------------------------------------------
// In-memory and embedded datasets
// ---------------------------------------------------------------------------

/// Datasets held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    datasets: HashMap<String, Vec<WordPair>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dataset, replacing any previous one with the same name.
    pub fn with_dataset(mut self, name: impl Into<String>, pairs: Vec<WordPair>) -> Self {
        self.datasets.insert(name.into(), pairs);
        self
    }
}

impl WordPairStore for MemoryStore {
    fn load(&self, source: &str) -> Result<Vec<WordPair>, LoadError> {
        self.datasets
            .get(source)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(source.to_string()))
    }
}

/// The `words` dataset compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedStore;

impl EmbeddedStore {
    /// Raw JSON of the bundled dataset.
    pub fn raw() -> &'static str {
        BUILTIN_WORDS_JSON
    }
}

impl WordPairStore for EmbeddedStore {
    fn load(&self, source: &str) -> Result<Vec<WordPair>, LoadError> {
        if source != BUILTIN_DATASET {
            return Err(LoadError::NotFound(source.to_string()));
        }
        parse_word_pairs_str(BUILTIN_WORDS_JSON, "builtin:words")
    }
}

/// Tries each store in order until one has the dataset.
///
/// Only `NotFound` moves on to the next store; a malformed or unreadable
/// dataset is reported immediately.
#[derive(Default)]
pub struct StoreChain {
    stores: Vec<Box<dyn WordPairStore>>,
}

impl StoreChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, store: impl WordPairStore + 'static) -> Self {
        self.stores.push(Box::new(store));
        self
    }
}

impl WordPairStore for StoreChain {
    fn load(&self, source: &str) -> Result<Vec<WordPair>, LoadError> {
        for store in &self.stores {
            match store.load(source) {
                Err(e) if e.is_not_found() => continue,
                other => return other,
            }
        }
        Err(LoadError::NotFound(source.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A warning from dataset validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Index of the offending record (if applicable).
    pub index: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Check raw dataset records for issues the engine would silently absorb.
pub fn validate_word_pairs(pairs: &[WordPair]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    for (i, pair) in pairs.iter().enumerate() {
        if !seen.insert(pair) {
            warnings.push(ValidationWarning {
                index: Some(i),
                message: format!("duplicate pair: {pair}"),
            });
        }
    }

    // Distinct translations for one English text: the lookup keeps only one.
    let mut translations: HashMap<&str, Vec<&str>> = HashMap::new();
    for pair in seen {
        translations
            .entry(pair.english_text.as_str())
            .or_default()
            .push(pair.spanish_text.as_str());
    }
    let mut conflicts: Vec<_> = translations
        .into_iter()
        .filter(|(_, spanish)| spanish.len() > 1)
        .collect();
    conflicts.sort_by_key(|(english, _)| *english);
    for (english, mut spanish) in conflicts {
        spanish.sort_unstable();
        warnings.push(ValidationWarning {
            index: None,
            message: format!(
                "conflicting translations for '{english}': {}",
                spanish.join(", ")
            ),
        });
    }

    for (i, pair) in pairs.iter().enumerate() {
        if pair.english_text.trim().is_empty() {
            warnings.push(ValidationWarning {
                index: Some(i),
                message: "text_eng is empty".into(),
            });
        }
        if pair.spanish_text.trim().is_empty() {
            warnings.push(ValidationWarning {
                index: Some(i),
                message: "text_spa is empty".into(),
            });
        }
    }

    warnings
}
