//! The quiz engine.
//!
//! Owns the deduplicated word pool and the translation lookup, produces
//! prompts, judges them and computes the final score. It keeps no round
//! counters; see [`Round`](crate::round::Round) for that.

use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::model::WordPair;
use crate::store::WordPairStore;

/// How [`GameEngine::generate_random_incorrect_word_pair`] picks the Spanish side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncorrectPairStrategy {
    /// English and Spanish are drawn independently; the result is correct
    /// by chance roughly `1/n` of the time.
    #[default]
    Independent,
    /// The Spanish side is drawn among texts other than the true
    /// translation, falling back to it only when nothing else exists.
    Exclusive,
}

/// Configuration for the game engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// One prompt in this many is drawn as a correct pair.
    #[serde(default = "default_correct_prompt_odds")]
    pub correct_prompt_odds: u32,
    /// Strategy for mismatched prompts.
    #[serde(default)]
    pub incorrect_strategy: IncorrectPairStrategy,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_correct_prompt_odds() -> u32 {
    4
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            correct_prompt_odds: default_correct_prompt_odds(),
            incorrect_strategy: IncorrectPairStrategy::default(),
            seed: None,
        }
    }
}

/// The word-pair quiz engine.
#[derive(Debug)]
pub struct GameEngine {
    source: String,
    word_pairs: Vec<WordPair>,
    translations: HashMap<String, String>,
    config: EngineConfig,
    rng: ChaCha8Rng,
}

impl GameEngine {
    /// Build an engine from the named dataset with the default configuration.
    pub fn new(source: &str, store: &dyn WordPairStore) -> Self {
        Self::with_config(source, store, EngineConfig::default())
    }

    /// Build an engine from the named dataset.
    ///
    /// Never fails: an unavailable dataset is logged and yields an engine
    /// with an empty pool.
    pub fn with_config(source: &str, store: &dyn WordPairStore, config: EngineConfig) -> Self {
        let raw = match store.load(source) {
            Ok(pairs) => pairs,
            Err(e) => {
                tracing::warn!("dataset '{source}' unavailable, starting with no word pairs: {e}");
                Vec::new()
            }
        };
        Self::from_pairs(source, raw, config)
    }

    /// Build an engine directly from raw records.
    pub fn from_pairs(source: &str, raw: Vec<WordPair>, config: EngineConfig) -> Self {
        let raw_len = raw.len();

        // First-occurrence order keeps seeded runs reproducible.
        let mut seen = HashSet::with_capacity(raw_len);
        let word_pairs: Vec<WordPair> = raw
            .into_iter()
            .filter(|pair| seen.insert(pair.clone()))
            .collect();

        let translations: HashMap<String, String> = word_pairs
            .iter()
            .map(|p| (p.english_text.clone(), p.spanish_text.clone()))
            .collect();

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        tracing::debug!(
            "engine '{source}': {} records, {} unique pairs, {} lookup keys",
            raw_len,
            word_pairs.len(),
            translations.len()
        );

        Self {
            source: source.to_string(),
            word_pairs,
            translations,
            config,
            rng,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The deduplicated pool.
    pub fn word_pairs(&self) -> &[WordPair] {
        &self.word_pairs
    }

    pub fn len(&self) -> usize {
        self.word_pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_pairs.is_empty()
    }

    /// A uniformly random pair from the pool.
    pub fn generate_random_correct_word_pair(&mut self) -> Option<WordPair> {
        self.word_pairs.choose(&mut self.rng).cloned()
    }

    /// A pair that is very likely mismatched.
    ///
    /// Under [`IncorrectPairStrategy::Independent`] a correct pair can come
    /// out by chance, and on a single-pair pool it always does.
    pub fn generate_random_incorrect_word_pair(&mut self) -> Option<WordPair> {
        let english = self.word_pairs.choose(&mut self.rng)?.english_text.clone();

        let spanish = match self.config.incorrect_strategy {
            IncorrectPairStrategy::Independent => {
                self.word_pairs.choose(&mut self.rng)?.spanish_text.clone()
            }
            IncorrectPairStrategy::Exclusive => {
                let truth = self.translations.get(&english).map(String::as_str);
                let candidates: Vec<&str> = self
                    .word_pairs
                    .iter()
                    .map(|p| p.spanish_text.as_str())
                    .filter(|s| Some(*s) != truth)
                    .collect();
                match candidates.choose(&mut self.rng) {
                    Some(s) => s.to_string(),
                    None => truth.unwrap_or_default().to_string(),
                }
            }
        };

        Some(WordPair::new(english, spanish))
    }

    /// The next prompt: a correct pair one time in `correct_prompt_odds`,
    /// otherwise a mismatched one.
    pub fn fetch_next_word_pair(&mut self) -> Option<WordPair> {
        let odds = self.config.correct_prompt_odds.max(1);
        let pair = if self.rng.gen_ratio(1, odds) {
            self.generate_random_correct_word_pair()
        } else {
            self.generate_random_incorrect_word_pair()
        };
        if let Some(p) = &pair {
            tracing::debug!("next prompt: {p}");
        }
        pair
    }

    /// Whether `pair` is the translation recorded in the lookup.
    pub fn is_correct(&self, pair: &WordPair) -> bool {
        self.translations
            .get(&pair.english_text)
            .is_some_and(|spanish| *spanish == pair.spanish_text)
    }

    /// Whether the player's judgment matches the truth.
    pub fn evaluate(&self, pair: &WordPair, user_selection: bool) -> bool {
        self.is_correct(pair) == user_selection
    }

    /// Percentage score, truncated. See [`final_score`].
    pub fn calc_final_score(&self, correct_attempts: u32, max_attempts: u32) -> u32 {
        final_score(correct_attempts, max_attempts)
    }
}

/// `floor(100 * correct / max)`, or `0` when `max` is zero.
///
/// Saturates at `u32::MAX` when `correct` far exceeds `max`.
pub fn final_score(correct_attempts: u32, max_attempts: u32) -> u32 {
    if max_attempts == 0 {
        return 0;
    }
    let score = u64::from(correct_attempts) * 100 / u64::from(max_attempts);
    u32::try_from(score).unwrap_or(u32::MAX)
}
