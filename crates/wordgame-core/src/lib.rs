//! wordgame-core: word-pair quiz engine, round state, and scoring.
//!
//! This crate defines the word-pair data model, the dataset stores, the
//! engine that builds and judges prompts, and the round state container
//! that front-ends drive.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod round;
pub mod store;

pub use config::{load_config, load_config_from, GameConfig};
pub use engine::{final_score, EngineConfig, GameEngine, IncorrectPairStrategy};
pub use error::LoadError;
pub use model::WordPair;
pub use round::{Attempt, EndReason, Round, RoundConfig, RoundEvent, RoundSummary};
pub use store::{EmbeddedStore, JsonFileStore, MemoryStore, StoreChain, WordPairStore};
