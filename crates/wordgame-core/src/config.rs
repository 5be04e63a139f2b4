//! Game configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::engine::EngineConfig;
use crate::round::RoundConfig;
use crate::store::BUILTIN_DATASET;

/// Top-level wordgame configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Directory holding `<dataset>.json` files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Dataset to play.
    #[serde(default = "default_dataset")]
    pub dataset: String,
    /// Round limits.
    #[serde(default)]
    pub round: RoundConfig,
    /// Prompt generation.
    #[serde(default)]
    pub engine: EngineConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("datasets")
}

fn default_dataset() -> String {
    BUILTIN_DATASET.to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            dataset: default_dataset(),
            round: RoundConfig::default(),
            engine: EngineConfig::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Parse a TOML configuration string.
pub fn parse_config_str(content: &str) -> Result<GameConfig> {
    let mut config: GameConfig = toml::from_str(content).context("failed to parse config")?;
    config.data_dir = PathBuf::from(resolve_env_vars(&config.data_dir.to_string_lossy()));
    Ok(config)
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `wordgame.toml` in the current directory
/// 2. `~/.config/wordgame/config.toml`
///
/// Environment variable overrides: `WORDGAME_DATA_DIR`, `WORDGAME_DATASET`.
pub fn load_config() -> Result<GameConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<GameConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("wordgame.toml");
        if local.exists() {
            Some(local)
        } else {
            config_dir()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("invalid config: {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if let Ok(dir) = std::env::var("WORDGAME_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }
    if let Ok(dataset) = std::env::var("WORDGAME_DATASET") {
        config.dataset = dataset;
    }

    Ok(config)
}

fn config_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("wordgame"))
}
