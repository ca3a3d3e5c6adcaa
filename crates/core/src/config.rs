use crate::constants;
use crate::Error;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for cluemine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CluemineConfig {
    /// Answer search window tuning.
    pub search: SearchConfig,

    /// Classifier token overrides.
    pub tokens: TokenConfig,
}

/// Window sizing for the two answer-search passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Initial forward window of the context pass.
    pub context_initial_depth: usize,

    /// Window growth per rescan.
    pub depth_step: usize,

    /// Depth ceiling of the context pass.
    pub context_max_depth: usize,

    /// Initial forward window of the brute-force fallback pass.
    pub fallback_initial_depth: usize,

    /// Depth ceiling of the fallback pass.
    pub fallback_max_depth: usize,
}

/// Classifier token overrides.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TokenConfig {
    /// Extra tokens treated as affirmations on top of the built-in set.
    pub extra_affirmations: Vec<String>,
}

impl CluemineConfig {
    /// Default configuration file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cluemine").join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::FileSystem(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content).map_err(|e| Error::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Parse(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| Error::FileSystem(format!("Failed to write config file: {}", e)))
    }

    /// Combined affirmation token set: built-ins plus configured extras.
    pub fn affirmation_tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = constants::AFFIRMATION_TOKENS
            .iter()
            .map(|token| token.to_string())
            .collect();
        tokens.extend(self.tokens.extra_affirmations.iter().cloned());
        tokens
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            context_initial_depth: constants::CONTEXT_INITIAL_DEPTH,
            depth_step: constants::DEPTH_STEP,
            context_max_depth: constants::CONTEXT_MAX_DEPTH,
            fallback_initial_depth: constants::FALLBACK_INITIAL_DEPTH,
            fallback_max_depth: constants::FALLBACK_MAX_DEPTH,
        }
    }
}
