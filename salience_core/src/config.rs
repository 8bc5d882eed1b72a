//! Engine configuration.
//!
//! Tuning lives in an optional TOML file; any field left out takes its default.
//!
//! ```toml
//! memory_capacity = 7
//! core_verb_weight = 2
//! seed = 42
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default number of nouns the engine tries to keep in mind.
pub const DEFAULT_MEMORY_CAPACITY: usize = 7;

/// Default number of copies of each core verb in the vocabulary.
pub const DEFAULT_CORE_VERB_WEIGHT: usize = 2;

/// Tuning parameters for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Store size above which one negative-priority noun is evicted per turn.
    pub memory_capacity: usize,

    /// How many times each core verb appears in the vocabulary draw.
    pub core_verb_weight: usize,

    /// Seed for the random source. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Log a snapshot of noun memory after every turn.
    pub debug_memory: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            memory_capacity: DEFAULT_MEMORY_CAPACITY,
            core_verb_weight: DEFAULT_CORE_VERB_WEIGHT,
            seed: None,
            debug_memory: false,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_memory_capacity(mut self, capacity: usize) -> Self {
        self.memory_capacity = capacity;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_debug_memory(mut self, enabled: bool) -> Self {
        self.debug_memory = enabled;
        self
    }
}

/// Configuration error type.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
