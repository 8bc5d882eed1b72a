//! Start-up resources: the verb list and the noun-pattern specification.

use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::EngineError;
use crate::pattern::{NounPattern, PatternSpec};

fn read_resource(path: &Path) -> Result<String, EngineError> {
    fs::read_to_string(path).map_err(|source| EngineError::ResourceIo {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a one-verb-per-line list. Lines are trimmed; blank lines are dropped.
pub fn load_verbs(path: impl AsRef<Path>) -> Result<Vec<String>, EngineError> {
    let path = path.as_ref();
    let verbs: Vec<String> = read_resource(path)?
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    info!(path = %path.display(), count = verbs.len(), "loaded verbs");
    Ok(verbs)
}

/// Read and compile a noun-pattern specification.
pub fn load_pattern(path: impl AsRef<Path>) -> Result<NounPattern, EngineError> {
    let path = path.as_ref();
    let spec = PatternSpec::parse(&read_resource(path)?)?;
    info!(path = %path.display(), rules = spec.rules.len(), "loaded noun pattern");
    spec.compile()
}
