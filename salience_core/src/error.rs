//! Error types for engine start-up.
//!
//! Everything here is fatal: a session never begins with a missing resource or
//! a pattern that does not compile.

use std::path::PathBuf;

/// Errors raised while assembling an [`Engine`](crate::Engine).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("could not read {path}: {source}")]
    ResourceIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("noun pattern specification has no expression line")]
    EmptyPattern,

    #[error("noun pattern does not compile: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error(transparent)]
    World(#[from] world_map::WorldError),
}
