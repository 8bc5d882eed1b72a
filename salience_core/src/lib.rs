//! # Salience Core
//!
//! The engine behind Txet, a reverse text adventure: a person narrates, and
//! the engine answers with the command a player might type. It does so by
//! tracking which nouns the story keeps bringing up and which compass
//! directions it has opened.
//!
//! ## Core Components
//!
//! - **pattern**: compiles the noun-matching expression from a specification file
//! - **noun_memory**: bounded, decaying salience per noun
//! - **responder**: the verb vocabulary and the per-verb decision procedure
//! - **engine**: runs one turn from narrative text to a [`Command`]
//!
//! ## Turn Order
//!
//! 1. lower-case the narrative
//! 2. boost mentioned nouns, extract and canonicalize new ones, decay, evict
//! 3. grow the compass map from mentioned directions
//! 4. pick a verb and noun, possibly moving the player

pub mod config;
pub mod engine;
pub mod error;
pub mod noun_memory;
pub mod pattern;
pub mod randomness;
pub mod resources;
pub mod responder;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use noun_memory::*;
pub use pattern::*;
pub use randomness::*;
pub use resources::*;
pub use responder::*;
