//! Noun Memory - short-term salience for the nouns a story mentions.
//!
//! Each noun carries a priority that rises when the narrative mentions it and
//! sinks a random amount every turn. The store is bounded by a capacity, but
//! only nouns that have sunk below zero are ever forgotten.

mod noun;
mod store;

pub use noun::*;
pub use store::*;
