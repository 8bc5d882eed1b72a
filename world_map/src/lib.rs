//! # World Map
//!
//! The compass graph Txet builds while it listens to a story. Rooms exist only
//! as far as the narrative has mentioned a way into them: each new compass
//! direction spoken in the current room adds exactly one neighbor, linked back
//! the opposite way.
//!
//! This crate holds map state only; deciding where to go lives in
//! `salience_core`.

pub mod compass;
pub mod world_state;

pub use compass::*;
pub use world_state::*;
