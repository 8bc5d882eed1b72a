//! The guessed player command.

use serde::{Deserialize, Serialize};
use world_map::Direction;

use super::Verb;

/// One response line, typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// A bare `look`.
    Look,
    /// `look <noun>` or `examine <noun>`.
    Inspect { verb: Verb, noun: String },
    /// `use <noun>` or `use <noun> on <target>`.
    Use { noun: String, target: Option<String> },
    Wait,
    Inventory,
    Go(Direction),
    /// Any other verb applied to a noun.
    Act { verb: String, noun: String },
}

impl Command {
    /// The verb this command starts with.
    pub fn verb(&self) -> &str {
        match self {
            Command::Look => "look",
            Command::Inspect { verb, .. } => verb.as_str(),
            Command::Use { .. } => "use",
            Command::Wait => "wait",
            Command::Inventory => "inventory",
            Command::Go(_) => "go",
            Command::Act { verb, .. } => verb,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Look => write!(f, "look"),
            Command::Inspect { verb, noun } => write!(f, "{} {}", verb, noun),
            Command::Use { noun, target: Some(target) } => write!(f, "use {} on {}", noun, target),
            Command::Use { noun, target: None } => write!(f, "use {}", noun),
            Command::Wait => write!(f, "wait"),
            Command::Inventory => write!(f, "inventory"),
            Command::Go(direction) => write!(f, "go {}", direction),
            Command::Act { verb, noun } => write!(f, "{} {}", verb, noun),
        }
    }
}
