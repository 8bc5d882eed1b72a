//! Response Selector - turns the current memory and map into one guessed
//! command.
//!
//! The decision runs once per turn, after memory and map are updated:
//! 1. **Focus**: take the most salient noun, if any noun is positive
//! 2. **Draw**: pick a verb from the weighted vocabulary
//! 3. **Restrict**: with nothing in focus, only look, wait, inventory and (if
//!    there is an exit) go are possible
//! 4. **Dispatch**: build the command for the verb, possibly marking a noun as
//!    looked at or moving the player

mod command;
mod vocabulary;

pub use command::*;
pub use vocabulary::*;

use tracing::trace;
use world_map::{WorldError, WorldState};

use crate::noun_memory::NounMemory;
use crate::randomness::Randomness;

/// Chooses the engine's command each turn.
#[derive(Debug, Clone)]
pub struct ResponseSelector {
    vocabulary: VerbVocabulary,
}

impl ResponseSelector {
    /// Create a selector drawing from `vocabulary`.
    pub fn new(vocabulary: VerbVocabulary) -> Self {
        Self { vocabulary }
    }

    /// A selector over the core verbs at their usual double weight.
    pub fn with_defaults() -> Self {
        Self::new(VerbVocabulary::core_only(crate::config::DEFAULT_CORE_VERB_WEIGHT))
    }

    pub fn vocabulary(&self) -> &VerbVocabulary {
        &self.vocabulary
    }

    /// Decide this turn's command.
    ///
    /// May mark a noun as looked at, and `go` moves the player.
    pub fn respond<R: Randomness>(
        &self,
        memory: &mut NounMemory,
        world: &mut WorldState,
        rng: &mut R,
    ) -> Result<Command, WorldError> {
        let best = memory.most_salient().map(str::to_string);

        // The vocabulary draw happens every turn, even when it is overridden
        let drawn = self.vocabulary.draw(rng).cloned().unwrap_or(Verb::Look);
        let verb = match best {
            Some(_) => drawn,
            None => Self::restricted_verb(!world.exits().is_empty(), rng),
        };
        trace!(verb = %verb, best = ?best, "verb chosen");

        let command = match (verb, best) {
            (Verb::Use, Some(best)) => Self::use_noun(best, memory, rng),
            (verb @ (Verb::Look | Verb::Examine), best) => Self::inspect(verb, best, memory, rng),
            (Verb::Wait, _) => Command::Wait,
            (Verb::Inventory, _) => Command::Inventory,
            (Verb::Go, _) => Self::go(world, rng)?,
            (Verb::Other(verb), Some(noun)) => Command::Act { verb, noun },
            // Nothing to act on; unreachable after the restriction above
            (Verb::Use | Verb::Other(_), None) => Command::Look,
        };

        Ok(command)
    }

    /// Uniform draw from the verbs that need no noun.
    fn restricted_verb<R: Randomness>(has_exits: bool, rng: &mut R) -> Verb {
        let mut options = vec![Verb::Look, Verb::Wait, Verb::Inventory];
        if has_exits {
            options.push(Verb::Go);
        }
        rng.choose(&options).cloned().unwrap_or(Verb::Look)
    }

    /// `use best`, or on a coin flip with company around, `use best on other`.
    fn use_noun<R: Randomness>(best: String, memory: &NounMemory, rng: &mut R) -> Command {
        if memory.len() >= 2 && rng.coin() {
            let others: Vec<&str> = memory.keys().filter(|noun| *noun != best).collect();
            if let Some(other) = rng.choose(&others) {
                return Command::Use {
                    noun: best,
                    target: Some(other.to_string()),
                };
            }
        }
        Command::Use {
            noun: best,
            target: None,
        }
    }

    /// Look at something not looked at before.
    ///
    /// The focus noun is preferred; if it has been seen, the target is drawn
    /// uniformly from the unseen ones. With nothing left unseen, or nothing in
    /// focus, this is a bare `look` and memory is untouched.
    fn inspect<R: Randomness>(
        verb: Verb,
        best: Option<String>,
        memory: &mut NounMemory,
        rng: &mut R,
    ) -> Command {
        let Some(best) = best else {
            return Command::Look;
        };
        if memory.all_looked_at() {
            return Command::Look;
        }

        let fresh = memory.get(&best).is_some_and(|record| !record.looked_at);
        let target = if fresh {
            best
        } else {
            match rng.choose(&memory.unlooked()) {
                Some(noun) => noun.to_string(),
                None => return Command::Look,
            }
        };

        memory.mark_looked_at(&target);
        Command::Inspect { verb, noun: target }
    }

    /// Walk through a random exit, or look around if there is none.
    fn go<R: Randomness>(world: &mut WorldState, rng: &mut R) -> Result<Command, WorldError> {
        let exits = world.exits();
        let Some(direction) = rng.choose(&exits).copied() else {
            return Ok(Command::Look);
        };
        world.travel(direction)?;
        Ok(Command::Go(direction))
    }
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::with_defaults()
    }
}
