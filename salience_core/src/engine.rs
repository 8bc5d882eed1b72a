//! The engine - one narrative turn in, one guessed command out.

use std::path::Path;
use tracing::{debug, info_span};
use world_map::WorldState;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::noun_memory::NounMemory;
use crate::pattern::NounPattern;
use crate::randomness::{Randomness, SeededRandomness};
use crate::resources::{load_pattern, load_verbs};
use crate::responder::{Command, ResponseSelector, VerbVocabulary};

/// Session state: noun memory, the compass map, and the decision policy.
///
/// Memory is global to the session; it does not change when the player moves.
pub struct Engine<R: Randomness = SeededRandomness> {
    memory: NounMemory,
    world: WorldState,
    pattern: NounPattern,
    selector: ResponseSelector,
    rng: R,
    debug_memory: bool,
    turns: u64,
}

impl Engine<SeededRandomness> {
    /// Create an engine whose randomness follows `config.seed`.
    pub fn new(config: &EngineConfig, pattern: NounPattern, vocabulary: VerbVocabulary) -> Self {
        let rng = SeededRandomness::from_seed_option(config.seed);
        Self::with_randomness(config, pattern, vocabulary, rng)
    }

    /// Load the verb list and noun pattern from disk and build an engine.
    pub fn load(
        config: &EngineConfig,
        verbs_path: impl AsRef<Path>,
        pattern_path: impl AsRef<Path>,
    ) -> Result<Self, EngineError> {
        let verbs = load_verbs(verbs_path)?;
        let pattern = load_pattern(pattern_path)?;
        let vocabulary = VerbVocabulary::new(config.core_verb_weight, verbs);
        Ok(Self::new(config, pattern, vocabulary))
    }
}

impl<R: Randomness> Engine<R> {
    /// Create an engine with an explicit random source.
    pub fn with_randomness(
        config: &EngineConfig,
        pattern: NounPattern,
        vocabulary: VerbVocabulary,
        rng: R,
    ) -> Self {
        Self {
            memory: NounMemory::new(config.memory_capacity),
            world: WorldState::new(),
            pattern,
            selector: ResponseSelector::new(vocabulary),
            rng,
            debug_memory: config.debug_memory,
            turns: 0,
        }
    }

    /// Play one turn on the narrative accumulated since the last one.
    pub fn respond(&mut self, narrative: &str) -> Result<Command, EngineError> {
        self.turns += 1;
        let span = info_span!("turn", number = self.turns);
        let _enter = span.enter();

        let text = narrative.to_lowercase();

        let update = self.memory.observe(&text, &self.pattern, &mut self.rng);
        debug!(
            boosted = ?update.boosted,
            added = ?update.added,
            evicted = ?update.evicted,
            known = self.memory.len(),
            "memory updated"
        );

        self.world.note_directions(&text)?;

        if self.debug_memory {
            debug!(memory = %self.memory.snapshot(), "known nouns");
        }

        let command = self
            .selector
            .respond(&mut self.memory, &mut self.world, &mut self.rng)?;
        debug!(response = %command, location = %self.world.current(), "responded");

        Ok(command)
    }

    pub fn memory(&self) -> &NounMemory {
        &self.memory
    }

    /// Direct access to memory, for seeding a session.
    pub fn memory_mut(&mut self) -> &mut NounMemory {
        &mut self.memory
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn vocabulary(&self) -> &VerbVocabulary {
        self.selector.vocabulary()
    }

    /// Turns played so far.
    pub fn turns(&self) -> u64 {
        self.turns
    }
}
