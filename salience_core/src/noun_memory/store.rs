//! Noun Memory Store - bounded, decaying salience for every noun the story
//! has mentioned.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

use super::NounRecord;
use crate::config::DEFAULT_MEMORY_CAPACITY;
use crate::pattern::NounPattern;
use crate::randomness::Randomness;

/// What one call to [`NounMemory::observe`] changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryUpdate {
    /// Known nouns that were mentioned again.
    pub boosted: Vec<String>,
    /// Nouns seen for the first time.
    pub added: Vec<String>,
    /// The noun dropped to make room, if any.
    pub evicted: Option<String>,
}

/// Session-wide noun memory.
///
/// Keys are canonical, lower-cased noun text. Iteration follows key order so
/// that a seeded session replays identically.
///
/// Capacity is a soft bound: a turn evicts at most one noun, and only one with
/// a negative priority. A store full of positive nouns keeps growing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NounMemory {
    nouns: BTreeMap<String, NounRecord>,
    capacity: usize,
}

impl NounMemory {
    /// Create an empty store with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            nouns: BTreeMap::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.nouns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nouns.is_empty()
    }

    pub fn contains(&self, noun: &str) -> bool {
        self.nouns.contains_key(noun)
    }

    pub fn get(&self, noun: &str) -> Option<&NounRecord> {
        self.nouns.get(noun)
    }

    /// Known nouns in key order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.nouns.keys().map(String::as_str)
    }

    /// Iterate over all records.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NounRecord)> {
        self.nouns.iter().map(|(noun, record)| (noun.as_str(), record))
    }

    /// Insert or overwrite a record directly.
    pub fn insert(&mut self, noun: impl Into<String>, record: NounRecord) {
        self.nouns.insert(noun.into().to_lowercase(), record);
    }

    /// Run one turn of memory upkeep on lower-cased `text`: boost mentioned
    /// nouns, absorb new ones from `pattern`, decay everything, then evict.
    pub fn observe<R: Randomness>(
        &mut self,
        text: &str,
        pattern: &NounPattern,
        rng: &mut R,
    ) -> MemoryUpdate {
        let boosted = self.boost_mentions(text);
        let added = self.absorb(pattern.extract(text));
        self.decay(rng);
        let evicted = self.evict();

        MemoryUpdate {
            boosted,
            added,
            evicted,
        }
    }

    /// Boost every known noun that occurs as a substring of `text`.
    pub fn boost_mentions(&mut self, text: &str) -> Vec<String> {
        let mut boosted = Vec::new();
        for (noun, record) in self.nouns.iter_mut() {
            if text.contains(noun.as_str()) {
                record.boost();
                trace!(noun = %noun, priority = record.priority, "boosted");
                boosted.push(noun.clone());
            }
        }
        boosted
    }

    /// Fold a raw candidate onto its canonical form.
    ///
    /// The candidate is trimmed and lower-cased; if it begins with a known
    /// noun, the longest such noun is returned instead.
    pub fn canonicalize(&self, candidate: &str) -> String {
        let candidate = candidate.trim().to_lowercase();
        self.nouns
            .keys()
            .filter(|known| candidate.starts_with(known.as_str()))
            .max_by_key(|known| known.len())
            .cloned()
            .unwrap_or(candidate)
    }

    /// Canonicalize each candidate and remember the unknown ones.
    ///
    /// Returns the nouns that were new. Blank candidates are ignored.
    pub fn absorb<'a>(&mut self, candidates: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut added = Vec::new();
        for candidate in candidates {
            let noun = self.canonicalize(candidate);
            if noun.is_empty() || self.nouns.contains_key(&noun) {
                continue;
            }
            trace!(noun = %noun, "new noun");
            self.nouns.insert(noun.clone(), NounRecord::new());
            added.push(noun);
        }
        added
    }

    /// Lower every priority by an independent draw from [0, 1).
    pub fn decay<R: Randomness>(&mut self, rng: &mut R) {
        for record in self.nouns.values_mut() {
            record.decay(rng.unit());
        }
    }

    /// Drop the least salient noun if the store is over capacity.
    ///
    /// Only a noun with negative priority can be evicted.
    pub fn evict(&mut self) -> Option<String> {
        if self.nouns.len() <= self.capacity {
            return None;
        }
        let victim = self.least_salient()?.to_string();
        self.nouns.remove(&victim);
        trace!(noun = %victim, size = self.nouns.len(), "evicted");
        Some(victim)
    }

    /// The noun with the strictly highest positive priority.
    ///
    /// Ties go to the first noun in key order.
    pub fn most_salient(&self) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (noun, record) in &self.nouns {
            if record.priority > best.map_or(0.0, |(_, p)| p) {
                best = Some((noun.as_str(), record.priority));
            }
        }
        best.map(|(noun, _)| noun)
    }

    /// The noun with the strictly lowest negative priority.
    ///
    /// Ties go to the first noun in key order.
    pub fn least_salient(&self) -> Option<&str> {
        let mut worst: Option<(&str, f64)> = None;
        for (noun, record) in &self.nouns {
            if record.priority < worst.map_or(0.0, |(_, p)| p) {
                worst = Some((noun.as_str(), record.priority));
            }
        }
        worst.map(|(noun, _)| noun)
    }

    /// True when every known noun has been looked at (vacuously for none).
    pub fn all_looked_at(&self) -> bool {
        self.nouns.values().all(|record| record.looked_at)
    }

    /// Nouns not yet looked at, in key order.
    pub fn unlooked(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, record)| !record.looked_at)
            .map(|(noun, _)| noun)
            .collect()
    }

    /// Flag a noun as looked at. Returns false if it is unknown.
    pub fn mark_looked_at(&mut self, noun: &str) -> bool {
        match self.nouns.get_mut(noun) {
            Some(record) => {
                record.looked_at = true;
                true
            }
            None => false,
        }
    }

    /// JSON view of the store for debug logging.
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::to_value(&self.nouns).unwrap_or_default()
    }
}

impl Default for NounMemory {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_CAPACITY)
    }
}
