//! Noun records - the per-noun salience state.

use serde::{Deserialize, Serialize};

/// What the engine remembers about one noun.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NounRecord {
    /// Salience score. Unbounded above, may go negative.
    pub priority: f64,

    /// Whether the noun has already been looked at or examined.
    pub looked_at: bool,
}

impl NounRecord {
    /// Priority a noun starts with when first extracted.
    pub const INITIAL_PRIORITY: f64 = 1.0;

    /// Create a fresh record.
    pub fn new() -> Self {
        Self {
            priority: Self::INITIAL_PRIORITY,
            looked_at: false,
        }
    }

    /// Create a record with a given priority (useful for seeding memory).
    pub fn with_priority(priority: f64) -> Self {
        Self {
            priority,
            ..Self::new()
        }
    }

    /// Builder method to set the looked-at flag.
    pub fn with_looked_at(mut self, looked_at: bool) -> Self {
        self.looked_at = looked_at;
        self
    }

    /// A mention rekindles the noun: a negative priority restarts at 1, and
    /// every mention then adds 1.
    pub fn boost(&mut self) {
        if self.priority < 0.0 {
            self.priority = Self::INITIAL_PRIORITY;
        }
        self.priority += 1.0;
    }

    /// Lower the priority by `amount`.
    pub fn decay(&mut self, amount: f64) {
        self.priority -= amount;
    }

    /// Eligible to be the object of a guessed action.
    pub fn is_salient(&self) -> bool {
        self.priority > 0.0
    }

    /// Eligible for eviction.
    pub fn is_fading(&self) -> bool {
        self.priority < 0.0
    }
}

impl Default for NounRecord {
    fn default() -> Self {
        Self::new()
    }
}
