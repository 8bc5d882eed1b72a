//! Verb vocabulary - the weighted pool the responder draws actions from.

use serde::{Deserialize, Serialize};

use crate::randomness::Randomness;

/// A verb the engine can play.
///
/// The six core verbs have dedicated handling; anything else is applied to the
/// most salient noun as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verb {
    Look,
    Examine,
    Use,
    Wait,
    Inventory,
    Go,
    Other(String),
}

impl Verb {
    /// The built-in verbs, in vocabulary order.
    pub const CORE: [Verb; 6] = [
        Verb::Look,
        Verb::Examine,
        Verb::Use,
        Verb::Wait,
        Verb::Inventory,
        Verb::Go,
    ];

    /// Interpret a word from a vocabulary list.
    ///
    /// Core verbs are recognised regardless of case; other words are kept
    /// trimmed but otherwise as written.
    pub fn parse(word: &str) -> Verb {
        let word = word.trim();
        match word.to_lowercase().as_str() {
            "look" => Verb::Look,
            "examine" => Verb::Examine,
            "use" => Verb::Use,
            "wait" => Verb::Wait,
            "inventory" => Verb::Inventory,
            "go" => Verb::Go,
            _ => Verb::Other(word.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Verb::Look => "look",
            Verb::Examine => "examine",
            Verb::Use => "use",
            Verb::Wait => "wait",
            Verb::Inventory => "inventory",
            Verb::Go => "go",
            Verb::Other(word) => word,
        }
    }

    pub fn is_core(&self) -> bool {
        !matches!(self, Verb::Other(_))
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weighted verb pool. Weighting is by repetition: a verb listed twice is
/// drawn twice as often.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbVocabulary {
    verbs: Vec<Verb>,
}

impl VerbVocabulary {
    /// Core verbs repeated `core_weight` times, then each external verb once.
    ///
    /// Blank entries in `external` are skipped.
    pub fn new<I, S>(core_weight: usize, external: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut verbs = Vec::new();
        for _ in 0..core_weight {
            verbs.extend(Verb::CORE.iter().cloned());
        }
        verbs.extend(
            external
                .into_iter()
                .filter(|word| !word.as_ref().trim().is_empty())
                .map(|word| Verb::parse(word.as_ref())),
        );
        Self { verbs }
    }

    /// Only the core verbs.
    pub fn core_only(core_weight: usize) -> Self {
        Self::new(core_weight, std::iter::empty::<&str>())
    }

    /// Parse a one-verb-per-line list.
    pub fn from_list(text: &str, core_weight: usize) -> Self {
        Self::new(core_weight, text.lines())
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// How many entries of the pool are `verb`.
    pub fn weight_of(&self, verb: &Verb) -> usize {
        self.verbs.iter().filter(|v| *v == verb).count()
    }

    /// Draw one verb uniformly from the pool.
    pub fn draw<R: Randomness>(&self, rng: &mut R) -> Option<&Verb> {
        rng.choose(&self.verbs)
    }
}
