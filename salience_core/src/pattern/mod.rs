//! Pattern Compiler - builds the noun-matching expression from a small
//! specification file.
//!
//! The file format is line oriented:
//!
//! ```text
//! \b(?:a|an|the)\s+({word})        <- line 1: the base expression
//! any text                         <- lines 2-4: free commentary, ignored
//! any text
//! any text
//! {word} [a-z]+                    <- line 5 onward: substitution rules
//! ```
//!
//! A rule is a `{name}` marker, one separator character, and the fragment that
//! replaces every occurrence of the marker. Rules are applied in file order,
//! so a fragment may itself contain a marker that a later rule expands.
//! Circular rules are not detected.

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::error::EngineError;

/// Line index at which substitution rules begin.
pub const RULES_START_LINE: usize = 4;

/// One `{marker}` -> fragment substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionRule {
    /// The marker including braces, e.g. `{noun}`.
    pub marker: String,
    pub fragment: String,
}

impl SubstitutionRule {
    /// Parse a rule line. Returns `None` if the line has no `{name}` marker.
    pub fn parse(line: &str) -> Option<Self> {
        if !line.starts_with('{') {
            return None;
        }
        let close = line.find('}')?;
        let marker = &line[..=close];
        let rest = &line[close + 1..];
        // Skip exactly one separator character
        let fragment = match rest.chars().next() {
            Some(sep) => &rest[sep.len_utf8()..],
            None => "",
        };

        Some(Self {
            marker: marker.to_string(),
            fragment: fragment.to_string(),
        })
    }
}

/// A parsed noun-pattern specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSpec {
    pub base: String,
    pub rules: Vec<SubstitutionRule>,
}

impl PatternSpec {
    /// Parse the specification text.
    pub fn parse(text: &str) -> Result<Self, EngineError> {
        let lines: Vec<&str> = text.lines().collect();

        let base = match lines.first() {
            Some(line) if !line.trim().is_empty() => line.to_string(),
            _ => return Err(EngineError::EmptyPattern),
        };

        let mut rules = Vec::new();
        for (number, line) in lines.iter().enumerate().skip(RULES_START_LINE) {
            if line.trim().is_empty() {
                continue;
            }
            match SubstitutionRule::parse(line) {
                Some(rule) => rules.push(rule),
                None => warn!(line = number + 1, "skipping pattern rule without a {{name}} marker"),
            }
        }

        Ok(Self { base, rules })
    }

    /// The base expression with every rule applied in order.
    pub fn expand(&self) -> String {
        self.rules.iter().fold(self.base.clone(), |expression, rule| {
            expression.replace(&rule.marker, &rule.fragment)
        })
    }

    /// Expand and compile into a case-insensitive matcher.
    pub fn compile(&self) -> Result<NounPattern, EngineError> {
        let expression = self.expand();
        debug!(rules = self.rules.len(), %expression, "compiled noun pattern");
        NounPattern::new(&expression)
    }
}

/// Compiled, case-insensitive noun matcher.
#[derive(Debug, Clone)]
pub struct NounPattern {
    regex: Regex,
}

impl NounPattern {
    /// Compile a ready-made expression.
    pub fn new(expression: &str) -> Result<Self, EngineError> {
        let regex = RegexBuilder::new(expression)
            .case_insensitive(true)
            .build()?;
        Ok(Self { regex })
    }

    /// The expression this matcher was built from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Raw noun candidates in `text`, in order of appearance.
    ///
    /// With at least one capture group in the expression, each match yields
    /// the text of the first group (matches where it did not take part are
    /// dropped); otherwise the whole match is the candidate.
    pub fn extract<'t>(&self, text: &'t str) -> Vec<&'t str> {
        if self.regex.captures_len() > 1 {
            self.regex
                .captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str())
                .collect()
        } else {
            self.regex.find_iter(text).map(|m| m.as_str()).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: &str = "\
\\b(?:a|an|the)\\s+((?:{adjective}\\s+)?{word})
Nouns follow an article, optionally with one adjective.

Rules:
{adjective} (?:old|rusty|small)
{word} [a-z]+
";

    #[test]
    fn test_parse_rules() {
        let spec = PatternSpec::parse(SPEC).unwrap();

        assert_eq!(spec.rules.len(), 2);
        assert_eq!(spec.rules[0].marker, "{adjective}");
        assert_eq!(spec.rules[0].fragment, "(?:old|rusty|small)");
        assert_eq!(spec.rules[1].marker, "{word}");
        assert_eq!(spec.rules[1].fragment, "[a-z]+");
    }

    #[test]
    fn test_expand_replaces_every_marker() {
        let spec = PatternSpec {
            base: "{w} and {w}".to_string(),
            rules: vec![SubstitutionRule::parse("{w} x+").unwrap()],
        };
        assert_eq!(spec.expand(), "x+ and x+");
    }

    #[test]
    fn test_expand_in_listed_order() {
        // The first fragment introduces a marker the second rule expands
        let spec = PatternSpec {
            base: "{phrase}".to_string(),
            rules: vec![
                SubstitutionRule::parse("{phrase} the {noun}").unwrap(),
                SubstitutionRule::parse("{noun} key").unwrap(),
            ],
        };
        assert_eq!(spec.expand(), "the key");
    }

    #[test]
    fn test_short_spec_has_no_rules() {
        let spec = PatternSpec::parse("[a-z]+\n{ignored} because it is on line two\n").unwrap();
        assert!(spec.rules.is_empty());
        assert_eq!(spec.expand(), "[a-z]+");
    }

    #[test]
    fn test_rule_without_marker_is_skipped() {
        let text = "{x}\n\n\n\nnot a rule\n{x} y\n";
        let spec = PatternSpec::parse(text).unwrap();
        assert_eq!(spec.rules.len(), 1);
        assert_eq!(spec.expand(), "y");
    }

    #[test]
    fn test_empty_spec_is_error() {
        assert!(matches!(PatternSpec::parse(""), Err(EngineError::EmptyPattern)));
        assert!(matches!(PatternSpec::parse("  \nfoo"), Err(EngineError::EmptyPattern)));
    }

    #[test]
    fn test_invalid_expression_is_error() {
        let result = NounPattern::new("(unclosed");
        assert!(matches!(result, Err(EngineError::InvalidPattern(_))));
    }

    #[test]
    fn test_extract_first_group() {
        let pattern = PatternSpec::parse(SPEC).unwrap().compile().unwrap();

        let found = pattern.extract("There is a rusty key on the table, and an apple.");
        assert_eq!(found, vec!["rusty key", "table", "apple"]);
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        let pattern = NounPattern::new(r"\bthe\s+([a-z]+)").unwrap();
        assert_eq!(pattern.extract("THE Lamp flickers"), vec!["Lamp"]);
    }

    #[test]
    fn test_extract_whole_match_without_groups() {
        let pattern = NounPattern::new(r"\b(?:sword|shield)\b").unwrap();
        assert_eq!(pattern.extract("a sword and a shield"), vec!["sword", "shield"]);
    }
}
