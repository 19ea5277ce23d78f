//! Style registry mapping style identifier prefixes to semantic styles.

use std::collections::HashMap;

use super::rule::{RuleTarget, StyleRule};
use crate::error::{ParserError, Result};
use crate::text::normalize_style_id;
use crate::types::{Block, SemanticStyle};

/// Registry of style prefix rules.
///
/// Lookup is by longest matching prefix of the normalized style identifier,
/// so `ZART…` can be given its own rule next to the catch-all `Z` without
/// depending on registration order.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    rules: HashMap<String, RuleTarget>,
}

impl StyleRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule for a style prefix, replacing any previous rule.
    pub fn register(&mut self, prefix: &str, target: RuleTarget) {
        self.rules.insert(normalize_style_id(prefix), target);
    }

    /// Register rules read from a configuration file.
    ///
    /// # Errors
    /// Returns `InvalidStyleRule` if a prefix is empty after normalization
    /// or appears twice in `rules`.
    pub fn extend(&mut self, rules: &[StyleRule]) -> Result<()> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for rule in rules {
            let normalized = normalize_style_id(&rule.prefix);
            if normalized.is_empty() {
                return Err(ParserError::InvalidStyleRule {
                    prefix: rule.prefix.clone(),
                    reason: "prefix has no ASCII letters or digits".to_string(),
                });
            }
            if let Some(previous) = seen.insert(normalized.clone(), &rule.prefix) {
                return Err(ParserError::InvalidStyleRule {
                    prefix: rule.prefix.clone(),
                    reason: format!("duplicates prefix '{previous}'"),
                });
            }
            self.rules.insert(normalized, rule.style);
        }
        Ok(())
    }

    /// Find the rule for a raw style identifier.
    #[must_use]
    pub fn lookup(&self, style: &str) -> Option<RuleTarget> {
        let normalized = normalize_style_id(style);
        // Normalized ids are ASCII, so every index is a char boundary.
        (1..=normalized.len())
            .rev()
            .find_map(|len| self.rules.get(&normalized[..len]).copied())
    }

    /// Classify a block. Unstyled and unknown blocks are `Plain`.
    #[must_use]
    pub fn classify(&self, block: &Block) -> SemanticStyle {
        block
            .style
            .as_deref()
            .and_then(|style| self.lookup(style))
            .map_or(SemanticStyle::Plain, |target| target.resolve(&block.text))
    }

    /// Registered rules sorted by prefix.
    #[must_use]
    pub fn rules(&self) -> Vec<StyleRule> {
        let mut rules: Vec<StyleRule> = self
            .rules
            .iter()
            .map(|(prefix, target)| StyleRule::new(prefix.clone(), *target))
            .collect();
        rules.sort_by(|a, b| a.prefix.cmp(&b.prefix));
        rules
    }
}
