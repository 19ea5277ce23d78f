//! Input formats and loading of block lists and style rule files.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{ParserError, Result};
use crate::style::{create_default_style_registry, StyleRegistry, StyleRule};
use crate::types::Block;

/// Serialization format of block files and parser output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

impl Format {
    /// Format implied by a file extension.
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use legalact_parser::config::Format;
    ///
    /// assert_eq!(Format::from_path(Path::new("act.yml")).unwrap(), Format::Yaml);
    /// assert!(Format::from_path(Path::new("act.docx")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        extension.parse()
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

impl FromStr for Format {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(ParserError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Parse a block list from a string.
pub fn parse_blocks(content: &str, format: Format) -> Result<Vec<Block>> {
    let blocks: Vec<Block> = match format {
        Format::Yaml => serde_yaml_ng::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };
    Ok(blocks.into_iter().map(Block::sanitized).collect())
}

/// Load a block list, picking the format from the file extension.
pub fn load_blocks(path: &Path) -> Result<Vec<Block>> {
    let format = Format::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let blocks = parse_blocks(&content, format)?;
    tracing::debug!(path = %path.display(), blocks = blocks.len(), "Loaded blocks");
    Ok(blocks)
}

/// Style rule file.
///
/// ```yaml
/// extends_defaults: true
/// rules:
///   - prefix: NOWYART
///     style: ARTICLE
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct StyleRulesFile {
    /// Start from the default drafting-template rules.
    #[serde(default = "default_extends")]
    pub extends_defaults: bool,

    #[serde(default)]
    pub rules: Vec<StyleRule>,
}

fn default_extends() -> bool {
    true
}

impl StyleRulesFile {
    /// Turn the file into a registry.
    ///
    /// Rules on top of the defaults may override a default prefix. Within
    /// the file itself prefixes must be unique.
    pub fn into_registry(self) -> Result<StyleRegistry> {
        let mut own = StyleRegistry::new();
        own.extend(&self.rules)?;

        let mut registry = if self.extends_defaults {
            create_default_style_registry()
        } else {
            StyleRegistry::new()
        };
        for rule in own.rules() {
            registry.register(&rule.prefix, rule.style);
        }
        Ok(registry)
    }
}

/// Load a YAML style rule file into a registry.
pub fn load_style_rules(path: &Path) -> Result<StyleRegistry> {
    let content = fs::read_to_string(path)?;
    let file: StyleRulesFile = serde_yaml_ng::from_str(&content)?;
    let rule_count = file.rules.len();
    let registry = file.into_registry()?;
    tracing::debug!(path = %path.display(), rules = rule_count, "Loaded style rules");
    Ok(registry)
}
