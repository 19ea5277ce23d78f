//! Style classification.
//!
//! Legislative documents carry their structure only in paragraph styles.
//! This module maps raw style identifiers to [`SemanticStyle`] tags through
//! a prefix registry that can be extended from a rules file.
//!
//! [`SemanticStyle`]: crate::types::SemanticStyle

mod config;
mod registry;
mod rule;

pub use config::create_default_style_registry;
pub use registry::StyleRegistry;
pub use rule::{RuleTarget, StyleRule};
