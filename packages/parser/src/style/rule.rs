//! Style rule types.

use serde::{Deserialize, Serialize};

use crate::types::SemanticStyle;

/// What a matched style prefix classifies a block as.
///
/// Heading styles in the drafting template are shared between two levels
/// (`TYT(DZ)_OZN` for titles and parts, `ROZDZ(ODDZ)_OZN` for chapters and
/// sections); those resolve by the heading text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleTarget {
    Title,
    Part,
    Chapter,
    Section,
    DivisionSubject,
    Article,
    Subsection,
    Point,
    Letter,
    Tiret,
    AmendmentMarker,
    Plain,
    /// `DZIAŁ …` headings are parts, anything else a title.
    TitleOrPart,
    /// `Oddział …` headings are sections, anything else a chapter.
    ChapterOrSection,
}

impl RuleTarget {
    /// Resolve to a semantic style, consulting the text for shared headings.
    #[must_use]
    pub fn resolve(self, text: &str) -> SemanticStyle {
        match self {
            Self::Title => SemanticStyle::Title,
            Self::Part => SemanticStyle::Part,
            Self::Chapter => SemanticStyle::Chapter,
            Self::Section => SemanticStyle::Section,
            Self::DivisionSubject => SemanticStyle::DivisionSubject,
            Self::Article => SemanticStyle::Article,
            Self::Subsection => SemanticStyle::Subsection,
            Self::Point => SemanticStyle::Point,
            Self::Letter => SemanticStyle::Letter,
            Self::Tiret => SemanticStyle::Tiret,
            Self::AmendmentMarker => SemanticStyle::AmendmentMarker,
            Self::Plain => SemanticStyle::Plain,
            Self::TitleOrPart => {
                if starts_with_word(text, "dział") {
                    SemanticStyle::Part
                } else {
                    SemanticStyle::Title
                }
            }
            Self::ChapterOrSection => {
                if starts_with_word(text, "oddział") {
                    SemanticStyle::Section
                } else {
                    SemanticStyle::Chapter
                }
            }
        }
    }
}

fn starts_with_word(text: &str, word: &str) -> bool {
    text.trim_start().to_lowercase().starts_with(word)
}

/// A single prefix rule, as written in a style rules file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRule {
    /// Style identifier prefix; normalized before matching.
    pub prefix: String,

    /// Classification for matching blocks.
    pub style: RuleTarget,
}

impl StyleRule {
    #[must_use]
    pub fn new(prefix: impl Into<String>, style: RuleTarget) -> Self {
        Self {
            prefix: prefix.into(),
            style,
        }
    }
}
