//! Core input types: blocks, semantic styles and diagnostics.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::text::sanitize;

/// One style-tagged paragraph of a legal act, the atomic input unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Stable identifier of the paragraph in the source document.
    pub id: String,

    /// Raw paragraph style identifier or style name (`None` if unstyled).
    #[serde(default, alias = "style_id", skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Paragraph text with whitespace collapsed.
    #[serde(default)]
    pub text: String,
}

impl Block {
    /// Create an unstyled block. The text is sanitized.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl AsRef<str>) -> Self {
        Self {
            id: id.into(),
            style: None,
            text: sanitize(text.as_ref()),
        }
    }

    /// Create a block with a style identifier.
    #[must_use]
    pub fn styled(id: impl Into<String>, style: impl Into<String>, text: impl AsRef<str>) -> Self {
        Self::new(id, text).with_style(style)
    }

    /// Set the style identifier.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Re-sanitize the text, e.g. after deserializing from a block file.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.text = sanitize(&self.text);
        self.style = self
            .style
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }
}

/// Structural level of a node, ordered from coarse to fine.
///
/// `Title < Part < ... < Tiret`, so a window at level `L` closes on any
/// block whose level is `<= L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Title,
    Part,
    Chapter,
    Section,
    Article,
    Subsection,
    Point,
    Letter,
    Tiret,
}

impl Level {
    /// The immediately finer level inside an article.
    ///
    /// Divisions return `None`: they accept any finer division and articles.
    #[must_use]
    pub fn finer(self) -> Option<Self> {
        match self {
            Self::Article => Some(Self::Subsection),
            Self::Subsection => Some(Self::Point),
            Self::Point => Some(Self::Letter),
            Self::Letter => Some(Self::Tiret),
            _ => None,
        }
    }

    /// The unit a node of this level must sit in, if it is inside an article.
    #[must_use]
    pub fn parent_unit(self) -> Option<Self> {
        match self {
            Self::Subsection => Some(Self::Article),
            Self::Point => Some(Self::Subsection),
            Self::Letter => Some(Self::Point),
            Self::Tiret => Some(Self::Letter),
            _ => None,
        }
    }

    /// Polish name of the unit, used in diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "tytuł",
            Self::Part => "dział",
            Self::Chapter => "rozdział",
            Self::Section => "oddział",
            Self::Article => "artykuł",
            Self::Subsection => "ustęp",
            Self::Point => "punkt",
            Self::Letter => "litera",
            Self::Tiret => "tiret",
        }
    }
}

/// Semantic tag assigned to a block by the style classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SemanticStyle {
    Title,
    Part,
    Chapter,
    Section,
    /// Subject line printed under a division heading.
    DivisionSubject,
    Article,
    Subsection,
    Point,
    Letter,
    Tiret,
    /// Amending text (styles `Z…`), quoting the new wording of another act.
    AmendmentMarker,
    Plain,
}

impl SemanticStyle {
    /// Structural level of this style, if it opens a node.
    #[must_use]
    pub fn level(self) -> Option<Level> {
        match self {
            Self::Title => Some(Level::Title),
            Self::Part => Some(Level::Part),
            Self::Chapter => Some(Level::Chapter),
            Self::Section => Some(Level::Section),
            Self::Article => Some(Level::Article),
            Self::Subsection => Some(Level::Subsection),
            Self::Point => Some(Level::Point),
            Self::Letter => Some(Level::Letter),
            Self::Tiret => Some(Level::Tiret),
            Self::DivisionSubject | Self::AmendmentMarker | Self::Plain => None,
        }
    }

    /// Style identifier written when a tree is turned back into blocks.
    ///
    /// Every identifier classifies back to the same style under the default
    /// rules (division headings are told apart by their text).
    #[must_use]
    pub fn canonical_style_id(self) -> &'static str {
        match self {
            Self::Title | Self::Part => "TYTDZOZN",
            Self::Chapter | Self::Section => "ROZDZODDZOZN",
            Self::DivisionSubject => "TYTDZPRZEDM",
            Self::Article => "ART",
            Self::Subsection => "UST",
            Self::Point => "PKT",
            Self::Letter => "LIT",
            Self::Tiret => "TIR",
            Self::AmendmentMarker => "ZART",
            Self::Plain => "TEKST",
        }
    }
}

/// Non-fatal message produced while building the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Node whose window consumed the block (`None` at document level).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<Uuid>,

    /// Block the message is about.
    pub block_id: String,

    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn new(node_id: Option<Uuid>, block_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            node_id,
            block_id: block_id.into(),
            message: message.into(),
        }
    }
}
