//! Node types of the legal-act tree.
//!
//! Ownership is strictly downward. Each node below an article also carries
//! an [`Ancestry`] of ancestor ids, assigned once when the node is built.

use serde::Serialize;
use uuid::Uuid;

use crate::citation::Publication;
use crate::types::{Block, Diagnostic, Level};

/// Namespace for node ids (the bytes of `legalact-parser!`).
const NODE_NAMESPACE: Uuid = Uuid::from_u128(0x6c65_6761_6c61_6374_2d70_6172_7365_7221);

/// Kind of a node, part of its id derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Division,
    Article,
    Subsection,
    Point,
    Letter,
    Tiret,
    Amendment,
}

impl NodeKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Division => "division",
            Self::Article => "article",
            Self::Subsection => "subsection",
            Self::Point => "point",
            Self::Letter => "letter",
            Self::Tiret => "tiret",
            Self::Amendment => "amendment",
        }
    }
}

/// Deterministic id of the node of `kind` built from `block_id`.
///
/// An article and its leading subsection share a source block, so the kind
/// is part of the name.
#[must_use]
pub fn node_id(kind: NodeKind, block_id: &str) -> Uuid {
    let name = format!("{}:{block_id}", kind.as_str());
    Uuid::new_v5(&NODE_NAMESPACE, name.as_bytes())
}

/// Fields shared by every node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeBase {
    pub id: Uuid,
    pub content: String,
    pub source_block_id: String,
}

impl NodeBase {
    #[must_use]
    pub fn new(kind: NodeKind, block: &Block) -> Self {
        Self {
            id: node_id(kind, &block.id),
            content: block.text.clone(),
            source_block_id: block.id.clone(),
        }
    }
}

/// Non-owning links to the enclosing units of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Ancestry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsection: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter: Option<Uuid>,
}

/// Division kinds above the article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionKind {
    Title,
    Part,
    Chapter,
    Section,
}

impl DivisionKind {
    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Title => Level::Title,
            Self::Part => Level::Part,
            Self::Chapter => Level::Chapter,
            Self::Section => Level::Section,
        }
    }

    /// Division kind of a division level.
    #[must_use]
    pub fn from_level(level: Level) -> Option<Self> {
        match level {
            Level::Title => Some(Self::Title),
            Level::Part => Some(Self::Part),
            Level::Chapter => Some(Self::Chapter),
            Level::Section => Some(Self::Section),
            _ => None,
        }
    }
}

/// Title, part, chapter or section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Division {
    #[serde(flatten)]
    pub base: NodeBase,
    pub kind: DivisionKind,
    pub number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Source block of the subject line.
    #[serde(skip)]
    pub subject_block_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub divisions: Vec<Division>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub articles: Vec<Article>,
}

/// Article (artykuł), the basic unit of an act.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    #[serde(flatten)]
    pub base: NodeBase,
    pub number: String,
    pub is_amending: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication: Option<Publication>,
    /// Never empty: the article's own paragraph is subsection 1.
    pub subsections: Vec<Subsection>,
    /// Composite references of detected amendments, in detection order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amendment_targets: Vec<String>,
}

impl Article {
    #[must_use]
    pub fn publication_year(&self) -> Option<&str> {
        self.publication.as_ref().map(|p| p.year.as_str())
    }

    #[must_use]
    pub fn publication_number(&self) -> Option<&str> {
        self.publication.as_ref().map(|p| p.number.as_str())
    }

    /// All amendments anywhere in this article, in document order.
    #[must_use]
    pub fn amendments(&self) -> Vec<&Amendment> {
        let mut all = Vec::new();
        for subsection in &self.subsections {
            all.extend(subsection.amendments.iter());
            for point in &subsection.points {
                all.extend(point.amendments.iter());
                for letter in &point.letters {
                    all.extend(letter.amendments.iter());
                }
            }
        }
        all
    }
}

/// Subsection (ustęp) of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subsection {
    #[serde(flatten)]
    pub base: NodeBase,
    pub ancestry: Ancestry,
    pub number: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<Point>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amendments: Vec<Amendment>,
}

/// Point (punkt), numbered `1)`, `2)` and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Point {
    #[serde(flatten)]
    pub base: NodeBase,
    pub ancestry: Ancestry,
    pub number: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub letters: Vec<Letter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amendments: Vec<Amendment>,
}

/// Letter (litera) of a point, labelled `a)`, `b)` and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Letter {
    #[serde(flatten)]
    pub base: NodeBase,
    pub ancestry: Ancestry,
    pub ordinal: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tirets: Vec<Tiret>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amendments: Vec<Amendment>,
}

/// Tiret of a letter, numbered by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tiret {
    #[serde(flatten)]
    pub base: NodeBase,
    pub ancestry: Ancestry,
    pub number: usize,
}

/// Kinds of nodes that can own amendments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmendableKind {
    Subsection,
    Point,
    Letter,
}

/// Reference to the node owning an amendment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeRef {
    pub kind: AmendableKind,
    pub id: Uuid,
}

/// A paragraph that amends another act.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Amendment {
    #[serde(flatten)]
    pub base: NodeBase,
    pub ancestry: Ancestry,
    pub parent: NodeRef,
    /// Child units of the owner (points, letters or tirets) that precede
    /// this amendment in the source.
    #[serde(skip)]
    pub preceding_children: usize,
    /// Article, point and letter content joined with `|`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite_reference: Option<String>,
    /// Description of the amending operation, if it could be interpreted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amended_act: Option<String>,
}

/// Capability of owning amendments: subsections, points and letters.
pub trait HasAmendments {
    fn amendments(&self) -> &[Amendment];

    fn node_ref(&self) -> NodeRef;
}

impl HasAmendments for Subsection {
    fn amendments(&self) -> &[Amendment] {
        &self.amendments
    }

    fn node_ref(&self) -> NodeRef {
        NodeRef {
            kind: AmendableKind::Subsection,
            id: self.base.id,
        }
    }
}

impl HasAmendments for Point {
    fn amendments(&self) -> &[Amendment] {
        &self.amendments
    }

    fn node_ref(&self) -> NodeRef {
        NodeRef {
            kind: AmendableKind::Point,
            id: self.base.id,
        }
    }
}

impl HasAmendments for Letter {
    fn amendments(&self) -> &[Amendment] {
        &self.amendments
    }

    fn node_ref(&self) -> NodeRef {
        NodeRef {
            kind: AmendableKind::Letter,
            id: self.base.id,
        }
    }
}

/// Root of a parsed legal act.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LegalAct {
    /// Text before the first division or article (act type, date, title).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub preamble: Vec<String>,
    /// Source blocks of the preamble lines.
    #[serde(skip)]
    pub preamble_block_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub divisions: Vec<Division>,
    /// Articles not enclosed by any division.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub articles: Vec<Article>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl LegalAct {
    /// All articles in document order, including those inside divisions.
    #[must_use]
    pub fn all_articles(&self) -> Vec<&Article> {
        fn collect<'a>(division: &'a Division, out: &mut Vec<&'a Article>) {
            out.extend(division.articles.iter());
            for child in &division.divisions {
                collect(child, out);
            }
        }

        let mut out: Vec<&Article> = self.articles.iter().collect();
        for division in &self.divisions {
            collect(division, &mut out);
        }
        out
    }

    /// All amendments in document order.
    #[must_use]
    pub fn all_amendments(&self) -> Vec<&Amendment> {
        self.all_articles()
            .into_iter()
            .flat_map(|article| article.amendments())
            .collect()
    }

    /// Count nodes by kind.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        fn count_division(division: &Division, stats: &mut TreeStats) {
            stats.divisions += 1;
            for child in &division.divisions {
                count_division(child, stats);
            }
        }

        let mut stats = TreeStats::default();
        for division in &self.divisions {
            count_division(division, &mut stats);
        }
        for article in self.all_articles() {
            stats.articles += 1;
            if article.is_amending {
                stats.amending_articles += 1;
            }
            for subsection in &article.subsections {
                stats.subsections += 1;
                stats.amendments += subsection.amendments.len();
                for point in &subsection.points {
                    stats.points += 1;
                    stats.amendments += point.amendments.len();
                    for letter in &point.letters {
                        stats.letters += 1;
                        stats.tirets += letter.tirets.len();
                        stats.amendments += letter.amendments.len();
                    }
                }
            }
        }
        stats.diagnostics = self.diagnostics.len();
        stats
    }
}

/// Node counts of a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub divisions: usize,
    pub articles: usize,
    pub amending_articles: usize,
    pub subsections: usize,
    pub points: usize,
    pub letters: usize,
    pub tirets: usize,
    pub amendments: usize,
    pub diagnostics: usize,
}
