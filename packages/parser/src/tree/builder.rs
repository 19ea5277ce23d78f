//! Tree builder: a recursive, level-aware windowing scanner.
//!
//! The builder walks the block stream with one forward cursor. Each node
//! opens a scan window at its own block and looks at the next block:
//!
//! 1. a block at the window's level or coarser closes the window;
//! 2. a block at the immediately finer level opens a child window;
//! 3. anything else goes to the window's [`AmendmentClassifier`].
//!
//! ```text
//! Title > Part > Chapter > Section > Article > Subsection > Point > Letter > Tiret
//! ```
//!
//! Division windows (title to section) accept any finer division and
//! articles. Tirets are leaves; amendment blocks after a tiret are judged by
//! the enclosing letter's adjacency run.

use uuid::Uuid;

use super::adjacency::{AmendmentClassifier, Verdict};
use super::nodes::{
    AmendableKind, Amendment, Ancestry, Article, Division, DivisionKind, LegalAct, Letter,
    NodeBase, NodeKind, NodeRef, Point, Subsection, Tiret,
};
use crate::amendment::{
    AmendingProcedure, AmendmentContext, KeywordProcedure, TargetResolver, REPEAL_PHRASE,
};
use crate::citation::{
    extract_article_number, extract_division_number, extract_ordinal_label, extract_publication,
};
use crate::style::{create_default_style_registry, StyleRegistry};
use crate::types::{Block, Diagnostic, Level, SemanticStyle};

/// Diagnostic for a paragraph without a style.
pub const MISSING_STYLE_MESSAGE: &str = "no style defined for this paragraph";

/// Builds a [`LegalAct`] tree from a block list.
#[derive(Debug, Clone)]
pub struct TreeBuilder<P = KeywordProcedure> {
    styles: StyleRegistry,
    resolver: TargetResolver<P>,
}

impl TreeBuilder<KeywordProcedure> {
    /// Builder with the default style rules and [`KeywordProcedure`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            styles: create_default_style_registry(),
            resolver: TargetResolver::new(KeywordProcedure),
        }
    }
}

impl Default for TreeBuilder<KeywordProcedure> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: AmendingProcedure> TreeBuilder<P> {
    /// Replace the style rules.
    #[must_use]
    pub fn with_styles(mut self, styles: StyleRegistry) -> Self {
        self.styles = styles;
        self
    }

    /// Replace the amending-procedure classifier.
    #[must_use]
    pub fn with_procedure<Q: AmendingProcedure>(self, procedure: Q) -> TreeBuilder<Q> {
        TreeBuilder {
            styles: self.styles,
            resolver: TargetResolver::new(procedure),
        }
    }

    /// Build the tree. Never fails; problems end up in `diagnostics`.
    #[must_use]
    pub fn build(&self, blocks: &[Block]) -> LegalAct {
        let blocks: Vec<Block> = blocks.iter().cloned().map(Block::sanitized).collect();
        let styles: Vec<SemanticStyle> = blocks.iter().map(|b| self.styles.classify(b)).collect();

        let mut scan = Scan::new(&blocks, &styles);
        let act = self.build_root(&mut scan);

        tracing::debug!(
            blocks = blocks.len(),
            articles = act.all_articles().len(),
            diagnostics = act.diagnostics.len(),
            "Built legal act tree"
        );
        act
    }

    fn build_root(&self, scan: &mut Scan<'_>) -> LegalAct {
        let mut act = LegalAct::default();
        let mut in_preamble = true;

        while let Some((block, style)) = scan.peek() {
            scan.consume();
            if let Some(kind) = style.level().and_then(DivisionKind::from_level) {
                in_preamble = false;
                act.divisions.push(self.build_division(scan, block, kind));
            } else if style == SemanticStyle::Article {
                in_preamble = false;
                act.articles.push(self.build_article(scan, block));
            } else if in_preamble && style.level().is_none() {
                if block.style.is_none() {
                    scan.diagnose(None, block, MISSING_STYLE_MESSAGE.to_string());
                }
                if !block.text.is_empty() {
                    act.preamble.push(block.text.clone());
                    act.preamble_block_ids.push(block.id.clone());
                }
            } else {
                scan.drop_block(None, block, style);
            }
        }

        act.diagnostics = std::mem::take(&mut scan.diagnostics);
        act
    }

    fn build_division<'b>(
        &self,
        scan: &mut Scan<'b>,
        block: &'b Block,
        kind: DivisionKind,
    ) -> Division {
        let base = NodeBase::new(NodeKind::Division, block);
        let number = extract_division_number(&block.text);
        tracing::debug!(kind = ?kind, number = %number, "Opened division");

        let mut subject = None;
        let mut subject_block_id = None;
        if let Some((next, SemanticStyle::DivisionSubject)) = scan.peek() {
            scan.consume();
            subject = Some(next.text.clone());
            subject_block_id = Some(next.id.clone());
        }

        let mut divisions = Vec::new();
        let mut articles = Vec::new();
        while let Some((next, style)) = scan.peek() {
            if style.level().is_some_and(|level| level <= kind.level()) {
                break;
            }
            scan.consume();
            if let Some(child) = style.level().and_then(DivisionKind::from_level) {
                divisions.push(self.build_division(scan, next, child));
            } else if style == SemanticStyle::Article {
                articles.push(self.build_article(scan, next));
            } else {
                scan.drop_block(Some(base.id), next, style);
            }
        }

        Division {
            base,
            kind,
            number,
            subject,
            subject_block_id,
            divisions,
            articles,
        }
    }

    fn build_article<'b>(&self, scan: &mut Scan<'b>, block: &'b Block) -> Article {
        let base = NodeBase::new(NodeKind::Article, block);
        let number = extract_article_number(&block.text);
        let publication = extract_publication(&block.text);
        let is_amending = publication.is_some();
        tracing::debug!(number = %number, amending = is_amending, "Opened article");

        let lineage = Lineage {
            article: Some((base.id, block.text.as_str())),
            ..Lineage::default()
        };
        let mut frame = ArticleFrame {
            is_amending,
            targets: Vec::new(),
        };

        // The article's own paragraph is subsection 1.
        let mut subsections = vec![self.build_subsection(scan, block, 1, lineage, &mut frame)];
        loop {
            match scan.step(Level::Article) {
                Step::Close => break,
                Step::Child(next) => {
                    let ordinal = subsections.len() + 1;
                    subsections.push(self.build_subsection(scan, next, ordinal, lineage, &mut frame));
                }
                Step::Other(next, style) => scan.drop_block(Some(base.id), next, style),
            }
        }

        Article {
            base,
            number,
            is_amending,
            publication,
            subsections,
            amendment_targets: frame.targets,
        }
    }

    fn build_subsection<'b>(
        &self,
        scan: &mut Scan<'b>,
        block: &'b Block,
        number: usize,
        parent: Lineage<'b>,
        frame: &mut ArticleFrame,
    ) -> Subsection {
        let base = NodeBase::new(NodeKind::Subsection, block);
        let lineage = Lineage {
            subsection: Some((base.id, block.text.as_str())),
            ..parent
        };
        let owner = NodeRef {
            kind: AmendableKind::Subsection,
            id: base.id,
        };

        let mut points = Vec::new();
        let mut amendments = Vec::new();
        let mut classifier = AmendmentClassifier::new();
        loop {
            match scan.step(Level::Subsection) {
                Step::Close => break,
                Step::Child(next) => points.push(self.build_point(scan, next, lineage, frame)),
                Step::Other(next, style) => match classifier.classify(style) {
                    Verdict::Attach => {
                        amendments.push(self.attach(next, owner, points.len(), lineage, frame));
                    }
                    Verdict::Drop => scan.drop_block(Some(base.id), next, style),
                },
            }
        }

        Subsection {
            base,
            ancestry: parent.ancestry(),
            number,
            points,
            amendments,
        }
    }

    fn build_point<'b>(
        &self,
        scan: &mut Scan<'b>,
        block: &'b Block,
        parent: Lineage<'b>,
        frame: &mut ArticleFrame,
    ) -> Point {
        let base = NodeBase::new(NodeKind::Point, block);
        let number = extract_ordinal_label(&block.text);
        let lineage = Lineage {
            point: Some((base.id, block.text.as_str())),
            ..parent
        };
        let owner = NodeRef {
            kind: AmendableKind::Point,
            id: base.id,
        };

        let mut letters = Vec::new();
        let mut amendments = Vec::new();

        // A repealing point of an amending article amends by its own text.
        if frame.is_amending && block.text.contains(REPEAL_PHRASE) {
            amendments.push(self.attach(block, owner, 0, lineage, frame));
        }

        let mut classifier = AmendmentClassifier::new();
        loop {
            match scan.step(Level::Point) {
                Step::Close => break,
                Step::Child(next) => letters.push(self.build_letter(scan, next, lineage, frame)),
                Step::Other(next, style) => match classifier.classify(style) {
                    Verdict::Attach => {
                        amendments.push(self.attach(next, owner, letters.len(), lineage, frame));
                    }
                    Verdict::Drop => scan.drop_block(Some(base.id), next, style),
                },
            }
        }

        Point {
            base,
            ancestry: parent.ancestry(),
            number,
            letters,
            amendments,
        }
    }

    fn build_letter<'b>(
        &self,
        scan: &mut Scan<'b>,
        block: &'b Block,
        parent: Lineage<'b>,
        frame: &mut ArticleFrame,
    ) -> Letter {
        let base = NodeBase::new(NodeKind::Letter, block);
        let ordinal = extract_ordinal_label(&block.text);
        let lineage = Lineage {
            letter: Some((base.id, block.text.as_str())),
            ..parent
        };
        let owner = NodeRef {
            kind: AmendableKind::Letter,
            id: base.id,
        };

        let mut tirets = Vec::new();
        let mut amendments = Vec::new();
        let mut classifier = AmendmentClassifier::new();
        loop {
            match scan.step(Level::Letter) {
                Step::Close => break,
                Step::Child(next) => tirets.push(Tiret {
                    base: NodeBase::new(NodeKind::Tiret, next),
                    ancestry: lineage.ancestry(),
                    number: tirets.len() + 1,
                }),
                Step::Other(next, style) => match classifier.classify(style) {
                    Verdict::Attach => {
                        amendments.push(self.attach(next, owner, tirets.len(), lineage, frame));
                    }
                    Verdict::Drop => scan.drop_block(Some(base.id), next, style),
                },
            }
        }

        Letter {
            base,
            ancestry: parent.ancestry(),
            ordinal,
            tirets,
            amendments,
        }
    }

    /// Create an amendment and record its composite reference on the article.
    ///
    /// `preceding_children` is the number of the owner's child units built
    /// before the amendment block.
    fn attach(
        &self,
        block: &Block,
        parent: NodeRef,
        preceding_children: usize,
        lineage: Lineage<'_>,
        frame: &mut ArticleFrame,
    ) -> Amendment {
        let resolution = self.resolver.resolve(&lineage.context());
        if let Some(composite) = &resolution.composite {
            frame.targets.push(composite.clone());
        }
        tracing::debug!(block = %block.id, parent = ?parent.kind, "Attached amendment");

        Amendment {
            base: NodeBase::new(NodeKind::Amendment, block),
            ancestry: lineage.ancestry(),
            parent,
            preceding_children,
            composite_reference: resolution.composite,
            amended_act: resolution.description,
        }
    }
}

/// Build a tree with the default builder.
///
/// # Examples
/// ```
/// use legalact_parser::{build_tree, Block};
///
/// let act = build_tree(&[
///     Block::styled("p1", "ARTartustawy", "Art. 1. Ustawa określa zasady."),
///     Block::styled("p2", "USTustnpkodeksu", "2. Przepisy stosuje się odpowiednio."),
/// ]);
/// assert_eq!(act.articles[0].number, "1");
/// assert_eq!(act.articles[0].subsections.len(), 2);
/// ```
#[must_use]
pub fn build_tree(blocks: &[Block]) -> LegalAct {
    TreeBuilder::new().build(blocks)
}

/// Per-article state shared by all windows inside the article.
struct ArticleFrame {
    is_amending: bool,
    targets: Vec<String>,
}

/// Ids and content of the units enclosing a window.
#[derive(Debug, Clone, Copy, Default)]
struct Lineage<'b> {
    article: Option<(Uuid, &'b str)>,
    subsection: Option<(Uuid, &'b str)>,
    point: Option<(Uuid, &'b str)>,
    letter: Option<(Uuid, &'b str)>,
}

impl<'b> Lineage<'b> {
    fn ancestry(&self) -> Ancestry {
        Ancestry {
            article: self.article.map(|(id, _)| id),
            subsection: self.subsection.map(|(id, _)| id),
            point: self.point.map(|(id, _)| id),
            letter: self.letter.map(|(id, _)| id),
        }
    }

    fn context(&self) -> AmendmentContext<'b> {
        AmendmentContext {
            article: self.article.map(|(_, content)| content),
            subsection: self.subsection.map(|(_, content)| content),
            point: self.point.map(|(_, content)| content),
            letter: self.letter.map(|(_, content)| content),
        }
    }
}

/// Outcome of looking at the next block from inside a window.
enum Step<'b> {
    Close,
    Child(&'b Block),
    Other(&'b Block, SemanticStyle),
}

/// Forward cursor over the classified blocks.
struct Scan<'b> {
    blocks: &'b [Block],
    styles: &'b [SemanticStyle],
    pos: usize,
    diagnostics: Vec<Diagnostic>,
}

impl<'b> Scan<'b> {
    fn new(blocks: &'b [Block], styles: &'b [SemanticStyle]) -> Self {
        Self {
            blocks,
            styles,
            pos: 0,
            diagnostics: Vec::new(),
        }
    }

    fn peek(&self) -> Option<(&'b Block, SemanticStyle)> {
        let blocks: &'b [Block] = self.blocks;
        let block = blocks.get(self.pos)?;
        let style = *self.styles.get(self.pos)?;
        Some((block, style))
    }

    fn consume(&mut self) {
        self.pos += 1;
    }

    /// Look at the next block from a window at `level`, consuming it unless
    /// it closes the window.
    fn step(&mut self, level: Level) -> Step<'b> {
        let Some((block, style)) = self.peek() else {
            return Step::Close;
        };
        match style.level() {
            Some(next) if next <= level => Step::Close,
            Some(next) if Some(next) == level.finer() => {
                self.consume();
                Step::Child(block)
            }
            _ => {
                self.consume();
                Step::Other(block, style)
            }
        }
    }

    fn diagnose(&mut self, node_id: Option<Uuid>, block: &Block, message: String) {
        tracing::warn!(block = %block.id, "{message}");
        self.diagnostics.push(Diagnostic::new(node_id, &block.id, message));
    }

    /// Account for a block that does not attach anywhere.
    fn drop_block(&mut self, owner: Option<Uuid>, block: &Block, style: SemanticStyle) {
        if block.style.is_none() {
            self.diagnose(owner, block, MISSING_STYLE_MESSAGE.to_string());
        } else if let Some(parent) = style.level().and_then(Level::parent_unit) {
            let level = style.level().map_or("unit", Level::label);
            self.diagnose(
                owner,
                block,
                format!("{level} outside of {}, treated as plain text", parent.label()),
            );
        } else {
            tracing::trace!(block = %block.id, style = ?style, "Dropped paragraph");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::HasAmendments;

    /// Build blocks `p1..pn` from `(style, text)` pairs; an empty style
    /// means an unstyled paragraph.
    fn blocks(items: &[(&str, &str)]) -> Vec<Block> {
        items
            .iter()
            .enumerate()
            .map(|(i, (style, text))| {
                let block = Block::new(format!("p{}", i + 1), text);
                if style.is_empty() {
                    block
                } else {
                    block.with_style(*style)
                }
            })
            .collect()
    }

    fn build(items: &[(&str, &str)]) -> LegalAct {
        TreeBuilder::new().build(&blocks(items))
    }

    #[test]
    fn test_empty_input() {
        let act = build(&[]);
        assert!(act.articles.is_empty());
        assert!(act.divisions.is_empty());
        assert!(act.diagnostics.is_empty());
    }

    #[test]
    fn test_article_without_subsections_has_one() {
        let act = build(&[("ART", "Art. 12. Lorem ipsum.")]);
        let article = &act.articles[0];
        assert_eq!(article.number, "12");
        assert!(!article.is_amending);
        assert_eq!(article.publication_year(), None);
        assert_eq!(article.publication_number(), None);
        assert_eq!(article.subsections.len(), 1);
        assert_eq!(article.subsections[0].number, 1);
        assert_eq!(article.subsections[0].base.content, "Art. 12. Lorem ipsum.");
        assert_eq!(article.subsections[0].base.source_block_id, "p1");
    }

    #[test]
    fn test_subsections_are_numbered_without_gaps() {
        let act = build(&[
            ("ART", "Art. 1. 1. Pierwszy."),
            ("UST", "2. Drugi."),
            ("TEKST", "wtrącenie"),
            ("UST", "3. Trzeci."),
            ("UST", "4. Czwarty."),
            ("ART", "Art. 2. Następny."),
            ("UST", "2. Drugi."),
        ]);
        let numbers: Vec<usize> = act.articles[0].subsections.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        let numbers: Vec<usize> = act.articles[1].subsections.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_adjacency_cutoff() {
        let act = build(&[
            ("ART", "Art. 3. W ustawie (Dz. U. z 2020 r. poz. 1234) art. 4 otrzymuje brzmienie:"),
            ("ZART", "„Art. 4. Nowe brzmienie."),
            ("ZUST", "2. Nowy ustęp."),
            ("TEKST", "Uzasadnienie zmiany"),
            ("ZART", "„Art. 5. Nie dołącza się."),
        ]);
        let subsection = &act.articles[0].subsections[0];
        assert_eq!(subsection.amendments.len(), 2);
        assert_eq!(subsection.amendments[0].base.source_block_id, "p2");
        assert_eq!(subsection.amendments[1].base.source_block_id, "p3");
        assert_eq!(act.articles[0].amendment_targets.len(), 2);
    }

    #[test]
    fn test_amending_article_publication() {
        let act = build(&[(
            "ART",
            "Art. 2. W ustawie z dnia 1 marca 2020 r. (Dz. U. z 2020 r. poz. 1234) wprowadza się następujące zmiany:",
        )]);
        let article = &act.articles[0];
        assert!(article.is_amending);
        assert_eq!(article.publication_year(), Some("2020"));
        assert_eq!(article.publication_number(), Some("1234"));
    }

    #[test]
    fn test_composite_reference_skips_subsection() {
        let act = build(&[
            ("ART", "Art. 5."),
            ("UST", "2. Treść ustępu"),
            ("PKT", "1) foo"),
            ("LIT", "a) bar"),
            ("ZLIT", "„a) nowa litera”"),
        ]);
        let article = &act.articles[0];
        let letter = &article.subsections[1].points[0].letters[0];
        assert_eq!(letter.ordinal, "a");
        assert_eq!(letter.amendments.len(), 1);
        assert_eq!(
            letter.amendments[0].composite_reference.as_deref(),
            Some("Art. 5.|1) foo|a) bar")
        );
        assert_eq!(article.amendment_targets, vec!["Art. 5.|1) foo|a) bar"]);
    }

    #[test]
    fn test_amendment_ancestry_and_parent() {
        let act = build(&[
            ("ART", "Art. 5."),
            ("PKT", "1) foo"),
            ("LIT", "a) bar"),
            ("ZLIT", "„tekst”"),
        ]);
        let article = &act.articles[0];
        let subsection = &article.subsections[0];
        let point = &subsection.points[0];
        let letter = &point.letters[0];
        let amendment = &letter.amendments[0];

        assert_eq!(amendment.parent.kind, AmendableKind::Letter);
        assert_eq!(amendment.parent, letter.node_ref());
        assert_eq!(amendment.ancestry.article, Some(article.base.id));
        assert_eq!(amendment.ancestry.subsection, Some(subsection.base.id));
        assert_eq!(amendment.ancestry.point, Some(point.base.id));
        assert_eq!(amendment.ancestry.letter, Some(letter.base.id));
        assert_eq!(letter.ancestry.letter, None);
        assert_eq!(letter.ancestry.point, Some(point.base.id));
    }

    #[test]
    fn test_tirets_are_numbered_and_keep_letter_run() {
        let act = build(&[
            ("ART", "Art. 1."),
            ("PKT", "1) punkt"),
            ("LIT", "a) litera"),
            ("TIR", "– pierwsze"),
            ("TIRET", "– drugie"),
            ("ZTIR", "„– nowe”"),
        ]);
        let letter = &act.articles[0].subsections[0].points[0].letters[0];
        let numbers: Vec<usize> = letter.tirets.iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(letter.amendments.len(), 1);
        assert_eq!(letter.amendments[0].base.source_block_id, "p6");
        assert_eq!(letter.amendments[0].preceding_children, 2);
    }

    #[test]
    fn test_points_and_letters_close_windows() {
        let act = build(&[
            ("ART", "Art. 1."),
            ("PKT", "1) pierwszy"),
            ("LIT", "a) litera a"),
            ("LIT", "b) litera b"),
            ("PKT", "2) drugi"),
            ("UST", "2. Ustęp"),
            ("PKT", "1) w ustępie"),
        ]);
        let article = &act.articles[0];
        assert_eq!(article.subsections.len(), 2);
        let points = &article.subsections[0].points;
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].number, "1");
        assert_eq!(points[0].letters.len(), 2);
        assert_eq!(points[1].number, "2");
        assert!(points[1].letters.is_empty());
        assert_eq!(article.subsections[1].points.len(), 1);
    }

    #[test]
    fn test_missing_style_is_diagnosed() {
        let act = build(&[("ART", "Art. 1. Tekst"), ("", "bez stylu")]);
        assert_eq!(act.diagnostics.len(), 1);
        let diagnostic = &act.diagnostics[0];
        assert_eq!(diagnostic.block_id, "p2");
        assert_eq!(diagnostic.message, MISSING_STYLE_MESSAGE);
        assert_eq!(diagnostic.node_id, Some(act.articles[0].subsections[0].base.id));
    }

    #[test]
    fn test_unstyled_block_breaks_adjacency() {
        let act = build(&[("ART", "Art. 1."), ("", "bez stylu"), ("ZART", "„Art. 2.”")]);
        assert!(act.articles[0].subsections[0].amendments.is_empty());
    }

    #[test]
    fn test_letter_without_point_falls_back_to_plain() {
        let act = build(&[
            ("ART", "Art. 1."),
            ("LIT", "a) zawieszona litera"),
            ("ZART", "„Art. 2.”"),
        ]);
        let subsection = &act.articles[0].subsections[0];
        assert!(subsection.points.is_empty());
        assert!(subsection.amendments.is_empty());
        assert_eq!(act.diagnostics.len(), 1);
        assert_eq!(
            act.diagnostics[0].message,
            "litera outside of punkt, treated as plain text"
        );
    }

    #[test]
    fn test_subsection_outside_article_is_diagnosed() {
        let act = build(&[("UST", "1. Zawieszony ustęp"), ("ART", "Art. 1.")]);
        assert_eq!(act.articles.len(), 1);
        assert_eq!(act.diagnostics.len(), 1);
        assert_eq!(act.diagnostics[0].node_id, None);
    }

    #[test]
    fn test_repealing_point_amends_itself() {
        let act = build(&[
            ("ART", "Art. 2. W ustawie (Dz. U. z 2019 r. poz. 50) wprowadza się zmiany:"),
            ("PKT", "1) uchyla się art. 4;"),
            ("PKT", "2) art. 5 otrzymuje brzmienie:"),
            ("ZART", "„Art. 5. Nowy.”"),
        ]);
        let article = &act.articles[0];
        let points = &article.subsections[0].points;
        assert_eq!(points[0].amendments.len(), 1);
        assert_eq!(points[0].amendments[0].base.source_block_id, "p2");
        assert_ne!(points[0].amendments[0].base.id, points[0].base.id);
        assert_eq!(
            points[0].amendments[0].amended_act.as_deref(),
            Some("repeal of art. 4 in Dz. U. z 2019 r. poz. 50")
        );
        assert_eq!(points[1].amendments.len(), 1);
        assert_eq!(
            points[1].amendments[0].amended_act.as_deref(),
            Some("new wording of art. 5 in Dz. U. z 2019 r. poz. 50")
        );
        assert_eq!(article.amendment_targets.len(), 2);
    }

    #[test]
    fn test_repeal_in_non_amending_article_is_plain_text() {
        let act = build(&[("ART", "Art. 9. Przepisy końcowe:"), ("PKT", "1) uchyla się akt;")]);
        assert!(act.articles[0].subsections[0].points[0].amendments.is_empty());
    }

    #[test]
    fn test_divisions_and_preamble() {
        let act = build(&[
            ("OZNRODZAKTU", "USTAWA"),
            ("DATAAKTU", "z dnia 1 stycznia 2024 r."),
            ("TYTDZOZNoznaczenie", "DZIAŁ I"),
            ("TYTDZPRZEDMprzedmiot", "Przepisy ogólne"),
            ("ROZDZODDZOZNoznaczenie", "Rozdział 1"),
            ("ART", "Art. 1. Pierwszy."),
            ("ROZDZODDZOZNoznaczenie", "Rozdział 2"),
            ("ROZDZODDZOZNoznaczenie", "Oddział 1"),
            ("ART", "Art. 2. Drugi."),
            ("TYTDZOZNoznaczenie", "DZIAŁ II"),
            ("ART", "Art. 3. Trzeci."),
        ]);

        assert_eq!(act.preamble, vec!["USTAWA", "z dnia 1 stycznia 2024 r."]);
        assert!(act.articles.is_empty());
        assert_eq!(act.divisions.len(), 2);

        let part = &act.divisions[0];
        assert_eq!(part.kind, DivisionKind::Part);
        assert_eq!(part.number, "I");
        assert_eq!(part.subject.as_deref(), Some("Przepisy ogólne"));
        assert_eq!(part.divisions.len(), 2);
        assert_eq!(part.divisions[0].kind, DivisionKind::Chapter);
        assert_eq!(part.divisions[0].articles.len(), 1);

        let chapter = &part.divisions[1];
        assert_eq!(chapter.number, "2");
        assert!(chapter.articles.is_empty());
        assert_eq!(chapter.divisions[0].kind, DivisionKind::Section);
        assert_eq!(chapter.divisions[0].articles[0].number, "2");

        assert_eq!(act.divisions[1].number, "II");
        assert_eq!(act.divisions[1].articles[0].number, "3");

        let numbers: Vec<&str> = act.all_articles().iter().map(|a| a.number.as_str()).collect();
        assert_eq!(numbers, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_division_closes_article() {
        let act = build(&[
            ("ART", "Art. 1."),
            ("PKT", "1) punkt"),
            ("ROZDZODDZOZN", "Rozdział 1"),
            ("ART", "Art. 2."),
        ]);
        assert_eq!(act.articles.len(), 1);
        assert_eq!(act.divisions[0].articles[0].number, "2");
    }

    #[test]
    fn test_build_is_deterministic() {
        let input = blocks(&[
            ("ART", "Art. 1. W ustawie (Dz. U. z 2020 r. poz. 1) wprowadza się zmiany:"),
            ("PKT", "1) art. 2 otrzymuje brzmienie:"),
            ("ZART", "„Art. 2.”"),
        ]);
        let builder = TreeBuilder::new();
        assert_eq!(builder.build(&input), builder.build(&input));
    }

    #[test]
    fn test_custom_procedure() {
        let builder = TreeBuilder::new()
            .with_procedure(|composite: &str| Some(format!("custom: {composite}")));
        let act = builder.build(&blocks(&[("ART", "Art. 1."), ("ZART", "„Art. 2.”")]));
        assert_eq!(
            act.articles[0].subsections[0].amendments[0].amended_act.as_deref(),
            Some("custom: Art. 1.")
        );
    }

    #[test]
    fn test_custom_styles() {
        let mut styles = StyleRegistry::new();
        styles.register("ARTYKUL", crate::style::RuleTarget::Article);
        let builder = TreeBuilder::new().with_styles(styles);
        let act = builder.build(&blocks(&[("ARTYKUL", "Art. 7."), ("ART", "Art. 8.")]));
        assert_eq!(act.articles.len(), 1);
        assert_eq!(act.articles[0].number, "7");
    }
}
