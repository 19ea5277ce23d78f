//! Flatten a tree back into style-tagged blocks.
//!
//! The output uses the canonical style ids of [`SemanticStyle`], so parsing
//! it again with the default rules rebuilds the same structure.

use super::nodes::{Article, Division, DivisionKind, HasAmendments, LegalAct, NodeBase};
use crate::types::{Block, SemanticStyle};

impl LegalAct {
    /// Emit the tree as blocks in document order.
    ///
    /// Amendments follow the block of the unit owning them. A repealing
    /// point that amends itself is written once.
    #[must_use]
    pub fn to_blocks(&self) -> Vec<Block> {
        let mut out = Vec::new();

        for (index, line) in self.preamble.iter().enumerate() {
            let id = self
                .preamble_block_ids
                .get(index)
                .cloned()
                .unwrap_or_else(|| format!("preamble-{}", index + 1));
            out.push(Block::styled(id, SemanticStyle::Plain.canonical_style_id(), line));
        }
        for article in &self.articles {
            emit_article(article, &mut out);
        }
        for division in &self.divisions {
            emit_division(division, &mut out);
        }
        out
    }
}

fn division_style(kind: DivisionKind) -> SemanticStyle {
    match kind {
        DivisionKind::Title => SemanticStyle::Title,
        DivisionKind::Part => SemanticStyle::Part,
        DivisionKind::Chapter => SemanticStyle::Chapter,
        DivisionKind::Section => SemanticStyle::Section,
    }
}

fn emit(base: &NodeBase, style: SemanticStyle, out: &mut Vec<Block>) {
    out.push(Block::styled(
        base.source_block_id.clone(),
        style.canonical_style_id(),
        &base.content,
    ));
}

/// Emit the amendments of `unit` that follow exactly `children` child units.
fn emit_amendments(
    owner: &NodeBase,
    unit: &impl HasAmendments,
    children: usize,
    out: &mut Vec<Block>,
) {
    let amendments = unit
        .amendments()
        .iter()
        .filter(|a| a.preceding_children == children)
        .filter(|a| a.base.source_block_id != owner.source_block_id);
    for amendment in amendments {
        emit(&amendment.base, SemanticStyle::AmendmentMarker, out);
    }
}

fn emit_division(division: &Division, out: &mut Vec<Block>) {
    emit(&division.base, division_style(division.kind), out);
    if let Some(subject) = &division.subject {
        let id = division
            .subject_block_id
            .clone()
            .unwrap_or_else(|| format!("{}-subject", division.base.source_block_id));
        out.push(Block::styled(
            id,
            SemanticStyle::DivisionSubject.canonical_style_id(),
            subject,
        ));
    }
    // Articles come before nested divisions: a nested division never
    // closes on an article.
    for article in &division.articles {
        emit_article(article, out);
    }
    for child in &division.divisions {
        emit_division(child, out);
    }
}

fn emit_article(article: &Article, out: &mut Vec<Block>) {
    emit(&article.base, SemanticStyle::Article, out);

    for (index, subsection) in article.subsections.iter().enumerate() {
        if index > 0 {
            emit(&subsection.base, SemanticStyle::Subsection, out);
        }
        emit_amendments(&subsection.base, subsection, 0, out);

        for (points, point) in subsection.points.iter().enumerate() {
            emit(&point.base, SemanticStyle::Point, out);
            emit_amendments(&point.base, point, 0, out);

            for (letters, letter) in point.letters.iter().enumerate() {
                emit(&letter.base, SemanticStyle::Letter, out);
                emit_amendments(&letter.base, letter, 0, out);
                for (tirets, tiret) in letter.tirets.iter().enumerate() {
                    emit(&tiret.base, SemanticStyle::Tiret, out);
                    emit_amendments(&letter.base, letter, tirets + 1, out);
                }
                emit_amendments(&point.base, point, letters + 1, out);
            }
            emit_amendments(&subsection.base, subsection, points + 1, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::build_tree;
    use crate::types::Block;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Block> {
        vec![
            Block::styled("p1", "OZNRODZAKTU", "USTAWA"),
            Block::styled("p2", "TYTDZOZN", "DZIAŁ I"),
            Block::styled("p3", "TYTDZPRZEDM", "Zmiany w przepisach"),
            Block::styled("p4", "ROZDZODDZOZN", "Rozdział 1"),
            Block::styled(
                "p5",
                "ART",
                "Art. 1. W ustawie z dnia 1 marca 2020 r. (Dz. U. z 2020 r. poz. 100) wprowadza się następujące zmiany:",
            ),
            Block::styled("p6", "PKT", "1) uchyla się art. 2;"),
            Block::styled("p7", "PKT", "2) w art. 3:"),
            Block::styled("p8", "LIT", "a) ust. 1 otrzymuje brzmienie:"),
            Block::styled("p9", "ZUST", "„1. Nowe brzmienie.”,"),
            Block::styled("p10", "LIT", "b) w ust. 2:"),
            Block::styled("p11", "TIR", "– tiret pierwsze,"),
            Block::styled("p12", "TIR", "– tiret drugie;"),
            Block::styled("p13", "ART", "Art. 2. 1. Ustawa wchodzi w życie po upływie 14 dni."),
            Block::styled("p14", "UST", "2. Przepis ust. 1 stosuje się odpowiednio."),
        ]
    }

    #[test]
    fn test_to_blocks_preserves_order_and_ids() {
        let act = build_tree(&sample());
        let ids: Vec<String> = act.to_blocks().into_iter().map(|b| b.id).collect();
        let expected: Vec<String> = (1..=14).map(|i| format!("p{i}")).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_to_blocks_reparses_to_same_tree() {
        let act = build_tree(&sample());
        let reparsed = build_tree(&act.to_blocks());
        assert_eq!(reparsed.stats(), act.stats());
        assert_eq!(reparsed.divisions, act.divisions);
        assert_eq!(reparsed.preamble, act.preamble);
    }

    #[test]
    fn test_to_blocks_uses_canonical_styles() {
        let act = build_tree(&sample());
        let blocks = act.to_blocks();
        assert_eq!(blocks[0].style.as_deref(), Some("TEKST"));
        assert_eq!(blocks[1].style.as_deref(), Some("TYTDZOZN"));
        assert_eq!(blocks[4].style.as_deref(), Some("ART"));
        assert_eq!(blocks[8].style.as_deref(), Some("ZART"));
        assert_eq!(blocks[10].style.as_deref(), Some("TIR"));
    }

    #[test]
    fn test_amendment_after_tiret_keeps_position() {
        let blocks = vec![
            Block::styled("p1", "ART", "Art. 1. W ustawie (Dz. U. z 2021 r. poz. 5) wprowadza się zmiany:"),
            Block::styled("p2", "PKT", "1) w art. 2:"),
            Block::styled("p3", "LIT", "a) w ust. 1:"),
            Block::styled("p4", "TIR", "– tiret pierwsze otrzymuje brzmienie:"),
            Block::styled("p5", "ZTIR", "„– nowe tiret,”,"),
            Block::styled("p6", "TIR", "– tiret drugie;"),
        ];
        let act = build_tree(&blocks);
        let letter = &act.articles[0].subsections[0].points[0].letters[0];
        assert_eq!(letter.amendments[0].preceding_children, 1);

        let ids: Vec<String> = act.to_blocks().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3", "p4", "p5", "p6"]);
        assert_eq!(build_tree(&act.to_blocks()), act);
    }

    #[test]
    fn test_empty_tree_has_no_blocks() {
        assert!(crate::tree::LegalAct::default().to_blocks().is_empty());
    }
}
