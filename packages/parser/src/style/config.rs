//! Default style rules for the Polish legislative drafting template.

use super::registry::StyleRegistry;
use super::rule::RuleTarget;

/// Create a style registry configured for the drafting template styles.
///
/// ```text
/// TYT(DZ)_OZN          → TITLE / PART      (by heading text)
/// TYT(DZ)_PRZEDM       → DIVISION_SUBJECT
/// ROZDZ(ODDZ)_OZN      → CHAPTER / SECTION (by heading text)
/// ROZDZ(ODDZ)_PRZEDM   → DIVISION_SUBJECT
/// ART                  → ARTICLE
/// UST                  → SUBSECTION
/// PKT                  → POINT
/// LIT                  → LETTER
/// TIR                  → TIRET
/// Z…                   → AMENDMENT_MARKER
/// ```
#[must_use]
pub fn create_default_style_registry() -> StyleRegistry {
    let mut registry = StyleRegistry::new();

    // Division headings and their subject lines
    registry.register("TYTDZ", RuleTarget::TitleOrPart);
    registry.register("TYTDZPRZEDM", RuleTarget::DivisionSubject);
    registry.register("ROZDZODDZ", RuleTarget::ChapterOrSection);
    registry.register("ROZDZODDZPRZEDM", RuleTarget::DivisionSubject);

    // Units of an article
    registry.register("ART", RuleTarget::Article);
    registry.register("UST", RuleTarget::Subsection);
    registry.register("PKT", RuleTarget::Point);
    registry.register("LIT", RuleTarget::Letter);
    registry.register("TIR", RuleTarget::Tiret);

    // Every amending style (ZART, ZUST, ZPKT, Z_LIT, ZZ…) starts with Z
    registry.register("Z", RuleTarget::AmendmentMarker);

    registry
}
