//! Text normalization for block content and style identifiers.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Any run of whitespace, including non-breaking spaces.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Sanitize paragraph text.
///
/// Composes the text to Unicode NFC (documents mix precomposed and combining
/// Polish diacritics), collapses whitespace runs to a single space and trims.
///
/// # Examples
/// ```
/// use legalact_parser::text::sanitize;
///
/// assert_eq!(sanitize("Art.\u{a0}1.\n  Ustawa"), "Art. 1. Ustawa");
/// ```
pub fn sanitize(text: &str) -> String {
    let composed: String = text.nfc().collect();
    WHITESPACE_RUN
        .replace_all(&composed, " ")
        .trim()
        .to_string()
}

/// Normalize a style identifier for prefix matching.
///
/// Keeps ASCII alphanumerics only and upper-cases them, so the style id
/// `ZARTzmartartykuempunktem` and the style name
/// `Z/ART – zm. art. artykułem` both start with `ZART`.
pub fn normalize_style_id(style: &str) -> String {
    style
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
