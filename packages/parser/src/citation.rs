//! Extraction of citation metadata from block text.
//!
//! Every extractor is total: a missing match yields the [`UNKNOWN`] sentinel
//! or `None`, never an error.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Sentinel returned when a number or label cannot be found.
pub const UNKNOWN: &str = "Unknown";

/// `Art. 12.` / `Art. 12a.`
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Art\. ([\w\d]+)\.").expect("valid regex"));

/// `Dz. U. z 2020 r. poz. 1234` or `M. P. z 2019 r. poz. 77`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PUBLICATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(Dz\.\sU\.|M\.\sP\.)\sz\s(\d{4})\sr\.\spoz\.\s(\d+)").expect("valid regex")
});

/// Leading `1)` / `a)` / `12a)` label.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ORDINAL_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^\)]+)\)").expect("valid regex"));

/// `DZIAŁ II`, `Rozdział 3`, `TYTUŁ I`, `Oddział 2a`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DIVISION_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:tytuł|dział|rozdział|oddział)\s+([\w\d]+)").expect("valid regex")
});

/// Lower-case citations of amended units, e.g. `art. 3 ust. 2 pkt 1 lit. a`.
///
/// Capitalised `Art.` is the heading of the citing article itself and is not
/// matched.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static UNIT_CITATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:art\.\s*\d+[a-z]*|ust\.\s*\d+[a-z]*|pkt\s+\d+[a-z]*)(?:\s+(?:ust\.\s*\d+[a-z]*|pkt\s+\d+[a-z]*|lit\.\s*[a-z]+))*",
    )
    .expect("valid regex")
});

/// Official journal a publication reference points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Journal {
    /// Dziennik Ustaw (`Dz. U.`).
    DziennikUstaw,
    /// Monitor Polski (`M. P.`).
    MonitorPolski,
}

impl Journal {
    /// Abbreviation as printed in citations.
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::DziennikUstaw => "Dz. U.",
            Self::MonitorPolski => "M. P.",
        }
    }

    fn from_abbreviation(text: &str) -> Self {
        if text.starts_with('M') {
            Self::MonitorPolski
        } else {
            Self::DziennikUstaw
        }
    }
}

/// Publication reference of an amended act.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub journal: Journal,
    pub year: String,
    pub number: String,
}

impl fmt::Display for Publication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} z {} r. poz. {}",
            self.journal.abbreviation(),
            self.year,
            self.number
        )
    }
}

/// Extract the article number from an `Art. N.` heading.
///
/// # Examples
/// ```
/// use legalact_parser::citation::extract_article_number;
///
/// assert_eq!(extract_article_number("Art. 12. Lorem"), "12");
/// assert_eq!(extract_article_number("Lorem"), "Unknown");
/// ```
pub fn extract_article_number(text: &str) -> String {
    ARTICLE_NUMBER
        .captures(text)
        .and_then(|c| c.get(1))
        .map_or_else(|| UNKNOWN.to_string(), |m| m.as_str().to_string())
}

/// Extract the first journal publication reference from the text.
///
/// An article citing a publication amends that act.
pub fn extract_publication(text: &str) -> Option<Publication> {
    let captures = PUBLICATION.captures(text)?;
    Some(Publication {
        journal: Journal::from_abbreviation(&captures[1]),
        year: captures[2].to_string(),
        number: captures[3].to_string(),
    })
}

/// Extract the leading `<label>)` ordinal of a point or letter.
///
/// # Examples
/// ```
/// use legalact_parser::citation::extract_ordinal_label;
///
/// assert_eq!(extract_ordinal_label("1) foo"), "1");
/// assert_eq!(extract_ordinal_label("a) bar"), "a");
/// assert_eq!(extract_ordinal_label("bar"), "Unknown");
/// ```
pub fn extract_ordinal_label(text: &str) -> String {
    ORDINAL_LABEL
        .captures(text)
        .and_then(|c| c.get(1))
        .map_or_else(|| UNKNOWN.to_string(), |m| m.as_str().to_string())
}

/// Extract the number of a division heading (`DZIAŁ II` → `II`).
pub fn extract_division_number(text: &str) -> String {
    DIVISION_NUMBER
        .captures(text)
        .and_then(|c| c.get(1))
        .map_or_else(|| UNKNOWN.to_string(), |m| m.as_str().to_string())
}

/// Extract citations of amended units in order of appearance.
pub fn extract_unit_citations(text: &str) -> Vec<String> {
    UNIT_CITATION
        .find_iter(text)
        .map(|m| crate::text::sanitize(m.as_str()))
        .collect()
}
