//! Amending-procedure classification.
//!
//! An [`AmendingProcedure`] turns a composite reference string (article,
//! point and letter content joined with `|`) into a human-readable
//! description of the amending operation. Callers can plug in their own
//! classifier; [`KeywordProcedure`] recognises the fixed phrases of the
//! Polish legislative technique.

use serde::Serialize;
use std::fmt;

use crate::citation::{extract_publication, extract_unit_citations, Publication};

/// Phrase repealing a unit.
pub const REPEAL_PHRASE: &str = "uchyla się";

/// Phrase inserting a unit.
pub const INSERTION_PHRASE: &str = "dodaje się";

/// Phrase giving a unit a new wording.
pub const NEW_WORDING_PHRASE: &str = "otrzymuje brzmienie";

/// Collaborator describing the operation behind a composite reference.
///
/// Returning `None` means the text could not be interpreted. That is an
/// expected outcome, not an error.
pub trait AmendingProcedure {
    fn describe(&self, composite: &str) -> Option<String>;
}

impl<F> AmendingProcedure for F
where
    F: Fn(&str) -> Option<String>,
{
    fn describe(&self, composite: &str) -> Option<String> {
        self(composite)
    }
}

/// Amending operation named by the unit text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Repeal,
    Insertion,
    NewWording,
}

impl Operation {
    /// Detect the operation phrase in a fragment.
    #[must_use]
    pub fn detect(text: &str) -> Option<Self> {
        let lower = text.to_lowercase();
        if lower.contains(NEW_WORDING_PHRASE) {
            Some(Self::NewWording)
        } else if lower.contains(INSERTION_PHRASE) {
            Some(Self::Insertion)
        } else if lower.contains(REPEAL_PHRASE) {
            Some(Self::Repeal)
        } else {
            None
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Repeal => "repeal",
            Self::Insertion => "insertion",
            Self::NewWording => "new wording",
        }
    }
}

/// Structured result of [`KeywordProcedure::interpret`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmendmentDescription {
    pub operation: Operation,
    /// Amended unit, e.g. `art. 3 ust. 2` (empty if none is cited).
    pub unit: String,
    pub publication: Option<Publication>,
}

impl fmt::Display for AmendmentDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operation.label())?;
        if !self.unit.is_empty() {
            write!(f, " of {}", self.unit)?;
        }
        if let Some(publication) = &self.publication {
            write!(f, " in {publication}")?;
        }
        Ok(())
    }
}

/// Default procedure based on the fixed operation phrases.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordProcedure;

impl KeywordProcedure {
    /// Interpret a composite reference.
    ///
    /// The operation comes from the innermost fragment that names one. The
    /// amended unit is assembled outer to inner from the first citation of
    /// each fragment, so `1) w art. 3:` followed by
    /// `a) ust. 2 otrzymuje brzmienie:` gives `art. 3 ust. 2`.
    #[must_use]
    pub fn interpret(&self, composite: &str) -> Option<AmendmentDescription> {
        let fragments: Vec<&str> = composite.split('|').collect();
        let operation = fragments.iter().rev().find_map(|f| Operation::detect(f))?;

        let unit = fragments
            .iter()
            .filter_map(|f| extract_unit_citations(f).into_iter().next())
            .collect::<Vec<_>>()
            .join(" ");

        Some(AmendmentDescription {
            operation,
            unit,
            publication: extract_publication(composite),
        })
    }
}

impl AmendingProcedure for KeywordProcedure {
    fn describe(&self, composite: &str) -> Option<String> {
        self.interpret(composite).map(|d| d.to_string())
    }
}
