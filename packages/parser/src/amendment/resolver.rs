//! Amendment target resolution.

use super::procedure::AmendingProcedure;

/// Separator between fragments of a composite reference.
pub const COMPOSITE_SEPARATOR: &str = "|";

/// Content of the units enclosing an amendment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmendmentContext<'a> {
    pub article: Option<&'a str>,
    /// Carried for completeness; subsection prose is not a reliable
    /// citation anchor and never enters the composite reference.
    pub subsection: Option<&'a str>,
    pub point: Option<&'a str>,
    pub letter: Option<&'a str>,
}

/// Outcome of resolving one amendment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Article, point and letter content joined with `|`.
    pub composite: Option<String>,
    /// Description from the amending procedure.
    pub description: Option<String>,
}

/// Join article, point and letter content into a composite reference.
///
/// Empty fragments are dropped. Returns `None` if nothing is left.
///
/// # Examples
/// ```
/// use legalact_parser::amendment::{composite_reference, AmendmentContext};
///
/// let context = AmendmentContext {
///     article: Some("Art. 5."),
///     subsection: Some("2. ignored"),
///     point: Some("1) foo"),
///     letter: Some("a) bar"),
/// };
/// assert_eq!(composite_reference(&context).as_deref(), Some("Art. 5.|1) foo|a) bar"));
/// ```
pub fn composite_reference(context: &AmendmentContext<'_>) -> Option<String> {
    let parts: Vec<&str> = [context.article, context.point, context.letter]
        .into_iter()
        .flatten()
        .filter(|fragment| !fragment.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(COMPOSITE_SEPARATOR))
    }
}

/// Resolves amendments into composite references and descriptions.
#[derive(Debug, Clone, Default)]
pub struct TargetResolver<P> {
    procedure: P,
}

impl<P: AmendingProcedure> TargetResolver<P> {
    #[must_use]
    pub fn new(procedure: P) -> Self {
        Self { procedure }
    }

    /// Compute the composite reference and its description.
    ///
    /// Recording the composite against the owning article is left to the
    /// caller.
    #[must_use]
    pub fn resolve(&self, context: &AmendmentContext<'_>) -> Resolution {
        let Some(composite) = composite_reference(context) else {
            return Resolution::default();
        };
        let description = self.procedure.describe(&composite);
        if description.is_none() {
            tracing::debug!(composite = %composite, "Amending procedure not recognised");
        }
        Resolution {
            composite: Some(composite),
            description,
        }
    }
}
