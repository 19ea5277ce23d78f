//! Adjacency state machine deciding which amendment blocks attach to a unit.

use crate::types::SemanticStyle;

/// What to do with a block that neither closes the window nor opens a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Attach the block as an amendment of the current unit.
    Attach,
    /// Ordinary trailing text; the block is dropped.
    Drop,
}

/// Per-window classifier for amendment blocks.
///
/// Amendment blocks attach only as an unbroken run right after the unit's
/// own content. The first other block ends the run for good: a later
/// amendment block in the same window is dropped. Child windows use their
/// own classifier.
#[derive(Debug, Clone)]
pub struct AmendmentClassifier {
    is_adjacent: bool,
}

impl AmendmentClassifier {
    /// Start a new run.
    #[must_use]
    pub fn new() -> Self {
        Self { is_adjacent: true }
    }

    /// Classify the next block of the window.
    pub fn classify(&mut self, style: SemanticStyle) -> Verdict {
        if self.is_adjacent && style == SemanticStyle::AmendmentMarker {
            Verdict::Attach
        } else {
            self.is_adjacent = false;
            Verdict::Drop
        }
    }
}

impl Default for AmendmentClassifier {
    fn default() -> Self {
        Self::new()
    }
}
