//! Amendment target resolution and amending-procedure classification.

mod procedure;
mod resolver;

pub use procedure::{
    AmendingProcedure, AmendmentDescription, KeywordProcedure, Operation, INSERTION_PHRASE,
    NEW_WORDING_PHRASE, REPEAL_PHRASE,
};
pub use resolver::{
    composite_reference, AmendmentContext, Resolution, TargetResolver, COMPOSITE_SEPARATOR,
};
