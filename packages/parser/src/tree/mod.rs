//! Legal-act tree: node types, the windowing builder and block output.

mod adjacency;
mod builder;
mod nodes;
mod serialize;

pub use adjacency::{AmendmentClassifier, Verdict};
pub use builder::{build_tree, TreeBuilder, MISSING_STYLE_MESSAGE};
pub use nodes::{
    node_id, AmendableKind, Amendment, Ancestry, Article, Division, DivisionKind, HasAmendments,
    LegalAct, Letter, NodeBase, NodeKind, NodeRef, Point, Subsection, Tiret, TreeStats,
};
