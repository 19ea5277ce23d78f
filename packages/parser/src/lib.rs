//! Legal act parser - turn style-tagged paragraphs of a Polish legal act
//! into a tree of divisions, articles and their units.
//!
//! Structure is recovered from paragraph styles alone. Amending articles
//! are recognised by their journal citation, and paragraphs quoting new
//! wording are attached as amendments to the unit that introduces them.
//!
//! # Example
//!
//! ```
//! use legalact_parser::{build_tree, Block};
//!
//! let act = build_tree(&[
//!     Block::styled("p1", "ART", "Art. 3. W ustawie (Dz. U. z 2020 r. poz. 1234) art. 5 otrzymuje brzmienie:"),
//!     Block::styled("p2", "ZART", "„Art. 5. Nowa treść.”"),
//! ]);
//!
//! let article = &act.articles[0];
//! assert!(article.is_amending);
//! assert_eq!(article.publication_year(), Some("2020"));
//! assert_eq!(act.all_amendments().len(), 1);
//! ```
//!
//! # Architecture
//!
//! - [`types`]: Input blocks, levels, semantic styles and diagnostics
//! - [`text`]: Text sanitizing and style id normalization
//! - [`style`]: Style prefix registry and the default template rules
//! - [`citation`]: Article numbers, journal citations and ordinal labels
//! - [`amendment`]: Composite references and amending-procedure classification
//! - [`tree`]: Node types, the windowing tree builder and block output
//! - [`config`]: Loading block lists and style rule files
//! - [`output`]: Rendering trees as YAML or JSON
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod amendment;
pub mod citation;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod style;
pub mod text;
pub mod tree;
pub mod types;

// Re-export commonly used items
pub use amendment::{AmendingProcedure, KeywordProcedure};
pub use error::{ParserError, Result};
pub use style::{create_default_style_registry, StyleRegistry};
pub use tree::{build_tree, Amendment, Article, LegalAct, TreeBuilder};
pub use types::{Block, Diagnostic, Level, SemanticStyle};
