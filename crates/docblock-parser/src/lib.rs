//! Doc-comment parser.
//!
//! Reduces the token document produced by `docblock-lexer` into the two
//! outputs consumers care about: a map of `@tag` values and the free-form
//! comment lines. Also hosts the lookup seam for fetching a member's raw
//! doc comment from some source of declarations.
//!
//! # Example
//!
//! ```
//! use docblock_parser::DocBlock;
//!
//! let block = DocBlock::parse("/**\n * Adds a user.\n *\n * @return bool\n */");
//! assert_eq!(block.comments(), ["Adds a user."]);
//! assert_eq!(block.tags()["return"], "bool");
//! ```

pub mod docblock;
pub mod source;

pub use docblock::DocBlock;
pub use source::CommentSource;

/// Lookup failure reported by a [`CommentSource`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no doc comment target named {owner}::{member}")]
pub struct LookupError {
    pub owner: String,
    pub member: String,
}
