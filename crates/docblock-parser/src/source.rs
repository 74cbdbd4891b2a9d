//! Lookup seam for raw doc comments.
//!
//! The original consumer of this parser fetched doc comments through a
//! runtime reflection facility. That collaborator is modeled as a narrow
//! trait so the parser stays a plain function over strings; anything that
//! can answer "what is the doc comment on member M of owner O" plugs in.

use crate::{DocBlock, LookupError};

/// Source of raw doc comments, keyed by owner (class, struct, impl target)
/// and member name.
pub trait CommentSource {
    /// The raw doc comment for `owner::member`.
    ///
    /// `None` means the target does not exist. A target that exists but
    /// carries no doc comment reports `Some(String::new())`.
    fn doc_comment(&self, owner: &str, member: &str) -> Option<String>;
}

impl DocBlock {
    /// Fetch and parse the doc block for `owner::member`.
    ///
    /// An unknown target reported by the source is the only failing path in
    /// the system; an empty comment parses to an empty block.
    pub fn for_member(
        source: &impl CommentSource,
        owner: &str,
        member: &str,
    ) -> Result<DocBlock, LookupError> {
        match source.doc_comment(owner, member) {
            Some(raw) => Ok(DocBlock::parse(&raw)),
            None => Err(LookupError {
                owner: owner.to_string(),
                member: member.to_string(),
            }),
        }
    }
}
