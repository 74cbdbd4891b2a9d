//! Parsed doc block.
//!
//! `DocBlock` runs the whole pipeline once at construction: tokenize the raw
//! comment into a document, then fold the document into a tag map and a
//! comment list. All three are frozen afterwards and exposed through
//! read-only accessors.

use std::collections::BTreeMap;

use docblock_lexer::{tokenize, Document, Token};

/// A parsed doc comment: token document, tag map, comment lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocBlock {
    document: Document,
    tags: BTreeMap<String, String>,
    comments: Vec<String>,
}

impl DocBlock {
    /// Parse a raw doc comment.
    ///
    /// Total: every string input produces a block, with or without the
    /// `/**` / `*` / `*/` delimiter lines. Empty input produces an empty
    /// block.
    pub fn parse(raw: &str) -> Self {
        let document = tokenize(raw);
        let (tags, comments) = reduce(&document);

        Self {
            document,
            tags,
            comments,
        }
    }

    /// Tag names (without the `@` marker) mapped to their text.
    pub fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    /// Free-form comment lines in source order. An empty entry is a blank
    /// line in the original comment.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// The underlying token document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Fold a token document into its tag map and comment list.
///
/// The pending tag is scoped to one group: a tag on one line never captures
/// text from the next. A repeated tag name overwrites the earlier entry, and
/// a tag with no following text in its group is dropped.
fn reduce(document: &Document) -> (BTreeMap<String, String>, Vec<String>) {
    let mut tags = BTreeMap::new();
    let mut comments = Vec::new();

    for group in &document.groups {
        let mut pending: Option<&str> = None;

        for token in &group.tokens {
            match token {
                Token::Newline | Token::Whitespace(_) => {}
                Token::Tag(name) => pending = Some(name.as_str()),
                Token::Text(text) => {
                    if let Some(name) = pending.take() {
                        let key = name.strip_prefix('@').unwrap_or(name);
                        tags.insert(key.to_string(), text.clone());
                    } else {
                        comments.push(text.clone());
                    }
                }
            }
        }
    }

    (tags, comments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docblock_lexer::TokenGroup;

    fn block(raw: &str) -> DocBlock {
        DocBlock::parse(raw)
    }

    fn group(tokens: Vec<Token>) -> TokenGroup {
        TokenGroup { tokens }
    }

    // =========================================================================
    // Empty / simple
    // =========================================================================

    #[test]
    fn test_empty_input() {
        let b = block("");
        assert!(b.tags().is_empty());
        assert!(b.comments().is_empty());
        assert!(b.document().is_empty());
    }

    #[test]
    fn test_single_comment_line() {
        let b = block("/**\n * Just a comment.\n */");
        assert_eq!(b.comments(), ["Just a comment."]);
        assert!(b.tags().is_empty());
    }

    #[test]
    fn test_parse_is_pure() {
        let raw = "/**\n * @param $x value\n */";
        assert_eq!(block(raw), block(raw));
    }

    // =========================================================================
    // Tags
    // =========================================================================

    #[test]
    fn test_param_tag() {
        let b = block("/**\n * @param $foo Description text\n */");
        assert_eq!(b.tags()["param"], "$foo Description text");
        assert!(b.comments().is_empty());
    }

    #[test]
    fn test_marker_stripped_from_key() {
        let b = block("* @return bool");
        assert!(b.tags().contains_key("return"));
        assert!(!b.tags().contains_key("@return"));
    }

    #[test]
    fn test_repeated_tag_last_write_wins() {
        let b = block("/**\n * @x first\n * @x second\n */");
        assert_eq!(b.tags()["x"], "second");
        assert_eq!(b.tags().len(), 1);
    }

    #[test]
    fn test_multiple_tags() {
        let b = block("* @param $id The id\n* @return bool");
        assert_eq!(b.tags()["param"], "$id The id");
        assert_eq!(b.tags()["return"], "bool");
    }

    // =========================================================================
    // Comments
    // =========================================================================

    #[test]
    fn test_comments_keep_source_order() {
        let b = block("First.\nSecond.\nThird.");
        assert_eq!(b.comments(), ["First.", "Second.", "Third."]);
    }

    #[test]
    fn test_duplicate_comments_preserved() {
        let b = block("dup\ndup");
        assert_eq!(b.comments(), ["dup", "dup"]);
    }

    #[test]
    fn test_blank_line_becomes_empty_entry() {
        let b = block("First.\n\nSecond.");
        assert_eq!(b.comments(), ["First.", "", "Second."]);
    }

    #[test]
    fn test_delimiter_lines_add_no_entries() {
        // The bare `*` separator reads as a newline, not a blank comment.
        let b = block("/**\n * First.\n *\n * Second.\n */");
        assert_eq!(b.comments(), ["First.", "Second."]);
    }

    // =========================================================================
    // Reducer state machine (hand-built documents)
    // =========================================================================

    #[test]
    fn test_orphaned_tag_contributes_nothing() {
        let doc = Document {
            groups: vec![group(vec![Token::Tag("@todo".into()), Token::Newline])],
        };
        let (tags, comments) = reduce(&doc);
        assert!(tags.is_empty());
        assert!(comments.is_empty());
    }

    #[test]
    fn test_second_tag_overwrites_pending() {
        let doc = Document {
            groups: vec![group(vec![
                Token::Tag("@a".into()),
                Token::Tag("@b".into()),
                Token::Text("x".into()),
                Token::Newline,
            ])],
        };
        let (tags, comments) = reduce(&doc);
        assert_eq!(tags["b"], "x");
        assert!(!tags.contains_key("a"));
        assert!(comments.is_empty());
    }

    #[test]
    fn test_pending_tag_resets_between_groups() {
        let doc = Document {
            groups: vec![
                group(vec![Token::Tag("@a".into()), Token::Newline]),
                group(vec![Token::Text("hello".into()), Token::Newline]),
            ],
        };
        let (tags, comments) = reduce(&doc);
        assert!(tags.is_empty());
        assert_eq!(comments, ["hello"]);
    }

    #[test]
    fn test_whitespace_and_newline_ignored() {
        let doc = Document {
            groups: vec![group(vec![
                Token::Whitespace("* ".into()),
                Token::Tag("@a".into()),
                Token::Newline,
                Token::Text("x".into()),
            ])],
        };
        let (tags, _) = reduce(&doc);
        assert_eq!(tags["a"], "x");
    }

    // =========================================================================
    // Full block
    // =========================================================================

    #[test]
    fn test_full_method_docblock() {
        let b = block(
            "/**\n\
             \x20* Saves the record to storage.\n\
             \x20*\n\
             \x20* Existing rows are updated in place.\n\
             \x20*\n\
             \x20* @param $record The record to save\n\
             \x20* @return bool\n\
             \x20* @throws StorageException When the backend is unreachable\n\
             \x20*/",
        );
        assert_eq!(
            b.comments(),
            ["Saves the record to storage.", "Existing rows are updated in place."]
        );
        assert_eq!(b.tags()["param"], "$record The record to save");
        assert_eq!(b.tags()["return"], "bool");
        assert_eq!(
            b.tags()["throws"],
            "StorageException When the backend is unreachable"
        );
        assert_eq!(b.document().len(), 9);
    }
}
