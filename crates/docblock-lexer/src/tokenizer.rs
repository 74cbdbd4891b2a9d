//! Line tokenizer for doc comments.
//!
//! Splits a raw doc-comment string on line feeds and classifies each line
//! into an ordered group of tokens:
//!
//! 1. a bare delimiter line (`/**`, `*`, `*/`) collapses to a single newline
//!    token;
//! 2. a leading continuation marker plus its trailing whitespace becomes a
//!    whitespace token and is removed;
//! 3. the first `@name ` pattern in what remains becomes a tag token and is
//!    removed;
//! 4. whatever is left, trimmed, becomes a text token (possibly empty),
//!    followed by a closing newline token.
//!
//! The tokenizer is total: any input, including text that is not a doc
//! comment at all, produces a document. Worst case a line comes out as a
//! single text token.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::token::{is_delimiter_line, Token};

/// Leading continuation marker plus the whitespace run that follows it.
static LEADER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*[ \t]+").unwrap());

/// A tag marker, its name, and the whitespace character that ends it.
static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"@[a-zA-Z0-9]+\s").unwrap());

/// The ordered tokens produced from one physical line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenGroup {
    pub tokens: Vec<Token>,
}

/// An ordered sequence of token groups, one per input line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub groups: Vec<TokenGroup>,
}

impl Document {
    /// Number of token groups (input lines).
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Human-readable token listing: one `KIND=text` line per token, groups
    /// separated by a blank line. Diagnostic only; the format is not stable.
    pub fn dump(&self) -> String {
        let mut out = String::new();

        for group in &self.groups {
            for token in &group.tokens {
                out.push_str(token.kind_name());
                out.push('=');
                out.push_str(token.text());
                out.push('\n');
            }
            out.push('\n');
        }

        out
    }
}

/// Tokenize a raw doc comment into a document.
///
/// Empty input yields an empty document. Otherwise the input is split on
/// line feeds and no line is dropped, so text ending in a line feed
/// contributes a final empty line. Carriage returns from CRLF input are
/// disposed of by per-line trimming.
pub fn tokenize(raw: &str) -> Document {
    if raw.is_empty() {
        return Document::default();
    }

    Document {
        groups: raw.split('\n').map(tokenize_line).collect(),
    }
}

/// Classify one line of a doc comment.
fn tokenize_line(line: &str) -> TokenGroup {
    let line = line.trim();
    let mut tokens = Vec::new();

    // A bare delimiter stands in for the whole line.
    if is_delimiter_line(line) {
        tokens.push(Token::Newline);
        return TokenGroup { tokens };
    }

    let mut rest = line.to_string();

    if let Some(matched) = LEADER_REGEX.find(&rest).map(|m| m.as_str().to_string()) {
        rest = rest.replacen(&matched, "", 1);
        tokens.push(Token::Whitespace(matched));
    }

    // First occurrence only; a second tag on the same line stays in the text.
    if let Some(matched) = TAG_REGEX.find(&rest).map(|m| m.as_str().to_string()) {
        rest = rest.replacen(&matched, "", 1);
        tokens.push(Token::Tag(matched.trim().to_string()));
    }

    tokens.push(Token::Text(rest.trim().to_string()));
    tokens.push(Token::Newline);

    TokenGroup { tokens }
}
