/// Token classification for one piece of a doc-comment line.
///
/// Data-carrying variants embed the matched text directly (no separate
/// `value` field on a token struct). `Newline` is a pure marker; its
/// rendered text is always a line feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A line that is only a delimiter (`/**`, `*`, `*/`), or the implicit
    /// break terminating any other line.
    Newline,

    /// The continuation marker plus the spaces and tabs that follow it,
    /// e.g. `"* "`.
    Whitespace(String),

    /// A tag marker and name, trimmed, e.g. `"@param"`.
    Tag(String),

    /// Remaining line content, trimmed. May be the empty string.
    Text(String),
}

impl Token {
    /// Diagnostic name for this token's kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Newline => "NEWLINE",
            Token::Whitespace(_) => "WHITESPACE",
            Token::Tag(_) => "TAG",
            Token::Text(_) => "TEXT",
        }
    }

    /// The matched text for this token.
    pub fn text(&self) -> &str {
        match self {
            Token::Newline => "\n",
            Token::Whitespace(text) | Token::Tag(text) | Token::Text(text) => text,
        }
    }
}

/// Lines that count as a line break by themselves when tokenized.
pub const DELIMITER_LINES: &[&str] = &["/**", "*", "*/"];

/// Check if a trimmed line is a bare comment delimiter.
pub fn is_delimiter_line(line: &str) -> bool {
    DELIMITER_LINES.contains(&line)
}
