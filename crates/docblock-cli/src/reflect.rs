//! File-backed comment source.
//!
//! Scans source text line by line for the `/** ... */` block sitting
//! directly above a member declaration. Works for the doc-block languages
//! this tool gets pointed at (PHP, JS, Java-style sources); anything it
//! cannot locate is reported as not found.

use docblock_parser::CommentSource;

/// Declaration keywords that introduce an owner scope.
const OWNER_KEYWORDS: &[&str] = &["class", "struct", "impl", "trait", "interface"];

/// Declaration keywords that introduce a member.
const MEMBER_KEYWORDS: &[&str] = &["function", "fn"];

/// A source file searched for doc comments by declaration.
pub struct FileSource {
    lines: Vec<String>,
}

impl FileSource {
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    /// Index of the first line at or after `from` for which `matches` holds.
    fn position(&self, from: usize, matches: impl Fn(&str) -> bool) -> Option<usize> {
        self.lines[from..]
            .iter()
            .position(|line| matches(line))
            .map(|offset| from + offset)
    }

    /// The `/** ... */` block ending on the line directly above `decl`,
    /// in source order.
    fn block_above(&self, decl: usize) -> Option<String> {
        let end = decl.checked_sub(1)?;
        if !self.lines[end].trim().ends_with("*/") {
            return None;
        }

        let mut start = end;
        while !self.lines[start].trim().starts_with("/**") {
            start = start.checked_sub(1)?;
        }

        Some(self.lines[start..=end].join("\n"))
    }
}

impl CommentSource for FileSource {
    fn doc_comment(&self, owner: &str, member: &str) -> Option<String> {
        let owner_line = self.position(0, |line| declares(line, OWNER_KEYWORDS, owner))?;
        let member_line =
            self.position(owner_line, |line| declares(line, MEMBER_KEYWORDS, member))?;

        // A declared member with no block above it is documented as empty.
        Some(self.block_above(member_line).unwrap_or_default())
    }
}

/// Check if `line` declares `name` with one of `keywords`, e.g.
/// `public function save()` or `fn save(&self)`.
fn declares(line: &str, keywords: &[&str], name: &str) -> bool {
    let words: Vec<&str> = line
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|word| !word.is_empty())
        .collect();

    words
        .windows(2)
        .any(|pair| keywords.contains(&pair[0]) && pair[1] == name)
}
