use std::sync::LazyLock;

use regex::Regex;

use crate::block::{Block, ListKind};

/// `1. `, `42.\t`, ... at the start of a line
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s").expect("valid ordered item pattern"));

/// Line terminators: `\r\n` first so it counts as one break, then every
/// single-character break (CR, LF, VT, FF, FS, GS, RS, NEL, LS, PS)
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]")
        .expect("valid line break pattern")
});

/// Split text into lines. A terminator at the very end does not start an
/// extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK.split(text).collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Parse markdown text into one block per line
pub fn parse(markdown: &str) -> Vec<Block<'_>> {
    split_lines(markdown).into_iter().map(classify).collect()
}

/// Classify a single line. Trailing whitespace is ignored; the first
/// matching rule wins.
pub fn classify(line: &str) -> Block<'_> {
    let line = line.trim_end();

    if line.is_empty() {
        return Block::Blank;
    }

    // Longest heading prefix first so `### ` is not taken for `# `
    for (prefix, level) in [("### ", 3), ("## ", 2), ("# ", 1)] {
        if let Some(text) = line.strip_prefix(prefix) {
            return Block::Heading { level, text };
        }
    }

    if let Some(text) = line.strip_prefix("> ") {
        return Block::Blockquote { text };
    }

    if let Some(marker) = ORDERED_ITEM.find(line) {
        return Block::ListItem {
            kind: ListKind::Ordered,
            text: &line[marker.end()..],
        };
    }

    if let Some(text) = line.strip_prefix("- ") {
        return Block::ListItem {
            kind: ListKind::Unordered,
            text,
        };
    }

    if line.starts_with("![") {
        Block::ImageParagraph { line }
    } else {
        Block::Paragraph { text: line }
    }
}
