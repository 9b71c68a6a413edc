/// Which kind of list container an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    pub fn open_tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "<ol>",
            ListKind::Unordered => "<ul>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "</ol>",
            ListKind::Unordered => "</ul>",
        }
    }
}

/// Block-level elements classified from a single Markdown line.
///
/// Text payloads borrow from the source line with the block prefix
/// (`## `, `> `, `1. `, ...) already removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Heading { level: u8, text: &'a str },
    Blockquote { text: &'a str },
    ListItem { kind: ListKind, text: &'a str },
    /// A line starting with `![`, rendered with image substitution only
    ImageParagraph { line: &'a str },
    Paragraph { text: &'a str },
    Blank,
}

impl Block<'_> {
    /// The list container this block needs open, if any.
    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            Block::ListItem { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
