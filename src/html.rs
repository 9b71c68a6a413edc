use crate::block::{Block, ListKind};
use crate::inline::{escape_inline, substitute_images};

/// Convert blocks to an HTML fragment, one output line per block plus
/// list container tags.
pub fn blocks_to_html(blocks: &[Block]) -> String {
    let mut lines = Vec::with_capacity(blocks.len());
    let mut open_list: Option<ListKind> = None;

    for block in blocks {
        // Any block other than an item of the open list's kind ends the run
        if open_list.is_some() && open_list != block.list_kind() {
            close_list(&mut open_list, &mut lines);
        }
        emit_block(block, &mut open_list, &mut lines);
    }

    close_list(&mut open_list, &mut lines);

    lines.join("\n")
}

fn emit_block(block: &Block, open_list: &mut Option<ListKind>, lines: &mut Vec<String>) {
    match block {
        Block::Blank => lines.push(String::new()),
        Block::Heading { level, text } => {
            lines.push(format!("<h{level}>{}</h{level}>", escape_inline(text)));
        }
        Block::Blockquote { text } => {
            lines.push(format!("<blockquote>{}</blockquote>", escape_inline(text)));
        }
        Block::ListItem { kind, text } => {
            if open_list.is_none() {
                lines.push(kind.open_tag().to_string());
                *open_list = Some(*kind);
            }
            lines.push(format!("  <li>{}</li>", escape_inline(text)));
        }
        // Only images are substituted here; the rest of the line is left raw
        Block::ImageParagraph { line } => lines.push(substitute_images(line)),
        Block::Paragraph { text } => {
            lines.push(format!("<p>{}</p>", escape_inline(text)));
        }
    }
}

fn close_list(open_list: &mut Option<ListKind>, lines: &mut Vec<String>) {
    if let Some(kind) = open_list.take() {
        lines.push(kind.close_tag().to_string());
    }
}
