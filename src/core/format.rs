//! # Answer Formatter
//!
//! Turns the model's answer into display nodes. Only a small markdown subset
//! is recognised; everything else is plain paragraph text.
//!
//! ```text
//! "### Title\n- one\n- two\nPlain *text*."
//!        │
//!        ▼
//! [Heading(3, "Title"), List(["one", "two"]), Paragraph("Plain ", Em("text"), ".")]
//! ```
//!
//! Block markers (`## `, `### `, `* `, `- `) are matched on the trimmed line.
//! Inline markers (`**bold**`, `*italic*`) are scanned left to right with
//! bold tried first at each position, and never nest.

/// An inline run of text inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(String),
    Emphasis(String),
}

/// A block-level display node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, content: Vec<Inline> },
    /// Unordered list; one `Vec<Inline>` per item.
    List(Vec<Vec<Inline>>),
    Paragraph(Vec<Inline>),
}

const H3_MARKER: &str = "### ";
const H2_MARKER: &str = "## ";
const LIST_MARKERS: [&str; 2] = ["* ", "- "];

fn is_list_line(trimmed: &str) -> bool {
    LIST_MARKERS.iter().any(|m| trimmed.starts_with(m))
}

/// Format a full answer into blocks.
pub fn format_text(text: &str) -> Vec<Block> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix(H3_MARKER) {
            blocks.push(Block::Heading {
                level: 3,
                content: parse_inline(rest),
            });
            i += 1;
        } else if let Some(rest) = trimmed.strip_prefix(H2_MARKER) {
            blocks.push(Block::Heading {
                level: 2,
                content: parse_inline(rest),
            });
            i += 1;
        } else if is_list_line(trimmed) {
            let mut items = Vec::new();
            while i < lines.len() && is_list_line(lines[i].trim()) {
                // Both markers are two ASCII bytes.
                items.push(parse_inline(&lines[i].trim()[2..]));
                i += 1;
            }
            blocks.push(Block::List(items));
        } else if !trimmed.is_empty() {
            blocks.push(Block::Paragraph(parse_inline(line)));
            i += 1;
        } else {
            i += 1;
        }
    }

    blocks
}

/// Characters a regex `.` refuses to match.
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Try `delim inner delim` at `pos`, taking the first closing delimiter.
/// Returns `(inner_end, match_end)` as byte offsets.
fn match_delimited(text: &str, pos: usize, delim: &str) -> Option<(usize, usize)> {
    if !text[pos..].starts_with(delim) {
        return None;
    }
    let inner_start = pos + delim.len();
    let rest = &text[inner_start..];
    let searchable = match rest.find(is_line_terminator) {
        Some(end) => &rest[..end],
        None => rest,
    };
    searchable.find(delim).map(|offset| {
        let inner_end = inner_start + offset;
        (inner_end, inner_end + delim.len())
    })
}

/// Split a fragment into plain, strong and emphasis runs.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut last = 0;
    let mut pos = 0;

    while let Some(offset) = text[pos..].find('*') {
        let start = pos + offset;

        let matched = if let Some((inner_end, end)) = match_delimited(text, start, "**") {
            Some((Inline::Strong(text[start + 2..inner_end].to_string()), end))
        } else {
            match_delimited(text, start, "*")
                .map(|(inner_end, end)| (Inline::Emphasis(text[start + 1..inner_end].to_string()), end))
        };

        match matched {
            Some((node, end)) => {
                if start > last {
                    out.push(Inline::Text(text[last..start].to_string()));
                }
                out.push(node);
                last = end;
                pos = end;
            }
            None => pos = start + 1,
        }
    }

    if last < text.len() {
        out.push(Inline::Text(text[last..].to_string()));
    }

    out
}
