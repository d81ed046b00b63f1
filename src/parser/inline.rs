//! Inline scanner
//!
//! Recognizes strong (`**…**`), emphasis (`*…*`), links (`[label](url)`) and images
//! (`![alt](url)`) inside block text. The scan is a single left-to-right pass that keeps the
//! start of the current literal run; the run becomes a [`NodeKind::Text`] node only when a
//! delimiter actually matches, or at the end of input. A delimiter without its closing
//! counterpart is simply left in the run, so malformed markup degrades to literal text.
//!
//! The inner text of strong, emphasis and link spans is scanned again recursively. Each
//! recursive call receives a strict substring of its caller's input, so recursion is bounded by
//! the input length. Image alt text is kept literal.
//!
//! Positions are byte offsets. Every delimiter is ASCII, so slicing at a delimiter always lands
//! on a character boundary.

use crate::ast::{Node, NodeKind};

/// A matched span: the node it produces and the byte offset just past it
type Span = (Node, usize);

/// Parse inline nodes from a block's text
pub fn parse_inline(text: &str) -> Vec<Node> {
    let bytes = text.as_bytes();
    let mut nodes = Vec::new();
    let mut run_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let matched = match bytes[i] {
            b'*' if bytes.get(i + 1) == Some(&b'*') => match strong_at(text, i) {
                Some(span) => Some(span),
                None => {
                    // Unclosed "**": both asterisks stay literal
                    i += 2;
                    continue;
                }
            },
            b'*' => emphasis_at(text, i),
            b'[' => link_at(text, i),
            b'!' if bytes.get(i + 1) == Some(&b'[') => image_at(text, i),
            _ => None,
        };

        match matched {
            Some((node, end)) => {
                flush_text(&text[run_start..i], &mut nodes);
                nodes.push(node);
                i = end;
                run_start = end;
            }
            None => i += 1,
        }
    }

    flush_text(&text[run_start..], &mut nodes);
    nodes
}

fn flush_text(run: &str, nodes: &mut Vec<Node>) {
    if !run.is_empty() {
        nodes.push(Node::text(run));
    }
}

/// `**inner**` starting at `start`
fn strong_at(text: &str, start: usize) -> Option<Span> {
    let inner_start = start + 2;
    let close = inner_start + text[inner_start..].find("**")?;
    let inner = &text[inner_start..close];
    let node = Node::new(NodeKind::Strong)
        .with_content(inner)
        .with_children(parse_inline(inner));
    Some((node, close + 2))
}

/// `*inner*` starting at `start`
fn emphasis_at(text: &str, start: usize) -> Option<Span> {
    let inner_start = start + 1;
    let close = inner_start + text[inner_start..].find('*')?;
    let inner = &text[inner_start..close];
    let node = Node::new(NodeKind::Emphasis)
        .with_content(inner)
        .with_children(parse_inline(inner));
    Some((node, close + 1))
}

/// `[label](url)` starting at `start`
fn link_at(text: &str, start: usize) -> Option<Span> {
    let (label, url, end) = bracket_then_paren(text, start)?;
    let node = Node::new(NodeKind::Link)
        .with_content(label)
        .with_link(url)
        .with_children(parse_inline(label));
    Some((node, end))
}

/// `![alt](url)` starting at `start`
fn image_at(text: &str, start: usize) -> Option<Span> {
    let (alt, url, end) = bracket_then_paren(text, start + 1)?;
    let node = Node::new(NodeKind::Image)
        .with_content(alt)
        .with_alt(alt)
        .with_link(url);
    Some((node, end))
}

/// Match `[label](target)` where `open` points at the `[`.
///
/// The label ends at the first `]`, which must be followed immediately by `(`; the target ends
/// at the first `)` after that.
fn bracket_then_paren(text: &str, open: usize) -> Option<(&str, &str, usize)> {
    let label_start = open + 1;
    let label_end = label_start + text[label_start..].find(']')?;
    if text.as_bytes().get(label_end + 1) != Some(&b'(') {
        return None;
    }
    let target_start = label_end + 2;
    let target_end = target_start + text[target_start..].find(')')?;
    Some((
        &text[label_start..label_end],
        &text[target_start..target_end],
        target_end + 1,
    ))
}
