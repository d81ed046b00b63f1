//! XML-like AST tag serialization
//!
//! Serializes a parsed document to an XML-like format that mirrors the tree one tag per node.
//! It is meant for inspecting and snapshotting parser output, not as an interchange format.
//!
//! ## Format
//!
//! - Node kind → tag name
//! - Scalar attributes (level, indent, href, ...) → tag attributes
//! - Nodes with children open a tag, nest their children two spaces deeper, then close it
//! - Childless nodes are written on one line, with their content as text when they have any
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <header level="1">
//!     <text>Welcome</text>
//!   </header>
//!   <list>
//!     <item>
//!       <text>First</text>
//!       <list indent="2">
//!         <item indent="2">
//!           <text>Nested</text>
//!         </item>
//!       </list>
//!     </item>
//!   </list>
//! </document>
//! ```

use crate::ast::{walk, Node, NodeKind, Visitor};

/// Serialize a document (or any subtree) to AST tag format
pub fn serialize_document(doc: &Node) -> String {
    let mut serializer = TagSerializer::default();
    walk(doc, &mut serializer);
    serializer.output
}

#[derive(Default)]
struct TagSerializer {
    output: String,
}

impl Visitor for TagSerializer {
    fn visit(&mut self, node: &Node, depth: usize) {
        let indent = "  ".repeat(depth);
        let tag = tag_name(node.kind);
        let attributes = attributes(node);

        if !node.children.is_empty() {
            self.output
                .push_str(&format!("{}<{}{}>\n", indent, tag, attributes));
        } else if has_text(node) && !node.content.is_empty() {
            self.output.push_str(&format!(
                "{}<{}{}>{}</{}>\n",
                indent,
                tag,
                attributes,
                escape_xml(&node.content),
                tag
            ));
        } else {
            self.output
                .push_str(&format!("{}<{}{}/>\n", indent, tag, attributes));
        }
    }

    fn leave(&mut self, node: &Node, depth: usize) {
        if !node.children.is_empty() {
            let indent = "  ".repeat(depth);
            self.output
                .push_str(&format!("{}</{}>\n", indent, tag_name(node.kind)));
        }
    }
}

fn tag_name(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Document => "document",
        NodeKind::Header => "header",
        NodeKind::Paragraph => "paragraph",
        NodeKind::List => "list",
        NodeKind::ListItem => "item",
        NodeKind::CodeBlock => "code",
        NodeKind::HorizontalRule => "rule",
        NodeKind::Table => "table",
        NodeKind::TableRow => "row",
        NodeKind::TableCell => "cell",
        NodeKind::Text => "text",
        NodeKind::Emphasis => "emphasis",
        NodeKind::Strong => "strong",
        NodeKind::Link => "link",
        NodeKind::Image => "image",
    }
}

/// Kinds whose content is written as tag text when they have no children
fn has_text(node: &Node) -> bool {
    matches!(
        node.kind,
        NodeKind::Text | NodeKind::CodeBlock | NodeKind::TableCell
    )
}

fn attributes(node: &Node) -> String {
    let mut attrs: Vec<(&str, String)> = Vec::new();
    if node.kind == NodeKind::Header {
        attrs.push(("level", node.level.to_string()));
    }
    if matches!(node.kind, NodeKind::List | NodeKind::ListItem) && node.indent > 0 {
        attrs.push(("indent", node.indent.to_string()));
    }
    if let Some(ordinal) = node.ordinal {
        attrs.push(("number", ordinal.to_string()));
    }
    if let Some(info) = &node.info {
        attrs.push(("info", info.clone()));
    }
    match node.kind {
        NodeKind::Link => {
            attrs.push(("href", node.link.clone().unwrap_or_default()));
        }
        NodeKind::Image => {
            attrs.push(("src", node.link.clone().unwrap_or_default()));
            attrs.push(("alt", node.alt.clone().unwrap_or_default()));
        }
        _ => {}
    }

    attrs
        .into_iter()
        .map(|(key, value)| format!(" {}=\"{}\"", key, escape_xml(&value)))
        .collect()
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
