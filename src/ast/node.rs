//! AST node definitions
//!
//! The tree is made of a single [`Node`] type tagged with a [`NodeKind`]. Every node owns its
//! children outright; there are no parent pointers and no sharing between branches.
//!
//! Attribute usage by kind:
//!
//! | kind           | content              | other attributes            |
//! |----------------|----------------------|-----------------------------|
//! | Header         | heading text         | `level`                     |
//! | Paragraph      | raw paragraph text   |                             |
//! | List           |                      | `indent` of its items       |
//! | ListItem       | raw item text        | `indent`, `ordinal`         |
//! | CodeBlock      | verbatim code        | `info`                      |
//! | TableCell      | trimmed cell text    |                             |
//! | Text           | literal text         |                             |
//! | Emphasis/Strong| inner raw text       |                             |
//! | Link           | label                | `link`                      |
//! | Image          | alt text             | `link`, `alt`               |

use serde::Serialize;
use std::fmt;

use super::traits::AstNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Document,
    Header,
    Paragraph,
    List,
    ListItem,
    CodeBlock,
    HorizontalRule,
    Table,
    TableRow,
    TableCell,
    Text,
    Emphasis,
    Strong,
    Link,
    Image,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Header => "Header",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::List => "List",
            NodeKind::ListItem => "ListItem",
            NodeKind::CodeBlock => "CodeBlock",
            NodeKind::HorizontalRule => "HorizontalRule",
            NodeKind::Table => "Table",
            NodeKind::TableRow => "TableRow",
            NodeKind::TableCell => "TableCell",
            NodeKind::Text => "Text",
            NodeKind::Emphasis => "Emphasis",
            NodeKind::Strong => "Strong",
            NodeKind::Link => "Link",
            NodeKind::Image => "Image",
        }
    }

    /// Inline kinds are produced by the inline scanner rather than the block parser
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            NodeKind::Text | NodeKind::Emphasis | NodeKind::Strong | NodeKind::Link | NodeKind::Image
        )
    }

    /// Kinds that never own children
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            NodeKind::Text
                | NodeKind::Image
                | NodeKind::CodeBlock
                | NodeKind::HorizontalRule
                | NodeKind::TableCell
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub level: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub indent: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

fn is_zero(value: &usize) -> bool {
    *value == 0
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            content: String::new(),
            level: 0,
            indent: 0,
            link: None,
            alt: None,
            ordinal: None,
            info: None,
            children: Vec::new(),
        }
    }

    pub fn document(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Document).with_children(children)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Text).with_content(content)
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_ordinal(mut self, ordinal: Option<u64>) -> Self {
        self.ordinal = ordinal;
        self
    }

    pub fn with_info(mut self, info: Option<String>) -> Self {
        self.info = info;
        self
    }

    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind == kind
    }

    pub fn children_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(move |child| child.kind == kind)
    }

    /// The nested list owned by a list item, if it has one
    pub fn sublist(&self) -> Option<&Node> {
        match self.kind {
            NodeKind::ListItem => self.children_of_kind(NodeKind::List).next(),
            _ => None,
        }
    }

    /// Plain text of this node with all inline markup removed.
    ///
    /// Text and cells give their content, images their alt text, and containers the
    /// concatenated plain text of their inline children. Nested lists under a list item are not
    /// part of the item's text.
    pub fn plain_text(&self) -> String {
        match self.kind {
            NodeKind::Text | NodeKind::TableCell | NodeKind::CodeBlock => self.content.clone(),
            NodeKind::Image => self.alt.clone().unwrap_or_default(),
            _ => self
                .children
                .iter()
                .filter(|child| child.kind.is_inline())
                .map(Node::plain_text)
                .collect(),
        }
    }

    /// Total number of nodes in this subtree, this one included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        self.kind.name()
    }

    fn display_label(&self) -> String {
        match self.kind {
            NodeKind::Document => format!("{} blocks", self.children.len()),
            NodeKind::Header => format!("h{} {}", self.level, self.content),
            NodeKind::List => format!("{} items", self.children_of_kind(NodeKind::ListItem).count()),
            NodeKind::Table => format!("{} rows", self.children.len()),
            NodeKind::TableRow => format!("{} cells", self.children.len()),
            NodeKind::HorizontalRule => "---".to_string(),
            NodeKind::Link => format!(
                "{} -> {}",
                self.content,
                self.link.as_deref().unwrap_or_default()
            ),
            NodeKind::Image => format!(
                "{} -> {}",
                self.alt.as_deref().unwrap_or_default(),
                self.link.as_deref().unwrap_or_default()
            ),
            _ => self.content.replace('\n', "\\n"),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NodeKind::Document | NodeKind::List | NodeKind::Table | NodeKind::TableRow => {
                write!(f, "{}({} children)", self.kind, self.children.len())
            }
            _ => write!(f, "{}('{}')", self.kind, self.display_label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let link = Node::new(NodeKind::Link)
            .with_content("home")
            .with_link("https://example.com")
            .with_children(vec![Node::text("home")]);
        assert!(link.is(NodeKind::Link));
        assert_eq!(link.link.as_deref(), Some("https://example.com"));
        assert_eq!(link.children.len(), 1);
        assert_eq!(link.node_count(), 2);
    }

    #[test]
    fn test_plain_text_strips_markup() {
        let paragraph = Node::new(NodeKind::Paragraph).with_children(vec![
            Node::text("a "),
            Node::new(NodeKind::Strong).with_children(vec![Node::text("bold")]),
            Node::text(" "),
            Node::new(NodeKind::Image).with_alt("pic").with_link("p.png"),
        ]);
        assert_eq!(paragraph.plain_text(), "a bold pic");
    }

    #[test]
    fn test_plain_text_skips_sublists() {
        let item = Node::new(NodeKind::ListItem).with_children(vec![
            Node::text("outer"),
            Node::new(NodeKind::List).with_children(vec![
                Node::new(NodeKind::ListItem).with_children(vec![Node::text("inner")])
            ]),
        ]);
        assert_eq!(item.plain_text(), "outer");
        assert!(item.sublist().is_some());
    }

    #[test]
    fn test_display_labels() {
        let header = Node::new(NodeKind::Header).with_level(2).with_content("Intro");
        assert_eq!(header.display_label(), "h2 Intro");
        assert_eq!(header.to_string(), "Header('h2 Intro')");

        let list = Node::new(NodeKind::List).with_children(vec![
            Node::new(NodeKind::ListItem),
            Node::new(NodeKind::ListItem),
        ]);
        assert_eq!(list.display_label(), "2 items");
        assert_eq!(list.to_string(), "List(2 children)");
    }

    #[test]
    fn test_kind_classification() {
        assert!(NodeKind::Strong.is_inline());
        assert!(!NodeKind::Paragraph.is_inline());
        assert!(NodeKind::Image.is_leaf());
        assert!(!NodeKind::Link.is_leaf());
    }

    #[test]
    fn test_serialize_skips_empty_attributes() {
        let node = Node::text("hi");
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"kind":"Text","content":"hi"}"#);
    }
}
