//! List assembly
//!
//! Consecutive list-item tokens form one list. Nesting follows indentation: the parser keeps a
//! stack of open lists, the bottom one being the top-level list. When the token after an item is
//! a list item indented further than that item, a fresh list is opened for it; once it has been
//! filled it ends up as the last child of that item. An item indented less than the innermost
//! open list closes lists until one fits.

use super::inline::parse_inline;
use super::parser::Parser;
use crate::ast::{Node, NodeKind};

impl Parser<'_> {
    /// Assemble the list starting at the current token.
    ///
    /// On return `current` is the last list item consumed; the caller's usual advance moves past
    /// it.
    pub(super) fn parse_list(&mut self) -> Node {
        let mut open = vec![Node::new(NodeKind::List).with_indent(self.current.indent)];

        loop {
            let item = self.build_list_item();

            while open.len() > 1 && open.last().is_some_and(|list| list.indent > item.indent) {
                close_innermost(&mut open);
            }
            if let Some(list) = open.last_mut() {
                list.children.push(item);
            }

            if !self.next.is_list_item() {
                break;
            }
            if self.next.indent > self.current.indent {
                open.push(Node::new(NodeKind::List).with_indent(self.next.indent));
            }
            self.advance();
        }

        while open.len() > 1 {
            close_innermost(&mut open);
        }
        open.pop().unwrap_or_else(|| Node::new(NodeKind::List))
    }

    fn build_list_item(&self) -> Node {
        let content = &self.current.content;
        Node::new(NodeKind::ListItem)
            .with_indent(self.current.indent)
            .with_ordinal(self.current.ordinal)
            .with_content(content.as_str())
            .with_children(parse_inline(content))
    }
}

/// Pop the innermost open list and attach it to the last item of the list below it
fn close_innermost(open: &mut Vec<Node>) {
    if let Some(list) = open.pop() {
        if let Some(owner) = open.last_mut().and_then(|parent| parent.children.last_mut()) {
            owner.children.push(list);
        }
    }
}
