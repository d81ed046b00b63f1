//! AST definitions for parsed markdown documents
//!
//! ## Modules
//!
//! - `node` - The [`Node`] type and its [`NodeKind`] tag
//! - `traits` - Common interfaces for uniform node access
//! - `visitor` - Pre-order traversal used by the serializers

pub mod node;
pub mod traits;
pub mod visitor;

pub use node::{Node, NodeKind};
pub use traits::AstNode;
pub use visitor::{walk, Visitor};
