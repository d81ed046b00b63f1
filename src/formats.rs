//! Output formats for parsed documents
//!
//! - `tag` - XML-like tag serialization
//! - `treeviz` - box-drawing tree view
//!
//! JSON and YAML output go straight through serde; see the [processor](crate::processor).

pub mod tag;
pub mod treeviz;

pub use tag::serialize_document as serialize_ast_tag;
pub use treeviz::to_treeviz_str;
