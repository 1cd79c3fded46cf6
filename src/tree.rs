//! In-memory element tree produced by the parser

pub mod attribute;
pub mod document;
pub mod node;

pub use attribute::{Attribute, AttributeList};
pub use document::Document;
pub use node::Node;
