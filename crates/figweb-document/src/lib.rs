//! figweb document model
//!
//! Reads a design-tool export into a typed node tree. The export is JSON,
//! optionally embedded in surrounding text and introduced by the root node's
//! id (see [`payload`]).
//!
//! # Example
//!
//! ```
//! use figweb_document::{Document, Node};
//!
//! let doc = Document::parse(r#"{"type":"VECTOR"}"#).unwrap();
//! assert_eq!(doc.root, Node::Vector);
//! ```

pub mod node;
pub mod payload;

pub use node::{
    Bounds, Color, FontName, FrameNode, LayoutMode, Measure, Node, Paint, ShapeNode, TextNode,
};
pub use payload::DEFAULT_ROOT_ID;

use serde::Deserialize;

/// Error reading a design payload.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DocumentError {
    #[error("No design payload with root id \"{root_id}\" found")]
    PayloadNotFound { root_id: String },

    #[error("Malformed design payload at line {line}, column {column}: {message}")]
    Malformed {
        message: String,
        line: usize,
        column: usize,
    },
}

impl From<serde_json::Error> for DocumentError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json appends the position to its Display output; keep the bare message.
        let full = e.to_string();
        let message = match full.rfind(" at line ") {
            Some(idx) if e.line() > 0 => full[..idx].to_string(),
            _ => full,
        };
        DocumentError::Malformed {
            message,
            line: e.line(),
            column: e.column(),
        }
    }
}

/// A parsed design document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: Node,
}

impl Document {
    /// Parse a JSON payload whose first value is the root node.
    ///
    /// Text after the root object is ignored.
    pub fn parse(json: &str) -> Result<Document, DocumentError> {
        let mut de = serde_json::Deserializer::from_str(json);
        let root = Node::deserialize(&mut de)?;
        Ok(Document { root })
    }

    /// Locate the payload for `root_id` inside `text` and parse it.
    pub fn from_text(text: &str, root_id: &str) -> Result<Document, DocumentError> {
        Document::parse(payload::locate(text, root_id)?)
    }
}
