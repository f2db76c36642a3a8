//! Document JSON builders
//!
//! Produce wire-format JSON directly so tests can feed documents through the
//! deserializer exactly as the CMS would.

use serde_json::{Value, json};

/// `{"type": "text", ...}` node
pub fn text_json(text: &str, format: u32) -> Value {
    json!({ "type": "text", "text": text, "format": format })
}

/// Paragraph holding one plain text node
pub fn paragraph_json(text: &str) -> Value {
    json!({ "type": "paragraph", "children": [text_json(text, 0)] })
}

/// A flat document of plain paragraphs, serialized
pub fn paragraphs_document_json(paragraphs: &[&str]) -> String {
    let children: Vec<Value> = paragraphs.iter().map(|p| paragraph_json(p)).collect();
    json!({ "root": { "type": "root", "children": children } }).to_string()
}
