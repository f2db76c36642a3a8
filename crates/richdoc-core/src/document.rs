//! Structured rich-text document model
//!
//! The wire shape follows the headless CMS's Lexical-style JSON:
//!
//! ```text
//! { "root": { "type": "root", "children": [ <BlockNode>... ] } }
//! BlockNode: { "type": "paragraph", "children": [ <InlineNode>... ] }
//! TextNode:  { "type": "text", "text": "...", "format": <bitmask> }
//! ```
//!
//! Deserialization is tolerant: missing or `null` fields decode to their
//! empty defaults, unknown node types decode to `Unknown`, and extra fields
//! are ignored.

use crate::error::{Result, RichdocError};
use crate::format::TextFormat;
use serde::{Deserialize, Deserializer, Serialize};

/// Decodes `null` as `T::default()` (pair with `#[serde(default)]` for missing fields)
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A complete rich-text document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "nullable")]
    pub root: Root,
}

/// Tree entry point; always serialized with `"type": "root"`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "root")]
pub struct Root {
    #[serde(default, deserialize_with = "nullable")]
    pub children: Vec<BlockNode>,
}

/// Structural (block-level) node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockNode {
    Paragraph(Paragraph),
    Heading(Heading),
    List(List),
    Table(Table),
    Image(Image),
    Link(Link),
    #[serde(other)]
    Unknown,
}

/// Inline node inside a block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InlineNode {
    Text(TextNode),
    Link(Link),
    LineBreak,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default, deserialize_with = "nullable")]
    pub children: Vec<InlineNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    #[serde(default = "default_heading_level", deserialize_with = "heading_level")]
    pub level: u8,
    #[serde(default, deserialize_with = "nullable")]
    pub children: Vec<InlineNode>,
}

fn default_heading_level() -> u8 {
    1
}

/// Clamps into 1..=6; unreadable values fall back to 1
fn heading_level<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let level = raw.as_ref().and_then(serde_json::Value::as_u64).unwrap_or(1);
    Ok(level.clamp(1, 6) as u8)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct List {
    #[serde(default, deserialize_with = "nullable")]
    pub ordered: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub children: Vec<ListItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "listitem")]
pub struct ListItem {
    /// Nesting depth; 0 for top-level items
    #[serde(default, deserialize_with = "nullable")]
    pub indent: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub children: Vec<InlineNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default, deserialize_with = "nullable")]
    pub children: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "row")]
pub struct TableRow {
    #[serde(default, deserialize_with = "nullable")]
    pub children: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "cell")]
pub struct TableCell {
    /// Source cell was a `<th>`
    #[serde(default, deserialize_with = "nullable")]
    pub header: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub children: Vec<InlineNode>,
}

/// Leaf image block; attributes are carried verbatim
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, deserialize_with = "nullable")]
    pub src: String,
    #[serde(default, deserialize_with = "nullable")]
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub children: Vec<InlineNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    #[serde(default, deserialize_with = "nullable")]
    pub text: String,
    #[serde(default)]
    pub format: TextFormat,
}

impl TextNode {
    pub fn new(text: impl Into<String>, format: TextFormat) -> Self {
        Self {
            text: text.into(),
            format,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextFormat::PLAIN)
    }
}

impl Document {
    /// Wraps block nodes into a document
    pub fn new(children: Vec<BlockNode>) -> Self {
        Self {
            root: Root { children },
        }
    }

    /// The canonical "empty content" document: exactly one empty paragraph
    pub fn empty() -> Self {
        Self::new(vec![BlockNode::Paragraph(Paragraph::default())])
    }

    /// Parses document JSON (tolerant of missing fields and unknown node types)
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RichdocError::DocumentJsonInvalid(e.to_string()))
    }

    /// Serializes to document JSON
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn children(&self) -> &[BlockNode] {
        &self.root.children
    }

    /// True when the document holds no visible text and no images
    pub fn is_blank(&self) -> bool {
        self.root.children.iter().all(|block| match block {
            BlockNode::Image(_) => false,
            other => other.plain_text().trim().is_empty(),
        })
    }

    /// Visible text of every block, one block per line
    pub fn plain_text(&self) -> String {
        self.root
            .children
            .iter()
            .map(BlockNode::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl BlockNode {
    /// Paragraph holding a single plain text run
    pub fn paragraph(text: impl Into<String>) -> Self {
        BlockNode::Paragraph(Paragraph {
            children: vec![InlineNode::Text(TextNode::plain(text))],
        })
    }

    /// Node type name as it appears on the wire
    pub fn type_name(&self) -> &'static str {
        match self {
            BlockNode::Paragraph(_) => "paragraph",
            BlockNode::Heading(_) => "heading",
            BlockNode::List(_) => "list",
            BlockNode::Table(_) => "table",
            BlockNode::Image(_) => "image",
            BlockNode::Link(_) => "link",
            BlockNode::Unknown => "unknown",
        }
    }

    /// Concatenated text content, formatting ignored
    ///
    /// List items and table rows are separated by newlines, table cells by
    /// ` | `.
    pub fn plain_text(&self) -> String {
        match self {
            BlockNode::Paragraph(p) => inline_text(&p.children),
            BlockNode::Heading(h) => inline_text(&h.children),
            BlockNode::Link(link) => inline_text(&link.children),
            BlockNode::List(list) => list
                .children
                .iter()
                .map(|item| inline_text(&item.children))
                .collect::<Vec<_>>()
                .join("\n"),
            BlockNode::Table(table) => table
                .children
                .iter()
                .map(TableRow::plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
            BlockNode::Image(_) | BlockNode::Unknown => String::new(),
        }
    }
}

impl TableRow {
    pub fn plain_text(&self) -> String {
        self.children
            .iter()
            .map(|cell| inline_text(&cell.children))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Concatenates the `text` of every inline node (line breaks become `\n`)
pub fn inline_text(nodes: &[InlineNode]) -> String {
    let mut text = String::new();
    for node in nodes {
        match node {
            InlineNode::Text(t) => text.push_str(&t.text),
            InlineNode::Link(link) => text.push_str(&inline_text(&link.children)),
            InlineNode::LineBreak => text.push('\n'),
            InlineNode::Unknown => {}
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_has_one_empty_paragraph() {
        let doc = Document::empty();
        assert_eq!(doc.children().len(), 1);
        assert_eq!(doc.children()[0], BlockNode::Paragraph(Paragraph::default()));
        assert!(doc.is_blank());
    }

    #[test]
    fn test_blank_ignores_whitespace_but_not_images() {
        let spaces = Document::new(vec![BlockNode::paragraph(" \u{a0}"), BlockNode::paragraph("")]);
        assert!(spaces.is_blank());

        let image = Document::new(vec![BlockNode::Image(Image {
            src: "/a.png".to_string(),
            alt: String::new(),
        })]);
        assert!(!image.is_blank());
        assert!(!Document::new(vec![BlockNode::paragraph("x")]).is_blank());
    }

    #[test]
    fn test_serializes_wire_shape() {
        let doc = Document::new(vec![BlockNode::Paragraph(Paragraph {
            children: vec![InlineNode::Text(TextNode::new("Hi", TextFormat::BOLD))],
        })]);

        let value: serde_json::Value = serde_json::from_str(&doc.to_json(false).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "root": {
                    "type": "root",
                    "children": [
                        {
                            "type": "paragraph",
                            "children": [
                                { "type": "text", "text": "Hi", "format": 1 }
                            ]
                        }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_nested_nodes_carry_type_tags() {
        let doc = Document::new(vec![BlockNode::Table(Table {
            children: vec![TableRow {
                children: vec![TableCell {
                    header: true,
                    children: vec![InlineNode::Text(TextNode::plain("A"))],
                }],
            }],
        })]);

        let value: serde_json::Value = serde_json::from_str(&doc.to_json(false).unwrap()).unwrap();
        let row = &value["root"]["children"][0]["children"][0];
        assert_eq!(row["type"], "row");
        assert_eq!(row["children"][0]["type"], "cell");
        assert_eq!(row["children"][0]["header"], true);
    }

    #[test]
    fn test_tolerates_missing_and_null_fields() {
        let json = r#"{
            "root": {
                "type": "root",
                "children": [
                    { "type": "paragraph", "children": [ { "type": "text" } ] },
                    { "type": "paragraph", "children": null },
                    { "type": "heading", "level": 9, "children": [ { "type": "text", "text": null, "format": null } ] },
                    { "type": "image" }
                ]
            }
        }"#;

        let doc = Document::from_json(json).unwrap();
        assert_eq!(doc.children().len(), 4);

        let BlockNode::Paragraph(p) = &doc.children()[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(p.children, vec![InlineNode::Text(TextNode::plain(""))]);

        let BlockNode::Heading(h) = &doc.children()[2] else {
            panic!("expected heading");
        };
        assert_eq!(h.level, 6);

        let BlockNode::Image(img) = &doc.children()[3] else {
            panic!("expected image");
        };
        assert_eq!(img.src, "");
    }

    #[test]
    fn test_unknown_types_decode_to_unknown() {
        let json = r#"{
            "root": {
                "type": "root",
                "children": [
                    { "type": "horizontalrule", "version": 1 },
                    { "type": "paragraph", "direction": "ltr", "children": [
                        { "type": "emoji", "text": "x" },
                        { "type": "text", "text": "ok", "format": 0, "mode": "normal" }
                    ] }
                ]
            }
        }"#;

        let doc = Document::from_json(json).unwrap();
        assert_eq!(doc.children()[0], BlockNode::Unknown);
        let BlockNode::Paragraph(p) = &doc.children()[1] else {
            panic!("expected paragraph");
        };
        assert_eq!(p.children[0], InlineNode::Unknown);
        assert_eq!(inline_text(&p.children), "ok");
    }

    #[test]
    fn test_missing_root_decodes_to_no_children() {
        let doc = Document::from_json("{}").unwrap();
        assert!(doc.children().is_empty());
    }

    #[test]
    fn test_plain_text_flattens_links_and_tables() {
        let doc = Document::new(vec![
            BlockNode::Paragraph(Paragraph {
                children: vec![
                    InlineNode::Text(TextNode::plain("See ")),
                    InlineNode::Link(Link {
                        url: "/x".to_string(),
                        target: None,
                        children: vec![InlineNode::Text(TextNode::plain("here"))],
                    }),
                ],
            }),
            BlockNode::Table(Table {
                children: vec![TableRow {
                    children: vec![
                        TableCell {
                            header: false,
                            children: vec![InlineNode::Text(TextNode::plain("a"))],
                        },
                        TableCell {
                            header: false,
                            children: vec![InlineNode::Text(TextNode::plain("b"))],
                        },
                    ],
                }],
            }),
        ]);

        assert_eq!(doc.plain_text(), "See here\na | b");
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = Document::from_json("not json").unwrap_err();
        assert!(err.to_string().starts_with("DOCUMENT_JSON_INVALID"));
    }
}
