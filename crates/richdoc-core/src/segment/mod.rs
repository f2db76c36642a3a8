//! Block segmentation
//!
//! Re-partitions a flat Document (usually one long run of paragraphs) into a
//! sequence of typed [`ContentBlock`]s: rich-text blocks, lists and
//! question/answer pairs.
//!
//! A single forward pass classifies each paragraph's plain text with the
//! rule table in [`classify`]; consecutive list items and a pending question
//! are carried between paragraphs until something closes them.

pub mod classify;
mod segmenter;

pub use classify::{ClassifyContext, Classifier, ParagraphKind, Rule, RULES};
pub use segmenter::Segmenter;

use crate::document::Document;
use crate::error::{Result, RichdocError};
use serde::{Deserialize, Serialize};

/// A typed display block produced by segmentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ContentBlock {
    RichText {
        document: Document,
    },
    List {
        ordered: bool,
        items: Vec<ListItemText>,
    },
    QuestionAnswer {
        question: Document,
        /// `None` for a question that never got an answer
        answer: Option<Document>,
    },
}

/// Plain text of one list entry, marker stripped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItemText {
    pub text: String,
}

impl ListItemText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ContentBlock {
    /// Wire name of the block kind
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::RichText { .. } => "richText",
            ContentBlock::List { .. } => "list",
            ContentBlock::QuestionAnswer { .. } => "questionAnswer",
        }
    }
}

/// Serializes a content block sequence to a JSON array
pub fn to_json(blocks: &[ContentBlock], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(blocks)
    } else {
        serde_json::to_string(blocks)
    };
    json.map_err(|e| RichdocError::ContentBlocksJsonInvalid(e.to_string()))
}

/// Parses a JSON array of content blocks
pub fn from_json(json: &str) -> Result<Vec<ContentBlock>> {
    serde_json::from_str(json).map_err(|e| RichdocError::ContentBlocksJsonInvalid(e.to_string()))
}
