//! Bidirectional conversion between HTML fragments and Lexical-style rich-text
//! documents, plus segmentation of flat documents into typed content blocks.
//!
//! ```
//! let doc = richdoc_core::to_document("<p>Hello <b>world</b></p>");
//! let html = richdoc_core::to_html(&doc);
//! assert!(html.contains("<strong>world</strong>"));
//! ```
//!
//! Conversions never fail: malformed markup and unknown node types degrade
//! to plain paragraphs or are skipped, and blank input yields
//! [`Document::empty`].

// Core modules
pub mod config;
pub mod doc_to_html;
pub mod document;
pub mod dom;
pub mod error;
pub mod format;
pub mod html_to_doc;
pub mod segment;

// Re-export commonly used types
pub use config::Config;
pub use document::{BlockNode, Document, InlineNode, TextNode};
pub use error::{Result, RichdocError};
pub use format::TextFormat;
pub use segment::ContentBlock;

use log::warn;

/// Conversion entry points bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: Config,
}

impl Converter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// HTML fragment → Document
    ///
    /// Blank input, and input the parser cannot handle, produce
    /// [`Document::empty`].
    pub fn to_document(&self, html: &str) -> Document {
        html_to_doc::convert(html).unwrap_or_else(|e| {
            warn!("HTML conversion failed, using empty document: {e}");
            Document::empty()
        })
    }

    /// Like [`Converter::to_document`], with absent input treated as empty
    pub fn to_document_opt(&self, html: Option<&str>) -> Document {
        self.to_document(html.unwrap_or_default())
    }

    /// Document → HTML string
    pub fn to_html(&self, document: &Document) -> String {
        doc_to_html::render(document, &self.config.render)
    }

    /// Document → typed content blocks
    pub fn to_content_blocks(&self, document: &Document) -> Vec<ContentBlock> {
        segment::Segmenter::new(&self.config.segment).segment(document)
    }
}

/// [`Converter::to_document`] with the default configuration
pub fn to_document(html: &str) -> Document {
    Converter::default().to_document(html)
}

/// [`Converter::to_document_opt`] with the default configuration
pub fn to_document_opt(html: Option<&str>) -> Document {
    Converter::default().to_document_opt(html)
}

/// [`Converter::to_html`] with the default configuration
pub fn to_html(document: &Document) -> String {
    Converter::default().to_html(document)
}

/// [`Converter::to_content_blocks`] with the default configuration
pub fn to_content_blocks(document: &Document) -> Vec<ContentBlock> {
    Converter::default().to_content_blocks(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableMode;

    #[test]
    fn test_blank_inputs_yield_empty_document() {
        assert_eq!(to_document(""), Document::empty());
        assert_eq!(to_document("   \n"), Document::empty());
        assert_eq!(to_document_opt(None), Document::empty());
        assert_eq!(to_document_opt(Some("")), Document::empty());
    }

    #[test]
    fn test_converter_uses_its_config() {
        let mut config = Config::default();
        config.render.table_mode = TableMode::Text;
        config.render.paragraph_class = String::new();
        let converter = Converter::new(config);

        let doc = converter.to_document("<table><tr><td>a</td><td>b</td></tr></table>");
        assert_eq!(converter.to_html(&doc), "<p>a | b</p>");
    }

    #[test]
    fn test_default_functions_match_default_converter() {
        let doc = to_document("<p>1. One</p><p>2. Two</p>");
        assert_eq!(to_html(&doc), Converter::default().to_html(&doc));
        assert_eq!(to_content_blocks(&doc).len(), 1);
    }
}
