//! Document to HTML rendering
//!
//! Trait-based rendering of block nodes to HTML strings.
//!
//! # Architecture
//!
//! - **HtmlRender trait**: one renderer per block node type
//! - **inline**: text/link/line-break rendering shared by every renderer,
//!   formatting applied through [`crate::format::wrap_text`]
//! - **CompositeRenderer**: dispatches each root child to its renderer and
//!   concatenates the results in document order, with no separator
//!
//! Unknown node types render as the empty string.

mod composite;
mod heading;
mod inline;
mod list;
mod media;
mod paragraph;
mod table;

pub use composite::CompositeRenderer;
pub use heading::HeadingRenderer;
pub use list::ListRenderer;
pub use media::{ImageRenderer, LinkRenderer};
pub use paragraph::ParagraphRenderer;
pub use table::TableRenderer;

use crate::config::RenderConfig;
use crate::document::{BlockNode, Document};
use thiserror::Error;

/// Renders a block node to an HTML string
pub trait HtmlRender {
    /// # Errors
    ///
    /// Returns `RenderError::UnsupportedNode` when handed a node type the
    /// renderer does not handle.
    fn render(&self, node: &BlockNode) -> Result<String, RenderError>;
}

/// Rendering errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// Node type not supported by this renderer
    #[error("Unsupported node type: {0}")]
    UnsupportedNode(String),
}

impl RenderError {
    pub(crate) fn unsupported(renderer: &str, node: &BlockNode) -> Self {
        RenderError::UnsupportedNode(format!(
            "{renderer} cannot render '{}' nodes",
            node.type_name()
        ))
    }
}

/// Renders a whole document with the given class configuration
pub fn render(document: &Document, config: &RenderConfig) -> String {
    CompositeRenderer::new(config).render_document(document)
}

/// ` class="…"`, or nothing for an empty class list
pub(crate) fn class_attr(class: &str) -> String {
    if class.trim().is_empty() {
        String::new()
    } else {
        format!(
            " class=\"{}\"",
            html_escape::encode_double_quoted_attribute(class)
        )
    }
}
