//! TableRenderer: table blocks
//!
//! Two output modes, chosen by [`TableMode`]:
//!
//! - `Html`: `<table><tbody><tr><th|td>…` markup
//! - `Text`: one paragraph per row, cells joined with ` | ` (lossy)

use super::inline::render_inline_nodes;
use super::{HtmlRender, RenderError, class_attr};
use crate::config::{RenderConfig, TableMode};
use crate::document::{BlockNode, Table, TableRow};

/// Table renderer
pub struct TableRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> TableRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        TableRenderer { config }
    }

    fn render_markup(&self, table: &Table) -> String {
        let cell_class = class_attr(&self.config.table_cell_class);
        let rows: String = table
            .children
            .iter()
            .map(|row| {
                let cells: String = row
                    .children
                    .iter()
                    .map(|cell| {
                        let tag = if cell.header { "th" } else { "td" };
                        format!(
                            "<{tag}{cell_class}>{}</{tag}>",
                            render_inline_nodes(&cell.children, &self.config.link_class)
                        )
                    })
                    .collect();
                format!("<tr>{cells}</tr>")
            })
            .collect();

        format!(
            "<table{}><tbody>{rows}</tbody></table>",
            class_attr(&self.config.table_class)
        )
    }

    fn render_text(&self, table: &Table) -> String {
        let paragraph_class = class_attr(&self.config.paragraph_class);
        table
            .children
            .iter()
            .map(|row| {
                format!(
                    "<p{paragraph_class}>{}</p>",
                    html_escape::encode_text(&TableRow::plain_text(row))
                )
            })
            .collect()
    }
}

impl HtmlRender for TableRenderer<'_> {
    fn render(&self, node: &BlockNode) -> Result<String, RenderError> {
        let BlockNode::Table(table) = node else {
            return Err(RenderError::unsupported("TableRenderer", node));
        };

        Ok(match self.config.table_mode {
            TableMode::Html => self.render_markup(table),
            TableMode::Text => self.render_text(table),
        })
    }
}
