//! ListRenderer: `<ul>` / `<ol>` blocks
//!
//! Lists are flat; an item's `indent` becomes a left-margin class on its
//! `<li>` (`ml-4` per level).

use super::inline::render_inline_nodes;
use super::{HtmlRender, RenderError, class_attr};
use crate::config::RenderConfig;
use crate::document::{BlockNode, ListItem};

/// List renderer
pub struct ListRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> ListRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        ListRenderer { config }
    }

    fn render_item(&self, item: &ListItem) -> String {
        let class = if item.indent > 0 {
            format!("ml-{}", item.indent.saturating_mul(4))
        } else {
            String::new()
        };

        format!(
            "<li{}>{}</li>",
            class_attr(&class),
            render_inline_nodes(&item.children, &self.config.link_class)
        )
    }
}

impl HtmlRender for ListRenderer<'_> {
    fn render(&self, node: &BlockNode) -> Result<String, RenderError> {
        let BlockNode::List(list) = node else {
            return Err(RenderError::unsupported("ListRenderer", node));
        };

        let (tag, class) = if list.ordered {
            ("ol", &self.config.ordered_list_class)
        } else {
            ("ul", &self.config.unordered_list_class)
        };

        let items: String = list
            .children
            .iter()
            .map(|item| self.render_item(item))
            .collect();

        Ok(format!("<{tag}{}>{items}</{tag}>", class_attr(class)))
    }
}
