//! Builder functions for block nodes
//!
//! Each builder converts one element's own wrapper and delegates nested
//! content back to the walker or to the inline collector.

use super::inline::{InlineCollector, image_from};
use super::{HtmlDocumentConverter, has_visible_text, paragraph};
use crate::document::{
    BlockNode, Heading, Image, InlineNode, Link, List, ListItem, Table, TableCell, TableRow,
    TextNode,
};
use crate::dom;
use crate::format::TextFormat;
use log::debug;
use markup5ever_rcdom::Handle;

/// Elements treated as generic containers
const CONTAINER_ELEMENTS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "center",
    "details",
    "div",
    "fieldset",
    "figure",
    "footer",
    "form",
    "header",
    "main",
    "nav",
    "section",
];

/// Dispatches a block-context element to its builder
pub(super) fn convert_element(
    converter: &mut HtmlDocumentConverter,
    tag: &str,
    handle: &Handle,
) -> Vec<BlockNode> {
    match tag {
        "p" => build_paragraph(handle),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => build_heading(tag, handle),
        "ul" => build_list(false, handle),
        "ol" => build_list(true, handle),
        "table" => build_table(handle).into_iter().collect(),
        "img" => vec![BlockNode::Image(image_from(handle))],
        "a" => build_link(handle),
        "pre" => build_preformatted(handle),
        "br" | "hr" => Vec::new(),
        _ if CONTAINER_ELEMENTS.contains(&tag) => build_container(converter, handle),
        _ => build_unknown(converter, tag, handle),
    }
}

/// Paragraph followed by any images hoisted out of it
pub(super) fn paragraph_with_images(children: Vec<InlineNode>, images: Vec<Image>) -> Vec<BlockNode> {
    let mut blocks = Vec::with_capacity(1 + images.len());
    if has_visible_text(&children) {
        blocks.push(paragraph(children));
    }
    blocks.extend(images.into_iter().map(BlockNode::Image));
    blocks
}

fn collect_inline(handle: &Handle) -> (Vec<InlineNode>, Vec<Image>) {
    let mut collector = InlineCollector::new();
    collector.collect_children(handle, TextFormat::PLAIN);
    collector.finish()
}

/// Builds Paragraph node from <p>
fn build_paragraph(handle: &Handle) -> Vec<BlockNode> {
    let (children, images) = collect_inline(handle);
    paragraph_with_images(children, images)
}

/// Builds Heading node from <h1> - <h6>
fn build_heading(tag: &str, handle: &Handle) -> Vec<BlockNode> {
    let level = tag
        .strip_prefix('h')
        .and_then(|n| n.parse::<u8>().ok())
        .unwrap_or(1);

    let (children, images) = collect_inline(handle);

    let mut blocks = Vec::with_capacity(1 + images.len());
    if has_visible_text(&children) {
        blocks.push(BlockNode::Heading(Heading { level, children }));
    }
    blocks.extend(images.into_iter().map(BlockNode::Image));
    blocks
}

/// Builds List node from <ul> or <ol>
///
/// Nested lists inside an item are flattened into the same list with a
/// deeper indent, directly after their parent item.
fn build_list(ordered: bool, handle: &Handle) -> Vec<BlockNode> {
    let mut items = Vec::new();
    let mut images = Vec::new();
    collect_list_items(handle, 0, &mut items, &mut images);

    let mut blocks = Vec::with_capacity(1 + images.len());
    if !items.is_empty() {
        blocks.push(BlockNode::List(List {
            ordered,
            children: items,
        }));
    }
    blocks.extend(images.into_iter().map(BlockNode::Image));
    blocks
}

fn collect_list_items(
    list: &Handle,
    indent: u32,
    items: &mut Vec<ListItem>,
    images: &mut Vec<Image>,
) {
    for li in dom::child_elements(list, "li") {
        let mut collector = InlineCollector::new();
        let mut nested = Vec::new();

        for child in li.children.borrow().iter() {
            match dom::element_name(child) {
                Some("ul") | Some("ol") => nested.push(child.clone()),
                _ => collector.collect_node(child, TextFormat::PLAIN),
            }
        }

        let (children, item_images) = collector.finish();
        images.extend(item_images);
        items.push(ListItem { indent, children });

        for sublist in nested {
            if indent as usize + 1 >= dom::MAX_NESTING_DEPTH {
                debug!("nesting limit reached, flattening sublist to one item");
                let text = dom::collapse_whitespace(&dom::collect_text(&sublist));
                let text = dom::trim_html_whitespace(&text);
                if !text.is_empty() {
                    items.push(ListItem {
                        indent: indent + 1,
                        children: vec![InlineNode::Text(TextNode::plain(text))],
                    });
                }
                continue;
            }
            collect_list_items(&sublist, indent + 1, items, images);
        }
    }
}

/// Builds Table node from <table>
///
/// Rows are taken from direct <tr> children and from <thead>/<tbody>/<tfoot>
/// sections; each cell holds its trimmed text content as one text node.
fn build_table(handle: &Handle) -> Option<BlockNode> {
    let mut rows = Vec::new();

    for child in handle.children.borrow().iter() {
        match dom::element_name(child) {
            Some("thead") | Some("tbody") | Some("tfoot") => {
                for row in dom::child_elements(child, "tr") {
                    rows.push(build_table_row(&row));
                }
            }
            Some("tr") => rows.push(build_table_row(child)),
            _ => {}
        }
    }

    if rows.is_empty() {
        debug!("dropping table without rows");
        return None;
    }

    Some(BlockNode::Table(Table { children: rows }))
}

/// Builds TableRow node from <tr>
fn build_table_row(handle: &Handle) -> TableRow {
    let cells = handle
        .children
        .borrow()
        .iter()
        .filter_map(|child| match dom::element_name(child) {
            Some(tag @ ("td" | "th")) => Some(build_table_cell(tag == "th", child)),
            _ => None,
        })
        .collect();

    TableRow { children: cells }
}

/// Builds TableCell node from <th> or <td>
fn build_table_cell(header: bool, handle: &Handle) -> TableCell {
    let text = dom::collapse_whitespace(&dom::collect_text(handle));
    let text = dom::trim_html_whitespace(&text).to_string();

    TableCell {
        header,
        children: vec![InlineNode::Text(TextNode::plain(text))],
    }
}

/// Builds Link node from a standalone <a> element
fn build_link(handle: &Handle) -> Vec<BlockNode> {
    let (children, images) = collect_inline(handle);

    let mut blocks = Vec::with_capacity(1 + images.len());
    if has_visible_text(&children) {
        blocks.push(BlockNode::Link(Link {
            url: dom::attr(handle, "href").unwrap_or_default(),
            target: dom::attr(handle, "target"),
            children,
        }));
    }
    blocks.extend(images.into_iter().map(BlockNode::Image));
    blocks
}

/// Builds a paragraph from <pre>, keeping its text verbatim
fn build_preformatted(handle: &Handle) -> Vec<BlockNode> {
    let text = dom::collect_text(handle);
    let text = text.trim_end_matches(['\n', '\r']);

    if text.trim().is_empty() {
        return Vec::new();
    }

    vec![BlockNode::paragraph(text)]
}

/// Paragraph of a subtree's collapsed text, or nothing when blank
pub(super) fn flattened_paragraph(handle: &Handle) -> Vec<BlockNode> {
    let text = dom::collapse_whitespace(&dom::collect_text(handle));
    let text = dom::trim_html_whitespace(&text);

    if text.trim().is_empty() {
        return Vec::new();
    }
    vec![BlockNode::paragraph(text)]
}

/// Generic container (<div> and friends)
///
/// - block-level children: walk them and flatten the results
/// - an <img> inside inline content: image blocks (plus text paragraph)
/// - a <table> nested in inline content: table
/// - otherwise: a paragraph of its inline content, or nothing when blank
fn build_container(converter: &mut HtmlDocumentConverter, handle: &Handle) -> Vec<BlockNode> {
    if dom::has_block_children(handle) {
        return converter.walk_nested(handle);
    }

    if dom::find_descendant(handle, "img").is_none()
        && let Some(table) = dom::find_descendant(handle, "table")
    {
        return build_table(&table).into_iter().collect();
    }

    build_paragraph(handle)
}

/// Unsupported element: containers of blocks are walked, text becomes a
/// paragraph, anything else is skipped
fn build_unknown(converter: &mut HtmlDocumentConverter, tag: &str, handle: &Handle) -> Vec<BlockNode> {
    if dom::has_block_children(handle) {
        return converter.walk_nested(handle);
    }

    if dom::has_meaningful_text(handle) {
        return build_paragraph(handle);
    }

    debug!("skipping empty <{tag}>");
    Vec::new()
}
