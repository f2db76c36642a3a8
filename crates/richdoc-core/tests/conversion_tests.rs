//! End-to-end HTML ⇄ document conversion

use richdoc_core::document::{BlockNode, InlineNode, inline_text};
use richdoc_core::{Config, Converter, Document, TextFormat, to_document, to_document_opt, to_html};
use richdoc_testkit::read_fixture;

#[test]
fn test_plain_paragraphs_round_trip_text() {
    let html = "<p>First paragraph.</p><p>Second &amp; last, with  spacing.</p>";

    let doc = to_document(html);
    let rendered = to_html(&doc);
    let reparsed = to_document(&rendered);

    assert_eq!(
        doc.plain_text(),
        "First paragraph.\nSecond & last, with spacing."
    );
    assert_eq!(reparsed.plain_text(), doc.plain_text());

    let first = rendered.find("First paragraph.").unwrap();
    let second = rendered.find("Second &amp; last").unwrap();
    assert!(first < second);
}

#[test]
fn test_headed_fragment_keeps_every_block() {
    let doc = to_document("<p>Hello <b>world</b></p><h2>Fees</h2>");
    assert_eq!(doc.children().len(), 2);
    assert_eq!(doc.plain_text(), "Hello world\nFees");
}

#[test]
fn test_non_breaking_spaces_round_trip() {
    let doc = to_document("<p>Fee:&nbsp;&nbsp;Rs 500</p>");
    assert_eq!(doc.plain_text(), "Fee:\u{a0}\u{a0}Rs 500");

    let reparsed = to_document(&to_html(&doc));
    assert_eq!(reparsed.plain_text(), doc.plain_text());
}

#[test]
fn test_deeply_nested_markup_converts() {
    let depth = 3000;
    let html = format!(
        "<p>Before</p>{}Deep <b>note</b>{}",
        "<div><span>".repeat(depth),
        "</span></div>".repeat(depth)
    );
    let doc = to_document(&html);
    assert_eq!(doc.children()[0].plain_text(), "Before");
    assert!(doc.plain_text().ends_with("Deep note"));
}

#[test]
fn test_empty_input_invariant() {
    for doc in [to_document(""), to_document_opt(None)] {
        assert_eq!(doc.children().len(), 1);
        let BlockNode::Paragraph(paragraph) = &doc.children()[0] else {
            panic!("expected paragraph");
        };
        assert!(paragraph.children.is_empty());
    }
}

#[test]
fn test_table_round_trip_keeps_cells() {
    let doc = to_document(&read_fixture("html/exam_table.html"));
    assert_eq!(doc.children().len(), 1);

    let BlockNode::Table(table) = &doc.children()[0] else {
        panic!("expected table");
    };
    let cells: Vec<Vec<String>> = table
        .children
        .iter()
        .map(|row| {
            row.children
                .iter()
                .map(|cell| inline_text(&cell.children))
                .collect()
        })
        .collect();
    assert_eq!(
        cells,
        vec![vec!["Exam", "Month"], vec!["JEE Main", "January"]]
    );

    let html = to_html(&doc);
    assert!(html.starts_with("<table"));
    assert_eq!(html.matches("<tr>").count(), 2);
    assert_eq!(html.matches("<td").count(), 4);
}

#[test]
fn test_course_page_fixture() {
    let doc = to_document(&read_fixture("html/course_page.html"));
    let text = doc.plain_text();

    // <head>, <style> and <script> contribute nothing
    assert!(!text.contains("analytics"));
    assert!(!text.contains("color: red"));
    assert_eq!(text.matches("JEE Advanced Crash Course").count(), 1);

    let types: Vec<&str> = doc.children().iter().map(BlockNode::type_name).collect();
    assert_eq!(
        types,
        vec![
            "heading",
            "paragraph",
            "paragraph",
            "image",
            "heading",
            "list",
            "table",
            "paragraph"
        ]
    );

    let BlockNode::Paragraph(intro) = &doc.children()[1] else {
        panic!("expected paragraph");
    };
    assert!(intro.children.contains(&InlineNode::Text(richdoc_core::TextNode::new(
        "JEE Advanced",
        TextFormat::BOLD
    ))));

    assert_eq!(doc.children()[2].plain_text(), "Classes start on 1 June.");

    let BlockNode::List(list) = &doc.children()[5] else {
        panic!("expected list");
    };
    let indents: Vec<u32> = list.children.iter().map(|item| item.indent).collect();
    assert_eq!(indents, vec![0, 1, 1, 0]);
    assert_eq!(
        doc.children()[5].plain_text(),
        "Live classes\nPhysics\nChemistry\nWeekly mock tests"
    );

    let html = to_html(&doc);
    assert!(html.contains("<img src=\"/images/campus.jpg\" alt=\"Campus\""));
    assert!(html.contains("target=\"_blank\" rel=\"noopener noreferrer\""));
    assert!(html.contains("<li class=\"ml-4\">Physics</li>"));
    assert!(html.contains("<strong>mock tests</strong>"));
}

#[test]
fn test_formatting_survives_html_round_trip() {
    let html = "<p><b><i><u>all</u></i></b> <i>some</i> plain</p>";
    let doc = to_document(html);
    let reparsed = to_document(&to_html(&doc));
    assert_eq!(reparsed, doc);
}

#[test]
fn test_malformed_markup_is_repaired() {
    let doc = to_document("<p>Open <b>bold<p>Next</div>");
    assert_eq!(doc.plain_text(), "Open bold\nNext");
}

#[test]
fn test_document_json_round_trip() {
    let doc = to_document("<h2>Fees</h2><ol><li>Tuition</li></ol>");
    let parsed = Document::from_json(&doc.to_json(true).unwrap()).unwrap();
    assert_eq!(parsed, doc);
}

#[test]
fn test_unknown_nodes_render_as_nothing() {
    let json = r#"{"root":{"type":"root","children":[
        {"type":"horizontalrule"},
        {"type":"paragraph","children":[{"type":"text","text":"kept","format":0}]}
    ]}}"#;
    let doc = Document::from_json(json).unwrap();

    let mut config = Config::default();
    config.render.paragraph_class = String::new();
    assert_eq!(Converter::new(config).to_html(&doc), "<p>kept</p>");
}
