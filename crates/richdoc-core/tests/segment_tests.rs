//! Block segmentation over whole documents

use richdoc_core::segment::ListItemText;
use richdoc_core::{ContentBlock, Document, TextFormat, to_content_blocks, to_document};
use richdoc_testkit::{paragraphs_document_json, read_fixture};

fn segment(paragraphs: &[&str]) -> Vec<ContentBlock> {
    let doc = Document::from_json(&paragraphs_document_json(paragraphs)).unwrap();
    to_content_blocks(&doc)
}

fn list(ordered: bool, items: &[&str]) -> ContentBlock {
    ContentBlock::List {
        ordered,
        items: items.iter().map(|t| ListItemText::new(*t)).collect(),
    }
}

#[test]
fn test_list_segmentation_grouping() {
    assert_eq!(
        segment(&["1. First", "2. Second", "3. Third"]),
        vec![list(true, &["First", "Second", "Third"])]
    );
}

#[test]
fn test_mixed_list_style_split() {
    assert_eq!(
        segment(&["1. One", "• Two"]),
        vec![list(true, &["One"]), list(false, &["Two"])]
    );
}

#[test]
fn test_question_answer_pairing() {
    let blocks = segment(&[
        "Question 1: What is X?",
        "Answer 1: X is Y.",
        "Question 2: What about Z?",
    ]);
    assert_eq!(blocks.len(), 2);

    match &blocks[0] {
        ContentBlock::QuestionAnswer { question, answer } => {
            assert_eq!(question.plain_text(), "Question 1: What is X?");
            assert_eq!(answer.as_ref().unwrap().plain_text(), "Answer 1: X is Y.");
        }
        other => panic!("expected questionAnswer, got {other:?}"),
    }
    match &blocks[1] {
        ContentBlock::QuestionAnswer { question, answer } => {
            assert_eq!(question.plain_text(), "Question 2: What about Z?");
            assert!(answer.is_none());
        }
        other => panic!("expected questionAnswer, got {other:?}"),
    }
}

#[test]
fn test_heading_detection() {
    let long = "This is a much longer sentence describing benefits of online learning that exceeds the short-heading length threshold and should therefore not be classified as a heading.";
    let blocks = segment(&["Benefits of Online Learning", long]);
    assert_eq!(blocks.len(), 2);

    let bold_bits = |block: &ContentBlock| -> Vec<bool> {
        let ContentBlock::RichText { document } = block else {
            panic!("expected richText");
        };
        let json: serde_json::Value =
            serde_json::from_str(&document.to_json(false).unwrap()).unwrap();
        json["root"]["children"][0]["children"]
            .as_array()
            .unwrap()
            .iter()
            .map(|node| node["format"].as_u64().unwrap() as u32 & TextFormat::BOLD.bits() != 0)
            .collect()
    };

    assert_eq!(bold_bits(&blocks[0]), vec![true]);
    assert_eq!(bold_bits(&blocks[1]), vec![false]);
}

#[test]
fn test_faq_fixture() {
    let doc = Document::from_json(&read_fixture("documents/faq.json")).unwrap();
    let blocks = to_content_blocks(&doc);

    let kinds: Vec<&str> = blocks.iter().map(ContentBlock::kind).collect();
    assert_eq!(
        kinds,
        vec!["richText", "richText", "list", "questionAnswer", "questionAnswer"]
    );
    assert_eq!(blocks[2], list(true, &["Experienced faculty", "Small batches"]));

    let json: serde_json::Value =
        serde_json::from_str(&richdoc_core::segment::to_json(&blocks, false).unwrap()).unwrap();
    assert!(json[3]["answer"].is_object());
    assert!(json[4]["answer"].is_null());
}

#[test]
fn test_html_to_content_blocks_pipeline() {
    let doc = to_document(
        "<div><p>COURSE HIGHLIGHTS</p><p>- Live doubt sessions</p><p>- Recorded lectures</p></div>\
         <p>Enrol before the batch fills up; seats are limited and allotted in order of registration.</p>",
    );
    let blocks = to_content_blocks(&doc);

    let kinds: Vec<&str> = blocks.iter().map(ContentBlock::kind).collect();
    assert_eq!(kinds, vec!["richText", "list", "richText"]);
    assert_eq!(
        blocks[1],
        list(false, &["Live doubt sessions", "Recorded lectures"])
    );
}
