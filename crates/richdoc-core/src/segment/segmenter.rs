use super::classify::{ClassifyContext, Classifier, ParagraphKind, list_marker};
use super::{ContentBlock, ListItemText};
use crate::config::SegmentConfig;
use crate::document::{BlockNode, Document, InlineNode, Paragraph};
use crate::format::TextFormat;
use log::{debug, trace};

/// Items of the list currently being accumulated
struct ListBuffer {
    ordered: bool,
    items: Vec<ListItemText>,
}

/// Single-pass segmenter state
pub struct Segmenter<'a> {
    classifier: Classifier<'a>,
    blocks: Vec<ContentBlock>,
    list: Option<ListBuffer>,
    question: Option<Document>,
}

impl<'a> Segmenter<'a> {
    pub fn new(config: &'a SegmentConfig) -> Self {
        Segmenter {
            classifier: Classifier::new(config),
            blocks: Vec::new(),
            list: None,
            question: None,
        }
    }

    /// Segments every root child of `document` in order
    pub fn segment(mut self, document: &Document) -> Vec<ContentBlock> {
        trace!("segmenting {} blocks", document.children().len());

        for block in document.children() {
            self.push_block(block);
        }

        self.finish()
    }

    /// Feeds one block
    pub fn push_block(&mut self, block: &BlockNode) {
        match block {
            BlockNode::Paragraph(paragraph) => self.push_paragraph(paragraph),
            BlockNode::Unknown => debug!("skipping unknown block during segmentation"),
            BlockNode::List(list) => {
                self.flush_all();
                self.blocks.push(ContentBlock::List {
                    ordered: list.ordered,
                    items: list
                        .children
                        .iter()
                        .map(|item| {
                            ListItemText::new(crate::document::inline_text(&item.children).trim())
                        })
                        .collect(),
                });
            }
            other => {
                self.flush_all();
                self.blocks.push(rich_text(other.clone()));
            }
        }
    }

    fn push_paragraph(&mut self, paragraph: &Paragraph) {
        let full_text = crate::document::inline_text(&paragraph.children);
        let text = full_text.trim();
        if text.is_empty() {
            return;
        }

        let ctx = ClassifyContext {
            question_open: self.question.is_some(),
        };
        let kind = self.classifier.classify(text, &ctx);
        trace!("{kind:?}: {text:?}");

        if kind != ParagraphKind::Answer {
            self.flush_question();
        }
        if kind != ParagraphKind::ListItem {
            self.flush_list();
        }

        let block = BlockNode::Paragraph(paragraph.clone());
        match kind {
            ParagraphKind::Question => {
                self.question = Some(Document::new(vec![block]));
            }
            ParagraphKind::Answer => {
                // Answer rule only matches while a question is open
                if let Some(question) = self.question.take() {
                    self.blocks.push(ContentBlock::QuestionAnswer {
                        question,
                        answer: Some(Document::new(vec![block])),
                    });
                }
            }
            ParagraphKind::ListItem => {
                if let Some(marker) = list_marker(text) {
                    self.push_list_item(marker.ordered, marker.text);
                }
            }
            ParagraphKind::Heading => {
                self.blocks.push(rich_text(BlockNode::Paragraph(emphasize(paragraph))));
            }
            ParagraphKind::Body => self.blocks.push(rich_text(block)),
        }
    }

    fn push_list_item(&mut self, ordered: bool, text: &str) {
        if self.list.as_ref().is_some_and(|list| list.ordered != ordered) {
            self.flush_list();
        }

        self.list
            .get_or_insert_with(|| ListBuffer {
                ordered,
                items: Vec::new(),
            })
            .items
            .push(ListItemText::new(text));
    }

    fn flush_list(&mut self) {
        if let Some(list) = self.list.take() {
            self.blocks.push(ContentBlock::List {
                ordered: list.ordered,
                items: list.items,
            });
        }
    }

    fn flush_question(&mut self) {
        if let Some(question) = self.question.take() {
            self.blocks.push(ContentBlock::QuestionAnswer {
                question,
                answer: None,
            });
        }
    }

    fn flush_all(&mut self) {
        self.flush_list();
        self.flush_question();
    }

    /// Flushes open buffers and returns the segmented blocks
    pub fn finish(mut self) -> Vec<ContentBlock> {
        self.flush_all();
        self.blocks
    }
}

fn rich_text(block: BlockNode) -> ContentBlock {
    ContentBlock::RichText {
        document: Document::new(vec![block]),
    }
}

/// Copy of `paragraph` with the bold bit forced on every text run
fn emphasize(paragraph: &Paragraph) -> Paragraph {
    Paragraph {
        children: paragraph.children.iter().map(emphasize_inline).collect(),
    }
}

fn emphasize_inline(node: &InlineNode) -> InlineNode {
    match node {
        InlineNode::Text(text) => {
            let mut text = text.clone();
            text.format |= TextFormat::BOLD;
            InlineNode::Text(text)
        }
        InlineNode::Link(link) => {
            let mut link = link.clone();
            link.children = link.children.iter().map(emphasize_inline).collect();
            InlineNode::Link(link)
        }
        other => other.clone(),
    }
}
