//! Paragraph classification rule table
//!
//! Rules are evaluated in table order and the first match wins. Each rule is
//! an independent predicate over a paragraph's plain text, so rules can be
//! tested, added or reordered without touching the segmenter.

use crate::config::SegmentConfig;
use regex::Regex;
use std::sync::LazyLock;

static QUESTION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(Question \d+:|Q\d+:|Q:)").unwrap());
static ANSWER_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(Answer \d+:|A\d+:|A:)").unwrap());
static NUMBERED_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.").unwrap());
static BULLET_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[•\-\*]").unwrap());
static LETTERED_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z]\)").unwrap());

/// What a paragraph looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphKind {
    Question,
    Answer,
    ListItem,
    Heading,
    Body,
}

/// Segmenter state visible to the rules
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifyContext {
    /// A question paragraph is buffered and waiting for its answer
    pub question_open: bool,
}

/// One entry of the rule table
pub struct Rule {
    pub kind: ParagraphKind,
    pub matches: fn(&Classifier<'_>, &str, &ClassifyContext) -> bool,
}

/// Priority-ordered rule table; `Body` is the fallback when nothing matches
pub const RULES: &[Rule] = &[
    Rule {
        kind: ParagraphKind::Question,
        matches: |_, text, _| QUESTION_MARKER.is_match(text),
    },
    Rule {
        kind: ParagraphKind::Answer,
        matches: |_, text, ctx| ctx.question_open && ANSWER_MARKER.is_match(text),
    },
    Rule {
        kind: ParagraphKind::ListItem,
        matches: |_, text, _| list_marker(text).is_some(),
    },
    Rule {
        kind: ParagraphKind::Heading,
        matches: |classifier, text, _| classifier.looks_like_heading(text),
    },
];

/// Rule table bound to segmentation settings
pub struct Classifier<'a> {
    config: &'a SegmentConfig,
}

impl<'a> Classifier<'a> {
    pub fn new(config: &'a SegmentConfig) -> Self {
        Classifier { config }
    }

    /// Kind of the first matching rule, `Body` when none match
    pub fn classify(&self, text: &str, ctx: &ClassifyContext) -> ParagraphKind {
        RULES
            .iter()
            .find(|rule| (rule.matches)(self, text, ctx))
            .map(|rule| rule.kind)
            .unwrap_or(ParagraphKind::Body)
    }

    /// Short text that ends with `:`, starts with `N.`, is all upper-case
    /// or starts with a lead word
    pub fn looks_like_heading(&self, text: &str) -> bool {
        if text.chars().count() >= self.config.heading_max_chars {
            return false;
        }

        text.ends_with(':')
            || NUMBERED_MARKER.is_match(text)
            || is_upper_case(text)
            || self
                .config
                .heading_lead_words
                .iter()
                .any(|word| starts_with_word(text, word))
    }
}

/// A stripped list marker: whether it is ordered, and the remaining text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker<'t> {
    pub ordered: bool,
    pub text: &'t str,
}

/// Detects a numbered (`1.`), bulleted (`•`, `-`, `*`) or lettered (`a)`)
/// marker at the start of `text`
pub fn list_marker(text: &str) -> Option<ListMarker<'_>> {
    let (ordered, marker) = if let Some(m) = NUMBERED_MARKER.find(text) {
        (true, m)
    } else if let Some(m) = LETTERED_MARKER.find(text) {
        (true, m)
    } else {
        (false, BULLET_MARKER.find(text)?)
    };

    Some(ListMarker {
        ordered,
        text: text[marker.end()..].trim(),
    })
}

fn is_upper_case(text: &str) -> bool {
    text.chars().any(char::is_alphabetic) && !text.chars().any(char::is_lowercase)
}

/// Case-insensitive prefix match ending on a word boundary
fn starts_with_word(text: &str, word: &str) -> bool {
    let mut chars = text.chars();
    for expected in word.chars() {
        match chars.next() {
            Some(c) if c.to_lowercase().eq(expected.to_lowercase()) => {}
            _ => return false,
        }
    }
    !chars
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str, question_open: bool) -> ParagraphKind {
        let config = SegmentConfig::default();
        Classifier::new(&config).classify(text, &ClassifyContext { question_open })
    }

    #[test]
    fn test_question_markers() {
        for text in ["Question 1: What?", "Q2: Why?", "q: how", "QUESTION 10: x"] {
            assert_eq!(classify(text, false), ParagraphKind::Question, "{text}");
        }
    }

    #[test]
    fn test_answer_requires_open_question() {
        assert_eq!(classify("Answer 1: Yes.", true), ParagraphKind::Answer);
        assert_eq!(classify("A: Yes.", true), ParagraphKind::Answer);
        // "A:" is also all upper-case text, so without a question it reads as a heading
        assert_eq!(classify("A: YES", false), ParagraphKind::Heading);
        assert_eq!(
            classify("Answer 1: the fee structure is listed below", false),
            ParagraphKind::Body
        );
    }

    #[test]
    fn test_list_markers() {
        assert_eq!(
            list_marker("1. First"),
            Some(ListMarker {
                ordered: true,
                text: "First"
            })
        );
        assert_eq!(
            list_marker("• Two"),
            Some(ListMarker {
                ordered: false,
                text: "Two"
            })
        );
        assert_eq!(
            list_marker("b) option"),
            Some(ListMarker {
                ordered: true,
                text: "option"
            })
        );
        assert_eq!(list_marker("- dash").map(|m| m.ordered), Some(false));
        assert_eq!(list_marker("Plain text"), None);
        assert_eq!(classify("12. Twelfth", false), ParagraphKind::ListItem);
    }

    #[test]
    fn test_heading_lead_word() {
        assert_eq!(
            classify("Benefits of Online Learning", false),
            ParagraphKind::Heading
        );
        assert_eq!(classify("why choose us", false), ParagraphKind::Heading);
        // Lead word must end on a word boundary
        assert_eq!(
            classify("However the results were mixed", false),
            ParagraphKind::Body
        );
    }

    #[test]
    fn test_heading_colon_and_upper_case() {
        assert_eq!(classify("Eligibility criteria:", false), ParagraphKind::Heading);
        assert_eq!(classify("ADMISSION PROCESS 2024", false), ParagraphKind::Heading);
        assert_eq!(classify("2024", false), ParagraphKind::Body);
    }

    #[test]
    fn test_long_text_is_body() {
        let text = "This is a much longer sentence describing benefits of online learning that exceeds the short-heading length threshold and should therefore not be classified as a heading.";
        assert_eq!(classify(text, false), ParagraphKind::Body);
    }

    #[test]
    fn test_custom_threshold_and_lead_words() {
        let config = SegmentConfig {
            heading_max_chars: 10,
            heading_lead_words: vec!["NEET".to_string()],
        };
        let classifier = Classifier::new(&config);
        let ctx = ClassifyContext::default();
        assert_eq!(classifier.classify("NEET prep", &ctx), ParagraphKind::Heading);
        assert_eq!(classifier.classify("Why us", &ctx), ParagraphKind::Body);
        assert_eq!(classifier.classify("NEET preparation", &ctx), ParagraphKind::Body);
    }
}
