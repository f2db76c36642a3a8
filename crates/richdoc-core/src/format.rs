//! Text formatting codec
//!
//! Translates between the integer formatting bitmask carried by text nodes
//! and the inline HTML tags that express it.
//!
//! # Bit layout
//!
//! | bit | value | style          | HTML tag   |
//! |-----|-------|----------------|------------|
//! | 0   | 1     | bold           | `<strong>` |
//! | 1   | 2     | italic         | `<em>`     |
//! | 2   | 4     | strikethrough  | (ignored)  |
//! | 3   | 8     | underline      | `<u>`      |
//!
//! # Nesting order
//!
//! Underline is applied to the raw text first, then italic, then bold, each
//! wrapping the previous result:
//!
//! ```
//! use richdoc_core::format::{TextFormat, wrap_text};
//!
//! let html = wrap_text("hi", TextFormat::BOLD | TextFormat::ITALIC | TextFormat::UNDERLINE);
//! assert_eq!(html, "<strong><em><u>hi</u></em></strong>");
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// Formatting bitmask of a text run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TextFormat(u32);

impl TextFormat {
    pub const PLAIN: TextFormat = TextFormat(0);
    pub const BOLD: TextFormat = TextFormat(1);
    pub const ITALIC: TextFormat = TextFormat(1 << 1);
    pub const STRIKETHROUGH: TextFormat = TextFormat(1 << 2);
    pub const UNDERLINE: TextFormat = TextFormat(1 << 3);

    /// Bits that have an HTML rendering
    pub const RECOGNIZED: TextFormat = TextFormat(1 | (1 << 1) | (1 << 3));

    pub const fn from_bits(bits: u32) -> Self {
        TextFormat(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: TextFormat) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_plain(self) -> bool {
        self.0 == 0
    }

    /// Drops bits without an HTML rendering
    pub const fn recognized(self) -> Self {
        TextFormat(self.0 & Self::RECOGNIZED.0)
    }
}

impl BitOr for TextFormat {
    type Output = TextFormat;

    fn bitor(self, rhs: TextFormat) -> TextFormat {
        TextFormat(self.0 | rhs.0)
    }
}

impl BitOrAssign for TextFormat {
    fn bitor_assign(&mut self, rhs: TextFormat) {
        self.0 |= rhs.0;
    }
}

impl From<u32> for TextFormat {
    fn from(bits: u32) -> Self {
        TextFormat(bits)
    }
}

/// Accepts any JSON number (or null); negative and non-numeric values decode as plain
impl<'de> Deserialize<'de> for TextFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawFormat {
            Unsigned(u64),
            Signed(i64),
            Float(f64),
            Other(serde::de::IgnoredAny),
        }

        let bits = match Option::<RawFormat>::deserialize(deserializer)? {
            Some(RawFormat::Unsigned(v)) => u32::try_from(v).unwrap_or(0),
            Some(RawFormat::Signed(v)) => u32::try_from(v).unwrap_or(0),
            Some(RawFormat::Float(v)) if v.is_finite() && v >= 0.0 && v <= u32::MAX as f64 => {
                v as u32
            }
            _ => 0,
        };

        Ok(TextFormat(bits))
    }
}

/// Tags to wrap around a text run, innermost first
///
/// Unrecognized bits (e.g. strikethrough) are ignored.
pub fn decode_format(format: TextFormat) -> Vec<&'static str> {
    let mut tags = Vec::with_capacity(3);
    if format.contains(TextFormat::UNDERLINE) {
        tags.push("u");
    }
    if format.contains(TextFormat::ITALIC) {
        tags.push("em");
    }
    if format.contains(TextFormat::BOLD) {
        tags.push("strong");
    }
    tags
}

/// Formatting bits contributed by an element met while walking the DOM
///
/// `style` is the raw inline `style` attribute, if any. Unrecognized tags
/// contribute nothing; their text is still captured by the caller.
pub fn encode_element(tag: &str, style: Option<&str>) -> TextFormat {
    let mut format = match tag {
        "strong" | "b" => TextFormat::BOLD,
        "em" | "i" => TextFormat::ITALIC,
        "u" | "ins" => TextFormat::UNDERLINE,
        _ => TextFormat::PLAIN,
    };

    if let Some(style) = style {
        format |= encode_inline_style(style);
    }

    format
}

/// Re-encodes a list of tag names (as produced by [`decode_format`])
pub fn encode_tags(tags: &[&str]) -> TextFormat {
    tags.iter()
        .fold(TextFormat::PLAIN, |acc, tag| acc | encode_element(tag, None))
}

fn encode_inline_style(style: &str) -> TextFormat {
    let mut format = TextFormat::PLAIN;

    for declaration in style.split(';') {
        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim().to_ascii_lowercase();
        let value = value.trim().to_ascii_lowercase();
        let value = value.trim_end_matches("!important").trim();

        match property.as_str() {
            "font-weight" => {
                let heavy = matches!(value, "bold" | "bolder")
                    || value.parse::<u16>().is_ok_and(|weight| weight >= 600);
                if heavy {
                    format |= TextFormat::BOLD;
                }
            }
            "font-style" => {
                if matches!(value, "italic" | "oblique") {
                    format |= TextFormat::ITALIC;
                }
            }
            "text-decoration" | "text-decoration-line" => {
                if value.split_whitespace().any(|v| v == "underline") {
                    format |= TextFormat::UNDERLINE;
                }
            }
            _ => {}
        }
    }

    format
}

/// Escapes `text` and wraps it in the tags for `format`
pub fn wrap_text(text: &str, format: TextFormat) -> String {
    decode_format(format)
        .into_iter()
        .fold(html_escape::encode_text(text).into_owned(), |inner, tag| {
            format!("<{tag}>{inner}</{tag}>")
        })
}
