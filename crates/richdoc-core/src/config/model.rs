use super::consts;
use crate::error::{Result, RichdocError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// richdoc.toml schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub segment: SegmentConfig,
}

/// Class names and output modes for document → HTML rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_paragraph_class")]
    pub paragraph_class: String,
    /// One entry per heading level, h1 first
    #[serde(default = "default_heading_classes")]
    pub heading_classes: Vec<String>,
    #[serde(default = "default_unordered_list_class")]
    pub unordered_list_class: String,
    #[serde(default = "default_ordered_list_class")]
    pub ordered_list_class: String,
    #[serde(default = "default_link_class")]
    pub link_class: String,
    #[serde(default = "default_image_class")]
    pub image_class: String,
    #[serde(default = "default_table_class")]
    pub table_class: String,
    #[serde(default = "default_table_cell_class")]
    pub table_cell_class: String,
    #[serde(default)]
    pub table_mode: TableMode,
    #[serde(default)]
    pub image_mode: ImageMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            paragraph_class: default_paragraph_class(),
            heading_classes: default_heading_classes(),
            unordered_list_class: default_unordered_list_class(),
            ordered_list_class: default_ordered_list_class(),
            link_class: default_link_class(),
            image_class: default_image_class(),
            table_class: default_table_class(),
            table_cell_class: default_table_cell_class(),
            table_mode: TableMode::default(),
            image_mode: ImageMode::default(),
        }
    }
}

impl RenderConfig {
    /// Class for a heading level; out-of-range levels are clamped into 1..=6
    pub fn heading_class(&self, level: u8) -> &str {
        let index = usize::from(level.clamp(1, 6)) - 1;
        self.heading_classes
            .get(index)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// How table nodes are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableMode {
    /// Nested `<table>`/`<tr>`/`<td>` markup
    #[default]
    Html,
    /// One paragraph per row, cells joined with ` | ` (lossy)
    Text,
}

/// How image nodes are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageMode {
    /// Plain `<img />` tag
    #[default]
    Tag,
    /// `<img />` wrapped in an embed-code block
    Embed,
}

/// Paragraph classification knobs for block segmentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentConfig {
    #[serde(default = "default_heading_max_chars")]
    pub heading_max_chars: usize,
    #[serde(default = "default_heading_lead_words")]
    pub heading_lead_words: Vec<String>,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            heading_max_chars: default_heading_max_chars(),
            heading_lead_words: default_heading_lead_words(),
        }
    }
}

fn default_paragraph_class() -> String {
    consts::render::PARAGRAPH_CLASS.to_string()
}

fn default_heading_classes() -> Vec<String> {
    consts::render::HEADING_CLASSES
        .iter()
        .map(|class| class.to_string())
        .collect()
}

fn default_unordered_list_class() -> String {
    consts::render::UNORDERED_LIST_CLASS.to_string()
}

fn default_ordered_list_class() -> String {
    consts::render::ORDERED_LIST_CLASS.to_string()
}

fn default_link_class() -> String {
    consts::render::LINK_CLASS.to_string()
}

fn default_image_class() -> String {
    consts::render::IMAGE_CLASS.to_string()
}

fn default_table_class() -> String {
    consts::render::TABLE_CLASS.to_string()
}

fn default_table_cell_class() -> String {
    consts::render::TABLE_CELL_CLASS.to_string()
}

fn default_heading_max_chars() -> usize {
    consts::segment::HEADING_MAX_CHARS
}

fn default_heading_lead_words() -> Vec<String> {
    consts::segment::HEADING_LEAD_WORDS
        .iter()
        .map(|word| word.to_string())
        .collect()
}

impl Config {
    /// richdoc.toml を読み込む
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RichdocError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| RichdocError::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// richdoc.toml に書き込む
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path.as_ref(), self.to_toml_string()?)?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| RichdocError::ConfigParseError(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.render.heading_classes.len() != 6 {
            return Err(RichdocError::ConfigInvalidValue {
                field: "render.heading_classes".to_string(),
                reason: format!(
                    "expected 6 entries (h1-h6), found {}",
                    self.render.heading_classes.len()
                ),
            });
        }

        if self.segment.heading_max_chars == 0 {
            return Err(RichdocError::ConfigInvalidValue {
                field: "segment.heading_max_chars".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        if let Some(word) = self
            .segment
            .heading_lead_words
            .iter()
            .find(|word| word.trim().is_empty())
        {
            return Err(RichdocError::ConfigInvalidValue {
                field: "segment.heading_lead_words".to_string(),
                reason: format!("blank lead word {word:?}"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.render.table_mode, TableMode::Html);
        assert_eq!(config.segment.heading_max_chars, 100);
        assert_eq!(config.segment.heading_lead_words.len(), 10);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[render]
paragraph_class = "prose"
heading_classes = ["a", "b", "c", "d", "e", "f"]
unordered_list_class = "list-disc"
ordered_list_class = "list-decimal"
table_mode = "text"
image_mode = "embed"

[segment]
heading_max_chars = 60
heading_lead_words = ["NEET", "SAT"]
"#;
        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.render.paragraph_class, "prose");
        assert_eq!(config.render.heading_class(2), "b");
        assert_eq!(config.render.table_mode, TableMode::Text);
        assert_eq!(config.render.image_mode, ImageMode::Embed);
        assert_eq!(config.render.link_class, consts::render::LINK_CLASS);
        assert_eq!(config.segment.heading_max_chars, 60);
        assert_eq!(config.segment.heading_lead_words, vec!["NEET", "SAT"]);
    }

    #[test]
    fn test_heading_class_clamps_level() {
        let render = RenderConfig::default();
        assert_eq!(render.heading_class(0), consts::render::HEADING_CLASSES[0]);
        assert_eq!(render.heading_class(9), consts::render::HEADING_CLASSES[5]);
    }

    #[test]
    fn test_rejects_wrong_heading_class_count() {
        let err = Config::from_toml_str("[render]\nheading_classes = [\"a\"]\n").unwrap_err();
        assert!(matches!(
            err,
            RichdocError::ConfigInvalidValue { ref field, .. } if field == "render.heading_classes"
        ));
    }

    #[test]
    fn test_rejects_zero_heading_threshold() {
        let err = Config::from_toml_str("[segment]\nheading_max_chars = 0\n").unwrap_err();
        assert!(err.to_string().contains("segment.heading_max_chars"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = Config::from_toml_str("[render\n").unwrap_err();
        assert!(matches!(err, RichdocError::ConfigParseError(_)));
    }

    #[test]
    fn test_file_round_trip() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("richdoc.toml");

        let mut config = Config::default();
        config.render.table_mode = TableMode::Text;
        config.to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = Config::from_file("/nonexistent/richdoc.toml").unwrap_err();
        assert!(matches!(err, RichdocError::ConfigNotFound { .. }));
    }
}
