use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RichdocError {
    // Parse errors
    #[error("HTML_PARSE_FAILED: {0}")]
    HtmlParseFailed(String),

    #[error("HTML_BODY_MISSING: parsed DOM has no <body> element")]
    HtmlBodyMissing,

    // Document errors
    #[error("DOCUMENT_JSON_INVALID: {0}")]
    DocumentJsonInvalid(String),

    #[error("CONTENT_BLOCKS_JSON_INVALID: {0}")]
    ContentBlocksJsonInvalid(String),

    // Config errors
    #[error("CONFIG_NOT_FOUND: '{path}' does not exist")]
    ConfigNotFound { path: PathBuf },

    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for RichdocError {
    fn from(err: serde_json::Error) -> Self {
        RichdocError::DocumentJsonInvalid(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RichdocError>;
