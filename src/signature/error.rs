// Wed Jan 14 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("Signature '{0}' has no elements")]
    Empty(String),
    #[error("Signature '{name}': element {index} (0x{value:x}) does not fit in {width} bytes")]
    ValueTooWide {
        name: String,
        index: usize,
        value: u64,
        width: usize,
    },
    #[error("Signature '{name}': cannot parse element '{text}'")]
    InvalidElement { name: String, text: String },
    #[error("Signature '{0}' needs either `elements` or `text`")]
    MissingValues(String),
    #[error("Signature file error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
