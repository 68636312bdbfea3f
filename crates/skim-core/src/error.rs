use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkimError {
    #[error("input text is empty or contains no sentences")]
    EmptyInput,
    #[error("invalid summary ratio: {0}")]
    InvalidRatio(f64),
    #[error("unknown stopword language: {0}")]
    UnknownLanguage(String),
    #[error("unsupported media format: {0}")]
    UnsupportedFormat(String),
    #[error("invalid trim range: {0}")]
    InvalidTrimRange(String),
    #[error("media processing error: {0}")]
    Media(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SkimError>;
