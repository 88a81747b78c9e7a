use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipzError {
    #[error("Empty text not saved")]
    EmptyText,

    #[error("Snippet not found: {0}")]
    NotFound(String),

    #[error("Ambiguous id '{0}': matches more than one snippet")]
    AmbiguousId(String),

    #[error("Invalid import file: {0}")]
    Format(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SnipzError>;
