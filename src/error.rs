//! Error types. Every variant is recoverable: the UI turns it into a notice and carries on.

use thiserror::Error;

/// The input document could not be opened or decoded.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("cannot read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a valid .docx archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("a quiz needs at least {required} flashcards, only {available} loaded")]
    InsufficientCards { available: usize, required: usize },
}

/// Speech synthesis failed; playback is cleared and studying continues.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("nothing to speak")]
    EmptyText,

    #[error("speech request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("speech service answered with status {0}")]
    Status(u16),

    #[error("speech service returned no audio")]
    EmptyAudio,

    #[error("speech worker is not running")]
    WorkerUnavailable,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}
