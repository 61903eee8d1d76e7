use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CipherError {
    #[error("Usage: ./caesar key")]
    Usage,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReadabilityError {
    /// Letters and sentences are averaged per word, so zero words has no grade.
    #[error("text contains no words")]
    NoWords,
}

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before a value was entered")]
    Eof,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid denominations: {0}")]
    InvalidDenominations(String),
}
