use std::path::PathBuf;

use crate::id::StopId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GradientError {
    #[error("stop not found: {0}")]
    NotFound(StopId),

    #[error("malformed gradient: {0}")]
    MalformedInput(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GradiaError {
    #[error(transparent)]
    Gradient(#[from] GradientError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
