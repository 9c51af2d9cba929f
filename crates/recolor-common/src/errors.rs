use std::path::PathBuf;

use crate::types::TargetFormat;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Per-token conversion failures.
///
/// These never escape a conversion call: the token is recorded in the
/// result's error list and scanning continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("unparseable color token: {0}")]
    UnparseableToken(String),

    #[error("cannot render {token} as {format}")]
    UnrenderableColor { token: String, format: TargetFormat },
}

impl ConvertError {
    /// The source token that failed, as it appeared in the text.
    pub fn token(&self) -> &str {
        match self {
            Self::UnparseableToken(token) => token,
            Self::UnrenderableColor { token, .. } => token,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RecolorError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    #[error("{0}")]
    Other(String),
}
