use thiserror::Error;

/// Ошибки модели BOM-кода.
///
/// Every variant names the offending section key (and raw token where there is
/// one) so the configurator can highlight the exact field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BomCodeError {
    #[error("unknown BOM family: {0}")]
    UnknownFamily(String),

    #[error("section `{key}` is not selected")]
    IncompleteSelection { key: String },

    #[error("section `{key}` has invalid token `{token}`")]
    InvalidToken { key: String, token: String },

    #[error("code length mismatch: expected {expected} characters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("section `{key}` has unrecognized token `{token}`")]
    UnrecognizedToken { key: String, token: String },

    #[error("section `{key}` is not part of the schema")]
    UnknownSection { key: String },
}

impl BomCodeError {
    /// Ключ секции, к которой относится ошибка (если есть)
    pub fn section_key(&self) -> Option<&str> {
        match self {
            Self::IncompleteSelection { key }
            | Self::InvalidToken { key, .. }
            | Self::UnrecognizedToken { key, .. }
            | Self::UnknownSection { key } => Some(key),
            Self::UnknownFamily(_) | Self::LengthMismatch { .. } => None,
        }
    }
}
