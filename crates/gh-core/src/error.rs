//! Error types for the character data model.

use crate::character::CharacterId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by parsing helpers and character stores.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A class letter or name matched no playable class.
    #[error("unknown class: \"{0}\"")]
    UnknownClass(String),

    /// An ability name matched no known spell or skill.
    #[error("unknown ability: \"{0}\"")]
    UnknownAbility(String),

    /// No stored record exists for the requested character.
    #[error("character not found: {0}")]
    CharacterNotFound(CharacterId),

    /// Reading or writing a record file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A record file could not be encoded or decoded.
    #[error("malformed character record: {0}")]
    Json(#[from] serde_json::Error),
}
