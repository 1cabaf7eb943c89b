use thiserror::Error;

use super::DefinitionError;

/// Errors produced while converting a ragdoll definition to or from text
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CodecError {
    /// A [RON](ron) error while writing
    #[error("Could not serialize RON: {0}")]
    RonError(#[from] ron::Error),
    /// A [RON](ron) error while parsing
    #[error("Could not parse RON: {0}")]
    RonSpannedError(#[from] ron::error::SpannedError),
    #[error("Character {ch:?} at position {position} has no single-byte representation")]
    UnrepresentableChar { ch: char, position: usize },
    #[error("Ragdoll definition is invalid: {0}")]
    InvalidDefinition(#[from] DefinitionError),
}
