use thiserror::Error;

use super::CodecError;

/// Possible errors produced by the ragdoll definition asset loader
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RagdollAssetLoaderError {
    /// An [IO](std::io) Error
    #[error("Could not read ragdoll asset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not decode ragdoll asset: {0}")]
    Codec(#[from] CodecError),
}
