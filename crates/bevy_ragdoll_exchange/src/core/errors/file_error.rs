use thiserror::Error;

use super::{CodecError, RagdollCaptureError, RagdollLoadError};

/// Errors from the file export/load drivers
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RagdollFileError {
    #[error("Ragdoll file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Capture(#[from] RagdollCaptureError),
    #[error(transparent)]
    Load(#[from] RagdollLoadError),
}
