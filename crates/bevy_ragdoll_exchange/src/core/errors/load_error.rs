use bevy::prelude::Entity;
use thiserror::Error;

/// Errors that abort a reconstruction before the live graph is touched
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RagdollLoadError {
    #[error("Target entity {0:?} has no Name")]
    MissingName(Entity),
    #[error("Target needs to be the root bone! No record named {0}")]
    TargetNotRoot(String),
}
