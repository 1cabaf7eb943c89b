use bevy::prelude::Entity;
use thiserror::Error;

/// Errors that abort a ragdoll capture before any record is produced
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RagdollCaptureError {
    #[error("Wrong selection: expected exactly one root bone, got {0}")]
    WrongSelection(usize),
    #[error("Root entity {0:?} has no Name")]
    MissingName(Entity),
    #[error("Wrong selection: {0} has a joint and cannot be the root bone of a ragdoll")]
    RootHasJoint(String),
    #[error("Root bone {0} needs a collider and a rigid body")]
    RootMissingPhysics(String),
}
