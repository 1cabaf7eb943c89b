use thiserror::Error;

use super::VectorParseError;

/// A recoverable problem with a single bone.
///
/// Issues never abort a capture or a reconstruction. The offending bone is skipped or left
/// partially populated and the issue is reported alongside the result.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoneIssue {
    #[error("bone with a joint is missing a collider or a rigid body ({bone})")]
    MissingPhysics { bone: String },
    #[error("bone with a joint has no name ({bone})")]
    UnnamedBone { bone: String },
    #[error("another bone in the ragdoll already has this name ({bone})")]
    DuplicateName { bone: String },
    #[error("joint has no named connected body ({bone})")]
    MissingConnectedBody { bone: String },
    #[error("collider type is not supported ({bone})")]
    UnsupportedShape { bone: String },
    #[error("collider settings are missing ({bone})")]
    MissingShape { bone: String },
    #[error("malformed collider settings on {bone}: {source}")]
    MalformedShape {
        bone: String,
        #[source]
        source: VectorParseError,
    },
    #[error("capsule axis index {axis_index} is not 0, 1 or 2 ({bone})")]
    InvalidCapsuleAxis { bone: String, axis_index: u32 },
    #[error("rigid body settings missing ({bone})")]
    MissingBody { bone: String },
    #[error("joint settings missing ({bone})")]
    MissingJointSettings { bone: String },
    #[error("malformed joint settings on {bone}: {source}")]
    MalformedJoint {
        bone: String,
        #[source]
        source: VectorParseError,
    },
    #[error("joint of {bone} connects to {connected_body}, which is missing or has no rigid body")]
    UnresolvedConnection { bone: String, connected_body: String },
}

impl BoneIssue {
    /// Name of the bone the issue was raised for
    pub fn bone(&self) -> &str {
        match self {
            BoneIssue::MissingPhysics { bone }
            | BoneIssue::UnnamedBone { bone }
            | BoneIssue::DuplicateName { bone }
            | BoneIssue::MissingConnectedBody { bone }
            | BoneIssue::UnsupportedShape { bone }
            | BoneIssue::MissingShape { bone }
            | BoneIssue::MalformedShape { bone, .. }
            | BoneIssue::InvalidCapsuleAxis { bone, .. }
            | BoneIssue::MissingBody { bone }
            | BoneIssue::MissingJointSettings { bone }
            | BoneIssue::MalformedJoint { bone, .. }
            | BoneIssue::UnresolvedConnection { bone, .. } => bone,
        }
    }
}
