use thiserror::Error;

/// Errors parsing a `"(x, y, z)"` vector
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VectorParseError {
    #[error("expected 3 components in {text:?}, found {found}")]
    ComponentCount { text: String, found: usize },
    #[error("invalid component {component:?} in {text:?}")]
    InvalidComponent { text: String, component: String },
}

/// Structural problems in a ragdoll definition
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DefinitionError {
    #[error("Bone name {0} appears more than once")]
    DuplicateBone(String),
    #[error("Bone {0} has a collider shape but no rigid body settings")]
    ShapeWithoutBody(String),
    #[error("Bone {bone} has a malformed {field}: {source}")]
    MalformedVector {
        bone: String,
        field: &'static str,
        #[source]
        source: VectorParseError,
    },
    #[error("Bone {bone} has capsule axis index {axis_index}, expected 0, 1 or 2")]
    InvalidCapsuleAxis { bone: String, axis_index: u32 },
}
