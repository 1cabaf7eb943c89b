use bevy::{asset::Asset, platform::collections::HashSet, reflect::Reflect};
use serde::{Deserialize, Serialize};

use crate::core::{
    errors::DefinitionError, physics::CapsuleAxis, ragdoll::vector_text::VectorText,
};

/// A captured ragdoll: one record per bone, cross-referenced by bone name only.
///
/// Records are stored in capture order (root first) but nothing depends on that order;
/// reconstruction indexes them by name.
#[derive(Asset, Debug, Clone, Default, PartialEq, Reflect, Serialize, Deserialize)]
pub struct RagdollDefinition {
    #[serde(default)]
    pub bones: Vec<BoneRecord>,
}

impl RagdollDefinition {
    pub fn new(bones: Vec<BoneRecord>) -> Self {
        Self { bones }
    }

    pub fn get_bone(&self, name: &str) -> Option<&BoneRecord> {
        self.bones.iter().find(|bone| bone.bone_name == name)
    }

    pub fn iter_bones(&self) -> impl Iterator<Item = &BoneRecord> {
        self.bones.iter()
    }

    /// The record without joint settings, if there is exactly one.
    pub fn root(&self) -> Option<&BoneRecord> {
        let mut roots = self.bones.iter().filter(|bone| bone.joint.is_none());
        let root = roots.next()?;
        roots.next().is_none().then_some(root)
    }

    /// Checks the structural invariants every persisted definition must satisfy.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let mut seen: HashSet<&str> = HashSet::default();
        for bone in &self.bones {
            if !seen.insert(bone.bone_name.as_str()) {
                return Err(DefinitionError::DuplicateBone(bone.bone_name.clone()));
            }
            bone.validate()?;
        }
        Ok(())
    }
}

#[derive(Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoneRecord {
    pub bone_name: String,
    /// Absent only for the root bone
    #[serde(default)]
    pub joint: Option<JointSettings>,
    /// `None` when the bone's collider could not be captured
    #[serde(default)]
    pub shape: Option<ShapeSettings>,
    #[serde(default)]
    pub body: Option<BodySettings>,
}

impl BoneRecord {
    pub fn new(bone_name: impl Into<String>) -> Self {
        Self {
            bone_name: bone_name.into(),
            joint: None,
            shape: None,
            body: None,
        }
    }

    pub fn with_joint(mut self, joint: JointSettings) -> Self {
        self.joint = Some(joint);
        self
    }

    pub fn with_shape(mut self, shape: ShapeSettings) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.body = Some(BodySettings { mass });
        self
    }

    fn validate(&self) -> Result<(), DefinitionError> {
        let malformed = |field: &'static str, text: &VectorText| {
            text.parse()
                .map(|_| ())
                .map_err(|source| DefinitionError::MalformedVector {
                    bone: self.bone_name.clone(),
                    field,
                    source,
                })
        };

        if let Some(shape) = &self.shape {
            if self.body.is_none() {
                return Err(DefinitionError::ShapeWithoutBody(self.bone_name.clone()));
            }
            match shape {
                ShapeSettings::Box(settings) => {
                    malformed("box center", &settings.center)?;
                    malformed("box size", &settings.size)?;
                }
                ShapeSettings::Sphere(settings) => malformed("sphere center", &settings.center)?,
                ShapeSettings::Capsule(settings) => {
                    malformed("capsule center", &settings.center)?;
                    if settings.axis().is_none() {
                        return Err(DefinitionError::InvalidCapsuleAxis {
                            bone: self.bone_name.clone(),
                            axis_index: settings.axis_index,
                        });
                    }
                }
            }
        }

        if let Some(joint) = &self.joint {
            malformed("joint anchor", &joint.anchor)?;
            malformed("joint axis", &joint.axis)?;
            malformed("joint connected anchor", &joint.connected_anchor)?;
            malformed("joint swing axis", &joint.swing_axis)?;
        }

        Ok(())
    }
}

#[derive(Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointSettings {
    /// Name of the bone whose rigid body this joint connects to
    pub connected_body: String,
    pub anchor: VectorText,
    pub axis: VectorText,
    pub connected_anchor: VectorText,
    pub swing_axis: VectorText,
    pub low_twist_limit: LimitSettings,
    pub high_twist_limit: LimitSettings,
    pub swing1_limit: LimitSettings,
    pub swing2_limit: LimitSettings,
}

#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LimitSettings {
    /// Limit angle in degrees
    pub limit: f32,
    /// Captured for reference. Reconstruction always uses zero bounciness.
    #[serde(default)]
    pub bounciness: f32,
}

#[derive(Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeSettings {
    Box(BoxSettings),
    Sphere(SphereSettings),
    Capsule(CapsuleSettings),
}

#[derive(Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSettings {
    pub center: VectorText,
    /// Full edge lengths
    pub size: VectorText,
}

#[derive(Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereSettings {
    pub center: VectorText,
    pub radius: f32,
}

#[derive(Reflect, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapsuleSettings {
    pub center: VectorText,
    pub radius: f32,
    /// Total height, caps included
    pub height: f32,
    /// 0 = X, 1 = Y, 2 = Z
    pub axis_index: u32,
}

impl CapsuleSettings {
    pub fn axis(&self) -> Option<CapsuleAxis> {
        CapsuleAxis::from_index(self.axis_index)
    }
}

#[derive(Reflect, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodySettings {
    pub mass: f32,
}
