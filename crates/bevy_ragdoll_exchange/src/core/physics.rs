//! Physical attributes of live bones.
//!
//! These components are the authoring-side description of a ragdoll: a physics backend reads them
//! to build its own bodies, colliders and constraints. Capture reads them and reconstruction writes
//! them.

use bevy::{
    ecs::{component::Component, entity::Entity},
    math::{
        Vec3,
        primitives::{Capsule3d, Cuboid, Cylinder, Sphere},
    },
    reflect::Reflect,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Default)]
pub enum CapsuleAxis {
    X,
    #[default]
    Y,
    Z,
}

impl CapsuleAxis {
    pub fn index(self) -> u32 {
        match self {
            CapsuleAxis::X => 0,
            CapsuleAxis::Y => 1,
            CapsuleAxis::Z => 2,
        }
    }

    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(CapsuleAxis::X),
            1 => Some(CapsuleAxis::Y),
            2 => Some(CapsuleAxis::Z),
            _ => None,
        }
    }
}

/// Collision volume of a bone. Only cuboids, spheres and capsules can be stored in a ragdoll
/// definition; other shapes are captured as "unsupported".
#[derive(Debug, Clone, Reflect, PartialEq)]
pub enum ColliderShape {
    Cuboid(Cuboid),
    Sphere(Sphere),
    Capsule(Capsule3d, CapsuleAxis),
    Cylinder(Cylinder),
}

#[derive(Component, Debug, Clone, Reflect, PartialEq)]
pub struct BoneCollider {
    /// Offset of the shape in the bone's local space
    pub center: Vec3,
    pub shape: ColliderShape,
}

impl BoneCollider {
    pub fn new(center: Vec3, shape: ColliderShape) -> Self {
        Self { center, shape }
    }
}

#[derive(Component, Debug, Clone, Copy, Reflect, PartialEq)]
pub struct BoneRigidBody {
    pub mass: f32,
}

impl Default for BoneRigidBody {
    fn default() -> Self {
        Self { mass: 1. }
    }
}

#[derive(Debug, Clone, Copy, Reflect, PartialEq, Default)]
pub struct SoftJointLimit {
    /// Limit angle in degrees
    pub limit: f32,
    pub bounciness: f32,
    /// Distance from the limit at which contacts start. Zero lets the backend pick.
    pub contact_distance: f32,
}

#[derive(Debug, Clone, Copy, Reflect, PartialEq, Default)]
pub struct SoftJointLimitSpring {
    pub spring: f32,
    pub damper: f32,
}

/// Ball-and-socket joint with twist and swing limits, linking this bone's rigid body to the
/// rigid body on `connected_body`.
#[derive(Component, Debug, Clone, Reflect, PartialEq)]
pub struct CharacterJoint {
    /// Entity carrying the [`BoneRigidBody`] this joint is attached to. `None` attaches the joint
    /// to the world.
    pub connected_body: Option<Entity>,
    pub anchor: Vec3,
    pub axis: Vec3,
    pub connected_anchor: Vec3,
    pub swing_axis: Vec3,
    pub twist_limit_spring: SoftJointLimitSpring,
    pub swing_limit_spring: SoftJointLimitSpring,
    pub low_twist_limit: SoftJointLimit,
    pub high_twist_limit: SoftJointLimit,
    pub swing1_limit: SoftJointLimit,
    pub swing2_limit: SoftJointLimit,
}

impl Default for CharacterJoint {
    fn default() -> Self {
        Self {
            connected_body: None,
            anchor: Vec3::ZERO,
            axis: Vec3::X,
            connected_anchor: Vec3::ZERO,
            swing_axis: Vec3::Y,
            twist_limit_spring: SoftJointLimitSpring::default(),
            swing_limit_spring: SoftJointLimitSpring::default(),
            low_twist_limit: SoftJointLimit {
                limit: -20.,
                ..Default::default()
            },
            high_twist_limit: SoftJointLimit {
                limit: 70.,
                ..Default::default()
            },
            swing1_limit: SoftJointLimit {
                limit: 40.,
                ..Default::default()
            },
            swing2_limit: SoftJointLimit {
                limit: 40.,
                ..Default::default()
            },
        }
    }
}
