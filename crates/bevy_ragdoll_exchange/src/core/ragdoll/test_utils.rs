use bevy::{
    math::{
        Vec3,
        primitives::{Capsule3d, Cuboid, Sphere},
    },
    prelude::{ChildOf, Entity, Name, World},
};

use crate::core::physics::{
    BoneCollider, BoneRigidBody, CapsuleAxis, CharacterJoint, ColliderShape, SoftJointLimit,
};

pub struct TestSkeleton {
    pub world: World,
    pub pelvis: Entity,
    pub spine: Entity,
    pub head: Entity,
    /// Plain bone without physics, between spine and head
    pub neck: Entity,
    /// Plain bone without physics, leaf under pelvis
    pub toe: Entity,
}

pub fn bone(world: &mut World, name: &str, parent: Option<Entity>) -> Entity {
    match parent {
        Some(parent) => world.spawn((Name::new(name.to_string()), ChildOf(parent))).id(),
        None => world.spawn(Name::new(name.to_string())).id(),
    }
}

/// Bones only: `Pelvis -> {Spine -> Neck -> Head, Toe}`
pub fn bare_skeleton() -> TestSkeleton {
    let mut world = World::new();
    let pelvis = bone(&mut world, "Pelvis", None);
    let spine = bone(&mut world, "Spine", Some(pelvis));
    let neck = bone(&mut world, "Neck", Some(spine));
    let head = bone(&mut world, "Head", Some(neck));
    let toe = bone(&mut world, "Toe", Some(pelvis));
    TestSkeleton {
        world,
        pelvis,
        spine,
        head,
        neck,
        toe,
    }
}

pub fn limit(limit: f32, bounciness: f32) -> SoftJointLimit {
    SoftJointLimit {
        limit,
        bounciness,
        contact_distance: 0.05,
    }
}

pub fn joint_to(connected_body: Entity, twist: f32) -> CharacterJoint {
    CharacterJoint {
        connected_body: Some(connected_body),
        anchor: Vec3::new(0., -0.1, 0.),
        axis: Vec3::X,
        connected_anchor: Vec3::new(0., 0.25, 0.),
        swing_axis: Vec3::Z,
        low_twist_limit: limit(-twist, 0.3),
        high_twist_limit: limit(twist, 0.3),
        swing1_limit: limit(40., 0.1),
        swing2_limit: limit(20., 0.),
        ..Default::default()
    }
}

/// Pelvis (box, mass 5), Spine (capsule, mass 3, joint to Pelvis, twist 30), Head (sphere,
/// mass 1.5, joint to Spine). Neck and Toe carry nothing.
pub fn physical_skeleton() -> TestSkeleton {
    let mut skeleton = bare_skeleton();
    let TestSkeleton {
        world,
        pelvis,
        spine,
        head,
        ..
    } = &mut skeleton;

    world.entity_mut(*pelvis).insert((
        BoneCollider::new(Vec3::ZERO, ColliderShape::Cuboid(Cuboid::new(0.3, 0.2, 0.25))),
        BoneRigidBody { mass: 5. },
    ));
    world.entity_mut(*spine).insert((
        BoneCollider::new(
            Vec3::new(0., 0.15, 0.),
            ColliderShape::Capsule(Capsule3d::new(0.1, 0.25), CapsuleAxis::Y),
        ),
        BoneRigidBody { mass: 3. },
        joint_to(*pelvis, 30.),
    ));
    world.entity_mut(*head).insert((
        BoneCollider::new(Vec3::new(0., 0.1, 0.), ColliderShape::Sphere(Sphere::new(0.125))),
        BoneRigidBody { mass: 1.5 },
        joint_to(*spine, 10.),
    ));

    skeleton
}

/// Physics components currently on `entity`, for whole-state comparisons
pub fn physics_of(
    world: &World,
    entity: Entity,
) -> (
    Option<BoneCollider>,
    Option<BoneRigidBody>,
    Option<CharacterJoint>,
) {
    (
        world.get::<BoneCollider>(entity).cloned(),
        world.get::<BoneRigidBody>(entity).copied(),
        world.get::<CharacterJoint>(entity).cloned(),
    )
}
