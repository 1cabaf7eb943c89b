use bevy::{
    log::{info, warn},
    platform::collections::HashSet,
    prelude::{Entity, World},
};

use crate::core::{
    errors::{BoneIssue, RagdollCaptureError},
    hierarchy::{name_of, subtree},
    physics::{BoneCollider, BoneRigidBody, CharacterJoint, ColliderShape, SoftJointLimit},
    ragdoll::{
        definition::{
            BodySettings, BoneRecord, BoxSettings, CapsuleSettings, JointSettings, LimitSettings,
            RagdollDefinition, ShapeSettings, SphereSettings,
        },
        vector_text::VectorText,
    },
};

/// Result of a successful capture. Bones that could not be captured fully are listed in
/// `issues`.
#[derive(Debug, Clone, PartialEq)]
pub struct RagdollCapture {
    pub ragdoll: RagdollDefinition,
    pub issues: Vec<BoneIssue>,
}

impl RagdollCapture {
    fn warn(&mut self, issue: BoneIssue) {
        warn!("Ragdoll capture: {issue}");
        self.issues.push(issue);
    }
}

/// Captures the ragdoll rooted at the single selected entity.
pub fn capture_selection(
    world: &World,
    selection: &[Entity],
) -> Result<RagdollCapture, RagdollCaptureError> {
    let [root] = selection else {
        return Err(RagdollCaptureError::WrongSelection(selection.len()));
    };
    capture_ragdoll(world, *root)
}

/// Builds a [`RagdollDefinition`] from the root bone and every descendant that carries a
/// [`CharacterJoint`].
///
/// The root must have a collider and a rigid body and must not have a joint of its own. The
/// world is only read.
pub fn capture_ragdoll(
    world: &World,
    root: Entity,
) -> Result<RagdollCapture, RagdollCaptureError> {
    let root_name = name_of(world, root)
        .ok_or(RagdollCaptureError::MissingName(root))?
        .to_string();

    if world.get::<CharacterJoint>(root).is_some() {
        return Err(RagdollCaptureError::RootHasJoint(root_name));
    }

    let (Some(collider), Some(body)) = (
        world.get::<BoneCollider>(root),
        world.get::<BoneRigidBody>(root),
    ) else {
        return Err(RagdollCaptureError::RootMissingPhysics(root_name));
    };

    let mut capture = RagdollCapture {
        ragdoll: RagdollDefinition::default(),
        issues: Vec::new(),
    };

    let shape = capture_shape(collider);
    if shape.is_none() {
        capture.warn(BoneIssue::UnsupportedShape {
            bone: root_name.clone(),
        });
    }
    capture.ragdoll.bones.push(BoneRecord {
        bone_name: root_name.clone(),
        joint: None,
        shape,
        body: Some(BodySettings { mass: body.mass }),
    });
    info!("Ragdoll capture: {root_name} bone processed");

    let mut recorded: HashSet<&str> = HashSet::default();
    recorded.insert(root_name.as_str());

    // Joints are the entry point: a bone without one is not part of the ragdoll even if it
    // has a collider or a rigid body.
    for entity in subtree(world, root).into_iter().skip(1) {
        let Some(joint) = world.get::<CharacterJoint>(entity) else {
            continue;
        };

        let Some(bone_name) = name_of(world, entity) else {
            capture.warn(BoneIssue::UnnamedBone {
                bone: format!("{entity:?}"),
            });
            continue;
        };

        let (Some(collider), Some(body)) = (
            world.get::<BoneCollider>(entity),
            world.get::<BoneRigidBody>(entity),
        ) else {
            capture.warn(BoneIssue::MissingPhysics {
                bone: bone_name.to_string(),
            });
            continue;
        };

        let Some(connected_body) = joint
            .connected_body
            .and_then(|connected| name_of(world, connected))
        else {
            capture.warn(BoneIssue::MissingConnectedBody {
                bone: bone_name.to_string(),
            });
            continue;
        };

        if !recorded.insert(bone_name) {
            capture.warn(BoneIssue::DuplicateName {
                bone: bone_name.to_string(),
            });
            continue;
        }

        let shape = capture_shape(collider);
        if shape.is_none() {
            capture.warn(BoneIssue::UnsupportedShape {
                bone: bone_name.to_string(),
            });
        }

        capture.ragdoll.bones.push(BoneRecord {
            bone_name: bone_name.to_string(),
            joint: Some(capture_joint(joint, connected_body)),
            shape,
            body: Some(BodySettings { mass: body.mass }),
        });
        info!("Ragdoll capture: {bone_name} bone processed");
    }

    info!(
        "Ragdoll capture: {} bones processed",
        capture.ragdoll.bones.len()
    );

    Ok(capture)
}

fn capture_shape(collider: &BoneCollider) -> Option<ShapeSettings> {
    let center = VectorText::from_vec3(collider.center);
    match &collider.shape {
        ColliderShape::Cuboid(cuboid) => Some(ShapeSettings::Box(BoxSettings {
            center,
            size: VectorText::from_vec3(cuboid.half_size * 2.),
        })),
        ColliderShape::Sphere(sphere) => Some(ShapeSettings::Sphere(SphereSettings {
            center,
            radius: sphere.radius,
        })),
        ColliderShape::Capsule(capsule, axis) => Some(ShapeSettings::Capsule(CapsuleSettings {
            center,
            radius: capsule.radius,
            height: 2. * (capsule.half_length + capsule.radius),
            axis_index: axis.index(),
        })),
        ColliderShape::Cylinder(_) => None,
    }
}

fn capture_joint(joint: &CharacterJoint, connected_body: &str) -> JointSettings {
    let limit = |limit: &SoftJointLimit| LimitSettings {
        limit: limit.limit,
        bounciness: limit.bounciness,
    };

    JointSettings {
        connected_body: connected_body.to_string(),
        anchor: joint.anchor.into(),
        axis: joint.axis.into(),
        connected_anchor: joint.connected_anchor.into(),
        swing_axis: joint.swing_axis.into(),
        low_twist_limit: limit(&joint.low_twist_limit),
        high_twist_limit: limit(&joint.high_twist_limit),
        swing1_limit: limit(&joint.swing1_limit),
        swing2_limit: limit(&joint.swing2_limit),
    }
}

#[cfg(test)]
mod tests {
    use bevy::{
        math::{Vec3, primitives::Cylinder},
        prelude::{ChildOf, Name},
    };

    use super::*;
    use crate::core::ragdoll::test_utils::{bone, joint_to, physical_skeleton};

    #[test]
    fn captures_root_first_then_joint_bones() {
        let skeleton = physical_skeleton();
        let capture = capture_ragdoll(&skeleton.world, skeleton.pelvis).unwrap();

        assert!(capture.issues.is_empty());
        let names: Vec<&str> = capture
            .ragdoll
            .iter_bones()
            .map(|bone| bone.bone_name.as_str())
            .collect();
        assert_eq!(names, vec!["Pelvis", "Spine", "Head"]);

        let pelvis = &capture.ragdoll.bones[0];
        assert!(pelvis.joint.is_none());
        assert_eq!(pelvis.body, Some(BodySettings { mass: 5. }));
        assert_eq!(
            pelvis.shape,
            Some(ShapeSettings::Box(BoxSettings {
                center: VectorText::from_raw("(0, 0, 0)"),
                size: VectorText::from_raw("(0.3, 0.2, 0.25)"),
            }))
        );
    }

    #[test]
    fn captures_joint_settings_by_name() {
        let skeleton = physical_skeleton();
        let capture = capture_ragdoll(&skeleton.world, skeleton.pelvis).unwrap();

        let spine = capture.ragdoll.get_bone("Spine").unwrap();
        let joint = spine.joint.as_ref().unwrap();
        assert_eq!(joint.connected_body, "Pelvis");
        assert_eq!(joint.anchor.as_str(), "(0, -0.1, 0)");
        assert_eq!(joint.axis.as_str(), "(1, 0, 0)");
        assert_eq!(joint.connected_anchor.as_str(), "(0, 0.25, 0)");
        assert_eq!(joint.swing_axis.as_str(), "(0, 0, 1)");
        assert_eq!(joint.low_twist_limit.limit, -30.);
        assert_eq!(joint.high_twist_limit.limit, 30.);
        assert_eq!(joint.high_twist_limit.bounciness, 0.3);
        assert_eq!(joint.swing1_limit.limit, 40.);
        assert_eq!(spine.body, Some(BodySettings { mass: 3. }));
        assert!(matches!(
            &spine.shape,
            Some(ShapeSettings::Capsule(CapsuleSettings { axis_index: 1, radius, .. })) if *radius == 0.1
        ));

        let head = capture.ragdoll.get_bone("Head").unwrap();
        assert_eq!(head.joint.as_ref().unwrap().connected_body, "Spine");
    }

    #[test]
    fn rejects_wrong_selection() {
        let skeleton = physical_skeleton();
        assert_eq!(
            capture_selection(&skeleton.world, &[]),
            Err(RagdollCaptureError::WrongSelection(0))
        );
        assert_eq!(
            capture_selection(&skeleton.world, &[skeleton.pelvis, skeleton.spine]),
            Err(RagdollCaptureError::WrongSelection(2))
        );
        assert!(capture_selection(&skeleton.world, &[skeleton.pelvis]).is_ok());
    }

    #[test]
    fn rejects_root_with_joint() {
        let skeleton = physical_skeleton();
        assert_eq!(
            capture_ragdoll(&skeleton.world, skeleton.spine),
            Err(RagdollCaptureError::RootHasJoint("Spine".into()))
        );
    }

    #[test]
    fn rejects_root_without_physics() {
        let mut skeleton = physical_skeleton();
        skeleton
            .world
            .entity_mut(skeleton.pelvis)
            .remove::<BoneRigidBody>();
        assert_eq!(
            capture_ragdoll(&skeleton.world, skeleton.pelvis),
            Err(RagdollCaptureError::RootMissingPhysics("Pelvis".into()))
        );

        let unnamed = skeleton.world.spawn(BoneRigidBody { mass: 1. }).id();
        assert_eq!(
            capture_ragdoll(&skeleton.world, unnamed),
            Err(RagdollCaptureError::MissingName(unnamed))
        );
    }

    #[test]
    fn skips_joint_bones_missing_physics() {
        let mut skeleton = physical_skeleton();
        skeleton
            .world
            .entity_mut(skeleton.head)
            .remove::<BoneCollider>();

        let capture = capture_ragdoll(&skeleton.world, skeleton.pelvis).unwrap();
        assert!(capture.ragdoll.get_bone("Head").is_none());
        assert_eq!(
            capture.issues,
            vec![BoneIssue::MissingPhysics {
                bone: "Head".into()
            }]
        );
    }

    #[test]
    fn unsupported_shape_is_captured_without_shape() {
        let mut skeleton = physical_skeleton();
        skeleton.world.entity_mut(skeleton.head).insert(BoneCollider::new(
            Vec3::ZERO,
            ColliderShape::Cylinder(Cylinder::new(0.1, 0.3)),
        ));

        let capture = capture_ragdoll(&skeleton.world, skeleton.pelvis).unwrap();
        let head = capture.ragdoll.get_bone("Head").unwrap();
        assert!(head.shape.is_none());
        assert!(head.joint.is_some());
        assert_eq!(head.body, Some(BodySettings { mass: 1.5 }));
        assert_eq!(
            capture.issues,
            vec![BoneIssue::UnsupportedShape {
                bone: "Head".into()
            }]
        );
    }

    #[test]
    fn skips_joints_without_named_connection() {
        let mut skeleton = physical_skeleton();
        let stray = skeleton.world.spawn(BoneRigidBody { mass: 1. }).id();
        let extra = bone(&mut skeleton.world, "Tail", Some(skeleton.pelvis));
        skeleton.world.entity_mut(extra).insert((
            BoneCollider::new(Vec3::ZERO, ColliderShape::Sphere(Default::default())),
            BoneRigidBody { mass: 0.2 },
            joint_to(stray, 5.),
        ));

        let capture = capture_ragdoll(&skeleton.world, skeleton.pelvis).unwrap();
        assert!(capture.ragdoll.get_bone("Tail").is_none());
        assert_eq!(
            capture.issues,
            vec![BoneIssue::MissingConnectedBody {
                bone: "Tail".into()
            }]
        );
    }

    #[test]
    fn ignores_bones_outside_the_subtree() {
        let mut skeleton = physical_skeleton();
        let other_root = skeleton.world.spawn(Name::new("Other")).id();
        skeleton.world.spawn((
            Name::new("Elsewhere"),
            ChildOf(other_root),
            BoneCollider::new(Vec3::ZERO, ColliderShape::Sphere(Default::default())),
            BoneRigidBody { mass: 1. },
            joint_to(skeleton.pelvis, 5.),
        ));

        let capture = capture_ragdoll(&skeleton.world, skeleton.pelvis).unwrap();
        assert!(capture.ragdoll.get_bone("Elsewhere").is_none());
        assert_eq!(capture.ragdoll.bones.len(), 3);
    }

    #[test]
    fn repeated_names_keep_the_first_bone() {
        let mut skeleton = physical_skeleton();
        for name in ["Head", "Pelvis"] {
            let repeat = bone(&mut skeleton.world, name, Some(skeleton.toe));
            skeleton.world.entity_mut(repeat).insert((
                BoneCollider::new(Vec3::ZERO, ColliderShape::Sphere(Default::default())),
                BoneRigidBody { mass: 0.5 },
                joint_to(skeleton.pelvis, 5.),
            ));
        }

        let capture = capture_ragdoll(&skeleton.world, skeleton.pelvis).unwrap();
        let names: Vec<&str> = capture
            .ragdoll
            .iter_bones()
            .map(|bone| bone.bone_name.as_str())
            .collect();
        assert_eq!(names, vec!["Pelvis", "Spine", "Head"]);
        assert_eq!(capture.ragdoll.get_bone("Head").unwrap().body, Some(BodySettings { mass: 1.5 }));
        assert_eq!(
            capture.issues,
            vec![
                BoneIssue::DuplicateName { bone: "Head".into() },
                BoneIssue::DuplicateName {
                    bone: "Pelvis".into()
                },
            ]
        );
        assert_eq!(capture.ragdoll.validate(), Ok(()));
    }
}
