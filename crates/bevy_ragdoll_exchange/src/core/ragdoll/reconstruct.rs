use bevy::{
    log::{error, info, warn},
    math::primitives::{Capsule3d, Cuboid, Sphere},
    prelude::{Entity, World},
};
use indexmap::IndexMap;

use crate::core::{
    errors::{BoneIssue, RagdollLoadError, VectorParseError},
    hierarchy::{name_of, subtree},
    physics::{
        BoneCollider, BoneRigidBody, CharacterJoint, ColliderShape, SoftJointLimit,
        SoftJointLimitSpring,
    },
    ragdoll::definition::{BoneRecord, JointSettings, LimitSettings, RagdollDefinition, ShapeSettings},
};

/// Spring constant applied to both twist and swing limits of reconstructed joints
pub const LIMIT_SPRING: f32 = 225.;
/// Damping applied to both twist and swing limits of reconstructed joints
pub const LIMIT_DAMPER: f32 = 10.;
/// Bounciness of every reconstructed joint limit. Captured bounciness is not restored.
pub const LIMIT_BOUNCINESS: f32 = 0.;
/// Contact distance of every reconstructed joint limit. Zero lets the physics backend decide.
pub const LIMIT_CONTACT_DISTANCE: f32 = 0.;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RagdollLoadReport {
    /// Bones that had a matching record and were given physical attributes
    pub bones_processed: usize,
    pub issues: Vec<BoneIssue>,
}

impl RagdollLoadReport {
    fn error(&mut self, issue: BoneIssue) {
        error!("Ragdoll loader: {issue}");
        self.issues.push(issue);
    }
}

/// Rebuilds the ragdoll described by `ragdoll` on the subtree rooted at `target`.
///
/// `target` must be named like one of the records. Every joint, collider and rigid body in the
/// subtree is removed first, so the result does not depend on what was there before.
/// Colliders and rigid bodies are then attached to every bone that has a record, and finally
/// joints are attached and bound to their connected bodies by name.
///
/// Problems with individual bones are logged and reported; they never stop the rest of the
/// ragdoll from being built.
pub fn load_ragdoll(
    world: &mut World,
    target: Entity,
    ragdoll: &RagdollDefinition,
) -> Result<RagdollLoadReport, RagdollLoadError> {
    let mut records: IndexMap<&str, &BoneRecord> = IndexMap::with_capacity(ragdoll.bones.len());
    for record in &ragdoll.bones {
        if records.insert(record.bone_name.as_str(), record).is_some() {
            warn!(
                "Ragdoll loader: duplicate record for {}, using the last one",
                record.bone_name
            );
        }
    }

    let target_name = name_of(world, target)
        .ok_or(RagdollLoadError::MissingName(target))?
        .to_string();
    let Some(&target_record) = records.get(target_name.as_str()) else {
        if let Some(root) = ragdoll.root() {
            error!(
                "Ragdoll loader: {target_name} is not part of this ragdoll, select {} instead",
                root.bone_name
            );
        }
        return Err(RagdollLoadError::TargetNotRoot(target_name));
    };
    if target_record.joint.is_some() {
        warn!(
            "Ragdoll loader: {target_name} has joint settings, its joint will not be restored"
        );
    }

    let entities = subtree(world, target);
    let mut nodes: IndexMap<String, Entity> = IndexMap::with_capacity(entities.len());
    for &entity in &entities {
        if let Some(name) = name_of(world, entity) {
            nodes.insert(name.to_string(), entity);
        }
    }
    // A descendant sharing the target's name must not shadow it
    nodes.insert(target_name, target);

    for &entity in &entities {
        world
            .entity_mut(entity)
            .remove::<(CharacterJoint, BoneCollider, BoneRigidBody)>();
    }

    let mut report = RagdollLoadReport::default();

    attach_attributes(world, target, target_record, &mut report);

    let matched: Vec<(Entity, &BoneRecord)> = nodes
        .iter()
        .filter(|&(_, &entity)| entity != target)
        .filter_map(|(name, &entity)| {
            records
                .get(name.as_str())
                .map(|&record| (entity, record))
        })
        .collect();

    for &(entity, record) in &matched {
        attach_attributes(world, entity, record, &mut report);
    }

    // Joints go last: a joint may reference any bone's rigid body, not only its parent's.
    for &(entity, record) in &matched {
        let Some(settings) = &record.joint else {
            report.error(BoneIssue::MissingJointSettings {
                bone: record.bone_name.clone(),
            });
            continue;
        };

        let joint = match build_joint(settings) {
            Ok(joint) => joint,
            Err(source) => {
                report.error(BoneIssue::MalformedJoint {
                    bone: record.bone_name.clone(),
                    source,
                });
                continue;
            }
        };

        let connected_body = nodes
            .get(settings.connected_body.as_str())
            .copied()
            .filter(|&connected| world.get::<BoneRigidBody>(connected).is_some());
        if connected_body.is_none() {
            report.error(BoneIssue::UnresolvedConnection {
                bone: record.bone_name.clone(),
                connected_body: settings.connected_body.clone(),
            });
        }

        world.entity_mut(entity).insert(CharacterJoint {
            connected_body,
            ..joint
        });
    }

    info!(
        "Ragdoll loader: {} bones processed",
        report.bones_processed
    );

    Ok(report)
}

fn attach_attributes(
    world: &mut World,
    entity: Entity,
    record: &BoneRecord,
    report: &mut RagdollLoadReport,
) {
    match record
        .shape
        .as_ref()
        .map(|shape| build_collider(&record.bone_name, shape))
    {
        Some(Ok(collider)) => {
            world.entity_mut(entity).insert(collider);
        }
        Some(Err(issue)) => report.error(issue),
        None => report.error(BoneIssue::MissingShape {
            bone: record.bone_name.clone(),
        }),
    }

    match record.body {
        Some(body) => {
            world
                .entity_mut(entity)
                .insert(BoneRigidBody { mass: body.mass });
        }
        None => report.error(BoneIssue::MissingBody {
            bone: record.bone_name.clone(),
        }),
    }

    info!("Ragdoll loader: {} bone processed", record.bone_name);
    report.bones_processed += 1;
}

fn build_collider(bone: &str, shape: &ShapeSettings) -> Result<BoneCollider, BoneIssue> {
    let malformed = |source| BoneIssue::MalformedShape {
        bone: bone.to_string(),
        source,
    };

    let collider = match shape {
        ShapeSettings::Box(settings) => BoneCollider::new(
            settings.center.parse().map_err(malformed)?,
            ColliderShape::Cuboid(Cuboid {
                half_size: settings.size.parse().map_err(malformed)? / 2.,
            }),
        ),
        ShapeSettings::Sphere(settings) => BoneCollider::new(
            settings.center.parse().map_err(malformed)?,
            ColliderShape::Sphere(Sphere {
                radius: settings.radius,
            }),
        ),
        ShapeSettings::Capsule(settings) => {
            let axis = settings.axis().ok_or_else(|| BoneIssue::InvalidCapsuleAxis {
                bone: bone.to_string(),
                axis_index: settings.axis_index,
            })?;
            BoneCollider::new(
                settings.center.parse().map_err(malformed)?,
                ColliderShape::Capsule(
                    Capsule3d {
                        radius: settings.radius,
                        half_length: (settings.height / 2. - settings.radius).max(0.),
                    },
                    axis,
                ),
            )
        }
    };
    Ok(collider)
}

fn build_joint(settings: &JointSettings) -> Result<CharacterJoint, VectorParseError> {
    let spring = SoftJointLimitSpring {
        spring: LIMIT_SPRING,
        damper: LIMIT_DAMPER,
    };
    let limit = |settings: &LimitSettings| SoftJointLimit {
        limit: settings.limit,
        bounciness: LIMIT_BOUNCINESS,
        contact_distance: LIMIT_CONTACT_DISTANCE,
    };

    Ok(CharacterJoint {
        connected_body: None,
        anchor: settings.anchor.parse()?,
        axis: settings.axis.parse()?,
        connected_anchor: settings.connected_anchor.parse()?,
        swing_axis: settings.swing_axis.parse()?,
        twist_limit_spring: spring,
        swing_limit_spring: spring,
        low_twist_limit: limit(&settings.low_twist_limit),
        high_twist_limit: limit(&settings.high_twist_limit),
        swing1_limit: limit(&settings.swing1_limit),
        swing2_limit: limit(&settings.swing2_limit),
    })
}
