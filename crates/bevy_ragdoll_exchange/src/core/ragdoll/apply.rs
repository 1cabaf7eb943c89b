//! Rebuilding ragdolls from loaded assets.
//!
//! Insert a [`RagdollHandle`] on the root bone of a skeleton. Once the asset finishes loading,
//! [`apply_ragdoll_handles`] rebuilds the ragdoll on that bone's subtree and marks the entity
//! with [`RagdollApplied`], or [`RagdollFailed`] if the bone is not the ragdoll's root.

use bevy::{
    asset::{Assets, Handle},
    ecs::{component::Component, entity::Entity, query::Without, world::World},
    log::{error, info},
};

use crate::core::ragdoll::{
    definition::RagdollDefinition,
    reconstruct::{RagdollLoadReport, load_ragdoll},
};

#[derive(Component, Default, Clone)]
pub struct RagdollHandle(pub Handle<RagdollDefinition>);

#[derive(Component, Debug, Clone)]
pub struct RagdollApplied {
    pub report: RagdollLoadReport,
}

#[derive(Component, Debug, Clone)]
pub struct RagdollFailed;

pub fn apply_ragdoll_handles(world: &mut World) {
    let mut pending_query = world.query_filtered::<(Entity, &RagdollHandle), (
        Without<RagdollApplied>,
        Without<RagdollFailed>,
    )>();
    let pending: Vec<(Entity, Handle<RagdollDefinition>)> = pending_query
        .iter(world)
        .map(|(entity, handle)| (entity, handle.0.clone()))
        .collect();

    for (entity, handle) in pending {
        let Some(ragdoll) = world
            .get_resource::<Assets<RagdollDefinition>>()
            .and_then(|assets| assets.get(&handle))
            .cloned()
        else {
            continue;
        };

        match load_ragdoll(world, entity, &ragdoll) {
            Ok(report) => {
                info!(
                    "Ragdoll applied to {:?} with {} issues",
                    entity,
                    report.issues.len()
                );
                world.entity_mut(entity).insert(RagdollApplied { report });
            }
            Err(err) => {
                error!("Failed to apply ragdoll to {:?}: {}", entity, err);
                world.entity_mut(entity).insert(RagdollFailed);
            }
        }
    }
}
