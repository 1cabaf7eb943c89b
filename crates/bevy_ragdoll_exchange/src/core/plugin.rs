use bevy::prelude::*;

use super::{
    physics::{
        BoneCollider, BoneRigidBody, CapsuleAxis, CharacterJoint, ColliderShape, SoftJointLimit,
        SoftJointLimitSpring,
    },
    ragdoll::{
        apply::apply_ragdoll_handles,
        definition::{
            BodySettings, BoneRecord, BoxSettings, CapsuleSettings, JointSettings, LimitSettings,
            RagdollDefinition, ShapeSettings, SphereSettings,
        },
        definition_loader::RagdollDefinitionLoader,
        vector_text::VectorText,
    },
};

/// Adds ragdoll definition assets and rebuilds ragdolls on entities with a
/// [`RagdollHandle`](super::ragdoll::apply::RagdollHandle)
#[derive(Default)]
pub struct RagdollExchangePlugin;

impl Plugin for RagdollExchangePlugin {
    fn build(&self, app: &mut App) {
        self.register_types(app);
        app //
            .init_asset::<RagdollDefinition>()
            .init_asset_loader::<RagdollDefinitionLoader>()
            .add_systems(PreUpdate, apply_ragdoll_handles);
    }
}

impl RagdollExchangePlugin {
    fn register_types(&self, app: &mut App) {
        app //
            .register_type::<RagdollDefinition>()
            .register_asset_reflect::<RagdollDefinition>()
            .register_type::<BoneRecord>()
            .register_type::<JointSettings>()
            .register_type::<LimitSettings>()
            .register_type::<ShapeSettings>()
            .register_type::<BoxSettings>()
            .register_type::<SphereSettings>()
            .register_type::<CapsuleSettings>()
            .register_type::<BodySettings>()
            .register_type::<VectorText>()
            .register_type::<BoneCollider>()
            .register_type::<ColliderShape>()
            .register_type::<CapsuleAxis>()
            .register_type::<BoneRigidBody>()
            .register_type::<CharacterJoint>()
            .register_type::<SoftJointLimit>()
            .register_type::<SoftJointLimitSpring>();
    }
}
