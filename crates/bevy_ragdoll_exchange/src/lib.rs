//! # Bevy Ragdoll Exchange
//!
//! **Bevy Ragdoll Exchange** captures the physics setup of a ragdoll from a live skeleton and
//! rebuilds it on another skeleton with the same bone names.
//!
//! ## Introduction
//!
//! A ragdoll lives on a hierarchy of named entities (bones). Each bone can carry three physics
//! components:
//! - [`BoneCollider`]: a cuboid, sphere or capsule collision volume.
//! - [`BoneRigidBody`]: the bone's mass.
//! - [`CharacterJoint`]: a constraint linking the bone's rigid body to another bone's rigid
//!   body, with twist and swing limits.
//!
//! [`capture_ragdoll`] flattens the root bone and every descendant with a joint into a
//! [`RagdollDefinition`], a list of records that reference each other by bone name only.
//! [`load_ragdoll`] does the reverse: it strips the physics components from a target subtree,
//! attaches colliders and rigid bodies to every bone with a matching record, and then attaches
//! joints, resolving connected bodies by name. Because only names are stored, the skeleton the
//! ragdoll is loaded onto may be a different instance, or have extra bones.
//!
//! Definitions are saved as `*.ragdoll.ron` files:
//! ```ron
//! (
//!     bones: [
//!         (
//!             bone_name: "Pelvis",
//!             joint: None,
//!             shape: Some(Box((center: "(0, 0, 0)", size: "(0.3, 0.2, 0.25)"))),
//!             body: Some((mass: 5.0)),
//!         ),
//!         (
//!             bone_name: "Spine",
//!             joint: Some((
//!                 connected_body: "Pelvis",
//!                 anchor: "(0, -0.1, 0)",
//!                 axis: "(1, 0, 0)",
//!                 connected_anchor: "(0, 0.25, 0)",
//!                 swing_axis: "(0, 0, 1)",
//!                 low_twist_limit: (limit: -30.0, bounciness: 0.0),
//!                 high_twist_limit: (limit: 30.0, bounciness: 0.0),
//!                 swing1_limit: (limit: 40.0, bounciness: 0.0),
//!                 swing2_limit: (limit: 20.0, bounciness: 0.0),
//!             )),
//!             shape: Some(Capsule((center: "(0, 0.15, 0)", radius: 0.1, height: 0.45, axis_index: 1))),
//!             body: Some((mass: 3.0)),
//!         ),
//!     ],
//! )
//! ```
//!
//! Use [`export_ragdoll_file`] and [`load_ragdoll_file`] to go through files directly, or add
//! [`RagdollExchangePlugin`] and insert a [`RagdollHandle`] on a root bone to have the ragdoll
//! rebuilt as soon as the asset is loaded:
//! ```ignore
//!     commands
//!         .entity(pelvis)
//!         .insert(RagdollHandle(asset_server.load("ragdolls/human.ragdoll.ron")));
//! ```
//!
//! [`BoneCollider`]: crate::core::physics::BoneCollider
//! [`BoneRigidBody`]: crate::core::physics::BoneRigidBody
//! [`CharacterJoint`]: crate::core::physics::CharacterJoint
//! [`RagdollDefinition`]: crate::core::ragdoll::definition::RagdollDefinition
//! [`capture_ragdoll`]: crate::core::ragdoll::capture::capture_ragdoll
//! [`load_ragdoll`]: crate::core::ragdoll::reconstruct::load_ragdoll
//! [`export_ragdoll_file`]: crate::core::ragdoll::file::export_ragdoll_file
//! [`load_ragdoll_file`]: crate::core::ragdoll::file::load_ragdoll_file
//! [`RagdollExchangePlugin`]: crate::core::plugin::RagdollExchangePlugin
//! [`RagdollHandle`]: crate::core::ragdoll::apply::RagdollHandle

pub mod core;

pub mod prelude {
    pub use super::core::prelude::*;
}
