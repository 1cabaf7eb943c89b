//! Export a selected ragdoll to a file, and load a file onto a selected root bone.

use std::{fs::File, io::Write, path::Path};

use bevy::{
    log::info,
    prelude::{Entity, World},
};

use crate::core::{
    errors::RagdollFileError,
    ragdoll::{
        capture::{RagdollCapture, capture_selection},
        codec::{decode_bytes, encode_bytes},
        reconstruct::{RagdollLoadReport, load_ragdoll},
    },
};

/// Extension used for ragdoll definition files, also registered with the asset loader
pub const RAGDOLL_FILE_EXTENSION: &str = "ragdoll.ron";

/// Captures the single selected root bone and writes it to `path`.
///
/// Nothing is written unless the capture succeeds.
pub fn export_ragdoll_file(
    world: &World,
    selection: &[Entity],
    path: impl AsRef<Path>,
) -> Result<RagdollCapture, RagdollFileError> {
    let path = path.as_ref();
    let capture = capture_selection(world, selection)?;
    let bytes = encode_bytes(&capture.ragdoll)?;

    let mut file = File::create(path)?;
    file.write_all(&bytes)?;
    file.flush()?;

    info!(
        "Ragdoll exported to {:?} ({} bones)",
        path,
        capture.ragdoll.bones.len()
    );
    Ok(capture)
}

/// Reads a ragdoll definition from `path` and rebuilds it on `target`.
pub fn load_ragdoll_file(
    world: &mut World,
    target: Entity,
    path: impl AsRef<Path>,
) -> Result<RagdollLoadReport, RagdollFileError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let ragdoll = decode_bytes(&bytes)?;
    info!("Loading ragdoll from {:?}", path);
    Ok(load_ragdoll(world, target, &ragdoll)?)
}
