use bevy::{
    asset::{AssetLoader, LoadContext, io::Reader},
    reflect::TypePath,
};

use crate::core::{
    errors::RagdollAssetLoaderError,
    ragdoll::{codec::decode_bytes, definition::RagdollDefinition, file::RAGDOLL_FILE_EXTENSION},
};

#[derive(Default, TypePath)]
pub struct RagdollDefinitionLoader;

impl AssetLoader for RagdollDefinitionLoader {
    type Asset = RagdollDefinition;
    type Settings = ();
    type Error = RagdollAssetLoaderError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = vec![];
        reader.read_to_end(&mut bytes).await?;
        let ragdoll = decode_bytes(&bytes)?;

        Ok(ragdoll)
    }

    fn extensions(&self) -> &[&str] {
        &[RAGDOLL_FILE_EXTENSION]
    }
}
