pub mod errors;
pub mod hierarchy;
pub mod physics;
pub mod plugin;
pub mod ragdoll;

pub mod prelude {
    use super::*;
    pub use errors::*;
    pub use physics::*;
    pub use plugin::RagdollExchangePlugin;
    pub use ragdoll::apply::{RagdollApplied, RagdollFailed, RagdollHandle};
    pub use ragdoll::capture::{RagdollCapture, capture_ragdoll, capture_selection};
    pub use ragdoll::codec::{decode, decode_bytes, encode, encode_bytes};
    pub use ragdoll::definition::*;
    pub use ragdoll::file::{export_ragdoll_file, load_ragdoll_file};
    pub use ragdoll::reconstruct::{RagdollLoadReport, load_ragdoll};
    pub use ragdoll::vector_text::VectorText;
}
