mod asset_loader_error;
mod bone_issue;
mod capture_error;
mod codec_error;
mod definition_error;
mod file_error;
mod load_error;

pub use asset_loader_error::*;
pub use bone_issue::*;
pub use capture_error::*;
pub use codec_error::*;
pub use definition_error::*;
pub use file_error::*;
pub use load_error::*;
