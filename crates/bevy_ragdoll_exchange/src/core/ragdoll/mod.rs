pub mod apply;
pub mod capture;
pub mod codec;
pub mod definition;
pub mod definition_loader;
pub mod file;
pub mod reconstruct;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod vector_text;
