//! Text form of ragdoll definitions.
//!
//! Definitions are written as pretty-printed RON. Persisted bytes use a fixed single-byte
//! mapping where byte `0xNN` is the character `U+00NN`, so every byte value 0–255 survives a
//! read/write cycle unchanged. Characters above `U+00FF` can only appear inside RON strings and
//! are written there as `\u{...}` escapes.

use ron::ser::PrettyConfig;

use crate::core::{errors::CodecError, ragdoll::definition::RagdollDefinition};

pub fn encode(ragdoll: &RagdollDefinition) -> Result<String, CodecError> {
    Ok(ron::ser::to_string_pretty(ragdoll, PrettyConfig::default())?)
}

/// Parses and validates a definition. Nothing is returned unless the whole text is valid.
pub fn decode(text: &str) -> Result<RagdollDefinition, CodecError> {
    let ragdoll: RagdollDefinition = ron::de::from_str(text)?;
    ragdoll.validate()?;
    Ok(ragdoll)
}

pub fn encode_bytes(ragdoll: &RagdollDefinition) -> Result<Vec<u8>, CodecError> {
    string_to_latin1(&escape_wide_chars(&encode(ragdoll)?))
}

pub fn decode_bytes(bytes: &[u8]) -> Result<RagdollDefinition, CodecError> {
    decode(&latin1_to_string(bytes))
}

pub fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&byte| char::from(byte)).collect()
}

/// Replaces every character above `U+00FF` with a RON unicode escape.
fn escape_wide_chars(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if u32::from(ch) > 0xFF {
            escaped.push_str(&format!("\\u{{{:x}}}", u32::from(ch)));
        } else {
            escaped.push(ch);
        }
    }
    escaped
}

pub fn string_to_latin1(text: &str) -> Result<Vec<u8>, CodecError> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| {
            u8::try_from(ch).map_err(|_| CodecError::UnrepresentableChar { ch, position })
        })
        .collect()
}
