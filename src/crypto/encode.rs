// src/crypto/encode.rs
use super::{char_to_byte, key_mask, ObfuscatedText};
use crate::error::Result;

/// Obfuscate `text` under `key` → two lowercase hex digits per character
///
/// Every character of both inputs must be in U+0000..=U+00FF.
pub fn encode(key: &str, text: &str) -> Result<ObfuscatedText> {
    let mask = key_mask(key)?;
    let bytes = text
        .chars()
        .map(|c| char_to_byte(c).map(|b| b ^ mask))
        .collect::<Result<Vec<u8>>>()?;
    Ok(ObfuscatedText(hex::encode(bytes)))
}
