// src/crypto/mod.rs
//! Repeating-key XOR obfuscation rendered as lowercase hex
//!
//! Not encryption: anyone holding the output can brute-force the single
//! byte mask. Use it to keep ids out of casual view in URLs, nothing more.

mod decode;
mod encode;

pub use decode::decode;
pub use encode::encode;

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};

/// Hex text produced by [`encode`]; always even length, lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObfuscatedText(String);

impl ObfuscatedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ObfuscatedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ObfuscatedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ObfuscatedText {
    type Err = CoreError;

    /// Accepts any well-formed hex, normalising to lowercase
    fn from_str(s: &str) -> Result<Self> {
        let bytes = hex::decode(s)?;
        Ok(Self(hex::encode(bytes)))
    }
}

/// XOR of every key character code
///
/// Folding the whole key onto each character is the same as XOR-ing with
/// this single byte, so it is computed once per call.
pub(crate) fn key_mask(key: &str) -> Result<u8> {
    key.chars()
        .try_fold(0u8, |acc, c| -> Result<u8> { Ok(acc ^ char_to_byte(c)?) })
}

/// Code point as a byte, rejecting anything past U+00FF
pub(crate) fn char_to_byte(c: char) -> Result<u8> {
    u8::try_from(u32::from(c)).map_err(|_| CoreError::UnsupportedChar(c))
}
