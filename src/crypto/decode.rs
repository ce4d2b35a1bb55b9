// src/crypto/decode.rs
use super::key_mask;
use crate::error::Result;

/// Reverse [`encode`](super::encode) with the same key
///
/// `None` in gives `None` out. Odd-length or non-hex input is an error
/// instead of producing garbage characters.
pub fn decode(key: &str, cipher_text: Option<&str>) -> Result<Option<String>> {
    let Some(cipher_text) = cipher_text else {
        return Ok(None);
    };
    let mask = key_mask(key)?;
    let plain = hex::decode(cipher_text)?
        .into_iter()
        .map(|b| char::from(b ^ mask))
        .collect();
    Ok(Some(plain))
}
