use engagement_helpers::crypto::{decode, encode, ObfuscatedText};
use engagement_helpers::error::CoreError;
use rand::Rng;

fn random_latin1(rng: &mut impl Rng, max_len: usize) -> String {
    let len = rng.random_range(0..=max_len);
    (0..len).map(|_| char::from(rng.random::<u8>())).collect()
}

#[test]
fn test_roundtrip_random_single_byte_text() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let key = random_latin1(&mut rng, 16);
        let text = random_latin1(&mut rng, 64);
        let encoded = encode(&key, &text).unwrap();
        assert_eq!(decode(&key, Some(encoded.as_str())).unwrap(), Some(text));
    }
}

#[test]
fn test_output_is_two_lowercase_hex_digits_per_char() {
    let text = "Quarterly Review 2024 - ÿ";
    let encoded = encode("K3y!", text).unwrap();
    assert_eq!(encoded.as_str().len(), 2 * text.chars().count());
    assert!(encoded
        .as_str()
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
}

#[test]
fn test_decode_none_is_none() {
    assert_eq!(decode("any-key", None).unwrap(), None);
}

#[test]
fn test_empty_text_encodes_to_empty() {
    let encoded = encode("key", "").unwrap();
    assert_eq!(encoded.as_str(), "");
    assert_eq!(decode("key", Some("")).unwrap(), Some(String::new()));
}

#[test]
fn test_wrong_key_does_not_reveal_text() {
    let encoded = encode("right", "secret-id-17").unwrap();
    let revealed = decode("wrong", Some(encoded.as_str())).unwrap();
    assert_ne!(revealed.as_deref(), Some("secret-id-17"));
}

#[test]
fn test_malformed_cipher_text_is_rejected() {
    assert!(matches!(
        decode("key", Some("abc")),
        Err(CoreError::MalformedCipherText(_))
    ));
    assert!(matches!(
        decode("key", Some("zz")),
        Err(CoreError::MalformedCipherText(_))
    ));
}

#[test]
fn test_wide_chars_are_rejected() {
    assert!(matches!(
        encode("key", "snow ☃"),
        Err(CoreError::UnsupportedChar('☃'))
    ));
    assert!(matches!(
        encode("ключ", "text"),
        Err(CoreError::UnsupportedChar('к'))
    ));
}

#[test]
fn test_decode_accepts_uppercase_hex() {
    let encoded = encode("salt", "hello").unwrap();
    let upper = encoded.as_str().to_ascii_uppercase();
    assert_eq!(decode("salt", Some(upper.as_str())).unwrap().as_deref(), Some("hello"));

    let parsed: ObfuscatedText = upper.parse().unwrap();
    assert_eq!(parsed, encoded);
}
