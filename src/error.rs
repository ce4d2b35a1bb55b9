// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Malformed cipher text: {0}")]
    MalformedCipherText(#[from] hex::FromHexError),

    #[error("Character {0:?} is outside the single-byte range")]
    UnsupportedChar(char),

    #[error("Unknown {kind} value: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Unexpected request list shape: {0}")]
    Shape(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
