// src/lib.rs
//! engagement-helpers — small, stateless helpers for the engagement portal backend
//!
//! Features:
//! - Project status derivation from request due dates and states
//! - Repeating-key XOR obfuscation rendered as hex
//! - Email template placeholder substitution
//! - File-type classification and deferred temp-file cleanup

pub mod config;
pub mod consts;
pub mod crypto;
pub mod email;
pub mod enums;
pub mod error;
pub mod file_ops;
pub mod request_list;
pub mod status;
pub mod text;
pub mod time;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use crypto::{decode, encode, ObfuscatedText};
pub use email::{render as render_email, EmailParams};
pub use enums::{DerivedStatus, FileType, ProjectStatus, RequestStatus};
pub use error::{CoreError, Result};
pub use file_ops::{parse_file_type, remove_temp_file};
pub use status::{resolve as resolve_status, Project, Request};
