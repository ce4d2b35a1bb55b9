// src/consts.rs
//! Shared constants — template placeholders and defaults

use std::time::Duration;

/// How long an uploaded temp file lives before cleanup
pub const DEFAULT_TEMP_FILE_TIMEOUT: Duration = Duration::from_secs(60);

/// Sign-off used when the recipient is a client
pub const CLIENT_SIGN_OFF: &str = "Your KPMG and KPMG Digital Collaboration Team";

/// Sign-off used for internal staff
pub const STAFF_SIGN_OFF: &str = "The KPMG Digital Collaboration Team";

/// Relative image path used by the email templates
pub const EMAIL_IMAGES_PATH: &str = "./emailImages/";

/// Env var pointing at the TOML config file
pub const CONFIG_ENV_VAR: &str = "HELPERS_CONFIG";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "helpers-config.toml";

/// Env var overriding the obfuscation key in the CLI
pub const OBFUSCATION_KEY_ENV_VAR: &str = "HELPERS_OBFUSCATION_KEY";
