// src/config/defaults.rs
use crate::config::app::{CleanupConfig, EmailConfig, ObfuscationConfig};
use crate::consts::DEFAULT_TEMP_FILE_TIMEOUT;

pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000/";
pub const DEFAULT_CONTACT_EMAIL: &str = "support@localhost";
pub const DEFAULT_OBFUSCATION_KEY: &str = "dev-obfuscation-key";

pub fn default_email() -> EmailConfig {
    EmailConfig {
        frontend_url: DEFAULT_FRONTEND_URL.into(),
        contact_email: DEFAULT_CONTACT_EMAIL.into(),
    }
}

pub fn default_cleanup() -> CleanupConfig {
    CleanupConfig {
        temp_file_timeout_secs: DEFAULT_TEMP_FILE_TIMEOUT.as_secs(),
    }
}

pub fn default_obfuscation() -> ObfuscationConfig {
    ObfuscationConfig {
        key: DEFAULT_OBFUSCATION_KEY.into(),
    }
}
