// src/config/mod.rs
//! Configuration system for engagement-helpers
//!
//! TOML file with serde defaults for every section. `load()` gives a
//! lazily-initialised global for binaries; library functions take the
//! section they need as an argument instead of reading it themselves.

pub use app::{load, load_from, CleanupConfig, Config, EmailConfig, ObfuscationConfig};

mod app;
mod defaults;
