//! Obfuscate / reveal a value from the command line
//!
//! Usage: obfuscate <encode|decode> <text>
//! Key comes from HELPERS_OBFUSCATION_KEY, else the loaded config.

use anyhow::{bail, Context, Result};
use engagement_helpers::consts::OBFUSCATION_KEY_ENV_VAR;
use engagement_helpers::{decode, encode, load_config};
use tracing::{debug, info};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(mode), Some(text)) = (args.next(), args.next()) else {
        bail!("usage: obfuscate <encode|decode> <text>");
    };

    let key = match std::env::var(OBFUSCATION_KEY_ENV_VAR) {
        Ok(key) => {
            debug!("using key from {OBFUSCATION_KEY_ENV_VAR}");
            key
        }
        Err(_) => {
            info!("{OBFUSCATION_KEY_ENV_VAR} not set, using configured key");
            load_config().obfuscation.key.clone()
        }
    };

    let output = match mode.as_str() {
        "encode" => encode(&key, &text)
            .context("Text contains characters outside U+0000..=U+00FF")?
            .into_inner(),
        "decode" => decode(&key, Some(text.as_str()))
            .context("Input is not valid obfuscated hex")?
            .unwrap_or_default(),
        other => bail!("unknown mode {other:?}, expected encode or decode"),
    };

    println!("{output}");
    Ok(())
}
