//! Process-wide site config.
//!
//! Set once at startup, read-only afterwards. Readers that run before
//! initialization see the built-in [`SITE`] literal.

use super::ConfigError;
use crate::config::{SITE, SiteConfig};
use std::sync::OnceLock;

/// Global config storage.
static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Fallback for reads before [`init_config`].
static BUILTIN: SiteConfig = SITE;

#[inline]
pub fn cfg() -> &'static SiteConfig {
    CONFIG.get().unwrap_or(&BUILTIN)
}

/// Install the loaded config for the rest of the process.
///
/// Fails if a config was already installed; the first one stays in place.
pub fn init_config(config: SiteConfig) -> Result<&'static SiteConfig, ConfigError> {
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    Ok(cfg())
}
