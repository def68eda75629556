//! `show` command: print the resolved config for the templating layer.

use super::OutputFormat;
use crate::config::SiteConfig;
use anyhow::Result;

pub fn show_config(config: &SiteConfig, format: OutputFormat, pretty: bool) -> Result<()> {
    println!("{}", render_config(config, format, pretty)?);
    Ok(())
}

/// Serialize the config using the template key names.
pub fn render_config(config: &SiteConfig, format: OutputFormat, pretty: bool) -> Result<String> {
    let out = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(config)?,
        OutputFormat::Json => serde_json::to_string(config)?,
        OutputFormat::Toml => toml::to_string_pretty(config)?,
    };
    Ok(out.trim_end().to_string())
}
