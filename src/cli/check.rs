//! `check` command.
//!
//! Loading already rejects an invalid config, so reaching this point means
//! the schema check passed; report what was checked.

use crate::{cli::Cli, config::SiteConfig, log};
use anyhow::Result;

pub fn check_config(cli: &Cli, config: &SiteConfig) -> Result<()> {
    log!("check"; "{} is valid", source_name(cli));
    log!("check"; "{}", summary(config));
    Ok(())
}

fn summary(config: &SiteConfig) -> String {
    format!(
        "{} ({}), lang {}, {} posts on index, {} per page, {} ms schedule margin",
        config.title,
        config.website,
        config.html_lang(),
        config.post_per_index,
        config.post_per_page,
        config.scheduled_post_margin
    )
}

fn source_name(cli: &Cli) -> String {
    match &cli.config {
        Some(path) => format!("'{}'", path.display()),
        None => "built-in site config".to_string(),
    }
}
