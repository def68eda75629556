//! `init` command: write a commented `site.toml`.

use crate::config::{
    SiteConfig,
    template::{CONFIG_FILE, generate_config_template},
};
use crate::log;
use anyhow::{Context, Result, bail};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Write `config` as a commented TOML file.
///
/// If `dry_run` is true, only prints the file to stdout.
pub fn write_site_config(
    config: &SiteConfig,
    target: Option<&Path>,
    force: bool,
    dry_run: bool,
) -> Result<()> {
    let content = generate_config_template(config).context("Failed to render site config")?;

    if dry_run {
        print!("{content}");
        return Ok(());
    }

    let path = resolve_target(target)?;
    write_config(&path, &content, force)?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// Resolve the output file: a directory gets `site.toml` appended.
fn resolve_target(target: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let path = match target {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => cwd.join(p),
        None => cwd.join(CONFIG_FILE),
    };
    Ok(if path.is_dir() {
        path.join(CONFIG_FILE)
    } else {
        path
    })
}

fn write_config(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "'{}' already exists.\n\
             Use `--force` to overwrite it.",
            path.display()
        );
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}
