//! Post queries: `edit-link`, `visible`, `og-image`, `pages`.

use crate::config::{EditPostConfig, SiteConfig};
use crate::debug;
use crate::post::{Pagination, PostVisibility};
use crate::utils::date::{DateTimeUtc, UnixMillis, now_millis};
use anyhow::{Context, Result, bail};
use std::fmt::Write;

pub fn print_edit_link(config: &SiteConfig, post_path: &str) -> Result<()> {
    println!("{}", edit_link(config, post_path)?);
    Ok(())
}

fn edit_link(config: &SiteConfig, post_path: &str) -> Result<String> {
    match config.edit_post.link_for(post_path) {
        Some(link) => Ok(link),
        None => bail!(
            "edit links are disabled ({} = false)",
            EditPostConfig::FIELDS.enabled.as_str()
        ),
    }
}

pub fn print_visibility(
    config: &SiteConfig,
    publish: &str,
    now: Option<&str>,
    flags: PostVisibility,
) -> Result<()> {
    let publish = parse_datetime(publish)?;
    let now = match now {
        Some(s) => parse_datetime(s)?,
        None => now_millis(),
    };

    debug!(
        "visible";
        "publish {} ms, now {} ms, margin {} ms ({})",
        publish,
        now,
        config.scheduled_post_margin,
        config.timezone
    );

    let visible = config.is_post_visible(publish, now, flags);
    println!("{}", if visible { "visible" } else { "hidden" });
    Ok(())
}

fn parse_datetime(s: &str) -> Result<UnixMillis> {
    DateTimeUtc::parse(s)
        .map(DateTimeUtc::to_unix_millis)
        .with_context(|| {
            format!("invalid datetime '{s}', expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ")
        })
}

pub fn print_og_image(config: &SiteConfig, slug: Option<&str>, image: Option<&str>) -> Result<()> {
    println!("{}", og_image(config, slug, image)?);
    Ok(())
}

fn og_image(config: &SiteConfig, slug: Option<&str>, image: Option<&str>) -> Result<String> {
    let url = match slug {
        Some(slug) => config.og_image_url(image, slug),
        None => config.default_og_image_url(),
    };
    url.with_context(|| {
        format!(
            "cannot resolve the social image against {} = '{}'",
            SiteConfig::FIELDS.website.as_str(),
            config.website
        )
    })
}

pub fn print_pages(config: &SiteConfig, total: usize) -> Result<()> {
    print!("{}", pages_report(config, total));
    Ok(())
}

fn pages_report(config: &SiteConfig, total: usize) -> String {
    let pagination = Pagination::from_config(config);
    let pages = pagination.page_count(total);

    let mut out = String::new();
    let _ = writeln!(out, "index: {} of {} posts", pagination.index_count(total), total);
    let _ = writeln!(out, "pages: {pages}");
    for page in 1..=pages {
        if let Some(range) = pagination.page_range(page, total) {
            let _ = writeln!(out, "  {page}: posts {}-{}", range.start + 1, range.end);
        }
    }
    out
}
