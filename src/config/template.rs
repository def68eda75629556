//! Commented `site.toml` generation.
//!
//! Values come from a [`SiteConfig`] (normally [`SITE`](super::SITE)); comments
//! come from the field docs collected by `#[derive(Config)]`.

use super::{EditPostConfig, SiteConfig};
use std::fmt::Write;
use toml::{Table, Value};

/// Default config filename
pub const CONFIG_FILE: &str = "site.toml";

/// Render `config` as a TOML file with one comment per key.
pub fn generate_config_template(config: &SiteConfig) -> Result<String, toml::ser::Error> {
    let table = match Value::try_from(config)? {
        Value::Table(table) => table,
        _ => unreachable!("SiteConfig serializes to a table"),
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "# Site configuration (siteconf v{})",
        env!("CARGO_PKG_VERSION")
    );
    let _ = writeln!(out, "# Every key is required.\n");

    write_keys(&mut out, &table, SiteConfig::field_doc);

    for (key, value) in &table {
        let Value::Table(sub) = value else { continue };
        out.push('\n');
        if let Some(doc) = SiteConfig::field_doc(key) {
            write_comment(&mut out, doc);
        }
        let _ = writeln!(out, "[{key}]");
        write_keys(&mut out, sub, section_docs(key));
    }

    Ok(out)
}

/// Write the non-table entries of `table` as `key = value` lines.
fn write_keys(out: &mut String, table: &Table, docs: fn(&str) -> Option<&'static str>) {
    for (key, value) in table {
        if value.is_table() {
            continue;
        }
        if let Some(doc) = docs(key) {
            write_comment(out, doc);
        }
        let _ = writeln!(out, "{key} = {value}");
    }
}

fn write_comment(out: &mut String, doc: &str) {
    for line in doc.lines() {
        let _ = writeln!(out, "# {}", line.trim());
    }
}

fn section_docs(section: &str) -> fn(&str) -> Option<&'static str> {
    match section {
        s if s == EditPostConfig::TEMPLATE_SECTION => EditPostConfig::field_doc,
        _ => no_docs,
    }
}

fn no_docs(_: &str) -> Option<&'static str> {
    None
}
