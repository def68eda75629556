//! Site configuration: the built-in [`SITE`] record and its TOML rendition.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Field groups and their checks
//! │   ├── direction  # dir
//! │   ├── edit       # [editPost]
//! │   ├── info       # website, author, profile, desc, title, ogImage
//! │   └── locale     # lang, timezone
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! ├── template.rs    # Commented site.toml generation
//! ├── util.rs        # URL checks, path expansion
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Keys
//!
//! Keys use the names the page templates read (`ogImage`, `postPerIndex`, ...).
//! Every key is required; there are no defaults to fall back on.

pub mod section;
pub mod template;
pub mod types;
mod util;

use util::expand_config_path;

pub use section::{EditPostConfig, ParseDirectionError, TextDirection};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::{cli::Cli, debug, log};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fs, num::NonZeroUsize, path::Path, time::Duration};

// ============================================================================
// root configuration
// ============================================================================

/// The site configuration record read by the page templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(rename_all = "camelCase")]
#[config(section = "", rename_all = "camelCase")]
pub struct SiteConfig {
    /// Canonical URL of the deployed site.
    pub website: Cow<'static, str>,

    /// Display name of the site owner.
    pub author: Cow<'static, str>,

    /// Link to the author's profile page.
    pub profile: Cow<'static, str>,

    /// Meta description.
    pub desc: Cow<'static, str>,

    /// Site title.
    pub title: Cow<'static, str>,

    /// Default social preview image, relative to the public dir.
    pub og_image: Cow<'static, str>,

    /// Show the light/dark theme toggle.
    pub light_and_dark_mode: bool,

    /// Posts listed on the home page.
    pub post_per_index: NonZeroUsize,

    /// Posts per paginated listing page.
    pub post_per_page: NonZeroUsize,

    /// Grace window in milliseconds before a future-dated post is published.
    pub scheduled_post_margin: u64,

    /// Enable the archives page.
    pub show_archives: bool,

    /// Show a back button on post detail pages.
    pub show_back_button: bool,

    /// "Edit this page" link.
    pub edit_post: EditPostConfig,

    /// Generate a social image per post.
    pub dynamic_og_image: bool,

    /// Text direction: ltr | rtl | auto
    pub dir: TextDirection,

    /// html lang code; leave empty for "en".
    pub lang: Cow<'static, str>,

    /// Default timezone for post dates (IANA name).
    pub timezone: Cow<'static, str>,
}

/// Unwrap a positive count during constant evaluation.
///
/// A zero here is a compile error when used in a `const` item.
const fn positive(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(n) => n,
        None => panic!("pagination counts must be positive"),
    }
}

/// Fifteen minutes.
const SCHEDULED_POST_MARGIN_MS: u64 = 15 * 60 * 1000;

/// The built-in site configuration.
pub const SITE: SiteConfig = SiteConfig {
    website: Cow::Borrowed("https://lazybuilds.com/"),
    author: Cow::Borrowed("Gautam G Sabhahit"),
    profile: Cow::Borrowed("https://lazybuilds.com/"),
    desc: Cow::Borrowed(
        "Product-focused engineer and former startup CTO building scalable systems in AI, \
         Blockchain, and Fintech. Exploring LLMs, RAG systems, and multi-tenant SaaS.",
    ),
    title: Cow::Borrowed("LazyBuilds"),
    og_image: Cow::Borrowed("astropaper-og.jpg"),
    light_and_dark_mode: true,
    post_per_index: positive(4),
    post_per_page: positive(4),
    scheduled_post_margin: SCHEDULED_POST_MARGIN_MS,
    show_archives: true,
    show_back_button: true,
    edit_post: EditPostConfig {
        enabled: true,
        text: Cow::Borrowed("Edit page"),
        url: Cow::Borrowed("https://github.com/gauthamgsabahit/personal-blog/edit/master/"),
    },
    dynamic_og_image: true,
    dir: TextDirection::Ltr,
    lang: Cow::Borrowed("en"),
    timezone: Cow::Borrowed("Asia/Kolkata"),
};

impl Default for SiteConfig {
    fn default() -> Self {
        SITE
    }
}

impl SiteConfig {
    /// Resolve the config for this run.
    ///
    /// Uses the built-in [`SITE`] unless `--config` names a TOML file.
    /// Either way the result is schema checked before it is returned.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let config = match &cli.config {
            Some(path) => {
                let path = expand_config_path(path);
                debug!("config"; "loading {}", path.display());
                Self::from_path(&path)?
            }
            None => {
                debug!("config"; "using built-in site config");
                SITE
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Scheduled post margin as a [`Duration`].
    pub const fn scheduled_post_margin(&self) -> Duration {
        Duration::from_millis(self.scheduled_post_margin)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Schema check the whole record.
    ///
    /// Collects all errors and returns them at once; hints are printed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let diag = self.diagnose();
        diag.print_hints();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Run every check without printing anything.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        self.validate_info(&mut diag);
        self.edit_post.validate(&mut diag);
        self.validate_locale(&mut diag);
        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// The built-in config as a TOML table, for tests to tweak before parsing.
#[cfg(test)]
pub fn test_config_table() -> toml::Table {
    match toml::Value::try_from(&SITE).unwrap() {
        toml::Value::Table(table) => table,
        other => panic!("config serialized to {other:?}"),
    }
}

/// Parse the built-in config after applying `edit` to its TOML table.
/// Panics if there are unknown fields (to catch key typos in tests).
#[cfg(test)]
pub fn test_parse_config(edit: impl FnOnce(&mut toml::Table)) -> Result<SiteConfig, ConfigError> {
    let mut table = test_config_table();
    edit(&mut table);
    let content = toml::to_string(&table).unwrap();
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&content)?;
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    Ok(parsed)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    const KEYS: [&str; 17] = [
        "website",
        "author",
        "profile",
        "desc",
        "title",
        "ogImage",
        "lightAndDarkMode",
        "postPerIndex",
        "postPerPage",
        "scheduledPostMargin",
        "showArchives",
        "showBackButton",
        "editPost",
        "dynamicOgImage",
        "dir",
        "lang",
        "timezone",
    ];

    #[test]
    fn test_every_key_present_in_order() {
        let json = serde_json::to_value(&SITE).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, KEYS);

        let edit = json["editPost"].as_object().unwrap();
        assert!(edit["enabled"].is_boolean());
        assert!(edit["text"].is_string());
        assert!(edit["url"].is_string());
    }

    #[test]
    fn test_value_types() {
        let json = serde_json::to_value(&SITE).unwrap();
        for key in ["website", "author", "profile", "desc", "title", "ogImage", "lang", "timezone"] {
            assert!(json[key].is_string(), "{key}");
        }
        for key in [
            "lightAndDarkMode",
            "showArchives",
            "showBackButton",
            "dynamicOgImage",
        ] {
            assert!(json[key].is_boolean(), "{key}");
        }
        for key in ["postPerIndex", "postPerPage", "scheduledPostMargin"] {
            assert!(json[key].is_u64(), "{key}");
        }
        assert_eq!(json["dir"], "ltr");
    }

    #[test]
    fn test_field_paths_match_keys() {
        assert_eq!(SiteConfig::FIELDS.og_image.as_str(), "ogImage");
        assert_eq!(SiteConfig::FIELDS.post_per_page.as_str(), "postPerPage");
        assert_eq!(SiteConfig::FIELDS.edit_post.as_str(), "editPost");
        assert_eq!(SiteConfig::FIELD_DOCS.len(), KEYS.len());
        for ((key, _), expected) in SiteConfig::FIELD_DOCS.iter().zip(KEYS) {
            assert_eq!(*key, expected);
        }
    }

    #[test]
    fn test_builtin_values() {
        assert_eq!(SITE.post_per_index.get(), 4);
        assert_eq!(SITE.post_per_page.get(), 4);
        assert_eq!(SITE.scheduled_post_margin, 900_000);
        assert_eq!(SITE.scheduled_post_margin(), Duration::from_secs(15 * 60));
        assert_eq!(SITE.dir, TextDirection::Ltr);
        assert_eq!(SITE.dir.as_str(), "ltr");
        assert_eq!(SITE.timezone, "Asia/Kolkata");
        assert_eq!(SiteConfig::default(), SITE);
    }

    #[test]
    fn test_builtin_passes_validation() {
        let diag = SITE.diagnose();
        assert!(diag.is_empty(), "{diag}");
        assert!(SITE.validate().is_ok());
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let a = SITE;
        let b = SITE;
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let parsed = test_parse_config(|_| {}).unwrap();
        assert_eq!(parsed, SITE);
    }

    #[test]
    fn test_pagination_counts() {
        let parsed = test_parse_config(|t| {
            t.insert("postPerIndex".into(), Value::Integer(4));
            t.insert("postPerPage".into(), Value::Integer(4));
        })
        .unwrap();
        assert_eq!(parsed.post_per_index.get(), 4);
        assert_eq!(parsed.post_per_page.get(), 4);
    }

    #[test]
    fn test_zero_count_rejected() {
        let result = test_parse_config(|t| {
            t.insert("postPerPage".into(), Value::Integer(0));
        });
        assert!(matches!(result, Err(ConfigError::Toml(_))));

        let result = test_parse_config(|t| {
            t.insert("postPerIndex".into(), Value::Integer(-2));
        });
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_negative_margin_rejected() {
        let result = test_parse_config(|t| {
            t.insert("scheduledPostMargin".into(), Value::Integer(-1));
        });
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_dir_parsing() {
        let parsed = test_parse_config(|t| {
            t.insert("dir".into(), Value::String("rtl".into()));
        })
        .unwrap();
        assert_eq!(parsed.dir, TextDirection::Rtl);

        let result = test_parse_config(|t| {
            t.insert("dir".into(), Value::String("xyz".into()));
        });
        let err = result.unwrap_err().to_string();
        assert!(err.contains("xyz"), "{err}");
    }

    #[test]
    fn test_missing_field_rejected() {
        let result = test_parse_config(|t| {
            t.remove("timezone");
        });
        let err = result.unwrap_err().to_string();
        assert!(err.contains("timezone"), "{err}");

        let result = test_parse_config(|t| {
            if let Some(Value::Table(edit)) = t.get_mut("editPost") {
                edit.remove("url");
            }
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_type_rejected() {
        let result = test_parse_config(|t| {
            t.insert("postPerIndex".into(), Value::String("4".into()));
        });
        assert!(result.is_err());

        let result = test_parse_config(|t| {
            t.insert("showArchives".into(), Value::String("yes".into()));
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let mut table = test_config_table();
        table.insert("theme".into(), Value::String("dark".into()));
        let content = toml::to_string(&table).unwrap();
        let (config, ignored) = SiteConfig::parse_with_ignored(&content).unwrap();

        assert_eq!(config, SITE);
        assert_eq!(ignored, vec!["theme".to_string()]);
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[editPost\nenabled = true");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = SiteConfig::from_path(Path::new("/nonexistent/site.toml"));
        assert!(matches!(result, Err(ConfigError::Io(..))));
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let mut config = SITE;
        config.website = "not a url".into();
        config.title = "".into();
        config.timezone = "+05:30".into();
        config.edit_post.url = "https://example.com/edit".into();

        let Err(ConfigError::Diagnostics(diag)) = config.validate() else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.len(), 4);
    }

    fn cli_with_config(path: &Path) -> Cli {
        use clap::Parser;
        let path = path.to_str().unwrap();
        Cli::try_parse_from(["siteconf", "-C", path, "check"]).unwrap()
    }

    #[test]
    fn test_load_from_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, toml::to_string(&test_config_table()).unwrap()).unwrap();

        let config = SiteConfig::load(&cli_with_config(&path)).unwrap();
        assert_eq!(config, SITE);
    }

    #[test]
    fn test_load_rejects_file_failing_validation() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("site.toml");
        let mut table = test_config_table();
        table.insert("website".into(), Value::String("not a url".into()));
        table.insert("timezone".into(), Value::String("+05:30".into()));
        fs::write(&path, toml::to_string(&table).unwrap()).unwrap();

        let err = SiteConfig::load(&cli_with_config(&path)).unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field, SiteConfig::FIELDS.website);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut copy = SITE.clone();
        copy.title = "Changed".into();
        assert_eq!(SITE.title, "LazyBuilds");
        assert_ne!(copy, SITE);
    }
}
