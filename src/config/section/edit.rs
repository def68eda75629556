//! `[editPost]`: "edit this page" link on post detail pages.
//!
//! # Example
//!
//! ```toml
//! [editPost]
//! enabled = true
//! text = "Edit page"
//! url = "https://github.com/alice/blog/edit/main/"
//! ```

use crate::config::{ConfigDiagnostics, util::check_http_url};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Edit link settings. The link is `url` followed by the post's source path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[config(section = "editPost", rename_all = "camelCase")]
pub struct EditPostConfig {
    /// Show the edit link on post pages.
    pub enabled: bool,

    /// Link label.
    pub text: Cow<'static, str>,

    /// Base URL the post's relative source path is appended to (keep the trailing `/`).
    pub url: Cow<'static, str>,
}

impl EditPostConfig {
    /// Edit link for a post, `None` when the link is disabled.
    ///
    /// Exactly one `/` separates the base URL from the post path.
    pub fn link_for(&self, post_path: &str) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let base = self.url.trim_end_matches('/');
        let path = post_path.trim_start_matches('/');
        Some(format!("{base}/{path}"))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enabled {
            return;
        }

        if self.text.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.text,
                format!("{} is set but the label is empty", Self::FIELDS.enabled),
                "e.g.: text = \"Edit page\"",
            );
        }

        if check_http_url(Self::FIELDS.url, &self.url, diag).is_some() && !self.url.ends_with('/')
        {
            diag.error_with_hint(
                Self::FIELDS.url,
                "base URL must end with `/` so post paths append cleanly",
                format!("use \"{}/\"", self.url),
            );
        }
    }
}
