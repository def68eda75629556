//! Site metadata checks: `website`, `author`, `profile`, `desc`, `title`, `ogImage`.

use crate::config::{ConfigDiagnostics, SiteConfig, util::check_http_url};
use std::path::Path;

/// Image extensions browsers and social crawlers accept for previews.
const OG_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "avif"];

impl SiteConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `website` is an absolute http(s) URL
    /// - `profile`, when set, is an absolute http(s) URL
    /// - `title` is not empty
    /// - `ogImage` is a file name under the public dir, not a URL or absolute path
    pub(crate) fn validate_info(&self, diag: &mut ConfigDiagnostics) {
        check_http_url(Self::FIELDS.website, &self.website, diag);

        if !self.profile.is_empty() {
            check_http_url(Self::FIELDS.profile, &self.profile, diag);
        }

        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "site title must not be empty",
                "e.g.: title = \"My Blog\"",
            );
        }

        if self.author.trim().is_empty() {
            diag.hint(Self::FIELDS.author, "author is empty, bylines will be blank");
        }

        if self.desc.trim().is_empty() {
            diag.hint(
                Self::FIELDS.desc,
                "description is empty, pages get no meta description",
            );
        }

        self.validate_og_image(diag);
    }

    fn validate_og_image(&self, diag: &mut ConfigDiagnostics) {
        let og = self.og_image.trim();

        if og.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.og_image,
                "default social image must not be empty",
                "put an image in the public dir and name it here, e.g.: ogImage = \"og.png\"",
            );
            return;
        }

        if og.contains("://") || og.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.og_image,
                format!("'{og}' must be a file name relative to the public dir"),
                "drop the scheme or leading `/`",
            );
            return;
        }

        let ext = Path::new(og)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        if !ext.is_some_and(|e| OG_IMAGE_EXTENSIONS.contains(&e.as_str())) {
            diag.hint(
                Self::FIELDS.og_image,
                format!(
                    "'{og}' is not a common image type ({})",
                    OG_IMAGE_EXTENSIONS.join(", ")
                ),
            );
        }
    }
}
