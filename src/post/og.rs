//! Social preview image resolution.

use crate::config::SiteConfig;
use url::Url;

impl SiteConfig {
    /// Absolute URL of the social image for a post.
    ///
    /// Order: the post's own image, then the generated per-post image when
    /// `dynamicOgImage` is on, then the site default `ogImage`. Relative
    /// values are resolved against `website`. `None` if `website` is not a URL.
    pub fn og_image_url(&self, post_og: Option<&str>, slug: &str) -> Option<String> {
        let base = Url::parse(&self.website).ok()?;

        let path = match post_og.map(str::trim).filter(|s| !s.is_empty()) {
            Some(own) => own.to_string(),
            None if self.dynamic_og_image => format!("/posts/{}/index.png", slug.trim_matches('/')),
            None => format!("/{}", self.og_image.trim_start_matches('/')),
        };

        base.join(&path).ok().map(String::from)
    }

    /// Absolute URL of the site default social image.
    pub fn default_og_image_url(&self) -> Option<String> {
        let base = Url::parse(&self.website).ok()?;
        base.join(&format!("/{}", self.og_image.trim_start_matches('/')))
            .ok()
            .map(String::from)
    }
}
