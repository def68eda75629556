//! Scheduled post visibility.
//!
//! A post dated in the future still shows once "now" is within the
//! scheduled margin of its publish time. Drafts never show, except that the
//! development server shows every non-draft post regardless of date.

use crate::config::SiteConfig;
use crate::utils::date::UnixMillis;

/// Publish-time test: `now > publish - margin`.
pub fn is_publish_time_passed(publish: UnixMillis, now: UnixMillis, margin_ms: u64) -> bool {
    let margin = i64::try_from(margin_ms).unwrap_or(i64::MAX);
    now > publish.saturating_sub(margin)
}

/// Per-post flags that affect visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostVisibility {
    /// Post is marked as a draft.
    pub draft: bool,
    /// Rendering for the development server.
    pub dev: bool,
}

impl PostVisibility {
    pub fn is_visible(self, publish: UnixMillis, now: UnixMillis, margin_ms: u64) -> bool {
        !self.draft && (self.dev || is_publish_time_passed(publish, now, margin_ms))
    }
}

impl SiteConfig {
    /// Whether a post published at `publish` is listed at time `now`.
    pub fn is_post_visible(
        &self,
        publish: UnixMillis,
        now: UnixMillis,
        flags: PostVisibility,
    ) -> bool {
        flags.is_visible(publish, now, self.scheduled_post_margin)
    }
}
