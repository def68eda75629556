//! Locale checks: `lang` and `timezone`.

use crate::config::{ConfigDiagnostics, SiteConfig};
use regex::Regex;
use std::sync::LazyLock;

/// Language used when `lang` is left empty.
pub const DEFAULT_LANG: &str = "en";

/// BCP 47 shape: primary language plus optional script/region/variant subtags.
static RE_LANG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap());

/// IANA zone names under the top-level areas of the tz database.
static RE_TIMEZONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(UTC|GMT|(Africa|America|Antarctica|Arctic|Asia|Atlantic|Australia|Europe|Indian|Pacific|Etc)(/[A-Za-z0-9_+\-]+){1,2})$",
    )
    .unwrap()
});

/// Anything that could be a tz database name: `CET`, `EST5EDT`, `US/Eastern`.
static RE_TIMEZONE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_+\-]*(/[A-Za-z0-9_+\-]+)*$").unwrap());

/// Returns true if `tz` is a canonical IANA zone name (e.g. `Asia/Kolkata`).
pub fn is_iana_timezone(tz: &str) -> bool {
    RE_TIMEZONE.is_match(tz)
}

/// Returns true if `tz` is shaped like a tz database name, including the
/// legacy and backward-compatible ones (`CET`, `US/Eastern`).
pub fn is_timezone_name(tz: &str) -> bool {
    RE_TIMEZONE_NAME.is_match(tz)
}

/// Returns true if `lang` looks like a BCP 47 language tag (e.g. `zh-Hans`).
pub fn is_language_tag(lang: &str) -> bool {
    RE_LANG.is_match(lang)
}

impl SiteConfig {
    /// Value for the html `lang` attribute; empty `lang` falls back to `en`.
    pub fn html_lang(&self) -> &str {
        match self.lang.trim() {
            "" => DEFAULT_LANG,
            lang => lang,
        }
    }

    pub(crate) fn validate_locale(&self, diag: &mut ConfigDiagnostics) {
        let lang = self.lang.trim();
        if !lang.is_empty() && !is_language_tag(lang) {
            diag.error_with_hint(
                Self::FIELDS.lang,
                format!("'{lang}' is not a valid html lang code"),
                "use a language tag like \"en\", \"pt-BR\" or \"zh-Hans\", or leave it empty for \"en\"",
            );
        }

        let tz = self.timezone.trim();
        if !is_timezone_name(tz) {
            diag.error_with_hint(
                Self::FIELDS.timezone,
                format!("'{tz}' is not an IANA timezone"),
                "use a tz database name like \"Asia/Kolkata\" or \"UTC\", not an offset",
            );
        } else if !is_iana_timezone(tz) {
            diag.hint(
                Self::FIELDS.timezone,
                format!("'{tz}' is not an Area/Location name, make sure the tz database knows it"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SITE;

    #[test]
    fn test_language_tags() {
        for lang in ["en", "fr", "pt-BR", "zh-Hans", "zh-Hans-CN", "ast"] {
            assert!(is_language_tag(lang), "{lang}");
        }
        for lang in ["e", "english!", "en_US", "-en", "en-"] {
            assert!(!is_language_tag(lang), "{lang}");
        }
    }

    #[test]
    fn test_timezones() {
        for tz in [
            "UTC",
            "Asia/Kolkata",
            "America/New_York",
            "America/Argentina/Buenos_Aires",
            "Etc/GMT+5",
        ] {
            assert!(is_iana_timezone(tz), "{tz}");
        }
        for tz in ["", "IST", "Asia", "Mars/Olympus", "Asia/Kolkata/", "+05:30"] {
            assert!(!is_iana_timezone(tz), "{tz}");
        }
    }

    #[test]
    fn test_timezone_names() {
        for tz in ["US/Eastern", "Canada/Pacific", "CET", "EST5EDT", "Asia/Kolkata", "UTC"] {
            assert!(is_timezone_name(tz), "{tz}");
        }
        for tz in ["", "+05:30", "UTC+5:30", "Asia Kolkata", "Asia/Kolkata/", "/UTC"] {
            assert!(!is_timezone_name(tz), "{tz}");
        }
    }

    #[test]
    fn test_legacy_timezones_pass_validation() {
        for tz in ["US/Eastern", "Canada/Pacific", "CET", "EST5EDT"] {
            let mut config = SITE.clone();
            config.timezone = tz.into();
            let mut diag = ConfigDiagnostics::new();
            config.validate_locale(&mut diag);
            assert!(!diag.has_errors(), "{tz}: {diag}");
            assert_eq!(diag.hints().len(), 1, "{tz}");
            assert_eq!(diag.hints()[0].0, SiteConfig::FIELDS.timezone);
        }
    }

    #[test]
    fn test_html_lang_fallback() {
        let mut config = SITE.clone();
        assert_eq!(config.html_lang(), "en");

        config.lang = "".into();
        assert_eq!(config.html_lang(), DEFAULT_LANG);

        config.lang = "zh-Hans".into();
        assert_eq!(config.html_lang(), "zh-Hans");
    }

    #[test]
    fn test_validate_locale() {
        let mut diag = ConfigDiagnostics::new();
        SITE.validate_locale(&mut diag);
        assert!(diag.is_empty());

        let mut config = SITE.clone();
        config.lang = "english".into();
        config.timezone = "+05:30".into();
        let mut diag = ConfigDiagnostics::new();
        config.validate_locale(&mut diag);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field, SiteConfig::FIELDS.lang);
        assert_eq!(diag.errors()[1].field, SiteConfig::FIELDS.timezone);

        let mut config = SITE.clone();
        config.timezone = "".into();
        let mut diag = ConfigDiagnostics::new();
        config.validate_locale(&mut diag);
        assert!(diag.has_errors());
    }
}
