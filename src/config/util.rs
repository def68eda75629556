//! Configuration utility functions.

use crate::config::{ConfigDiagnostics, FieldPath};
use std::path::{Path, PathBuf};
use url::Url;

/// Check that `value` is an absolute http(s) URL with a host.
///
/// Records an error on `field` and returns `None` otherwise.
pub fn check_http_url(field: FieldPath, value: &str, diag: &mut ConfigDiagnostics) -> Option<Url> {
    match Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com/",
                );
                return None;
            }
            if parsed.host_str().is_none_or(str::is_empty) {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com/",
                );
                return None;
            }
            Some(parsed)
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL: {}", e),
                "use format like https://example.com/",
            );
            None
        }
    }
}

/// Expand `~` in a user-supplied config path.
pub fn expand_config_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

// ============================================================================
// tests
// ============================================================================
