//! Proc macros for siteconf.
//!
//! # Config derive macro
//!
//! Generates field path accessors and per-field documentation.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "editPost", rename_all = "camelCase")]
//! pub struct EditPostConfig {
//!     /// Show the link on post pages.
//!     pub enabled: bool,
//!
//!     /// Base URL the post path is appended to.
//!     pub url: String,
//! }
//!
//! // Generates:
//! // - EditPostConfig::FIELDS.enabled -> FieldPath("editPost.enabled")
//! // - EditPostConfig::FIELD_DOCS     -> [("enabled", "Show the link on post pages."), ...]
//! // - EditPostConfig::TEMPLATE_SECTION == "editPost"
//! ```
//!
//! # Attributes
//!
//! - `#[config(section = "path")]` - TOML section path, required (`""` for the root table)
//! - `#[config(rename_all = "camelCase")]` - mirror serde's key renaming

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and FIELD_DOCS.
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
