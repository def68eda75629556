//! siteconf - Typed site configuration for a static blog.
//!
//! Page templates and tooling read the site record through [`SITE`] (the
//! built-in literal) or [`cfg`] (the record installed at startup):
//!
//! ```ignore
//! use siteconf::{SITE, post::Pagination};
//!
//! let title = &SITE.title;
//! let lang = SITE.html_lang();
//! let pages = Pagination::from_config(&SITE).page_count(42);
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod post;
pub mod utils;

pub use config::{SITE, SiteConfig, TextDirection, cfg};
