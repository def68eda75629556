//! Field groups of the site config and their schema checks.
//!
//! | Module      | Fields                                              |
//! |-------------|-----------------------------------------------------|
//! | `direction` | `dir`                                               |
//! | `edit`      | `[editPost]`                                        |
//! | `info`      | `website`, `author`, `profile`, `desc`, `title`, `ogImage` |
//! | `locale`    | `lang`, `timezone`                                  |

mod direction;
mod edit;
mod info;
mod locale;

pub use direction::{ParseDirectionError, TextDirection};
pub use edit::EditPostConfig;
pub use locale::{DEFAULT_LANG, is_iana_timezone, is_language_tag, is_timezone_name};
