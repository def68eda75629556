//! Consumer-side rules that combine site config with post data.
//!
//! | Module       | Reads                                    |
//! |--------------|------------------------------------------|
//! | `visibility` | `scheduledPostMargin`                    |
//! | `paginate`   | `postPerIndex`, `postPerPage`            |
//! | `og`         | `website`, `ogImage`, `dynamicOgImage`   |
//!
//! Edit links live on [`EditPostConfig`](crate::config::EditPostConfig).

mod og;
mod paginate;
mod visibility;

pub use paginate::Pagination;
pub use visibility::{PostVisibility, is_publish_time_passed};
