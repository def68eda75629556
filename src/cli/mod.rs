//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod post;
pub mod show;

pub use args::{Cli, Commands, OutputFormat};
