//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Typed site configuration for the blog templates
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Site config file (TOML). The built-in config is used when omitted
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the resolved site config
    #[command(visible_alias = "s")]
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Schema check the site config
    #[command(visible_alias = "c")]
    Check,

    /// Write a commented site.toml
    #[command(visible_alias = "i")]
    Init {
        /// Target file or directory (default: ./site.toml)
        #[arg(value_hint = clap::ValueHint::AnyPath)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,

        /// Print the file to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Print the "edit this page" link for a post source path
    #[command(visible_alias = "e")]
    EditLink {
        /// Post path relative to the repository (e.g. src/data/blog/hello.md)
        post_path: String,
    },

    /// Check whether a post is listed at a given time
    Visible {
        /// Publish datetime (YYYY-MM-DD, YYYY-MM-DDTHH:MM:SSZ or with ±HH:MM offset)
        publish: String,

        /// Reference time instead of the current clock
        #[arg(long)]
        now: Option<String>,

        /// Post is a draft
        #[arg(short, long)]
        draft: bool,

        /// Evaluate as the development server does
        #[arg(long)]
        dev: bool,
    },

    /// Print the absolute social image URL for a post
    #[command(visible_alias = "o")]
    OgImage {
        /// Post slug; without it the site default image is printed
        slug: Option<String>,

        /// The post's own ogImage, if it sets one
        #[arg(long)]
        image: Option<String>,
    },

    /// Show pagination for a number of posts
    #[command(visible_alias = "p")]
    Pages {
        /// Total number of published posts
        total: usize,
    },
}

/// Output format for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Toml,
}
