use anyhow::Result;
use clap::{ColorChoice, Parser};
use siteconf::{
    cli::{self, Cli, Commands},
    config::{SiteConfig, init_config},
    logger,
    post::PostVisibility,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = init_config(SiteConfig::load(&cli)?)?;

    match &cli.command {
        Commands::Show { format, pretty } => cli::show::show_config(config, *format, *pretty),
        Commands::Check => cli::check::check_config(&cli, config),
        Commands::Init { path, force, dry } => {
            cli::init::write_site_config(config, path.as_deref(), *force, *dry)
        }
        Commands::EditLink { post_path } => cli::post::print_edit_link(config, post_path),
        Commands::Visible {
            publish,
            now,
            draft,
            dev,
        } => {
            let flags = PostVisibility {
                draft: *draft,
                dev: *dev,
            };
            cli::post::print_visibility(config, publish, now.as_deref(), flags)
        }
        Commands::OgImage { slug, image } => {
            cli::post::print_og_image(config, slug.as_deref(), image.as_deref())
        }
        Commands::Pages { total } => cli::post::print_pages(config, *total),
    }
}
