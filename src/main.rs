use anyhow::Context;
use clap::Parser;

use gamehub::app::settings::{load_settings, load_settings_from};
use gamehub::cli::{listing, Cli};
use gamehub::logging::init_logging;
use gamehub::runner::run_app;
use gamehub::PathResolver;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log = init_logging(cli.log_file.as_deref());

    let settings = match &cli.config {
        Some(path) => load_settings_from(path)?,
        None => load_settings()?,
    };

    if cli.list {
        let catalog = settings.catalog().context("building the game catalog")?;
        print!("{}", listing(&catalog, &PathResolver::from_env()));
        return Ok(());
    }

    run_app(&settings)
}
