use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use pokedex::cli::handlers::{CommandContext, ListParams};
use pokedex::cli::{Cli, Commands, handlers};
use pokedex::config::PokedexConfig;
use pokedex::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => PokedexConfig::load(Path::new(path))
            .with_context(|| format!("Failed to load config from {path}"))?,
        None => {
            let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
            PokedexConfig::load_or_default(&cwd)?
        }
    };

    // The TUI owns the terminal, so its logs may only go to a file
    let log_file = config.tui.log_file.clone().map(PathBuf::from);
    if matches!(cli.command, Commands::Tui) {
        logging::init_tui(cli.verbose, log_file);
    } else {
        logging::init(cli.verbose, log_file);
    }

    let ctx = CommandContext::new(config, cli.endpoint.as_deref())?;
    tracing::debug!(endpoint = %ctx.client.endpoint(), "Resolved configuration");

    match cli.command {
        Commands::List {
            limit,
            offset,
            page,
            search,
            json,
        } => handlers::handle_list(
            &ctx,
            ListParams {
                limit,
                offset,
                page,
                search,
                json,
            },
        ),
        Commands::Show { id, json } => handlers::handle_show(&ctx, id, json),
        Commands::Search { query, limit, json } => handlers::handle_search(&ctx, query, limit, json),
        Commands::Tui => handlers::handle_tui(ctx),
    }
}
