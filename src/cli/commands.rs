use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(
    author,
    version,
    about = "A CLI and TUI Pokédex for the first four generations"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .pokedex.yml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// GraphQL endpoint to query instead of the public PokeAPI
    #[arg(long, global = true, env = "POKEDEX_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List a page of the dex
    #[command(visible_alias = "ls")]
    List {
        /// Page size (default from config, 15 out of the box)
        #[arg(short, long)]
        limit: Option<u32>,

        /// Number of entries to skip
        #[arg(short, long, default_value_t = 0, conflicts_with = "page")]
        offset: u32,

        /// 1-based page number, an alternative to --offset
        #[arg(short, long)]
        page: Option<u32>,

        /// Regex filter on names, forwarded to the data source verbatim
        #[arg(short, long, default_value = "")]
        search: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one Pokémon's full dex entry
    #[command(visible_alias = "info")]
    Show {
        /// National Dex id (1-493)
        id: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the dex by name
    #[command(visible_alias = "find")]
    Search {
        /// Regex pattern to match names against
        query: String,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<u32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open the interactive TUI browser
    #[command(visible_alias = "browse")]
    Tui,
}
