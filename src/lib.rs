//! # Pokedex - A CLI and TUI National Dex browser
//!
//! Pokedex browses the first four generations of the National Dex (up to id
//! 493) from the terminal. All data comes live from the PokeAPI GraphQL
//! endpoint; nothing is stored locally.
//!
//! ## Features
//!
//! - **Live data**: Queries the PokeAPI GraphQL API per page and per entry
//! - **CLI**: Paged listing, regex search and full dex entries, plain or JSON
//! - **TUI**: Terminal browser with keystroke-live search, built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # List the first page of the dex
//! pokedex list
//!
//! # Show one entry in full
//! pokedex show 25
//!
//! # Search by name (regex)
//! pokedex search "^char"
//!
//! # Browse interactively
//! pokedex tui
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and display tables
//! - [`error`]: Error types and result aliases
//! - [`model`]: Display-shaped data models (Pokemon, PokemonSummary, etc.)
//! - [`pokeapi`]: GraphQL client and query pipelines
//! - [`tui`]: Terminal user interface

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and display tables.
///
/// Handles `.pokedex.yml` configuration files plus the dex cutoff and the
/// color and scale tables shared by the CLI and the TUI.
pub mod config;

/// Error types and result aliases.
///
/// Defines `PokedexError` enum and `Result<T>` type alias.
pub mod error;

/// Data models shaped for display.
///
/// Includes `Pokemon`, `PokemonSummary`, `PokemonPage` and their parts.
pub mod model;

/// GraphQL client and query pipelines.
///
/// Builds the documents, posts them to the PokeAPI endpoint and validates
/// responses into [`model`] types.
pub mod pokeapi;

/// Terminal user interface.
///
/// Interactive dex browser built with ratatui.
pub mod tui;

pub mod logging;
