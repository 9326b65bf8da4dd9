//! Terminal user interface for the Pokédex.
//!
//! An interactive browser built with ratatui: the paged Pokémon list on the
//! left, the detail card for the selected entry on the right. Every page and
//! every detail card is fetched live from the GraphQL API.
//!
//! ## Usage
//!
//! ```bash
//! pokedex tui
//! ```
//!
//! ## Keybindings
//!
//! - `↑/↓` or `j/k`: Navigate up/down
//! - `←/→` or `p/n`: Previous/next page
//! - `g/G`: First/last entry on the page
//! - `J/K`: Scroll the detail card
//! - `/`: Search by name (live while typing)
//! - `r`: Refetch the current page
//! - `?`: Help
//! - `q`: Quit

pub mod app;
pub mod theme;

mod ui;

pub use app::run_tui;
