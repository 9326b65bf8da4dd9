mod list;
mod search;
mod show;
mod tui;
mod utils;

pub use list::{ListParams, handle_list};
pub use search::handle_search;
pub use show::handle_show;
pub use tui::handle_tui;

use crate::config::PokedexConfig;
use crate::error::Result;
use crate::pokeapi::PokeApiClient;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: PokedexConfig,
    pub client: PokeApiClient,
}

impl CommandContext {
    /// Build the context; an explicit endpoint wins over the config file.
    pub fn new(config: PokedexConfig, endpoint_override: Option<&str>) -> Result<Self> {
        let endpoint = endpoint_override.unwrap_or(&config.api.endpoint);
        let client = PokeApiClient::new(endpoint)?;
        Ok(Self { config, client })
    }
}
