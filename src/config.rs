use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Highest National Dex id we serve, the end of Generation IV.
/// Query documents, id validation, and the TUI page count all derive
/// from this single constant.
pub const LAST_POKEMON_ID: u32 = 493;

/// Upper bound of any base stat, used to scale stat bars.
pub const STATS_SCALE: u32 = 255;

/// Upper bound of base experience, used to scale the EXP bar.
pub const BASE_EXP_SCALE: u32 = 255;

/// Heaviest entry in range: Wailord at 398 kg (hectograms on the wire).
pub const WEIGHT_SCALE: u32 = 3980;

/// Tallest entry in range: Wailord at 14.5 m (decimetres on the wire).
pub const HEIGHT_SCALE: u32 = 145;

pub const GRAPHQL_ENDPOINT: &str = "https://beta.pokeapi.co/graphql/v1beta";

pub const SPRITE_BASE_URL: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/versions/generation-v/black-white/animated";

/// Animated sprite URL for a dex id.
pub fn sprite_url(id: u32) -> String {
    format!("{SPRITE_BASE_URL}/{id}.gif")
}

/// Human-readable stat names as shown in the games.
pub fn stat_display_name(name: &str) -> &'static str {
    match name {
        "hp" => "HP",
        "attack" => "Attack",
        "defense" => "Defense",
        "special-attack" => "Sp. Atk",
        "special-defense" => "Sp. Def",
        "speed" => "Speed",
        _ => "Unknown",
    }
}

/// Badge color per type name, the palette the games use.
pub fn type_color(name: &str) -> (u8, u8, u8) {
    match name {
        "normal" => (0xA8, 0xA8, 0x78),
        "fire" => (0xF0, 0x80, 0x30),
        "water" => (0x68, 0x90, 0xF0),
        "electric" => (0xF8, 0xD0, 0x30),
        "grass" => (0x78, 0xC8, 0x50),
        "ice" => (0x98, 0xD8, 0xD8),
        "fighting" => (0xC0, 0x30, 0x28),
        "poison" => (0xA0, 0x40, 0xA0),
        "ground" => (0xE0, 0xC0, 0x68),
        "flying" => (0xA8, 0x90, 0xF0),
        "psychic" => (0xF8, 0x58, 0x88),
        "bug" => (0xA8, 0xB8, 0x20),
        "rock" => (0xB8, 0xA0, 0x38),
        "ghost" => (0x70, 0x58, 0x98),
        "dragon" => (0x70, 0x38, 0xF8),
        "dark" => (0x70, 0x58, 0x48),
        "steel" => (0xB8, 0xB8, 0xD0),
        "fairy" => (0xEE, 0x99, 0xAC),
        _ => (0x68, 0x68, 0x68),
    }
}

/// Color for a progress bar at the given fill percentage.
pub fn progress_color(percentage: f64) -> (u8, u8, u8) {
    if percentage > 75.0 {
        (0x00, 0xCC, 0x00)
    } else if percentage > 50.0 {
        (0xFF, 0xFF, 0x00)
    } else if percentage > 25.0 {
        (0xFF, 0xA5, 0x00)
    } else {
        (0xFF, 0x00, 0x00)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PokedexConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub list: ListSettings,

    #[serde(default)]
    pub tui: TuiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    GRAPHQL_ENDPOINT.to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSettings {
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    15
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiSettings {
    #[serde(default = "default_show_help_bar")]
    pub show_help_bar: bool,

    #[serde(default)]
    pub log_file: Option<String>,
}

fn default_show_help_bar() -> bool {
    true
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            show_help_bar: default_show_help_bar(),
            log_file: None,
        }
    }
}

impl PokedexConfig {
    /// Load an explicit config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PokedexConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Find `.pokedex.yml` from `start_path` upward and load it, falling
    /// back to defaults when no file exists anywhere up the tree.
    pub fn load_or_default(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(config_path) => Self::load(&config_path),
            None => Ok(Self::default()),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(".pokedex.yml");
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}
