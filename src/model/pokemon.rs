use serde::{Deserialize, Serialize};

/// Full detail entry for a single Pokémon, fully shaped for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,

    /// Height in decimetres, as reported by the dex.
    pub height: u32,

    /// Weight in hectograms, as reported by the dex.
    pub weight: u32,

    #[serde(rename = "baseEXP")]
    pub base_exp: u32,

    /// Animated sprite URL, derived from the id.
    pub gif: String,

    #[serde(rename = "flavorText")]
    pub flavor_text: String,

    pub genus: String,

    /// Types in ascending slot order.
    pub types: Vec<PokemonType>,

    /// Base stats in wire order, with display names resolved.
    pub stats: Vec<PokemonStat>,

    /// Abilities with the non-hidden ones first.
    pub abilities: Vec<PokemonAbility>,

    /// Absent for species that never evolve (single-stage chains).
    #[serde(rename = "evolutionChain", skip_serializing_if = "Option::is_none")]
    pub evolution_chain: Option<Vec<EvolutionStage>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub name: String,

    #[serde(rename = "displayName")]
    pub display_name: String,

    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub name: String,

    #[serde(rename = "isHidden")]
    pub is_hidden: bool,
}

/// One member of an evolution chain, ordered by dex id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionStage {
    pub id: u32,
    pub name: String,
    pub gif: String,

    /// Level of the evolution leading to this stage, when level-based.
    #[serde(rename = "minLevel")]
    pub min_level: Option<u32>,
}

/// A list row: just enough for a table or grid of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub id: u32,
    pub name: String,
    pub gif: String,
    pub types: Vec<PokemonType>,
}

/// One page of summaries plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonPage {
    pub count: u64,
    pub pokemons: Vec<PokemonSummary>,
}

impl Pokemon {
    /// Dex number formatted the way the games print it, e.g. `#025`.
    pub fn id_string(&self) -> String {
        format_id(self.id)
    }

    /// Flavor text with the embedded newlines and form feeds of the raw
    /// dex entry collapsed to single spaces, for terminal rendering.
    pub fn flavor_text_flat(&self) -> String {
        self.flavor_text
            .split(['\n', '\u{c}'])
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl PokemonSummary {
    pub fn id_string(&self) -> String {
        format_id(self.id)
    }
}

fn format_id(id: u32) -> String {
    format!("#{id:03}")
}
