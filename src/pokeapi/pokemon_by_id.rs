use super::client::{PokeApiClient, QueryDefinition};
use crate::config::{self, LAST_POKEMON_ID};
use crate::error::{PokedexError, Result};
use crate::model::{EvolutionStage, Pokemon, PokemonAbility, PokemonStat, PokemonType};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static DOCUMENT: LazyLock<String> = LazyLock::new(|| {
    r#"query getPokemonById($id: Int!) {
  pokemon_v2_pokemon(limit: 1, where: { id: { _eq: $id } }) {
    id
    name
    height
    base_experience
    weight
    pokemon_v2_pokemontypes {
      slot
      pokemon_v2_type {
        name
      }
    }
    pokemon_v2_pokemonstats {
      base_stat
      pokemon_v2_stat {
        name
      }
    }
    pokemon_v2_pokemonspecy {
      pokemon_v2_pokemonspeciesflavortexts(
        limit: 1
        where: { pokemon_v2_language: { name: { _eq: "en" } } }
      ) {
        flavor_text
      }
      pokemon_v2_pokemonspeciesnames(
        limit: 1
        where: { pokemon_v2_language: { name: { _eq: "en" } } }
      ) {
        genus
      }
      pokemon_v2_evolutionchain {
        pokemon_v2_pokemonspecies(where: { id: { _lte: LAST_ID } }) {
          id
          name
          pokemon_v2_pokemonevolutions {
            min_level
          }
        }
      }
    }
    pokemon_v2_pokemonabilities {
      slot
      is_hidden
      pokemon_v2_ability {
        name
      }
    }
  }
}"#
    .replace("LAST_ID", &LAST_POKEMON_ID.to_string())
});

/// The `getPokemonById` query: one Pokémon's full dex entry.
pub struct GetPokemonById;

#[derive(Debug, Serialize)]
pub struct ByIdVariables {
    pub id: u32,
}

impl QueryDefinition for GetPokemonById {
    type Variables = ByIdVariables;
    type Data = ByIdData;

    const OPERATION: &'static str = "getPokemonById";

    fn document() -> &'static str {
        &DOCUMENT
    }
}

// Wire shape of the response. Field names match the endpoint's v2 schema;
// deserializing into these structs is the validation step. The flavor text
// and genus arrays must hold exactly one element each, which the fixed-size
// arrays enforce.

#[derive(Debug, Deserialize)]
pub struct ByIdData {
    pokemon_v2_pokemon: Vec<PokemonRow>,
}

#[derive(Debug, Deserialize)]
struct PokemonRow {
    id: u32,
    name: String,
    height: u32,
    base_experience: u32,
    weight: u32,
    pokemon_v2_pokemontypes: Vec<TypeRow>,
    pokemon_v2_pokemonstats: Vec<StatRow>,
    pokemon_v2_pokemonabilities: Vec<AbilityRow>,
    pokemon_v2_pokemonspecy: SpeciesRow,
}

#[derive(Debug, Deserialize)]
struct TypeRow {
    slot: u32,
    pokemon_v2_type: NamedRef,
}

#[derive(Debug, Deserialize)]
struct StatRow {
    base_stat: u32,
    pokemon_v2_stat: NamedRef,
}

#[derive(Debug, Deserialize)]
struct AbilityRow {
    #[allow(dead_code)]
    slot: u32,
    is_hidden: bool,
    pokemon_v2_ability: NamedRef,
}

#[derive(Debug, Deserialize)]
struct NamedRef {
    name: String,
}

#[derive(Debug, Deserialize)]
struct SpeciesRow {
    pokemon_v2_pokemonspeciesflavortexts: [FlavorTextRow; 1],
    pokemon_v2_pokemonspeciesnames: [GenusRow; 1],
    pokemon_v2_evolutionchain: EvolutionChainRow,
}

#[derive(Debug, Deserialize)]
struct FlavorTextRow {
    flavor_text: String,
}

#[derive(Debug, Deserialize)]
struct GenusRow {
    genus: String,
}

#[derive(Debug, Deserialize)]
struct EvolutionChainRow {
    pokemon_v2_pokemonspecies: Vec<ChainSpeciesRow>,
}

#[derive(Debug, Deserialize)]
struct ChainSpeciesRow {
    id: u32,
    name: String,
    pokemon_v2_pokemonevolutions: Vec<EvolutionRow>,
}

#[derive(Debug, Deserialize)]
struct EvolutionRow {
    min_level: Option<u32>,
}

impl PokeApiClient {
    /// Fetch one Pokémon's full detail entry.
    ///
    /// Ids outside `1..=LAST_POKEMON_ID` fail validation before any
    /// request is made.
    pub async fn pokemon_by_id(&self, id: u32) -> Result<Pokemon> {
        if !(1..=LAST_POKEMON_ID).contains(&id) {
            return Err(PokedexError::validation(
                GetPokemonById::OPERATION,
                format!("id {id} is outside the dex range 1..={LAST_POKEMON_ID}"),
            ));
        }

        let data = self.fetch::<GetPokemonById>(ByIdVariables { id }).await?;
        let row = data.pokemon_v2_pokemon.into_iter().next().ok_or_else(|| {
            PokedexError::validation(
                GetPokemonById::OPERATION,
                format!("no pokemon with id {id} in the response"),
            )
        })?;

        Ok(transform(row))
    }
}

fn transform(row: PokemonRow) -> Pokemon {
    let PokemonRow {
        id,
        name,
        height,
        base_experience,
        weight,
        pokemon_v2_pokemontypes,
        pokemon_v2_pokemonstats,
        pokemon_v2_pokemonabilities,
        pokemon_v2_pokemonspecy,
    } = row;

    let [flavor] = pokemon_v2_pokemonspecy.pokemon_v2_pokemonspeciesflavortexts;
    let [genus] = pokemon_v2_pokemonspecy.pokemon_v2_pokemonspeciesnames;

    let mut types: Vec<PokemonType> = pokemon_v2_pokemontypes
        .into_iter()
        .map(|t| PokemonType {
            slot: t.slot,
            name: t.pokemon_v2_type.name,
        })
        .collect();
    types.sort_by_key(|t| t.slot);

    let stats: Vec<PokemonStat> = pokemon_v2_pokemonstats
        .into_iter()
        .map(|s| PokemonStat {
            display_name: config::stat_display_name(&s.pokemon_v2_stat.name).to_string(),
            name: s.pokemon_v2_stat.name,
            value: s.base_stat,
        })
        .collect();

    let mut abilities: Vec<PokemonAbility> = pokemon_v2_pokemonabilities
        .into_iter()
        .map(|a| PokemonAbility {
            name: a.pokemon_v2_ability.name,
            is_hidden: a.is_hidden,
        })
        .collect();
    // Stable sort: non-hidden abilities first, wire order within each bucket.
    abilities.sort_by_key(|a| a.is_hidden);

    let chain = pokemon_v2_pokemonspecy
        .pokemon_v2_evolutionchain
        .pokemon_v2_pokemonspecies;
    // A chain with a single member means the species never evolves.
    let evolution_chain = (chain.len() > 1).then(|| {
        let mut stages: Vec<EvolutionStage> = chain
            .into_iter()
            .map(|species| EvolutionStage {
                gif: config::sprite_url(species.id),
                min_level: species
                    .pokemon_v2_pokemonevolutions
                    .first()
                    .and_then(|e| e.min_level),
                id: species.id,
                name: species.name,
            })
            .collect();
        stages.sort_by_key(|s| s.id);
        stages
    });

    Pokemon {
        gif: config::sprite_url(id),
        id,
        name,
        height,
        weight,
        base_exp: base_experience,
        flavor_text: flavor.flavor_text,
        genus: genus.genus,
        types,
        stats,
        abilities,
        evolution_chain,
    }
}
