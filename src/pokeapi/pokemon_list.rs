use super::client::{PokeApiClient, QueryDefinition};
use crate::config::{self, LAST_POKEMON_ID};
use crate::error::Result;
use crate::model::{PokemonPage, PokemonSummary, PokemonType};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static DOCUMENT: LazyLock<String> = LazyLock::new(|| {
    r#"query getPokemonsList($limit: Int!, $offset: Int!, $search: String) {
  pokemon_v2_pokemon_aggregate(
    where: { id: { _lte: LAST_ID }, name: { _regex: $search } }
  ) {
    aggregate {
      count
    }
  }
  pokemon_v2_pokemon(
    limit: $limit
    offset: $offset
    where: { id: { _lte: LAST_ID }, name: { _regex: $search } }
  ) {
    id
    name
    pokemon_v2_pokemontypes {
      slot
      pokemon_v2_type {
        name
      }
    }
  }
}"#
    .replace("LAST_ID", &LAST_POKEMON_ID.to_string())
});

/// The `getPokemonsList` query: one page of the dex plus the total count,
/// both filtered by a name regex.
pub struct GetPokemonsList;

#[derive(Debug, Serialize)]
pub struct ListVariables {
    pub limit: u32,
    pub offset: u32,
    pub search: String,
}

impl QueryDefinition for GetPokemonsList {
    type Variables = ListVariables;
    type Data = ListData;

    const OPERATION: &'static str = "getPokemonsList";

    fn document() -> &'static str {
        &DOCUMENT
    }
}

#[derive(Debug, Deserialize)]
pub struct ListData {
    pokemon_v2_pokemon_aggregate: AggregateRow,
    pokemon_v2_pokemon: Vec<SummaryRow>,
}

#[derive(Debug, Deserialize)]
struct AggregateRow {
    aggregate: CountRow,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    count: u64,
}

#[derive(Debug, Deserialize)]
struct SummaryRow {
    id: u32,
    name: String,
    pokemon_v2_pokemontypes: Vec<TypeRow>,
}

#[derive(Debug, Deserialize)]
struct TypeRow {
    slot: u32,
    pokemon_v2_type: NamedRef,
}

#[derive(Debug, Deserialize)]
struct NamedRef {
    name: String,
}

impl PokeApiClient {
    /// Fetch one page of the dex. `search` is forwarded verbatim as the
    /// name regex; the empty string matches every name. No escaping is
    /// applied here, callers own the pattern.
    pub async fn pokemon_list(
        &self,
        limit: u32,
        offset: u32,
        search: &str,
    ) -> Result<PokemonPage> {
        let data = self
            .fetch::<GetPokemonsList>(ListVariables {
                limit,
                offset,
                search: search.to_string(),
            })
            .await?;

        Ok(transform(data))
    }
}

fn transform(data: ListData) -> PokemonPage {
    let pokemons = data
        .pokemon_v2_pokemon
        .into_iter()
        .map(|row| {
            let mut types: Vec<PokemonType> = row
                .pokemon_v2_pokemontypes
                .into_iter()
                .map(|t| PokemonType {
                    slot: t.slot,
                    name: t.pokemon_v2_type.name,
                })
                .collect();
            types.sort_by_key(|t| t.slot);

            PokemonSummary {
                gif: config::sprite_url(row.id),
                id: row.id,
                name: row.name,
                types,
            }
        })
        .collect();

    PokemonPage {
        count: data.pokemon_v2_pokemon_aggregate.aggregate.count,
        pokemons,
    }
}
