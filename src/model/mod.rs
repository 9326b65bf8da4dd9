//! Data models for the Pokédex.
//!
//! This module defines the view models produced by the query pipelines:
//!
//! - [`Pokemon`]: The full detail entry for a single Pokémon
//! - [`PokemonSummary`]: A list row (id, name, sprite, types)
//! - [`PokemonPage`]: One page of summaries plus the total match count
//!
//! All models serialize with the camelCase field names the catalog exposes
//! (`baseEXP`, `flavorText`, `isHidden`, `minLevel`, `evolutionChain`).

mod pokemon;

pub use pokemon::{
    EvolutionStage, Pokemon, PokemonAbility, PokemonPage, PokemonStat, PokemonSummary,
    PokemonType,
};
