//! GraphQL client for the PokeAPI beta endpoint.
//!
//! The transport ([`PokeApiClient`]) is generic over [`QueryDefinition`]s:
//! one named GraphQL document paired with its typed variables and its typed
//! response shape. Deserializing the response IS the schema validation; a
//! response that does not match the expected shape fails the whole call.
//!
//! Two queries are defined:
//!
//! - [`pokemon_by_id`]: one Pokémon's full detail (types, stats, abilities,
//!   flavor text, genus, evolution chain)
//! - [`pokemon_list`]: a paged, name-filtered list with the total count

mod client;
mod pokemon_by_id;
mod pokemon_list;

pub use client::{PokeApiClient, QueryDefinition};
pub use pokemon_by_id::GetPokemonById;
pub use pokemon_list::GetPokemonsList;
