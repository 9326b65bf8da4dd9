use crate::config;
use crate::error::{PokedexError, Result};
use crate::model::{PokemonPage, PokemonType};
use crate::pokeapi::{GetPokemonsList, QueryDefinition};
use colored::{ColoredString, Colorize};

/// Width of the stat and metric bars in CLI output.
pub const BAR_WIDTH: usize = 20;

/// Check a search pattern locally so a bad regex fails fast with a clear
/// message instead of surfacing as a server-side error.
pub fn validate_search(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Ok(());
    }
    regex::Regex::new(pattern).map_err(|e| {
        PokedexError::validation(
            GetPokemonsList::OPERATION,
            format!("invalid search pattern: {e}"),
        )
    })?;
    Ok(())
}

/// Capitalize a dex name for display; the wire keeps them lowercase.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Format a type name in its game badge color
pub fn format_type(name: &str) -> ColoredString {
    let (r, g, b) = config::type_color(name);
    name.truecolor(r, g, b)
}

/// Join a slot-sorted type list into one colored fragment
pub fn format_types(types: &[PokemonType]) -> String {
    types
        .iter()
        .map(|t| format_type(&t.name).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Progress bar for a value against its scale, colored by fill level
pub fn format_bar(value: u32, scale: u32, width: usize) -> ColoredString {
    let ratio = (f64::from(value) / f64::from(scale)).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    let (r, g, b) = config::progress_color(ratio * 100.0);
    bar.truecolor(r, g, b)
}

/// Print a page of summaries (compact format)
pub fn print_pokemon_list(page: &PokemonPage, offset: u32) {
    if page.pokemons.is_empty() {
        println!("No Pokémon found.");
        return;
    }

    for pokemon in &page.pokemons {
        println!(
            "{}  {:<12} {}",
            pokemon.id_string().cyan(),
            capitalize(&pokemon.name),
            format_types(&pokemon.types)
        );
    }

    let first = offset + 1;
    let last = offset + page.pokemons.len() as u32;
    println!(
        "{}",
        format!("Showing {}-{} of {}", first, last, page.count).dimmed()
    );
}
