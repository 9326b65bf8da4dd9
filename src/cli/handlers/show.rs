use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{BAR_WIDTH, capitalize, format_bar, format_types};
use crate::config;
use crate::model::Pokemon;

pub fn handle_show(ctx: &CommandContext, id: u32, json: bool) -> Result<()> {
    let pokemon = tokio::runtime::Runtime::new()?
        .block_on(async { ctx.client.pokemon_by_id(id).await })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&pokemon)?);
    } else {
        print_pokemon(&pokemon);
    }
    Ok(())
}

fn print_pokemon(pokemon: &Pokemon) {
    println!(
        "{} {}  {}",
        pokemon.id_string().cyan().bold(),
        capitalize(&pokemon.name).bold(),
        format_types(&pokemon.types)
    );
    println!("{}", pokemon.genus.dimmed());

    println!();
    println!("{}", pokemon.flavor_text_flat());

    println!();
    println!("{}", "Abilities".bold());
    for ability in &pokemon.abilities {
        if ability.is_hidden {
            println!("  {} {}", ability.name, "(hidden)".red());
        } else {
            println!("  {}", ability.name);
        }
    }

    println!();
    println!("{}", "Metrics".bold());
    print_metric(
        "Height",
        &format!("{}m", f64::from(pokemon.height) / 10.0),
        pokemon.height,
        config::HEIGHT_SCALE,
    );
    print_metric(
        "Weight",
        &format!("{}kg", f64::from(pokemon.weight) / 10.0),
        pokemon.weight,
        config::WEIGHT_SCALE,
    );
    print_metric(
        "Base EXP",
        &format!("{} EXP", pokemon.base_exp),
        pokemon.base_exp,
        config::BASE_EXP_SCALE,
    );

    println!();
    println!("{}", "Stats".bold());
    for stat in &pokemon.stats {
        print_metric(
            &stat.display_name,
            &stat.value.to_string(),
            stat.value,
            config::STATS_SCALE,
        );
    }

    if let Some(chain) = &pokemon.evolution_chain {
        println!();
        println!("{}", "Evolution chain".bold());
        let mut parts: Vec<String> = Vec::new();
        for (i, stage) in chain.iter().enumerate() {
            if i > 0 {
                // The level label belongs to the transition into this stage.
                match stage.min_level {
                    Some(level) => parts.push(format!("-[Lvl {level}]->")),
                    None => parts.push("->".to_string()),
                }
            }
            parts.push(capitalize(&stage.name));
        }
        println!("  {}", parts.join(" "));
    }
}

fn print_metric(label: &str, text: &str, value: u32, scale: u32) {
    println!(
        "  {:<8} {:>9}  {}",
        label,
        text,
        format_bar(value, scale, BAR_WIDTH)
    );
}
