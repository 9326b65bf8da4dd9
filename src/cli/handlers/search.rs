use anyhow::Result;

use super::CommandContext;
use super::utils::{print_pokemon_list, validate_search};

/// Search is the list pipeline with the query as the name filter.
pub fn handle_search(
    ctx: &CommandContext,
    query: String,
    limit: Option<u32>,
    json: bool,
) -> Result<()> {
    validate_search(&query)?;

    let limit = limit.unwrap_or(ctx.config.list.limit);
    let page = tokio::runtime::Runtime::new()?
        .block_on(async { ctx.client.pokemon_list(limit, 0, &query).await })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print_pokemon_list(&page, 0);
    }
    Ok(())
}
