use anyhow::Result;

use super::CommandContext;
use super::utils::{print_pokemon_list, validate_search};

/// Parameters for list operation
pub struct ListParams {
    pub limit: Option<u32>,
    pub offset: u32,
    pub page: Option<u32>,
    pub search: String,
    pub json: bool,
}

pub fn handle_list(ctx: &CommandContext, params: ListParams) -> Result<()> {
    validate_search(&params.search)?;

    let limit = params.limit.unwrap_or(ctx.config.list.limit);
    let offset = match params.page {
        Some(page) => page.saturating_sub(1) * limit,
        None => params.offset,
    };

    let page = tokio::runtime::Runtime::new()?
        .block_on(async { ctx.client.pokemon_list(limit, offset, &params.search).await })?;

    if params.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        print_pokemon_list(&page, offset);
    }
    Ok(())
}
