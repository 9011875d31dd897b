use anyhow::Result;
use postboard_types::PageQueryOptions;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext, limit: Option<u32>) -> Result<()> {
    let limit = limit.unwrap_or(ctx.config().page_size);
    if limit == 0 {
        anyhow::bail!("--limit must be at least 1");
    }

    let api = ctx.api()?;
    let posts = ctx
        .runtime()?
        .block_on(api.posts(&PageQueryOptions::latest(limit)))?;

    let view_model = presenters::present_post_list(posts, limit);
    ConsoleRenderer::new(ctx.json_mode()).render(view_model)
}
