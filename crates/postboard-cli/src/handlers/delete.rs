use anyhow::Result;
use postboard_types::PostId;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext, id: PostId) -> Result<()> {
    let api = ctx.api()?;
    let deleted = ctx.runtime()?.block_on(api.delete_post(&id))?;

    let view_model = presenters::present_deleted(&id, deleted);
    ConsoleRenderer::new(ctx.json_mode()).render(view_model)
}
