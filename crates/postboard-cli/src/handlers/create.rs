use anyhow::Result;
use postboard_types::PostInput;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

pub fn handle(ctx: &ExecutionContext, title: String, body: String) -> Result<()> {
    let api = ctx.api()?;
    let input = PostInput::new(title, body);
    let created = ctx.runtime()?.block_on(api.create_post(&input))?;

    let view_model = presenters::present_created(created);
    ConsoleRenderer::new(ctx.json_mode()).render(view_model)
}
