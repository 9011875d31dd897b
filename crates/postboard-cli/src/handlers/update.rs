use anyhow::{Result, anyhow};
use postboard_types::{PostId, PostInput};

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

/// Update a post. Fields left as `None` keep the post's current value, which
/// costs one extra query.
pub fn handle(
    ctx: &ExecutionContext,
    id: PostId,
    title: Option<String>,
    body: Option<String>,
) -> Result<()> {
    let api = ctx.api()?;
    let runtime = ctx.runtime()?;

    let input = match (title, body) {
        (Some(title), Some(body)) => PostInput::new(title, body),
        (title, body) => {
            let current = runtime
                .block_on(api.post(&id))?
                .ok_or_else(|| anyhow!("Post {} not found", id))?;
            PostInput::new(
                title.unwrap_or(current.title),
                body.unwrap_or(current.body),
            )
        }
    };

    let updated = runtime.block_on(api.update_post(&id, &input))?;

    let view_model = presenters::present_updated(updated);
    ConsoleRenderer::new(ctx.json_mode()).render(view_model)
}
