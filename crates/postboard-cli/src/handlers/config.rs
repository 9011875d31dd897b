use anyhow::Result;
use tracing::info;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};

/// Print the effective configuration (file values with flag overrides).
pub fn show(ctx: &ExecutionContext) -> Result<()> {
    let view_model =
        presenters::present_config(ctx.config_path(), ctx.config_exists(), ctx.config());
    ConsoleRenderer::new(ctx.json_mode()).render(view_model)
}

/// Write the effective configuration (defaults plus any `--endpoint`) to the
/// config path. An existing file is never overwritten.
pub fn init(ctx: &ExecutionContext) -> Result<()> {
    let path = ctx.config_path();
    let created = !ctx.config_exists();

    if created {
        ctx.config().save_to(path)?;
        info!(path = %path.display(), "wrote config file");
    }

    let view_model = presenters::present_config_init(path, created);
    ConsoleRenderer::new(ctx.json_mode()).render(view_model)
}
