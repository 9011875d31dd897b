//! Interactive board.
//!
//! Owns nothing itself: the board goes to the screen, the API and the tokio
//! handle go to the dispatcher, and the renderer loops until the user quits.

use anyhow::Result;
use postboard_runtime::{Board, Dispatcher};
use tracing::info;

use crate::context::ExecutionContext;
use crate::presentation::{BoardScreen, TuiRenderer};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let runtime = ctx.runtime()?;
    let (dispatcher, outcomes) = Dispatcher::new(ctx.api()?, runtime.handle().clone());
    let (board, initial) = Board::start(ctx.config().query_options());

    info!(endpoint = %ctx.config().endpoint, "starting post board");
    TuiRenderer::new(BoardScreen::new(board), dispatcher, outcomes).run(initial)
}
