// NOTE: postboard layering
//
// - postboard-types: wire-level records (Post, PostInput, query options)
// - postboard-client: GraphQL transport plus a normalized response cache
// - postboard-runtime: the Board state machine, effect dispatch, config
// - postboard (this crate): argument parsing, handlers, presentation
//
// The Board never talks to the network. It returns an Effect, the handler
// runs it on tokio, and the Outcome comes back as an Action. The TUI loop is
// the only place state changes.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
