pub mod action;
pub mod board;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod modal;

pub use action::{Action, Effect, Outcome};
pub use board::{Board, LoadState};
pub use config::{Config, resolve_config_path};
pub use dispatcher::{Dispatcher, run_effect};
pub use error::{Error, Result};
pub use modal::{Modal, ModalField};
