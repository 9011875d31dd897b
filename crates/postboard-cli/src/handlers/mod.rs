pub mod config;
pub mod create;
pub mod delete;
pub mod list;
pub mod tui;
pub mod update;
