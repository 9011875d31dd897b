pub mod config;
pub mod post;
pub mod tui;
