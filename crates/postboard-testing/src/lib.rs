//! Testing infrastructure for postboard tests.
//!
//! This crate provides utilities for writing robust tests:
//! - `MockApi`: In-memory posts server implementing `PostsApi`
//! - `fixtures`: Sample posts
//! - `TestWorld`: Isolated config directory for driving the CLI binary

pub mod fixtures;
pub mod mock_api;
pub mod world;

pub use mock_api::{ApiCall, MockApi};
pub use world::{CliResult, TestWorld};
