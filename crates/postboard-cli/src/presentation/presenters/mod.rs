pub mod board;
pub mod config;
pub mod post;

pub use board::present_board;
pub use config::{present_config, present_config_init};
pub use post::{present_created, present_deleted, present_post_list, present_updated};
