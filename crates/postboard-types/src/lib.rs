pub mod display;
pub mod error;
pub mod post;
pub mod query;

pub use display::DisplayedPost;
pub use error::{Error, Result};
pub use post::*;
pub use query::*;
