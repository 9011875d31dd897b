//! GraphQL access to the posts API.
//!
//! ```text
//! [ PostsApi ] <- implemented by -- [ GraphqlClient ] --(reqwest)--> endpoint
//!                                          |
//!                                   [ ResponseCache ]
//! ```

pub mod api;
pub mod cache;
pub mod client;
pub mod error;
pub mod graphql;
pub mod operations;

pub use api::PostsApi;
pub use cache::ResponseCache;
pub use client::{ClientOptions, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, FetchPolicy, GraphqlClient};
pub use error::{Error, Result};
pub use graphql::GraphQlError;
