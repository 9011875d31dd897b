use async_trait::async_trait;
use postboard_types::{PageQueryOptions, Post, PostId, PostInput};

use crate::Result;

/// Operations the application performs against the posts API.
///
/// `GraphqlClient` is the production implementation; tests substitute an
/// in-memory one.
#[async_trait]
pub trait PostsApi: Send + Sync {
    async fn posts(&self, options: &PageQueryOptions) -> Result<Vec<Post>>;

    /// A single post, `Ok(None)` when the server has no such id.
    async fn post(&self, id: &PostId) -> Result<Option<Post>>;

    /// `Ok(None)` when the server answered with a null post.
    async fn create_post(&self, input: &PostInput) -> Result<Option<Post>>;

    async fn update_post(&self, id: &PostId, input: &PostInput) -> Result<Option<Post>>;

    /// `Ok(false)` when the server refused or did not find the post.
    async fn delete_post(&self, id: &PostId) -> Result<bool>;
}
