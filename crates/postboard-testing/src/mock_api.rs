//! In-memory stand-in for the GraphQL endpoint.
//!
//! Behaves like a tiny posts server (ids assigned on create, updates and
//! deletes applied to its store) and records every call it receives.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use postboard_client::{Error, GraphQlError, PostsApi, Result};
use postboard_types::{PageQueryOptions, Post, PostId, PostInput, SortOrder};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Posts(PageQueryOptions),
    Post(PostId),
    CreatePost(PostInput),
    UpdatePost(PostId, PostInput),
    DeletePost(PostId),
}

#[derive(Default)]
struct MockState {
    store: Vec<Post>,
    next_id: u64,
    calls: Vec<ApiCall>,
    query_error: Option<String>,
    mutation_error: Option<String>,
}

pub struct MockApi {
    state: Mutex<MockState>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockApi {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts
            .iter()
            .filter_map(|p| p.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(100)
            .max(100)
            + 1;

        Self {
            state: Mutex::new(MockState {
                store: posts,
                next_id,
                ..MockState::default()
            }),
        }
    }

    /// Make the `posts` query fail with this message.
    pub fn failing_query(self, message: &str) -> Self {
        self.lock().query_error = Some(message.to_string());
        self
    }

    /// Make every mutation fail with this message.
    pub fn failing_mutations(self, message: &str) -> Self {
        self.lock().mutation_error = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    pub fn stored_posts(&self) -> Vec<Post> {
        self.lock().store.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn server_error(message: &str) -> Error {
    Error::GraphQl(vec![GraphQlError::new(message)])
}

fn numeric_id(post: &Post) -> u64 {
    post.id.as_str().parse().unwrap_or(0)
}

#[async_trait]
impl PostsApi for MockApi {
    async fn posts(&self, options: &PageQueryOptions) -> Result<Vec<Post>> {
        let mut state = self.lock();
        state.calls.push(ApiCall::Posts(options.clone()));
        if let Some(message) = &state.query_error {
            return Err(server_error(message));
        }

        let mut posts = state.store.clone();
        if let Some(sort) = &options.sort {
            posts.sort_by_key(numeric_id);
            if sort.order == SortOrder::Desc {
                posts.reverse();
            }
        }
        if let Some(slice) = &options.slice {
            posts.truncate(slice.limit as usize);
        }
        Ok(posts)
    }

    async fn post(&self, id: &PostId) -> Result<Option<Post>> {
        let mut state = self.lock();
        state.calls.push(ApiCall::Post(id.clone()));
        if let Some(message) = &state.query_error {
            return Err(server_error(message));
        }
        Ok(state.store.iter().find(|p| &p.id == id).cloned())
    }

    async fn create_post(&self, input: &PostInput) -> Result<Option<Post>> {
        let mut state = self.lock();
        state.calls.push(ApiCall::CreatePost(input.clone()));
        if let Some(message) = &state.mutation_error {
            return Err(server_error(message));
        }

        let post = Post {
            id: PostId::from(state.next_id),
            title: input.title.clone(),
            body: input.body.clone(),
            user: None,
        };
        state.next_id += 1;
        state.store.push(post.clone());
        Ok(Some(post))
    }

    async fn update_post(&self, id: &PostId, input: &PostInput) -> Result<Option<Post>> {
        let mut state = self.lock();
        state
            .calls
            .push(ApiCall::UpdatePost(id.clone(), input.clone()));
        if let Some(message) = &state.mutation_error {
            return Err(server_error(message));
        }

        let Some(stored) = state.store.iter_mut().find(|p| &p.id == id) else {
            return Ok(None);
        };
        stored.title = input.title.clone();
        stored.body = input.body.clone();
        Ok(Some(stored.clone()))
    }

    async fn delete_post(&self, id: &PostId) -> Result<bool> {
        let mut state = self.lock();
        state.calls.push(ApiCall::DeletePost(id.clone()));
        if let Some(message) = &state.mutation_error {
            return Err(server_error(message));
        }

        let before = state.store.len();
        state.store.retain(|p| &p.id != id);
        Ok(state.store.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_posts;

    #[tokio::test]
    async fn test_posts_are_sorted_and_sliced() {
        let api = MockApi::with_posts(sample_posts(12));
        let posts = api.posts(&PageQueryOptions::default()).await.unwrap();

        assert_eq!(posts.len(), 10);
        assert_eq!(posts[0].id, PostId::from(12));
        assert_eq!(posts[9].id, PostId::from(3));
    }

    #[tokio::test]
    async fn test_created_ids_follow_store() {
        let api = MockApi::with_posts(sample_posts(3));
        let created = api
            .create_post(&PostInput::new("T", "B"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(created.id, PostId::from(101));
    }
}
