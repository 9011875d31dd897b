use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use postboard_types::{PageQueryOptions, Post, PostId, PostInput};
use tracing::{debug, warn};

use crate::api::PostsApi;
use crate::cache::ResponseCache;
use crate::graphql::{self, GraphQlRequest};
use crate::operations::{
    CreatePost, CreatePostVariables, DeletePost, DeletePostVariables, Operation, PostById,
    PostVariables, Posts, PostsVariables, UpdatePost, UpdatePostVariables,
};
use crate::{Error, Result};

pub const DEFAULT_ENDPOINT: &str = "https://graphqlzero.almansi.me/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How the `posts` query consults the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPolicy {
    /// Answer from the cache when the same variables were seen before.
    #[default]
    CacheFirst,
    /// Always go to the network, still writing the result to the cache.
    NetworkOnly,
}

#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub endpoint: String,
    pub timeout: Duration,
    pub fetch_policy: FetchPolicy,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            fetch_policy: FetchPolicy::default(),
        }
    }
}

/// GraphQL client bound to one endpoint, with a normalized response cache.
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
    fetch_policy: FetchPolicy,
    cache: Mutex<ResponseCache>,
}

impl GraphqlClient {
    pub fn new(options: ClientOptions) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(concat!("postboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: options.endpoint,
            fetch_policy: options.fetch_policy,
            cache: Mutex::new(ResponseCache::new()),
        })
    }

    /// Send one operation and decode its `data` payload.
    pub async fn execute<O: Operation>(&self, variables: &O::Variables) -> Result<O::Data> {
        let request = GraphQlRequest::for_operation::<O>(variables);
        debug!(operation = O::NAME, endpoint = %self.endpoint, "sending graphql operation");

        let response = self.http.post(&self.endpoint).json(&request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            warn!(operation = O::NAME, status = status.as_u16(), "graphql request failed");
            return Err(Error::Status {
                code: status.as_u16(),
                body: String::from_utf8_lossy(&body).trim().to_string(),
            });
        }

        graphql::decode::<O>(&body)
    }

    /// Run `f` against the cache, recovering a poisoned lock.
    pub fn with_cache<R>(&self, f: impl FnOnce(&mut ResponseCache) -> R) -> R {
        let mut guard = match self.cache.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }
}

fn list_key(variables: &PostsVariables) -> String {
    let options = serde_json::to_string(&variables.options).unwrap_or_default();
    format!("{}({})", Posts::NAME, options)
}

#[async_trait]
impl PostsApi for GraphqlClient {
    async fn posts(&self, options: &PageQueryOptions) -> Result<Vec<Post>> {
        let variables = PostsVariables {
            options: Some(options.clone()),
        };
        let key = list_key(&variables);

        if self.fetch_policy == FetchPolicy::CacheFirst
            && let Some(posts) = self.with_cache(|cache| cache.read_list(&key))
        {
            debug!(key = %key, count = posts.len(), "posts answered from cache");
            return Ok(posts);
        }

        let posts = self.execute::<Posts>(&variables).await?.into_posts();
        self.with_cache(|cache| cache.write_list(key, &posts));
        Ok(posts)
    }

    async fn post(&self, id: &PostId) -> Result<Option<Post>> {
        if self.fetch_policy == FetchPolicy::CacheFirst
            && let Some(post) = self.with_cache(|cache| cache.read_post(id))
        {
            debug!(id = %id, "post answered from cache");
            return Ok(Some(post));
        }

        let variables = PostVariables { id: id.clone() };
        let post = self.execute::<PostById>(&variables).await?.post;
        if let Some(post) = &post {
            self.with_cache(|cache| cache.write_post(post));
        }
        Ok(post)
    }

    async fn create_post(&self, input: &PostInput) -> Result<Option<Post>> {
        let variables = CreatePostVariables {
            input: input.clone(),
        };
        let created = self.execute::<CreatePost>(&variables).await?.create_post;
        if let Some(post) = &created {
            self.with_cache(|cache| cache.write_post(post));
        }
        Ok(created)
    }

    async fn update_post(&self, id: &PostId, input: &PostInput) -> Result<Option<Post>> {
        let variables = UpdatePostVariables {
            id: id.clone(),
            input: input.clone(),
        };
        let updated = self.execute::<UpdatePost>(&variables).await?.update_post;
        if let Some(post) = &updated {
            self.with_cache(|cache| cache.write_post(post));
        }
        Ok(updated)
    }

    async fn delete_post(&self, id: &PostId) -> Result<bool> {
        let variables = DeletePostVariables { id: id.clone() };
        let deleted = self
            .execute::<DeletePost>(&variables)
            .await?
            .delete_post
            .unwrap_or(false);
        if deleted {
            self.with_cache(|cache| cache.evict_post(id));
        }
        Ok(deleted)
    }
}
