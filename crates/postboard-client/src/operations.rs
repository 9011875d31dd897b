//! The operations the application sends.
//!
//! Each operation pairs a static document with typed variables and a typed
//! `data` payload, so the client can be generic over them.

use postboard_types::{PageQueryOptions, Post, PostId, PostInput};
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::Value;

pub trait Operation {
    const NAME: &'static str;
    const DOCUMENT: &'static str;
    type Variables: Serialize + Send + Sync;
    type Data: DeserializeOwned;
}

pub struct Posts;
pub struct PostById;
pub struct CreatePost;
pub struct UpdatePost;
pub struct DeletePost;

pub const POSTS_DOCUMENT: &str = r#"query Posts($options: PageQueryOptions) {
  posts(options: $options) {
    data {
      id
      title
      body
      user {
        id
        name
        email
      }
    }
  }
}"#;

pub const POST_DOCUMENT: &str = r#"query Post($id: ID!) {
  post(id: $id) {
    id
    title
    body
    user {
      id
      name
      email
    }
  }
}"#;

pub const CREATE_POST_DOCUMENT: &str = r#"mutation CreatePost($input: CreatePostInput!) {
  createPost(input: $input) {
    id
    title
    body
    user {
      id
      name
      email
    }
  }
}"#;

pub const UPDATE_POST_DOCUMENT: &str = r#"mutation UpdatePost($id: ID!, $input: UpdatePostInput!) {
  updatePost(id: $id, input: $input) {
    id
    title
    body
    user {
      id
      name
      email
    }
  }
}"#;

pub const DELETE_POST_DOCUMENT: &str = r#"mutation DeletePost($id: ID!) {
  deletePost(id: $id)
}"#;

/// Decode one post object, or `None` when the server sent `null` or a
/// record whose `id` is `null` (how a lookup for a missing id comes back).
fn record_to_post<E: serde::de::Error>(value: Value) -> Result<Option<Post>, E> {
    if value.get("id").is_none_or(Value::is_null) {
        return Ok(None);
    }
    serde_json::from_value(value).map(Some).map_err(E::custom)
}

fn nullable_post<'de, D>(deserializer: D) -> Result<Option<Post>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value) => record_to_post(value),
        None => Ok(None),
    }
}

fn nullable_post_list<'de, D>(deserializer: D) -> Result<Option<Vec<Post>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(records) = Option::<Vec<Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let mut posts = Vec::with_capacity(records.len());
    for record in records {
        if let Some(post) = record_to_post(record)? {
            posts.push(post);
        }
    }
    Ok(Some(posts))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostsVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<PageQueryOptions>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostsPage {
    #[serde(default, deserialize_with = "nullable_post_list")]
    pub data: Option<Vec<Post>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostsData {
    pub posts: Option<PostsPage>,
}

impl PostsData {
    /// Flatten the nullable `posts.data` path into a list.
    pub fn into_posts(self) -> Vec<Post> {
        self.posts.and_then(|page| page.data).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostVariables {
    pub id: PostId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostData {
    #[serde(default, deserialize_with = "nullable_post")]
    pub post: Option<Post>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePostVariables {
    pub input: PostInput,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostData {
    #[serde(rename = "createPost", default, deserialize_with = "nullable_post")]
    pub create_post: Option<Post>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePostVariables {
    pub id: PostId,
    pub input: PostInput,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePostData {
    #[serde(rename = "updatePost", default, deserialize_with = "nullable_post")]
    pub update_post: Option<Post>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletePostVariables {
    pub id: PostId,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeletePostData {
    #[serde(rename = "deletePost")]
    pub delete_post: Option<bool>,
}

impl Operation for Posts {
    const NAME: &'static str = "Posts";
    const DOCUMENT: &'static str = POSTS_DOCUMENT;
    type Variables = PostsVariables;
    type Data = PostsData;
}

impl Operation for PostById {
    const NAME: &'static str = "Post";
    const DOCUMENT: &'static str = POST_DOCUMENT;
    type Variables = PostVariables;
    type Data = PostData;
}

impl Operation for CreatePost {
    const NAME: &'static str = "CreatePost";
    const DOCUMENT: &'static str = CREATE_POST_DOCUMENT;
    type Variables = CreatePostVariables;
    type Data = CreatePostData;
}

impl Operation for UpdatePost {
    const NAME: &'static str = "UpdatePost";
    const DOCUMENT: &'static str = UPDATE_POST_DOCUMENT;
    type Variables = UpdatePostVariables;
    type Data = UpdatePostData;
}

impl Operation for DeletePost {
    const NAME: &'static str = "DeletePost";
    const DOCUMENT: &'static str = DELETE_POST_DOCUMENT;
    type Variables = DeletePostVariables;
    type Data = DeletePostData;
}
