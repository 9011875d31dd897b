use serde::Serialize;

use crate::{Post, PostId};

/// A post as held by the UI: the server record plus client-only flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayedPost {
    #[serde(flatten)]
    pub post: Post,
    pub is_selected: bool,
    /// Set when the post was created in this run. Never cleared.
    pub is_new: bool,
}

impl DisplayedPost {
    /// Wrap a post fetched from the server.
    pub fn fetched(post: Post) -> Self {
        Self {
            post,
            is_selected: false,
            is_new: false,
        }
    }

    /// Wrap a post returned by a create mutation.
    pub fn created(post: Post) -> Self {
        Self {
            post,
            is_selected: false,
            is_new: true,
        }
    }

    pub fn id(&self) -> &PostId {
        &self.post.id
    }

    pub fn title(&self) -> &str {
        &self.post.title
    }

    pub fn body(&self) -> &str {
        &self.post.body
    }
}
