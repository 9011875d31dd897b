use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostViewModel {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostListViewModel {
    pub posts: Vec<PostViewModel>,
    pub limit: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    Created,
    Updated,
}

/// Result of a create or update. `post` is `None` when the server answered
/// with a null payload.
#[derive(Debug, Clone, Serialize)]
pub struct PostResultViewModel {
    pub kind: MutationKind,
    pub post: Option<PostViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteResultViewModel {
    pub id: String,
    pub deleted: bool,
}
