//! Sample posts shaped like the public demo API's records.

use postboard_types::{Post, PostId, User, UserId};

pub fn user(id: u64) -> User {
    User {
        id: UserId::from(id),
        name: Some(format!("User {}", id)),
        email: Some(format!("user{}@example.com", id)),
    }
}

pub fn post(id: u64, title: &str, body: &str) -> Post {
    Post {
        id: PostId::from(id),
        title: title.to_string(),
        body: body.to_string(),
        user: Some(user(1)),
    }
}

/// Posts with ids `1..=count`, in ascending id order.
pub fn sample_posts(count: u64) -> Vec<Post> {
    (1..=count)
        .map(|id| post(id, &format!("Post {}", id), &format!("Body of post {}", id)))
        .collect()
}
