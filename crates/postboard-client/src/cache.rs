//! Normalized in-memory response cache.
//!
//! Entities are stored once by identifier. Query results are stored as
//! ordered lists of post ids keyed by the serialized query variables, and are
//! re-assembled from the entity tables on read.

use std::collections::HashMap;

use postboard_types::{Post, PostId, User, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
struct PostRecord {
    title: String,
    body: String,
    user: Option<UserId>,
}

#[derive(Debug, Default)]
pub struct ResponseCache {
    posts: HashMap<PostId, PostRecord>,
    users: HashMap<UserId, User>,
    lists: HashMap<String, Vec<PostId>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_post(&mut self, post: &Post) {
        let user = post.user.as_ref().map(|user| {
            self.users.insert(user.id.clone(), user.clone());
            user.id.clone()
        });
        self.posts.insert(
            post.id.clone(),
            PostRecord {
                title: post.title.clone(),
                body: post.body.clone(),
                user,
            },
        );
    }

    pub fn read_post(&self, id: &PostId) -> Option<Post> {
        let record = self.posts.get(id)?;
        Some(Post {
            id: id.clone(),
            title: record.title.clone(),
            body: record.body.clone(),
            user: record
                .user
                .as_ref()
                .and_then(|user_id| self.users.get(user_id).cloned()),
        })
    }

    pub fn write_list(&mut self, key: impl Into<String>, posts: &[Post]) {
        for post in posts {
            self.write_post(post);
        }
        self.lists
            .insert(key.into(), posts.iter().map(|p| p.id.clone()).collect());
    }

    /// Returns `None` on a miss, or when any referenced post has been evicted.
    pub fn read_list(&self, key: &str) -> Option<Vec<Post>> {
        self.lists
            .get(key)?
            .iter()
            .map(|id| self.read_post(id))
            .collect()
    }

    /// Drop a post and every reference to it from cached lists.
    pub fn evict_post(&mut self, id: &PostId) {
        self.posts.remove(id);
        for ids in self.lists.values_mut() {
            ids.retain(|cached| cached != id);
        }
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, title: &str, user: Option<User>) -> Post {
        Post {
            id: PostId::from(id),
            title: title.to_string(),
            body: format!("body {}", id),
            user,
        }
    }

    fn user(id: u64, name: &str) -> User {
        User {
            id: UserId::from(id),
            name: Some(name.to_string()),
            email: None,
        }
    }

    #[test]
    fn test_list_round_trip_preserves_order() {
        let mut cache = ResponseCache::new();
        let posts = vec![post(3, "c", None), post(1, "a", Some(user(9, "ann")))];
        cache.write_list("k", &posts);

        assert_eq!(cache.read_list("k").unwrap(), posts);
        assert!(cache.read_list("other").is_none());
    }

    #[test]
    fn test_entity_update_is_visible_through_lists() {
        let mut cache = ResponseCache::new();
        cache.write_list("k", &[post(1, "old", None), post(2, "b", None)]);
        cache.write_post(&post(1, "new", None));

        let titles: Vec<String> = cache
            .read_list("k")
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["new", "b"]);
    }

    #[test]
    fn test_shared_user_is_normalized() {
        let mut cache = ResponseCache::new();
        cache.write_list("k", &[post(1, "a", Some(user(9, "ann")))]);
        cache.write_post(&post(2, "b", Some(user(9, "anna"))));

        let first = cache.read_post(&PostId::from(1)).unwrap();
        assert_eq!(first.user.unwrap().name.as_deref(), Some("anna"));
    }

    #[test]
    fn test_evict_removes_from_lists() {
        let mut cache = ResponseCache::new();
        cache.write_list("k", &[post(5, "a", None), post(4, "b", None)]);
        cache.evict_post(&PostId::from(5));

        let ids: Vec<PostId> = cache
            .read_list("k")
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![PostId::from(4)]);
        assert_eq!(cache.post_count(), 1);
    }
}
