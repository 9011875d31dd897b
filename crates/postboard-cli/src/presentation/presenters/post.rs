use postboard_types::{Post, PostId};

use crate::presentation::view_models::{
    CommandResultViewModel, DeleteResultViewModel, Guidance, MutationKind, PostListViewModel,
    PostResultViewModel, PostViewModel, StatusBadge,
};

fn post_view_model(post: Post) -> PostViewModel {
    let author = post
        .user
        .map(|user| user.name.or(user.email).unwrap_or_else(|| user.id.to_string()));

    PostViewModel {
        id: post.id.to_string(),
        title: post.title,
        body: post.body,
        author,
    }
}

pub fn present_post_list(posts: Vec<Post>, limit: u32) -> CommandResultViewModel<PostListViewModel> {
    let posts: Vec<PostViewModel> = posts.into_iter().map(post_view_model).collect();
    let empty = posts.is_empty();

    let mut result = CommandResultViewModel::new(PostListViewModel { posts, limit });
    if empty {
        result = result.with_suggestion(
            Guidance::new("Create the first post").with_command("postboard create --title <T> --body <B>"),
        );
    }
    result
}

pub fn present_created(post: Option<Post>) -> CommandResultViewModel<PostResultViewModel> {
    present_mutation(MutationKind::Created, post)
}

pub fn present_updated(post: Option<Post>) -> CommandResultViewModel<PostResultViewModel> {
    present_mutation(MutationKind::Updated, post)
}

fn present_mutation(
    kind: MutationKind,
    post: Option<Post>,
) -> CommandResultViewModel<PostResultViewModel> {
    let post = post.map(post_view_model);

    let badge = match (&post, kind) {
        (Some(post), MutationKind::Created) => {
            StatusBadge::success(format!("Created post {}", post.id))
        }
        (Some(post), MutationKind::Updated) => {
            StatusBadge::success(format!("Updated post {}", post.id))
        }
        (None, _) => StatusBadge::warning("Server returned no post"),
    };

    CommandResultViewModel::new(PostResultViewModel { kind, post }).with_badge(badge)
}

pub fn present_deleted(id: &PostId, deleted: bool) -> CommandResultViewModel<DeleteResultViewModel> {
    let badge = if deleted {
        StatusBadge::success(format!("Deleted post {}", id))
    } else {
        StatusBadge::warning(format!("Post {} was not deleted", id))
    };

    CommandResultViewModel::new(DeleteResultViewModel {
        id: id.to_string(),
        deleted,
    })
    .with_badge(badge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_types::{User, UserId};

    #[test]
    fn test_author_falls_back_to_email() {
        let post = Post {
            id: PostId::from(1),
            title: "t".to_string(),
            body: "b".to_string(),
            user: Some(User {
                id: UserId::from(9),
                name: None,
                email: Some("a@b.c".to_string()),
            }),
        };

        let vm = present_post_list(vec![post], 10);
        assert_eq!(vm.content.posts[0].author.as_deref(), Some("a@b.c"));
        assert!(vm.suggestions.is_empty());
    }

    #[test]
    fn test_json_envelope_shape() {
        let vm = present_deleted(&PostId::from(5), true);
        let json = serde_json::to_value(&vm).unwrap();

        assert_eq!(json["content"], serde_json::json!({"id": "5", "deleted": true}));
        assert_eq!(json["badge"]["level"], "success");
    }
}
