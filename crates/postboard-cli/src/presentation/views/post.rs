use std::fmt;

use crate::presentation::view_models::{
    DeleteResultViewModel, MutationKind, PostListViewModel, PostResultViewModel, PostViewModel,
};

const BODY_PREVIEW_CHARS: usize = 60;

fn preview(body: &str) -> String {
    let first_line = body.lines().next().unwrap_or("");
    let mut chars = first_line.chars();
    let mut preview: String = chars.by_ref().take(BODY_PREVIEW_CHARS).collect();
    if chars.next().is_some() || body.lines().nth(1).is_some() {
        preview.push('…');
    }
    preview
}

fn write_post(f: &mut fmt::Formatter, post: &PostViewModel) -> fmt::Result {
    writeln!(f, "ID:     {}", post.id)?;
    writeln!(f, "Title:  {}", post.title)?;
    if let Some(author) = &post.author {
        writeln!(f, "Author: {}", author)?;
    }
    writeln!(f)?;
    for line in post.body.lines() {
        writeln!(f, "  {}", line)?;
    }
    Ok(())
}

impl fmt::Display for PostListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.posts.is_empty() {
            return writeln!(f, "No posts.");
        }

        writeln!(f, "{:<6} {:<40} BODY", "ID", "TITLE")?;
        writeln!(f, "{}", "-".repeat(100))?;

        for post in &self.posts {
            let title: String = post.title.chars().take(40).collect();
            writeln!(f, "{:<6} {:<40} {}", post.id, title, preview(&post.body))?;
        }

        writeln!(f)?;
        writeln!(f, "{} post(s), newest first (limit {})", self.posts.len(), self.limit)
    }
}

impl fmt::Display for PostResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.post {
            Some(post) => write_post(f, post),
            None => match self.kind {
                MutationKind::Created => writeln!(f, "Nothing was created."),
                MutationKind::Updated => writeln!(f, "Nothing was updated."),
            },
        }
    }
}

impl fmt::Display for DeleteResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.deleted {
            writeln!(f, "Post {} removed.", self.id)
        } else {
            writeln!(f, "Post {} is unchanged.", self.id)
        }
    }
}
