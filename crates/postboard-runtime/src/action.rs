//! Messages in and out of the board.
//!
//! ```text
//! Action --> Board::update() --> Option<Effect> --> Dispatcher
//!   ^                                                   |
//!   +----------------- Action::Resolved(Outcome) <------+
//! ```

use postboard_client::Error as ClientError;
use postboard_types::{PageQueryOptions, Post, PostId, PostInput};

#[derive(Debug)]
pub enum Action {
    /// Flip selection of the item at this index, clearing all others
    ToggleSelect(usize),
    /// Open the modal in create mode with an empty draft
    OpenCreate,
    /// Open the modal in update mode, seeded from the selected post
    OpenUpdate,
    /// Close the modal, discarding the draft
    CloseModal,
    /// Send the modal's draft as a create or update
    Submit,
    /// Delete the selected post
    Delete,
    /// An effect finished
    Resolved(Outcome),
}

/// Work the board wants done against the API.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchPosts(PageQueryOptions),
    CreatePost(PostInput),
    UpdatePost { id: PostId, input: PostInput },
    DeletePost(PostId),
}

impl Effect {
    pub fn name(&self) -> &'static str {
        match self {
            Effect::FetchPosts(_) => "Posts",
            Effect::CreatePost(_) => "CreatePost",
            Effect::UpdatePost { .. } => "UpdatePost",
            Effect::DeletePost(_) => "DeletePost",
        }
    }

    pub fn is_mutation(&self) -> bool {
        !matches!(self, Effect::FetchPosts(_))
    }
}

/// Result of running an [`Effect`].
#[derive(Debug)]
pub enum Outcome {
    PostsLoaded(Result<Vec<Post>, ClientError>),
    PostCreated(Result<Option<Post>, ClientError>),
    PostUpdated {
        id: PostId,
        result: Result<Option<Post>, ClientError>,
    },
    PostDeleted {
        id: PostId,
        result: Result<bool, ClientError>,
    },
}

impl Outcome {
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Outcome::PostsLoaded(_))
    }
}
