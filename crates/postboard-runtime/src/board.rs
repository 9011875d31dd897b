//! Root state machine.
//!
//! `Loading -> Ready | Error`. `Error` is terminal. All list changes happen
//! only when an outcome arrives; nothing is applied optimistically.

use postboard_types::{DisplayedPost, PageQueryOptions, Post, PostId};
use tracing::{debug, info, warn};

use crate::action::{Action, Effect, Outcome};
use crate::modal::Modal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Error(String),
    Ready,
}

#[derive(Debug)]
pub struct Board {
    load: LoadState,
    posts: Vec<DisplayedPost>,
    modal: Option<Modal>,
    is_updating: bool,
    in_flight: usize,
}

impl Board {
    /// A board in `Loading` plus the initial fetch it needs.
    pub fn start(options: PageQueryOptions) -> (Self, Effect) {
        let board = Self {
            load: LoadState::Loading,
            posts: Vec::new(),
            modal: None,
            is_updating: false,
            in_flight: 0,
        };
        (board, Effect::FetchPosts(options))
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_ready(&self) -> bool {
        self.load == LoadState::Ready
    }

    pub fn posts(&self) -> &[DisplayedPost] {
        &self.posts
    }

    pub fn selected(&self) -> Option<&DisplayedPost> {
        self.posts.iter().find(|p| p.is_selected)
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut Modal> {
        self.modal.as_mut()
    }

    pub fn is_updating(&self) -> bool {
        self.is_updating
    }

    /// Mutations sent but not yet resolved.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn update(&mut self, action: Action) -> Option<Effect> {
        let action = match action {
            Action::Resolved(outcome) => {
                self.resolve(outcome);
                return None;
            }
            other => other,
        };

        if !self.is_ready() {
            return None;
        }

        let effect = match action {
            Action::ToggleSelect(index) => {
                self.toggle(index);
                None
            }
            Action::OpenCreate => {
                self.is_updating = false;
                self.modal = Some(Modal::open(None, false));
                None
            }
            Action::OpenUpdate => {
                if let Some(selected) = self.selected() {
                    let modal = Modal::open(Some(&selected.post), true);
                    self.is_updating = true;
                    self.modal = Some(modal);
                }
                None
            }
            Action::CloseModal => {
                self.modal = None;
                None
            }
            Action::Submit => self.submit(),
            Action::Delete => self
                .selected()
                .map(|selected| Effect::DeletePost(selected.id().clone())),
            Action::Resolved(_) => None,
        };

        if let Some(effect) = &effect {
            self.in_flight += 1;
            debug!(operation = effect.name(), in_flight = self.in_flight, "mutation issued");
        }
        effect
    }

    fn toggle(&mut self, index: usize) {
        if index >= self.posts.len() {
            return;
        }
        for (i, post) in self.posts.iter_mut().enumerate() {
            post.is_selected = if i == index { !post.is_selected } else { false };
        }
    }

    fn submit(&mut self) -> Option<Effect> {
        let draft = self.modal.as_ref()?.draft().clone();

        if self.is_updating {
            let selected = self.selected()?;
            Some(Effect::UpdatePost {
                id: selected.id().clone(),
                input: draft,
            })
        } else {
            Some(Effect::CreatePost(draft))
        }
    }

    fn resolve(&mut self, outcome: Outcome) {
        if outcome.is_mutation() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }

        match outcome {
            Outcome::PostsLoaded(result) => self.on_posts_loaded(result),
            _ if !self.is_ready() => {
                debug!("ignoring mutation outcome outside ready state");
            }
            Outcome::PostCreated(Ok(Some(post))) => {
                info!(id = %post.id, "post created");
                self.modal = None;
                self.posts.insert(0, DisplayedPost::created(post));
            }
            Outcome::PostUpdated {
                id,
                result: Ok(Some(post)),
            } => {
                info!(id = %id, "post updated");
                self.modal = None;
                self.is_updating = false;
                self.replace(&id, post);
            }
            Outcome::PostDeleted {
                id,
                result: Ok(true),
            } => {
                info!(id = %id, "post deleted");
                self.posts.retain(|p| p.id() != &id);
            }
            Outcome::PostCreated(Err(err))
            | Outcome::PostUpdated {
                result: Err(err), ..
            }
            | Outcome::PostDeleted {
                result: Err(err), ..
            } => {
                warn!(error = %err, "mutation failed; state left unchanged");
            }
            Outcome::PostCreated(Ok(None))
            | Outcome::PostUpdated { result: Ok(None), .. }
            | Outcome::PostDeleted {
                result: Ok(false), ..
            } => {
                warn!("mutation returned no data; state left unchanged");
            }
        }
    }

    fn on_posts_loaded(&mut self, result: Result<Vec<Post>, postboard_client::Error>) {
        if self.load != LoadState::Loading {
            return;
        }
        match result {
            Ok(posts) => {
                info!(count = posts.len(), "posts loaded");
                self.posts = posts.into_iter().map(DisplayedPost::fetched).collect();
                self.load = LoadState::Ready;
            }
            Err(err) => {
                warn!(error = %err, "initial posts query failed");
                self.load = LoadState::Error(err.to_string());
            }
        }
    }

    /// Swap in the server's copy. The replacement carries no client flags.
    fn replace(&mut self, id: &PostId, post: Post) {
        if let Some(slot) = self.posts.iter_mut().find(|p| p.id() == id) {
            *slot = DisplayedPost::fetched(post);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_client::{Error as ClientError, GraphQlError};
    use postboard_types::PostInput;

    fn post(id: u64) -> Post {
        Post {
            id: PostId::from(id),
            title: format!("title {}", id),
            body: format!("body {}", id),
            user: None,
        }
    }

    fn ready_board(ids: &[u64]) -> Board {
        let (mut board, _) = Board::start(PageQueryOptions::default());
        let posts = ids.iter().map(|id| post(*id)).collect();
        board.update(Action::Resolved(Outcome::PostsLoaded(Ok(posts))));
        board
    }

    fn selection(board: &Board) -> Vec<bool> {
        board.posts().iter().map(|p| p.is_selected).collect()
    }

    #[test]
    fn test_start_requests_latest_posts() {
        let (board, effect) = Board::start(PageQueryOptions::default());
        assert_eq!(board.load_state(), &LoadState::Loading);
        assert_eq!(effect, Effect::FetchPosts(PageQueryOptions::latest(10)));
    }

    #[test]
    fn test_loaded_posts_have_clear_flags() {
        let board = ready_board(&[3, 2, 1]);
        assert!(board.is_ready());
        assert!(board.posts().iter().all(|p| !p.is_selected && !p.is_new));
    }

    #[test]
    fn test_toggle_is_single_selection() {
        let mut board = ready_board(&[3, 2, 1]);

        board.update(Action::ToggleSelect(0));
        board.update(Action::ToggleSelect(2));
        assert_eq!(selection(&board), vec![false, false, true]);

        board.update(Action::ToggleSelect(2));
        assert_eq!(selection(&board), vec![false, false, false]);
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let mut board = ready_board(&[1]);
        board.update(Action::ToggleSelect(0));
        board.update(Action::ToggleSelect(9));
        assert_eq!(selection(&board), vec![true]);
    }

    #[test]
    fn test_actions_ignored_while_loading() {
        let (mut board, _) = Board::start(PageQueryOptions::default());
        assert!(board.update(Action::OpenCreate).is_none());
        assert!(board.modal().is_none());
    }

    #[test]
    fn test_open_update_requires_selection() {
        let mut board = ready_board(&[1]);
        board.update(Action::OpenUpdate);
        assert!(board.modal().is_none());
        assert!(!board.is_updating());
    }

    #[test]
    fn test_open_create_clears_updating() {
        let mut board = ready_board(&[1]);
        board.update(Action::ToggleSelect(0));
        board.update(Action::OpenUpdate);
        assert!(board.is_updating());

        board.update(Action::CloseModal);
        board.update(Action::OpenCreate);
        assert!(!board.is_updating());
        assert_eq!(board.modal().unwrap().draft(), &PostInput::default());
    }

    #[test]
    fn test_submit_without_modal_does_nothing() {
        let mut board = ready_board(&[1]);
        assert!(board.update(Action::Submit).is_none());
        assert_eq!(board.in_flight(), 0);
    }

    #[test]
    fn test_failed_mutation_keeps_modal_and_list() {
        let mut board = ready_board(&[1]);
        board.update(Action::OpenCreate);
        board.update(Action::Submit);

        board.update(Action::Resolved(Outcome::PostCreated(Err(
            ClientError::GraphQl(vec![GraphQlError::new("boom")]),
        ))));

        assert!(board.modal().is_some());
        assert_eq!(board.posts().len(), 1);
        assert_eq!(board.in_flight(), 0);
    }

    #[test]
    fn test_delete_false_keeps_post() {
        let mut board = ready_board(&[5]);
        board.update(Action::ToggleSelect(0));
        board.update(Action::Delete);
        board.update(Action::Resolved(Outcome::PostDeleted {
            id: PostId::from(5),
            result: Ok(false),
        }));
        assert_eq!(board.posts().len(), 1);
    }

    #[test]
    fn test_query_failure_is_terminal() {
        let (mut board, _) = Board::start(PageQueryOptions::default());
        board.update(Action::Resolved(Outcome::PostsLoaded(Err(
            ClientError::MissingData("Posts"),
        ))));

        assert_eq!(
            board.load_state(),
            &LoadState::Error("No data returned for Posts".to_string())
        );

        board.update(Action::Resolved(Outcome::PostsLoaded(Ok(vec![post(1)]))));
        assert!(!board.is_ready());
        assert!(board.posts().is_empty());
    }
}
