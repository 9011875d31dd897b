//! Runs effects on a tokio runtime and reports outcomes over a channel.
//!
//! Effects are fire-and-forget: each runs as its own task, several may be in
//! flight, and outcomes arrive in completion order.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use postboard_client::PostsApi;
use tokio::runtime::Handle;
use tracing::debug;

use crate::action::{Effect, Outcome};

/// Execute one effect against the API.
pub async fn run_effect(api: &dyn PostsApi, effect: Effect) -> Outcome {
    match effect {
        Effect::FetchPosts(options) => Outcome::PostsLoaded(api.posts(&options).await),
        Effect::CreatePost(input) => Outcome::PostCreated(api.create_post(&input).await),
        Effect::UpdatePost { id, input } => {
            let result = api.update_post(&id, &input).await;
            Outcome::PostUpdated { id, result }
        }
        Effect::DeletePost(id) => {
            let result = api.delete_post(&id).await;
            Outcome::PostDeleted { id, result }
        }
    }
}

pub struct Dispatcher {
    api: Arc<dyn PostsApi>,
    handle: Handle,
    tx: Sender<Outcome>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn PostsApi>, handle: Handle) -> (Self, Receiver<Outcome>) {
        let (tx, rx) = mpsc::channel();
        (Self { api, handle, tx }, rx)
    }

    pub fn dispatch(&self, effect: Effect) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        debug!(operation = effect.name(), "dispatching effect");

        self.handle.spawn(async move {
            let outcome = run_effect(api.as_ref(), effect).await;
            // Receiver is gone once the UI has quit.
            let _ = tx.send(outcome);
        });
    }
}
