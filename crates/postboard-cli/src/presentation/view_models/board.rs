//! Snapshot of the board handed to the TUI views each frame.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum BoardStatus {
    Loading,
    Error { message: String },
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostItemViewModel {
    pub id: String,
    pub title: String,
    pub body: String,
    pub is_selected: bool,
    pub is_new: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusTarget {
    Title,
    Body,
    Cancel,
    Send,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalViewModel {
    pub heading: String,
    pub title: String,
    pub body: String,
    pub focus: FocusTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardViewModel {
    pub header: String,
    pub status: BoardStatus,
    pub posts: Vec<PostItemViewModel>,
    pub modal: Option<ModalViewModel>,
    pub selected_id: Option<String>,
    pub in_flight: usize,
}
