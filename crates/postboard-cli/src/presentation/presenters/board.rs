use postboard_runtime::{Board, LoadState, Modal, ModalField};

use crate::presentation::view_models::{
    BoardStatus, BoardViewModel, FocusTarget, ModalViewModel, PostItemViewModel,
};

pub const BOARD_HEADER: &str = "Posts";

impl From<ModalField> for FocusTarget {
    fn from(field: ModalField) -> Self {
        match field {
            ModalField::Title => FocusTarget::Title,
            ModalField::Body => FocusTarget::Body,
            ModalField::Cancel => FocusTarget::Cancel,
            ModalField::Send => FocusTarget::Send,
        }
    }
}

fn present_modal(modal: &Modal) -> ModalViewModel {
    ModalViewModel {
        heading: modal.heading().to_string(),
        title: modal.draft().title.clone(),
        body: modal.draft().body.clone(),
        focus: modal.focus().into(),
    }
}

pub fn present_board(board: &Board) -> BoardViewModel {
    let status = match board.load_state() {
        LoadState::Loading => BoardStatus::Loading,
        LoadState::Error(message) => BoardStatus::Error {
            message: message.clone(),
        },
        LoadState::Ready => BoardStatus::Ready,
    };

    let posts = board
        .posts()
        .iter()
        .map(|p| PostItemViewModel {
            id: p.id().to_string(),
            title: p.title().to_string(),
            body: p.body().to_string(),
            is_selected: p.is_selected,
            is_new: p.is_new,
        })
        .collect();

    BoardViewModel {
        header: BOARD_HEADER.to_string(),
        status,
        posts,
        modal: board.modal().map(present_modal),
        selected_id: board.selected().map(|p| p.id().to_string()),
        in_flight: board.in_flight(),
    }
}
